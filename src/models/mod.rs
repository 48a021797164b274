//! Data models used throughout the application

pub mod config;
pub mod entry;
pub mod manifest;
pub mod package;
