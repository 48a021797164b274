//! Output formatting and writing functionality

mod writers;
pub mod xml;

pub use self::writers::{create_writer, FileWriter, OutputWriter, StdoutWriter};

use crate::error::Result;
use crate::models::config::OutputFormat;
use crate::models::manifest::Manifest;

/// Trait for different output formatters
pub trait Formatter {
    /// Format a manifest into a string
    fn format(&self, manifest: &Manifest) -> Result<String>;
}

/// ReaPack index XML formatter
pub struct XmlFormatter;

impl Formatter for XmlFormatter {
    fn format(&self, manifest: &Manifest) -> Result<String> {
        Ok(xml::render_document(&xml::manifest_document(manifest)))
    }
}

/// JSON formatter for machine-readable output
pub struct JsonFormatter {
    pub pretty: bool,
}

impl JsonFormatter {
    /// Create a new JSON formatter
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl Formatter for JsonFormatter {
    fn format(&self, manifest: &Manifest) -> Result<String> {
        let mut rendered = if self.pretty {
            serde_json::to_string_pretty(manifest)?
        } else {
            serde_json::to_string(manifest)?
        };
        rendered.push('\n');
        Ok(rendered)
    }
}

/// Create a formatter based on the output format
pub fn create_formatter(format: OutputFormat) -> Box<dyn Formatter> {
    match format {
        OutputFormat::Xml => Box::new(XmlFormatter),
        OutputFormat::Json => Box::new(JsonFormatter::new(true)),
    }
}
