//! Error types and definitions for reaindex
//!
//! Every failure the generator can hit is an [`IndexError`] variant. Each
//! variant carries the context needed to print a useful message, and most
//! capture a backtrace for `RUST_BACKTRACE` runs.

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

// Spelled via an alias so thiserror does not derive the nightly-only
// `Error::provide`; backtraces are exposed through `IndexError::backtrace`.
type CapturedBacktrace = std::backtrace::Backtrace;

/// Error severity levels for different error types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    /// Warning level errors - operation can continue
    Warning,
    /// Error level - current operation fails
    Error,
    /// Critical level - process should terminate
    Critical,
}

impl fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorSeverity::Warning => write!(f, "WARNING"),
            ErrorSeverity::Error => write!(f, "ERROR"),
            ErrorSeverity::Critical => write!(f, "CRITICAL"),
        }
    }
}

/// Main error type for index generation
#[derive(Debug, Error)]
pub enum IndexError {
    /// Standard IO errors
    #[error("IO error: {source}")]
    Io {
        #[source]
        source: std::io::Error,
        #[cfg(not(tarpaulin_include))]
        backtrace: CapturedBacktrace,
    },

    /// Configuration errors
    #[error("Configuration error: {message}")]
    Config {
        message: String,
        #[cfg(not(tarpaulin_include))]
        backtrace: CapturedBacktrace,
    },

    /// Configuration file not found
    #[error("Configuration file not found at {path}")]
    ConfigNotFound {
        path: PathBuf,
        #[cfg(not(tarpaulin_include))]
        backtrace: CapturedBacktrace,
    },

    /// Configuration file read errors
    #[error("Error reading configuration file {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
        #[cfg(not(tarpaulin_include))]
        backtrace: CapturedBacktrace,
    },

    /// Configuration file parse errors
    #[error("Error parsing configuration file {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
        #[cfg(not(tarpaulin_include))]
        backtrace: CapturedBacktrace,
    },

    /// Refusing to overwrite an existing file
    #[error("File already exists: {path}")]
    AlreadyExists {
        path: PathBuf,
        #[cfg(not(tarpaulin_include))]
        backtrace: CapturedBacktrace,
    },

    /// Glob pattern errors
    #[error("Glob pattern error: {source}")]
    GlobPattern {
        #[source]
        source: glob::PatternError,
        #[cfg(not(tarpaulin_include))]
        backtrace: CapturedBacktrace,
    },

    /// Permission denied errors
    #[error("Permission denied accessing {path}")]
    PermissionDenied {
        path: PathBuf,
        #[cfg(not(tarpaulin_include))]
        backtrace: CapturedBacktrace,
    },

    /// Directory traversal errors
    #[error("Directory traversal error for {path}: {message}")]
    DirectoryTraversal {
        path: PathBuf,
        message: String,
        #[cfg(not(tarpaulin_include))]
        backtrace: CapturedBacktrace,
    },

    /// The commit hash could not be read
    #[error("Commit hash unavailable from `{command}`: {details}")]
    CommitUnavailable {
        command: String,
        details: String,
        #[cfg(not(tarpaulin_include))]
        backtrace: CapturedBacktrace,
    },

    /// Output file write errors
    #[error("Error writing to output file {path}: {source}")]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
        #[cfg(not(tarpaulin_include))]
        backtrace: CapturedBacktrace,
    },

    /// Stdout write errors
    #[error("Error writing to stdout: {source}")]
    StdoutWrite {
        #[source]
        source: std::io::Error,
        #[cfg(not(tarpaulin_include))]
        backtrace: CapturedBacktrace,
    },

    /// JSON serialization error
    #[error("JSON serialization error: {source}")]
    JsonSerialize {
        #[source]
        source: serde_json::Error,
        #[cfg(not(tarpaulin_include))]
        backtrace: CapturedBacktrace,
    },

    /// Wrapped error with a caller-supplied message
    #[error("{message}")]
    Context {
        message: String,
        #[cfg(not(tarpaulin_include))]
        backtrace: CapturedBacktrace,
    },
}

impl IndexError {
    /// Get the severity level of this error
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            IndexError::AlreadyExists { .. } => ErrorSeverity::Warning,

            IndexError::Config { .. } => ErrorSeverity::Critical,
            IndexError::ConfigNotFound { .. } => ErrorSeverity::Critical,
            IndexError::ConfigRead { .. } => ErrorSeverity::Critical,
            IndexError::ConfigParse { .. } => ErrorSeverity::Critical,
            IndexError::GlobPattern { .. } => ErrorSeverity::Critical,
            IndexError::CommitUnavailable { .. } => ErrorSeverity::Critical,
            IndexError::OutputWrite { .. } => ErrorSeverity::Critical,
            IndexError::StdoutWrite { .. } => ErrorSeverity::Critical,

            _ => ErrorSeverity::Error,
        }
    }

    /// Check if this is a critical error that should terminate the process
    pub fn is_critical(&self) -> bool {
        self.severity() == ErrorSeverity::Critical
    }

    /// Get a user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            IndexError::PermissionDenied { path, .. } => {
                format!("Cannot access '{}' due to permission denied.", path.display())
            }
            IndexError::Io { source, .. } => {
                format!("File system error: {}.", source)
            }
            IndexError::ConfigNotFound { path, .. } => {
                format!("Configuration file not found at '{}'.", path.display())
            }
            IndexError::CommitUnavailable { command, details, .. } => {
                format!("Could not read the current commit with `{}`: {}", command, details)
            }
            IndexError::AlreadyExists { path, .. } => {
                format!("'{}' already exists. Delete it first to regenerate it.", path.display())
            }
            _ => self.to_string(),
        }
    }

    /// Get a hint for resolving this error, if one applies
    pub fn suggestion(&self) -> Option<&'static str> {
        match self {
            IndexError::CommitUnavailable { .. } => {
                Some("Run inside a git checkout with git on PATH, or pass the hash with --commit")
            }
            IndexError::ConfigNotFound { .. } => {
                Some("Create one with --init or drop the --config option")
            }
            IndexError::ConfigParse { .. } | IndexError::Config { .. } => {
                Some("Check the configuration file against the template written by --init")
            }
            IndexError::PermissionDenied { .. } => {
                Some("Check the permissions of the asset directory")
            }
            IndexError::OutputWrite { .. } => {
                Some("Check that the output directory exists and is writable")
            }
            _ => None,
        }
    }

    /// Get the captured backtrace, if any
    pub fn backtrace(&self) -> Option<&std::backtrace::Backtrace> {
        #[cfg(not(tarpaulin_include))]
        {
            let backtrace = match self {
                IndexError::Io { backtrace, .. }
                | IndexError::Config { backtrace, .. }
                | IndexError::ConfigNotFound { backtrace, .. }
                | IndexError::ConfigRead { backtrace, .. }
                | IndexError::ConfigParse { backtrace, .. }
                | IndexError::AlreadyExists { backtrace, .. }
                | IndexError::GlobPattern { backtrace, .. }
                | IndexError::PermissionDenied { backtrace, .. }
                | IndexError::DirectoryTraversal { backtrace, .. }
                | IndexError::CommitUnavailable { backtrace, .. }
                | IndexError::OutputWrite { backtrace, .. }
                | IndexError::StdoutWrite { backtrace, .. }
                | IndexError::JsonSerialize { backtrace, .. }
                | IndexError::Context { backtrace, .. } => backtrace,
            };

            if backtrace.status() == std::backtrace::BacktraceStatus::Captured {
                return Some(backtrace);
            }
        }

        None
    }

    /// Create an IO error with context
    pub fn io_error(source: std::io::Error) -> Self {
        IndexError::Io {
            source,
            #[cfg(not(tarpaulin_include))]
            backtrace: std::backtrace::Backtrace::capture(),
        }
    }

    /// Create a configuration error
    pub fn config_error(message: impl Into<String>) -> Self {
        IndexError::Config {
            message: message.into(),
            #[cfg(not(tarpaulin_include))]
            backtrace: std::backtrace::Backtrace::capture(),
        }
    }

    /// Create a permission denied error
    pub fn permission_denied(path: impl Into<PathBuf>) -> Self {
        IndexError::PermissionDenied {
            path: path.into(),
            #[cfg(not(tarpaulin_include))]
            backtrace: std::backtrace::Backtrace::capture(),
        }
    }

    /// Create a directory traversal error
    pub fn directory_traversal_error(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        IndexError::DirectoryTraversal {
            path: path.into(),
            message: message.into(),
            #[cfg(not(tarpaulin_include))]
            backtrace: std::backtrace::Backtrace::capture(),
        }
    }

    /// Create a commit-unavailable error
    pub fn commit_unavailable(command: impl Into<String>, details: impl Into<String>) -> Self {
        IndexError::CommitUnavailable {
            command: command.into(),
            details: details.into(),
            #[cfg(not(tarpaulin_include))]
            backtrace: std::backtrace::Backtrace::capture(),
        }
    }

    /// Create an error with a free-form message
    pub fn context_error(message: impl Into<String>) -> Self {
        IndexError::Context {
            message: message.into(),
            #[cfg(not(tarpaulin_include))]
            backtrace: std::backtrace::Backtrace::capture(),
        }
    }
}

impl From<std::io::Error> for IndexError {
    fn from(err: std::io::Error) -> Self {
        IndexError::io_error(err)
    }
}

impl From<glob::PatternError> for IndexError {
    fn from(err: glob::PatternError) -> Self {
        IndexError::GlobPattern {
            source: err,
            #[cfg(not(tarpaulin_include))]
            backtrace: std::backtrace::Backtrace::capture(),
        }
    }
}

impl From<serde_json::Error> for IndexError {
    fn from(err: serde_json::Error) -> Self {
        IndexError::JsonSerialize {
            source: err,
            #[cfg(not(tarpaulin_include))]
            backtrace: std::backtrace::Backtrace::capture(),
        }
    }
}

/// Result type alias for reaindex operations
pub type Result<T> = std::result::Result<T, IndexError>;
