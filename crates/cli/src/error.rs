//! Structured CLI errors with meaningful exit codes.
//!
//! Exit code scheme:
//! - 0:  success
//! - 2:  clap arg parse error (automatic, before our code runs)
//! - 10: sketch error (unknown algorithm, bad dimensions, orphaned node)
//! - 11: I/O error (snapshot write)
//! - 12: input error (bad color, bad JSON params)
//! - 13: serialization error

use sapling_core::SaplingError;
use std::fmt;

/// Errors produced by CLI operations, each mapped to a distinct exit code.
pub enum CliError {
    /// A pipeline-level error (unknown algorithm, bad dimensions).
    Sketch(SaplingError),
    /// An I/O error (snapshot write).
    Io(String),
    /// A user input error (bad color, bad JSON params).
    Input(String),
    /// A serialization error (JSON output failure).
    Serialization(String),
}

impl CliError {
    /// Returns the process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Sketch(_) => 10,
            CliError::Io(_) => 11,
            CliError::Input(_) => 12,
            CliError::Serialization(_) => 13,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Sketch(e) => write!(f, "{e}"),
            CliError::Io(msg) => write!(f, "{msg}"),
            CliError::Input(msg) => write!(f, "{msg}"),
            CliError::Serialization(msg) => write!(f, "{msg}"),
        }
    }
}

impl From<SaplingError> for CliError {
    fn from(e: SaplingError) -> Self {
        match e {
            SaplingError::Io(msg) => CliError::Io(msg),
            SaplingError::InvalidColor(msg) => CliError::Input(msg),
            other => CliError::Sketch(other),
        }
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::Serialization(e.to_string())
    }
}
