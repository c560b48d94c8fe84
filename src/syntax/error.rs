//! Error taxonomy for the converter
//!
//! Every failure is fatal to the run: the converter returns at the first
//! error and the caller decides how to report it. There is no retry policy.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Error that can occur during a conversion pass
#[derive(Debug)]
pub enum ConvertError {
    /// The source directory could not be enumerated
    ReadDir { path: PathBuf, source: io::Error },
    /// A source entry could not be read
    ReadFile { path: PathBuf, source: io::Error },
    /// A source entry is not a well-formed YAML document
    Parse { path: PathBuf, message: String },
    /// A definition value could not be serialized to JSON
    Serialize { path: PathBuf, message: String },
    /// An output file could not be created or written
    CreateFile { path: PathBuf, source: io::Error },
    /// A diagnostic line could not be written to the sink
    Diagnostics { source: io::Error },
}

impl fmt::Display for ConvertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConvertError::ReadDir { path, source } => {
                write!(f, "Cannot read directory {}: {}", path.display(), source)
            }
            ConvertError::ReadFile { path, source } => {
                write!(f, "Cannot read file {}: {}", path.display(), source)
            }
            ConvertError::Parse { path, message } => {
                write!(f, "Cannot parse {}: {}", path.display(), message)
            }
            ConvertError::Serialize { path, message } => {
                write!(f, "Serialization error for {}: {}", path.display(), message)
            }
            ConvertError::CreateFile { path, source } => {
                write!(f, "Cannot create file {}: {}", path.display(), source)
            }
            ConvertError::Diagnostics { source } => {
                write!(f, "Cannot write diagnostics: {}", source)
            }
        }
    }
}

impl std::error::Error for ConvertError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConvertError::ReadDir { source, .. }
            | ConvertError::ReadFile { source, .. }
            | ConvertError::CreateFile { source, .. }
            | ConvertError::Diagnostics { source } => Some(source),
            ConvertError::Parse { .. } | ConvertError::Serialize { .. } => None,
        }
    }
}
