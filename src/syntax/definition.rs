//! Language definition loading
//!
//! A language definition is the mapping a highlighting engine consumes:
//! keywords, comment delimiters, styles and so on. The converter treats the
//! mapping as opaque: the YAML document is parsed and the value under its
//! `language_data` key is forwarded to the serializer unchanged, in the key
//! order the source produced.

use crate::syntax::error::ConvertError;
use serde::Serialize;
use serde_yaml::Value;
use std::path::Path;

/// Key under which a definition file carries its mapping value.
pub const LANGUAGE_DATA_KEY: &str = "language_data";

/// A language definition loaded from one source file
///
/// Serializes transparently as its inner mapping value, so output files
/// contain the definition itself rather than a wrapper object.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct LanguageDefinition {
    data: Value,
}

impl LanguageDefinition {
    /// Parse a definition from YAML source.
    ///
    /// A document without the `language_data` key is not an error: the
    /// definition value is absent and serializes as JSON `null`. No
    /// validation is performed on the mapping's internal shape.
    pub fn from_str(source: &str, origin: &Path) -> Result<Self, ConvertError> {
        let document: Value =
            serde_yaml::from_str(source).map_err(|e| ConvertError::Parse {
                path: origin.to_path_buf(),
                message: e.to_string(),
            })?;
        let data = document
            .get(LANGUAGE_DATA_KEY)
            .cloned()
            .unwrap_or(Value::Null);
        Ok(LanguageDefinition { data })
    }

    /// Load a definition from a file on disk.
    pub fn from_file(path: &Path) -> Result<Self, ConvertError> {
        let source = std::fs::read_to_string(path).map_err(|e| ConvertError::ReadFile {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_str(&source, path)
    }

    /// The definition's mapping value, `Null` when the document had none.
    pub fn data(&self) -> &Value {
        &self.data
    }

    /// Serialize the definition to pretty-printed JSON.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
