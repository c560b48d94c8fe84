//! Main module for the syntax conversion functionality

pub mod convert;
pub mod definition;
pub mod error;

pub use convert::Converter;
pub use definition::LanguageDefinition;
pub use error::ConvertError;
