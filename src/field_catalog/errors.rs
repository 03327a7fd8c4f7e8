//! # Field Catalog Error Types
//!
//! - **Lookup errors**: a (content type, field definition) pair the catalog
//!   does not know about
//! - **Configuration errors**: reading, parsing and validating catalog files

use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum FieldCatalogError {
    #[error("Unknown field definition '{field}' for content type '{content_type}'")]
    UnknownFieldDefinition { content_type: String, field: String },

    #[error("Invalid identifier '{value}' for {what} (letters, digits and underscores only)")]
    InvalidIdentifier { what: &'static str, value: String },

    #[error("Duplicate field definition '{field}' for content type '{content_type}'")]
    DuplicateField { content_type: String, field: String },

    #[error("Failed to read catalog file: {error}")]
    ConfigReadError { error: String },

    #[error("Failed to parse catalog: {error}")]
    ConfigParseError { error: String },

    #[error("Invalid catalog: {message}")]
    InvalidConfig { message: String },
}
