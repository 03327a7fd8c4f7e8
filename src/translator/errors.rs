use thiserror::Error;

use crate::field_catalog::{FieldCatalogError, FieldType};
use crate::query_builder::QueryBuilderError;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum TranslationError {
    /// No registered translator accepts the clause. A missing registration
    /// or a clause nothing can handle; never transient.
    #[error("There are no query builders for {variant}")]
    UnsupportedClauseKind { variant: String },

    #[error("Unknown field definition '{field}' for content type '{content_type}'")]
    UnknownFieldDefinition { content_type: String, field: String },

    #[error("Field '{field}' of content type '{content_type}' is of type {actual}, expected {expected}")]
    IncompatibleFieldType {
        content_type: String,
        field: String,
        actual: FieldType,
        expected: &'static str,
    },

    #[error("Custom field '{custom_field}' for '{field}' of content type '{content_type}' is not a column name")]
    InvalidCustomField {
        content_type: String,
        field: String,
        custom_field: String,
    },

    #[error("Field catalog error: {0}")]
    FieldCatalog(FieldCatalogError),

    #[error("Query builder error: {0}")]
    QueryBuilder(#[from] QueryBuilderError),
}

impl From<FieldCatalogError> for TranslationError {
    fn from(error: FieldCatalogError) -> Self {
        match error {
            FieldCatalogError::UnknownFieldDefinition {
                content_type,
                field,
            } => TranslationError::UnknownFieldDefinition {
                content_type,
                field,
            },
            other => TranslationError::FieldCatalog(other),
        }
    }
}

/// A clause in a batch failed; `index` is its position in the batch.
#[derive(Debug, Clone, Error, PartialEq)]
#[error("Clause #{index} ({variant}) could not be translated: {source}")]
pub struct BatchTranslationError {
    pub index: usize,
    pub variant: String,
    #[source]
    pub source: TranslationError,
}
