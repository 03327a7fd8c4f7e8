/// Field catalog configuration.
///
/// Catalogs are defined in YAML (or JSON) with the following structure:
///
/// ```yaml
/// content_types:
///   - identifier: article          # Content type identifier
///     table: content_article       # Table holding the type's field values
///     fields:
///       - identifier: location     # Field definition identifier
///         column: location_point   # Column in `table`
///         field_type: map_location
///       - identifier: title
///         column: title
///         field_type: string
/// ```
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

use super::errors::FieldCatalogError;
use super::FieldType;
use crate::utils::identifier::is_valid_identifier;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldCatalogConfig {
    pub content_types: Vec<ContentTypeDefinition>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentTypeDefinition {
    pub identifier: String,
    pub table: String,
    #[serde(default)]
    pub fields: Vec<FieldDefinition>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldDefinition {
    pub identifier: String,
    pub column: String,
    pub field_type: FieldType,
}

impl FieldCatalogConfig {
    /// Load a catalog file, picking the format from the extension
    /// (`.json` is JSON, anything else is YAML).
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, FieldCatalogError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|e| FieldCatalogError::ConfigReadError {
            error: format!("{}: {}", path.display(), e),
        })?;

        let is_json = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        log::debug!(
            "Loading field catalog from {} ({})",
            path.display(),
            if is_json { "json" } else { "yaml" }
        );

        if is_json {
            Self::from_json_str(&contents)
        } else {
            Self::from_yaml_str(&contents)
        }
    }

    pub fn from_yaml_str(yaml: &str) -> Result<Self, FieldCatalogError> {
        serde_yaml::from_str(yaml).map_err(|e| FieldCatalogError::ConfigParseError {
            error: e.to_string(),
        })
    }

    pub fn from_json_str(json: &str) -> Result<Self, FieldCatalogError> {
        serde_json::from_str(json).map_err(|e| FieldCatalogError::ConfigParseError {
            error: e.to_string(),
        })
    }

    /// Structural validation: identifiers usable in SQL, no duplicates.
    pub fn validate(&self) -> Result<(), FieldCatalogError> {
        let mut seen_types = HashSet::new();
        for content_type in &self.content_types {
            if !seen_types.insert(content_type.identifier.as_str()) {
                return Err(FieldCatalogError::InvalidConfig {
                    message: format!("Duplicate content type: {}", content_type.identifier),
                });
            }
            require_identifier("content type table", &content_type.table)?;

            let mut seen_fields = HashSet::new();
            for field in &content_type.fields {
                if !seen_fields.insert(field.identifier.as_str()) {
                    return Err(FieldCatalogError::DuplicateField {
                        content_type: content_type.identifier.clone(),
                        field: field.identifier.clone(),
                    });
                }
                require_identifier("field column", &field.column)?;
            }
        }
        Ok(())
    }
}

pub(crate) fn require_identifier(what: &'static str, value: &str) -> Result<(), FieldCatalogError> {
    if !is_valid_identifier(value) {
        return Err(FieldCatalogError::InvalidIdentifier {
            what,
            value: value.to_string(),
        });
    }
    Ok(())
}
