use std::collections::HashMap;
use std::path::Path;

use super::config::{require_identifier, FieldCatalogConfig};
use super::errors::FieldCatalogError;
use super::{FieldColumnResolver, PhysicalColumn};

/// In-memory (content type, field definition) → column map.
///
/// Read-only once built, so one catalog can back any number of registries
/// and threads.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldCatalog {
    columns: HashMap<(String, String), PhysicalColumn>,
}

impl FieldCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a field. Table and column must be plain SQL identifiers.
    pub fn insert(
        &mut self,
        content_type_identifier: &str,
        field_definition_identifier: &str,
        column: PhysicalColumn,
    ) -> Result<(), FieldCatalogError> {
        require_identifier("content type table", &column.table)?;
        require_identifier("field column", &column.column)?;

        let key = (
            content_type_identifier.to_string(),
            field_definition_identifier.to_string(),
        );
        if self.columns.contains_key(&key) {
            return Err(FieldCatalogError::DuplicateField {
                content_type: key.0,
                field: key.1,
            });
        }
        self.columns.insert(key, column);
        Ok(())
    }

    /// Builder-style [`FieldCatalog::insert`].
    pub fn with_field(
        mut self,
        content_type_identifier: &str,
        field_definition_identifier: &str,
        column: PhysicalColumn,
    ) -> Result<Self, FieldCatalogError> {
        self.insert(content_type_identifier, field_definition_identifier, column)?;
        Ok(self)
    }

    pub fn from_config(config: &FieldCatalogConfig) -> Result<Self, FieldCatalogError> {
        config.validate()?;

        let mut catalog = Self::new();
        for content_type in &config.content_types {
            for field in &content_type.fields {
                catalog.insert(
                    &content_type.identifier,
                    &field.identifier,
                    PhysicalColumn::new(&content_type.table, &field.column, field.field_type),
                )?;
            }
        }

        log::debug!(
            "Field catalog built: {} content types, {} fields",
            config.content_types.len(),
            catalog.len()
        );
        Ok(catalog)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, FieldCatalogError> {
        let config = FieldCatalogConfig::from_file(path)?;
        Self::from_config(&config)
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

impl FieldColumnResolver for FieldCatalog {
    fn resolve_column(
        &self,
        content_type_identifier: &str,
        field_definition_identifier: &str,
    ) -> Result<PhysicalColumn, FieldCatalogError> {
        self.columns
            .get(&(
                content_type_identifier.to_string(),
                field_definition_identifier.to_string(),
            ))
            .cloned()
            .ok_or_else(|| FieldCatalogError::UnknownFieldDefinition {
                content_type: content_type_identifier.to_string(),
                field: field_definition_identifier.to_string(),
            })
    }
}
