//! Field definition metadata
//!
//! Translators that work on a content field need to know where the field's
//! value lives. [`FieldColumnResolver`] is that lookup; [`FieldCatalog`] is
//! an in-memory implementation that can be built in code or loaded from a
//! YAML/JSON catalog file (see [`config`]).
//!
//! Every content type stores its field values in one table, joined to the
//! content table on `content_id`.

use serde::{Deserialize, Serialize};
use std::fmt;

pub mod catalog;
pub mod config;
pub mod errors;

pub use catalog::FieldCatalog;
pub use config::FieldCatalogConfig;
pub use errors::FieldCatalogError;

/// Column of a field table holding the owning content id.
pub const FIELD_TABLE_CONTENT_ID: &str = "content_id";

/// Resolves a logical field to the column storing it.
pub trait FieldColumnResolver: Send + Sync {
    fn resolve_column(
        &self,
        content_type_identifier: &str,
        field_definition_identifier: &str,
    ) -> Result<PhysicalColumn, FieldCatalogError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldType {
    String,
    Integer,
    Float,
    Boolean,
    Date,
    /// `(longitude, latitude)` tuple
    MapLocation,
}

impl FieldType {
    pub fn is_numeric(&self) -> bool {
        matches!(self, FieldType::Integer | FieldType::Float)
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FieldType::String => "string",
            FieldType::Integer => "integer",
            FieldType::Float => "float",
            FieldType::Boolean => "boolean",
            FieldType::Date => "date",
            FieldType::MapLocation => "map_location",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhysicalColumn {
    pub table: String,
    pub column: String,
    pub field_type: FieldType,
}

impl PhysicalColumn {
    pub fn new(table: impl Into<String>, column: impl Into<String>, field_type: FieldType) -> Self {
        Self {
            table: table.into(),
            column: column.into(),
            field_type,
        }
    }
}
