//! Clausegen - Content query clause translation
//!
//! This crate turns storage-agnostic content query clauses into SQL query
//! builder instructions:
//! - Clause model: sort clauses and field aggregations (`query_model`)
//! - Translators, one per clause kind, dispatched first-match by an ordered
//!   registry (`translator`)
//! - A query builder adapter collecting order-by, aggregation and join
//!   instructions and rendering them to SQL (`query_builder`)
//! - Field definition metadata resolving logical fields to columns
//!   (`field_catalog`)
//!
//! ```ignore
//! let catalog = Arc::new(FieldCatalog::from_file("catalog.yaml")?);
//! let registry = TranslatorRegistry::with_defaults(&TranslatorConfig::from_env()?, catalog);
//!
//! let mut qb = FilteringQueryBuilder::new("content");
//! registry.translate(&mut qb, &SortClause::ContentName(SortDirection::Desc).into())?;
//! let sql = qb.to_sql();
//! ```

pub mod utils;

pub mod config;
pub mod field_catalog;
pub mod query_builder;
pub mod query_model;
pub mod translator;
