//! Aggregation translators

pub mod field_stats;
mod function_registry;

pub use field_stats::FieldStatsTranslator;
