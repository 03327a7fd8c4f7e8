//! Storage-agnostic content query clauses.
//!
//! A [`Clause`] describes how query results should be sorted or aggregated
//! without saying anything about tables or columns. Turning a clause into
//! builder instructions is the job of [`crate::translator`].

use serde::Serialize;

pub mod aggregation;
pub mod custom_fields;
pub mod errors;
pub mod sort_clause;

pub use aggregation::{Aggregation, FieldAggregation, FieldStatsAggregation, StatKind};
pub use custom_fields::{CustomFieldInterface, CustomFields};
pub use errors::ClauseError;
pub use sort_clause::{
    FieldSort, FieldTarget, MapLocationDistance, MapLocationTarget, SortClause, SortDirection,
    SortTarget,
};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Clause {
    Sort(SortClause),
    Aggregation(Aggregation),
}

impl Clause {
    /// Name of the concrete variant, reported when no translator accepts it.
    pub fn variant_name(&self) -> String {
        match self {
            Clause::Sort(sort) => sort.variant_name().to_string(),
            Clause::Aggregation(aggregation) => aggregation.variant_name(),
        }
    }
}

impl From<SortClause> for Clause {
    fn from(value: SortClause) -> Self {
        Clause::Sort(value)
    }
}

impl From<Aggregation> for Clause {
    fn from(value: Aggregation) -> Self {
        Clause::Aggregation(value)
    }
}

impl From<FieldSort> for Clause {
    fn from(value: FieldSort) -> Self {
        Clause::Sort(value.into())
    }
}

impl From<MapLocationDistance> for Clause {
    fn from(value: MapLocationDistance) -> Self {
        Clause::Sort(value.into())
    }
}

impl From<FieldStatsAggregation> for Clause {
    fn from(value: FieldStatsAggregation) -> Self {
        Clause::Aggregation(value.into())
    }
}
