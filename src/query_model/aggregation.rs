use serde::Serialize;
use std::fmt;

use super::errors::ClauseError;

/// Aggregations computed over a single field of a content type.
pub trait FieldAggregation {
    fn content_type_identifier(&self) -> &str;
    fn field_definition_identifier(&self) -> &str;
}

/// Statistic computed by a stats aggregation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum StatKind {
    Min,
    Max,
    Avg,
    Sum,
    Count,
    Cardinality,
}

impl StatKind {
    pub const ALL: [StatKind; 6] = [
        StatKind::Min,
        StatKind::Max,
        StatKind::Avg,
        StatKind::Sum,
        StatKind::Count,
        StatKind::Cardinality,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            StatKind::Min => "min",
            StatKind::Max => "max",
            StatKind::Avg => "avg",
            StatKind::Sum => "sum",
            StatKind::Count => "count",
            StatKind::Cardinality => "cardinality",
        }
    }
}

impl fmt::Display for StatKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Aggregation {
    FieldStats(FieldStatsAggregation),
}

impl Aggregation {
    /// Result alias of the aggregation.
    pub fn name(&self) -> &str {
        match self {
            Aggregation::FieldStats(stats) => stats.name(),
        }
    }

    pub fn variant_name(&self) -> String {
        match self {
            Aggregation::FieldStats(stats) => format!("Aggregation::FieldStats({})", stats.stat),
        }
    }
}

/// A single statistic over one field of one content type.
///
/// All identifiers are fixed at construction.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldStatsAggregation {
    name: String,
    content_type_identifier: String,
    field_definition_identifier: String,
    stat: StatKind,
}

impl FieldStatsAggregation {
    pub fn new(
        name: &str,
        content_type_identifier: &str,
        field_definition_identifier: &str,
        stat: StatKind,
    ) -> Result<Self, ClauseError> {
        ClauseError::require_identifier("Aggregation name", name)?;
        ClauseError::require_identifier("Content type identifier", content_type_identifier)?;
        ClauseError::require_identifier(
            "Field definition identifier",
            field_definition_identifier,
        )?;

        Ok(Self {
            name: name.to_string(),
            content_type_identifier: content_type_identifier.to_string(),
            field_definition_identifier: field_definition_identifier.to_string(),
            stat,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn stat(&self) -> StatKind {
        self.stat
    }
}

impl FieldAggregation for FieldStatsAggregation {
    fn content_type_identifier(&self) -> &str {
        &self.content_type_identifier
    }

    fn field_definition_identifier(&self) -> &str {
        &self.field_definition_identifier
    }
}

impl From<FieldStatsAggregation> for Aggregation {
    fn from(value: FieldStatsAggregation) -> Self {
        Aggregation::FieldStats(value)
    }
}
