/// Stat kind to ClickHouse aggregate function registry
///
/// Maps each statistic a field stats aggregation can request to the SQL
/// aggregate computing it, plus the field types it is defined for.
use std::collections::HashMap;

use crate::field_catalog::FieldType;
use crate::query_model::StatKind;

/// Aggregate function mapping entry
#[derive(Clone)]
pub struct AggregateMapping {
    /// SQL aggregate function name
    pub function_name: &'static str,
    /// Whether the aggregate is defined for a field type
    pub accepts_type: fn(FieldType) -> bool,
    /// Human readable form of `accepts_type`, for error messages
    pub expected: &'static str,
}

/// Get the aggregate mapping for a stat kind
pub fn get_aggregate_mapping(stat: StatKind) -> Option<AggregateMapping> {
    AGGREGATE_MAPPINGS.get(&stat).cloned()
}

fn orderable(field_type: FieldType) -> bool {
    !matches!(field_type, FieldType::MapLocation)
}

fn any_type(_: FieldType) -> bool {
    true
}

fn numeric(field_type: FieldType) -> bool {
    field_type.is_numeric()
}

lazy_static::lazy_static! {
    static ref AGGREGATE_MAPPINGS: HashMap<StatKind, AggregateMapping> = {
        let mut m = HashMap::new();

        // min/max work on anything with an order (numbers, dates, strings)
        m.insert(StatKind::Min, AggregateMapping {
            function_name: "min",
            accepts_type: orderable,
            expected: "an orderable field type",
        });
        m.insert(StatKind::Max, AggregateMapping {
            function_name: "max",
            accepts_type: orderable,
            expected: "an orderable field type",
        });

        m.insert(StatKind::Avg, AggregateMapping {
            function_name: "avg",
            accepts_type: numeric,
            expected: "integer or float",
        });
        m.insert(StatKind::Sum, AggregateMapping {
            function_name: "sum",
            accepts_type: numeric,
            expected: "integer or float",
        });

        // count(col) skips NULLs, i.e. content without a value for the field
        m.insert(StatKind::Count, AggregateMapping {
            function_name: "count",
            accepts_type: any_type,
            expected: "any field type",
        });

        // Exact distinct count
        m.insert(StatKind::Cardinality, AggregateMapping {
            function_name: "uniqExact",
            accepts_type: any_type,
            expected: "any field type",
        });

        m
    };
}
