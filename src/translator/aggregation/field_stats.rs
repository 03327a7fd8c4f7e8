use std::sync::Arc;

use super::function_registry::get_aggregate_mapping;
use crate::field_catalog::FieldColumnResolver;
use crate::query_builder::{QueryBuilder, RenderExpr};
use crate::query_model::{Aggregation, Clause, FieldAggregation, StatKind};
use crate::translator::field_column::resolve_field_target;
use crate::translator::{ClauseTranslator, TranslationError, TranslationResult};

/// Computes one statistic over a content field, aliased to the
/// aggregation's name. One instance per [`StatKind`].
pub struct FieldStatsTranslator {
    stat: StatKind,
    resolver: Arc<dyn FieldColumnResolver>,
}

impl FieldStatsTranslator {
    pub fn new(stat: StatKind, resolver: Arc<dyn FieldColumnResolver>) -> Self {
        Self { stat, resolver }
    }

    pub fn stat(&self) -> StatKind {
        self.stat
    }
}

impl ClauseTranslator for FieldStatsTranslator {
    fn accepts(&self, clause: &Clause) -> bool {
        matches!(
            clause,
            Clause::Aggregation(Aggregation::FieldStats(stats)) if stats.stat() == self.stat
        )
    }

    fn build(&self, qb: &mut dyn QueryBuilder, clause: &Clause) -> TranslationResult<()> {
        let unsupported = || TranslationError::UnsupportedClauseKind {
            variant: clause.variant_name(),
        };
        let Clause::Aggregation(Aggregation::FieldStats(stats)) = clause else {
            return Err(unsupported());
        };
        if stats.stat() != self.stat {
            return Err(unsupported());
        }
        let mapping = get_aggregate_mapping(self.stat).ok_or_else(unsupported)?;

        let column = resolve_field_target(
            self.resolver.as_ref(),
            stats.content_type_identifier(),
            stats.field_definition_identifier(),
            None,
            mapping.accepts_type,
            mapping.expected,
        )?;

        let expression = RenderExpr::aggregate_fn(mapping.function_name, vec![column.expression]);
        qb.add_aggregation(expression, stats.name(), column.join)?;
        Ok(())
    }
}
