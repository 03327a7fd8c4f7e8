use std::sync::Arc;

use super::sort_clause;
use crate::field_catalog::{FieldColumnResolver, FieldType};
use crate::query_builder::QueryBuilder;
use crate::query_model::{Clause, CustomFieldInterface, SortClause};
use crate::translator::field_column::resolve_field_target;
use crate::translator::{ClauseTranslator, TranslationError, TranslationResult};

/// Orders by a field's value. Map locations have no natural order and are
/// left to [`super::MapLocationDistanceSortTranslator`].
pub struct FieldSortTranslator {
    resolver: Arc<dyn FieldColumnResolver>,
}

impl FieldSortTranslator {
    pub fn new(resolver: Arc<dyn FieldColumnResolver>) -> Self {
        Self { resolver }
    }
}

impl ClauseTranslator for FieldSortTranslator {
    fn accepts(&self, clause: &Clause) -> bool {
        matches!(clause, Clause::Sort(SortClause::Field(_)))
    }

    fn build(&self, qb: &mut dyn QueryBuilder, clause: &Clause) -> TranslationResult<()> {
        let SortClause::Field(field_sort) = sort_clause(clause)? else {
            return Err(TranslationError::UnsupportedClauseKind {
                variant: clause.variant_name(),
            });
        };
        let target = field_sort.target();

        let column = resolve_field_target(
            self.resolver.as_ref(),
            &target.type_identifier,
            &target.field_identifier,
            field_sort.get_custom_field(&target.type_identifier, &target.field_identifier),
            |field_type| field_type != FieldType::MapLocation,
            "a sortable field type",
        )?;

        column.apply_join(qb)?;
        qb.add_order_by(column.expression, field_sort.direction());
        Ok(())
    }
}
