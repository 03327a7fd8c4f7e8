use std::sync::Arc;

use super::sort_clause;
use crate::field_catalog::{FieldColumnResolver, FieldType};
use crate::query_builder::{QueryBuilder, RenderExpr};
use crate::query_model::{Clause, CustomFieldInterface, SortClause};
use crate::translator::field_column::resolve_field_target;
use crate::translator::{ClauseTranslator, TranslationError, TranslationResult};

/// Orders by the distance between a map location field and the clause's
/// point.
///
/// The location column stores `(longitude, latitude)`; the emitted
/// expression is
/// `<distance_function>(tupleElement(col, 1), tupleElement(col, 2), lon, lat)`.
pub struct MapLocationDistanceSortTranslator {
    resolver: Arc<dyn FieldColumnResolver>,
    distance_function: String,
}

impl MapLocationDistanceSortTranslator {
    pub fn new(
        resolver: Arc<dyn FieldColumnResolver>,
        distance_function: impl Into<String>,
    ) -> Self {
        Self {
            resolver,
            distance_function: distance_function.into(),
        }
    }
}

impl ClauseTranslator for MapLocationDistanceSortTranslator {
    fn accepts(&self, clause: &Clause) -> bool {
        matches!(clause, Clause::Sort(SortClause::MapLocationDistance(_)))
    }

    fn build(&self, qb: &mut dyn QueryBuilder, clause: &Clause) -> TranslationResult<()> {
        let SortClause::MapLocationDistance(distance) = sort_clause(clause)? else {
            return Err(TranslationError::UnsupportedClauseKind {
                variant: clause.variant_name(),
            });
        };
        let target = distance.target();

        let column = resolve_field_target(
            self.resolver.as_ref(),
            &target.type_identifier,
            &target.field_identifier,
            distance.get_custom_field(&target.type_identifier, &target.field_identifier),
            |field_type| field_type == FieldType::MapLocation,
            "map_location",
        )?;

        let point = column.expression.clone();
        let expression = RenderExpr::scalar_fn(
            self.distance_function.clone(),
            vec![
                RenderExpr::scalar_fn("tupleElement", vec![point.clone(), RenderExpr::integer(1)]),
                RenderExpr::scalar_fn("tupleElement", vec![point, RenderExpr::integer(2)]),
                RenderExpr::float(target.longitude),
                RenderExpr::float(target.latitude),
            ],
        );

        column.apply_join(qb)?;
        qb.add_order_by(expression, distance.direction());
        Ok(())
    }
}
