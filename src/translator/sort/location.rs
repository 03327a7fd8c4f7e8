use super::{sort_direction, LOCATION_ALIAS};
use crate::query_builder::{Join, JoinType, OperatorApplication, QueryBuilder, RenderExpr};
use crate::query_model::{Clause, SortClause, SortDirection};
use crate::translator::{ClauseTranslator, TranslationResult};

/// Content is sorted by its main location only, so joining never multiplies
/// rows.
fn main_location_join(location_table: &str) -> Join {
    Join::on_content(JoinType::Inner, location_table, LOCATION_ALIAS, "content_id", "id").and_on(
        OperatorApplication::eq(
            RenderExpr::property(LOCATION_ALIAS, "is_main"),
            RenderExpr::integer(1),
        ),
    )
}

fn order_by_location_column(
    qb: &mut dyn QueryBuilder,
    location_table: &str,
    column: &str,
    direction: SortDirection,
) -> TranslationResult<()> {
    qb.add_join_if_missing(main_location_join(location_table))?;
    qb.add_order_by(RenderExpr::property(LOCATION_ALIAS, column), direction);
    Ok(())
}

pub struct LocationIdSortTranslator {
    location_table: String,
}

impl LocationIdSortTranslator {
    pub fn new(location_table: impl Into<String>) -> Self {
        Self {
            location_table: location_table.into(),
        }
    }
}

impl ClauseTranslator for LocationIdSortTranslator {
    fn accepts(&self, clause: &Clause) -> bool {
        matches!(clause, Clause::Sort(SortClause::LocationId(_)))
    }

    fn build(&self, qb: &mut dyn QueryBuilder, clause: &Clause) -> TranslationResult<()> {
        order_by_location_column(qb, &self.location_table, "id", sort_direction(clause)?)
    }
}

pub struct LocationDepthSortTranslator {
    location_table: String,
}

impl LocationDepthSortTranslator {
    pub fn new(location_table: impl Into<String>) -> Self {
        Self {
            location_table: location_table.into(),
        }
    }
}

impl ClauseTranslator for LocationDepthSortTranslator {
    fn accepts(&self, clause: &Clause) -> bool {
        matches!(clause, Clause::Sort(SortClause::LocationDepth(_)))
    }

    fn build(&self, qb: &mut dyn QueryBuilder, clause: &Clause) -> TranslationResult<()> {
        order_by_location_column(qb, &self.location_table, "depth", sort_direction(clause)?)
    }
}

pub struct LocationPrioritySortTranslator {
    location_table: String,
}

impl LocationPrioritySortTranslator {
    pub fn new(location_table: impl Into<String>) -> Self {
        Self {
            location_table: location_table.into(),
        }
    }
}

impl ClauseTranslator for LocationPrioritySortTranslator {
    fn accepts(&self, clause: &Clause) -> bool {
        matches!(clause, Clause::Sort(SortClause::LocationPriority(_)))
    }

    fn build(&self, qb: &mut dyn QueryBuilder, clause: &Clause) -> TranslationResult<()> {
        order_by_location_column(qb, &self.location_table, "priority", sort_direction(clause)?)
    }
}

pub struct LocationPathSortTranslator {
    location_table: String,
}

impl LocationPathSortTranslator {
    pub fn new(location_table: impl Into<String>) -> Self {
        Self {
            location_table: location_table.into(),
        }
    }
}

impl ClauseTranslator for LocationPathSortTranslator {
    fn accepts(&self, clause: &Clause) -> bool {
        matches!(clause, Clause::Sort(SortClause::LocationPath(_)))
    }

    fn build(&self, qb: &mut dyn QueryBuilder, clause: &Clause) -> TranslationResult<()> {
        order_by_location_column(qb, &self.location_table, "path_string", sort_direction(clause)?)
    }
}
