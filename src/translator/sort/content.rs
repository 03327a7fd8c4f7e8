use super::{sort_direction, SECTION_ALIAS};
use crate::query_builder::{Join, JoinType, QueryBuilder, RenderExpr, CONTENT_ALIAS};
use crate::query_model::{Clause, SortClause};
use crate::translator::{ClauseTranslator, TranslationResult};

pub struct ContentIdSortTranslator;

impl ClauseTranslator for ContentIdSortTranslator {
    fn accepts(&self, clause: &Clause) -> bool {
        matches!(clause, Clause::Sort(SortClause::ContentId(_)))
    }

    fn build(&self, qb: &mut dyn QueryBuilder, clause: &Clause) -> TranslationResult<()> {
        qb.add_order_by(RenderExpr::property(CONTENT_ALIAS, "id"), sort_direction(clause)?);
        Ok(())
    }
}

/// Orders by `content.name`. Custom field overrides never apply here.
pub struct ContentNameSortTranslator;

impl ClauseTranslator for ContentNameSortTranslator {
    fn accepts(&self, clause: &Clause) -> bool {
        matches!(clause, Clause::Sort(SortClause::ContentName(_)))
    }

    fn build(&self, qb: &mut dyn QueryBuilder, clause: &Clause) -> TranslationResult<()> {
        qb.add_order_by(RenderExpr::property(CONTENT_ALIAS, "name"), sort_direction(clause)?);
        Ok(())
    }
}

pub struct DatePublishedSortTranslator;

impl ClauseTranslator for DatePublishedSortTranslator {
    fn accepts(&self, clause: &Clause) -> bool {
        matches!(clause, Clause::Sort(SortClause::DatePublished(_)))
    }

    fn build(&self, qb: &mut dyn QueryBuilder, clause: &Clause) -> TranslationResult<()> {
        qb.add_order_by(
            RenderExpr::property(CONTENT_ALIAS, "published"),
            sort_direction(clause)?,
        );
        Ok(())
    }
}

pub struct DateModifiedSortTranslator;

impl ClauseTranslator for DateModifiedSortTranslator {
    fn accepts(&self, clause: &Clause) -> bool {
        matches!(clause, Clause::Sort(SortClause::DateModified(_)))
    }

    fn build(&self, qb: &mut dyn QueryBuilder, clause: &Clause) -> TranslationResult<()> {
        qb.add_order_by(
            RenderExpr::property(CONTENT_ALIAS, "modified"),
            sort_direction(clause)?,
        );
        Ok(())
    }
}

fn section_join(section_table: &str) -> Join {
    Join::on_content(JoinType::Inner, section_table, SECTION_ALIAS, "id", "section_id")
}

pub struct SectionIdentifierSortTranslator {
    section_table: String,
}

impl SectionIdentifierSortTranslator {
    pub fn new(section_table: impl Into<String>) -> Self {
        Self {
            section_table: section_table.into(),
        }
    }
}

impl ClauseTranslator for SectionIdentifierSortTranslator {
    fn accepts(&self, clause: &Clause) -> bool {
        matches!(clause, Clause::Sort(SortClause::SectionIdentifier(_)))
    }

    fn build(&self, qb: &mut dyn QueryBuilder, clause: &Clause) -> TranslationResult<()> {
        let direction = sort_direction(clause)?;
        qb.add_join_if_missing(section_join(&self.section_table))?;
        qb.add_order_by(RenderExpr::property(SECTION_ALIAS, "identifier"), direction);
        Ok(())
    }
}

pub struct SectionNameSortTranslator {
    section_table: String,
}

impl SectionNameSortTranslator {
    pub fn new(section_table: impl Into<String>) -> Self {
        Self {
            section_table: section_table.into(),
        }
    }
}

impl ClauseTranslator for SectionNameSortTranslator {
    fn accepts(&self, clause: &Clause) -> bool {
        matches!(clause, Clause::Sort(SortClause::SectionName(_)))
    }

    fn build(&self, qb: &mut dyn QueryBuilder, clause: &Clause) -> TranslationResult<()> {
        let direction = sort_direction(clause)?;
        qb.add_join_if_missing(section_join(&self.section_table))?;
        qb.add_order_by(RenderExpr::property(SECTION_ALIAS, "name"), direction);
        Ok(())
    }
}
