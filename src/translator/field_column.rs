//! Shared resolution of a (content type, field) pair to the expression a
//! translator should target.

use super::{TranslationError, TranslationResult};
use crate::field_catalog::{FieldColumnResolver, FieldType, PhysicalColumn, FIELD_TABLE_CONTENT_ID};
use crate::query_builder::{Join, JoinType, QueryBuilder, RenderExpr};
use crate::utils::identifier::is_valid_qualified_identifier;

/// Where a field's value is read from, and the join that makes it readable.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct FieldColumnTarget {
    pub join: Option<Join>,
    pub expression: RenderExpr,
}

impl FieldColumnTarget {
    /// Add the join (if any). Call after everything else that can fail.
    pub fn apply_join(&self, qb: &mut dyn QueryBuilder) -> TranslationResult<()> {
        if let Some(join) = &self.join {
            qb.add_join_if_missing(join.clone())?;
        }
        Ok(())
    }
}

/// Field table rows exist only for content of their type, hence LEFT.
pub(crate) fn field_table_join(column: &PhysicalColumn) -> Join {
    Join::on_content(
        JoinType::Left,
        &column.table,
        &column.table,
        FIELD_TABLE_CONTENT_ID,
        "id",
    )
}

/// An override is used verbatim and skips the catalog entirely. Otherwise the
/// pair is resolved and its type checked with `type_ok`.
pub(crate) fn resolve_field_target(
    resolver: &dyn FieldColumnResolver,
    content_type: &str,
    field: &str,
    custom_field: Option<&str>,
    type_ok: fn(FieldType) -> bool,
    expected: &'static str,
) -> TranslationResult<FieldColumnTarget> {
    if let Some(custom_field) = custom_field {
        if !is_valid_qualified_identifier(custom_field) {
            return Err(TranslationError::InvalidCustomField {
                content_type: content_type.to_string(),
                field: field.to_string(),
                custom_field: custom_field.to_string(),
            });
        }
        log::trace!(
            "Custom field '{}' overrides {}/{}",
            custom_field,
            content_type,
            field
        );
        return Ok(FieldColumnTarget {
            join: None,
            expression: RenderExpr::column(custom_field),
        });
    }

    let column = resolver.resolve_column(content_type, field)?;
    if !type_ok(column.field_type) {
        return Err(TranslationError::IncompatibleFieldType {
            content_type: content_type.to_string(),
            field: field.to_string(),
            actual: column.field_type,
            expected,
        });
    }

    Ok(FieldColumnTarget {
        join: Some(field_table_join(&column)),
        expression: RenderExpr::property(&column.table, &column.column),
    })
}
