//! Query builder adapter
//!
//! Translators never produce SQL text directly. They push ordering,
//! aggregation and join instructions into a [`QueryBuilder`], which owns the
//! final statement shape. [`FilteringQueryBuilder`] is the in-crate
//! implementation: it accumulates instructions and renders them to SQL via
//! [`ToSql`].
//!
//! A builder is owned by whoever runs a translation pass and is not
//! synchronised; use one builder per query being compiled.

use serde::Serialize;

pub mod errors;
pub mod render_expr;
pub mod to_sql;

pub use errors::QueryBuilderError;
pub use render_expr::{OperatorApplication, RenderExpr};
pub use to_sql::ToSql;

use crate::config::TranslatorConfig;
use crate::query_model::SortDirection;
use crate::utils::identifier::is_valid_identifier;

/// Alias the content table is always selected under.
pub const CONTENT_ALIAS: &str = "content";

/// Mutators translators are allowed to call.
///
/// Translators write through this trait and never read back what they wrote.
pub trait QueryBuilder {
    fn add_order_by(&mut self, expression: RenderExpr, direction: SortDirection);

    /// Add an aggregation aliased `alias`, together with the join its
    /// expression reads from. Either both are added or neither is.
    fn add_aggregation(
        &mut self,
        expression: RenderExpr,
        alias: &str,
        join: Option<Join>,
    ) -> Result<(), QueryBuilderError>;

    /// Add `join` unless an identical join with the same alias is present.
    /// A different join already bound to the alias is a conflict.
    fn add_join_if_missing(&mut self, join: Join) -> Result<(), QueryBuilderError>;
}

#[derive(Debug, PartialEq, Clone, Serialize)]
pub struct JoinItems(pub Vec<Join>);

#[derive(Debug, PartialEq, Clone, Serialize)]
pub struct Join {
    pub table_name: String,
    pub table_alias: String,
    pub joining_on: Vec<OperatorApplication>,
    pub join_type: JoinType,
}

#[derive(Debug, PartialEq, Clone, Copy, Serialize)]
pub enum JoinType {
    Inner,
    Left,
}

impl Join {
    /// `<join_type> JOIN <table_name> AS <table_alias> ON <alias>.<column> = content.<content_column>`
    pub fn on_content(
        join_type: JoinType,
        table_name: impl Into<String>,
        table_alias: impl Into<String>,
        column: &str,
        content_column: &str,
    ) -> Self {
        let table_alias = table_alias.into();
        let condition = OperatorApplication::eq(
            RenderExpr::property(table_alias.clone(), column),
            RenderExpr::property(CONTENT_ALIAS, content_column),
        );
        Join {
            table_name: table_name.into(),
            table_alias,
            joining_on: vec![condition],
            join_type,
        }
    }

    /// Adds an extra `ON` condition.
    pub fn and_on(mut self, condition: OperatorApplication) -> Self {
        self.joining_on.push(condition);
        self
    }
}

#[derive(Debug, PartialEq, Clone, Serialize)]
pub struct OrderByItems(pub Vec<OrderByItem>);

#[derive(Debug, PartialEq, Clone, Serialize)]
pub struct OrderByItem {
    pub expression: RenderExpr,
    pub order: SortDirection,
}

#[derive(Debug, PartialEq, Clone, Serialize)]
pub struct AggregationItems(pub Vec<AggregationItem>);

#[derive(Debug, PartialEq, Clone, Serialize)]
pub struct AggregationItem {
    pub expression: RenderExpr,
    pub alias: String,
}

/// Accumulates the instructions of one translation pass.
///
/// Two builders fed the same clauses by the same registry compare equal.
#[derive(Debug, PartialEq, Clone, Serialize)]
pub struct FilteringQueryBuilder {
    pub content_table: String,
    pub joins: JoinItems,
    pub aggregations: AggregationItems,
    pub order_by: OrderByItems,
}

impl FilteringQueryBuilder {
    pub fn new(content_table: impl Into<String>) -> Self {
        Self {
            content_table: content_table.into(),
            joins: JoinItems(Vec::new()),
            aggregations: AggregationItems(Vec::new()),
            order_by: OrderByItems(Vec::new()),
        }
    }

    /// Builder selecting from the configured content table.
    pub fn from_config(config: &TranslatorConfig) -> Self {
        Self::new(config.content_table.as_str())
    }

    /// True when no translator has written anything yet.
    pub fn is_empty(&self) -> bool {
        self.joins.0.is_empty() && self.aggregations.0.is_empty() && self.order_by.0.is_empty()
    }

    pub fn find_join(&self, alias: &str) -> Option<&Join> {
        self.joins.0.iter().find(|join| join.table_alias == alias)
    }

    pub fn has_aggregation(&self, alias: &str) -> bool {
        self.aggregations.0.iter().any(|item| item.alias == alias)
    }

    /// `Ok(true)` when `join` still has to be added, `Ok(false)` when an
    /// identical join is already present.
    fn check_join(&self, join: &Join) -> Result<bool, QueryBuilderError> {
        match self.find_join(&join.table_alias) {
            Some(existing) if existing == join => {
                log::trace!("Join '{}' already present, skipping", join.table_alias);
                Ok(false)
            }
            Some(existing) => Err(QueryBuilderError::ConflictingJoin {
                alias: join.table_alias.clone(),
                existing: existing.to_sql(),
                requested: join.to_sql(),
            }),
            None => Ok(true),
        }
    }
}

impl QueryBuilder for FilteringQueryBuilder {
    fn add_order_by(&mut self, expression: RenderExpr, direction: SortDirection) {
        self.order_by.0.push(OrderByItem {
            expression,
            order: direction,
        });
    }

    fn add_aggregation(
        &mut self,
        expression: RenderExpr,
        alias: &str,
        join: Option<Join>,
    ) -> Result<(), QueryBuilderError> {
        if !is_valid_identifier(alias) {
            return Err(QueryBuilderError::InvalidAlias(alias.to_string()));
        }
        if self.has_aggregation(alias) {
            return Err(QueryBuilderError::DuplicateAggregationAlias(
                alias.to_string(),
            ));
        }
        let join_is_new = match &join {
            Some(join) => self.check_join(join)?,
            None => false,
        };

        if let Some(join) = join.filter(|_| join_is_new) {
            self.joins.0.push(join);
        }
        self.aggregations.0.push(AggregationItem {
            expression,
            alias: alias.to_string(),
        });
        Ok(())
    }

    fn add_join_if_missing(&mut self, join: Join) -> Result<(), QueryBuilderError> {
        if self.check_join(&join)? {
            self.joins.0.push(join);
        }
        Ok(())
    }
}
