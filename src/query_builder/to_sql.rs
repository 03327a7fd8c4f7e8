use super::render_expr::{Literal, Operator, OperatorApplication, RenderExpr};
use super::{
    AggregationItems, FilteringQueryBuilder, Join, JoinItems, JoinType, OrderByItems,
    CONTENT_ALIAS,
};
use crate::query_model::SortDirection;

/// Convert a builder fragment to SQL text
pub trait ToSql {
    fn to_sql(&self) -> String;
}

impl ToSql for Literal {
    fn to_sql(&self) -> String {
        match self {
            Literal::Integer(i) => i.to_string(),
            Literal::Float(f) => f.to_string(),
        }
    }
}

impl ToSql for RenderExpr {
    fn to_sql(&self) -> String {
        match self {
            RenderExpr::Literal(lit) => lit.to_sql(),
            RenderExpr::Star => "*".to_string(),
            RenderExpr::Column(col) => col.0.clone(),
            RenderExpr::PropertyAccessExp(prop) => {
                format!("{}.{}", prop.table_alias.0, prop.column.0)
            }
            RenderExpr::ScalarFnCall(call) => {
                let args: Vec<String> = call.args.iter().map(ToSql::to_sql).collect();
                format!("{}({})", call.name, args.join(", "))
            }
            RenderExpr::AggregateFnCall(call) => {
                let args: Vec<String> = call.args.iter().map(ToSql::to_sql).collect();
                format!("{}({})", call.name, args.join(", "))
            }
            RenderExpr::OperatorApplicationExp(op) => op.to_sql(),
        }
    }
}

impl ToSql for OperatorApplication {
    fn to_sql(&self) -> String {
        let rendered: Vec<String> = self.operands.iter().map(ToSql::to_sql).collect();
        let sql_op = match self.operator {
            Operator::Equal => "=",
            Operator::And => "AND",
        };
        rendered.join(&format!(" {} ", sql_op))
    }
}

impl ToSql for SortDirection {
    fn to_sql(&self) -> String {
        self.to_string()
    }
}

impl ToSql for Join {
    fn to_sql(&self) -> String {
        let join_type_str = match self.join_type {
            JoinType::Inner => "INNER JOIN",
            JoinType::Left => "LEFT JOIN",
        };

        let mut sql = format!(
            "{} {} AS {}",
            join_type_str, self.table_name, self.table_alias
        );

        if !self.joining_on.is_empty() {
            let condition = OperatorApplication {
                operator: Operator::And,
                operands: self
                    .joining_on
                    .iter()
                    .cloned()
                    .map(RenderExpr::OperatorApplicationExp)
                    .collect(),
            };
            sql.push_str(" ON ");
            sql.push_str(&condition.to_sql());
        }
        sql.push('\n');
        sql
    }
}

impl ToSql for JoinItems {
    fn to_sql(&self) -> String {
        let mut sql = String::new();
        for join in &self.0 {
            sql.push_str(&join.to_sql());
        }
        sql
    }
}

impl ToSql for OrderByItems {
    fn to_sql(&self) -> String {
        let mut sql: String = String::new();
        if self.0.is_empty() {
            return sql;
        }
        sql.push_str("ORDER BY ");
        for (i, item) in self.0.iter().enumerate() {
            sql.push_str(&item.expression.to_sql());
            sql.push(' ');
            sql.push_str(&item.order.to_sql());
            if i + 1 < self.0.len() {
                sql.push_str(", ");
            }
        }
        sql.push('\n');
        sql
    }
}

impl ToSql for AggregationItems {
    fn to_sql(&self) -> String {
        let items: Vec<String> = self
            .0
            .iter()
            .map(|item| format!("{} AS {}", item.expression.to_sql(), item.alias))
            .collect();
        items.join(", ")
    }
}

impl FilteringQueryBuilder {
    fn from_sql(&self) -> String {
        format!("FROM {} AS {}\n", self.content_table, CONTENT_ALIAS)
    }

    /// Aggregations are computed by a separate statement over the same
    /// joins, without ordering. `None` when no aggregation was requested.
    pub fn aggregation_sql(&self) -> Option<String> {
        if self.aggregations.0.is_empty() {
            return None;
        }
        let mut sql = format!("SELECT {}\n", self.aggregations.to_sql());
        sql.push_str(&self.from_sql());
        sql.push_str(&self.joins.to_sql());
        Some(sql)
    }
}

/// The content listing statement: selected content rows, joins and ordering.
impl ToSql for FilteringQueryBuilder {
    fn to_sql(&self) -> String {
        let mut sql = format!("SELECT {}.*\n", CONTENT_ALIAS);
        sql.push_str(&self.from_sql());
        sql.push_str(&self.joins.to_sql());
        sql.push_str(&self.order_by.to_sql());
        sql
    }
}
