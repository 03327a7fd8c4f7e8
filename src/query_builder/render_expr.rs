use serde::Serialize;

/// SQL expression fragments emitted by translators: column references,
/// literals, function calls and the equality/conjunction used in join
/// conditions.
#[derive(Debug, PartialEq, Clone, Serialize)]
pub enum RenderExpr {
    Literal(Literal),

    Star,

    Column(Column),

    AggregateFnCall(AggregateFnCall),

    ScalarFnCall(ScalarFnCall),

    PropertyAccessExp(PropertyAccess),

    OperatorApplicationExp(OperatorApplication),
}

#[derive(Debug, PartialEq, Clone, Serialize)]
pub enum Literal {
    Integer(i64),
    Float(f64),
}

#[derive(Debug, PartialEq, Clone, Serialize)]
pub struct TableAlias(pub String);

/// Unqualified (or caller-qualified) column name, rendered verbatim.
#[derive(Debug, PartialEq, Clone, Serialize)]
pub struct Column(pub String);

#[derive(Debug, PartialEq, Clone, Copy, Serialize)]
pub enum Operator {
    Equal,
    And,
}

#[derive(Debug, PartialEq, Clone, Serialize)]
pub struct OperatorApplication {
    pub operator: Operator,
    pub operands: Vec<RenderExpr>,
}

#[derive(Debug, PartialEq, Clone, Serialize)]
pub struct PropertyAccess {
    pub table_alias: TableAlias,
    pub column: Column,
}

#[derive(Debug, PartialEq, Clone, Serialize)]
pub struct ScalarFnCall {
    pub name: String,
    pub args: Vec<RenderExpr>,
}

#[derive(Debug, PartialEq, Clone, Serialize)]
pub struct AggregateFnCall {
    pub name: String,
    pub args: Vec<RenderExpr>,
}

impl RenderExpr {
    /// `alias.column`
    pub fn property(table_alias: impl Into<String>, column: impl Into<String>) -> Self {
        RenderExpr::PropertyAccessExp(PropertyAccess {
            table_alias: TableAlias(table_alias.into()),
            column: Column(column.into()),
        })
    }

    pub fn column(name: impl Into<String>) -> Self {
        RenderExpr::Column(Column(name.into()))
    }

    pub fn float(value: f64) -> Self {
        RenderExpr::Literal(Literal::Float(value))
    }

    pub fn integer(value: i64) -> Self {
        RenderExpr::Literal(Literal::Integer(value))
    }

    pub fn scalar_fn(name: impl Into<String>, args: Vec<RenderExpr>) -> Self {
        RenderExpr::ScalarFnCall(ScalarFnCall {
            name: name.into(),
            args,
        })
    }

    pub fn aggregate_fn(name: impl Into<String>, args: Vec<RenderExpr>) -> Self {
        RenderExpr::AggregateFnCall(AggregateFnCall {
            name: name.into(),
            args,
        })
    }
}

impl OperatorApplication {
    pub fn eq(lhs: RenderExpr, rhs: RenderExpr) -> Self {
        OperatorApplication {
            operator: Operator::Equal,
            operands: vec![lhs, rhs],
        }
    }
}
