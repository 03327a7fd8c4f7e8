use thiserror::Error;

/// Errors raised while constructing a clause.
///
/// Clauses are validated once, at construction. Translation never re-checks
/// well-formedness, so anything a translator relies on must be rejected here.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ClauseError {
    #[error("{what} must not be empty")]
    EmptyIdentifier { what: &'static str },

    #[error("Invalid {axis} {value} (must be a finite number within [-{limit}, {limit}])")]
    InvalidCoordinate {
        axis: &'static str,
        value: f64,
        limit: f64,
    },
}

impl ClauseError {
    pub(crate) fn require_identifier(what: &'static str, value: &str) -> Result<(), Self> {
        if value.trim().is_empty() {
            return Err(ClauseError::EmptyIdentifier { what });
        }
        Ok(())
    }

    pub(crate) fn require_coordinate(
        axis: &'static str,
        value: f64,
        limit: f64,
    ) -> Result<(), Self> {
        if !value.is_finite() || value.abs() > limit {
            return Err(ClauseError::InvalidCoordinate { axis, value, limit });
        }
        Ok(())
    }
}
