use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum QueryBuilderError {
    #[error("Join alias '{alias}' is already bound to a different join (existing: {existing}, requested: {requested})")]
    ConflictingJoin {
        alias: String,
        existing: String,
        requested: String,
    },

    #[error("Invalid aggregation alias '{0}' (must start with a letter or underscore and contain only letters, digits and underscores)")]
    InvalidAlias(String),

    #[error("Aggregation alias '{0}' is already in use")]
    DuplicateAggregationAlias(String),
}
