//! SQL identifier checks
//!
//! Table names, column names and aliases reach the builder from configuration
//! files and clause names, and are rendered unquoted. Anything that is not a
//! plain identifier is rejected before it gets near SQL text.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref SQL_IDENTIFIER: Regex =
        Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").expect("identifier pattern is valid");

    /// `identifier` or `table.identifier`
    static ref QUALIFIED_SQL_IDENTIFIER: Regex =
        Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*(\.[A-Za-z_][A-Za-z0-9_]*)?$")
            .expect("qualified identifier pattern is valid");
}

pub fn is_valid_identifier(value: &str) -> bool {
    SQL_IDENTIFIER.is_match(value)
}

pub fn is_valid_qualified_identifier(value: &str) -> bool {
    QUALIFIED_SQL_IDENTIFIER.is_match(value)
}
