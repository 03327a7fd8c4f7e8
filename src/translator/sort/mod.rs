//! Sort clause translators
//!
//! - `content`: columns of the content table and its section
//! - `location`: columns of the content's main location
//! - `field`: the value of a content field
//! - `map_location`: distance between a map location field and a point

use super::{TranslationError, TranslationResult};
use crate::query_model::{Clause, SortClause, SortDirection};

pub mod content;
pub mod field;
pub mod location;
pub mod map_location;

pub use content::{
    ContentIdSortTranslator, ContentNameSortTranslator, DateModifiedSortTranslator,
    DatePublishedSortTranslator, SectionIdentifierSortTranslator, SectionNameSortTranslator,
};
pub use field::FieldSortTranslator;
pub use location::{
    LocationDepthSortTranslator, LocationIdSortTranslator, LocationPathSortTranslator,
    LocationPrioritySortTranslator,
};
pub use map_location::MapLocationDistanceSortTranslator;

/// Alias the section table is joined under.
pub const SECTION_ALIAS: &str = "section";

/// Alias the main location is joined under.
pub const LOCATION_ALIAS: &str = "location";

/// The sort clause inside `clause`, or the error `build` reports when handed
/// a clause it never accepted.
pub(crate) fn sort_clause(clause: &Clause) -> TranslationResult<&SortClause> {
    match clause {
        Clause::Sort(sort) => Ok(sort),
        other => Err(TranslationError::UnsupportedClauseKind {
            variant: other.variant_name(),
        }),
    }
}

pub(crate) fn sort_direction(clause: &Clause) -> TranslationResult<SortDirection> {
    sort_clause(clause).map(SortClause::direction)
}
