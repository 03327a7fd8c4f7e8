//! Clause translation
//!
//! Each [`ClauseTranslator`] knows how to turn one kind of clause into
//! query builder instructions. The [`TranslatorRegistry`] holds an ordered
//! list of translators and hands every clause to the first one that accepts
//! it.
//!
//! # Implementing a Translator
//!
//! ```ignore
//! impl ClauseTranslator for MySortTranslator {
//!     fn accepts(&self, clause: &Clause) -> bool {
//!         matches!(clause, Clause::Sort(SortClause::ContentId(_)))
//!     }
//!
//!     fn build(&self, qb: &mut dyn QueryBuilder, clause: &Clause) -> TranslationResult<()> {
//!         qb.add_order_by(RenderExpr::property(CONTENT_ALIAS, "id"), clause_direction);
//!         Ok(())
//!     }
//! }
//! ```

use crate::query_builder::QueryBuilder;
use crate::query_model::Clause;

pub mod aggregation;
pub mod errors;
mod field_column;
pub mod registry;
pub mod sort;

pub use errors::{BatchTranslationError, TranslationError};
pub use registry::{SkippedClause, TranslatorRegistry, TranslatorRegistryBuilder};

pub type TranslationResult<T> = Result<T, TranslationError>;

/// Translates one kind of clause.
///
/// Translators hold no per-request state, so one instance can serve
/// concurrent translations against independent builders.
pub trait ClauseTranslator: Send + Sync {
    /// Whether this translator handles `clause`. Must be free of side
    /// effects and answer for every clause variant.
    fn accepts(&self, clause: &Clause) -> bool;

    /// Emit builder instructions for a clause `accepts` returned true for.
    ///
    /// Everything that can fail is resolved before the first write to `qb`,
    /// so an error leaves the builder as it was.
    fn build(&self, qb: &mut dyn QueryBuilder, clause: &Clause) -> TranslationResult<()>;

    /// Used in log output.
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}
