//! Ordered translator registry with first-match dispatch.
//!
//! Registration order is priority order: when several translators accept a
//! clause, the one registered first builds it and the others are never
//! consulted. There is no "most specific wins" rule. The list is fixed once
//! the registry is built, so a registry can be shared between threads
//! without locking.

use std::sync::Arc;

use super::aggregation::FieldStatsTranslator;
use super::errors::{BatchTranslationError, TranslationError};
use super::sort::{
    ContentIdSortTranslator, ContentNameSortTranslator, DateModifiedSortTranslator,
    DatePublishedSortTranslator, FieldSortTranslator, LocationDepthSortTranslator,
    LocationIdSortTranslator, LocationPathSortTranslator, LocationPrioritySortTranslator,
    MapLocationDistanceSortTranslator, SectionIdentifierSortTranslator,
    SectionNameSortTranslator,
};
use super::{ClauseTranslator, TranslationResult};
use crate::config::TranslatorConfig;
use crate::field_catalog::FieldColumnResolver;
use crate::query_builder::{FilteringQueryBuilder, QueryBuilder};
use crate::query_model::{Clause, StatKind};

/// A clause [`TranslatorRegistry::translate_skipping_unsupported`] left out.
#[derive(Debug, Clone, PartialEq)]
pub struct SkippedClause {
    pub index: usize,
    pub variant: String,
}

pub struct TranslatorRegistry {
    translators: Vec<Box<dyn ClauseTranslator>>,
}

#[derive(Default)]
pub struct TranslatorRegistryBuilder {
    translators: Vec<Box<dyn ClauseTranslator>>,
}

impl TranslatorRegistryBuilder {
    /// Append a translator. Earlier registrations win ties.
    pub fn register(mut self, translator: impl ClauseTranslator + 'static) -> Self {
        self.translators.push(Box::new(translator));
        self
    }

    pub fn register_boxed(mut self, translator: Box<dyn ClauseTranslator>) -> Self {
        self.translators.push(translator);
        self
    }

    pub fn build(self) -> TranslatorRegistry {
        TranslatorRegistry {
            translators: self.translators,
        }
    }
}

impl TranslatorRegistry {
    pub fn builder() -> TranslatorRegistryBuilder {
        TranslatorRegistryBuilder::default()
    }

    /// Registry with every built-in translator, in this order: content
    /// sorts, section sorts, location sorts, field sort, map location
    /// distance sort, then one field stats translator per [`StatKind`].
    pub fn with_defaults(
        config: &TranslatorConfig,
        resolver: Arc<dyn FieldColumnResolver>,
    ) -> Self {
        let mut builder = Self::builder()
            .register(ContentIdSortTranslator)
            .register(ContentNameSortTranslator)
            .register(DatePublishedSortTranslator)
            .register(DateModifiedSortTranslator)
            .register(SectionIdentifierSortTranslator::new(&config.section_table))
            .register(SectionNameSortTranslator::new(&config.section_table))
            .register(LocationIdSortTranslator::new(&config.location_table))
            .register(LocationDepthSortTranslator::new(&config.location_table))
            .register(LocationPrioritySortTranslator::new(&config.location_table))
            .register(LocationPathSortTranslator::new(&config.location_table))
            .register(FieldSortTranslator::new(resolver.clone()))
            .register(MapLocationDistanceSortTranslator::new(
                resolver.clone(),
                &config.distance_function,
            ));

        for stat in StatKind::ALL {
            builder = builder.register(FieldStatsTranslator::new(stat, resolver.clone()));
        }

        let registry = builder.build();
        log::debug!(
            "TranslatorRegistry initialised with {} translators",
            registry.len()
        );
        registry
    }

    pub fn len(&self) -> usize {
        self.translators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.translators.is_empty()
    }

    /// First registered translator accepting `clause`.
    pub fn find(&self, clause: &Clause) -> Option<&dyn ClauseTranslator> {
        self.translators
            .iter()
            .find(|translator| translator.accepts(clause))
            .map(|translator| translator.as_ref())
    }

    /// Translate one clause into `qb`.
    ///
    /// Fails with [`TranslationError::UnsupportedClauseKind`] when nothing
    /// accepts the clause; the builder is not touched in that case.
    pub fn translate(&self, qb: &mut dyn QueryBuilder, clause: &Clause) -> TranslationResult<()> {
        let translator = self
            .find(clause)
            .ok_or_else(|| TranslationError::UnsupportedClauseKind {
                variant: clause.variant_name(),
            })?;

        log::trace!(
            "Translating {} with {}",
            clause.variant_name(),
            translator.name()
        );
        translator.build(qb, clause)
    }

    /// Translate `clauses` in order, all or nothing.
    ///
    /// On the first failure `qb` is restored to its state before the call
    /// and the failing clause's index is reported.
    pub fn translate_all(
        &self,
        qb: &mut FilteringQueryBuilder,
        clauses: &[Clause],
    ) -> Result<(), BatchTranslationError> {
        let mut staged = qb.clone();
        for (index, clause) in clauses.iter().enumerate() {
            self.translate(&mut staged, clause)
                .map_err(|source| BatchTranslationError {
                    index,
                    variant: clause.variant_name(),
                    source,
                })?;
        }
        *qb = staged;
        log::debug!("Translated {} clauses", clauses.len());
        Ok(())
    }

    /// Like [`TranslatorRegistry::translate_all`], but clauses no translator
    /// accepts are skipped and reported instead of aborting the batch. Any
    /// other failure still aborts and restores `qb`.
    pub fn translate_skipping_unsupported(
        &self,
        qb: &mut FilteringQueryBuilder,
        clauses: &[Clause],
    ) -> Result<Vec<SkippedClause>, BatchTranslationError> {
        let mut staged = qb.clone();
        let mut skipped = Vec::new();
        for (index, clause) in clauses.iter().enumerate() {
            match self.translate(&mut staged, clause) {
                Ok(()) => {}
                Err(TranslationError::UnsupportedClauseKind { variant }) => {
                    log::warn!("Skipping clause #{}: no translator for {}", index, variant);
                    skipped.push(SkippedClause { index, variant });
                }
                Err(source) => {
                    return Err(BatchTranslationError {
                        index,
                        variant: clause.variant_name(),
                        source,
                    })
                }
            }
        }
        *qb = staged;
        Ok(skipped)
    }
}
