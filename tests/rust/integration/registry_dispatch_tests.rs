/// Dispatch behaviour of the translator registry
///
/// - first accepting translator wins, later ones are never built
/// - nothing accepting a clause means no builder writes at all
/// - same clauses, same registry: equal builders
/// - a registry can be shared between threads translating into their own builders
use clausegen::{
    field_catalog::{FieldCatalogError, FieldColumnResolver, FieldType, PhysicalColumn},
    query_builder::{FilteringQueryBuilder, Join, QueryBuilder, QueryBuilderError, RenderExpr},
    query_model::{
        Clause, CustomFieldInterface, FieldStatsAggregation, MapLocationDistance, SortClause,
        SortDirection, StatKind,
    },
    translator::{
        sort::{ContentNameSortTranslator, MapLocationDistanceSortTranslator},
        ClauseTranslator, TranslationError, TranslationResult, TranslatorRegistry,
    },
};
use mockall::mock;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use super::common::{default_registry, init_logging};

mock! {
    pub Builder {}
    impl QueryBuilder for Builder {
        fn add_order_by(&mut self, expression: RenderExpr, direction: SortDirection);
        fn add_aggregation(
            &mut self,
            expression: RenderExpr,
            alias: &str,
            join: Option<Join>,
        ) -> Result<(), QueryBuilderError>;
        fn add_join_if_missing(&mut self, join: Join) -> Result<(), QueryBuilderError>;
    }
}

mock! {
    pub Resolver {}
    impl FieldColumnResolver for Resolver {
        fn resolve_column(
            &self,
            content_type_identifier: &str,
            field_definition_identifier: &str,
        ) -> Result<PhysicalColumn, FieldCatalogError>;
    }
}

/// Accepts content name sorts and records how often it was built.
struct SpyTranslator {
    builds: Arc<AtomicUsize>,
}

impl ClauseTranslator for SpyTranslator {
    fn accepts(&self, clause: &Clause) -> bool {
        matches!(clause, Clause::Sort(SortClause::ContentName(_)))
    }

    fn build(&self, qb: &mut dyn QueryBuilder, _clause: &Clause) -> TranslationResult<()> {
        self.builds.fetch_add(1, Ordering::SeqCst);
        qb.add_order_by(RenderExpr::column("spy"), SortDirection::Asc);
        Ok(())
    }
}

fn silent_builder() -> MockBuilder {
    let mut qb = MockBuilder::new();
    qb.expect_add_order_by().never();
    qb.expect_add_aggregation().never();
    qb.expect_add_join_if_missing().never();
    qb
}

#[test]
fn test_second_accepting_translator_is_never_built() {
    init_logging();
    let spy_builds = Arc::new(AtomicUsize::new(0));
    let registry = TranslatorRegistry::builder()
        .register(ContentNameSortTranslator)
        .register(SpyTranslator {
            builds: spy_builds.clone(),
        })
        .build();

    let mut qb = FilteringQueryBuilder::new("content");
    registry
        .translate(&mut qb, &SortClause::ContentName(SortDirection::Asc).into())
        .unwrap();

    assert_eq!(spy_builds.load(Ordering::SeqCst), 0);
    assert_eq!(qb.order_by.0.len(), 1);
}

#[test]
fn test_registration_order_decides_overlap() {
    let spy_builds = Arc::new(AtomicUsize::new(0));
    let registry = TranslatorRegistry::builder()
        .register_boxed(Box::new(SpyTranslator {
            builds: spy_builds.clone(),
        }))
        .register(ContentNameSortTranslator)
        .build();

    let mut qb = FilteringQueryBuilder::new("content");
    registry
        .translate(&mut qb, &SortClause::ContentName(SortDirection::Asc).into())
        .unwrap();

    assert_eq!(spy_builds.load(Ordering::SeqCst), 1);
    assert_eq!(qb.order_by.0[0].expression, RenderExpr::column("spy"));
}

#[test]
fn test_unregistered_variant_makes_no_writes() {
    let registry = TranslatorRegistry::builder()
        .register(ContentNameSortTranslator)
        .build();
    let mut qb = silent_builder();

    let err = registry
        .translate(&mut qb, &SortClause::LocationDepth(SortDirection::Asc).into())
        .unwrap_err();

    assert_eq!(
        err,
        TranslationError::UnsupportedClauseKind {
            variant: "SortClause::LocationDepth".to_string()
        }
    );
    assert_eq!(
        err.to_string(),
        "There are no query builders for SortClause::LocationDepth"
    );
}

#[test]
fn test_unregistered_stat_kind_makes_no_writes() {
    let registry = TranslatorRegistry::builder()
        .register(ContentNameSortTranslator)
        .build();
    let mut qb = silent_builder();
    let clause: Clause = FieldStatsAggregation::new("n", "product", "price", StatKind::Count)
        .unwrap()
        .into();

    assert!(matches!(
        registry.translate(&mut qb, &clause),
        Err(TranslationError::UnsupportedClauseKind { ref variant }) if variant == "Aggregation::FieldStats(count)"
    ));
}

#[test]
fn test_accepting_translator_never_reports_unsupported() {
    let registry = default_registry();
    let clauses: Vec<Clause> = vec![
        SortClause::ContentId(SortDirection::Asc).into(),
        SortClause::SectionIdentifier(SortDirection::Desc).into(),
        SortClause::LocationPath(SortDirection::Asc).into(),
        MapLocationDistance::new("article", "location", 1.0, 2.0)
            .unwrap()
            .into(),
        FieldStatsAggregation::new("min_stock", "product", "stock", StatKind::Min)
            .unwrap()
            .into(),
    ];

    for clause in &clauses {
        let translator = registry.find(clause).expect("default registry accepts clause");
        let mut qb = FilteringQueryBuilder::new("content");
        let result = translator.build(&mut qb, clause);
        assert!(
            !matches!(result, Err(TranslationError::UnsupportedClauseKind { .. })),
            "{} reported unsupported",
            clause.variant_name()
        );
    }
}

#[test]
fn test_translation_is_deterministic() {
    let registry = default_registry();
    let clauses: Vec<Clause> = vec![
        SortClause::SectionName(SortDirection::Desc).into(),
        MapLocationDistance::new("article", "location", 52.0, 21.0)
            .unwrap()
            .into(),
        FieldStatsAggregation::new("avg_price", "product", "price", StatKind::Avg)
            .unwrap()
            .into(),
    ];

    let mut first = FilteringQueryBuilder::new("content");
    let mut second = FilteringQueryBuilder::new("content");
    registry.translate_all(&mut first, &clauses).unwrap();
    registry.translate_all(&mut second, &clauses).unwrap();

    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}

#[test]
fn test_custom_field_bypasses_field_lookup() {
    let mut resolver = MockResolver::new();
    resolver.expect_resolve_column().never();
    let translator = MapLocationDistanceSortTranslator::new(Arc::new(resolver), "geoDistance");
    let registry = TranslatorRegistry::builder().register(translator).build();

    let mut distance = MapLocationDistance::new("article", "location", 52.0, 21.0).unwrap();
    distance.set_custom_field("article", "location", "geo_override");
    let mut qb = FilteringQueryBuilder::new("content");

    registry.translate(&mut qb, &distance.into()).unwrap();
    assert!(qb.joins.0.is_empty());
}

#[test]
fn test_field_lookup_without_custom_field() {
    let mut resolver = MockResolver::new();
    resolver
        .expect_resolve_column()
        .withf(|content_type, field| content_type == "article" && field == "location")
        .times(1)
        .returning(|_, _| {
            Ok(PhysicalColumn::new(
                "content_article",
                "location_point",
                FieldType::MapLocation,
            ))
        });
    let translator = MapLocationDistanceSortTranslator::new(Arc::new(resolver), "geoDistance");
    let registry = TranslatorRegistry::builder().register(translator).build();

    let clause: Clause = MapLocationDistance::new("article", "location", 52.0, 21.0)
        .unwrap()
        .into();
    let mut qb = FilteringQueryBuilder::new("content");

    registry.translate(&mut qb, &clause).unwrap();
    assert_eq!(qb.joins.0.len(), 1);
}

#[test]
fn test_shared_registry_across_threads() {
    let registry = Arc::new(default_registry());
    let clauses: Vec<Clause> = vec![
        SortClause::LocationDepth(SortDirection::Asc).into(),
        SortClause::ContentName(SortDirection::Desc).into(),
        FieldStatsAggregation::new("max_price", "product", "price", StatKind::Max)
            .unwrap()
            .into(),
    ];

    let mut expected = FilteringQueryBuilder::new("content");
    registry.translate_all(&mut expected, &clauses).unwrap();

    let results: Vec<FilteringQueryBuilder> = std::thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let registry = Arc::clone(&registry);
                let clauses = &clauses;
                scope.spawn(move || {
                    let mut qb = FilteringQueryBuilder::new("content");
                    registry.translate_all(&mut qb, clauses).unwrap();
                    qb
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    for qb in results {
        assert_eq!(qb, expected);
    }
}
