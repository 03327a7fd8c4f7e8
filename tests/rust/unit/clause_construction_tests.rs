//! Clause construction rejects malformed input up front, so translators
//! never see an empty identifier or an out-of-range coordinate.

#[cfg(test)]
mod clause_construction {
    use clausegen::query_model::{
        Aggregation, Clause, ClauseError, CustomFieldInterface, FieldAggregation, FieldSort,
        FieldStatsAggregation, MapLocationDistance, SortClause, SortDirection, StatKind,
    };
    use test_case::test_case;

    #[test]
    fn test_map_distance_keeps_coordinates() -> anyhow::Result<()> {
        let distance = MapLocationDistance::new("article", "location", 52.23, 21.01)?
            .with_direction(SortDirection::Desc);

        assert_eq!(distance.target().latitude, 52.23);
        assert_eq!(distance.target().longitude, 21.01);
        assert_eq!(distance.target().type_identifier, "article");
        assert_eq!(distance.direction(), SortDirection::Desc);
        Ok(())
    }

    #[test_case(91.0, 0.0, "latitude" ; "latitude above range")]
    #[test_case(-90.5, 0.0, "latitude" ; "latitude below range")]
    #[test_case(0.0, 180.5, "longitude" ; "longitude above range")]
    #[test_case(f64::NAN, 0.0, "latitude" ; "latitude not a number")]
    #[test_case(0.0, f64::INFINITY, "longitude" ; "longitude infinite")]
    fn test_map_distance_rejects_coordinate(lat: f64, lon: f64, expected_axis: &str) {
        let err = MapLocationDistance::new("article", "location", lat, lon).unwrap_err();
        assert!(
            matches!(err, ClauseError::InvalidCoordinate { axis, .. } if axis == expected_axis),
            "unexpected error: {err}"
        );
    }

    #[test]
    fn test_boundary_coordinates_are_accepted() {
        assert!(MapLocationDistance::new("article", "location", 90.0, -180.0).is_ok());
        assert!(MapLocationDistance::new("article", "location", -90.0, 180.0).is_ok());
    }

    #[test]
    fn test_empty_identifiers_rejected() {
        assert_eq!(
            FieldSort::new("", "price").unwrap_err(),
            ClauseError::EmptyIdentifier {
                what: "Content type identifier"
            }
        );
        assert_eq!(
            FieldStatsAggregation::new("  ", "product", "price", StatKind::Sum).unwrap_err(),
            ClauseError::EmptyIdentifier {
                what: "Aggregation name"
            }
        );
        assert!(MapLocationDistance::new("article", "", 0.0, 0.0).is_err());
    }

    #[test]
    fn test_custom_field_absent_until_set() -> anyhow::Result<()> {
        let mut sort = FieldSort::new("product", "price")?;
        assert_eq!(sort.get_custom_field("product", "price"), None);

        sort.set_custom_field("product", "price", "price_eur");
        sort.set_custom_field("product", "price", "price_usd");
        assert_eq!(sort.get_custom_field("product", "price"), Some("price_usd"));
        assert_eq!(sort.get_custom_field("product", "stock"), None);
        Ok(())
    }

    #[test]
    fn test_variant_names() -> anyhow::Result<()> {
        let name: Clause = SortClause::ContentName(SortDirection::Asc).into();
        assert_eq!(name.variant_name(), "SortClause::ContentName");

        let distance: Clause = MapLocationDistance::new("article", "location", 0.0, 0.0)?.into();
        assert_eq!(distance.variant_name(), "SortClause::MapLocationDistance");

        let stats = FieldStatsAggregation::new("n", "product", "stock", StatKind::Cardinality)?;
        assert_eq!(stats.content_type_identifier(), "product");
        assert_eq!(stats.field_definition_identifier(), "stock");

        let aggregation: Aggregation = stats.into();
        assert_eq!(aggregation.name(), "n");
        assert_eq!(
            Clause::from(aggregation).variant_name(),
            "Aggregation::FieldStats(cardinality)"
        );
        Ok(())
    }

    #[test]
    fn test_direction_display() {
        assert_eq!(SortDirection::Asc.to_string(), "ASC");
        assert_eq!(SortDirection::Desc.to_string(), "DESC");
        assert_eq!(SortDirection::default(), SortDirection::Asc);
    }
}
