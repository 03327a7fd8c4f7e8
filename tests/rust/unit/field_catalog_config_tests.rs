//! Unit tests for catalog and translator configuration files
//!
//! Tests YAML/JSON catalog parsing, validation and the registry built from
//! a YAML translator config.

#[cfg(test)]
mod field_catalog_config_tests {
    use std::io::Write;
    use std::sync::Arc;

    use clausegen::config::TranslatorConfig;
    use clausegen::field_catalog::{
        FieldCatalog, FieldCatalogConfig, FieldCatalogError, FieldColumnResolver, FieldType,
    };
    use clausegen::query_builder::{FilteringQueryBuilder, ToSql};
    use clausegen::query_model::{MapLocationDistance, SortClause, SortDirection};
    use clausegen::translator::TranslatorRegistry;

    const CATALOG_JSON: &str = r#"{
        "content_types": [
            {
                "identifier": "place",
                "table": "content_place",
                "fields": [
                    { "identifier": "coordinates", "column": "geo", "field_type": "map_location" },
                    { "identifier": "visitors", "column": "visitors", "field_type": "integer" }
                ]
            }
        ]
    }"#;

    fn write_temp(suffix: &str, contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new()
            .suffix(suffix)
            .tempfile()
            .expect("Failed to create temp file");
        file.write_all(contents.as_bytes())
            .expect("Failed to write temp file");
        file
    }

    #[test]
    fn test_json_catalog_file() {
        let file = write_temp(".json", CATALOG_JSON);
        let catalog = FieldCatalog::from_file(file.path()).unwrap();

        assert_eq!(catalog.len(), 2);
        let column = catalog.resolve_column("place", "coordinates").unwrap();
        assert_eq!(column.table, "content_place");
        assert_eq!(column.column, "geo");
        assert_eq!(column.field_type, FieldType::MapLocation);
    }

    #[test]
    fn test_content_type_without_fields() {
        let config = FieldCatalogConfig::from_yaml_str(
            r#"
content_types:
  - identifier: folder
    table: content_folder
"#,
        )
        .unwrap();

        assert!(config.content_types[0].fields.is_empty());
        assert!(FieldCatalog::from_config(&config).unwrap().is_empty());
    }

    #[test]
    fn test_duplicate_content_type_rejected() {
        let config = FieldCatalogConfig::from_yaml_str(
            r#"
content_types:
  - identifier: folder
    table: content_folder
  - identifier: folder
    table: content_folder_v2
"#,
        )
        .unwrap();

        assert!(matches!(
            config.validate(),
            Err(FieldCatalogError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn test_unknown_field_type_is_parse_error() {
        let result = FieldCatalogConfig::from_yaml_str(
            r#"
content_types:
  - identifier: place
    table: content_place
    fields:
      - identifier: shape
        column: shape
        field_type: polygon
"#,
        );

        assert!(matches!(
            result,
            Err(FieldCatalogError::ConfigParseError { .. })
        ));
    }

    #[test]
    fn test_missing_catalog_file() {
        let err = FieldCatalog::from_file("/nonexistent/catalog.yaml").unwrap_err();
        assert!(matches!(err, FieldCatalogError::ConfigReadError { .. }));
    }

    #[test]
    fn test_registry_from_yaml_config() {
        let config_file = write_temp(
            ".yaml",
            "location_table: tree_location\ndistance_function: greatCircleDistance\n",
        );
        let config = TranslatorConfig::from_yaml_file(config_file.path()).unwrap();
        assert_eq!(config.content_table, "content");

        let catalog_file = write_temp(".json", CATALOG_JSON);
        let catalog: Arc<dyn FieldColumnResolver> =
            Arc::new(FieldCatalog::from_file(catalog_file.path()).unwrap());
        let registry = TranslatorRegistry::with_defaults(&config, catalog);

        let mut qb = FilteringQueryBuilder::from_config(&config);
        registry
            .translate(&mut qb, &SortClause::LocationDepth(SortDirection::Asc).into())
            .unwrap();
        registry
            .translate(
                &mut qb,
                &MapLocationDistance::new("place", "coordinates", 48.85, 2.35)
                    .unwrap()
                    .into(),
            )
            .unwrap();

        let sql = qb.to_sql();
        assert!(sql.contains("INNER JOIN tree_location AS location"));
        assert!(sql.contains(
            "greatCircleDistance(tupleElement(content_place.geo, 1), tupleElement(content_place.geo, 2), 2.35, 48.85)"
        ));
    }
}
