use serde::{Deserialize, Serialize};
use std::env;
use thiserror::Error;
use validator::{Validate, ValidationError};

use crate::utils::identifier::is_valid_identifier;

/// Distance functions accepted for map location sorting. Both take
/// `(lon1, lat1, lon2, lat2)` and return metres.
pub const SUPPORTED_DISTANCE_FUNCTIONS: &[&str] = &["geoDistance", "greatCircleDistance"];

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Parse error for {field}: {value} - {source}")]
    Parse {
        field: String,
        value: String,
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),
}

/// Table names and dialect choices used by the default translators
#[derive(Clone, Debug, PartialEq, Validate, Serialize, Deserialize)]
#[serde(default)]
pub struct TranslatorConfig {
    /// Content table, always selected as `content`
    #[validate(custom(function = "validate_table_name"))]
    pub content_table: String,

    /// Location table, joined as `location` for location sorts
    #[validate(custom(function = "validate_table_name"))]
    pub location_table: String,

    /// Section table, joined as `section` for section sorts
    #[validate(custom(function = "validate_table_name"))]
    pub section_table: String,

    /// Function used to compute map location distances
    #[validate(custom(function = "validate_distance_function"))]
    pub distance_function: String,
}

impl Default for TranslatorConfig {
    fn default() -> Self {
        Self {
            content_table: "content".to_string(),
            location_table: "content_location".to_string(),
            section_table: "content_section".to_string(),
            distance_function: "geoDistance".to_string(),
        }
    }
}

impl TranslatorConfig {
    /// Create configuration from environment variables with validation
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let config = Self {
            content_table: env_or("CLAUSEGEN_CONTENT_TABLE", defaults.content_table),
            location_table: env_or("CLAUSEGEN_LOCATION_TABLE", defaults.location_table),
            section_table: env_or("CLAUSEGEN_SECTION_TABLE", defaults.section_table),
            distance_function: env_or("CLAUSEGEN_DISTANCE_FUNCTION", defaults.distance_function),
        };

        config.validate()?;
        log::debug!("TranslatorConfig from environment: {:?}", config);
        Ok(config)
    }

    /// Create configuration from YAML file. Missing keys keep their defaults.
    pub fn from_yaml_file<P: AsRef<std::path::Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Parse {
            field: "yaml_file".to_string(),
            value: "file read failed".to_string(),
            source: Box::new(e),
        })?;

        let config: Self = serde_yaml::from_str(&content).map_err(|e| ConfigError::Parse {
            field: "yaml_content".to_string(),
            value: content,
            source: Box::new(e),
        })?;

        config.validate()?;
        Ok(config)
    }
}

fn env_or(key: &str, default: String) -> String {
    env::var(key).unwrap_or(default)
}

fn validate_table_name(name: &str) -> Result<(), ValidationError> {
    if !is_valid_identifier(name) {
        return Err(ValidationError::new("invalid_table_name"));
    }
    Ok(())
}

fn validate_distance_function(name: &str) -> Result<(), ValidationError> {
    if !SUPPORTED_DISTANCE_FUNCTIONS.contains(&name) {
        return Err(ValidationError::new("unsupported_distance_function"));
    }
    Ok(())
}
