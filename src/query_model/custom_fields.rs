use serde::Serialize;
use std::collections::HashMap;

/// Clauses whose translation can be redirected to a non-default physical
/// column for a given (content type, field definition) pair.
///
/// Overrides are set while the clause is being built. Once the clause is
/// handed to a registry it is only borrowed immutably, so the map is frozen
/// for the duration of translation.
pub trait CustomFieldInterface {
    /// Redirect `(type_identifier, field_identifier)` to `custom_field`.
    /// Setting the same pair twice keeps the last value.
    fn set_custom_field(
        &mut self,
        type_identifier: &str,
        field_identifier: &str,
        custom_field: &str,
    );

    /// The override for the pair, or `None` when none was set.
    fn get_custom_field(&self, type_identifier: &str, field_identifier: &str) -> Option<&str>;
}

/// Override map keyed by content type identifier, then field identifier.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CustomFields(HashMap<String, HashMap<String, String>>);

impl CustomFields {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, type_identifier: &str, field_identifier: &str, custom_field: &str) {
        self.0
            .entry(type_identifier.to_string())
            .or_default()
            .insert(field_identifier.to_string(), custom_field.to_string());
    }

    pub fn get(&self, type_identifier: &str, field_identifier: &str) -> Option<&str> {
        self.0
            .get(type_identifier)
            .and_then(|fields| fields.get(field_identifier))
            .map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.values().all(HashMap::is_empty)
    }
}
