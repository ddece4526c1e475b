//! Reference data fetched from the prediction service

use super::forms::FieldName;
use serde_json::Value;
use std::collections::BTreeMap;

/// Allowed option values per categorical field, in service order
pub type UniqueValues = BTreeMap<FieldName, Vec<String>>;

/// Default value per field, kept exactly as the service sent it
pub type DefaultValues = BTreeMap<FieldName, Value>;

/// Option lists and defaults used to populate the form
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReferenceData {
    pub unique_values: UniqueValues,
    pub default_values: DefaultValues,
}

impl ReferenceData {
    /// Options for a field, empty when none were fetched
    pub fn options(&self, field: FieldName) -> &[String] {
        self.unique_values
            .get(&field)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

/// Text shown in the form for a JSON value
pub fn value_to_form_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
