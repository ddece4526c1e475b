//! Form state management for the car price form

use super::field::{is_numeric_input, FieldName};
use crate::state::reference::{value_to_form_text, DefaultValues};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Trait for common form operations
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
}

/// Current field values, keyed by field
///
/// A field without an entry reads as blank. Only the fields present are
/// submitted, so after the reference load the key set is that of the
/// defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct FormData {
    values: BTreeMap<FieldName, String>,
}

impl FormData {
    /// All ten fields, blank
    pub fn empty() -> Self {
        Self {
            values: FieldName::ALL
                .into_iter()
                .map(|f| (f, String::new()))
                .collect(),
        }
    }

    /// Replace the form contents with the fetched defaults
    pub fn from_defaults(defaults: &DefaultValues) -> Self {
        Self {
            values: defaults
                .iter()
                .map(|(field, value)| (*field, value_to_form_text(value)))
                .collect(),
        }
    }

    pub fn get(&self, field: FieldName) -> &str {
        self.values.get(&field).map(String::as_str).unwrap_or("")
    }

    pub fn set(&mut self, field: FieldName, value: impl Into<String>) {
        self.values.insert(field, value.into());
    }

    /// Append a typed character; non-numeric input is ignored for number fields
    pub fn push_char(&mut self, field: FieldName, c: char) {
        if field.is_select() || !is_numeric_input(c) {
            return;
        }
        self.values.entry(field).or_default().push(c);
    }

    pub fn pop_char(&mut self, field: FieldName) {
        if let Some(value) = self.values.get_mut(&field) {
            value.pop();
        }
    }

    /// Build the prediction payload.
    ///
    /// Every falsy value (see [`is_falsy`]) is replaced by the field's
    /// default, sent as the raw JSON value. A value still showing its default
    /// is sent the same way, so untouched fields keep the service's JSON type.
    /// A blank field with no default is left out of the payload.
    pub fn merged_with_defaults(&self, defaults: &DefaultValues) -> Map<String, Value> {
        let mut payload = Map::new();
        for (field, value) in &self.values {
            let merged = match defaults.get(field) {
                Some(default)
                    if is_falsy(*field, value) || *value == value_to_form_text(default) =>
                {
                    default.clone()
                }
                None if value.is_empty() => continue,
                _ => Value::String(value.clone()),
            };
            payload.insert(field.as_str().to_string(), merged);
        }
        payload
    }
}

impl Default for FormData {
    fn default() -> Self {
        Self::empty()
    }
}

/// A value that falls back to the default on submission.
///
/// Blank text is falsy, and so is a number field holding zero: an entered
/// `0` is replaced by the default.
pub fn is_falsy(field: FieldName, value: &str) -> bool {
    if value.is_empty() {
        return true;
    }
    !field.is_select() && value.trim().parse::<f64>().is_ok_and(|n| n == 0.0)
}

/// The car price form: values plus keyboard focus
#[derive(Debug, Clone, Default)]
pub struct CarPriceForm {
    pub data: FormData,
    /// 0..=9 are the fields in display order, 10 is the submit button
    pub active_field_index: usize,
}

impl CarPriceForm {
    /// Index of the "Predict Price" button row
    pub const SUBMIT_INDEX: usize = FieldName::ALL.len();

    /// Returns true if the submit button is currently focused
    pub fn is_submit_active(&self) -> bool {
        self.active_field_index == Self::SUBMIT_INDEX
    }

    /// The focused field, or `None` on the submit button
    pub fn active_field_name(&self) -> Option<FieldName> {
        FieldName::ALL.get(self.active_field_index).copied()
    }

    /// Move a select field through placeholder + options, wrapping around
    pub fn cycle_option(&mut self, field: FieldName, options: &[String], forward: bool) {
        if !field.is_select() {
            return;
        }

        // Position 0 is the placeholder, 1..=len the options
        let slots = options.len() + 1;
        let current = options
            .iter()
            .position(|o| o == self.data.get(field))
            .map_or(0, |i| i + 1);
        let next = if forward {
            (current + 1) % slots
        } else {
            (current + slots - 1) % slots
        };

        let value = if next == 0 {
            String::new()
        } else {
            options[next - 1].clone()
        };
        self.data.set(field, value);
    }
}

impl Form for CarPriceForm {
    fn field_count(&self) -> usize {
        Self::SUBMIT_INDEX + 1
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(Self::SUBMIT_INDEX);
    }
}
