//! Application state definitions

use super::forms::{CarPriceForm, FieldKind, FieldName, FormData};
use super::reference::ReferenceData;
use serde_json::{Map, Value};

/// Coarse lifecycle of the form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadState {
    /// Start-up fetch not completed (or failed)
    #[default]
    AwaitingReferenceData,
    /// Option lists and defaults are loaded
    Ready,
}

/// Main application state
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub load_state: LoadState,
    pub form: CarPriceForm,
    pub reference: ReferenceData,
    /// Last price returned by the service
    pub predicted_price: Option<f64>,
}

impl AppState {
    pub fn is_ready(&self) -> bool {
        self.load_state == LoadState::Ready
    }

    /// Seed option lists, defaults and form values from the fetched data
    pub fn apply_reference_data(&mut self, data: ReferenceData) {
        self.form.data = FormData::from_defaults(&data.default_values);
        self.reference = data;
        self.load_state = LoadState::Ready;
    }

    /// Payload for the next prediction request
    pub fn submission_payload(&self) -> Map<String, Value> {
        self.form
            .data
            .merged_with_defaults(&self.reference.default_values)
    }

    pub fn set_predicted_price(&mut self, price: Option<f64>) {
        self.predicted_price = price;
    }

    /// Price to show; a zero or NaN price hides the result panel
    pub fn visible_price(&self) -> Option<f64> {
        self.predicted_price.filter(|p| *p != 0.0 && !p.is_nan())
    }

    /// Entries of a select field as displayed: placeholder first, then options
    pub fn select_choices(&self, field: FieldName) -> Vec<&str> {
        let FieldKind::Select { placeholder } = field.kind() else {
            return Vec::new();
        };
        std::iter::once(placeholder)
            .chain(self.reference.options(field).iter().map(String::as_str))
            .collect()
    }

    /// Option a select field currently shows, `None` for the placeholder.
    ///
    /// A value that is not among the fetched options shows the placeholder.
    pub fn selected_option(&self, field: FieldName) -> Option<&str> {
        let value = self.form.data.get(field);
        self.reference
            .options(field)
            .iter()
            .find(|o| o.as_str() == value)
            .map(String::as_str)
    }

    /// Cycle the focused select field through its options
    pub fn cycle_active_option(&mut self, forward: bool) {
        if let Some(field) = self.form.active_field_name() {
            let options = self.reference.options(field).to_vec();
            self.form.cycle_option(field, &options, forward);
        }
    }

    pub fn input_char(&mut self, c: char) {
        if let Some(field) = self.form.active_field_name() {
            self.form.data.push_char(field, c);
        }
    }

    pub fn backspace(&mut self) {
        if let Some(field) = self.form.active_field_name() {
            self.form.data.pop_char(field);
        }
    }
}
