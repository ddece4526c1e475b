//! Wire types of the prediction service

use crate::state::{value_to_form_text, FieldName, ReferenceData};
use serde::Deserialize;
use serde_json::Value;
use std::collections::BTreeMap;

/// Body of `GET /get-unique-values`
#[derive(Debug, Clone, Deserialize)]
pub struct ReferenceDataResponse {
    pub unique_values: BTreeMap<String, Vec<Value>>,
    pub default_values: BTreeMap<String, Value>,
}

/// Body of `POST /predict`
#[derive(Debug, Clone, Deserialize)]
pub struct PredictionResponse {
    pub predicted_price: Option<f64>,
}

impl From<ReferenceDataResponse> for ReferenceData {
    fn from(response: ReferenceDataResponse) -> Self {
        let mut data = ReferenceData::default();

        for (key, values) in response.unique_values {
            match key.parse::<FieldName>() {
                Ok(field) => {
                    let options = values.iter().map(value_to_form_text).collect();
                    data.unique_values.insert(field, options);
                }
                Err(err) => tracing::debug!("Ignoring option list: {err}"),
            }
        }

        for (key, value) in response.default_values {
            match key.parse::<FieldName>() {
                Ok(field) => {
                    data.default_values.insert(field, value);
                }
                Err(err) => tracing::debug!("Ignoring default value: {err}"),
            }
        }

        data
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    const SAMPLE: &str = r#"{
        "unique_values": {
            "car_name": ["Hyundai i20", "Maruti Swift"],
            "fuel_type": ["Petrol", "Diesel"],
            "seats": [4, 5, 7],
            "colour": ["Red"]
        },
        "default_values": {
            "car_name": "Maruti Swift",
            "vehicle_age": 5,
            "km_driven": "50000",
            "colour": "Red"
        }
    }"#;

    #[test]
    fn test_reference_response_converts_to_domain() {
        let response: ReferenceDataResponse = serde_json::from_str(SAMPLE).unwrap();
        let data = ReferenceData::from(response);

        assert_eq!(
            data.options(FieldName::CarName),
            ["Hyundai i20", "Maruti Swift"]
        );
        assert_eq!(data.options(FieldName::Seats), ["4", "5", "7"]);
        assert_eq!(data.default_values.get(&FieldName::VehicleAge), Some(&json!(5)));
        assert_eq!(data.default_values.get(&FieldName::KmDriven), Some(&json!("50000")));
    }

    #[test]
    fn test_unknown_keys_are_dropped() {
        let response: ReferenceDataResponse = serde_json::from_str(SAMPLE).unwrap();
        let data = ReferenceData::from(response);

        assert_eq!(data.unique_values.len(), 3);
        assert_eq!(data.default_values.len(), 3);
    }

    #[test]
    fn test_reference_response_requires_both_sections() {
        let result = serde_json::from_str::<ReferenceDataResponse>(r#"{"unique_values": {}}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_prediction_response() {
        let parsed: PredictionResponse =
            serde_json::from_str(r#"{"predicted_price": 452000.5}"#).unwrap();
        assert_eq!(parsed.predicted_price, Some(452000.5));
    }

    #[test]
    fn test_prediction_response_null_price() {
        let parsed: PredictionResponse =
            serde_json::from_str(r#"{"predicted_price": null}"#).unwrap();
        assert_eq!(parsed.predicted_price, None);

        let parsed: PredictionResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(parsed.predicted_price, None);
    }
}
