//! Trait abstraction for the prediction client to enable mocking in tests

use super::error::ApiError;
use crate::state::ReferenceData;
use async_trait::async_trait;
use serde_json::{Map, Value};

/// Operations offered by the prediction service
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PredictionApi: Send + Sync {
    /// Fetch option lists and default values for the form
    async fn fetch_reference_data(&self) -> Result<ReferenceData, ApiError>;

    /// Request a price prediction for a complete set of vehicle attributes
    async fn predict(&self, payload: Map<String, Value>) -> Result<Option<f64>, ApiError>;
}
