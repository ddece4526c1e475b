//! Prediction service client module for HTTP/JSON communication

mod client;
mod error;
mod traits;
mod types;

pub use client::{PredictionClient, DEFAULT_BASE_URL};
pub use error::ApiError;
pub use traits::PredictionApi;

#[cfg(test)]
pub use traits::MockPredictionApi;
