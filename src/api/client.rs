//! HTTP client for communicating with the prediction service
//!
//! Both endpoints speak JSON. Responses are read as text and decoded with
//! serde so transport, status and decoding failures stay distinct in logs.

use super::error::ApiError;
use super::traits::PredictionApi;
use super::types::{PredictionResponse, ReferenceDataResponse};
use crate::state::ReferenceData;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

/// Default prediction service address
pub const DEFAULT_BASE_URL: &str = "https://cpp-backend-xbv0.onrender.com";

const REFERENCE_DATA_PATH: &str = "get-unique-values";
const PREDICT_PATH: &str = "predict";

/// Client for communicating with the prediction service
#[derive(Debug, Clone)]
pub struct PredictionClient {
    http: reqwest::Client,
    base_url: String,
}

impl PredictionClient {
    /// Create a new client for the given base URL
    pub fn new(base_url: impl Into<String>) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(ApiError::Client)?;
        Ok(Self {
            http,
            base_url: base_url.into(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), path)
    }

    /// Send a request and decode a successful JSON body
    async fn send_json<T: DeserializeOwned>(
        &self,
        url: &str,
        request: reqwest::RequestBuilder,
    ) -> Result<T, ApiError> {
        let transport = |source| ApiError::Transport {
            url: url.to_string(),
            source,
        };

        let response = request.send().await.map_err(transport)?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                url: url.to_string(),
                status,
            });
        }

        let body = response.text().await.map_err(transport)?;
        serde_json::from_str(&body).map_err(|source| ApiError::Decode {
            url: url.to_string(),
            source,
        })
    }
}

#[async_trait]
impl PredictionApi for PredictionClient {
    async fn fetch_reference_data(&self) -> Result<ReferenceData, ApiError> {
        let url = self.endpoint(REFERENCE_DATA_PATH);
        tracing::debug!("GET {url}");

        let response: ReferenceDataResponse = self.send_json(&url, self.http.get(&url)).await?;
        Ok(response.into())
    }

    async fn predict(&self, payload: Map<String, Value>) -> Result<Option<f64>, ApiError> {
        let url = self.endpoint(PREDICT_PATH);
        tracing::debug!("POST {url}");

        let response: PredictionResponse = self
            .send_json(&url, self.http.post(&url).json(&payload))
            .await?;
        Ok(response.predicted_price)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::FieldName;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::{TcpListener, TcpStream};
    use tokio::task::JoinHandle;

    /// Serve exactly one HTTP response on a local port, returning the raw request
    async fn serve_once(status_line: &'static str, body: &'static str) -> (String, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let request = read_request(&mut socket).await;
            let response = format!(
                "HTTP/1.1 {status_line}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
                body.len()
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            let _ = socket.shutdown().await;
            request
        });

        (format!("http://{addr}"), handle)
    }

    /// Client for a local test server, bypassing any system proxy
    fn local_client(base_url: String) -> PredictionClient {
        PredictionClient {
            http: reqwest::Client::builder().no_proxy().build().unwrap(),
            base_url,
        }
    }

    async fn read_request(socket: &mut TcpStream) -> String {
        let mut buf = Vec::new();
        let mut chunk = [0u8; 1024];
        loop {
            let n = socket.read(&mut chunk).await.unwrap();
            if n == 0 {
                break;
            }
            buf.extend_from_slice(&chunk[..n]);

            if let Some(end) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
                let headers = String::from_utf8_lossy(&buf[..end]).to_lowercase();
                let content_length = headers
                    .lines()
                    .find_map(|l| l.strip_prefix("content-length:"))
                    .and_then(|v| v.trim().parse::<usize>().ok())
                    .unwrap_or(0);
                if buf.len() >= end + 4 + content_length {
                    break;
                }
            }
        }
        String::from_utf8_lossy(&buf).into_owned()
    }

    #[test]
    fn test_endpoint_joins_paths() {
        let client = PredictionClient::new("http://localhost:5000/").unwrap();
        assert_eq!(
            client.endpoint(REFERENCE_DATA_PATH),
            "http://localhost:5000/get-unique-values"
        );

        let client = PredictionClient::new("http://localhost:5000").unwrap();
        assert_eq!(client.endpoint(PREDICT_PATH), "http://localhost:5000/predict");
    }

    #[test]
    fn test_default_base_url() {
        let client = PredictionClient::new(DEFAULT_BASE_URL).unwrap();
        assert_eq!(client.base_url(), "https://cpp-backend-xbv0.onrender.com");
    }

    #[tokio::test]
    async fn test_fetch_reference_data() {
        let (base, server) = serve_once(
            "200 OK",
            r#"{"unique_values":{"fuel_type":["Petrol","Diesel"]},"default_values":{"km_driven":"50000"}}"#,
        )
        .await;
        let client = local_client(base);

        let data = client.fetch_reference_data().await.unwrap();
        assert_eq!(data.options(FieldName::FuelType), ["Petrol", "Diesel"]);
        assert_eq!(data.default_values.get(&FieldName::KmDriven), Some(&json!("50000")));

        let request = server.await.unwrap();
        assert!(request.starts_with("GET /get-unique-values HTTP/1.1"));
    }

    #[tokio::test]
    async fn test_predict_posts_json_payload() {
        let (base, server) = serve_once("200 OK", r#"{"predicted_price": 250000.0}"#).await;
        let client = local_client(base);

        let mut payload = Map::new();
        payload.insert("km_driven".to_string(), json!("50000"));
        let price = client.predict(payload).await.unwrap();
        assert_eq!(price, Some(250000.0));

        let request = server.await.unwrap();
        assert!(request.starts_with("POST /predict HTTP/1.1"));
        assert!(request.to_lowercase().contains("content-type: application/json"));
        assert!(request.ends_with(r#"{"km_driven":"50000"}"#));
    }

    #[tokio::test]
    async fn test_error_status_is_reported() {
        let (base, server) = serve_once("500 Internal Server Error", r#"{"error":"boom"}"#).await;
        let client = local_client(base);

        let err = client.predict(Map::new()).await.unwrap_err();
        assert!(matches!(
            err,
            ApiError::Status { status, .. } if status == reqwest::StatusCode::INTERNAL_SERVER_ERROR
        ));
        server.await.unwrap();
    }

    #[tokio::test]
    async fn test_error_status_ignores_priced_body() {
        let (base, server) =
            serve_once("500 Internal Server Error", r#"{"predicted_price": 250000.0}"#).await;
        let client = local_client(base);

        let mut payload = Map::new();
        payload.insert("seats".to_string(), json!(5));
        let err = client.predict(payload).await.unwrap_err();
        assert!(matches!(err, ApiError::Status { .. }));
        assert!(err.to_string().contains("500"));
        server.await.unwrap();
    }

    #[tokio::test]
    async fn test_malformed_body_is_a_decode_error() {
        let (base, server) = serve_once("200 OK", "not json").await;
        let client = local_client(base);

        let err = client.fetch_reference_data().await.unwrap_err();
        assert!(matches!(err, ApiError::Decode { .. }));
        assert!(err.to_string().starts_with("malformed response from http://127.0.0.1:"));
        server.await.unwrap();
    }

    #[tokio::test]
    async fn test_unreachable_service_is_a_transport_error() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = local_client(format!("http://{addr}"));
        let err = client.fetch_reference_data().await.unwrap_err();
        assert!(matches!(err, ApiError::Transport { .. }));
    }
}
