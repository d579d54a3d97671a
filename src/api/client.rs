//! Metrics API Client
//!
//! A client for the ad-metrics backend, fetching the summary and realtime
//! series consumed by the dashboard.

use crate::api::MetricsApi;
use crate::api::error::ApiError;
use crate::environment::Environment;
use crate::metrics::{RealtimeRecord, SummaryRecord};
use reqwest::{Client, ClientBuilder, Response};
use serde::de::DeserializeOwned;
use std::time::Duration;

// User-Agent string with CLI version
const USER_AGENT: &str = concat!("adwatch/", env!("CARGO_PKG_VERSION"));

/// Response envelope both endpoints wrap their payload in. Only `data` is
/// consumed; other envelope fields (e.g. `success`) are ignored.
#[derive(Debug, serde::Deserialize)]
struct Envelope<T> {
    data: Vec<T>,
}

#[derive(Debug, Clone)]
pub struct MetricsClient {
    client: Client,
    environment: Environment,
}

impl MetricsClient {
    pub fn new(environment: Environment) -> Self {
        Self {
            client: ClientBuilder::new()
                .connect_timeout(Duration::from_secs(10))
                .timeout(Duration::from_secs(10))
                .build()
                .expect("Failed to create HTTP client"),
            environment,
        }
    }

    fn build_url(&self, endpoint: &str) -> String {
        format!(
            "{}/{}",
            self.environment.api_base_url().trim_end_matches('/'),
            endpoint.trim_start_matches('/')
        )
    }

    fn decode_response<T: DeserializeOwned>(body: &str) -> Result<Vec<T>, ApiError> {
        let envelope: Envelope<T> = serde_json::from_str(body)?;
        Ok(envelope.data)
    }

    async fn handle_response_status(response: Response) -> Result<Response, ApiError> {
        if !response.status().is_success() {
            return Err(ApiError::from_response(response).await);
        }
        Ok(response)
    }

    async fn get_request<T: DeserializeOwned>(&self, endpoint: &str) -> Result<Vec<T>, ApiError> {
        let url = self.build_url(endpoint);
        let response = self
            .client
            .get(&url)
            .header("User-Agent", USER_AGENT)
            .send()
            .await?;

        let response = Self::handle_response_status(response).await?;
        let body = response.text().await?;
        Self::decode_response(&body)
    }
}

#[async_trait::async_trait]
impl MetricsApi for MetricsClient {
    fn environment(&self) -> &Environment {
        &self.environment
    }

    async fn fetch_summary(&self) -> Result<Vec<SummaryRecord>, ApiError> {
        self.get_request("/metrics/summary").await
    }

    async fn fetch_realtime(&self) -> Result<Vec<RealtimeRecord>, ApiError> {
        self.get_request("/metrics/realtime").await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_url_joins_base_and_endpoint_with_single_slash() {
        let client = MetricsClient::new(Environment::Custom {
            api_base_url: "http://localhost:8000/".to_string(),
        });
        assert_eq!(
            client.build_url("/metrics/summary"),
            "http://localhost:8000/metrics/summary"
        );
        assert_eq!(
            client.build_url("metrics/realtime"),
            "http://localhost:8000/metrics/realtime"
        );
    }

    #[test]
    fn decodes_enveloped_summary_payload() {
        let body = r#"{
            "success": true,
            "data": [{
                "date": "2024-01-01",
                "campaign_id": "C1",
                "total_impressions": 1000,
                "total_clicks": 50,
                "total_conversions": 5,
                "total_spend": 200.0,
                "avg_ctr": 5.0,
                "avg_cpc": 4.0
            }]
        }"#;
        let records: Vec<SummaryRecord> = MetricsClient::decode_response(body).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].date, "2024-01-01");
        assert_eq!(records[0].total_clicks, 50);
    }

    #[test]
    fn decodes_empty_data_array() {
        let records: Vec<RealtimeRecord> =
            MetricsClient::decode_response(r#"{"success": true, "data": []}"#).unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn malformed_body_is_a_decode_error() {
        let result: Result<Vec<SummaryRecord>, ApiError> =
            MetricsClient::decode_response(r#"{"rows": []}"#);
        assert!(matches!(result, Err(ApiError::Decode(_))));
    }

    #[tokio::test]
    #[ignore] // Requires a running metrics backend at localhost:8000.
    async fn fetches_both_series_from_live_backend() {
        let client = MetricsClient::new(Environment::Local);
        client.fetch_summary().await.unwrap();
        client.fetch_realtime().await.unwrap();
    }
}
