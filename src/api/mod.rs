use crate::api::error::ApiError;
use crate::environment::Environment;
use crate::metrics::{RealtimeRecord, SummaryRecord};

pub(crate) mod client;
pub use client::MetricsClient;
pub mod error;

#[cfg(test)]
use mockall::{automock, predicate::*};

#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait MetricsApi: Send + Sync {
    fn environment(&self) -> &Environment;

    /// Fetch the per-campaign daily summary series.
    async fn fetch_summary(&self) -> Result<Vec<SummaryRecord>, ApiError>;

    /// Fetch the per-minute realtime series.
    async fn fetch_realtime(&self) -> Result<Vec<RealtimeRecord>, ApiError>;
}
