use std::{fmt::Debug, sync::Arc, time::Duration};

use serde::de::DeserializeOwned;

use super::metrics::{Endpoint, RequestMetrics};
use super::types::{RiotApiError, RiotApiResponse};

pub struct RiotClient {
    client: reqwest::Client,
    /// Riot API Key
    key: String,
    base_url: Option<String>,
    metrics: Arc<RequestMetrics>,
}

impl Debug for RiotClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RiotClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl RiotClient {
    pub fn new(
        key: String,
        base_url: Option<String>,
        timeout: Option<Duration>,
        metrics: Arc<RequestMetrics>,
    ) -> reqwest::Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            key,
            base_url: base_url.map(|url| url.trim_end_matches('/').to_string()),
            metrics,
        })
    }

    /// Base URL for a routing value (`europe`, `euw1`, ...).
    pub fn base_url(&self, routing: &str) -> String {
        match &self.base_url {
            Some(base) => format!("{}/{}", base, routing),
            None => format!("https://{}.api.riotgames.com", routing),
        }
    }

    pub fn metrics(&self) -> &Arc<RequestMetrics> {
        &self.metrics
    }

    /// Shared GET logic: credential header, success check and JSON decoding.
    /// Every call is counted against `endpoint`, failures once more.
    pub async fn get<T: DeserializeOwned + Debug>(
        &self,
        endpoint: Endpoint,
        url: &str,
    ) -> RiotApiResponse<T> {
        self.metrics.record(endpoint);

        let res = self.fetch(url).await;
        if res.is_err() {
            self.metrics.record_failure();
        }
        res
    }

    async fn fetch<T: DeserializeOwned>(&self, url: &str) -> RiotApiResponse<T> {
        let res = self
            .client
            .get(url)
            .header("X-Riot-Token", &self.key)
            .send()
            .await?;

        let status = res.status();
        if !status.is_success() {
            return Err(RiotApiError::Status(status));
        }

        Ok(res.json().await?)
    }
}
