//! StormGlass point-forecast client with per-coordinate caching.

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::cache::TtlCache;
use crate::error::StormGlassError;
use crate::types::{ForecastPoint, StormGlassForecastResponse, API_PARAMS};

const STORMGLASS_API_BASE: &str = "https://api.stormglass.io/v2";
const STORMGLASS_API_SOURCE: &str = "noaa";

/// Client settings, embedded in the application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StormGlassConfig {
    /// Base URL of the StormGlass API.
    pub api_url: String,

    /// API key sent in the `Authorization` header.
    pub api_token: String,

    /// Source model whose values are selected from multi-source
    /// measurements.
    pub source: String,

    /// How long fetched points stay cached, in seconds.
    pub cache_ttl_secs: u64,

    /// Per-request timeout, in seconds.
    pub request_timeout_secs: u64,
}

impl Default for StormGlassConfig {
    fn default() -> Self {
        Self {
            api_url: STORMGLASS_API_BASE.to_string(),
            api_token: String::new(),
            source: STORMGLASS_API_SOURCE.to_string(),
            cache_ttl_secs: 3600,
            request_timeout_secs: 10,
        }
    }
}

pub struct StormGlassClient {
    client: reqwest::Client,
    base_url: String,
    api_token: String,
    source: String,
    cache: Arc<TtlCache<Vec<ForecastPoint>>>,
    cache_ttl: Duration,
}

impl StormGlassClient {
    /// Build a client from settings and a shared cache.
    ///
    /// The cache is injected rather than owned so every client in the
    /// process sees the same entries.
    pub fn new(
        config: &StormGlassConfig,
        cache: Arc<TtlCache<Vec<ForecastPoint>>>,
    ) -> Result<Self, StormGlassError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|e| StormGlassError::Request(e.to_string()))?;

        Ok(Self {
            client,
            base_url: config.api_url.clone(),
            api_token: config.api_token.clone(),
            source: config.source.clone(),
            cache,
            cache_ttl: Duration::from_secs(config.cache_ttl_secs),
        })
    }

    /// Fetch the normalized hourly forecast for a coordinate pair,
    /// consulting the cache first.
    #[instrument(skip(self), level = "info")]
    pub async fn fetch_points(
        &self,
        lat: f64,
        lng: f64,
    ) -> Result<Vec<ForecastPoint>, StormGlassError> {
        let key = cache_key(lat, lng);

        if let Some(points) = self.cache.get(&key) {
            tracing::info!(%key, "returning forecast points from cache");
            return Ok(points);
        }

        let points = self.fetch_from_api(lat, lng).await?;
        tracing::info!(%key, "updating forecast points cache");
        self.cache.set(&key, points.clone(), self.cache_ttl);
        Ok(points)
    }

    async fn fetch_from_api(
        &self,
        lat: f64,
        lng: f64,
    ) -> Result<Vec<ForecastPoint>, StormGlassError> {
        // Forecast window ends one day from now.
        let end = (Utc::now() + chrono::Duration::days(1)).timestamp();
        let url = format!(
            "{}/weather/point?lat={}&lng={}&params={}&source={}&end={}",
            self.base_url,
            lat,
            lng,
            API_PARAMS.join(","),
            self.source,
            end,
        );

        let response = self
            .client
            .get(&url)
            .header("Authorization", self.api_token.as_str())
            .send()
            .await
            .map_err(|e| StormGlassError::Request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(StormGlassError::Response {
                status: status.as_u16(),
                body,
            });
        }

        let raw: StormGlassForecastResponse = response
            .json()
            .await
            .map_err(|e| StormGlassError::Request(e.to_string()))?;

        Ok(raw.normalize(&self.source))
    }
}

/// Cache key derived from the exact coordinate pair, no rounding.
fn cache_key(lat: f64, lng: f64) -> String {
    format!("forecast_points_{lat}_{lng}")
}
