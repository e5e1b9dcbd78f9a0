//! Foursquare Places API client.
//!
//! Fetches candidate hospitality places for a bounding box and normalizes
//! them into the canonical schema. The client is fail-open by design: any
//! failure (missing credentials, network error, timeout, non-2xx response,
//! malformed body) logs a warning and yields an empty result. A degraded
//! external integration must never break local search.

use std::time::{Duration, Instant};

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, info, warn};

use roost_core::defaults::{
    FOURSQUARE_SEARCH_URL, HOSPITALITY_CATEGORIES, PROVIDER_RESULT_LIMIT, PROVIDER_TIMEOUT_SECS,
};
use roost_core::{BoundingBox, Place, PlaceProvider};

use crate::geo::covering_radius_m;
use crate::normalize::{normalize, ProviderSearchResponse};

/// Foursquare-backed place provider.
pub struct FoursquareClient {
    client: Client,
    api_key: Option<String>,
    base_url: String,
}

impl FoursquareClient {
    /// Create a client with the given API key. `None` disables external
    /// fetching entirely (every search returns empty).
    pub fn new(api_key: Option<String>) -> Self {
        Self::with_base_url(api_key, FOURSQUARE_SEARCH_URL.to_string())
    }

    /// Create a client pointed at a custom search endpoint (used by tests
    /// against a local mock server).
    pub fn with_base_url(api_key: Option<String>, base_url: String) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(PROVIDER_TIMEOUT_SECS))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            api_key,
            base_url,
        }
    }

    /// Create from environment variables.
    ///
    /// Reads `FOURSQUARE_API_KEY`; a missing key degrades to "provider
    /// returns no results" rather than an error.
    pub fn from_env() -> Self {
        let api_key = std::env::var("FOURSQUARE_API_KEY").ok().filter(|k| !k.is_empty());
        if api_key.is_none() {
            info!(
                subsystem = "places",
                component = "foursquare",
                "No API key configured, external fetch disabled"
            );
        }
        Self::new(api_key)
    }

    async fn fetch(
        &self,
        bounds: &BoundingBox,
        search_term: Option<&str>,
    ) -> Result<Vec<Place>, String> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| "no API key configured".to_string())?;

        let (center_lat, center_lng) = bounds.center();
        let radius = covering_radius_m(bounds);

        let mut request = self
            .client
            .get(&self.base_url)
            .header("Accept", "application/json")
            .header("Authorization", api_key)
            .query(&[
                ("ll", format!("{},{}", center_lat, center_lng)),
                ("radius", format!("{}", radius.round() as i64)),
                ("categories", HOSPITALITY_CATEGORIES.join(",")),
                ("limit", PROVIDER_RESULT_LIMIT.to_string()),
            ]);

        if let Some(term) = search_term.map(str::trim).filter(|t| !t.is_empty()) {
            request = request.query(&[("query", term)]);
        }

        let response = request.send().await.map_err(|e| e.to_string())?;

        let status = response.status();
        if !status.is_success() {
            return Err(format!("API returned {}", status));
        }

        let body: ProviderSearchResponse =
            response.json().await.map_err(|e| e.to_string())?;

        debug!(
            subsystem = "places",
            component = "foursquare",
            op = "fetch_places",
            radius_m = radius.round() as i64,
            result_count = body.results.len(),
            "Provider search returned"
        );

        // Per-record normalization failures are dropped, not fatal.
        Ok(body.results.iter().filter_map(normalize).collect())
    }
}

#[async_trait]
impl PlaceProvider for FoursquareClient {
    async fn search_places(&self, bounds: &BoundingBox, search_term: Option<&str>) -> Vec<Place> {
        let start = Instant::now();

        match self.fetch(bounds, search_term).await {
            Ok(places) => {
                info!(
                    subsystem = "places",
                    component = "foursquare",
                    op = "search",
                    result_count = places.len(),
                    duration_ms = start.elapsed().as_millis() as u64,
                    "Fetched places from provider"
                );
                places
            }
            Err(reason) => {
                warn!(
                    subsystem = "places",
                    component = "foursquare",
                    op = "search",
                    error = %reason,
                    duration_ms = start.elapsed().as_millis() as u64,
                    "Provider fetch failed, continuing without external results"
                );
                Vec::new()
            }
        }
    }
}
