//! Search orchestration: local cache first, provider refresh on miss.
//!
//! The orchestrator reconciles the two data sources. The local store is the
//! source of truth and fail-closed; the provider is best-effort enrichment
//! and fail-open. When the cache holds fewer than the freshness threshold
//! of places for a viewport, one provider call is attempted, its results
//! are upserted, and the same query is re-run so the caller sees the merged,
//! de-duplicated set (read-your-writes within the request). There is no
//! retry loop: at most one provider call per search invocation.

use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio::time::timeout;
use tracing::{debug, info, warn};

use roost_core::defaults::{FRESHNESS_THRESHOLD, PROVIDER_TIMEOUT_SECS};
use roost_core::{BoundingBox, Error, Place, PlaceProvider, PlaceQuery, PlaceRepository, Result};

/// Coordinates the local place store and the external provider.
#[derive(Clone)]
pub struct PlaceSearchService {
    repo: Arc<dyn PlaceRepository>,
    provider: Arc<dyn PlaceProvider>,
    freshness_threshold: usize,
    provider_timeout: Duration,
}

impl PlaceSearchService {
    /// Create a service with the default freshness threshold and provider
    /// timeout.
    pub fn new(repo: Arc<dyn PlaceRepository>, provider: Arc<dyn PlaceProvider>) -> Self {
        Self {
            repo,
            provider,
            freshness_threshold: FRESHNESS_THRESHOLD,
            provider_timeout: Duration::from_secs(PROVIDER_TIMEOUT_SECS),
        }
    }

    /// Override the freshness threshold (minimum cached count below which a
    /// provider refresh is attempted).
    pub fn with_freshness_threshold(mut self, threshold: usize) -> Self {
        self.freshness_threshold = threshold;
        self
    }

    /// Override the provider call timeout.
    pub fn with_provider_timeout(mut self, timeout: Duration) -> Self {
        self.provider_timeout = timeout;
        self
    }

    /// Search places within a viewport, refreshing from the provider when
    /// the cache is sparse.
    ///
    /// Provider failures (including timeout) degrade to cached-only
    /// results; storage failures propagate.
    pub async fn search(
        &self,
        bounds: BoundingBox,
        search_term: Option<String>,
    ) -> Result<Vec<Place>> {
        bounds.validate()?;
        let start = Instant::now();

        let query = PlaceQuery::new(bounds, search_term);
        let cached = self.repo.query(&query).await?;

        if cached.len() >= self.freshness_threshold {
            debug!(
                subsystem = "api",
                component = "place_search",
                op = "search",
                cached_count = cached.len(),
                "Cache sufficient, skipping provider refresh"
            );
            return Ok(cached);
        }

        info!(
            subsystem = "api",
            component = "place_search",
            op = "refresh",
            cached_count = cached.len(),
            "Cache below freshness threshold, fetching from provider"
        );

        let fetched = match timeout(
            self.provider_timeout,
            self.provider.search_places(&bounds, query.effective_term()),
        )
        .await
        {
            Ok(places) => places,
            Err(_) => {
                warn!(
                    subsystem = "api",
                    component = "place_search",
                    op = "refresh",
                    timeout_secs = self.provider_timeout.as_secs(),
                    "Provider call timed out, using cached results only"
                );
                Vec::new()
            }
        };

        if fetched.is_empty() {
            return Ok(cached);
        }

        self.repo.upsert(&fetched).await?;

        // Re-run the identical query: the upsert de-duplicated by id, so
        // the merged result needs no in-memory reconciliation.
        let merged = self.repo.query(&query).await?;

        info!(
            subsystem = "api",
            component = "place_search",
            op = "search",
            fetched_count = fetched.len(),
            result_count = merged.len(),
            duration_ms = start.elapsed().as_millis() as u64,
            "Search merged provider results"
        );
        Ok(merged)
    }

    /// Fetch a single place by id.
    pub async fn get(&self, id: &str) -> Result<Place> {
        self.repo
            .get_by_id(id)
            .await?
            .ok_or_else(|| Error::PlaceNotFound(id.to_string()))
    }
}
