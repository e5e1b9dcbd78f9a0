//! Core traits for roost abstractions.
//!
//! These traits define the seams between the search orchestrator and its
//! two data sources: the local place store and the external provider.
//! Concrete implementations live in `roost-db` and `roost-places`; tests
//! substitute in-memory and mock implementations.

use async_trait::async_trait;

use crate::error::Result;
use crate::models::{BoundingBox, Place};

/// Parameters for a store query against the place table.
#[derive(Debug, Clone)]
pub struct PlaceQuery {
    /// Geographic viewport; latitude/longitude filters are inclusive.
    pub bounds: BoundingBox,
    /// Optional case-insensitive substring filter against name, type, or
    /// city (OR semantics). Blank terms are treated as absent.
    pub search_term: Option<String>,
    /// Result cap.
    pub limit: i64,
}

impl PlaceQuery {
    /// Build a query with the default result cap.
    pub fn new(bounds: BoundingBox, search_term: Option<String>) -> Self {
        Self {
            bounds,
            search_term,
            limit: crate::defaults::QUERY_LIMIT,
        }
    }

    /// The effective search term: trimmed, `None` if blank.
    pub fn effective_term(&self) -> Option<&str> {
        self.search_term
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
    }
}

/// Durable storage and geographic/text query of place records.
///
/// The store is the core's single source of truth: failures here are fatal
/// to the request (fail-closed), unlike provider failures.
#[async_trait]
pub trait PlaceRepository: Send + Sync {
    /// Query places within a bounding box, optionally filtered by term.
    /// Zero matches is an empty vec, not an error.
    async fn query(&self, query: &PlaceQuery) -> Result<Vec<Place>>;

    /// Insert new ids and overwrite mutable fields of existing ids, as one
    /// atomic batch. `id` and `created_at` are never overwritten.
    async fn upsert(&self, places: &[Place]) -> Result<()>;

    /// Fetch a single place by id.
    async fn get_by_id(&self, id: &str) -> Result<Option<Place>>;

    /// Total number of stored places (used by bootstrap seeding).
    async fn count(&self) -> Result<i64>;
}

/// Best-effort enrichment from a third-party place provider.
///
/// Implementations are fail-open by contract: any failure (missing
/// credentials, network error, non-2xx, malformed body) returns an empty
/// vec and is logged, never raised. A degraded external integration must
/// not break local search.
#[async_trait]
pub trait PlaceProvider: Send + Sync {
    /// Fetch candidate places for a bounding box, normalized to the
    /// canonical schema.
    async fn search_places(&self, bounds: &BoundingBox, search_term: Option<&str>) -> Vec<Place>;
}
