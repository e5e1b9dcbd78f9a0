//! Mock place provider for deterministic testing.
//!
//! ## Usage
//!
//! ```rust
//! use roost_places::mock::MockPlaceProvider;
//! use roost_core::{BoundingBox, PlaceProvider};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() {
//!     let provider = MockPlaceProvider::new().failing();
//!     let bounds = BoundingBox { north: 1.0, south: 0.0, east: 1.0, west: 0.0 };
//!
//!     let places = provider.search_places(&bounds, None).await;
//!     assert!(places.is_empty());
//!     assert_eq!(provider.call_count(), 1);
//! }
//! ```

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use roost_core::{BoundingBox, Place, PlaceProvider};

/// A single recorded provider invocation.
#[derive(Debug, Clone)]
pub struct MockSearchCall {
    pub bounds: BoundingBox,
    pub search_term: Option<String>,
}

/// Mock provider returning a fixed result set and recording every call.
#[derive(Clone, Default)]
pub struct MockPlaceProvider {
    places: Vec<Place>,
    /// Simulates an outage: ignore the configured places and return empty,
    /// mirroring the real client's fail-open behavior.
    failing: bool,
    call_log: Arc<Mutex<Vec<MockSearchCall>>>,
}

impl MockPlaceProvider {
    /// Create a mock that returns no places.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the places returned by every search.
    pub fn with_places(mut self, places: Vec<Place>) -> Self {
        self.places = places;
        self
    }

    /// Make every search behave like a provider outage.
    pub fn failing(mut self) -> Self {
        self.failing = true;
        self
    }

    /// All recorded calls, for assertions.
    pub fn calls(&self) -> Vec<MockSearchCall> {
        self.call_log.lock().unwrap().clone()
    }

    /// Number of times the provider was invoked.
    pub fn call_count(&self) -> usize {
        self.call_log.lock().unwrap().len()
    }
}

#[async_trait]
impl PlaceProvider for MockPlaceProvider {
    async fn search_places(&self, bounds: &BoundingBox, search_term: Option<&str>) -> Vec<Place> {
        self.call_log.lock().unwrap().push(MockSearchCall {
            bounds: *bounds,
            search_term: search_term.map(str::to_string),
        });

        if self.failing {
            return Vec::new();
        }
        self.places.clone()
    }
}
