//! Integration tests for the search orchestrator.
//!
//! Uses an in-memory repository plus the mock provider so the full
//! cache-check → provider-refresh → upsert → re-query flow runs without a
//! database or network. The Postgres repository has its own test suite in
//! roost-db.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use chrono::{TimeZone, Utc};

use roost_api::services::PlaceSearchService;
use roost_core::{
    BoundingBox, Error, Place, PlaceProvider, PlaceQuery, PlaceRepository, PriceRange, Result,
};
use roost_places::normalize::{
    normalize, ProviderCategory, ProviderGeocodes, ProviderLatLng, ProviderPlace,
};
use roost_places::MockPlaceProvider;

// ============================================================================
// IN-MEMORY REPOSITORY
// ============================================================================

/// HashMap-backed repository mirroring the Postgres semantics: inclusive
/// bbox filter, OR-term matching, id-ordered results, upsert that preserves
/// `created_at` for existing ids.
#[derive(Default, Clone)]
struct MemoryPlaceRepository {
    inner: Arc<Mutex<HashMap<String, Place>>>,
    fail_writes: Arc<AtomicBool>,
}

impl MemoryPlaceRepository {
    fn new() -> Self {
        Self::default()
    }

    fn with_places(places: Vec<Place>) -> Self {
        let repo = Self::new();
        {
            let mut map = repo.inner.lock().unwrap();
            for place in places {
                map.insert(place.id.clone(), place);
            }
        }
        repo
    }

    fn fail_writes(&self) {
        self.fail_writes.store(true, Ordering::SeqCst);
    }
}

#[async_trait]
impl PlaceRepository for MemoryPlaceRepository {
    async fn query(&self, query: &PlaceQuery) -> Result<Vec<Place>> {
        let map = self.inner.lock().unwrap();
        let term = query.effective_term().map(str::to_lowercase);

        let mut matches: Vec<Place> = map
            .values()
            .filter(|p| query.bounds.contains(p.latitude, p.longitude))
            .filter(|p| match &term {
                None => true,
                Some(t) => {
                    let field_matches = |f: &Option<String>| {
                        f.as_deref()
                            .is_some_and(|v| v.to_lowercase().contains(t.as_str()))
                    };
                    p.name.to_lowercase().contains(t.as_str())
                        || field_matches(&p.place_type)
                        || field_matches(&p.city)
                }
            })
            .cloned()
            .collect();

        matches.sort_by(|a, b| a.id.cmp(&b.id));
        matches.truncate(query.limit as usize);
        Ok(matches)
    }

    async fn upsert(&self, places: &[Place]) -> Result<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(Error::Internal("storage offline".to_string()));
        }
        let mut map = self.inner.lock().unwrap();
        for place in places {
            let mut record = place.clone();
            if let Some(existing) = map.get(&place.id) {
                record.created_at = existing.created_at;
            }
            map.insert(record.id.clone(), record);
        }
        Ok(())
    }

    async fn get_by_id(&self, id: &str) -> Result<Option<Place>> {
        Ok(self.inner.lock().unwrap().get(id).cloned())
    }

    async fn count(&self) -> Result<i64> {
        Ok(self.inner.lock().unwrap().len() as i64)
    }
}

/// Provider that never responds within any reasonable timeout.
struct HangingProvider;

#[async_trait]
impl PlaceProvider for HangingProvider {
    async fn search_places(&self, _bounds: &BoundingBox, _term: Option<&str>) -> Vec<Place> {
        tokio::time::sleep(Duration::from_secs(3600)).await;
        Vec::new()
    }
}

// ============================================================================
// FIXTURES
// ============================================================================

fn paris_bounds() -> BoundingBox {
    BoundingBox {
        north: 49.0,
        south: 48.0,
        east: 3.0,
        west: 2.0,
    }
}

fn place(id: &str, name: &str, lat: f64, lng: f64) -> Place {
    Place {
        id: id.to_string(),
        name: name.to_string(),
        place_type: Some("hotel".to_string()),
        address: None,
        city: Some("Paris".to_string()),
        country: Some("France".to_string()),
        latitude: lat,
        longitude: lng,
        rating: None,
        price_range: Some(PriceRange::Upscale),
        amenities: vec!["WiFi".to_string()],
        description: None,
        image_url: None,
        created_at: Utc::now(),
    }
}

fn paris_places(n: usize) -> Vec<Place> {
    (0..n)
        .map(|i| {
            place(
                &format!("hotel-paris-{}", i),
                &format!("Paris Hotel {}", i),
                48.8 + (i as f64) * 0.01,
                2.3,
            )
        })
        .collect()
}

/// The provider-record fixture from the end-to-end scenario: a single
/// "Hotel X" at the center of the Paris viewport.
fn hotel_x_record() -> ProviderPlace {
    ProviderPlace {
        fsq_id: Some("abc".to_string()),
        name: Some("Hotel X".to_string()),
        geocodes: Some(ProviderGeocodes {
            main: Some(ProviderLatLng {
                latitude: Some(48.85),
                longitude: Some(2.35),
            }),
        }),
        categories: vec![ProviderCategory {
            name: Some("Hotel".to_string()),
        }],
        location: None,
        rating: None,
        distance: None,
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[tokio::test]
async fn test_sufficient_cache_skips_provider() {
    let repo = MemoryPlaceRepository::with_places(paris_places(5));
    let provider = MockPlaceProvider::new();
    let service = PlaceSearchService::new(Arc::new(repo), Arc::new(provider.clone()));

    let places = service.search(paris_bounds(), None).await.unwrap();

    assert_eq!(places.len(), 5);
    assert_eq!(provider.call_count(), 0, "provider must not be called");
}

#[tokio::test]
async fn test_sparse_cache_triggers_one_provider_call() {
    let repo = MemoryPlaceRepository::with_places(paris_places(4));
    let provider = MockPlaceProvider::new();
    let service = PlaceSearchService::new(Arc::new(repo), Arc::new(provider.clone()));

    let places = service.search(paris_bounds(), None).await.unwrap();

    // Provider returned nothing, so the original cached set comes back.
    assert_eq!(places.len(), 4);
    assert_eq!(provider.call_count(), 1);
}

#[tokio::test]
async fn test_provider_outage_fails_open() {
    let repo = MemoryPlaceRepository::new();
    let provider = MockPlaceProvider::new().failing();
    let service = PlaceSearchService::new(Arc::new(repo), Arc::new(provider.clone()));

    let places = service.search(paris_bounds(), None).await.unwrap();

    assert!(places.is_empty());
    assert_eq!(provider.call_count(), 1);
}

#[tokio::test]
async fn test_provider_timeout_degrades_to_cached() {
    let repo = MemoryPlaceRepository::with_places(paris_places(2));
    let service = PlaceSearchService::new(Arc::new(repo), Arc::new(HangingProvider))
        .with_provider_timeout(Duration::from_millis(50));

    let places = service.search(paris_bounds(), None).await.unwrap();

    assert_eq!(places.len(), 2);
}

#[tokio::test]
async fn test_storage_failure_propagates() {
    let repo = MemoryPlaceRepository::new();
    repo.fail_writes();
    let fetched = vec![normalize(&hotel_x_record()).unwrap()];
    let provider = MockPlaceProvider::new().with_places(fetched);
    let service = PlaceSearchService::new(Arc::new(repo), Arc::new(provider));

    let result = service.search(paris_bounds(), None).await;

    assert!(matches!(result, Err(Error::Internal(_))));
}

#[tokio::test]
async fn test_invalid_bounds_rejected_before_any_query() {
    let repo = MemoryPlaceRepository::new();
    let provider = MockPlaceProvider::new();
    let service = PlaceSearchService::new(Arc::new(repo), Arc::new(provider.clone()));

    let bounds = BoundingBox {
        north: f64::NAN,
        south: 48.0,
        east: 3.0,
        west: 2.0,
    };
    let result = service.search(bounds, None).await;

    assert!(matches!(result, Err(Error::InvalidInput(_))));
    assert_eq!(provider.call_count(), 0);
}

#[tokio::test]
async fn test_search_term_filters_cache() {
    let mut places = paris_places(5);
    places.push(place("hostel-paris-x", "Backpacker Hostel", 48.86, 2.34));
    let repo = MemoryPlaceRepository::with_places(places);
    let provider = MockPlaceProvider::new();
    let service = PlaceSearchService::new(Arc::new(repo), Arc::new(provider.clone()));

    let found = service
        .search(paris_bounds(), Some("BACKPACKER".to_string()))
        .await
        .unwrap();

    assert_eq!(found.len(), 1);
    assert_eq!(found[0].id, "hostel-paris-x");
    // Only one term match cached, so the refresh path fired.
    assert_eq!(provider.call_count(), 1);
}

#[tokio::test]
async fn test_refresh_merges_and_deduplicates_by_id() {
    let created = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    let mut stale = normalize(&hotel_x_record()).unwrap();
    stale.name = "Hotel X (old listing)".to_string();
    stale.created_at = created;

    let repo = MemoryPlaceRepository::with_places(vec![
        stale,
        place("hotel-paris-0", "Paris Hotel 0", 48.8, 2.3),
    ]);
    let fresh = normalize(&hotel_x_record()).unwrap();
    let provider = MockPlaceProvider::new().with_places(vec![fresh]);
    let service = PlaceSearchService::new(Arc::new(repo), Arc::new(provider));

    let merged = service.search(paris_bounds(), None).await.unwrap();

    assert_eq!(merged.len(), 2, "fs_abc must not be duplicated");
    let hotel_x = merged.iter().find(|p| p.id == "fs_abc").unwrap();
    assert_eq!(hotel_x.name, "Hotel X", "upsert refreshes mutable fields");
    assert_eq!(hotel_x.created_at, created, "created_at survives upsert");
}

#[tokio::test]
async fn test_end_to_end_paris_scenario() {
    let repo = MemoryPlaceRepository::new();
    let fetched = vec![normalize(&hotel_x_record()).unwrap()];
    let provider = MockPlaceProvider::new().with_places(fetched);
    let service = PlaceSearchService::new(Arc::new(repo), Arc::new(provider.clone()));

    let places = service.search(paris_bounds(), None).await.unwrap();

    assert_eq!(places.len(), 1);
    let p = &places[0];
    assert_eq!(p.id, "fs_abc");
    assert_eq!(p.place_type.as_deref(), Some("Hotel"));
    assert_eq!(p.price_range, Some(PriceRange::Upscale));
    assert!(p.amenities.contains(&"WiFi".to_string()));

    // With only one place cached (1 < threshold), a second identical search
    // calls the provider again. Intentional: the threshold policy keeps
    // refreshing sparse viewports.
    let again = service.search(paris_bounds(), None).await.unwrap();
    assert_eq!(again.len(), 1);
    assert_eq!(provider.call_count(), 2);
}

#[tokio::test]
async fn test_custom_threshold_is_honored() {
    let repo = MemoryPlaceRepository::with_places(paris_places(2));
    let provider = MockPlaceProvider::new();
    let service = PlaceSearchService::new(Arc::new(repo), Arc::new(provider.clone()))
        .with_freshness_threshold(2);

    service.search(paris_bounds(), None).await.unwrap();
    assert_eq!(provider.call_count(), 0);
}

#[tokio::test]
async fn test_get_by_id() {
    let repo = MemoryPlaceRepository::with_places(paris_places(1));
    let provider = MockPlaceProvider::new();
    let service = PlaceSearchService::new(Arc::new(repo), Arc::new(provider));

    let found = service.get("hotel-paris-0").await.unwrap();
    assert_eq!(found.name, "Paris Hotel 0");

    let missing = service.get("no-such-place").await;
    assert!(matches!(missing, Err(Error::PlaceNotFound(_))));
}
