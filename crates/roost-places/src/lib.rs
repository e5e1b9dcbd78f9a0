//! # roost-places
//!
//! External place-provider integration for roost.
//!
//! This crate owns everything between the search orchestrator and the
//! third-party places API: the HTTP client, the viewport-to-radius
//! conversion, and the normalization of provider-native records into the
//! canonical [`roost_core::Place`] schema. It also ships a mock provider
//! for orchestrator tests.

pub mod foursquare;
pub mod geo;
pub mod mock;
pub mod normalize;

pub use foursquare::FoursquareClient;
pub use geo::covering_radius_m;
pub use mock::MockPlaceProvider;
pub use normalize::{normalize, ProviderPlace, ProviderSearchResponse};
