//! Service layer: business logic between the HTTP handlers and the
//! repositories.

pub mod place_search;

pub use place_search::PlaceSearchService;
