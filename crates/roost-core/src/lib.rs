//! # roost-core
//!
//! Core types, traits, and abstractions for the roost places backend.
//!
//! This crate provides the canonical data model (places, bounding boxes),
//! the error taxonomy, and the trait seams that the database and provider
//! crates implement.

pub mod defaults;
pub mod error;
pub mod logging;
pub mod models;
pub mod traits;

// Re-export commonly used types at crate root
pub use error::{Error, Result};
pub use models::{BoundingBox, Place, PriceRange};
pub use traits::{PlaceProvider, PlaceQuery, PlaceRepository};
