//! Centralized default constants for the roost system.
//!
//! **This module is the single source of truth** for shared default values.
//! All crates reference these constants instead of defining their own magic
//! numbers. When adding new constants, place them in the appropriate section
//! and document the rationale for the chosen value.

// =============================================================================
// SEARCH
// =============================================================================

/// Minimum cached result count below which a provider refresh is attempted.
///
/// Bounds provider call volume (free-tier rate limits) while guaranteeing a
/// minimum usefulness floor for sparsely-cached viewports.
pub const FRESHNESS_THRESHOLD: usize = 5;

/// Maximum places returned by a store query.
pub const QUERY_LIMIT: i64 = 100;

// =============================================================================
// PROVIDER
// =============================================================================

/// Maximum results requested from the external provider per search.
pub const PROVIDER_RESULT_LIMIT: u32 = 50;

/// Lower clamp for the provider search radius in meters.
pub const PROVIDER_MIN_RADIUS_M: f64 = 1_000.0;

/// Upper clamp for the provider search radius in meters.
/// Matches the provider's maximum accepted radius.
pub const PROVIDER_MAX_RADIUS_M: f64 = 50_000.0;

/// Timeout for a provider search request in seconds.
pub const PROVIDER_TIMEOUT_SECS: u64 = 8;

/// Default provider place-search endpoint.
pub const FOURSQUARE_SEARCH_URL: &str = "https://api.foursquare.com/v3/places/search";

/// Prefix for provider-derived place ids, keeping them in a separate
/// namespace from locally-seeded slugs.
pub const PROVIDER_ID_PREFIX: &str = "fs_";

/// Hospitality category codes in the provider's taxonomy
/// (Hotels & Lodging, Bed & Breakfast, Hostel, Hotel, Motel, Resort,
/// Vacation Rental).
pub const HOSPITALITY_CATEGORIES: &[&str] = &[
    "19014", "19032", "19033", "19034", "19035", "19036", "19037",
];

// =============================================================================
// GEO
// =============================================================================

/// Meters per degree of latitude (and of longitude at the equator).
pub const METERS_PER_DEGREE: f64 = 111_000.0;

// =============================================================================
// SERVER
// =============================================================================

/// Default HTTP server port.
pub const SERVER_PORT: u16 = 4000;
