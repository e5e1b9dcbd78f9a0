//! Structured logging schema and field name constants for roost.
//!
//! All crates use these constants for consistent structured logging fields,
//! so log aggregation tools can query by standardized field names across
//! every subsystem.
//!
//! ## Log Level Contract
//!
//! | Level | Usage |
//! |-------|-------|
//! | ERROR | Degraded service, requires operator attention |
//! | WARN  | Recoverable issue, automatic fallback applied |
//! | INFO  | Lifecycle events (startup, shutdown), operation completions |
//! | DEBUG | Decision points, intermediate values, config choices |
//! | TRACE | Per-item iteration, high-volume data |

// ─── Identity fields ───────────────────────────────────────────────────────

/// Subsystem originating the log event.
/// Values: "api", "db", "places"
pub const SUBSYSTEM: &str = "subsystem";

/// Component within a subsystem.
/// Examples: "place_search", "foursquare", "pool", "seed"
pub const COMPONENT: &str = "component";

/// Logical operation name.
/// Examples: "search", "upsert", "fetch_places"
pub const OPERATION: &str = "op";

// ─── Entity fields ─────────────────────────────────────────────────────────

/// Place id being operated on.
pub const PLACE_ID: &str = "place_id";

/// Search term text.
pub const QUERY: &str = "query";

// ─── Measurement fields ────────────────────────────────────────────────────

/// Wall-clock duration in milliseconds.
pub const DURATION_MS: &str = "duration_ms";

/// Number of results returned by a search or query.
pub const RESULT_COUNT: &str = "result_count";

/// Number of cached places found before a provider refresh decision.
pub const CACHED_COUNT: &str = "cached_count";

/// Number of places fetched from the external provider.
pub const FETCHED_COUNT: &str = "fetched_count";

/// Provider search radius in meters.
pub const RADIUS_M: &str = "radius_m";

// ─── Database fields ───────────────────────────────────────────────────────

/// Number of active connections in the pool.
pub const POOL_SIZE: &str = "pool_size";

/// Number of idle connections in the pool.
pub const POOL_IDLE: &str = "pool_idle";

// ─── Outcome fields ────────────────────────────────────────────────────────

/// Boolean success/failure indicator.
pub const SUCCESS: &str = "success";

/// Error message when an operation fails.
pub const ERROR_MSG: &str = "error";
