//! Structured logging schema and field name constants for vivero.
//!
//! All crates use these constants for consistent structured logging fields.
//! This ensures log aggregation tools can query by standardized field names
//! across every subsystem.
//!
//! ## Log Level Contract
//!
//! | Level | Usage |
//! |-------|-------|
//! | WARN  | Recoverable issue, automatic fallback applied (skipped row, bad env value) |
//! | INFO  | Dataset lifecycle events (load completions) |
//! | DEBUG | Decision points, pipeline completions, config choices |
//! | TRACE | Per-record iteration, high-volume data |

// ─── Identity fields ───────────────────────────────────────────────────────

/// Subsystem originating the log event.
/// Values: "core", "search"
pub const SUBSYSTEM: &str = "subsystem";

/// Component within a subsystem.
/// Examples: "engine", "semantic", "normalize", "cache"
pub const COMPONENT: &str = "component";

/// Logical operation name.
/// Examples: "apply_filters", "expand_and_search", "normalize_rows"
pub const OPERATION: &str = "op";

// ─── Entity fields ─────────────────────────────────────────────────────────

/// Startup name or derived slug being operated on.
pub const STARTUP_ID: &str = "startup_id";

/// Free-text or semantic query being evaluated.
pub const QUERY: &str = "query";

/// Zero-based index of a row within an input batch.
pub const ROW_INDEX: &str = "row_index";

// ─── Measurement fields ────────────────────────────────────────────────────

/// Number of records entering a pipeline stage.
pub const INPUT_COUNT: &str = "input_count";

/// Number of records returned by a filter or search.
pub const RESULT_COUNT: &str = "result_count";

/// Number of filter dimensions active in a FilterState.
pub const ACTIVE_DIMENSIONS: &str = "active_dimensions";

/// Number of technologies produced by concept expansion.
pub const EXPANDED_TECH_COUNT: &str = "expanded_tech_count";

/// Number of suggestions emitted.
pub const SUGGESTION_COUNT: &str = "suggestion_count";

// ─── Cache fields ──────────────────────────────────────────────────────────

/// Whether a cache lookup was served from the cached value.
pub const CACHE_HIT: &str = "cache_hit";

/// Cache time-to-live in seconds.
pub const CACHE_TTL_SECS: &str = "cache_ttl_secs";

// ─── Outcome fields ────────────────────────────────────────────────────────

/// Error message when an operation fails.
pub const ERROR_MSG: &str = "error";
