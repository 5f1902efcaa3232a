//! Structured logging field name constants.
//!
//! All crates use these names for structured `tracing` fields so log queries
//! work the same across the store, the HTTP surfaces, and the dashboard.
//!
//! ## Log Level Contract
//!
//! | Level | Usage |
//! |-------|-------|
//! | ERROR | Degraded service, requires operator attention |
//! | WARN  | Recoverable issue, rejected request caused by the store |
//! | INFO  | Lifecycle events (startup, shutdown), writes |
//! | DEBUG | Reads, decision points, config choices |
//! | TRACE | Per-row iteration |

// ─── Identity fields ───────────────────────────────────────────────────────

/// Correlation ID propagated from the `x-request-id` header.
/// Format: UUIDv7 (time-ordered).
pub const REQUEST_ID: &str = "request_id";

/// Subsystem originating the log event.
/// Values: "api", "web", "database", "dashboard"
pub const SUBSYSTEM: &str = "subsystem";

/// Component within a subsystem.
/// Examples: "notes", "pool", "schema", "client"
pub const COMPONENT: &str = "component";

/// Logical operation name.
/// Examples: "create_note", "search", "add_comment"
pub const OPERATION: &str = "op";

// ─── Entity fields ─────────────────────────────────────────────────────────

/// Note id being operated on.
pub const NOTE_ID: &str = "note_id";

/// Comment id being operated on.
pub const COMMENT_ID: &str = "comment_id";

/// Search query text.
pub const QUERY: &str = "query";

// ─── Measurement fields ────────────────────────────────────────────────────

/// Wall-clock duration in milliseconds.
pub const DURATION_MS: &str = "duration_ms";

/// Number of notes returned by a list or search.
pub const RESULT_COUNT: &str = "result_count";

/// Number of comment rows removed alongside a note.
pub const COMMENT_COUNT: &str = "comment_count";

// ─── Database fields ───────────────────────────────────────────────────────

/// Number of open connections in the pool.
pub const POOL_SIZE: &str = "pool_size";

/// Number of idle connections in the pool.
pub const POOL_IDLE: &str = "pool_idle";

// ─── Outcome fields ────────────────────────────────────────────────────────

/// Error message when an operation fails.
pub const ERROR_MSG: &str = "error";
