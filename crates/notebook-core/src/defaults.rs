//! Centralized default constants for the notebook service.
//!
//! Binaries and tests reference these instead of repeating literals.

// =============================================================================
// STORAGE
// =============================================================================

/// SQLite database file used when `DATABASE_URL` is unset.
pub const DATABASE_URL: &str = "sqlite://notes.db";

/// Maximum pooled connections.
pub const DB_MAX_CONNECTIONS: u32 = 5;

/// Seconds to wait for a pooled connection.
pub const DB_ACQUIRE_TIMEOUT_SECS: u64 = 30;

/// Seconds before an idle pooled connection is closed.
pub const DB_IDLE_TIMEOUT_SECS: u64 = 600;

// =============================================================================
// SERVER
// =============================================================================

/// Bind address for both HTTP surfaces.
pub const HOST: &str = "127.0.0.1";

/// JSON API port.
pub const API_PORT: u16 = 8000;

/// HTML form UI port.
pub const WEB_PORT: u16 = 5000;

/// CORS origins allowed to call the JSON API (the bundled form UI).
pub const ALLOWED_ORIGINS: &str = "http://localhost:5000,http://127.0.0.1:5000";

// =============================================================================
// DASHBOARD
// =============================================================================

/// Base URL of the JSON API as seen by the dashboard.
pub const API_URL: &str = "http://127.0.0.1:8000";

/// Per-request timeout for dashboard calls.
pub const CLIENT_TIMEOUT_SECS: u64 = 10;

// =============================================================================
// MESSAGES
// =============================================================================

/// Rejection message for a duplicate title.
pub const DUPLICATE_TITLE_MSG: &str = "Note with this title already exists.";

/// Message for a missing note on the HTTP surfaces.
pub const NOTE_NOT_FOUND_MSG: &str = "Note not found";

/// Timestamp format used by the rendered front-ends.
pub const DISPLAY_TIME_FORMAT: &str = "%Y-%m-%d %H:%M";
