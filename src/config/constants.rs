//! Application-wide constants
//!
//! Centralized location for magic values to improve maintainability.

// =============================================================================
// Sessions & Security
// =============================================================================

/// Default session lifetime in hours
pub const DEFAULT_SESSION_EXPIRATION_HOURS: i64 = 24;

/// Minimum session secret length (security requirement)
pub const MIN_SESSION_SECRET_LENGTH: usize = 32;

/// Cookie holding the signed session token
pub const SESSION_COOKIE_NAME: &str = "session";

/// Cookie holding a one-shot flash message key
pub const FLASH_COOKIE_NAME: &str = "flash";

/// Query parameter carrying the page to return to after login
pub const NEXT_QUERY_PARAM: &str = "next";

/// Login page path (target of unauthenticated redirects)
pub const LOGIN_PATH: &str = "/login";

// =============================================================================
// Server Configuration
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 3000;

// =============================================================================
// Database
// =============================================================================

/// Default database connection URL (for development)
pub const DEFAULT_DATABASE_URL: &str = "sqlite://books.db?mode=rwc";

// =============================================================================
// Validation
// =============================================================================

/// Minimum password length requirement
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Date format accepted and displayed for publish dates
pub const DATE_FORMAT: &str = "%Y-%m-%d";
