//! CLI command implementations

pub mod init;
pub mod provision;
pub mod validate;

/// Exit code for a successful run
pub const EXIT_OK: i32 = 0;

/// Exit code for configuration errors
pub const EXIT_CONFIG_ERROR: i32 = 2;

/// Exit code when the document database client rejected a request
pub const EXIT_DOCUMENT_CLIENT_ERROR: i32 = 3;

/// Exit code for any other fatal error
pub const EXIT_FATAL: i32 = 5;
