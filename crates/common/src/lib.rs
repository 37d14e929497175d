pub mod types;
pub mod utils;

/// Service name reported by the health endpoint and startup logs.
pub const SERVICE_NAME: &str = "qa-system-backend";
