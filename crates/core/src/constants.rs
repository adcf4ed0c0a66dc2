/// Base URL of the goals REST API when nothing is configured
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5000/api";

/// Request timeout in milliseconds when nothing is configured
pub const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 30_000;

/// Wire format for goal due dates
pub const DUE_DATE_FORMAT: &str = "%Y-%m-%d";
