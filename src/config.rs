//! Configuration model loaded from external sources.

use serde::Deserialize;

fn default_timeout_secs() -> u64 {
    30
}

#[derive(Clone, Debug, Deserialize)]
/// Settings for reaching the customer directory service.
pub struct DirectoryConfig {
    /// Base URL of the customer collection, e.g.
    /// `http://localhost:5000/api/customers`.
    pub base_url: String,
    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}
