use serde::Deserialize;

/// Main configuration structure for Swapi-Harvest
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub client: ClientConfig,
    pub output: OutputConfig,
}

/// Remote catalog configuration
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogConfig {
    /// Base URL of the catalog API, without a trailing slash
    /// (e.g. "https://swapi.dev/api")
    #[serde(rename = "base-url")]
    pub base_url: String,

    /// Number of catalog IDs fetched concurrently per window
    #[serde(rename = "window-size", default = "default_window_size")]
    pub window_size: u64,
}

/// HTTP client configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ClientConfig {
    /// User agent string sent with every request
    #[serde(rename = "user-agent", default = "default_user_agent")]
    pub user_agent: String,

    /// Per-request timeout in seconds
    #[serde(rename = "timeout-seconds", default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
}

/// Output configuration
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Path to the SQLite database file
    #[serde(rename = "database-path")]
    pub database_path: String,
}

fn default_window_size() -> u64 {
    10
}

fn default_user_agent() -> String {
    format!("swapi-harvest/{}", env!("CARGO_PKG_VERSION"))
}

fn default_timeout_seconds() -> u64 {
    30
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            user_agent: default_user_agent(),
            timeout_seconds: default_timeout_seconds(),
        }
    }
}
