//! Swapi-Harvest: an incremental SWAPI people ingester
//!
//! This crate crawls the numbered `people` catalog of a SWAPI-compatible API
//! in fixed-size ID windows, denormalizes every record's cross-references
//! (films, starships, vehicles, species, homeworld) into joined display
//! strings, and appends the flattened documents to SQLite while persistence
//! overlaps with the next window's fetches.

pub mod config;
pub mod harvest;
pub mod record;
pub mod storage;

use thiserror::Error;

/// Main error type for harvest operations
#[derive(Debug, Error)]
pub enum HarvestError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("HTTP error for {url}: {source}")]
    Http { url: String, source: reqwest::Error },

    #[error("Failed to decode response body for {url}: {source}")]
    Decode { url: String, source: reqwest::Error },

    #[error("Resource at {url} has no '{attribute}' attribute")]
    MissingAttribute { url: String, attribute: String },

    #[error("Storage error: {0}")]
    Storage(#[from] storage::StorageError),

    #[error("Persistence task panicked: {0}")]
    PersistenceJoin(#[from] tokio::task::JoinError),

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),
}

/// Result type alias for harvest operations
pub type Result<T> = std::result::Result<T, HarvestError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use config::Config;
pub use harvest::{harvest, HarvestReport, Harvester};
pub use record::{RecordOutcome, ResolvedDocument};
