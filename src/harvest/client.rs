//! HTTP client construction
//!
//! One shared client (and its connection pool) is built once per harvest and
//! reused for every catalog and reference fetch.

use crate::config::ClientConfig;
use reqwest::Client;
use std::time::Duration;

/// Builds the shared HTTP client from configuration
///
/// # Arguments
///
/// * `config` - The HTTP client configuration
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(reqwest::Error)` - Failed to build client
pub fn build_http_client(config: &ClientConfig) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(config.user_agent.clone())
        .timeout(Duration::from_secs(config.timeout_seconds))
        .connect_timeout(Duration::from_secs(10))
        .gzip(true)
        .brotli(true)
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_http_client() {
        let config = ClientConfig {
            user_agent: "test-harvest/1.0".to_string(),
            timeout_seconds: 5,
        };
        assert!(build_http_client(&config).is_ok());
    }

    #[test]
    fn test_build_with_defaults() {
        assert!(build_http_client(&ClientConfig::default()).is_ok());
    }
}
