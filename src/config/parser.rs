use crate::config::types::Config;
use crate::config::validation::validate;
use crate::ConfigError;
use std::path::Path;

/// Loads and parses a configuration file from the given path
///
/// # Arguments
///
/// * `path` - Path to the TOML configuration file
///
/// # Returns
///
/// * `Ok(Config)` - Successfully loaded and validated configuration
/// * `Err(ConfigError)` - Failed to load, parse, or validate the configuration
///
/// # Example
///
/// ```no_run
/// use std::path::Path;
/// use swapi_harvest::config::load_config;
///
/// let config = load_config(Path::new("harvest.toml")).unwrap();
/// println!("Window size: {}", config.catalog.window_size);
/// ```
pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    // Read the configuration file
    let content = std::fs::read_to_string(path)?;

    // Parse TOML
    let config: Config = toml::from_str(&content)?;

    // Validate the configuration
    validate(&config)?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_valid_config() {
        let file = write_config(
            r#"
            [catalog]
            base-url = "https://swapi.dev/api"
            window-size = 10

            [client]
            user-agent = "test-harvest/1.0"
            timeout-seconds = 15

            [output]
            database-path = "./swapi.db"
            "#,
        );

        let config = load_config(file.path()).unwrap();
        assert_eq!(config.catalog.base_url, "https://swapi.dev/api");
        assert_eq!(config.catalog.window_size, 10);
        assert_eq!(config.client.user_agent, "test-harvest/1.0");
        assert_eq!(config.client.timeout_seconds, 15);
        assert_eq!(config.output.database_path, "./swapi.db");
    }

    #[test]
    fn test_defaults_applied() {
        let file = write_config(
            r#"
            [catalog]
            base-url = "https://swapi.dev/api"

            [output]
            database-path = "./swapi.db"
            "#,
        );

        let config = load_config(file.path()).unwrap();
        assert_eq!(config.catalog.window_size, 10);
        assert_eq!(config.client.timeout_seconds, 30);
        assert!(config.client.user_agent.starts_with("swapi-harvest/"));
    }

    #[test]
    fn test_missing_file() {
        let result = load_config(Path::new("/nonexistent/harvest.toml"));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }

    #[test]
    fn test_malformed_toml() {
        let file = write_config("[catalog\nbase-url = ");
        let result = load_config(file.path());
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_invalid_config_rejected() {
        let file = write_config(
            r#"
            [catalog]
            base-url = "not a url"

            [output]
            database-path = "./swapi.db"
            "#,
        );

        let result = load_config(file.path());
        assert!(result.is_err());
    }
}
