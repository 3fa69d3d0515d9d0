//! Application configuration loaded from environment variables.
//!
//! A `.env` file is honored for local development.

use std::env;
use std::fmt;
use std::str::FromStr;

/// Where user documents are persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
    /// Process-local map; contents are lost on restart.
    Memory,
    /// Google Cloud Firestore (or its emulator).
    Firestore,
}

impl FromStr for StorageBackend {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "memory" => Ok(Self::Memory),
            "firestore" => Ok(Self::Firestore),
            _ => Err(ConfigError::Invalid {
                name: "STORAGE_BACKEND",
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for StorageBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Memory => f.write_str("memory"),
            Self::Firestore => f.write_str("firestore"),
        }
    }
}

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server port
    pub port: u16,
    /// Storage backend for user documents
    pub storage_backend: StorageBackend,
    /// GCP project ID (required for the Firestore backend)
    pub gcp_project_id: Option<String>,
}

impl Default for Config {
    /// Default config for testing only.
    fn default() -> Self {
        Self {
            port: 3000,
            storage_backend: StorageBackend::Memory,
            gcp_project_id: None,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        let storage_backend = match env::var("STORAGE_BACKEND") {
            Ok(value) => value.parse()?,
            Err(_) => StorageBackend::Memory,
        };

        let gcp_project_id = env::var("GCP_PROJECT_ID")
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty());

        if storage_backend == StorageBackend::Firestore && gcp_project_id.is_none() {
            return Err(ConfigError::Missing("GCP_PROJECT_ID"));
        }

        let port = match env::var("PORT") {
            Ok(value) => value.trim().parse().map_err(|_| ConfigError::Invalid {
                name: "PORT",
                value,
            })?,
            Err(_) => 3000,
        };

        Ok(Self {
            port,
            storage_backend,
            gcp_project_id,
        })
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),

    #[error("Invalid value for {name}: {value:?}")]
    Invalid { name: &'static str, value: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_backend_parse() {
        assert_eq!(
            "memory".parse::<StorageBackend>().unwrap(),
            StorageBackend::Memory
        );
        assert_eq!(
            " Firestore ".parse::<StorageBackend>().unwrap(),
            StorageBackend::Firestore
        );
        assert!(matches!(
            "postgres".parse::<StorageBackend>(),
            Err(ConfigError::Invalid { name: "STORAGE_BACKEND", .. })
        ));
    }

    // All env-mutating assertions live in one test so they cannot race.
    #[test]
    fn test_config_from_env() {
        env::remove_var("STORAGE_BACKEND");
        env::remove_var("GCP_PROJECT_ID");
        env::set_var("PORT", "4100");

        let config = Config::from_env().expect("Config should load");
        assert_eq!(config.port, 4100);
        assert_eq!(config.storage_backend, StorageBackend::Memory);

        env::set_var("STORAGE_BACKEND", "firestore");
        let err = Config::from_env().unwrap_err();
        assert!(matches!(err, ConfigError::Missing("GCP_PROJECT_ID")));

        env::set_var("GCP_PROJECT_ID", "test-project");
        let config = Config::from_env().expect("Config should load");
        assert_eq!(config.storage_backend, StorageBackend::Firestore);
        assert_eq!(config.gcp_project_id.as_deref(), Some("test-project"));

        env::set_var("PORT", "not-a-port");
        assert!(matches!(
            Config::from_env(),
            Err(ConfigError::Invalid { name: "PORT", .. })
        ));

        env::remove_var("PORT");
        env::remove_var("STORAGE_BACKEND");
        env::remove_var("GCP_PROJECT_ID");
    }
}
