//! Server configuration
//!
//! Read once at startup from the process environment (after `.env` is loaded).

use std::net::SocketAddr;
use std::path::PathBuf;

use thiserror::Error;

pub const DEFAULT_DB_NAME: &str = "vector_db";
pub const DEFAULT_TEXT_COLLECTION: &str = "texts";
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8000";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Set {0} in .env before running")]
    Missing(&'static str),

    #[error("Invalid value for {key}: {message}")]
    Invalid { key: &'static str, message: String },
}

/// Configuration for the API server
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// MongoDB connection string
    pub mongodb_uri: String,
    /// Database holding the text collection
    pub db_name: String,
    /// Collection receiving ingested documents
    pub text_collection: String,
    /// Address the HTTP listener binds to
    pub bind_addr: SocketAddr,
    /// Where the embedding model files are cached (fastembed default when unset)
    pub model_cache_dir: Option<PathBuf>,
}

impl ServerConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        // Empty values count as unset
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let mongodb_uri = get("MONGODB_URI").ok_or(ConfigError::Missing("MONGODB_URI"))?;

        let bind_addr = get("BIND_ADDR")
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string())
            .parse::<SocketAddr>()
            .map_err(|e| ConfigError::Invalid {
                key: "BIND_ADDR",
                message: e.to_string(),
            })?;

        Ok(Self {
            mongodb_uri,
            db_name: get("DB_NAME").unwrap_or_else(|| DEFAULT_DB_NAME.to_string()),
            text_collection: get("TEXT_COLLECTION")
                .unwrap_or_else(|| DEFAULT_TEXT_COLLECTION.to_string()),
            bind_addr,
            model_cache_dir: get("MODEL_CACHE_DIR").map(PathBuf::from),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config =
            ServerConfig::from_lookup(lookup(&[("MONGODB_URI", "mongodb://localhost:27017")]))
                .unwrap();

        assert_eq!(config.mongodb_uri, "mongodb://localhost:27017");
        assert_eq!(config.db_name, "vector_db");
        assert_eq!(config.text_collection, "texts");
        assert_eq!(config.bind_addr.port(), 8000);
        assert!(config.model_cache_dir.is_none());
    }

    #[test]
    fn test_missing_uri_is_fatal() {
        let err = ServerConfig::from_lookup(lookup(&[("DB_NAME", "other")])).unwrap_err();
        assert!(matches!(err, ConfigError::Missing("MONGODB_URI")));
    }

    #[test]
    fn test_empty_uri_counts_as_missing() {
        let err = ServerConfig::from_lookup(lookup(&[("MONGODB_URI", "")])).unwrap_err();
        assert!(matches!(err, ConfigError::Missing(_)));
    }

    #[test]
    fn test_overrides() {
        let config = ServerConfig::from_lookup(lookup(&[
            ("MONGODB_URI", "mongodb://db:27017"),
            ("DB_NAME", "corpus"),
            ("TEXT_COLLECTION", "articles"),
            ("BIND_ADDR", "127.0.0.1:9090"),
            ("MODEL_CACHE_DIR", "/var/cache/models"),
        ]))
        .unwrap();

        assert_eq!(config.db_name, "corpus");
        assert_eq!(config.text_collection, "articles");
        assert_eq!(config.bind_addr, "127.0.0.1:9090".parse().unwrap());
        assert_eq!(
            config.model_cache_dir,
            Some(PathBuf::from("/var/cache/models"))
        );
    }

    #[test]
    fn test_invalid_bind_addr() {
        let err = ServerConfig::from_lookup(lookup(&[
            ("MONGODB_URI", "mongodb://db:27017"),
            ("BIND_ADDR", "not-an-address"),
        ]))
        .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { key: "BIND_ADDR", .. }));
    }
}
