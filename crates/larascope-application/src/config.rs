//! Application configuration
//!
//! Defaults work with nothing on disk; a `larascope.toml` file and
//! `LARASCOPE_`-prefixed environment variables layer on top, env winning.

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use larascope_domain::constants::{
    ADJACENT_WINDOW_MAX, DEFAULT_COLLECTION, DEFAULT_SCORE_THRESHOLD, EMBEDDING_DIMENSION,
};
use larascope_domain::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Settings shared by the indexing and retrieval services
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Vector store collection holding the chunk payloads
    pub collection: String,
    /// Dimensionality expected from the embedding provider
    pub embedding_dimensions: usize,
    /// Similarity floor below which search results are dropped
    pub score_threshold: f32,
    /// Consecutive chunks in an adjacent-context window, capped at
    /// [`ADJACENT_WINDOW_MAX`]
    pub adjacent_window: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            collection: DEFAULT_COLLECTION.to_string(),
            embedding_dimensions: EMBEDDING_DIMENSION,
            score_threshold: DEFAULT_SCORE_THRESHOLD,
            adjacent_window: ADJACENT_WINDOW_MAX,
        }
    }
}

impl AppConfig {
    /// Load from `larascope.toml` (if present) and the environment
    pub fn load() -> Result<Self> {
        Self::load_from(Path::new("larascope.toml"))
    }

    /// Load with an explicit config file path
    pub fn load_from(path: &Path) -> Result<Self> {
        Figment::from(Serialized::defaults(Self::default()))
            .merge(Toml::file(path))
            .merge(Env::prefixed("LARASCOPE_"))
            .extract()
            .map_err(|e| Error::config(e.to_string()))
    }
}
