pub mod stopwords;

use crate::error::{Error, Result};
use crate::graph::Normalizer;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use stopwords::StopwordConfig;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub dataset: DatasetConfig,
    pub graph: GraphConfig,
    pub server: ServerConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetConfig {
    /// JSON corpus file or directory of `.cook` recipes
    pub path: PathBuf,
    pub stopwords_path: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphConfig {
    pub min_cooccurrence: u64,
    pub top_n: usize,
    pub max_top_n: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            min_cooccurrence: 2,
            top_n: 10,
            max_top_n: 100,
        }
    }
}

impl Settings {
    /// Load settings from environment variables
    pub fn from_env() -> Result<Self> {
        let path = std::env::var("DATASET_PATH")
            .unwrap_or_else(|_| "recipe.json".to_string())
            .into();

        let stopwords_path = std::env::var("STOPWORDS_PATH").ok().map(PathBuf::from);

        let min_cooccurrence = std::env::var("MIN_COOCCURRENCE")
            .unwrap_or_else(|_| "2".to_string())
            .parse()
            .map_err(|_| Error::Config("Invalid MIN_COOCCURRENCE value".to_string()))?;

        let top_n = std::env::var("TOP_N")
            .unwrap_or_else(|_| "10".to_string())
            .parse()
            .map_err(|_| Error::Config("Invalid TOP_N value".to_string()))?;

        let max_top_n = std::env::var("MAX_TOP_N")
            .unwrap_or_else(|_| "100".to_string())
            .parse()
            .map_err(|_| Error::Config("Invalid MAX_TOP_N value".to_string()))?;

        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse()
            .map_err(|_| Error::Config("Invalid PORT value".to_string()))?;

        Ok(Settings {
            dataset: DatasetConfig {
                path,
                stopwords_path,
            },
            graph: GraphConfig {
                min_cooccurrence,
                top_n,
                max_top_n,
            },
            server: ServerConfig { host, port },
        })
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.graph.min_cooccurrence == 0 {
            return Err(Error::Config(
                "MIN_COOCCURRENCE must be at least 1".to_string(),
            ));
        }

        if self.graph.top_n == 0 {
            return Err(Error::Config("TOP_N must be at least 1".to_string()));
        }

        if self.graph.max_top_n < self.graph.top_n {
            return Err(Error::Config(
                "MAX_TOP_N must not be smaller than TOP_N".to_string(),
            ));
        }

        if self.server.port == 0 {
            return Err(Error::Config("Port must be non-zero".to_string()));
        }

        Ok(())
    }

    /// Build the normalizer from the configured stopwords, or the
    /// built-in set when none are configured
    pub fn normalizer(&self) -> Result<Normalizer> {
        let config = match &self.dataset.stopwords_path {
            Some(path) => StopwordConfig::from_file(path)?,
            None => StopwordConfig::default(),
        };
        Ok(config.normalizer())
    }
}
