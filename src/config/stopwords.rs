use crate::error::{Error, Result};
use crate::graph::normalize::{Normalizer, DEFAULT_STOPWORDS};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StopwordConfig {
    pub version: u32,
    #[serde(default)]
    pub stopwords: Vec<String>,
}

impl Default for StopwordConfig {
    fn default() -> Self {
        Self {
            version: 1,
            stopwords: DEFAULT_STOPWORDS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl StopwordConfig {
    /// Load stopword configuration from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref()).map_err(|e| {
            Error::Config(format!(
                "Failed to read stopwords from {}: {}",
                path.as_ref().display(),
                e
            ))
        })?;

        let mut config: StopwordConfig = serde_yaml::from_str(&content).map_err(|e| {
            Error::Config(format!(
                "Failed to parse stopwords from {}: {}",
                path.as_ref().display(),
                e
            ))
        })?;

        for word in &mut config.stopwords {
            *word = word.trim().to_lowercase();
        }

        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(Error::Config(format!(
                "Unsupported stopwords version: {}. Expected version 1",
                self.version
            )));
        }

        let mut seen = HashSet::new();
        for word in &self.stopwords {
            // Normalized tokens only ever contain a-z and 0-9
            if word.is_empty()
                || !word
                    .chars()
                    .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
            {
                return Err(Error::Config(format!(
                    "Invalid stopword '{word}': only a-z and 0-9 can match a normalized token"
                )));
            }
            if !seen.insert(word) {
                return Err(Error::Config(format!("Duplicate stopword: {word}")));
            }
        }

        Ok(())
    }

    pub fn normalizer(&self) -> Normalizer {
        Normalizer::new(&self.stopwords)
    }
}
