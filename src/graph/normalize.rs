use std::collections::HashSet;

/// Descriptive and preparation words that do not change which ingredient
/// is meant.
pub const DEFAULT_STOPWORDS: &[&str] = &[
    "fresh", "dried", "ground", "large", "small", "medium", "extra", "nonfat", "skinless",
    "boneless", "organic", "salted", "unsalted", "whole", "halved", "chopped", "finely", "minced",
    "crumbled", "shredded", "peeled", "ripe", "grated", "sliced", "frozen", "cold", "warm", "hot",
];

/// Canonicalizes raw ingredient text into a comparison key.
#[derive(Debug, Clone)]
pub struct Normalizer {
    stopwords: HashSet<String>,
}

impl Normalizer {
    /// Create a normalizer with a custom stopword set.
    /// Stopwords are matched against lowercased tokens.
    pub fn new<I, S>(stopwords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            stopwords: stopwords
                .into_iter()
                .map(|s| s.as_ref().to_lowercase())
                .collect(),
        }
    }

    /// Normalize a raw ingredient string.
    ///
    /// Lowercases, replaces anything that is not `a-z`, `0-9` or whitespace
    /// with a space, drops stopword tokens and joins what is left with
    /// single spaces. Input made only of stopwords or punctuation yields `""`.
    pub fn normalize(&self, raw: &str) -> String {
        let cleaned: String = raw
            .to_lowercase()
            .chars()
            .map(|c| {
                if c.is_ascii_lowercase() || c.is_ascii_digit() || c.is_whitespace() {
                    c
                } else {
                    ' '
                }
            })
            .collect();

        cleaned
            .split_whitespace()
            .filter(|token| !self.stopwords.contains(*token))
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn stopword_count(&self) -> usize {
        self.stopwords.len()
    }
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new(DEFAULT_STOPWORDS)
    }
}
