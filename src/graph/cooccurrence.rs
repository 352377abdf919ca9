use crate::graph::normalize::Normalizer;
use std::collections::{BTreeSet, HashMap};
use tracing::debug;

/// Unordered pair of distinct ingredient keys, stored as `(lower, higher)`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct IngredientPair {
    first: String,
    second: String,
}

impl IngredientPair {
    /// Create a pair from two keys in either order.
    /// Returns `None` when both keys are equal.
    pub fn new(a: impl Into<String>, b: impl Into<String>) -> Option<Self> {
        let (a, b) = (a.into(), b.into());
        match a.cmp(&b) {
            std::cmp::Ordering::Less => Some(Self {
                first: a,
                second: b,
            }),
            std::cmp::Ordering::Greater => Some(Self {
                first: b,
                second: a,
            }),
            std::cmp::Ordering::Equal => None,
        }
    }

    pub fn first(&self) -> &str {
        &self.first
    }

    pub fn second(&self) -> &str {
        &self.second
    }
}

/// Raw per-ingredient and per-pair recipe counts for a corpus.
///
/// No threshold is applied here, so one aggregation can back graphs built
/// at any `min_cooccurrence`.
#[derive(Debug, Clone, Default)]
pub struct CooccurrenceCounts {
    node_counts: HashMap<String, u64>,
    pair_counts: HashMap<IngredientPair, u64>,
    recipes: u64,
}

impl CooccurrenceCounts {
    /// Scan every recipe once and count ingredients and pairs.
    pub fn aggregate<R, I, S>(recipes: R, normalizer: &Normalizer) -> Self
    where
        R: IntoIterator<Item = I>,
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut counts = Self::default();
        for recipe in recipes {
            counts.add_recipe(recipe, normalizer);
        }

        debug!(
            "Aggregated {} recipes: {} ingredients, {} distinct pairs",
            counts.recipes,
            counts.node_counts.len(),
            counts.pair_counts.len()
        );

        counts
    }

    /// Count a single recipe.
    ///
    /// Duplicate mentions, including ones that only collide after
    /// normalization, count once.
    pub fn add_recipe<I, S>(&mut self, ingredients: I, normalizer: &Normalizer)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let keys: BTreeSet<String> = ingredients
            .into_iter()
            .map(|raw| normalizer.normalize(raw.as_ref()))
            .collect();

        self.recipes += 1;

        for key in &keys {
            *self.node_counts.entry(key.clone()).or_insert(0) += 1;
        }

        // Keys are sorted and distinct, so every (i, j > i) is one unordered pair.
        let keys: Vec<&String> = keys.iter().collect();
        for (i, a) in keys.iter().enumerate() {
            for b in &keys[i + 1..] {
                let pair = IngredientPair {
                    first: (*a).clone(),
                    second: (*b).clone(),
                };
                *self.pair_counts.entry(pair).or_insert(0) += 1;
            }
        }
    }

    /// Number of recipes containing `key`.
    pub fn node_count(&self, key: &str) -> Option<u64> {
        self.node_counts.get(key).copied()
    }

    /// Number of recipes containing both keys. Zero if they never co-occur.
    pub fn pair_count(&self, a: &str, b: &str) -> u64 {
        IngredientPair::new(a, b)
            .and_then(|pair| self.pair_counts.get(&pair).copied())
            .unwrap_or(0)
    }

    pub fn node_counts(&self) -> &HashMap<String, u64> {
        &self.node_counts
    }

    pub fn pair_counts(&self) -> &HashMap<IngredientPair, u64> {
        &self.pair_counts
    }

    /// Number of recipes scanned.
    pub fn recipes(&self) -> u64 {
        self.recipes
    }
}
