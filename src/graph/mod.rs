// Ingredient co-occurrence graph: normalization, aggregation,
// materialization and queries

pub mod cooccurrence;
pub mod network;
pub mod normalize;
pub mod query;
pub mod shared;
pub mod store;

// Re-exports
pub use cooccurrence::{CooccurrenceCounts, IngredientPair};
pub use network::{IngredientNetwork, NetworkSummary};
pub use normalize::{Normalizer, DEFAULT_STOPWORDS};
pub use query::{Hub, IngredientStats, Pairing, PathOutcome, QueryEngine};
pub use shared::SharedNetwork;
pub use store::{IngredientGraph, IngredientNode};
