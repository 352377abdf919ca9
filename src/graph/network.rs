use crate::graph::cooccurrence::CooccurrenceCounts;
use crate::graph::normalize::Normalizer;
use crate::graph::query::QueryEngine;
use crate::graph::store::IngredientGraph;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::Arc;
use tracing::info;

/// Size and provenance of a built network.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NetworkSummary {
    pub ingredients: usize,
    pub edges: usize,
    pub recipes: u64,
    pub min_cooccurrence: u64,
    pub built_at: DateTime<Utc>,
}

/// A materialized graph together with the normalizer and raw counts it
/// was built from.
///
/// Counts and normalizer are shared between networks produced by
/// [`rebuild`](Self::rebuild); the graph itself is never shared or mutated.
#[derive(Debug, Clone)]
pub struct IngredientNetwork {
    normalizer: Arc<Normalizer>,
    counts: Arc<CooccurrenceCounts>,
    graph: IngredientGraph,
    built_at: DateTime<Utc>,
}

impl IngredientNetwork {
    /// Aggregate a corpus and materialize its graph.
    pub fn build<R, I, S>(recipes: R, normalizer: Normalizer, min_cooccurrence: u64) -> Self
    where
        R: IntoIterator<Item = I>,
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let counts = CooccurrenceCounts::aggregate(recipes, &normalizer);
        Self::from_counts(Arc::new(normalizer), Arc::new(counts), min_cooccurrence)
    }

    /// Materialize a graph from counts that were already aggregated.
    pub fn from_counts(
        normalizer: Arc<Normalizer>,
        counts: Arc<CooccurrenceCounts>,
        min_cooccurrence: u64,
    ) -> Self {
        let graph = IngredientGraph::build(&counts, min_cooccurrence);

        info!(
            "Graph ready: {} ingredients, {} edges (min co-occurrence {}, {} recipes)",
            graph.node_count(),
            graph.edge_count(),
            min_cooccurrence,
            counts.recipes()
        );

        Self {
            normalizer,
            counts,
            graph,
            built_at: Utc::now(),
        }
    }

    /// Build an independent network over the same counts at another threshold.
    pub fn rebuild(&self, min_cooccurrence: u64) -> Self {
        Self::from_counts(
            Arc::clone(&self.normalizer),
            Arc::clone(&self.counts),
            min_cooccurrence,
        )
    }

    pub fn query(&self) -> QueryEngine<'_> {
        QueryEngine::new(&self.graph, &self.normalizer)
    }

    pub fn graph(&self) -> &IngredientGraph {
        &self.graph
    }

    pub fn counts(&self) -> &CooccurrenceCounts {
        &self.counts
    }

    pub fn normalizer(&self) -> &Normalizer {
        &self.normalizer
    }

    pub fn summary(&self) -> NetworkSummary {
        NetworkSummary {
            ingredients: self.graph.node_count(),
            edges: self.graph.edge_count(),
            recipes: self.counts.recipes(),
            min_cooccurrence: self.graph.min_cooccurrence(),
            built_at: self.built_at,
        }
    }
}
