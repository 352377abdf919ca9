use crate::graph::cooccurrence::CooccurrenceCounts;
use serde::Serialize;
use std::collections::BTreeMap;

/// An ingredient and the number of recipes that contain it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IngredientNode {
    pub name: String,
    pub recipe_count: u64,
}

/// Immutable weighted undirected co-occurrence graph.
///
/// Adjacency is keyed by ingredient in both directions, so every edge is
/// stored twice with the same weight. `BTreeMap` keeps neighbor iteration
/// in ascending key order.
#[derive(Debug, Clone, Default)]
pub struct IngredientGraph {
    nodes: BTreeMap<String, IngredientNode>,
    adjacency: BTreeMap<String, BTreeMap<String, u64>>,
    edge_count: usize,
    min_cooccurrence: u64,
}

impl IngredientGraph {
    /// Materialize a graph from raw counts.
    ///
    /// Every counted ingredient becomes a node. A pair becomes an edge only
    /// if its count is at least `min_cooccurrence`.
    pub fn build(counts: &CooccurrenceCounts, min_cooccurrence: u64) -> Self {
        let mut nodes = BTreeMap::new();
        let mut adjacency: BTreeMap<String, BTreeMap<String, u64>> = BTreeMap::new();

        for (name, &recipe_count) in counts.node_counts() {
            nodes.insert(
                name.clone(),
                IngredientNode {
                    name: name.clone(),
                    recipe_count,
                },
            );
            adjacency.insert(name.clone(), BTreeMap::new());
        }

        let mut edge_count = 0;
        for (pair, &weight) in counts.pair_counts() {
            if weight < min_cooccurrence {
                continue;
            }
            adjacency
                .entry(pair.first().to_string())
                .or_default()
                .insert(pair.second().to_string(), weight);
            adjacency
                .entry(pair.second().to_string())
                .or_default()
                .insert(pair.first().to_string(), weight);
            edge_count += 1;
        }

        Self {
            nodes,
            adjacency,
            edge_count,
            min_cooccurrence,
        }
    }

    pub fn contains(&self, key: &str) -> bool {
        self.nodes.contains_key(key)
    }

    pub fn node(&self, key: &str) -> Option<&IngredientNode> {
        self.nodes.get(key)
    }

    /// Weight of the edge between `a` and `b`, if it was materialized.
    pub fn weight(&self, a: &str, b: &str) -> Option<u64> {
        self.adjacency.get(a).and_then(|n| n.get(b)).copied()
    }

    /// Neighbors of `key` with edge weights, in ascending key order.
    /// `None` if the ingredient is not in the graph.
    pub fn neighbors<'a>(&'a self, key: &str) -> Option<impl Iterator<Item = (&'a str, u64)>> {
        self.adjacency
            .get(key)
            .map(|n| n.iter().map(|(name, &weight)| (name.as_str(), weight)))
    }

    pub fn degree(&self, key: &str) -> Option<usize> {
        self.adjacency.get(key).map(BTreeMap::len)
    }

    /// All nodes in ascending key order.
    pub fn nodes(&self) -> impl Iterator<Item = &IngredientNode> {
        self.nodes.values()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn min_cooccurrence(&self) -> u64 {
        self.min_cooccurrence
    }
}
