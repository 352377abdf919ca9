use crate::error::{Error, Result};
use crate::graph::normalize::Normalizer;
use crate::graph::store::IngredientGraph;
use serde::Serialize;
use std::collections::{HashMap, VecDeque};

/// A neighboring ingredient and how many recipes it shares.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Pairing {
    pub name: String,
    pub weight: u64,
}

/// Outcome of a shortest path query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathOutcome {
    /// Ingredient names from source to destination, inclusive.
    Found(Vec<String>),
    /// Both ingredients are known but no materialized edges connect them.
    NoPath,
    /// At least one ingredient is absent after normalization.
    UnknownIngredient,
}

/// The ingredient with the most neighbors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Hub {
    pub ingredient: String,
    pub degree: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IngredientStats {
    pub ingredient: String,
    pub recipes_containing: u64,
    pub degree: usize,
    pub top_pairings: Vec<Pairing>,
}

/// Number of pairings included in [`IngredientStats`].
pub const STATS_TOP_PAIRINGS: usize = 5;

/// Read-only queries over a built graph. Inputs are raw ingredient text.
#[derive(Debug, Clone, Copy)]
pub struct QueryEngine<'a> {
    graph: &'a IngredientGraph,
    normalizer: &'a Normalizer,
}

impl<'a> QueryEngine<'a> {
    pub fn new(graph: &'a IngredientGraph, normalizer: &'a Normalizer) -> Self {
        Self { graph, normalizer }
    }

    /// Strongest pairings for an ingredient, at most `top_n`.
    ///
    /// Sorted by descending weight, ties by ascending name. Unknown
    /// ingredients yield an empty list.
    pub fn related(&self, ingredient: &str, top_n: usize) -> Vec<Pairing> {
        self.lookup_related(ingredient, top_n).unwrap_or_default()
    }

    /// Like [`related`](Self::related), but `None` for an unknown ingredient
    /// so callers can tell it apart from one without neighbors.
    pub fn lookup_related(&self, ingredient: &str, top_n: usize) -> Option<Vec<Pairing>> {
        let key = self.normalizer.normalize(ingredient);
        self.related_by_key(&key, top_n)
    }

    fn related_by_key(&self, key: &str, top_n: usize) -> Option<Vec<Pairing>> {
        let mut pairings: Vec<Pairing> = self
            .graph
            .neighbors(key)?
            .map(|(name, weight)| Pairing {
                name: name.to_string(),
                weight,
            })
            .collect();

        pairings.sort_by(|a, b| b.weight.cmp(&a.weight).then_with(|| a.name.cmp(&b.name)));
        pairings.truncate(top_n);
        Some(pairings)
    }

    /// Fewest-hop path between two ingredients over materialized edges.
    pub fn shortest_path(&self, from: &str, to: &str) -> PathOutcome {
        let from = self.normalizer.normalize(from);
        let to = self.normalizer.normalize(to);

        if !self.graph.contains(&from) || !self.graph.contains(&to) {
            return PathOutcome::UnknownIngredient;
        }
        if from == to {
            return PathOutcome::Found(vec![from]);
        }

        // Breadth-first search; neighbors come out in key order, so the
        // path chosen among equal-length candidates is deterministic.
        let mut parents: HashMap<&str, &str> = HashMap::new();
        let mut queue = VecDeque::new();
        parents.insert(from.as_str(), from.as_str());
        queue.push_back(from.as_str());

        while let Some(current) = queue.pop_front() {
            let Some(neighbors) = self.graph.neighbors(current) else {
                continue;
            };
            for (next, _) in neighbors {
                if parents.contains_key(next) {
                    continue;
                }
                parents.insert(next, current);
                if next == to {
                    return PathOutcome::Found(trace_path(&parents, from.as_str(), next));
                }
                queue.push_back(next);
            }
        }

        PathOutcome::NoPath
    }

    /// Ingredient with the highest degree, ties by ascending name.
    pub fn most_connected(&self) -> Result<Hub> {
        let mut best: Option<Hub> = None;
        // Nodes iterate in ascending key order; only a strictly higher
        // degree replaces the current best.
        for node in self.graph.nodes() {
            let degree = self.graph.degree(&node.name).unwrap_or(0);
            if best.as_ref().map_or(true, |b| degree > b.degree) {
                best = Some(Hub {
                    ingredient: node.name.clone(),
                    degree,
                });
            }
        }
        best.ok_or(Error::EmptyGraph)
    }

    /// Summary record for an ingredient, or `None` if it is unknown.
    pub fn stats(&self, ingredient: &str) -> Option<IngredientStats> {
        let key = self.normalizer.normalize(ingredient);
        let node = self.graph.node(&key)?;
        Some(IngredientStats {
            ingredient: key.clone(),
            recipes_containing: node.recipe_count,
            degree: self.graph.degree(&key).unwrap_or(0),
            top_pairings: self
                .related_by_key(&key, STATS_TOP_PAIRINGS)
                .unwrap_or_default(),
        })
    }
}

fn trace_path(parents: &HashMap<&str, &str>, from: &str, to: &str) -> Vec<String> {
    let mut path = vec![to.to_string()];
    let mut current = to;
    while current != from {
        match parents.get(current) {
            Some(&parent) => {
                path.push(parent.to_string());
                current = parent;
            }
            None => break,
        }
    }
    path.reverse();
    path
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::cooccurrence::CooccurrenceCounts;

    fn graph_from(recipes: Vec<Vec<&str>>, min: u64) -> (IngredientGraph, Normalizer) {
        let normalizer = Normalizer::default();
        let counts = CooccurrenceCounts::aggregate(recipes, &normalizer);
        (IngredientGraph::build(&counts, min), normalizer)
    }

    fn pairing(name: &str, weight: u64) -> Pairing {
        Pairing {
            name: name.to_string(),
            weight,
        }
    }

    #[test]
    fn test_related_sorted_with_alphabetical_ties() {
        let (graph, normalizer) = graph_from(
            vec![
                vec!["salt", "pepper", "garlic", "basil"],
                vec!["salt", "pepper", "garlic"],
                vec!["salt", "pepper"],
                vec!["salt", "butter"],
            ],
            1,
        );
        let engine = QueryEngine::new(&graph, &normalizer);

        assert_eq!(
            engine.related("Salt", 10),
            vec![
                pairing("pepper", 3),
                pairing("garlic", 2),
                pairing("basil", 1),
                pairing("butter", 1),
            ]
        );
        assert_eq!(
            engine.related("salt", 3),
            vec![pairing("pepper", 3), pairing("garlic", 2), pairing("basil", 1)]
        );
        assert!(engine.related("salt", 0).is_empty());
    }

    #[test]
    fn test_related_unknown_vs_isolated() {
        let (graph, normalizer) = graph_from(vec![vec!["salt", "pepper"], vec!["garlic"]], 1);
        let engine = QueryEngine::new(&graph, &normalizer);

        assert!(engine.related("saffron", 10).is_empty());
        assert_eq!(engine.lookup_related("saffron", 10), None);
        assert_eq!(engine.lookup_related("garlic", 10), Some(vec![]));
    }

    #[test]
    fn test_shortest_path_multi_hop() {
        let (graph, normalizer) = graph_from(
            vec![
                vec!["a", "b"],
                vec!["b", "c"],
                vec!["c", "d"],
                vec!["a", "x"],
                vec!["x", "d"],
            ],
            1,
        );
        let engine = QueryEngine::new(&graph, &normalizer);

        assert_eq!(
            engine.shortest_path("a", "d"),
            PathOutcome::Found(vec!["a".into(), "x".into(), "d".into()])
        );
        assert_eq!(
            engine.shortest_path("A", "c"),
            PathOutcome::Found(vec!["a".into(), "b".into(), "c".into()])
        );
    }

    #[test]
    fn test_shortest_path_reflexive() {
        let (graph, normalizer) = graph_from(vec![vec!["salt"]], 2);
        let engine = QueryEngine::new(&graph, &normalizer);
        assert_eq!(
            engine.shortest_path("fresh SALT", "salt"),
            PathOutcome::Found(vec!["salt".into()])
        );
    }

    #[test]
    fn test_shortest_path_sentinels() {
        let (graph, normalizer) = graph_from(vec![vec!["salt", "pepper"], vec!["garlic"]], 1);
        let engine = QueryEngine::new(&graph, &normalizer);

        assert_eq!(engine.shortest_path("salt", "garlic"), PathOutcome::NoPath);
        assert_eq!(
            engine.shortest_path("salt", "saffron"),
            PathOutcome::UnknownIngredient
        );
        assert_eq!(
            engine.shortest_path("saffron", "saffron"),
            PathOutcome::UnknownIngredient
        );
    }

    #[test]
    fn test_most_connected_tie_breaks_alphabetically() {
        let (graph, normalizer) = graph_from(vec![vec!["b", "c"], vec!["a", "d"]], 1);
        let engine = QueryEngine::new(&graph, &normalizer);
        assert_eq!(
            engine.most_connected().unwrap(),
            Hub {
                ingredient: "a".into(),
                degree: 1
            }
        );
    }

    #[test]
    fn test_most_connected_highest_degree() {
        let (graph, normalizer) =
            graph_from(vec![vec!["a", "b"], vec!["z", "a"], vec!["z", "b"], vec!["z", "c"]], 1);
        let engine = QueryEngine::new(&graph, &normalizer);
        let hub = engine.most_connected().unwrap();
        assert_eq!(hub.ingredient, "z");
        assert_eq!(hub.degree, 3);
    }

    #[test]
    fn test_most_connected_empty_graph() {
        let (graph, normalizer) = graph_from(vec![], 1);
        let engine = QueryEngine::new(&graph, &normalizer);
        assert!(matches!(engine.most_connected(), Err(Error::EmptyGraph)));
    }

    #[test]
    fn test_stats() {
        let (graph, normalizer) = graph_from(
            vec![
                vec!["salt", "pepper", "onion"],
                vec!["salt", "pepper"],
                vec!["onion", "garlic"],
            ],
            2,
        );
        let engine = QueryEngine::new(&graph, &normalizer);

        let stats = engine.stats("Chopped Salt").unwrap();
        assert_eq!(stats.ingredient, "salt");
        assert_eq!(stats.recipes_containing, 2);
        assert_eq!(stats.degree, 1);
        assert_eq!(stats.top_pairings, vec![pairing("pepper", 2)]);

        assert!(engine.stats("saffron").is_none());
    }

    #[test]
    fn test_stats_caps_pairings() {
        let recipe: Vec<&str> = vec!["salt", "a", "b", "c", "d", "e", "f", "g"];
        let (graph, normalizer) = graph_from(vec![recipe], 1);
        let engine = QueryEngine::new(&graph, &normalizer);

        let stats = engine.stats("salt").unwrap();
        assert_eq!(stats.degree, 7);
        assert_eq!(stats.top_pairings.len(), STATS_TOP_PAIRINGS);
        assert_eq!(stats.top_pairings[0], pairing("a", 1));
    }
}
