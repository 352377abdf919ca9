use crate::graph::Pairing;
use serde::{Deserialize, Serialize};

/// Related ingredients query parameters
#[derive(Debug, Clone, Deserialize)]
pub struct RelatedParams {
    #[serde(default)]
    pub limit: Option<usize>,
}

/// Related ingredients response
#[derive(Debug, Clone, Serialize)]
pub struct RelatedResponse {
    pub ingredient: String,
    pub pairings: Vec<Pairing>,
}

/// Shortest path query parameters
#[derive(Debug, Clone, Deserialize)]
pub struct PathParams {
    pub from: String,
    pub to: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PathStatus {
    Found,
    NoPath,
}

/// Shortest path response. `path` is omitted when no path exists.
#[derive(Debug, Clone, Serialize)]
pub struct PathResponse {
    pub status: PathStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<Vec<String>>,
}

/// Rebuild request body
#[derive(Debug, Clone, Deserialize)]
pub struct RebuildRequest {
    pub min_cooccurrence: u64,
}

/// Health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
}
