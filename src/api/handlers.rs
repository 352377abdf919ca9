use axum::{
    extract::{Path, Query, State},
    Json,
};
use tracing::{debug, info};

use crate::{
    api::models::*,
    graph::{Hub, IngredientStats, NetworkSummary, PathOutcome, SharedNetwork},
    Error, Result,
};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub network: SharedNetwork,
    pub settings: crate::config::Settings,
}

/// GET /api/summary - Graph size and build parameters
pub async fn get_summary(State(state): State<AppState>) -> Result<Json<NetworkSummary>> {
    debug!("Summary request");

    Ok(Json(state.network.current()?.summary()))
}

/// GET /api/ingredients/:name/related - Strongest pairings
pub async fn related_ingredients(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Query(params): Query<RelatedParams>,
) -> Result<Json<RelatedResponse>> {
    debug!("Related request: {} {:?}", name, params);

    let limit = params
        .limit
        .unwrap_or(state.settings.graph.top_n)
        .min(state.settings.graph.max_top_n);

    let network = state.network.current()?;
    let pairings = network
        .query()
        .lookup_related(&name, limit)
        .ok_or_else(|| Error::NotFound(format!("Ingredient '{name}' not found")))?;

    Ok(Json(RelatedResponse {
        ingredient: network.normalizer().normalize(&name),
        pairings,
    }))
}

/// GET /api/ingredients/:name/stats - Per-ingredient statistics
pub async fn ingredient_stats(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<IngredientStats>> {
    debug!("Stats request: {}", name);

    state
        .network
        .current()?
        .query()
        .stats(&name)
        .map(Json)
        .ok_or_else(|| Error::NotFound(format!("Ingredient '{name}' not found")))
}

/// GET /api/path - Shortest connecting path between two ingredients
pub async fn shortest_path(
    State(state): State<AppState>,
    Query(params): Query<PathParams>,
) -> Result<Json<PathResponse>> {
    debug!("Path request: {:?}", params);

    match state
        .network
        .current()?
        .query()
        .shortest_path(&params.from, &params.to)
    {
        PathOutcome::Found(path) => Ok(Json(PathResponse {
            status: PathStatus::Found,
            path: Some(path),
        })),
        PathOutcome::NoPath => Ok(Json(PathResponse {
            status: PathStatus::NoPath,
            path: None,
        })),
        PathOutcome::UnknownIngredient => Err(Error::NotFound(format!(
            "Ingredient '{}' or '{}' not found",
            params.from, params.to
        ))),
    }
}

/// GET /api/most-connected - Ingredient with the most neighbors
pub async fn most_connected(State(state): State<AppState>) -> Result<Json<Hub>> {
    debug!("Most connected request");

    Ok(Json(state.network.current()?.query().most_connected()?))
}

/// POST /api/rebuild - Rebuild the graph at a new threshold
pub async fn rebuild(
    State(state): State<AppState>,
    Json(request): Json<RebuildRequest>,
) -> Result<Json<NetworkSummary>> {
    if request.min_cooccurrence == 0 {
        return Err(Error::Validation(
            "min_cooccurrence must be at least 1".to_string(),
        ));
    }

    info!("Rebuild request: min_cooccurrence={}", request.min_cooccurrence);

    let network = state.network.clone();
    let rebuilt = tokio::task::spawn_blocking(move || network.rebuild(request.min_cooccurrence))
        .await
        .map_err(|e| Error::Internal(format!("Rebuild task failed: {e}")))??;

    Ok(Json(rebuilt.summary()))
}

/// GET /health - Health check endpoint
pub async fn health_check() -> Result<Json<HealthResponse>> {
    Ok(Json(HealthResponse {
        status: "ok".to_string(),
    }))
}
