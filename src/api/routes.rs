use axum::http::{header, Method};
use axum::{
    routing::{get, post},
    Router,
};
use std::time::Duration;
use tower_http::{compression::CompressionLayer, cors::CorsLayer, trace::TraceLayer};

use crate::api::handlers::{self as api_handlers, AppState};

/// Create the router with all endpoints
pub fn create_router(state: AppState) -> Router {
    let api_routes = Router::new()
        // Graph
        .route("/summary", get(api_handlers::get_summary))
        .route("/most-connected", get(api_handlers::most_connected))
        .route("/path", get(api_handlers::shortest_path))
        .route("/rebuild", post(api_handlers::rebuild))
        // Ingredients
        .route(
            "/ingredients/:name/related",
            get(api_handlers::related_ingredients),
        )
        .route(
            "/ingredients/:name/stats",
            get(api_handlers::ingredient_stats),
        )
        .with_state(state.clone());

    let health_routes = Router::new()
        .route("/health", get(api_handlers::health_check))
        .with_state(state);

    Router::new()
        .merge(health_routes)
        .nest("/api", api_routes)
        .layer(
            CorsLayer::new()
                .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
                .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
                .allow_origin(tower_http::cors::Any)
                .max_age(Duration::from_secs(3600)),
        )
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DatasetConfig, GraphConfig, ServerConfig, Settings};
    use crate::graph::{IngredientNetwork, Normalizer, SharedNetwork};
    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
    };
    use serde_json::Value;
    use tower::ServiceExt;

    fn create_test_state(recipes: Vec<Vec<&str>>) -> AppState {
        let network = IngredientNetwork::build(recipes, Normalizer::default(), 2);

        let settings = Settings {
            dataset: DatasetConfig {
                path: "recipe.json".into(),
                stopwords_path: None,
            },
            graph: GraphConfig::default(),
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 3000,
            },
        };

        AppState {
            network: SharedNetwork::new(network),
            settings,
        }
    }

    fn sample_state() -> AppState {
        create_test_state(vec![
            vec!["Salt", "Pepper", "Onion"],
            vec!["Salt", "Pepper"],
            vec!["Onion", "Garlic"],
        ])
    }

    async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_health() {
        let app = create_router(sample_state());
        let (status, body) = get_json(app, "/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn test_related() {
        let app = create_router(sample_state());
        let (status, body) = get_json(app, "/api/ingredients/Salt/related").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["ingredient"], "salt");
        assert_eq!(body["pairings"][0]["name"], "pepper");
        assert_eq!(body["pairings"][0]["weight"], 2);
        assert_eq!(body["pairings"].as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_related_unknown_is_404() {
        let app = create_router(sample_state());
        let (status, body) = get_json(app, "/api/ingredients/saffron/related").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body["error"].as_str().unwrap().contains("saffron"));
    }

    #[tokio::test]
    async fn test_related_isolated_is_empty() {
        let app = create_router(sample_state());
        let (status, body) = get_json(app, "/api/ingredients/garlic/related").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body["pairings"].as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_path_outcomes() {
        let state = sample_state();

        let (status, body) =
            get_json(create_router(state.clone()), "/api/path?from=salt&to=pepper").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "found");
        assert_eq!(body["path"], serde_json::json!(["salt", "pepper"]));

        let (status, body) =
            get_json(create_router(state.clone()), "/api/path?from=onion&to=garlic").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "no_path");
        assert!(body.get("path").is_none());

        let (status, _) = get_json(create_router(state), "/api/path?from=onion&to=saffron").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_stats() {
        let app = create_router(sample_state());
        let (status, body) = get_json(app, "/api/ingredients/fresh%20pepper/stats").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["ingredient"], "pepper");
        assert_eq!(body["recipes_containing"], 2);
        assert_eq!(body["degree"], 1);
        assert_eq!(body["top_pairings"][0]["name"], "salt");
    }

    #[tokio::test]
    async fn test_most_connected() {
        let app = create_router(sample_state());
        let (status, body) = get_json(app, "/api/most-connected").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["ingredient"], "pepper");
        assert_eq!(body["degree"], 1);
    }

    #[tokio::test]
    async fn test_most_connected_empty_graph() {
        let app = create_router(create_test_state(vec![]));
        let (status, _) = get_json(app, "/api/most-connected").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_rebuild_swaps_network() {
        let state = sample_state();

        let response = create_router(state.clone())
            .oneshot(
                Request::builder()
                    .method(Method::POST)
                    .uri("/api/rebuild")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(r#"{"min_cooccurrence": 1}"#))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let (_, body) = get_json(create_router(state.clone()), "/api/summary").await;
        assert_eq!(body["min_cooccurrence"], 1);
        assert_eq!(body["edges"], 4);

        let (_, body) = get_json(create_router(state), "/api/path?from=onion&to=garlic").await;
        assert_eq!(body["status"], "found");
    }

    #[tokio::test]
    async fn test_rebuild_rejects_zero_threshold() {
        let response = create_router(sample_state())
            .oneshot(
                Request::builder()
                    .method(Method::POST)
                    .uri("/api/rebuild")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(r#"{"min_cooccurrence": 0}"#))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
