use axum::{
    routing::{get, put},
    Json, Router,
};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use utoipa::OpenApi;

use common::types::Health;

use crate::openapi::ApiDoc;
use crate::state::AppState;

pub mod recipes;

#[utoipa::path(get, path = "/health", tag = "health", responses((status = 200, description = "OK", body = crate::openapi::HealthResponse)))]
pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// Build the full application router: recipes CRUD, health and the OpenAPI document
pub fn build_router(state: AppState, cors: CorsLayer) -> Router {
    let recipes: Router<AppState> = Router::new()
        .route("/recipes", get(recipes::list_recipes).post(recipes::create_recipe))
        .route("/recipes/search", get(recipes::search_recipes))
        .route("/recipes/:id", put(recipes::update_recipe).delete(recipes::delete_recipe));

    let meta: Router<AppState> = Router::new()
        .route("/health", get(health))
        .route("/api-docs/openapi.json", get(openapi_json));

    // 中间件顺序：CORS 在内层，TraceLayer 在最外层，记录所有请求（含预检）
    recipes
        .merge(meta)
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
