use axum::extract::{Query, State};
use axum::Json;
use common::types::StatusBody;
use service::recipes::{Recipe, RecipeInput};
use tracing::info;

use crate::errors::ApiError;
use crate::extract::{JsonBody, RecipeId};
use crate::state::AppState;

/// First `tag` value of the query string; empty when absent.
///
/// Repeated keys are allowed, later values are ignored.
fn first_tag(pairs: Vec<(String, String)>) -> String {
    pairs
        .into_iter()
        .find_map(|(k, v)| (k == "tag").then_some(v))
        .unwrap_or_default()
}

/// List every recipe in store order
#[utoipa::path(
    get,
    path = "/recipes",
    tag = "recipes",
    responses((status = 200, description = "Successful operation", body = [crate::openapi::RecipeDoc]))
)]
pub async fn list_recipes(State(state): State<AppState>) -> Json<Vec<Recipe>> {
    Json(state.store.list().await)
}

/// Recipes having a tag equal to `tag`, ignoring case
#[utoipa::path(
    get,
    path = "/recipes/search",
    tag = "recipes",
    params(("tag" = Option<String>, Query, description = "Tag to filter by")),
    responses((status = 200, description = "List of recipes filtered by tag", body = [crate::openapi::RecipeDoc]))
)]
pub async fn search_recipes(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Json<Vec<Recipe>> {
    let tag = first_tag(pairs);
    let found = state.store.search_by_tag(&tag).await;
    info!(tag = %tag, count = found.len(), "search recipes");
    Json(found)
}

#[utoipa::path(
    post,
    path = "/recipes",
    tag = "recipes",
    request_body = crate::openapi::RecipeInputDoc,
    responses(
        (status = 200, description = "Recipe created", body = crate::openapi::RecipeDoc),
        (status = 400, description = "Malformed body", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn create_recipe(
    State(state): State<AppState>,
    JsonBody(input): JsonBody<RecipeInput>,
) -> Json<Recipe> {
    let recipe = state.store.create(input).await;
    info!(recipe_id = %recipe.id, name = %recipe.name, "created recipe");
    Json(recipe)
}

#[utoipa::path(
    put,
    path = "/recipes/{id}",
    tag = "recipes",
    params(("id" = String, Path, description = "Id of the recipe to update")),
    request_body = crate::openapi::RecipeInputDoc,
    responses(
        (status = 200, description = "Recipe updated", body = crate::openapi::RecipeDoc),
        (status = 400, description = "Malformed body", body = crate::openapi::ErrorDoc),
        (status = 404, description = "Recipe not found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn update_recipe(
    State(state): State<AppState>,
    RecipeId(id): RecipeId,
    JsonBody(input): JsonBody<RecipeInput>,
) -> Result<Json<Recipe>, ApiError> {
    let recipe = state.store.update(&id, input).await?;
    info!(recipe_id = %recipe.id, "updated recipe");
    Ok(Json(recipe))
}

#[utoipa::path(
    delete,
    path = "/recipes/{id}",
    tag = "recipes",
    params(("id" = String, Path, description = "Id of the recipe to delete")),
    responses(
        (status = 200, description = "Recipe deleted", body = crate::openapi::StatusDoc),
        (status = 404, description = "Recipe not found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn delete_recipe(
    State(state): State<AppState>,
    RecipeId(id): RecipeId,
) -> Result<Json<StatusBody>, ApiError> {
    state.store.delete(&id).await?;
    info!(recipe_id = %id, "deleted recipe");
    Ok(Json(StatusBody::new("Recipe deleted")))
}
