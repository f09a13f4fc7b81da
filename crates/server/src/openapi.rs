use chrono::{DateTime, FixedOffset};
use serde::Serialize;
use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(Serialize, ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RecipeDoc {
    pub id: String,
    pub name: String,
    pub tags: Vec<String>,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
    pub published_at: DateTime<FixedOffset>,
}

/// Body of create/update; `id` and `publishedAt` are ignored if sent
#[derive(Serialize, ToSchema)]
pub struct RecipeInputDoc {
    pub name: Option<String>,
    pub tags: Option<Vec<String>>,
    pub ingredients: Option<Vec<String>>,
    pub instructions: Option<Vec<String>>,
}

#[derive(Serialize, ToSchema)]
pub struct ErrorDoc { pub error: String }

#[derive(Serialize, ToSchema)]
pub struct StatusDoc { pub status: String }

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Recipes API",
        version = "1.0.0",
        description = "CRUD over an in-memory collection of recipes"
    ),
    paths(
        crate::routes::health,
        crate::routes::recipes::list_recipes,
        crate::routes::recipes::search_recipes,
        crate::routes::recipes::create_recipe,
        crate::routes::recipes::update_recipe,
        crate::routes::recipes::delete_recipe,
    ),
    components(
        schemas(
            HealthResponse,
            RecipeDoc,
            RecipeInputDoc,
            ErrorDoc,
            StatusDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "recipes")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_every_recipe_route() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&String> = doc.paths.paths.keys().collect();
        assert!(paths.iter().any(|p| *p == "/recipes"));
        assert!(paths.iter().any(|p| *p == "/recipes/search"));
        assert!(paths.iter().any(|p| *p == "/recipes/{id}"));
        assert!(paths.iter().any(|p| *p == "/health"));
        assert_eq!(doc.info.title, "Recipes API");
    }
}
