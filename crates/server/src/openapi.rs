use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(ToSchema)]
pub struct RecipeDoc {
    /// Server-assigned UUID.
    pub id: String,
    pub name: String,
    pub ingredients: Vec<String>,
}

#[derive(ToSchema)]
pub struct RecipeInputDoc { pub name: String, pub ingredients: Vec<String> }

#[derive(ToSchema)]
pub struct ErrorDoc { pub error: String, pub detail: Option<String> }

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::recipes::list_recipes,
        crate::routes::recipes::create_recipe,
        crate::routes::recipes::get_recipe,
        crate::routes::recipes::update_recipe,
        crate::routes::recipes::delete_recipe,
    ),
    components(
        schemas(
            HealthResponse,
            RecipeDoc,
            RecipeInputDoc,
            ErrorDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "recipes")
    )
)]
pub struct ApiDoc;
