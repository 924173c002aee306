use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use service::recipes::{Recipe, RecipeInput};
use uuid::Uuid;

use crate::errors::JsonApiError;
use crate::state::AppState;

/// A path id that is not a UUID can never name a stored recipe.
fn parse_id(raw: &str) -> Result<Uuid, JsonApiError> {
    Uuid::parse_str(raw).map_err(|_| JsonApiError::not_found(format!("recipe {raw} not found")))
}

#[utoipa::path(get, path = "/recipes", tag = "recipes",
    responses((status = 200, description = "All recipes in creation order", body = [crate::openapi::RecipeDoc])))]
pub async fn list_recipes(State(state): State<AppState>) -> Json<Vec<Recipe>> {
    Json(state.recipes.list().await)
}

#[utoipa::path(post, path = "/recipes", tag = "recipes",
    request_body = crate::openapi::RecipeInputDoc,
    responses(
        (status = 201, description = "Created", body = crate::openapi::RecipeDoc),
        (status = 400, description = "Bad Request", body = crate::openapi::ErrorDoc),
        (status = 422, description = "Missing or mistyped field", body = crate::openapi::ErrorDoc)
    ))]
pub async fn create_recipe(
    State(state): State<AppState>,
    payload: Result<Json<RecipeInput>, JsonRejection>,
) -> Result<(StatusCode, Json<Recipe>), JsonApiError> {
    let Json(input) = payload?;
    let created = state.recipes.create(input).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(get, path = "/recipes/{id}", tag = "recipes",
    params(("id" = String, Path, description = "Recipe id")),
    responses(
        (status = 200, description = "OK", body = crate::openapi::RecipeDoc),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorDoc)
    ))]
pub async fn get_recipe(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Recipe>, JsonApiError> {
    let id = parse_id(&id)?;
    state
        .recipes
        .get(id)
        .await
        .map(Json)
        .ok_or_else(|| JsonApiError::not_found(format!("recipe {id} not found")))
}

#[utoipa::path(put, path = "/recipes/{id}", tag = "recipes",
    params(("id" = String, Path, description = "Recipe id")),
    request_body = crate::openapi::RecipeInputDoc,
    responses(
        (status = 200, description = "Updated", body = crate::openapi::RecipeDoc),
        (status = 400, description = "Bad Request", body = crate::openapi::ErrorDoc),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorDoc)
    ))]
pub async fn update_recipe(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<RecipeInput>, JsonRejection>,
) -> Result<Json<Recipe>, JsonApiError> {
    let id = parse_id(&id)?;
    let Json(input) = payload?;
    let updated = state.recipes.update(id, input).await?;
    Ok(Json(updated))
}

#[utoipa::path(delete, path = "/recipes/{id}", tag = "recipes",
    params(("id" = String, Path, description = "Recipe id")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorDoc)
    ))]
pub async fn delete_recipe(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, JsonApiError> {
    let id = parse_id(&id)?;
    state.recipes.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
