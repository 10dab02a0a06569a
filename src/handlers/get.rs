use crate::error::{ApiError, ErrorResponse};
use crate::recipe;
use crate::routes;
use crate::state::AppState;
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use mongodb::bson::oid::ObjectId;
use serde_json::Value as JsonValue;

/// GET /addRecipe/:id handler - Fetch a single recipe
#[utoipa::path(
    get,
    path = routes::RECIPE_ITEM,
    params(
        ("id" = String, Path, description = "ObjectId of the recipe")
    ),
    responses(
        (status = 200, description = "Recipe found", body = serde_json::Value),
        (status = 400, description = "Invalid id format", body = ErrorResponse),
        (status = 404, description = "Recipe not found", body = ErrorResponse),
        (status = 500, description = "Database error", body = ErrorResponse)
    ),
    tag = "recipes"
)]
pub async fn get_handler(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<(StatusCode, Json<JsonValue>), ApiError> {
    let id = ObjectId::parse_str(&id_str).map_err(|_| ApiError::InvalidId(id_str.clone()))?;

    match state.store.find_recipe(id).await? {
        Some(found) => {
            tracing::info!("Fetched recipe with id: {}", id);
            Ok((StatusCode::OK, Json(recipe::recipe_to_json(found))))
        }
        None => {
            tracing::info!("Recipe not found with id: {}", id);
            Err(ApiError::RecipeNotFound)
        }
    }
}
