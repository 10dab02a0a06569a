use crate::error::{ApiError, ErrorResponse};
use crate::models::DeleteResponse;
use crate::state::AppState;
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use mongodb::bson::oid::ObjectId;

/// DELETE /addRecipe/:id handler - Delete a recipe
#[utoipa::path(
    delete,
    path = "/addRecipe/{id}",
    params(
        ("id" = String, Path, description = "ObjectId of the recipe")
    ),
    responses(
        (status = 200, description = "Recipe deleted", body = DeleteResponse),
        (status = 400, description = "Invalid id format", body = ErrorResponse),
        (status = 404, description = "Recipe not found", body = ErrorResponse),
        (status = 500, description = "Database error", body = ErrorResponse)
    ),
    tag = "recipes"
)]
pub async fn delete_handler(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<(StatusCode, Json<DeleteResponse>), ApiError> {
    let id = ObjectId::parse_str(&id_str).map_err(|_| ApiError::InvalidId(id_str.clone()))?;

    if state.store.delete_recipe(id).await? {
        tracing::info!("Deleted recipe with id: {}", id);
        Ok((StatusCode::OK, Json(DeleteResponse { deleted_count: 1 })))
    } else {
        tracing::info!("Recipe not found with id: {}", id);
        Err(ApiError::RecipeNotFound)
    }
}
