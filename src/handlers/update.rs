use crate::error::{ApiError, ErrorResponse};
use crate::models::UpdateResponse;
use crate::recipe;
use crate::state::AppState;
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use mongodb::bson::{self, oid::ObjectId};
use serde_json::Value as JsonValue;

/// PUT /addRecipe/:id handler - Update a recipe
///
/// Field-level merge: fields present in the body replace the stored values,
/// fields absent from the body are left untouched — except `categories`,
/// which is always recomputed with the create normalization, and `likes`,
/// which is recomputed from the body and resets to 0 when absent.
#[utoipa::path(
    put,
    path = "/addRecipe/{id}",
    params(
        ("id" = String, Path, description = "ObjectId of the recipe")
    ),
    request_body = serde_json::Value,
    responses(
        (status = 200, description = "Recipe updated", body = UpdateResponse),
        (status = 400, description = "Invalid id format or body", body = ErrorResponse),
        (status = 404, description = "Recipe not found", body = ErrorResponse),
        (status = 500, description = "Database error", body = ErrorResponse)
    ),
    tag = "recipes"
)]
pub async fn update_handler(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
    Json(body): Json<JsonValue>,
) -> Result<(StatusCode, Json<UpdateResponse>), ApiError> {
    let id = ObjectId::parse_str(&id_str).map_err(|_| ApiError::InvalidId(id_str.clone()))?;

    let body = bson::to_document(&body)
        .map_err(|_| ApiError::InvalidBody("expected a JSON object".to_string()))?;

    match state.store.update_recipe(id, recipe::shape_update(body)).await? {
        Some(summary) => {
            tracing::info!("Updated recipe with id: {}", id);
            Ok((
                StatusCode::OK,
                Json(UpdateResponse {
                    matched_count: summary.matched_count,
                    modified_count: summary.modified_count,
                }),
            ))
        }
        None => {
            tracing::info!("Recipe not found with id: {}", id);
            Err(ApiError::RecipeNotFound)
        }
    }
}
