use crate::error::{ApiError, ErrorResponse};
use crate::models::{LikeRequest, LikeResponse};
use crate::routes;
use crate::state::AppState;
use crate::store::LikeOutcome;
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use mongodb::bson::oid::ObjectId;

/// PATCH /addRecipe/:id/like handler - Like a recipe
///
/// Increments the likes counter by one on behalf of the caller, unless the
/// caller is the recipe's creator. The increment is a single conditional
/// update in the store, so the ownership check cannot race a concurrent
/// write.
#[utoipa::path(
    patch,
    path = routes::RECIPE_LIKE,
    params(
        ("id" = String, Path, description = "ObjectId of the recipe")
    ),
    request_body = LikeRequest,
    responses(
        (status = 200, description = "Likes incremented", body = LikeResponse),
        (status = 400, description = "Missing userId or invalid id", body = ErrorResponse),
        (status = 403, description = "Caller owns the recipe", body = ErrorResponse),
        (status = 404, description = "Recipe not found", body = ErrorResponse),
        (status = 500, description = "Database error", body = ErrorResponse)
    ),
    tag = "recipes"
)]
pub async fn like_handler(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
    Json(body): Json<LikeRequest>,
) -> Result<(StatusCode, Json<LikeResponse>), ApiError> {
    let id = ObjectId::parse_str(&id_str).map_err(|_| ApiError::InvalidId(id_str.clone()))?;

    let user_id = body
        .user_id
        .filter(|user_id| !user_id.is_empty())
        .ok_or(ApiError::MissingUserId)?;

    match state.store.like_recipe(id, &user_id).await? {
        LikeOutcome::Liked(likes) => {
            tracing::info!("Recipe {} liked by {} (likes: {})", id, user_id, likes);
            Ok((
                StatusCode::OK,
                Json(LikeResponse {
                    message: "Likes updated successfully".to_string(),
                    likes,
                }),
            ))
        }
        LikeOutcome::OwnRecipe => {
            tracing::info!("Rejected self-like on recipe {} by {}", id, user_id);
            Err(ApiError::OwnRecipeLike)
        }
        LikeOutcome::NotFound => {
            tracing::info!("Recipe not found with id: {}", id);
            Err(ApiError::RecipeNotFound)
        }
    }
}
