use crate::error::{ApiError, ErrorResponse};
use crate::models::CreateResponse;
use crate::recipe;
use crate::routes;
use crate::state::AppState;
use axum::{Json, extract::State, http::StatusCode};
use mongodb::bson;
use serde_json::Value as JsonValue;

/// POST /addRecipe handler - Create a new recipe
///
/// Accepts an arbitrary JSON object. `categories` is normalized to an array,
/// `likes` starts at 0 regardless of input, `isPublic` defaults to true, and
/// every other caller-supplied field is stored verbatim.
#[utoipa::path(
    post,
    path = routes::RECIPES,
    request_body = serde_json::Value,
    responses(
        (status = 200, description = "Recipe created", body = CreateResponse),
        (status = 400, description = "Request body is not a JSON object", body = ErrorResponse),
        (status = 500, description = "Database error", body = ErrorResponse)
    ),
    tag = "recipes"
)]
pub async fn create_handler(
    State(state): State<AppState>,
    Json(body): Json<JsonValue>,
) -> Result<(StatusCode, Json<CreateResponse>), ApiError> {
    let body = bson::to_document(&body)
        .map_err(|_| ApiError::InvalidBody("expected a JSON object".to_string()))?;

    let inserted_id = state.store.insert_recipe(recipe::shape_new_recipe(body)).await?;

    tracing::info!("Created recipe with id: {}", inserted_id);
    Ok((
        StatusCode::OK,
        Json(CreateResponse {
            acknowledged: true,
            inserted_id,
        }),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::get::get_handler;
    use crate::store::memory::MemoryStore;
    use axum::{
        Router,
        body::Body,
        http::Request,
        routing::{get, post},
    };
    use std::sync::Arc;
    use tower::ServiceExt;

    fn setup_test_app() -> Router {
        let state = AppState {
            store: Arc::new(MemoryStore::default()),
        };

        Router::new()
            .route(crate::routes::RECIPES, post(create_handler))
            .route(crate::routes::RECIPE_ITEM, get(get_handler))
            .with_state(state)
    }

    async fn post_recipe(app: &Router, body: serde_json::Value) -> (StatusCode, CreateResponse) {
        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/addRecipe")
                    .header("content-type", "application/json")
                    .body(Body::from(serde_json::to_string(&body).unwrap()))
                    .unwrap(),
            )
            .await
            .unwrap();

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    async fn fetch_recipe(app: &Router, id: &str) -> serde_json::Value {
        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri(format!("/addRecipe/{}", id))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_create_normalizes_scalar_categories() {
        let app = setup_test_app();

        let (status, created) = post_recipe(
            &app,
            serde_json::json!({
                "title": "Soup",
                "categories": "dinner",
                "userId": "u1"
            }),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert!(created.acknowledged);
        assert_eq!(created.inserted_id.len(), 24);

        let stored = fetch_recipe(&app, &created.inserted_id).await;
        assert_eq!(stored["categories"], serde_json::json!(["dinner"]));
        assert_eq!(stored["likes"], serde_json::json!(0));
        assert_eq!(stored["isPublic"], serde_json::json!(true));
        assert_eq!(stored["userId"], serde_json::json!("u1"));
        assert_eq!(stored["_id"], serde_json::json!(created.inserted_id));
    }

    #[tokio::test]
    async fn test_create_keeps_category_list_and_extra_fields() {
        let app = setup_test_app();

        let (status, created) = post_recipe(
            &app,
            serde_json::json!({
                "title": "Pad Thai",
                "categories": ["dinner", "noodles"],
                "cuisine": "thai",
                "prepTime": "25 min"
            }),
        )
        .await;

        assert_eq!(status, StatusCode::OK);

        let stored = fetch_recipe(&app, &created.inserted_id).await;
        assert_eq!(stored["categories"], serde_json::json!(["dinner", "noodles"]));
        assert_eq!(stored["cuisine"], serde_json::json!("thai"));
        assert_eq!(stored["prepTime"], serde_json::json!("25 min"));
    }

    #[tokio::test]
    async fn test_create_forces_likes_to_zero() {
        let app = setup_test_app();

        let (_, created) =
            post_recipe(&app, serde_json::json!({ "title": "Soup", "likes": 42 })).await;

        let stored = fetch_recipe(&app, &created.inserted_id).await;
        assert_eq!(stored["likes"], serde_json::json!(0));
    }

    #[tokio::test]
    async fn test_create_missing_categories_becomes_empty_list() {
        let app = setup_test_app();

        let (_, created) = post_recipe(&app, serde_json::json!({ "title": "Soup" })).await;

        let stored = fetch_recipe(&app, &created.inserted_id).await;
        assert_eq!(stored["categories"], serde_json::json!([]));
    }

    #[tokio::test]
    async fn test_create_keeps_explicit_is_public_false() {
        let app = setup_test_app();

        let (_, created) =
            post_recipe(&app, serde_json::json!({ "title": "Secret", "isPublic": false })).await;

        let stored = fetch_recipe(&app, &created.inserted_id).await;
        assert_eq!(stored["isPublic"], serde_json::json!(false));
    }

    #[tokio::test]
    async fn test_create_rejects_non_object_body() {
        let app = setup_test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/addRecipe")
                    .header("content-type", "application/json")
                    .body(Body::from("[1, 2, 3]"))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
