use utoipa::OpenApi;

use crate::error::{ErrorResponse, HealthResponse, UnhealthyResponse};
use crate::handlers;
use crate::models::{CreateResponse, DeleteResponse, LikeRequest, LikeResponse, UpdateResponse};

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "recipe-book-api",
        version = "1.0.0",
        description = "A REST backend for storing and retrieving recipe records in MongoDB"
    ),
    paths(
        handlers::health::health_handler,
        handlers::create::create_handler,
        handlers::list::list_handler,
        handlers::get::get_handler,
        handlers::update::update_handler,
        handlers::like::like_handler,
        handlers::delete::delete_handler
    ),
    components(
        schemas(
            CreateResponse,
            UpdateResponse,
            DeleteResponse,
            LikeRequest,
            LikeResponse,
            ErrorResponse,
            HealthResponse,
            UnhealthyResponse
        )
    ),
    tags(
        (name = "health", description = "Health check operations"),
        (name = "recipes", description = "Recipe store operations")
    )
)]
pub struct ApiDoc;
