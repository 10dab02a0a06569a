use serde::{Deserialize, Serialize};

/// Response type for successful recipe creation
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateResponse {
    pub acknowledged: bool,
    pub inserted_id: String,
}

/// Query parameters for the recipe list endpoint
///
/// `limit` is kept as a raw string so that non-numeric values fall back to
/// the default instead of rejecting the request.
#[derive(Deserialize, utoipa::ToSchema)]
pub struct ListQuery {
    pub limit: Option<String>,
    pub sort: Option<String>,
    #[serde(rename = "userId")]
    pub user_id: Option<String>,
    pub cuisine: Option<String>,
    pub search: Option<String>,
}

/// Response type for successful recipe updates
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateResponse {
    pub matched_count: u64,
    pub modified_count: u64,
}

/// Response type for successful recipe deletion
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DeleteResponse {
    pub deleted_count: u64,
}

/// Request body for the like endpoint
#[derive(Deserialize, utoipa::ToSchema)]
pub struct LikeRequest {
    #[serde(rename = "userId")]
    pub user_id: Option<String>,
}

/// Response type for a successful like
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct LikeResponse {
    pub message: String,
    pub likes: i64,
}
