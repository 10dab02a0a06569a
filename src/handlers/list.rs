use crate::error::{ApiError, ErrorResponse};
use crate::models::ListQuery;
use crate::recipe;
use crate::state::AppState;
use crate::store::{ListFilter, ListOrder};
use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
};
use serde_json::Value as JsonValue;

/// Parse the `limit` query parameter.
///
/// Non-numeric, zero, and negative values all fall back to the default.
fn parse_limit(limit: Option<&str>) -> i64 {
    match limit.and_then(|value| value.parse::<i64>().ok()) {
        Some(limit) if limit > 0 => limit,
        _ => recipe::DEFAULT_LIMIT,
    }
}

/// Parse the `sort` query parameter; only `-likes` selects an explicit order.
fn parse_order(sort: Option<&str>) -> ListOrder {
    match sort {
        Some("-likes") => ListOrder::LikesDesc,
        _ => ListOrder::Natural,
    }
}

/// GET /addRecipe handler - List recipes
///
/// Filter precedence: userId > cuisine > search > public-only. Exactly one
/// branch applies; later parameters are ignored when an earlier one is
/// present. Results are sorted by likes descending only for `sort=-likes`
/// and capped by `limit` (default 10).
#[utoipa::path(
    get,
    path = "/addRecipe",
    params(
        ("limit" = Option<String>, Query, description = "Maximum number of results (default 10)"),
        ("sort" = Option<String>, Query, description = "Pass -likes to sort by likes descending"),
        ("userId" = Option<String>, Query, description = "Filter by exact creator userId"),
        ("cuisine" = Option<String>, Query, description = "Filter by exact cuisine"),
        ("search" = Option<String>, Query, description = "Case-insensitive substring match on title")
    ),
    responses(
        (status = 200, description = "Array of recipes", body = Vec<serde_json::Value>),
        (status = 500, description = "Database error", body = ErrorResponse)
    ),
    tag = "recipes"
)]
pub async fn list_handler(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<(StatusCode, Json<Vec<JsonValue>>), ApiError> {
    let filter = ListFilter::from_params(
        query.user_id.as_deref(),
        query.cuisine.as_deref(),
        query.search.as_deref(),
    );
    let order = parse_order(query.sort.as_deref());
    let limit = parse_limit(query.limit.as_deref());

    let recipes = state.store.list_recipes(&filter, order, limit).await?;
    let recipes: Vec<JsonValue> = recipes.into_iter().map(recipe::recipe_to_json).collect();

    tracing::info!(
        "Listed {} recipes (filter: {:?}, order: {:?}, limit: {})",
        recipes.len(),
        filter,
        order,
        limit
    );

    Ok((StatusCode::OK, Json(recipes)))
}
