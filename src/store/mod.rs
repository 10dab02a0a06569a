use anyhow::Result;
use async_trait::async_trait;
use mongodb::bson::{Bson, Document, oid::ObjectId};

mod mongo;
#[cfg(test)]
pub mod memory;

pub use mongo::MongoStore;

/// Filter applied by the recipe list endpoint.
///
/// Exactly one branch applies per request; `from_params` encodes the
/// precedence order as an explicit rule rather than incidental code order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListFilter {
    /// Exact match on the creator's userId
    ByUser(String),
    /// Exact match on cuisine
    ByCuisine(String),
    /// Case-insensitive substring match on title
    TitleSearch(String),
    /// Default visibility: public recipes only
    PublicOnly,
}

impl ListFilter {
    /// Select the filter branch from the optional query parameters.
    ///
    /// Precedence: userId > cuisine > search > public-only. Later parameters
    /// are ignored when an earlier one is present, and empty strings count
    /// as absent.
    pub fn from_params(
        user_id: Option<&str>,
        cuisine: Option<&str>,
        search: Option<&str>,
    ) -> Self {
        fn present(value: Option<&str>) -> Option<&str> {
            value.filter(|s| !s.is_empty())
        }

        if let Some(user_id) = present(user_id) {
            ListFilter::ByUser(user_id.to_string())
        } else if let Some(cuisine) = present(cuisine) {
            ListFilter::ByCuisine(cuisine.to_string())
        } else if let Some(search) = present(search) {
            ListFilter::TitleSearch(search.to_string())
        } else {
            ListFilter::PublicOnly
        }
    }
}

/// Sort order for the recipe list endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListOrder {
    /// Natural store order
    Natural,
    /// Most-liked first
    LikesDesc,
}

/// Outcome of an update operation
#[derive(Debug, Clone, Copy)]
pub struct UpdateSummary {
    pub matched_count: u64,
    pub modified_count: u64,
}

/// Outcome of a like operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LikeOutcome {
    /// Incremented; carries the new likes value
    Liked(i64),
    /// No recipe with that id
    NotFound,
    /// The caller owns the recipe
    OwnRecipe,
}

/// Persistence seam for recipe documents.
///
/// The production implementation is [`MongoStore`]; handler tests inject an
/// in-memory implementation instead of a live database.
#[async_trait]
pub trait RecipeStore: Send + Sync {
    /// Insert a shaped recipe document, returning the new id as a hex string
    async fn insert_recipe(&self, recipe: Document) -> Result<String>;

    /// List recipes matching `filter`, ordered and capped
    async fn list_recipes(
        &self,
        filter: &ListFilter,
        order: ListOrder,
        limit: i64,
    ) -> Result<Vec<Document>>;

    /// Fetch a single recipe by id
    async fn find_recipe(&self, id: ObjectId) -> Result<Option<Document>>;

    /// Apply a `$set`-style field merge; `None` when no recipe matches
    async fn update_recipe(&self, id: ObjectId, fields: Document)
        -> Result<Option<UpdateSummary>>;

    /// Atomically increment likes unless the caller owns the recipe
    async fn like_recipe(&self, id: ObjectId, user_id: &str) -> Result<LikeOutcome>;

    /// Delete a recipe by id; false when nothing was deleted
    async fn delete_recipe(&self, id: ObjectId) -> Result<bool>;

    /// Verify the backing store is reachable
    async fn health_check(&self) -> Result<()>;
}

/// Read the likes counter from a stored recipe document.
///
/// Writes keep the counter numeric, but the value may arrive as any BSON
/// number depending on how it was last set.
pub(crate) fn likes_value(doc: &Document) -> i64 {
    match doc.get("likes") {
        Some(Bson::Int32(n)) => i64::from(*n),
        Some(Bson::Int64(n)) => *n,
        Some(Bson::Double(d)) => *d as i64,
        _ => 0,
    }
}
