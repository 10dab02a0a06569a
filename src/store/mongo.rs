use anyhow::{Context, Result};
use async_trait::async_trait;
use futures::stream::TryStreamExt;
use mongodb::{
    Client, Collection,
    bson::{Document, doc, oid::ObjectId},
    options::{FindOneAndUpdateOptions, FindOptions, ReturnDocument},
};

use crate::config::Config;
use crate::store::{LikeOutcome, ListFilter, ListOrder, RecipeStore, UpdateSummary, likes_value};

/// Shareable MongoDB-backed recipe store for use across async handlers
///
/// Wraps a single `mongodb::Client` created at startup; the driver maintains
/// its own connection pool behind it.
#[derive(Clone)]
pub struct MongoStore {
    client: Client,
    recipes: Collection<Document>,
}

impl MongoStore {
    /// Create a new store from configuration
    ///
    /// Connects to the configured MongoDB deployment and binds the recipe
    /// collection handle used by every operation.
    pub async fn connect(config: &Config) -> Result<Self> {
        let client = Client::with_uri_str(&config.mongodb_uri)
            .await
            .context("Failed to create MongoDB client")?;

        let recipes = client
            .database(&config.mongodb_database)
            .collection::<Document>(&config.mongodb_collection);

        tracing::info!(
            "Connected to MongoDB database: {} (collection: {})",
            config.mongodb_database,
            config.mongodb_collection
        );

        Ok(Self { client, recipes })
    }

    fn filter_doc(filter: &ListFilter) -> Document {
        match filter {
            ListFilter::ByUser(user_id) => doc! { "userId": user_id.as_str() },
            ListFilter::ByCuisine(cuisine) => doc! { "cuisine": cuisine.as_str() },
            ListFilter::TitleSearch(search) => {
                doc! { "title": { "$regex": search.as_str(), "$options": "i" } }
            }
            ListFilter::PublicOnly => doc! { "isPublic": true },
        }
    }
}

#[async_trait]
impl RecipeStore for MongoStore {
    async fn insert_recipe(&self, recipe: Document) -> Result<String> {
        let result = self
            .recipes
            .insert_one(recipe, None)
            .await
            .context("Failed to insert recipe")?;

        let id = result
            .inserted_id
            .as_object_id()
            .context("Insert did not return an ObjectId")?;

        tracing::debug!("Inserted recipe with id: {}", id);
        Ok(id.to_hex())
    }

    async fn list_recipes(
        &self,
        filter: &ListFilter,
        order: ListOrder,
        limit: i64,
    ) -> Result<Vec<Document>> {
        let sort = match order {
            ListOrder::LikesDesc => Some(doc! { "likes": -1 }),
            ListOrder::Natural => None,
        };

        let options = FindOptions::builder().sort(sort).limit(limit).build();

        let mut cursor = self
            .recipes
            .find(Self::filter_doc(filter), options)
            .await
            .context("Failed to query recipes")?;

        let mut recipes = Vec::new();
        while let Some(recipe) = cursor
            .try_next()
            .await
            .context("Failed to read recipe cursor")?
        {
            recipes.push(recipe);
        }

        Ok(recipes)
    }

    async fn find_recipe(&self, id: ObjectId) -> Result<Option<Document>> {
        self.recipes
            .find_one(doc! { "_id": id }, None)
            .await
            .context("Failed to query recipe by id")
    }

    async fn update_recipe(
        &self,
        id: ObjectId,
        fields: Document,
    ) -> Result<Option<UpdateSummary>> {
        let result = self
            .recipes
            .update_one(doc! { "_id": id }, doc! { "$set": fields }, None)
            .await
            .context("Failed to update recipe")?;

        if result.matched_count == 0 {
            return Ok(None);
        }

        tracing::debug!("Updated recipe with id: {}", id);
        Ok(Some(UpdateSummary {
            matched_count: result.matched_count,
            modified_count: result.modified_count,
        }))
    }

    async fn like_recipe(&self, id: ObjectId, user_id: &str) -> Result<LikeOutcome> {
        // One conditional update: the increment only matches when the stored
        // userId differs from the caller's, so the ownership check and the
        // counter bump cannot interleave with other writers.
        let filter = doc! { "_id": id, "userId": { "$ne": user_id } };
        let options = FindOneAndUpdateOptions::builder()
            .return_document(ReturnDocument::After)
            .build();

        let updated = self
            .recipes
            .find_one_and_update(filter, doc! { "$inc": { "likes": 1 } }, options)
            .await
            .context("Failed to increment likes")?;

        if let Some(recipe) = updated {
            tracing::debug!("Incremented likes for recipe: {}", id);
            return Ok(LikeOutcome::Liked(likes_value(&recipe)));
        }

        // No match: either the recipe is gone or the caller owns it
        match self.find_recipe(id).await? {
            Some(_) => Ok(LikeOutcome::OwnRecipe),
            None => Ok(LikeOutcome::NotFound),
        }
    }

    async fn delete_recipe(&self, id: ObjectId) -> Result<bool> {
        let result = self
            .recipes
            .delete_one(doc! { "_id": id }, None)
            .await
            .context("Failed to delete recipe")?;

        if result.deleted_count > 0 {
            tracing::debug!("Deleted recipe with id: {}", id);
        }
        Ok(result.deleted_count > 0)
    }

    async fn health_check(&self) -> Result<()> {
        self.client
            .database("admin")
            .run_command(doc! { "ping": 1 }, None)
            .await
            .context("Failed to ping MongoDB")?;
        Ok(())
    }
}
