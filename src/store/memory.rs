use anyhow::Result;
use async_trait::async_trait;
use mongodb::bson::{Document, oid::ObjectId};
use std::sync::Mutex;

use crate::store::{LikeOutcome, ListFilter, ListOrder, RecipeStore, UpdateSummary, likes_value};

/// In-memory recipe store used by handler tests in place of a live database.
///
/// Documents are kept in insertion order so the unsorted list path matches
/// the natural order a collection scan returns.
#[derive(Default)]
pub struct MemoryStore {
    recipes: Mutex<Vec<Document>>,
}

fn matches(filter: &ListFilter, recipe: &Document) -> bool {
    match filter {
        ListFilter::ByUser(user_id) => recipe.get_str("userId") == Ok(user_id.as_str()),
        ListFilter::ByCuisine(cuisine) => recipe.get_str("cuisine") == Ok(cuisine.as_str()),
        ListFilter::TitleSearch(search) => recipe
            .get_str("title")
            .map(|title| title.to_lowercase().contains(&search.to_lowercase()))
            .unwrap_or(false),
        ListFilter::PublicOnly => recipe.get_bool("isPublic").unwrap_or(false),
    }
}

fn id_of(recipe: &Document) -> Option<ObjectId> {
    recipe.get_object_id("_id").ok()
}

#[async_trait]
impl RecipeStore for MemoryStore {
    async fn insert_recipe(&self, mut recipe: Document) -> Result<String> {
        let id = ObjectId::new();
        recipe.insert("_id", id);
        self.recipes.lock().unwrap().push(recipe);
        Ok(id.to_hex())
    }

    async fn list_recipes(
        &self,
        filter: &ListFilter,
        order: ListOrder,
        limit: i64,
    ) -> Result<Vec<Document>> {
        let recipes = self.recipes.lock().unwrap();
        let mut matched: Vec<Document> = recipes
            .iter()
            .filter(|recipe| matches(filter, recipe))
            .cloned()
            .collect();

        if order == ListOrder::LikesDesc {
            matched.sort_by_key(|recipe| std::cmp::Reverse(likes_value(recipe)));
        }

        matched.truncate(limit.max(0) as usize);
        Ok(matched)
    }

    async fn find_recipe(&self, id: ObjectId) -> Result<Option<Document>> {
        let recipes = self.recipes.lock().unwrap();
        Ok(recipes.iter().find(|recipe| id_of(recipe) == Some(id)).cloned())
    }

    async fn update_recipe(
        &self,
        id: ObjectId,
        fields: Document,
    ) -> Result<Option<UpdateSummary>> {
        let mut recipes = self.recipes.lock().unwrap();
        let Some(recipe) = recipes.iter_mut().find(|recipe| id_of(recipe) == Some(id)) else {
            return Ok(None);
        };

        let unchanged = fields
            .iter()
            .all(|(key, value)| recipe.get(key) == Some(value));
        recipe.extend(fields);

        Ok(Some(UpdateSummary {
            matched_count: 1,
            modified_count: if unchanged { 0 } else { 1 },
        }))
    }

    async fn like_recipe(&self, id: ObjectId, user_id: &str) -> Result<LikeOutcome> {
        let mut recipes = self.recipes.lock().unwrap();
        let Some(recipe) = recipes.iter_mut().find(|recipe| id_of(recipe) == Some(id)) else {
            return Ok(LikeOutcome::NotFound);
        };

        if recipe.get_str("userId") == Ok(user_id) {
            return Ok(LikeOutcome::OwnRecipe);
        }

        let likes = likes_value(recipe) + 1;
        recipe.insert("likes", likes);
        Ok(LikeOutcome::Liked(likes))
    }

    async fn delete_recipe(&self, id: ObjectId) -> Result<bool> {
        let mut recipes = self.recipes.lock().unwrap();
        let before = recipes.len();
        recipes.retain(|recipe| id_of(recipe) != Some(id));
        Ok(recipes.len() < before)
    }

    async fn health_check(&self) -> Result<()> {
        Ok(())
    }
}
