// Route path constants - single source of truth for all API paths

pub const HEALTH: &str = "/health";
pub const RECIPES: &str = "/addRecipe";
pub const RECIPE_ITEM: &str = "/addRecipe/{id}";
pub const RECIPE_LIKE: &str = "/addRecipe/{id}/like";
