use crate::requests::CreateOrUpdateRecipeDto;
use serde::{Deserialize, Serialize};

/// Identifier assigned by the store when a recipe is created.
pub type RecipeId = u64;

/// A single culinary entry as stored by the backend and returned to clients.
///
/// The `id` is assigned once at creation and never changes. Every other field is
/// replaced wholesale on update; there is no field-level patching.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub id: RecipeId,
    pub title: String,
    /// Kept in the order the client sent them. `None` when the client sent `null`.
    pub ingredients: Option<Vec<Ingredient>>,
    pub description: String,
    pub image_link: Option<String>,
}

/// A component of a recipe. Value type with no identity of its own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ingredient {
    pub name: String,
    pub measure_unit: String,
    pub quantity: i32,
}

impl Recipe {
    /// Builds the stored record for a freshly generated `id`.
    pub fn from_request(id: RecipeId, dto: CreateOrUpdateRecipeDto) -> Self {
        Recipe {
            id,
            title: dto.title,
            ingredients: dto.ingredients,
            description: dto.description,
            image_link: dto.image_link,
        }
    }

    /// Replaces every mutable field with the values of `dto`. The `id` is left as is.
    pub fn apply(&mut self, dto: CreateOrUpdateRecipeDto) {
        self.title = dto.title;
        self.ingredients = dto.ingredients;
        self.description = dto.description;
        self.image_link = dto.image_link;
    }

    /// Case-insensitive substring match on the title.
    pub fn title_contains(&self, query: &str) -> bool {
        self.title.to_lowercase().contains(&query.to_lowercase())
    }

    /// True when at least one ingredient name contains `query`, ignoring case.
    pub fn has_ingredient_like(&self, query: &str) -> bool {
        let query = query.to_lowercase();
        self.ingredients
            .iter()
            .flatten()
            .any(|ingredient| ingredient.name.to_lowercase().contains(&query))
    }
}
