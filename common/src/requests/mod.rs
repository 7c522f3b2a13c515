use crate::model::recipe::Ingredient;
use serde::{Deserialize, Serialize};

/// Request body for `POST /recipes` and `PUT /recipes/{id}`.
///
/// `ingredients` and `imageLink` may be `null` or left out entirely.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrUpdateRecipeDto {
    pub title: String,
    pub ingredients: Option<Vec<Ingredient>>,
    pub description: String,
    pub image_link: Option<String>,
}

/// Query string of `GET /recipes/filter-by-title`.
#[derive(Debug, Deserialize)]
pub struct TitleFilter {
    pub title: String,
}

/// Query string of `GET /recipes/filter-by-ingredient`.
#[derive(Debug, Deserialize)]
pub struct IngredientFilter {
    pub ingredient: String,
}
