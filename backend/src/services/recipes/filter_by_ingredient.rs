use super::matches::Matches;
use crate::store::state::RecipeStore;
use actix_web::web;
use log::debug;
use recipes_common::requests::IngredientFilter;

/// `GET /recipes/filter-by-ingredient?ingredient=`
pub async fn process(
    query: web::Query<IngredientFilter>,
    store: web::Data<RecipeStore>,
) -> Matches {
    let found = store.filter_by_ingredient(&query.ingredient);
    debug!("{} recipes use an ingredient like {:?}", found.len(), query.ingredient);
    Matches::from(found)
}
