use super::matches::Matches;
use crate::store::state::RecipeStore;
use actix_web::web;
use log::debug;
use recipes_common::requests::TitleFilter;

/// `GET /recipes/filter-by-title?title=`
pub async fn process(query: web::Query<TitleFilter>, store: web::Data<RecipeStore>) -> Matches {
    let found = store.filter_by_title(&query.title);
    debug!("{} recipes match title {:?}", found.len(), query.title);
    Matches::from(found)
}
