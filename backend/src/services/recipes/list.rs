use crate::store::state::RecipeStore;
use actix_web::{web, HttpResponse, Responder};
use log::debug;

/// `GET /recipes`: every stored recipe, ordered by id.
pub async fn process(store: web::Data<RecipeStore>) -> impl Responder {
    let recipes = store.get_all();
    debug!("Listing {} recipes", recipes.len());
    HttpResponse::Ok().json(recipes)
}
