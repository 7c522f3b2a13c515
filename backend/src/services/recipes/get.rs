use crate::services::error::ApiError;
use crate::store::state::{RecipeStore, StoreError};
use actix_web::{web, HttpResponse};
use recipes_common::model::recipe::RecipeId;

/// `GET /recipes/{id}`: `200 OK` with the recipe, `404 Not Found` if absent.
pub async fn process(
    id: web::Path<RecipeId>,
    store: web::Data<RecipeStore>,
) -> Result<HttpResponse, ApiError> {
    let id = id.into_inner();
    let recipe = store.get(id).ok_or(StoreError::NotFound(id))?;
    Ok(HttpResponse::Ok().json(recipe))
}
