use crate::services::error::ApiError;
use crate::store::state::{RecipeStore, StoreError};
use actix_web::{web, HttpResponse};
use log::info;
use recipes_common::model::recipe::RecipeId;

/// `DELETE /recipes/{id}`: `204 No Content` once removed, `404 Not Found` if absent.
pub async fn process(
    id: web::Path<RecipeId>,
    store: web::Data<RecipeStore>,
) -> Result<HttpResponse, ApiError> {
    let id = id.into_inner();
    if !store.remove(id) {
        return Err(StoreError::NotFound(id).into());
    }

    info!("Deleted recipe {}, {} left", id, store.len());
    Ok(HttpResponse::NoContent().finish())
}
