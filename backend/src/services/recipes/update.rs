use crate::services::error::ApiError;
use crate::store::state::{RecipeStore, StoreError};
use actix_web::{web, HttpResponse};
use log::info;
use recipes_common::model::recipe::RecipeId;
use recipes_common::requests::CreateOrUpdateRecipeDto;

/// `PUT /recipes/{id}`: replaces title, ingredients, description and image link.
///
/// A `null` ingredient list is accepted and clears the ingredients. Unknown ids answer
/// `404 Not Found` and nothing is created.
pub async fn process(
    id: web::Path<RecipeId>,
    payload: web::Json<CreateOrUpdateRecipeDto>,
    store: web::Data<RecipeStore>,
) -> Result<HttpResponse, ApiError> {
    let id = id.into_inner();
    let recipe = store
        .update(id, payload.into_inner())
        .ok_or(StoreError::NotFound(id))?;

    info!("Updated recipe {}", id);
    Ok(HttpResponse::Ok().json(recipe))
}
