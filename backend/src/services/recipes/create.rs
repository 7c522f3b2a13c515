use super::API_PATH;
use crate::services::error::ApiError;
use crate::store::state::RecipeStore;
use actix_web::http::header;
use actix_web::{web, HttpResponse};
use log::{error, info};
use recipes_common::requests::CreateOrUpdateRecipeDto;

/// `POST /recipes`: stores the payload under a newly generated id.
///
/// Answers `201 Created` with a `Location` header pointing at the new recipe. An id
/// collision in the store is reported as `500 Internal Server Error`.
pub async fn process(
    payload: web::Json<CreateOrUpdateRecipeDto>,
    store: web::Data<RecipeStore>,
) -> Result<HttpResponse, ApiError> {
    let recipe = store.create(payload.into_inner()).inspect_err(|e| {
        error!("Could not store new recipe: {}", e);
    })?;

    info!("Created recipe {} ({:?})", recipe.id, recipe.title);
    Ok(HttpResponse::Created()
        .insert_header((header::LOCATION, format!("{}/{}", API_PATH, recipe.id)))
        .json(recipe))
}
