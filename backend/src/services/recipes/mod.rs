//! # Recipe Service Module
//!
//! HTTP endpoints for creating, listing, filtering, updating and deleting recipes.
//! Every handler works on the shared `RecipeStore` injected as `web::Data` in `main.rs`.
//!
//! ## Sub-modules:
//! - `list`, `get`: read the whole collection or a single recipe.
//! - `create`, `update`, `delete`: mutate the store.
//! - `filter_by_title`, `filter_by_ingredient`: case-insensitive substring searches,
//!   answered through the `matches::Matches` responder.

mod create;
mod delete;
mod filter_by_ingredient;
mod filter_by_title;
mod get;
mod list;
mod matches;
mod update;

use actix_web::web::{delete, get, post, put, scope};
use actix_web::Scope;

/// The base path for all recipe endpoints.
const API_PATH: &str = "/recipes";

/// Configures and returns the Actix `Scope` for all recipe routes.
///
/// # Registered Routes:
///
/// *   **`GET /recipes`**: all recipes, `200 OK`.
/// *   **`POST /recipes`**: creates a recipe, `201 Created` with a `Location` header.
/// *   **`GET /recipes/filter-by-title?title=`**: `200 OK` with matches, `204 No Content`
///     when nothing matches.
/// *   **`GET /recipes/filter-by-ingredient?ingredient=`**: same conventions as above.
/// *   **`GET /recipes/{id}`**: `200 OK` or `404 Not Found`.
/// *   **`PUT /recipes/{id}`**: replaces the recipe, `200 OK` or `404 Not Found`.
/// *   **`DELETE /recipes/{id}`**: `204 No Content` or `404 Not Found`.
///
/// The filter routes are registered ahead of `/{id}` so they are never taken for an id.
pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("", get().to(list::process))
        .route("", post().to(create::process))
        .route("/filter-by-title", get().to(filter_by_title::process))
        .route("/filter-by-ingredient", get().to(filter_by_ingredient::process))
        .route("/{id}", get().to(get::process))
        .route("/{id}", put().to(update::process))
        .route("/{id}", delete().to(delete::process))
}
