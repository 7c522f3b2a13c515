//! In-memory storage for recipes.
//!
//! - `state`: `RecipeStore`, the process-wide concurrent map plus its id generator.
//!   One instance is created in `main.rs` and handed to every worker as `web::Data`.

pub mod state;
