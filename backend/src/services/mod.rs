pub mod error;
pub mod recipes;

use actix_web::web;

/// JSON extractor settings shared by every route: body size limit and `400` on bad input.
pub fn json_config(limit: usize) -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(limit)
        .error_handler(error::json_error_handler)
}
