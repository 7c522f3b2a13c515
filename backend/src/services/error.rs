//! Maps store failures and malformed request bodies to HTTP responses.

use crate::store::state::StoreError;
use actix_web::error::{InternalError, JsonPayloadError};
use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse, ResponseError};
use log::warn;
use serde_json::json;
use thiserror::Error;

/// Error returned by the recipe handlers.
///
/// - `StoreError::NotFound` -> `404 Not Found`
/// - `StoreError::Conflict`, `StoreError::IdsExhausted` -> `500 Internal Server Error`
///
/// The body is always `{ "error": "<message>" }`.
#[derive(Debug, Error)]
#[error(transparent)]
pub struct ApiError(#[from] StoreError);

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self.0 {
            StoreError::NotFound(_) => StatusCode::NOT_FOUND,
            StoreError::Conflict(_) | StoreError::IdsExhausted => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(json!({ "error": self.to_string() }))
    }
}

/// Error handler for `web::JsonConfig`.
///
/// Keeps actix's status for each payload error (`400` for unparsable bodies, `413` for
/// bodies over the configured limit) and answers with the usual `{ "error": ... }` body.
pub fn json_error_handler(err: JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    warn!("Rejected body for {} {}: {}", req.method(), req.path(), err);
    let response =
        HttpResponse::build(err.status_code()).json(json!({ "error": err.to_string() }));
    InternalError::from_response(err, response).into()
}
