use actix_web::body::BoxBody;
use actix_web::{HttpRequest, HttpResponse, Responder};
use recipes_common::model::recipe::Recipe;

/// Result of a filter query.
///
/// An empty result is not an error: it is answered with `204 No Content` instead of an
/// empty list.
#[derive(Debug, PartialEq)]
pub enum Matches {
    Found(Vec<Recipe>),
    Empty,
}

impl From<Vec<Recipe>> for Matches {
    fn from(recipes: Vec<Recipe>) -> Self {
        if recipes.is_empty() {
            Matches::Empty
        } else {
            Matches::Found(recipes)
        }
    }
}

impl Responder for Matches {
    type Body = BoxBody;

    fn respond_to(self, _req: &HttpRequest) -> HttpResponse<Self::Body> {
        match self {
            Matches::Found(recipes) => HttpResponse::Ok().json(recipes),
            Matches::Empty => HttpResponse::NoContent().finish(),
        }
    }
}
