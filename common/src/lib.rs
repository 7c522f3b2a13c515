//! Data model shared between the recipes backend and its clients.

pub mod model;
pub mod requests;
