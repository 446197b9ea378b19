//! Welcome endpoint

use axum::{routing::get, Json, Router};
use serde::Serialize;

pub const WELCOME_MESSAGE: &str =
    "Welcome to the GraphQL API. Access the GraphQL playground at /graphql";

#[derive(Serialize)]
pub struct WelcomeResponse {
    pub message: &'static str,
}

/// GET /
async fn welcome() -> Json<WelcomeResponse> {
    Json(WelcomeResponse {
        message: WELCOME_MESSAGE,
    })
}

pub fn router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new().route("/", get(welcome))
}
