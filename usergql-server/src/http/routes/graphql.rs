//! GraphQL endpoint
//!
//! - `POST /graphql` executes a query or mutation from the JSON body
//! - `GET /graphql?query=...` executes the request in the query string
//! - `GET /graphql` without a `query` parameter serves the GraphiQL playground

use async_graphql::http::{parse_query_string, GraphiQLSource};
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::extract::{RawQuery, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use axum::Router;

use crate::state::AppState;

pub const GRAPHQL_PATH: &str = "/graphql";

/// POST /graphql
async fn execute(State(state): State<AppState>, request: GraphQLRequest) -> GraphQLResponse {
    state.schema().execute(request.into_inner()).await.into()
}

fn has_query_param(raw: &str) -> bool {
    raw.split('&')
        .any(|pair| pair.split('=').next() == Some("query"))
}

/// GET /graphql
async fn execute_or_playground(State(state): State<AppState>, RawQuery(raw): RawQuery) -> Response {
    let Some(raw) = raw.filter(|raw| has_query_param(raw)) else {
        return Html(GraphiQLSource::build().endpoint(GRAPHQL_PATH).finish()).into_response();
    };

    match parse_query_string(&raw) {
        Ok(request) => GraphQLResponse::from(state.schema().execute(request).await).into_response(),
        Err(err) => {
            tracing::debug!(error = %err, "malformed GET request");
            (StatusCode::BAD_REQUEST, err.to_string()).into_response()
        }
    }
}

pub fn router() -> Router<AppState> {
    Router::new().route(GRAPHQL_PATH, get(execute_or_playground).post(execute))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_param_detection() {
        assert!(has_query_param("query=%7Bget_users%7Bid%7D%7D"));
        assert!(has_query_param("operationName=Q&query={get_users{id}}"));
        assert!(!has_query_param("querystring=1"));
        assert!(!has_query_param(""));
    }
}
