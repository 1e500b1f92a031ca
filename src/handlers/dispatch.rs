use crate::error::ApiError;
use crate::state::AppState;
use axum::{
    extract::State,
    http::{header, Method, Uri},
    response::{IntoResponse, Response},
};

/// Catch-all handler - answers every request from the route table
///
/// Only the method and the URI path are inspected. Query strings, headers
/// and bodies are ignored.
pub async fn dispatch_handler(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
) -> Result<Response, ApiError> {
    let path = uri.path();

    match state.route_table.lookup(&method, path) {
        Some(route) => Ok((
            route.status,
            [(header::CONTENT_TYPE, "application/json")],
            route.body.clone(),
        )
            .into_response()),
        None => Err(ApiError::RouteNotFound {
            method,
            path: path.to_string(),
        }),
    }
}
