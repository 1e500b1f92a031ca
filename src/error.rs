use axum::{
    http::{Method, StatusCode},
    response::{IntoResponse, Response},
};

/// Custom error type for request handling
///
/// The only per-request failure is a miss in the route table. It maps to a
/// bare 404 with an empty body.
#[derive(Debug)]
pub enum ApiError {
    /// No route matches the request method and path
    RouteNotFound { method: Method, path: String },
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::RouteNotFound { method, path } => {
                tracing::debug!("No route for {} {}", method, path);
                StatusCode::NOT_FOUND.into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_route_not_found_is_empty_404() {
        let response = ApiError::RouteNotFound {
            method: Method::GET,
            path: "/missing".to_string(),
        }
        .into_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert!(body.is_empty());
    }
}
