use std::future::Future;

use anyhow::{Context, Result};
use axum::Router;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::handlers::dispatch_handler;
use crate::state::AppState;

/// Router whose only handler answers from the route table.
pub fn build_app(state: AppState) -> Router {
    Router::new()
        .fallback(dispatch_handler)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

/// Builds the route table for `config`, binds the listener and serves until
/// SIGINT or SIGTERM.
pub async fn start_server(config: Config) -> Result<()> {
    start_server_with_shutdown(config, shutdown_signal()).await
}

pub async fn start_server_with_shutdown<F>(config: Config, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let route_table = config.route_profile.route_table()?;
    tracing::info!(
        "Route table '{}' built with {} routes",
        config.route_profile,
        route_table.len()
    );
    for route in route_table.iter() {
        tracing::info!("  {}", route);
    }

    let addr = config.bind_addr();
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind listener on {}", addr))?;

    serve(listener, AppState::new(route_table), shutdown).await
}

pub async fn serve<F>(listener: TcpListener, state: AppState, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let local_addr = listener.local_addr().context("Failed to read listener address")?;
    tracing::info!("Listening on {}", local_addr);

    axum::serve(listener, build_app(state))
        .with_graceful_shutdown(shutdown)
        .await
        .context("Server error")?;

    tracing::info!("Server shut down");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routes::RouteProfile;
    use axum::{body::Body, http::Request, http::StatusCode};
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpStream;
    use tokio::sync::oneshot;
    use tower::ServiceExt;

    async fn raw_get(addr: std::net::SocketAddr, path: &str) -> String {
        let mut stream = TcpStream::connect(addr).await.unwrap();
        let request = format!(
            "GET {} HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n",
            path
        );
        stream.write_all(request.as_bytes()).await.unwrap();

        let mut response = String::new();
        stream.read_to_string(&mut response).await.unwrap();
        response
    }

    #[tokio::test]
    async fn test_build_app_serves_table() {
        let app = build_app(AppState::new(RouteProfile::Full.route_table().unwrap()));

        let response = app
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/test3")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_serve_over_tcp_and_shut_down() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let state = AppState::new(RouteProfile::Full.route_table().unwrap());
        let (tx, rx) = oneshot::channel::<()>();

        let server = tokio::spawn(serve(listener, state, async {
            let _ = rx.await;
        }));

        let (root, missing) = tokio::join!(raw_get(addr, "/"), raw_get(addr, "/missing"));

        assert!(root.starts_with("HTTP/1.1 200 OK"), "{}", root);
        assert!(root.to_ascii_lowercase().contains("content-type: application/json"));
        assert!(root.ends_with(r#"{"message":"HI from dukpyra i am 4 year old"}"#));
        assert!(missing.starts_with("HTTP/1.1 404 Not Found"), "{}", missing);

        tx.send(()).unwrap();
        server.await.unwrap().unwrap();
    }

    #[tokio::test]
    async fn test_bind_failure_is_an_error() {
        let occupied = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = occupied.local_addr().unwrap().port();

        let config = Config {
            service_port: port,
            service_host: "127.0.0.1".to_string(),
            route_profile: RouteProfile::Minimal,
        };

        let result = start_server_with_shutdown(config, async {}).await;
        assert!(result.is_err());
        let error = result.unwrap_err();
        assert!(error.to_string().contains(&format!("127.0.0.1:{}", port)));
    }
}
