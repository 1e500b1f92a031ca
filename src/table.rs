use std::collections::HashSet;
use std::fmt;

use anyhow::{bail, Context, Result};
use axum::body::Bytes;
use axum::http::{Method, StatusCode};
use serde::Serialize;

/// A single static route: method + exact path mapped to a fixed JSON response
#[derive(Debug, Clone)]
pub struct Route {
    pub method: Method,
    pub path: String,
    pub status: StatusCode,
    /// Pre-serialized JSON body
    pub body: Bytes,
}

impl Route {
    /// GET route answering 200 with `body` serialized as JSON.
    pub fn get<T: Serialize>(path: &str, body: &T) -> Result<Self> {
        let body = serde_json::to_vec(body)
            .with_context(|| format!("Failed to serialize response body for {}", path))?;

        Ok(Route {
            method: Method::GET,
            path: path.to_string(),
            status: StatusCode::OK,
            body: Bytes::from(body),
        })
    }
}

/// One-line listing used in the startup log, e.g. `GET /test -> 200 {"message":"test"}`
impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} -> {} {}",
            self.method,
            self.path,
            self.status.as_u16(),
            String::from_utf8_lossy(&self.body)
        )
    }
}

/// Immutable set of routes known at startup
///
/// Lookups use exact, case-sensitive equality on both method and path. No
/// normalization happens, so `/health/` and `/Health` are distinct from
/// `/health`.
#[derive(Debug)]
pub struct RouteTable {
    routes: Vec<Route>,
}

impl RouteTable {
    /// Fails if the list is empty or two routes share the same method and path.
    pub fn new(routes: Vec<Route>) -> Result<Self> {
        let table = RouteTable { routes };
        if table.is_empty() {
            bail!("Route table must contain at least one route");
        }

        let mut seen = HashSet::with_capacity(table.len());
        for route in table.iter() {
            if !seen.insert((&route.method, route.path.as_str())) {
                bail!("Duplicate route: {} {}", route.method, route.path);
            }
        }

        Ok(table)
    }

    pub fn lookup(&self, method: &Method, path: &str) -> Option<&Route> {
        self.routes
            .iter()
            .find(|route| route.method == *method && route.path == path)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Route> {
        self.routes.iter()
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}
