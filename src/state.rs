use crate::table::RouteTable;
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub route_table: Arc<RouteTable>,
}

impl AppState {
    pub fn new(route_table: RouteTable) -> Self {
        AppState {
            route_table: Arc::new(route_table),
        }
    }
}
