// Route path constants - single source of truth for all served paths

use std::fmt;
use std::str::FromStr;

use anyhow::Result;

use crate::models::{HealthResponse, MessageResponse};
use crate::table::{Route, RouteTable};

pub const ROOT: &str = "/";
pub const HEALTH: &str = "/health";
pub const TEST: &str = "/test";
pub const TEST2: &str = "/test2";
pub const TEST3: &str = "/test3";

/// Which literal route list the service is started with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RouteProfile {
    /// Greeting, health and the three test echoes
    #[default]
    Full,
    /// Greeting and health only
    Minimal,
}

impl RouteProfile {
    pub fn as_str(&self) -> &'static str {
        match self {
            RouteProfile::Full => "full",
            RouteProfile::Minimal => "minimal",
        }
    }

    /// Builds the route table for this profile, rejecting duplicate entries.
    pub fn route_table(&self) -> Result<RouteTable> {
        let routes = match self {
            RouteProfile::Full => vec![
                Route::get(ROOT, &MessageResponse::new("HI from dukpyra i am 4 year old"))?,
                Route::get(HEALTH, &HealthResponse::ok())?,
                Route::get(TEST, &MessageResponse::new("test"))?,
                Route::get(TEST2, &MessageResponse::new("test"))?,
                Route::get(TEST3, &MessageResponse::new("test"))?,
            ],
            RouteProfile::Minimal => vec![
                Route::get(ROOT, &MessageResponse::new("HI from dukpyra"))?,
                Route::get(HEALTH, &HealthResponse::ok())?,
            ],
        };

        RouteTable::new(routes)
    }
}

impl fmt::Display for RouteProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unrecognized profile name
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
#[error("unknown route profile '{0}'")]
pub struct UnknownProfile(pub String);

impl FromStr for RouteProfile {
    type Err = UnknownProfile;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "full" => Ok(RouteProfile::Full),
            "minimal" => Ok(RouteProfile::Minimal),
            _ => Err(UnknownProfile(s.to_string())),
        }
    }
}
