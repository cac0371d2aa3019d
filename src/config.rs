use std::time::Duration;

use url::Url;

use crate::constants::{
    ALLORIGINS_PREFIX, CORSPROXY_PREFIX, CORS_ANYWHERE_PREFIX, DEFAULT_ROUTE_TIMEOUT,
};

/// How a route reaches the provider
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteKind {
    /// Call the provider URL as-is
    Direct,
    /// Append the percent-encoded provider URL to `prefix`
    QueryWrapped { prefix: String },
    /// Append the raw provider URL to `prefix` as a path suffix
    PathPrefixed { prefix: String },
}

impl RouteKind {
    /// Direct access followed by the public CORS proxies
    pub fn defaults() -> Vec<RouteKind> {
        vec![
            RouteKind::Direct,
            RouteKind::QueryWrapped {
                prefix: CORSPROXY_PREFIX.to_string(),
            },
            RouteKind::QueryWrapped {
                prefix: ALLORIGINS_PREFIX.to_string(),
            },
            RouteKind::PathPrefixed {
                prefix: CORS_ANYWHERE_PREFIX.to_string(),
            },
        ]
    }
}

/// Settings injected into the fetcher
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    pub service_key: String,
    pub base_url: Url,
    pub route_timeout: Duration,
    pub routes: Vec<RouteKind>,
}

impl ServiceConfig {
    pub fn new(service_key: impl Into<String>, base_url: Url) -> Self {
        Self {
            service_key: service_key.into(),
            base_url,
            route_timeout: DEFAULT_ROUTE_TIMEOUT,
            routes: RouteKind::defaults(),
        }
    }

    pub fn with_route_timeout(mut self, timeout: Duration) -> Self {
        self.route_timeout = timeout;
        self
    }

    pub fn with_routes(mut self, routes: Vec<RouteKind>) -> Self {
        self.routes = routes;
        self
    }
}
