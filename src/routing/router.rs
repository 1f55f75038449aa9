//! Route lookup and dispatch.
//!
//! # Responsibilities
//! - Build the fixed route table for a variant
//! - Look up matching route for request
//! - Return matched route or explicit no-match
//!
//! # Design Decisions
//! - Immutable after construction (thread-safe without locks)
//! - O(n) scan; a table holds at most two routes
//! - Method and path must both match; a known path with another method is a miss

use axum::http::Method;

use crate::http::handlers::{Handler, ACCESS_MESSAGE};
use crate::routing::Variant;

/// A (method, path) pair bound to a handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    pub method: Method,
    pub path: &'static str,
    pub handler: Handler,
}

impl Route {
    pub fn new(method: Method, path: &'static str, handler: Handler) -> Self {
        Self {
            method,
            path,
            handler,
        }
    }

    /// Exact, case-sensitive match on both method and path.
    pub fn matches(&self, method: &Method, path: &str) -> bool {
        self.method == *method && self.path == path
    }
}

/// The route table for one variant.
#[derive(Debug, Clone)]
pub struct RouteTable {
    variant: Variant,
    routes: Vec<Route>,
}

impl RouteTable {
    /// Build the table served by `variant`.
    pub fn for_variant(variant: Variant) -> Self {
        let routes = match variant {
            Variant::Plain => vec![
                Route::new(Method::GET, "/", Handler::Text("get")),
                Route::new(Method::POST, "/", Handler::Text("post")),
            ],
            Variant::Echo => vec![
                Route::new(Method::GET, "/", Handler::Text("get")),
                Route::new(Method::POST, "/", Handler::EchoBody),
            ],
            Variant::Greeting => vec![Route::new(
                Method::GET,
                "/",
                Handler::LoggedText {
                    message: ACCESS_MESSAGE,
                    body: "Hello world!",
                },
            )],
        };

        Self { variant, routes }
    }

    /// Find the route registered for `method` and `path`.
    pub fn match_request(&self, method: &Method, path: &str) -> Option<&Route> {
        self.routes.iter().find(|route| route.matches(method, path))
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }
}
