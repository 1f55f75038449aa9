//! Minimal HTTP demo server library.
//!
//! A fixed table of routes on `/`, selected by [`routing::Variant`], served
//! through axum.

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod routing;

pub use config::DemoConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use routing::Variant;
