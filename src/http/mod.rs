//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware)
//!     → request.rs (assign request ID)
//!     → routing layer looks up (method, path)
//!     → handlers.rs (produce response text)
//!     → response.rs (404 and body errors)
//!     → Send to client
//! ```

pub mod handlers;
pub mod request;
pub mod response;
pub mod server;

pub use handlers::Handler;
pub use request::{RequestIdExt, X_REQUEST_ID};
pub use server::HttpServer;
