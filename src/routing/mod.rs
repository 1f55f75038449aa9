//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming Request (method, path)
//!     → router.rs (route lookup)
//!     → Return: matched Route or NoMatch
//!
//! Route Table (at startup):
//!     Variant
//!     → fixed list of (method, path, handler)
//!     → Freeze as immutable RouteTable
//! ```
//!
//! # Design Decisions
//! - Routes built at startup, immutable at runtime
//! - Exact matching only; the query string never takes part
//! - Deterministic: same input always matches same route

pub mod router;
pub mod variant;

pub use router::{Route, RouteTable};
pub use variant::Variant;
