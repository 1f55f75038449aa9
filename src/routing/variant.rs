//! Route profiles.

use serde::{Deserialize, Serialize};

/// One of the mutually exclusive route profiles the server can run.
///
/// Exactly one variant is active per process. It is chosen at startup and
/// decides which route table is built.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, Serialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// `GET /` → `get`, `POST /` → `post`.
    #[default]
    Plain,
    /// `GET /` → `get`, `POST /` → `body is <body>`.
    Echo,
    /// `GET /` logs `Access to /` and answers `Hello world!`.
    Greeting,
}

impl Variant {
    pub fn as_str(self) -> &'static str {
        match self {
            Variant::Plain => "plain",
            Variant::Echo => "echo",
            Variant::Greeting => "greeting",
        }
    }
}

impl std::fmt::Display for Variant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
