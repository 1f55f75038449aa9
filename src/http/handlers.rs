//! Request handlers.
//!
//! Every route resolves to one of a closed set of handlers. A handler turns
//! the request body (when it needs one) into the response text.

/// Log target for access events, so they can be filtered apart from server logs.
pub const ACCESS_LOG_TARGET: &str = "hello_routes::access";

/// Line written for every greeting request.
pub const ACCESS_MESSAGE: &str = "Access to /";

/// Prefix of every echo response.
pub const ECHO_PREFIX: &str = "body is ";

/// What a matched route does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Handler {
    /// Answer with fixed text.
    Text(&'static str),
    /// Answer with `body is ` followed by the request body.
    EchoBody,
    /// Log `message` at info level, then answer with `body`.
    LoggedText {
        message: &'static str,
        body: &'static str,
    },
}

impl Handler {
    /// Whether the dispatcher must buffer the request body before calling
    /// [`Handler::respond`].
    pub fn needs_body(&self) -> bool {
        matches!(self, Handler::EchoBody)
    }

    /// Produce the response text.
    ///
    /// `body` is empty for handlers that do not need it. Bytes that are not
    /// valid UTF-8 are replaced with U+FFFD.
    pub fn respond(&self, path: &str, body: &[u8]) -> String {
        match self {
            Handler::Text(text) => (*text).to_string(),
            Handler::EchoBody => {
                let body = String::from_utf8_lossy(body);
                let mut text = String::with_capacity(ECHO_PREFIX.len() + body.len());
                text.push_str(ECHO_PREFIX);
                text.push_str(&body);
                text
            }
            Handler::LoggedText { message, body } => {
                tracing::info!(target: ACCESS_LOG_TARGET, path = %path, "{}", message);
                (*body).to_string()
            }
        }
    }
}
