//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router whose only entry is the dispatcher
//! - Wire up middleware (tracing, limits, timeout, request ID)
//! - Bind server to listener
//! - Dispatch requests through the route table

use axum::{
    body::{Body, Bytes},
    extract::{DefaultBodyLimit, FromRequest, State},
    http::Request,
    response::{IntoResponse, Response},
    Router,
};
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{
    limit::RequestBodyLimitLayer,
    timeout::TimeoutLayer,
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use crate::config::DemoConfig;
use crate::http::request::{propagate_request_id_layer, set_request_id_layer, RequestIdExt};
use crate::http::response::{not_found, DispatchError};
use crate::lifecycle::Shutdown;
use crate::routing::RouteTable;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub routes: Arc<RouteTable>,
}

/// HTTP server for the demo routes.
pub struct HttpServer {
    router: Router,
    routes: Arc<RouteTable>,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: DemoConfig) -> Self {
        let routes = Arc::new(RouteTable::for_variant(config.app.variant));
        let state = AppState {
            routes: routes.clone(),
        };

        let router = Self::build_router(&config, state);
        Self { router, routes }
    }

    /// Build the Axum router with all middleware layers.
    #[allow(deprecated)]
    fn build_router(config: &DemoConfig, state: AppState) -> Router {
        Router::new()
            .fallback(dispatch)
            .with_state(state)
            .layer(DefaultBodyLimit::disable())
            .layer(RequestBodyLimitLayer::new(config.app.max_body_bytes))
            .layer(TimeoutLayer::new(Duration::from_secs(config.timeouts.request_secs)))
            .layer(propagate_request_id_layer())
            .layer(
                TraceLayer::new_for_http()
                    .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                    .on_response(DefaultOnResponse::new().level(Level::INFO)),
            )
            .layer(set_request_id_layer())
    }

    /// The fully layered router, for driving requests without a socket.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    pub fn routes(&self) -> &RouteTable {
        &self.routes
    }

    /// Run the server, accepting connections on the given listener.
    ///
    /// Returns once `shutdown` fires and in-flight requests have finished.
    pub async fn run(
        self,
        listener: TcpListener,
        shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            variant = %self.routes.variant(),
            routes = self.routes.routes().len(),
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                Shutdown::wait(shutdown).await;
                tracing::info!("Shutdown requested");
            })
            .await
    }
}

/// Match the request against the route table and run the handler.
async fn dispatch(State(state): State<AppState>, request: Request<Body>) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();

    let Some(route) = state.routes.match_request(&method, &path) else {
        tracing::warn!(
            request_id = %request.request_id(),
            method = %method,
            path = %path,
            "No route matched"
        );
        return not_found();
    };

    tracing::debug!(
        request_id = %request.request_id(),
        method = %method,
        path = %path,
        "Dispatching request"
    );

    let body = if route.handler.needs_body() {
        match Bytes::from_request(request, &state).await {
            Ok(bytes) => bytes,
            Err(rejection) => {
                let error = DispatchError::from(rejection);
                tracing::warn!(method = %method, path = %path, error = %error, "Request rejected");
                return error.into_response();
            }
        }
    } else {
        Bytes::new()
    };

    route.handler.respond(&path, &body).into_response()
}
