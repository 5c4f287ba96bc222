//! HTTP layer for the chart catalog
//!
//! This crate provides the REST surface over the catalog services using
//! Axum. It includes request handlers, the response resource model, error
//! handling, and router construction.
//!
//! # Architecture
//!
//! - **Handlers**: request handlers for catalog, asset, and probe routes
//! - **Resources**: pure domain-to-wire transformations
//! - **Routes**: route definitions and router configuration
//! - **Error Handling**: conversion of service errors to HTTP responses
//!
//! # Example
//!
//! ```rust,no_run
//! use chartsvc_api::build_api_server;
//! use chartsvc_service::ServiceRegistry;
//!
//! # fn example(services: ServiceRegistry) {
//! let app = build_api_server(services);
//! # }
//! ```

pub mod error;
pub mod handlers;
pub mod resources;
pub mod responses;
pub mod routes;

// Re-export main types for convenience
pub use error::{ApiError, ApiResult, ErrorResponse};
pub use handlers::{AppState, ListParams};
pub use resources::{
    chart_attributes, chart_resource, chart_version_attributes, chart_version_resource,
    Attributes, ChartAttributes, ChartVersionAttributes, Relationship, Resource, SelfLink,
    PATH_PREFIX,
};
pub use responses::{ok, paginated, ApiResponse, Meta};
pub use routes::build_router;

use axum::Router;
use chartsvc_service::ServiceRegistry;
use tower_http::{
    compression::CompressionLayer,
    cors::CorsLayer,
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
    LatencyUnit,
};
use tracing::Level;

/// Build a complete API server with middleware
///
/// Convenience function that builds the router with tracing, compression,
/// CORS, and request-id propagation applied.
pub fn build_api_server(services: ServiceRegistry) -> Router {
    let state = AppState::new(services);
    let router = build_router(state);

    router
        .layer(CorsLayer::permissive())
        .layer(CompressionLayer::new())
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(
                    DefaultOnResponse::new()
                        .latency_unit(LatencyUnit::Millis)
                        .level(Level::INFO),
                ),
        )
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(PropagateRequestIdLayer::x_request_id())
}
