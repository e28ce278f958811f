//! OpenDesk Ticket Assignment API
//!
//! HTTP surface over the `desk-assign` engine: one assignment endpoint, a
//! health check, and Swagger UI docs at `/docs`.

#![warn(missing_docs)]

pub mod config;
pub mod models;
pub mod routes;

use axum::routing::{get, post};
use axum::Router;
use desk_assign::DispatchService;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub use models::*;

/// Shared API state
pub struct ApiState {
    /// Assignment service guarding the workload store
    pub service: DispatchService,
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "OpenDesk Ticket Assignment API",
        version = "0.1.0",
        description = "Assigns support tickets to agents by urgency, skill match, workload, and experience",
        license(name = "Apache-2.0")
    ),
    paths(
        routes::health::health_check,
        routes::assignments::create_assignments,
    ),
    components(
        schemas(
            AssignmentRequest, AgentPayload, TicketPayload,
            AssignmentResponse, AssignmentDto,
            ApiError, ErrorBody
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "assignments", description = "Ticket assignment")
    )
)]
pub struct ApiDoc;

/// Build the API router
pub fn build_router(state: Arc<ApiState>) -> Router {
    Router::new()
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .route("/health", get(routes::health::health_check))
        .route(
            "/v1/ticket-assignment",
            post(routes::assignments::create_assignments),
        )
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
