//! API routes

pub mod calculate;
pub mod sale;

use axum::{extract::DefaultBodyLimit, Router};
use dataflow_domain::sale::SalesServicePort;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    dto::{
        calculate::{CalculateRequest, CalculateResponse},
        common::{ErrorResponse, StatusResponse},
        sale::{CreateSaleRequest, SaleResponse},
    },
    handlers, AppState,
};

/// OpenAPI documentation structure
#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::sale::create_sale_handler,
        handlers::sale::list_sales_handler,
        handlers::calculate::calculate_handler,
        health_handler
    ),
    components(
        schemas(
            CreateSaleRequest,
            SaleResponse,
            CalculateRequest,
            CalculateResponse,
            StatusResponse,
            ErrorResponse
        )
    ),
    tags(
        (name = "sales", description = "Sale recording endpoints"),
        (name = "calculate", description = "Sales aggregation endpoints"),
        (name = "health", description = "Health check endpoints")
    ),
    info(
        title = "DataFlow API",
        version = "0.1.0",
        description = "HTTP service for recording sales and computing total sales per store",
        contact(
            name = "DataFlow Team"
        )
    )
)]
pub struct ApiDoc;

/// Create the main application router
///
/// Request bodies larger than `max_body_bytes` are rejected with 400.
pub fn create_router<S: SalesServicePort + 'static>(
    state: AppState<S>,
    max_body_bytes: usize,
) -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .merge(sale::routes::<S>())
        .merge(calculate::routes::<S>())
        .route("/health", axum::routing::get(health_handler))
        .layer(DefaultBodyLimit::max(max_body_bytes))
        .with_state(state)
}

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is healthy", body = String)
    ),
    tag = "health"
)]
async fn health_handler() -> &'static str {
    "OK"
}
