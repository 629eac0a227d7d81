//! Sale routes

use axum::{routing::post, Router};
use dataflow_domain::sale::SalesServicePort;

use crate::{
    handlers::sale::{create_sale_handler, list_sales_handler},
    AppState,
};

/// Create sale routes
pub fn routes<S: SalesServicePort + 'static>() -> Router<AppState<S>> {
    Router::new().route(
        "/data",
        post(create_sale_handler::<S>).get(list_sales_handler::<S>),
    )
}
