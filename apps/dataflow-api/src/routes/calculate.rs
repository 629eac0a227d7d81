//! Calculation routes

use axum::{routing::post, Router};
use dataflow_domain::sale::SalesServicePort;

use crate::{handlers::calculate::calculate_handler, AppState};

/// Create calculation routes
pub fn routes<S: SalesServicePort + 'static>() -> Router<AppState<S>> {
    Router::new().route("/calculate", post(calculate_handler::<S>))
}
