//! DataFlow API
//!
//! HTTP interface for recording sales and computing total sales per store.
//! The binary wires an in-memory repository into the service; the router is
//! exposed here so tests can serve it against any `SalesServicePort`.

pub mod config;
pub mod dto;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod logging;
pub mod routes;

use std::sync::Arc;

use dataflow_domain::sale::SalesServicePort;

pub use config::ApiConfig;
pub use routes::create_router;

/// Application state shared across handlers
pub struct AppState<S> {
    pub sales_service: Arc<S>,
}

impl<S: SalesServicePort> AppState<S> {
    pub fn new(sales_service: S) -> Self {
        Self {
            sales_service: Arc::new(sales_service),
        }
    }
}

impl<S> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            sales_service: Arc::clone(&self.sales_service),
        }
    }
}
