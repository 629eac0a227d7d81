//! # DataFlow In-Memory Adapter
//!
//! Process-lifetime storage for sale records implementing the
//! `SaleRepository` port from `dataflow-domain`. Nothing is persisted across
//! restarts.

pub mod infrastructure;

pub use infrastructure::InMemorySaleRepository;
