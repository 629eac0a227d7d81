//! # DataFlow Domain Layer
//!
//! This crate contains the business logic and domain models for the DataFlow
//! sales service. It follows hexagonal architecture principles:
//!
//! - **Entities**: Core domain models (Sale, NewSale, DateRange)
//! - **Ports**: Trait definitions for external dependencies (SaleRepository)
//! - **Services**: Business logic orchestration (SalesService)
//!
//! ## Architecture
//!
//! This layer has NO dependencies on infrastructure concerns (HTTP, storage
//! engines, etc.). Storage is expressed as a trait (port) implemented by
//! adapter crates such as `dataflow-memory`.
//!
//! ## Example
//!
//! ```rust
//! use dataflow_domain::sale::{DateRange, SalesService};
//! use dataflow_domain::ports::SaleRepository;
//!
//! async fn example<R: SaleRepository>(service: SalesService<R>) {
//!     let total = service.calculate("store1", DateRange::unbounded()).await.unwrap();
//!     println!("Total sales: {}", total);
//! }
//! ```

pub mod sale;
pub mod storage;

pub use storage::ports;

// Re-export commonly used types
pub use ports::SaleRepository;
pub use sale::{
    DateRange, NewSale, Sale, SaleError, SalesService, SalesServicePort, ValidationError,
};
