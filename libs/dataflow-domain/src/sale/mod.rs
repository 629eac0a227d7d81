//! Sale domain module
//!
//! This module contains the sale record model, its validation rules and the
//! aggregation service computing total sales over a store and date window.

pub mod entity;
pub mod error;
pub mod ports;
pub mod range;
pub mod service;

pub use entity::{is_unset_date, NewSale, Sale};
pub use error::{Result, SaleError, ValidationError};
pub use ports::SalesServicePort;
pub use range::DateRange;
pub use service::SalesService;
