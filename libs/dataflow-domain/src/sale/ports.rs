//! Port trait for the Sales Service
//!
//! The HTTP layer depends on this trait rather than on the concrete
//! `SalesService<R>`, so handlers can be exercised against any implementation.

use std::future::Future;

use crate::sale::{DateRange, Sale, SaleError};

/// Port trait for sales operations
pub trait SalesServicePort: Send + Sync {
    /// Store an already-validated sale
    ///
    /// # Errors
    ///
    /// Returns `SaleError::StorageFailure` if storage fails
    fn create(&self, sale: Sale) -> impl Future<Output = Result<(), SaleError>> + Send;

    /// List every stored sale
    ///
    /// # Errors
    ///
    /// Returns `SaleError::StorageFailure` if storage fails
    fn list_all(&self) -> impl Future<Output = Result<Vec<Sale>, SaleError>> + Send;

    /// Sum the sale prices of a store within an optional date range
    ///
    /// Returns `0.0` when nothing matches.
    ///
    /// # Errors
    ///
    /// Returns `SaleError::StorageFailure` if storage fails
    fn calculate(
        &self,
        store_id: &str,
        range: DateRange,
    ) -> impl Future<Output = Result<f64, SaleError>> + Send;
}
