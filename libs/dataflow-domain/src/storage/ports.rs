//! Ports (trait definitions) for external dependencies
//!
//! This module defines the contracts (ports) that storage adapters must implement.
//! Following hexagonal architecture, the domain defines what it needs, and the
//! infrastructure provides implementations.
//!
//! ## Static Dispatch
//!
//! We use native Rust async traits with `impl Future` return types instead of
//! `async_trait`, so every adapter is monomorphized into the service.

use std::future::Future;

use crate::sale::{DateRange, Sale, SaleError};

/// Port for sale storage operations
///
/// This trait abstracts away the storage backend. Implementations must:
/// - Partition records by `store_id`
/// - Keep insertion order within a partition
/// - Never expose partially written records to readers
/// - Convert backend errors to `SaleError::StorageFailure`
pub trait SaleRepository: Send + Sync {
    /// Append an already-validated sale to its store partition
    ///
    /// The partition is created if it does not exist. There is no uniqueness
    /// constraint: the same sale can be stored twice.
    ///
    /// # Errors
    ///
    /// Returns `SaleError::StorageFailure` if the backend cannot store the record
    fn create(&self, sale: Sale) -> impl Future<Output = Result<(), SaleError>> + Send;

    /// Return every stored sale across all partitions
    ///
    /// # Errors
    ///
    /// Returns `SaleError::StorageFailure` if the backend cannot be read
    fn list_all(&self) -> impl Future<Output = Result<Vec<Sale>, SaleError>> + Send;

    /// Return the sales of one store whose date falls inside `range`
    ///
    /// An unknown store yields an empty result, not an error.
    ///
    /// # Arguments
    ///
    /// * `store_id` - The partition to scan
    /// * `range` - Inclusive optional bounds on `sale_date`
    ///
    /// # Errors
    ///
    /// Returns `SaleError::StorageFailure` if the backend cannot be read
    fn query_by_store_and_range(
        &self,
        store_id: &str,
        range: DateRange,
    ) -> impl Future<Output = Result<Vec<Sale>, SaleError>> + Send;
}
