//! Sales service - Business logic orchestration
//!
//! A thin layer between the HTTP interface and storage. Creation and listing
//! pass straight through to the repository; the service adds one computed
//! operation, the total of sale prices for a store over a date range.

use std::future::Future;

use tracing::{debug, info, instrument};

use super::{DateRange, Sale, SaleError, SalesServicePort};
use crate::ports::SaleRepository;

/// Service for recording sales and computing aggregates
///
/// The service owns an explicitly constructed repository instance. It does
/// not validate records: a [`Sale`] is already valid by construction.
///
/// ## Static Dispatch
///
/// The service is generic over any `SaleRepository` implementation, so the
/// repository calls are resolved at compile time.
pub struct SalesService<R> {
    repository: R,
}

impl<R> SalesService<R>
where
    R: SaleRepository,
{
    /// Create a new SalesService over the given repository
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    /// Store a sale
    ///
    /// # Errors
    ///
    /// Returns `SaleError::StorageFailure` if the repository fails
    #[instrument(
        skip(self, sale),
        fields(store_id = %sale.store_id(), product_id = %sale.product_id())
    )]
    pub async fn create(&self, sale: Sale) -> Result<(), SaleError> {
        self.repository.create(sale).await?;
        debug!("Sale stored");
        Ok(())
    }

    /// List every stored sale
    ///
    /// # Errors
    ///
    /// Returns `SaleError::StorageFailure` if the repository fails
    #[instrument(skip(self))]
    pub async fn list_all(&self) -> Result<Vec<Sale>, SaleError> {
        let sales = self.repository.list_all().await?;
        debug!(count = sales.len(), "Listed sales");
        Ok(sales)
    }

    /// Total sale price for `store_id` within `range`
    ///
    /// Prices are added with plain `f64` arithmetic in the order the repository
    /// returns them (insertion order within the store). No matching records
    /// yields `0.0`.
    ///
    /// # Errors
    ///
    /// Returns `SaleError::StorageFailure` if the repository fails
    #[instrument(skip(self))]
    pub async fn calculate(&self, store_id: &str, range: DateRange) -> Result<f64, SaleError> {
        let sales = self
            .repository
            .query_by_store_and_range(store_id, range)
            .await?;

        let total: f64 = sales.iter().map(Sale::sale_price).sum();

        info!(matched = sales.len(), total, "Calculated total sales");
        Ok(total)
    }
}

impl<R> SalesServicePort for SalesService<R>
where
    R: SaleRepository,
{
    fn create(&self, sale: Sale) -> impl Future<Output = Result<(), SaleError>> + Send {
        SalesService::create(self, sale)
    }

    fn list_all(&self) -> impl Future<Output = Result<Vec<Sale>, SaleError>> + Send {
        SalesService::list_all(self)
    }

    fn calculate(
        &self,
        store_id: &str,
        range: DateRange,
    ) -> impl Future<Output = Result<f64, SaleError>> + Send {
        SalesService::calculate(self, store_id, range)
    }
}
