//! In-Memory Sale Repository Implementation
//!
//! This module implements the `SaleRepository` trait over a process-wide
//! collection guarded by a single reader/writer lock.

use std::collections::BTreeMap;
use std::future::Future;
use std::sync::Arc;

use dataflow_domain::{
    ports::SaleRepository,
    sale::{DateRange, Sale, SaleError},
};
use tokio::sync::RwLock;
use tracing::{debug, debug_span, Instrument};

type Partitions = BTreeMap<String, Vec<Sale>>;

/// In-memory implementation of the SaleRepository port
///
/// Sales are grouped into partitions keyed by `store_id`. One `RwLock` covers
/// the whole collection:
/// - `create` takes the write lock, so writers are serialized and readers never
///   see a half-appended record
/// - `list_all` and `query_by_store_and_range` take the read lock and may run
///   concurrently with each other
///
/// No operation holds the lock while acquiring another, so there is no
/// deadlock path. None of the operations can fail.
///
/// Clones share the same underlying collection.
///
/// ## Ordering
///
/// Partitions are kept in ascending `store_id` order and each partition keeps
/// insertion order, so listings and aggregations are deterministic.
#[derive(Debug, Clone, Default)]
pub struct InMemorySaleRepository {
    partitions: Arc<RwLock<Partitions>>,
}

impl InMemorySaleRepository {
    /// Create an empty repository
    ///
    /// # Example
    ///
    /// ```rust
    /// use dataflow_memory::InMemorySaleRepository;
    ///
    /// # async fn example() {
    /// let repo = InMemorySaleRepository::new();
    /// assert!(repo.is_empty().await);
    /// # }
    /// ```
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of stored sales across all partitions
    pub async fn len(&self) -> usize {
        self.partitions.read().await.values().map(Vec::len).sum()
    }

    /// Whether no sale has been stored yet
    pub async fn is_empty(&self) -> bool {
        self.partitions.read().await.is_empty()
    }

    /// Store identifiers that have at least one sale, in ascending order
    pub async fn store_ids(&self) -> Vec<String> {
        self.partitions.read().await.keys().cloned().collect()
    }
}

impl SaleRepository for InMemorySaleRepository {
    fn create(&self, sale: Sale) -> impl Future<Output = Result<(), SaleError>> + Send {
        let partitions = self.partitions.clone();
        let span = debug_span!("memory_create", store_id = %sale.store_id());

        async move {
            let mut guard = partitions.write().await;
            let partition = guard.entry(sale.store_id().to_string()).or_default();
            partition.push(sale);
            debug!(partition_len = partition.len(), "Appended sale to partition");
            Ok(())
        }
        .instrument(span)
    }

    fn list_all(&self) -> impl Future<Output = Result<Vec<Sale>, SaleError>> + Send {
        let partitions = self.partitions.clone();

        async move {
            let guard = partitions.read().await;
            let sales: Vec<Sale> = guard.values().flatten().cloned().collect();
            debug!(
                partitions = guard.len(),
                count = sales.len(),
                "Listed all sales"
            );
            Ok(sales)
        }
        .instrument(debug_span!("memory_list_all"))
    }

    fn query_by_store_and_range(
        &self,
        store_id: &str,
        range: DateRange,
    ) -> impl Future<Output = Result<Vec<Sale>, SaleError>> + Send {
        let partitions = self.partitions.clone();
        let store_id = store_id.to_string();
        let span = debug_span!("memory_query", store_id = %store_id, ?range);

        async move {
            let guard = partitions.read().await;
            let Some(sales) = guard.get(&store_id) else {
                debug!("Unknown store, returning no sales");
                return Ok(Vec::new());
            };

            let matched: Vec<Sale> = sales
                .iter()
                .filter(|sale| range.contains(sale.sale_date()))
                .cloned()
                .collect();
            debug!(
                scanned = sales.len(),
                matched = matched.len(),
                "Queried store partition"
            );
            Ok(matched)
        }
        .instrument(span)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Duration, TimeZone, Utc};
    use dataflow_domain::sale::NewSale;

    fn base_date() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 2, 1, 8, 0, 0).unwrap()
    }

    fn sale(product: &str, store: &str, price: f64, date: DateTime<Utc>) -> Sale {
        NewSale {
            product_id: product.to_string(),
            store_id: store.to_string(),
            quantity_sold: 10,
            sale_price: price,
            sale_date: Some(date),
        }
        .validate()
        .unwrap()
    }

    #[tokio::test]
    async fn test_create() {
        let repo = InMemorySaleRepository::new();
        assert!(repo.is_empty().await);

        repo.create(sale("p1", "store1", 100.0, base_date()))
            .await
            .unwrap();

        let sales = repo.list_all().await.unwrap();
        assert_eq!(sales.len(), 1);
        assert_eq!(sales[0].product_id(), "p1");
        assert_eq!(repo.len().await, 1);
    }

    #[tokio::test]
    async fn test_list_all() {
        let repo = InMemorySaleRepository::new();

        repo.create(sale("p1", "store1", 100.0, base_date()))
            .await
            .unwrap();
        repo.create(sale("p2", "store2", 200.0, base_date()))
            .await
            .unwrap();

        assert_eq!(repo.list_all().await.unwrap().len(), 2);
        assert_eq!(repo.store_ids().await, vec!["store1", "store2"]);
    }

    #[tokio::test]
    async fn test_duplicates_are_kept() {
        let repo = InMemorySaleRepository::new();
        let s = sale("p1", "store1", 100.0, base_date());

        repo.create(s.clone()).await.unwrap();
        repo.create(s.clone()).await.unwrap();

        assert_eq!(repo.list_all().await.unwrap(), vec![s.clone(), s]);
    }

    #[tokio::test]
    async fn test_partition_keeps_insertion_order() {
        let repo = InMemorySaleRepository::new();
        let d = base_date();

        // Later date inserted first
        repo.create(sale("late", "store1", 1.0, d + Duration::days(2)))
            .await
            .unwrap();
        repo.create(sale("other", "store0", 1.0, d)).await.unwrap();
        repo.create(sale("early", "store1", 1.0, d)).await.unwrap();

        let products: Vec<String> = repo
            .query_by_store_and_range("store1", DateRange::unbounded())
            .await
            .unwrap()
            .iter()
            .map(|s| s.product_id().to_string())
            .collect();
        assert_eq!(products, vec!["late", "early"]);

        let all: Vec<String> = repo
            .list_all()
            .await
            .unwrap()
            .iter()
            .map(|s| s.product_id().to_string())
            .collect();
        assert_eq!(all, vec!["other", "late", "early"]);
    }

    #[tokio::test]
    async fn test_list_all_is_idempotent() {
        let repo = InMemorySaleRepository::new();
        repo.create(sale("p1", "store1", 10.0, base_date()))
            .await
            .unwrap();
        repo.create(sale("p2", "store2", 20.0, base_date()))
            .await
            .unwrap();

        let first = repo.list_all().await.unwrap();
        let second = repo.list_all().await.unwrap();
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_query_unknown_store_is_empty() {
        let repo = InMemorySaleRepository::new();
        repo.create(sale("p1", "store1", 10.0, base_date()))
            .await
            .unwrap();

        let sales = repo
            .query_by_store_and_range("store-missing", DateRange::unbounded())
            .await
            .unwrap();
        assert!(sales.is_empty());
    }

    #[tokio::test]
    async fn test_query_with_inclusive_bounds() {
        let repo = InMemorySaleRepository::new();
        let d = base_date();

        for offset in 0..5 {
            repo.create(sale(
                &format!("p{}", offset),
                "store1",
                10.0,
                d + Duration::days(offset),
            ))
            .await
            .unwrap();
        }

        let range = DateRange::new(Some(d + Duration::days(1)), Some(d + Duration::days(3)));
        let products: Vec<String> = repo
            .query_by_store_and_range("store1", range)
            .await
            .unwrap()
            .iter()
            .map(|s| s.product_id().to_string())
            .collect();
        assert_eq!(products, vec!["p1", "p2", "p3"]);

        let from = DateRange::new(Some(d + Duration::days(4)), None);
        assert_eq!(
            repo.query_by_store_and_range("store1", from)
                .await
                .unwrap()
                .len(),
            1
        );

        let until = DateRange::new(None, Some(d));
        assert_eq!(
            repo.query_by_store_and_range("store1", until)
                .await
                .unwrap()
                .len(),
            1
        );
    }

    #[tokio::test]
    async fn test_clones_share_storage() {
        let repo = InMemorySaleRepository::new();
        let handle = repo.clone();

        handle
            .create(sale("p1", "store1", 10.0, base_date()))
            .await
            .unwrap();

        assert_eq!(repo.len().await, 1);
    }
}
