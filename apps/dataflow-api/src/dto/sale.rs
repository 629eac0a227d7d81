//! DTOs for sale endpoints

use chrono::{DateTime, Utc};
use dataflow_domain::sale::{NewSale, Sale};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Request body for recording a sale
///
/// Unknown fields are rejected. Missing fields fall back to empty/zero so
/// that they are reported by validation, in rule order.
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
#[serde(default, deny_unknown_fields)]
pub struct CreateSaleRequest {
    #[schema(example = "p1")]
    pub product_id: String,
    #[schema(example = "store1")]
    pub store_id: String,
    #[schema(example = 10)]
    pub quantity_sold: i64,
    #[schema(example = 100.0)]
    pub sale_price: f64,
    #[schema(example = "2024-03-15T12:00:00Z")]
    pub sale_date: Option<DateTime<Utc>>,
}

impl From<CreateSaleRequest> for NewSale {
    fn from(req: CreateSaleRequest) -> Self {
        Self {
            product_id: req.product_id,
            store_id: req.store_id,
            quantity_sold: req.quantity_sold,
            sale_price: req.sale_price,
            sale_date: req.sale_date,
        }
    }
}

/// A stored sale
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SaleResponse {
    #[schema(example = "p1")]
    pub product_id: String,
    #[schema(example = "store1")]
    pub store_id: String,
    #[schema(example = 10)]
    pub quantity_sold: i64,
    #[schema(example = 100.0)]
    pub sale_price: f64,
    #[schema(example = "2024-03-15T12:00:00Z")]
    pub sale_date: DateTime<Utc>,
}

impl From<&Sale> for SaleResponse {
    fn from(sale: &Sale) -> Self {
        Self {
            product_id: sale.product_id().to_string(),
            store_id: sale.store_id().to_string(),
            quantity_sold: sale.quantity_sold(),
            sale_price: sale.sale_price(),
            sale_date: *sale.sale_date(),
        }
    }
}
