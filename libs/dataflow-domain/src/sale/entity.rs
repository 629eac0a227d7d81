//! Domain entities for sales
//!
//! A `NewSale` is a candidate record exactly as a caller submitted it. The only
//! way to obtain a `Sale` is through [`NewSale::validate`], so every `Sale`
//! held by a repository satisfies the field rules.

use chrono::{DateTime, Utc};

use crate::sale::error::ValidationError;

/// Unix timestamp of `0001-01-01T00:00:00Z`, the unset-timestamp value
const UNSET_DATE_SECS: i64 = -62_135_596_800;

/// Check whether a timestamp is the zero/unset instant
pub fn is_unset_date(date: &DateTime<Utc>) -> bool {
    date.timestamp() == UNSET_DATE_SECS && date.timestamp_subsec_nanos() == 0
}

/// A candidate sale record, not yet validated
///
/// Every field may be empty or zero; [`NewSale::validate`] decides whether
/// the candidate becomes a [`Sale`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewSale {
    pub product_id: String,
    pub store_id: String,
    pub quantity_sold: i64,
    pub sale_price: f64,
    pub sale_date: Option<DateTime<Utc>>,
}

impl NewSale {
    /// Validate the candidate and turn it into an immutable [`Sale`]
    ///
    /// Rules are checked in a fixed order and the first violation is reported:
    ///
    /// 1. `product_id` must be non-empty
    /// 2. `store_id` must be non-empty
    /// 3. `quantity_sold` must be > 0
    /// 4. `sale_price` must be > 0 (NaN is rejected)
    /// 5. `sale_date` must be present and not the unset instant
    ///
    /// # Errors
    ///
    /// Returns the [`ValidationError`] for the first rule that fails.
    pub fn validate(self) -> Result<Sale, ValidationError> {
        if self.product_id.is_empty() {
            return Err(ValidationError::MissingProductId);
        }
        if self.store_id.is_empty() {
            return Err(ValidationError::MissingStoreId);
        }
        if self.quantity_sold <= 0 {
            return Err(ValidationError::NonPositiveQuantity);
        }
        if self.sale_price.is_nan() || self.sale_price <= 0.0 {
            return Err(ValidationError::NonPositivePrice);
        }
        let sale_date = match self.sale_date {
            Some(date) if !is_unset_date(&date) => date,
            _ => return Err(ValidationError::MissingSaleDate),
        };

        Ok(Sale {
            product_id: self.product_id,
            store_id: self.store_id,
            quantity_sold: self.quantity_sold,
            sale_price: self.sale_price,
            sale_date,
        })
    }
}

/// A validated, immutable sale record
///
/// Sales are partitioned by `store_id` in storage. There is no update or
/// delete path; a sale lives as long as the repository holding it.
#[derive(Debug, Clone, PartialEq)]
pub struct Sale {
    product_id: String,
    store_id: String,
    quantity_sold: i64,
    sale_price: f64,
    sale_date: DateTime<Utc>,
}

impl Sale {
    /// Get the product identifier
    pub fn product_id(&self) -> &str {
        &self.product_id
    }

    /// Get the store identifier (the storage partition key)
    pub fn store_id(&self) -> &str {
        &self.store_id
    }

    /// Get the number of units sold
    pub fn quantity_sold(&self) -> i64 {
        self.quantity_sold
    }

    /// Get the sale price
    pub fn sale_price(&self) -> f64 {
        self.sale_price
    }

    /// Get the sale timestamp
    pub fn sale_date(&self) -> &DateTime<Utc> {
        &self.sale_date
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn valid_candidate() -> NewSale {
        NewSale {
            product_id: "p1".to_string(),
            store_id: "store1".to_string(),
            quantity_sold: 10,
            sale_price: 100.0,
            sale_date: Some(Utc.with_ymd_and_hms(2024, 3, 15, 12, 0, 0).unwrap()),
        }
    }

    #[test]
    fn test_valid_sale_passes() {
        let sale = valid_candidate().validate().unwrap();

        assert_eq!(sale.product_id(), "p1");
        assert_eq!(sale.store_id(), "store1");
        assert_eq!(sale.quantity_sold(), 10);
        assert_eq!(sale.sale_price(), 100.0);
        assert_eq!(
            sale.sale_date(),
            &Utc.with_ymd_and_hms(2024, 3, 15, 12, 0, 0).unwrap()
        );
    }

    #[test]
    fn test_missing_product_id() {
        let candidate = NewSale {
            product_id: String::new(),
            ..valid_candidate()
        };

        let err = candidate.validate().unwrap_err();
        assert_eq!(err, ValidationError::MissingProductId);
        assert_eq!(err.to_string(), "product_id is required");
    }

    #[test]
    fn test_missing_store_id() {
        let candidate = NewSale {
            store_id: String::new(),
            ..valid_candidate()
        };

        assert_eq!(
            candidate.validate().unwrap_err(),
            ValidationError::MissingStoreId
        );
    }

    #[test]
    fn test_non_positive_quantity() {
        for quantity in [0, -3] {
            let candidate = NewSale {
                quantity_sold: quantity,
                ..valid_candidate()
            };

            let err = candidate.validate().unwrap_err();
            assert_eq!(err, ValidationError::NonPositiveQuantity);
            assert_eq!(err.to_string(), "quantity_sold must be greater than 0");
        }
    }

    #[test]
    fn test_non_positive_price() {
        for price in [0.0, -1.5, f64::NAN] {
            let candidate = NewSale {
                sale_price: price,
                ..valid_candidate()
            };

            assert_eq!(
                candidate.validate().unwrap_err(),
                ValidationError::NonPositivePrice
            );
        }
    }

    #[test]
    fn test_missing_sale_date() {
        let candidate = NewSale {
            sale_date: None,
            ..valid_candidate()
        };

        let err = candidate.validate().unwrap_err();
        assert_eq!(err, ValidationError::MissingSaleDate);
        assert_eq!(err.to_string(), "sale_date is required");
    }

    #[test]
    fn test_unset_sale_date_is_missing() {
        let zero = Utc.with_ymd_and_hms(1, 1, 1, 0, 0, 0).unwrap();
        assert!(is_unset_date(&zero));

        let candidate = NewSale {
            sale_date: Some(zero),
            ..valid_candidate()
        };

        assert_eq!(
            candidate.validate().unwrap_err(),
            ValidationError::MissingSaleDate
        );
    }

    #[test]
    fn test_epoch_is_a_valid_date() {
        let epoch = Utc.timestamp_opt(0, 0).unwrap();
        assert!(!is_unset_date(&epoch));

        let candidate = NewSale {
            sale_date: Some(epoch),
            ..valid_candidate()
        };

        assert!(candidate.validate().is_ok());
    }

    #[test]
    fn test_first_violation_wins() {
        let candidate = NewSale {
            product_id: String::new(),
            sale_price: -10.0,
            ..valid_candidate()
        };
        assert_eq!(
            candidate.validate().unwrap_err(),
            ValidationError::MissingProductId
        );

        let candidate = NewSale {
            quantity_sold: 0,
            sale_date: None,
            ..valid_candidate()
        };
        assert_eq!(
            candidate.validate().unwrap_err(),
            ValidationError::NonPositiveQuantity
        );

        assert_eq!(
            NewSale::default().validate().unwrap_err(),
            ValidationError::MissingProductId
        );
    }
}
