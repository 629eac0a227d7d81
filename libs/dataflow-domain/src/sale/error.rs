//! Domain errors for sale operations
//!
//! Validation failures are client-side conditions: they are reported to the
//! caller as-is and never retried. Storage failures are server-side.

use thiserror::Error;

/// A sale record violates one of the field rules
///
/// The display text names the offending field.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("product_id is required")]
    MissingProductId,

    #[error("store_id is required")]
    MissingStoreId,

    #[error("quantity_sold must be greater than 0")]
    NonPositiveQuantity,

    #[error("sale_price must be greater than 0")]
    NonPositivePrice,

    #[error("sale_date is required")]
    MissingSaleDate,
}

impl ValidationError {
    /// Name of the field that failed validation
    pub fn field(&self) -> &'static str {
        match self {
            Self::MissingProductId => "product_id",
            Self::MissingStoreId => "store_id",
            Self::NonPositiveQuantity => "quantity_sold",
            Self::NonPositivePrice => "sale_price",
            Self::MissingSaleDate => "sale_date",
        }
    }
}

/// Errors that can occur during sale operations
#[derive(Error, Debug)]
pub enum SaleError {
    /// The sale record failed validation
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The storage backend could not complete the operation
    ///
    /// The in-memory backend never produces this; other backends may.
    #[error("Storage operation failed: {0}")]
    StorageFailure(String),
}

impl SaleError {
    /// Create a storage failure error with a message
    pub fn storage_failure(msg: impl Into<String>) -> Self {
        Self::StorageFailure(msg.into())
    }
}

/// Result type alias for sale operations
pub type Result<T> = std::result::Result<T, SaleError>;
