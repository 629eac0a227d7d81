//! DTOs for the calculation endpoint

use std::str::FromStr;

use chrono::{DateTime, FixedOffset, Utc};
use dataflow_domain::sale::DateRange;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

/// Aggregations the service knows how to compute
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    TotalSales,
}

impl Operation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::TotalSales => "total_sales",
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid operation")]
pub struct UnknownOperation(pub String);

impl FromStr for Operation {
    type Err = UnknownOperation;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "total_sales" => Ok(Self::TotalSales),
            other => Err(UnknownOperation(other.to_string())),
        }
    }
}

/// Request body for the calculation endpoint
///
/// Absent dates leave that side of the range unbounded. Dates keep the
/// caller's offset so they can be echoed back unchanged.
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
#[serde(default, deny_unknown_fields)]
pub struct CalculateRequest {
    /// Only `total_sales` is supported
    #[schema(example = "total_sales")]
    pub operation: String,
    #[schema(example = "store1")]
    pub store_id: String,
    #[schema(example = "2024-03-01T00:00:00Z")]
    pub start_date: Option<DateTime<FixedOffset>>,
    #[schema(example = "2024-03-31T23:59:59+02:00")]
    pub end_date: Option<DateTime<FixedOffset>>,
}

impl CalculateRequest {
    pub fn range(&self) -> DateRange {
        let to_utc = |date: DateTime<FixedOffset>| date.with_timezone(&Utc);
        DateRange::new(self.start_date.map(to_utc), self.end_date.map(to_utc))
    }
}

/// Response body for the calculation endpoint
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CalculateResponse {
    #[schema(example = "store1")]
    pub store_id: String,
    #[schema(example = 300.0)]
    pub total_sales: f64,
    pub start_date: Option<DateTime<FixedOffset>>,
    pub end_date: Option<DateTime<FixedOffset>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_operation_parsing() {
        assert_eq!("total_sales".parse::<Operation>(), Ok(Operation::TotalSales));
        assert_eq!(Operation::TotalSales.as_str(), "total_sales");

        let err = "invalid_operation".parse::<Operation>().unwrap_err();
        assert_eq!(err.to_string(), "invalid operation");
        assert_eq!(err.0, "invalid_operation");
        assert!("".parse::<Operation>().is_err());
    }

    #[test]
    fn test_absent_dates_are_unbounded() {
        let req: CalculateRequest = serde_json::from_str(
            r#"{"operation": "total_sales", "store_id": "s1", "end_date": null}"#,
        )
        .unwrap();

        assert!(req.range().is_unbounded());
    }

    #[test]
    fn test_range_bounds_are_converted_to_utc() {
        let req: CalculateRequest = serde_json::from_str(
            r#"{
                "operation": "total_sales",
                "store_id": "s1",
                "start_date": "2024-03-15T14:00:00+02:00",
                "end_date": "2024-03-15T23:00:00-05:00"
            }"#,
        )
        .unwrap();

        let range = req.range();
        assert_eq!(
            range.start,
            Some(Utc.with_ymd_and_hms(2024, 3, 15, 12, 0, 0).unwrap())
        );
        assert_eq!(
            range.end,
            Some(Utc.with_ymd_and_hms(2024, 3, 16, 4, 0, 0).unwrap())
        );

        // The request keeps the offset it was sent with
        assert_eq!(
            serde_json::to_value(req.start_date).unwrap(),
            "2024-03-15T14:00:00+02:00"
        );
    }

    #[test]
    fn test_response_serializes_null_dates() {
        let response = CalculateResponse {
            store_id: "s1".to_string(),
            total_sales: 0.0,
            start_date: None,
            end_date: None,
        };

        let json = serde_json::to_value(&response).unwrap();
        assert!(json["start_date"].is_null());
        assert!(json["end_date"].is_null());
        assert_eq!(json["total_sales"], 0.0);
    }
}
