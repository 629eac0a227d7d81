//! Calculation handler

use axum::{extract::State, Json};
use dataflow_domain::sale::SalesServicePort;
use tracing::info;

use crate::{
    dto::{
        calculate::{CalculateRequest, CalculateResponse, Operation},
        common::ErrorResponse,
    },
    error::ApiError,
    extract::JsonBody,
    AppState,
};

/// Compute an aggregate over a store's sales
#[utoipa::path(
    post,
    path = "/calculate",
    request_body = CalculateRequest,
    responses(
        (status = 200, description = "Aggregate computed", body = CalculateResponse),
        (status = 400, description = "Malformed body or invalid operation", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    ),
    tag = "calculate"
)]
pub async fn calculate_handler<S: SalesServicePort + 'static>(
    State(state): State<AppState<S>>,
    JsonBody(req): JsonBody<CalculateRequest>,
) -> Result<Json<CalculateResponse>, ApiError> {
    info!(
        operation = %req.operation,
        store_id = %req.store_id,
        start_date = ?req.start_date,
        end_date = ?req.end_date,
        "Received calculate request"
    );

    let total_sales = match req.operation.parse::<Operation>()? {
        Operation::TotalSales => state
            .sales_service
            .calculate(&req.store_id, req.range())
            .await
            .map_err(|err| ApiError::from_sale_error("Calculation error", err))?,
    };

    Ok(Json(CalculateResponse {
        store_id: req.store_id,
        total_sales,
        start_date: req.start_date,
        end_date: req.end_date,
    }))
}
