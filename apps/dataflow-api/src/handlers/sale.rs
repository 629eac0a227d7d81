//! Sale handlers

use axum::{extract::State, http::StatusCode, Json};
use dataflow_domain::sale::{NewSale, SalesServicePort};
use tracing::info;

use crate::{
    dto::{
        common::{ErrorResponse, StatusResponse},
        sale::{CreateSaleRequest, SaleResponse},
    },
    error::ApiError,
    extract::JsonBody,
    AppState,
};

/// Record a sale
///
/// The body is validated before anything reaches storage; a rejected sale
/// leaves the store untouched.
#[utoipa::path(
    post,
    path = "/data",
    request_body = CreateSaleRequest,
    responses(
        (status = 201, description = "Sale recorded", body = StatusResponse),
        (status = 400, description = "Malformed body or validation failure", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    ),
    tag = "sales"
)]
pub async fn create_sale_handler<S: SalesServicePort + 'static>(
    State(state): State<AppState<S>>,
    JsonBody(payload): JsonBody<CreateSaleRequest>,
) -> Result<(StatusCode, Json<StatusResponse>), ApiError> {
    info!(
        store_id = %payload.store_id,
        product_id = %payload.product_id,
        "Received create sale request"
    );

    let sale = NewSale::from(payload).validate()?;

    state
        .sales_service
        .create(sale)
        .await
        .map_err(|err| ApiError::from_sale_error("Failed to create sale", err))?;

    info!("Sale recorded");
    Ok((StatusCode::CREATED, Json(StatusResponse::success())))
}

/// List every recorded sale
#[utoipa::path(
    get,
    path = "/data",
    responses(
        (status = 200, description = "All recorded sales", body = [SaleResponse]),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    ),
    tag = "sales"
)]
pub async fn list_sales_handler<S: SalesServicePort + 'static>(
    State(state): State<AppState<S>>,
) -> Result<Json<Vec<SaleResponse>>, ApiError> {
    let sales = state
        .sales_service
        .list_all()
        .await
        .map_err(|err| ApiError::from_sale_error("Failed to fetch sales", err))?;

    info!(count = sales.len(), "Listing sales");
    Ok(Json(sales.iter().map(SaleResponse::from).collect()))
}
