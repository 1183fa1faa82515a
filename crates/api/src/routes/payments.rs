//! Payment endpoint handlers.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use domain::models::payment::{CreatePaymentRequest, ListPaymentsResponse, UpdatePaymentRequest};
use domain::models::{Payment, PaymentDetails};
use persistence::repositories::PaymentRepository;
use tracing::info;
use validator::Validate;

use crate::app::AppState;
use crate::error::ApiError;
use crate::extractors::AppJson;

/// GET /api/v1/payments
pub async fn list_payments(
    State(state): State<AppState>,
) -> Result<Json<ListPaymentsResponse>, ApiError> {
    let repo = PaymentRepository::new(state.pool.clone());
    let payments: Vec<PaymentDetails> = repo.list().await?.into_iter().map(Into::into).collect();
    let total = payments.len();

    Ok(Json(ListPaymentsResponse { payments, total }))
}

/// GET /api/v1/payments/:id
pub async fn get_payment(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<PaymentDetails>, ApiError> {
    let repo = PaymentRepository::new(state.pool.clone());
    let entity = repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Payment not found".to_string()))?;

    Ok(Json(entity.into()))
}

/// Record a payment against an enrollment.
///
/// POST /api/v1/payments
pub async fn create_payment(
    State(state): State<AppState>,
    AppJson(request): AppJson<CreatePaymentRequest>,
) -> Result<(StatusCode, Json<Payment>), ApiError> {
    request.validate()?;

    let repo = PaymentRepository::new(state.pool.clone());
    let payment: Payment = repo.create(&request).await?.into();

    info!(
        payment_id = payment.id,
        enrollment_id = payment.enrollment_id,
        amount = %payment.amount,
        status = %payment.status,
        "Payment recorded"
    );

    Ok((StatusCode::CREATED, Json(payment)))
}

/// PUT /api/v1/payments/:id
pub async fn update_payment(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    AppJson(request): AppJson<UpdatePaymentRequest>,
) -> Result<Json<Payment>, ApiError> {
    request.validate()?;

    let repo = PaymentRepository::new(state.pool.clone());
    let payment: Payment = repo
        .update(id, &request)
        .await?
        .ok_or_else(|| ApiError::NotFound("Payment not found".to_string()))?
        .into();

    info!(payment_id = id, status = %payment.status, "Payment updated");

    Ok(Json(payment))
}

/// DELETE /api/v1/payments/:id
pub async fn delete_payment(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    let repo = PaymentRepository::new(state.pool.clone());
    let deleted = repo
        .delete(id)
        .await
        .map_err(|e| ApiError::from_delete(e, "Payment"))?;

    if deleted == 0 {
        return Err(ApiError::NotFound("Payment not found".to_string()));
    }

    info!(payment_id = id, "Payment deleted");

    Ok(StatusCode::NO_CONTENT)
}
