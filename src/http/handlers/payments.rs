use crate::domain::payment::{ErrorEnvelope, ErrorPayload, NewPayment};
use crate::error::PaymentError;
use crate::AppState;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use uuid::Uuid;

pub async fn create_payment(
    State(state): State<AppState>,
    Json(new_payment): Json<NewPayment>,
) -> impl IntoResponse {
    match state.payment_service.submit_payment(new_payment).await {
        Ok(accepted) => (StatusCode::CREATED, Json(accepted)).into_response(),
        Err(err) => error_response(err).into_response(),
    }
}

pub async fn get_payment(
    State(state): State<AppState>,
    Path(transaction_id): Path<String>,
) -> impl IntoResponse {
    let Ok(transaction_id) = Uuid::parse_str(&transaction_id) else {
        return error_response(PaymentError::MalformedId).into_response();
    };

    match state.payment_service.get_transaction(transaction_id).await {
        Ok(details) => (StatusCode::OK, Json(details)).into_response(),
        Err(err) => error_response(err).into_response(),
    }
}

pub async fn list_payments(State(state): State<AppState>) -> impl IntoResponse {
    match state.payment_service.list_transactions().await {
        Ok(transactions) => (StatusCode::OK, Json(transactions)).into_response(),
        Err(err) => error_response(err).into_response(),
    }
}

pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, "ok")
}

fn error_response(err: PaymentError) -> (StatusCode, Json<ErrorEnvelope>) {
    let (status, code) = match &err {
        PaymentError::Validation(_) => {
            tracing::warn!("payment validation failed: {err}");
            (StatusCode::BAD_REQUEST, "VALIDATION_FAILED")
        }
        PaymentError::RuleDeclined { .. } => {
            tracing::warn!("payment failed business rule: {err}");
            (StatusCode::BAD_REQUEST, "RULE_DECLINED")
        }
        PaymentError::NotFound => (StatusCode::NOT_FOUND, "NOT_FOUND"),
        PaymentError::MalformedId => (StatusCode::BAD_REQUEST, "INVALID_ID"),
        PaymentError::Unexpected(source) => {
            tracing::error!("unexpected failure: {source:#}");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(envelope(
                    "INTERNAL_ERROR",
                    "Internal server error occurred while processing the request",
                )),
            );
        }
    };

    (status, Json(envelope(code, &err.to_string())))
}

fn envelope(code: &str, message: &str) -> ErrorEnvelope {
    ErrorEnvelope {
        error: ErrorPayload {
            code: code.to_string(),
            message: message.to_string(),
            details: None,
        },
    }
}
