use crate::http::handlers::payments;
use crate::AppState;
use axum::routing::{get, post};
use axum::Router;

pub fn api_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(payments::health))
        .route(
            "/payments",
            post(payments::create_payment).get(payments::list_payments),
        )
        .route("/payments/:transaction_id", get(payments::get_payment))
        .with_state(state)
}
