use thiserror::Error;
use uuid::Uuid;

/// Failure kinds surfaced by the payment workflow and lookups.
///
/// `Validation` means nothing was persisted. `RuleDeclined` means a transaction
/// record exists and can be looked up by the embedded id.
#[derive(Debug, Error)]
pub enum PaymentError {
    #[error("{0}")]
    Validation(String),

    #[error("Payment failed: {message}. Transaction ID: {transaction_id}")]
    RuleDeclined { transaction_id: Uuid, message: String },

    #[error("Transaction not found")]
    NotFound,

    #[error("Invalid transaction ID format")]
    MalformedId,

    #[error(transparent)]
    Unexpected(#[from] anyhow::Error),
}
