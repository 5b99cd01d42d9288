use crate::domain::payment::{PaymentRequest, Transaction, TransactionDetails};
use anyhow::Result;
use uuid::Uuid;

pub mod memory;
pub mod postgres;

/// Append-only storage for payment requests and their transactions. Reads join
/// the transaction to its originating request so amount and currency come back
/// with the record. No update or delete exists in this domain.
#[async_trait::async_trait]
pub trait PaymentStore: Send + Sync {
    async fn save_request(&self, request: &PaymentRequest) -> Result<()>;

    async fn save_transaction(&self, transaction: &Transaction) -> Result<()>;

    async fn find_transaction(&self, id: Uuid) -> Result<Option<TransactionDetails>>;

    /// All transactions, newest `processed_at` first.
    async fn list_transactions(&self) -> Result<Vec<TransactionDetails>>;
}
