use crate::domain::payment::{PaymentRequest, Transaction, TransactionDetails};
use crate::store::PaymentStore;
use anyhow::{ensure, Context, Result};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

/// Thread-safe in-memory store. Backs the test suite and DB-less runs; enforces
/// the same one-transaction-per-request uniqueness as the database index.
#[derive(Default, Clone)]
pub struct InMemoryPaymentStore {
    requests: Arc<RwLock<HashMap<Uuid, PaymentRequest>>>,
    transactions: Arc<RwLock<Vec<Transaction>>>,
}

impl InMemoryPaymentStore {
    pub fn new() -> Self {
        Self::default()
    }
}

// Lock order is always requests before transactions.
#[async_trait::async_trait]
impl PaymentStore for InMemoryPaymentStore {
    async fn save_request(&self, request: &PaymentRequest) -> Result<()> {
        self.requests.write().await.insert(request.id, request.clone());
        Ok(())
    }

    async fn save_transaction(&self, transaction: &Transaction) -> Result<()> {
        let requests = self.requests.read().await;
        ensure!(
            requests.contains_key(&transaction.payment_request_id),
            "unknown payment request {}",
            transaction.payment_request_id
        );

        let mut transactions = self.transactions.write().await;
        ensure!(
            !transactions
                .iter()
                .any(|t| t.payment_request_id == transaction.payment_request_id),
            "payment request {} already has a transaction",
            transaction.payment_request_id
        );

        transactions.push(transaction.clone());
        Ok(())
    }

    async fn find_transaction(&self, id: Uuid) -> Result<Option<TransactionDetails>> {
        let requests = self.requests.read().await;
        let transactions = self.transactions.read().await;

        let Some(transaction) = transactions.iter().find(|t| t.id == id) else {
            return Ok(None);
        };

        let request = requests
            .get(&transaction.payment_request_id)
            .context("payment request missing for stored transaction")?;

        Ok(Some(join_details(transaction, request)))
    }

    async fn list_transactions(&self) -> Result<Vec<TransactionDetails>> {
        let requests = self.requests.read().await;
        let transactions = self.transactions.read().await;

        let mut details = Vec::with_capacity(transactions.len());
        for transaction in transactions.iter() {
            let request = requests
                .get(&transaction.payment_request_id)
                .context("payment request missing for stored transaction")?;
            details.push(join_details(transaction, request));
        }

        details.sort_by(|a, b| b.processed_at.cmp(&a.processed_at));
        Ok(details)
    }
}

fn join_details(transaction: &Transaction, request: &PaymentRequest) -> TransactionDetails {
    TransactionDetails {
        transaction_id: transaction.id,
        masked_card_number: transaction.masked_card_number.clone(),
        status: transaction.status,
        amount: request.amount,
        currency_code: request.currency_code.clone(),
        bank_message: transaction.bank_message.clone(),
        processed_at: transaction.processed_at,
    }
}
