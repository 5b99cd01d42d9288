use crate::domain::payment::{PaymentRequest, Transaction, TransactionDetails, TransactionStatus};
use crate::store::PaymentStore;
use anyhow::Result;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};
use uuid::Uuid;

#[derive(Clone)]
pub struct PgPaymentStore {
    pub pool: PgPool,
}

#[async_trait::async_trait]
impl PaymentStore for PgPaymentStore {
    async fn save_request(&self, request: &PaymentRequest) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO payment_requests (
                id, card_number, expiry_month, expiry_year, cvv, amount, currency_code, created_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(request.id)
        .bind(&request.card_number)
        .bind(request.expiry_month)
        .bind(request.expiry_year)
        .bind(&request.cvv)
        .bind(request.amount)
        .bind(&request.currency_code)
        .bind(request.created_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn save_transaction(&self, transaction: &Transaction) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO transactions (
                id, payment_request_id, masked_card_number, status, bank_message, processed_at
            ) VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(transaction.id)
        .bind(transaction.payment_request_id)
        .bind(&transaction.masked_card_number)
        .bind(transaction.status.as_str())
        .bind(&transaction.bank_message)
        .bind(transaction.processed_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_transaction(&self, id: Uuid) -> Result<Option<TransactionDetails>> {
        let row = sqlx::query(
            r#"
            SELECT t.id, t.masked_card_number, t.status, t.bank_message, t.processed_at,
                   p.amount, p.currency_code
            FROM transactions t
            JOIN payment_requests p ON p.id = t.payment_request_id
            WHERE t.id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(row_to_details))
    }

    async fn list_transactions(&self) -> Result<Vec<TransactionDetails>> {
        let rows = sqlx::query(
            r#"
            SELECT t.id, t.masked_card_number, t.status, t.bank_message, t.processed_at,
                   p.amount, p.currency_code
            FROM transactions t
            JOIN payment_requests p ON p.id = t.payment_request_id
            ORDER BY t.processed_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(row_to_details).collect())
    }
}

fn row_to_details(row: PgRow) -> TransactionDetails {
    TransactionDetails {
        transaction_id: row.get("id"),
        masked_card_number: row.get("masked_card_number"),
        status: TransactionStatus::parse(row.get("status")),
        amount: row.get("amount"),
        currency_code: row.get("currency_code"),
        bank_message: row.get("bank_message"),
        processed_at: row.get("processed_at"),
    }
}
