use chrono::{DateTime, Utc};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPayment {
    pub card_number: String,
    pub expiry_month: i32,
    pub expiry_year: i32,
    pub cvv: String,
    pub amount: Decimal,
    pub currency_code: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransactionStatus {
    Success,
    Failed,
}

impl TransactionStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            TransactionStatus::Success => "Success",
            TransactionStatus::Failed => "Failed",
        }
    }

    pub fn parse(s: &str) -> Self {
        match s {
            "Success" => TransactionStatus::Success,
            _ => TransactionStatus::Failed,
        }
    }
}

#[derive(Debug, Clone)]
pub struct PaymentRequest {
    pub id: Uuid,
    pub card_number: String,
    pub expiry_month: i32,
    pub expiry_year: i32,
    pub cvv: String,
    pub amount: Decimal,
    pub currency_code: String,
    pub created_at: DateTime<Utc>,
}

impl PaymentRequest {
    pub fn from_new(new_payment: NewPayment) -> Self {
        // amount is stored with exactly 2 fractional digits, matching the
        // NUMERIC(10,2) column
        let mut amount = new_payment
            .amount
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        amount.rescale(2);

        Self {
            id: Uuid::new_v4(),
            card_number: new_payment.card_number,
            expiry_month: new_payment.expiry_month,
            expiry_year: new_payment.expiry_year,
            cvv: new_payment.cvv,
            amount,
            currency_code: new_payment.currency_code.to_uppercase(),
            created_at: Utc::now(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Transaction {
    pub id: Uuid,
    pub payment_request_id: Uuid,
    pub masked_card_number: String,
    pub status: TransactionStatus,
    pub bank_message: String,
    pub processed_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentAccepted {
    pub transaction_id: Uuid,
    pub status: TransactionStatus,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionDetails {
    pub transaction_id: Uuid,
    pub masked_card_number: String,
    pub status: TransactionStatus,
    pub amount: Decimal,
    pub currency_code: String,
    pub bank_message: String,
    pub processed_at: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct ErrorEnvelope {
    pub error: ErrorPayload,
}

#[derive(Debug, Serialize)]
pub struct ErrorPayload {
    pub code: String,
    pub message: String,
    pub details: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn new_payment(amount: Decimal) -> NewPayment {
        NewPayment {
            card_number: "4242424242424242".to_string(),
            expiry_month: 12,
            expiry_year: 2099,
            cvv: "123".to_string(),
            amount,
            currency_code: "gbp".to_string(),
        }
    }

    #[test]
    fn from_new_normalizes_amount_to_two_decimals() {
        let request = PaymentRequest::from_new(new_payment(dec!(10)));
        assert_eq!(request.amount.to_string(), "10.00");

        let request = PaymentRequest::from_new(new_payment(dec!(10.015)));
        assert_eq!(request.amount.to_string(), "10.02");
    }

    #[test]
    fn from_new_uppercases_currency() {
        let request = PaymentRequest::from_new(new_payment(dec!(5.00)));
        assert_eq!(request.currency_code, "GBP");
    }

    #[test]
    fn status_round_trips_through_text() {
        assert_eq!(TransactionStatus::parse("Success"), TransactionStatus::Success);
        assert_eq!(TransactionStatus::parse("Failed"), TransactionStatus::Failed);
        assert_eq!(TransactionStatus::Success.as_str(), "Success");
    }
}
