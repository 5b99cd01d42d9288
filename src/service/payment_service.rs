use crate::bank::{AcquiringBank, BankResponse};
use crate::domain::card::mask_card_number;
use crate::domain::payment::{
    NewPayment, PaymentAccepted, PaymentRequest, Transaction, TransactionDetails,
    TransactionStatus,
};
use crate::error::PaymentError;
use crate::store::PaymentStore;
use crate::validation::validate_payment;
use chrono::Utc;
use rust_decimal::Decimal;
use std::sync::Arc;
use uuid::Uuid;

pub const ODD_AMOUNT_DECLINE_MESSAGE: &str =
    "Payment declined - amount ending in odd number not allowed";

const BANK_MESSAGE_MAX_CHARS: usize = 500;

#[derive(Clone)]
pub struct PaymentService {
    pub store: Arc<dyn PaymentStore>,
    pub bank: Arc<dyn AcquiringBank>,
}

impl PaymentService {
    pub async fn submit_payment(
        &self,
        new_payment: NewPayment,
    ) -> Result<PaymentAccepted, PaymentError> {
        validate_payment(&new_payment, Utc::now())?;

        let request = PaymentRequest::from_new(new_payment);
        let rule_declined = ends_in_odd_digit(request.amount);

        // The request row is durable from here on, whatever the outcome.
        self.store.save_request(&request).await?;

        let bank_response = if rule_declined {
            BankResponse {
                status: TransactionStatus::Failed,
                message: ODD_AMOUNT_DECLINE_MESSAGE.to_string(),
            }
        } else {
            match self.bank.authorize(&request).await {
                Ok(response) => response,
                Err(err) => {
                    // A persisted request must still end up with a transaction,
                    // so a bank failure becomes a Failed record, not a lost one.
                    tracing::error!(
                        payment_request_id = %request.id,
                        "acquiring bank call failed: {err:#}"
                    );
                    BankResponse {
                        status: TransactionStatus::Failed,
                        message: "Payment failed - acquiring bank unavailable".to_string(),
                    }
                }
            }
        };

        let transaction = Transaction {
            id: Uuid::new_v4(),
            payment_request_id: request.id,
            masked_card_number: mask_card_number(&request.card_number),
            status: bank_response.status,
            bank_message: bank_response
                .message
                .chars()
                .take(BANK_MESSAGE_MAX_CHARS)
                .collect(),
            processed_at: Utc::now(),
        };
        self.store.save_transaction(&transaction).await?;

        if rule_declined {
            return Err(PaymentError::RuleDeclined {
                transaction_id: transaction.id,
                message: ODD_AMOUNT_DECLINE_MESSAGE.to_string(),
            });
        }

        Ok(PaymentAccepted {
            transaction_id: transaction.id,
            status: transaction.status,
        })
    }

    pub async fn get_transaction(
        &self,
        transaction_id: Uuid,
    ) -> Result<TransactionDetails, PaymentError> {
        self.store
            .find_transaction(transaction_id)
            .await?
            .ok_or(PaymentError::NotFound)
    }

    pub async fn list_transactions(&self) -> Result<Vec<TransactionDetails>, PaymentError> {
        Ok(self.store.list_transactions().await?)
    }
}

// The rule works on the 2-decimal rendering of the amount with the separator
// dropped: 10.01 -> "1001" -> last digit 1 -> declined.
fn ends_in_odd_digit(amount: Decimal) -> bool {
    format!("{amount:.2}")
        .chars()
        .filter(|c| *c != '.')
        .last()
        .is_some_and(|c| c.is_ascii_digit() && (c as u8 - b'0') % 2 == 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn even_trailing_digit_is_eligible() {
        assert!(!ends_in_odd_digit(dec!(10.00)));
        assert!(!ends_in_odd_digit(dec!(10.10)));
        assert!(!ends_in_odd_digit(dec!(7)));
    }

    #[test]
    fn odd_trailing_digit_is_declined() {
        assert!(ends_in_odd_digit(dec!(10.01)));
        assert!(ends_in_odd_digit(dec!(0.99)));
        assert!(ends_in_odd_digit(dec!(123.45)));
    }
}
