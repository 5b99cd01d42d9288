use crate::bank::{AcquiringBank, BankResponse};
use crate::domain::payment::{PaymentRequest, TransactionStatus};
use anyhow::Result;
use std::time::Duration;

/// Deterministic stand-in for a real acquiring bank: approves when the card
/// number ends in an even digit, declines otherwise.
pub struct MockAcquiringBank {
    pub latency: Duration,
}

#[async_trait::async_trait]
impl AcquiringBank for MockAcquiringBank {
    fn name(&self) -> &'static str {
        "mock_bank"
    }

    async fn authorize(&self, request: &PaymentRequest) -> Result<BankResponse> {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }

        let approved = request
            .card_number
            .chars()
            .last()
            .is_some_and(|c| c.is_ascii_digit() && (c as u8 - b'0') % 2 == 0);

        let response = if approved {
            BankResponse {
                status: TransactionStatus::Success,
                message: "Payment approved".to_string(),
            }
        } else {
            BankResponse {
                status: TransactionStatus::Failed,
                message: "Payment declined".to_string(),
            }
        };

        Ok(response)
    }
}
