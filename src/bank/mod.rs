use crate::domain::payment::{PaymentRequest, TransactionStatus};
use anyhow::Result;

pub mod mock;

#[derive(Debug, Clone)]
pub struct BankResponse {
    pub status: TransactionStatus,
    pub message: String,
}

/// Authorization capability of an acquiring bank. Production deployments swap
/// the mock for a real network client behind the same trait.
#[async_trait::async_trait]
pub trait AcquiringBank: Send + Sync {
    fn name(&self) -> &'static str;

    async fn authorize(&self, request: &PaymentRequest) -> Result<BankResponse>;
}
