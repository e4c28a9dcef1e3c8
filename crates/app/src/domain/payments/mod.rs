//! Payments
//!
//! Order creation and signature checking belong to the payment gateway. The application only asks
//! a [`PaymentVerifier`] whether a confirmation is authentic before finalising a build.

use async_trait::async_trait;
use mockall::automock;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Confirmation returned by the gateway after checkout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentConfirmation {
    /// Gateway order identifier
    pub order_id: String,

    /// Gateway payment identifier
    pub payment_id: String,

    /// Gateway signature over the order and payment identifiers
    pub signature: String,
}

impl PaymentConfirmation {
    /// Whether every field is present.
    pub fn is_complete(&self) -> bool {
        [&self.order_id, &self.payment_id, &self.signature]
            .iter()
            .all(|field| !field.trim().is_empty())
    }
}

#[derive(Debug, Error)]
pub enum PaymentError {
    #[error("payment confirmation is incomplete")]
    Incomplete,

    #[error("payment verification failed")]
    Rejected,

    #[error("payment gateway unavailable: {0}")]
    Unavailable(String),
}

#[automock]
#[async_trait]
pub trait PaymentVerifier: Send + Sync {
    /// Checks that a confirmation is authentic.
    async fn verify(&self, confirmation: &PaymentConfirmation) -> Result<(), PaymentError>;
}

/// Verifier that refuses every confirmation, for deployments without a configured gateway.
#[derive(Debug, Clone, Copy, Default)]
pub struct RejectAllVerifier;

#[async_trait]
impl PaymentVerifier for RejectAllVerifier {
    async fn verify(&self, confirmation: &PaymentConfirmation) -> Result<(), PaymentError> {
        if !confirmation.is_complete() {
            return Err(PaymentError::Incomplete);
        }

        Err(PaymentError::Rejected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn confirmation(signature: &str) -> PaymentConfirmation {
        PaymentConfirmation {
            order_id: "order_1".to_string(),
            payment_id: "pay_1".to_string(),
            signature: signature.to_string(),
        }
    }

    #[test]
    fn blank_fields_are_incomplete() {
        assert!(confirmation("abc").is_complete());
        assert!(!confirmation(" ").is_complete());
    }

    #[tokio::test]
    async fn reject_all_verifier_rejects() {
        let verifier = RejectAllVerifier;

        let incomplete = verifier.verify(&confirmation("")).await;
        let complete = verifier.verify(&confirmation("abc")).await;

        assert!(
            matches!(incomplete, Err(PaymentError::Incomplete)),
            "expected Incomplete, got {incomplete:?}"
        );
        assert!(
            matches!(complete, Err(PaymentError::Rejected)),
            "expected Rejected, got {complete:?}"
        );
    }
}
