use crate::config::DeskConfig;
use crate::domain::payment::{Address, Mist, PaymentReceipt, TransferRequest};
use crate::domain::ports::{PaymentSummary, WalletSigner};
use crate::error::PaymentFailure;
use tracing::{debug, info, warn};

/// Pays the fixed proposal fee through a wallet signer.
///
/// Each call is exactly one sign-and-execute attempt; nothing is retried here.
#[derive(Debug, Clone)]
pub struct PaymentInitiator {
    amount: Mist,
    receiver: Address,
}

impl PaymentInitiator {
    pub fn new(amount: Mist, receiver: Address) -> Self {
        Self { amount, receiver }
    }

    pub fn from_config(config: &DeskConfig) -> Self {
        Self::new(config.amount, config.receiver.clone())
    }

    pub fn summary(&self) -> PaymentSummary {
        PaymentSummary {
            amount: self.amount,
            receiver: self.receiver.clone(),
        }
    }

    /// Transfers the fee to the receiver and returns the resulting receipt.
    ///
    /// Typed wallet errors are mapped directly; free-form messages are classified
    /// by keyword.
    pub async fn initiate_payment(
        &self,
        signer: Option<&dyn WalletSigner>,
    ) -> Result<PaymentReceipt, PaymentFailure> {
        let signer = signer.ok_or(PaymentFailure::NotConnected)?;

        let request = TransferRequest::pay(self.amount, self.receiver.clone());
        debug!(amount = self.amount.value(), receiver = %self.receiver, "requesting signature");

        match signer.sign_and_execute(request).await {
            Ok(result) => {
                info!(
                    digest = %result.digest,
                    events = result.events.len(),
                    "payment executed"
                );
                Ok(PaymentReceipt::succeeded(
                    result.digest,
                    self.amount,
                    self.receiver.clone(),
                ))
            }
            Err(e) => {
                let failure = PaymentFailure::from(e);
                warn!(error = %failure, "payment failed");
                Err(failure)
            }
        }
    }
}
