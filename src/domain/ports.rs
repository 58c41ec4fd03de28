use super::payment::{Address, ExecutionResult, Mist, TransferRequest};
use super::submission::SubmissionRequest;
use super::workflow::Notification;
use crate::error::{GatewayError, WalletError};
use async_trait::async_trait;
use std::sync::Arc;

/// A connected wallet able to sign and execute transactions for its account.
#[async_trait]
pub trait WalletSigner: Send + Sync {
    async fn is_connected(&self) -> bool;
    async fn address(&self) -> Option<Address>;
    async fn sign_and_execute(&self, request: TransferRequest) -> Result<ExecutionResult, WalletError>;
}

/// The backend endpoint that ingests paid proposals.
#[async_trait]
pub trait ProposalGateway: Send + Sync {
    async fn submit(&self, request: SubmissionRequest) -> Result<(), GatewayError>;
}

/// What the user is asked to approve before any payment is made.
#[derive(Debug, Clone, PartialEq)]
pub struct PaymentSummary {
    pub amount: Mist,
    pub receiver: Address,
}

/// An explicit yes/no gate that resolves before the payment step runs.
#[async_trait]
pub trait ConfirmationPrompt: Send + Sync {
    async fn confirm(&self, summary: &PaymentSummary) -> bool;
}

/// Notification and navigation surface.
pub trait Presenter: Send + Sync {
    fn notify(&self, notification: Notification);
    fn navigate_to_landing(&self);
}

#[async_trait]
impl<T: WalletSigner + ?Sized> WalletSigner for Arc<T> {
    async fn is_connected(&self) -> bool {
        (**self).is_connected().await
    }

    async fn address(&self) -> Option<Address> {
        (**self).address().await
    }

    async fn sign_and_execute(&self, request: TransferRequest) -> Result<ExecutionResult, WalletError> {
        (**self).sign_and_execute(request).await
    }
}

#[async_trait]
impl<T: ProposalGateway + ?Sized> ProposalGateway for Arc<T> {
    async fn submit(&self, request: SubmissionRequest) -> Result<(), GatewayError> {
        (**self).submit(request).await
    }
}

#[async_trait]
impl<T: ConfirmationPrompt + ?Sized> ConfirmationPrompt for Arc<T> {
    async fn confirm(&self, summary: &PaymentSummary) -> bool {
        (**self).confirm(summary).await
    }
}

impl<T: Presenter + ?Sized> Presenter for Arc<T> {
    fn notify(&self, notification: Notification) {
        (**self).notify(notification)
    }

    fn navigate_to_landing(&self) {
        (**self).navigate_to_landing()
    }
}

pub type WalletSignerBox = Box<dyn WalletSigner>;
pub type ProposalGatewayBox = Box<dyn ProposalGateway>;
pub type ConfirmationPromptBox = Box<dyn ConfirmationPrompt>;
pub type PresenterBox = Box<dyn Presenter>;
