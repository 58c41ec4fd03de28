use crate::domain::payment::{Address, ExecutionResult, TransferRequest};
use crate::domain::ports::{
    ConfirmationPrompt, PaymentSummary, Presenter, ProposalGateway, WalletSigner,
};
use crate::domain::submission::SubmissionRequest;
use crate::domain::workflow::Notification;
use crate::error::{GatewayError, WalletError};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Mutex as StdMutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::sync::{Mutex, RwLock};

/// A wallet that replays scripted execution results and records every request.
///
/// Once the script runs out, further calls fail with a generic wallet error.
#[derive(Default)]
pub struct ScriptedSigner {
    connected: bool,
    address: Option<Address>,
    results: Mutex<VecDeque<Result<ExecutionResult, WalletError>>>,
    requests: RwLock<Vec<TransferRequest>>,
    account_queries: AtomicUsize,
}

impl ScriptedSigner {
    pub fn connected(address: Address) -> Self {
        Self {
            connected: true,
            address: Some(address),
            ..Self::default()
        }
    }

    pub fn disconnected() -> Self {
        Self::default()
    }

    pub fn with_result(mut self, result: Result<ExecutionResult, WalletError>) -> Self {
        self.results.get_mut().push_back(result);
        self
    }

    pub fn with_digest(self, digest: &str) -> Self {
        self.with_result(Ok(ExecutionResult {
            digest: digest.to_string(),
            events: Vec::new(),
        }))
    }

    pub async fn requests(&self) -> Vec<TransferRequest> {
        self.requests.read().await.clone()
    }

    /// How many times the connection state or address was asked for.
    pub fn account_queries(&self) -> usize {
        self.account_queries.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl WalletSigner for ScriptedSigner {
    async fn is_connected(&self) -> bool {
        self.account_queries.fetch_add(1, Ordering::SeqCst);
        self.connected
    }

    async fn address(&self) -> Option<Address> {
        self.account_queries.fetch_add(1, Ordering::SeqCst);
        self.address.clone()
    }

    async fn sign_and_execute(
        &self,
        request: TransferRequest,
    ) -> Result<ExecutionResult, WalletError> {
        self.requests.write().await.push(request);
        self.results
            .lock()
            .await
            .pop_front()
            .unwrap_or_else(|| Err(WalletError::Other("no scripted result".to_string())))
    }
}

/// A backend stand-in that records submissions and answers from a script.
///
/// With an empty script every submission is accepted.
#[derive(Default)]
pub struct RecordingGateway {
    responses: Mutex<VecDeque<Result<(), GatewayError>>>,
    submissions: RwLock<Vec<SubmissionRequest>>,
}

impl RecordingGateway {
    pub fn accepting() -> Self {
        Self::default()
    }

    pub fn with_response(mut self, response: Result<(), GatewayError>) -> Self {
        self.responses.get_mut().push_back(response);
        self
    }

    pub async fn submissions(&self) -> Vec<SubmissionRequest> {
        self.submissions.read().await.clone()
    }
}

#[async_trait]
impl ProposalGateway for RecordingGateway {
    async fn submit(&self, request: SubmissionRequest) -> Result<(), GatewayError> {
        self.submissions.write().await.push(request);
        self.responses.lock().await.pop_front().unwrap_or(Ok(()))
    }
}

/// Always gives the same answer and counts how often it was asked.
#[derive(Default)]
pub struct FixedConfirmation {
    answer: bool,
    asked: AtomicUsize,
}

impl FixedConfirmation {
    pub fn approve() -> Self {
        Self {
            answer: true,
            ..Self::default()
        }
    }

    pub fn decline() -> Self {
        Self::default()
    }

    pub fn times_asked(&self) -> usize {
        self.asked.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ConfirmationPrompt for FixedConfirmation {
    async fn confirm(&self, _summary: &PaymentSummary) -> bool {
        self.asked.fetch_add(1, Ordering::SeqCst);
        self.answer
    }
}

/// Keeps every notification and counts landing navigations.
#[derive(Default)]
pub struct RecordingPresenter {
    notifications: StdMutex<Vec<Notification>>,
    navigations: AtomicUsize,
}

impl RecordingPresenter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notifications(&self) -> Vec<Notification> {
        self.notifications
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    pub fn navigations(&self) -> usize {
        self.navigations.load(Ordering::SeqCst)
    }
}

impl Presenter for RecordingPresenter {
    fn notify(&self, notification: Notification) {
        self.notifications
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(notification);
    }

    fn navigate_to_landing(&self) {
        self.navigations.fetch_add(1, Ordering::SeqCst);
    }
}
