use crate::application::payment::PaymentInitiator;
use crate::config::DeskConfig;
use crate::domain::draft::{ProfileImage, ProposalDraft};
use crate::domain::payment::Address;
use crate::domain::ports::{
    ConfirmationPromptBox, PresenterBox, ProposalGatewayBox, WalletSignerBox,
};
use crate::domain::submission::SubmissionRequest;
use crate::domain::workflow::{Notification, WorkflowState};
use crate::error::{Result, ValidationError, WorkflowError};
use tokio::sync::RwLock;
use tracing::{info, warn};

/// Drives one proposal from the filled-in draft to the backend.
///
/// An attempt runs `Idle -> AwaitingConfirmation -> ProcessingPayment ->
/// SubmittingProposal -> Idle`. Any failure drops straight back to `Idle` with
/// the draft untouched; only a successful submission clears it. Payment and
/// submission are strictly sequential and a submission is only ever built from
/// the receipt of the payment made in the same attempt.
pub struct SubmissionWorkflow {
    payments: PaymentInitiator,
    max_image_bytes: u64,
    signer: Option<WalletSignerBox>,
    gateway: ProposalGatewayBox,
    prompt: ConfirmationPromptBox,
    presenter: PresenterBox,
    draft: RwLock<ProposalDraft>,
    state: RwLock<WorkflowState>,
}

impl SubmissionWorkflow {
    pub fn new(
        config: &DeskConfig,
        signer: Option<WalletSignerBox>,
        gateway: ProposalGatewayBox,
        prompt: ConfirmationPromptBox,
        presenter: PresenterBox,
    ) -> Self {
        Self {
            payments: PaymentInitiator::from_config(config),
            max_image_bytes: config.max_image_bytes,
            signer,
            gateway,
            prompt,
            presenter,
            draft: RwLock::new(ProposalDraft::new()),
            state: RwLock::new(WorkflowState::Idle),
        }
    }

    pub async fn state(&self) -> WorkflowState {
        *self.state.read().await
    }

    /// Whether the submit control should accept a click right now.
    pub async fn can_submit(&self) -> bool {
        !self.state().await.is_busy()
    }

    pub async fn draft(&self) -> ProposalDraft {
        self.draft.read().await.clone()
    }

    pub async fn edit_draft(&self, edit: impl FnOnce(&mut ProposalDraft)) {
        edit(&mut *self.draft.write().await);
    }

    /// Attaches a profile image, keeping the current one if `image` is rejected.
    pub async fn select_image(&self, image: ProfileImage) -> std::result::Result<(), ValidationError> {
        let result = self
            .draft
            .write()
            .await
            .attach_image(image, self.max_image_bytes);
        if let Err(e) = &result {
            warn!(error = %e, "image rejected");
            self.presenter.notify(Notification::error(e.to_string()));
        }
        result
    }

    /// Runs one full attempt: validate, confirm, pay, submit.
    ///
    /// Every outcome except [`WorkflowError::Busy`] is reported through the
    /// presenter exactly once before being returned.
    pub async fn submit(&self) -> Result<()> {
        let (draft, sender) = self.begin().await?;

        let outcome = self.run_attempt(&draft, sender).await;

        *self.state.write().await = WorkflowState::Idle;
        match &outcome {
            Ok(()) => {
                self.draft.write().await.reset();
                info!("proposal submitted");
                self.presenter
                    .notify(Notification::success("Proposal submitted successfully!"));
                self.presenter.navigate_to_landing();
            }
            Err(WorkflowError::PaymentCancelled) => {
                info!("payment cancelled by user");
                self.presenter.notify(Notification::info("Payment cancelled"));
            }
            Err(e) => {
                warn!(error = %e, "submission attempt failed");
                self.presenter.notify(Notification::error(e.to_string()));
            }
        }
        outcome
    }

    /// Claims the workflow, checks the preconditions and moves to
    /// `AwaitingConfirmation`.
    ///
    /// The state is claimed before any wallet query and the lock is not held
    /// while the wallet answers. A failed check hands the state back to `Idle`.
    async fn begin(&self) -> Result<(ProposalDraft, Address)> {
        {
            let mut state = self.state.write().await;
            if state.is_busy() {
                return Err(WorkflowError::Busy);
            }
            *state = WorkflowState::AwaitingConfirmation;
        }

        match self.check_preconditions().await {
            Ok(ready) => {
                info!(state = %WorkflowState::AwaitingConfirmation, "transition");
                Ok(ready)
            }
            Err(e) => {
                *self.state.write().await = WorkflowState::Idle;
                warn!(error = %e, "submission blocked");
                self.presenter.notify(Notification::error(e.to_string()));
                Err(e.into())
            }
        }
    }

    /// Local checks run first so an incomplete draft never reaches the wallet.
    async fn check_preconditions(&self) -> std::result::Result<(ProposalDraft, Address), ValidationError> {
        let signer = self
            .signer
            .as_deref()
            .ok_or(ValidationError::SignerUnavailable)?;
        let draft = self.draft.read().await.clone();
        draft.validate()?;

        if !signer.is_connected().await {
            return Err(ValidationError::WalletNotConnected);
        }
        let sender = signer
            .address()
            .await
            .ok_or(ValidationError::WalletNotConnected)?;
        Ok((draft, sender))
    }

    async fn run_attempt(&self, draft: &ProposalDraft, sender: Address) -> Result<()> {
        if !self.prompt.confirm(&self.payments.summary()).await {
            return Err(WorkflowError::PaymentCancelled);
        }

        self.transition(WorkflowState::ProcessingPayment).await;
        self.presenter.notify(Notification::info("Processing payment..."));
        let receipt = self
            .payments
            .initiate_payment(self.signer.as_deref())
            .await?;
        info!(digest = receipt.digest(), status = ?receipt.status(), "payment confirmed");

        self.transition(WorkflowState::SubmittingProposal).await;
        self.presenter.notify(Notification::info(
            "Payment successful! Submitting proposal...",
        ));
        let request = SubmissionRequest::new(draft, sender, receipt);
        self.gateway.submit(request).await?;
        Ok(())
    }

    async fn transition(&self, next: WorkflowState) {
        *self.state.write().await = next;
        info!(state = %next, "transition");
    }
}
