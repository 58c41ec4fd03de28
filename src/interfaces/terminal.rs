use crate::domain::ports::{ConfirmationPrompt, PaymentSummary, Presenter};
use crate::domain::workflow::{Notification, NotificationLevel};
use async_trait::async_trait;
use dialoguer::Confirm;
use tracing::warn;

/// Asks on the terminal before any fee is paid. Defaults to "no".
#[derive(Debug, Default, Clone)]
pub struct DialoguerConfirmation;

#[async_trait]
impl ConfirmationPrompt for DialoguerConfirmation {
    async fn confirm(&self, summary: &PaymentSummary) -> bool {
        let prompt = format!(
            "Creating a proposal requires a payment of {} to {}. Continue?",
            summary.amount, summary.receiver
        );
        let answer = tokio::task::spawn_blocking(move || {
            Confirm::new()
                .with_prompt(prompt)
                .default(false)
                .interact()
        })
        .await;

        match answer {
            Ok(Ok(confirmed)) => confirmed,
            Ok(Err(e)) => {
                warn!(error = %e, "confirmation prompt failed; treating as cancel");
                false
            }
            Err(e) => {
                warn!(error = %e, "confirmation task aborted; treating as cancel");
                false
            }
        }
    }
}

/// Prints notifications to stderr and the landing message to stdout.
#[derive(Debug, Default, Clone)]
pub struct TerminalPresenter;

impl TerminalPresenter {
    fn render(notification: &Notification) -> String {
        let tag = match notification.level {
            NotificationLevel::Info => "info",
            NotificationLevel::Success => "ok",
            NotificationLevel::Error => "error",
        };
        format!("[{}] {}", tag, notification.message)
    }
}

impl Presenter for TerminalPresenter {
    fn notify(&self, notification: Notification) {
        eprintln!("{}", Self::render(&notification));
    }

    fn navigate_to_landing(&self) {
        println!("Your proposal has been received. Returning to the home page.");
    }
}
