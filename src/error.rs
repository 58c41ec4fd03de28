use thiserror::Error;

/// Problems with user input, detected before any wallet or network call.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Please fill in all required fields: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),
    #[error("Please connect your wallet first")]
    WalletNotConnected,
    #[error("Wallet signer is not available")]
    SignerUnavailable,
    #[error("Please upload an image file (got {0})")]
    NotAnImage(String),
    #[error("Image size must be less than 5MB (got {size} bytes, limit {max})")]
    ImageTooLarge { size: u64, max: u64 },
    #[error("Invalid address: {0}")]
    InvalidAddress(String),
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),
}

/// Errors reported by a wallet while signing or executing a transaction.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum WalletError {
    #[error("Insufficient balance to pay the fee")]
    InsufficientFunds,
    #[error("Transaction rejected by the user")]
    Rejected,
    #[error("Wallet is not connected")]
    Disconnected,
    #[error("{0}")]
    Other(String),
}

/// Classified outcome of a failed fee payment.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PaymentFailure {
    #[error("Wallet not connected")]
    NotConnected,
    #[error("Insufficient SUI balance. You need at least 1 SUI to create a proposal.")]
    InsufficientFunds,
    #[error("Transaction was rejected by user")]
    UserRejected,
    #[error("Payment failed: {0}")]
    Unknown(String),
}

impl PaymentFailure {
    /// Classifies a free-form wallet message by keyword, ignoring case.
    pub fn from_message(message: &str) -> Self {
        let lowered = message.to_lowercase();
        if lowered.contains("insufficient") {
            PaymentFailure::InsufficientFunds
        } else if lowered.contains("reject") {
            PaymentFailure::UserRejected
        } else {
            PaymentFailure::Unknown(message.to_string())
        }
    }
}

impl From<WalletError> for PaymentFailure {
    fn from(err: WalletError) -> Self {
        match err {
            WalletError::InsufficientFunds => PaymentFailure::InsufficientFunds,
            WalletError::Rejected => PaymentFailure::UserRejected,
            WalletError::Disconnected => PaymentFailure::NotConnected,
            WalletError::Other(message) => PaymentFailure::from_message(&message),
        }
    }
}

/// Failures talking to the proposal backend.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GatewayError {
    #[error("backend responded with status {status}: {body}")]
    Rejected { status: u16, body: String },
    #[error("backend unreachable: {0}")]
    Transport(String),
    #[error("could not encode proposal: {0}")]
    Encoding(String),
}

/// Everything a submission attempt can end with, other than success.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum WorkflowError {
    #[error("A submission is already in progress")]
    Busy,
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("Payment cancelled")]
    PaymentCancelled,
    #[error("Insufficient SUI balance. You need at least 1 SUI to create a proposal.")]
    InsufficientFunds,
    #[error("Transaction was rejected by user")]
    UserRejected,
    #[error("Payment failed: {0}")]
    PaymentUnknownFailure(String),
    #[error("Failed to submit proposal: {0}")]
    SubmissionFailure(String),
}

impl From<PaymentFailure> for WorkflowError {
    fn from(failure: PaymentFailure) -> Self {
        match failure {
            PaymentFailure::NotConnected => {
                WorkflowError::Validation(ValidationError::WalletNotConnected)
            }
            PaymentFailure::InsufficientFunds => WorkflowError::InsufficientFunds,
            PaymentFailure::UserRejected => WorkflowError::UserRejected,
            PaymentFailure::Unknown(message) => WorkflowError::PaymentUnknownFailure(message),
        }
    }
}

impl From<GatewayError> for WorkflowError {
    fn from(err: GatewayError) -> Self {
        WorkflowError::SubmissionFailure(err.to_string())
    }
}

/// Errors building a [`crate::config::DeskConfig`] or the adapters it configures.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("{0} environment variable not set")]
    MissingVar(&'static str),
    #[error("Invalid value for {name}: {value}")]
    InvalidValue { name: &'static str, value: String },
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("Failed to create HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, WorkflowError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_insufficient_any_case() {
        assert_eq!(
            PaymentFailure::from_message("InsufficientCoinBalance in command 0"),
            PaymentFailure::InsufficientFunds
        );
        assert_eq!(
            PaymentFailure::from_message("INSUFFICIENT gas"),
            PaymentFailure::InsufficientFunds
        );
    }

    #[test]
    fn test_classify_rejected() {
        assert_eq!(
            PaymentFailure::from_message("User Rejected the request"),
            PaymentFailure::UserRejected
        );
    }

    #[test]
    fn test_classify_unknown_keeps_message() {
        assert_eq!(
            PaymentFailure::from_message("network hiccup"),
            PaymentFailure::Unknown("network hiccup".to_string())
        );
    }

    #[test]
    fn test_insufficient_takes_precedence_over_reject() {
        assert_eq!(
            PaymentFailure::from_message("rejected: insufficient balance"),
            PaymentFailure::InsufficientFunds
        );
    }

    #[test]
    fn test_typed_wallet_errors_skip_heuristic() {
        assert_eq!(
            PaymentFailure::from(WalletError::Rejected),
            PaymentFailure::UserRejected
        );
        assert_eq!(
            PaymentFailure::from(WalletError::Disconnected),
            PaymentFailure::NotConnected
        );
        assert_eq!(
            PaymentFailure::from(WalletError::Other("Rejected by wallet".into())),
            PaymentFailure::UserRejected
        );
    }

    #[test]
    fn test_gateway_error_becomes_submission_failure() {
        let err: WorkflowError = GatewayError::Rejected {
            status: 500,
            body: "boom".into(),
        }
        .into();
        assert!(matches!(err, WorkflowError::SubmissionFailure(msg) if msg.contains("500")));
    }
}
