use crate::error::ValidationError;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Number of minor units (MIST) in one whole coin.
pub const MIST_PER_COIN: u64 = 1_000_000_000;

/// A positive amount expressed in minor units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Mist(u64);

impl Mist {
    /// The proposal fee: one whole coin.
    pub const ONE_COIN: Self = Self(MIST_PER_COIN);

    pub fn new(value: u64) -> Result<Self, ValidationError> {
        if value > 0 {
            Ok(Self(value))
        } else {
            Err(ValidationError::InvalidAmount(
                "Amount must be positive".to_string(),
            ))
        }
    }

    pub fn value(&self) -> u64 {
        self.0
    }

    /// The amount in whole coins, with trailing zeros stripped.
    pub fn as_coins(&self) -> Decimal {
        Decimal::from_i128_with_scale(self.0 as i128, 9).normalize()
    }
}

impl fmt::Display for Mist {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} SUI", self.as_coins())
    }
}

/// A `0x`-prefixed hexadecimal account address, stored in lowercase.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Address(String);

impl Address {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for Address {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let hex = trimmed
            .strip_prefix("0x")
            .or_else(|| trimmed.strip_prefix("0X"))
            .ok_or_else(|| ValidationError::InvalidAddress(s.to_string()))?;

        if hex.is_empty() || hex.len() > 64 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ValidationError::InvalidAddress(s.to_string()));
        }

        Ok(Self(format!("0x{}", hex.to_ascii_lowercase())))
    }
}

impl TryFrom<String> for Address {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Address> for String {
    fn from(address: Address) -> Self {
        address.0
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A single step of a programmable transfer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Command {
    /// Split `amount` off the gas coin, producing a new coin as the command's result.
    SplitGas { amount: Mist },
    /// Transfer the coin produced by command `result` to `recipient`.
    TransferObject { result: u16, recipient: Address },
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExecutionOptions {
    pub show_events: bool,
}

/// The transaction description handed to the wallet for signing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransferRequest {
    pub commands: Vec<Command>,
    pub options: ExecutionOptions,
}

impl TransferRequest {
    /// Splits `amount` from the payer's gas coin and sends it to `recipient`.
    pub fn pay(amount: Mist, recipient: Address) -> Self {
        Self {
            commands: vec![
                Command::SplitGas { amount },
                Command::TransferObject {
                    result: 0,
                    recipient,
                },
            ],
            options: ExecutionOptions { show_events: true },
        }
    }
}

/// What the wallet reports back after executing a transaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExecutionResult {
    pub digest: String,
    #[serde(default)]
    pub events: Vec<serde_json::Value>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    Succeeded,
}

/// Proof of a successful fee payment. Fields are private so a receipt can only
/// come out of [`PaymentReceipt::succeeded`].
#[derive(Debug, Clone, PartialEq)]
pub struct PaymentReceipt {
    digest: String,
    status: PaymentStatus,
    amount: Mist,
    receiver: Address,
}

impl PaymentReceipt {
    pub(crate) fn succeeded(digest: String, amount: Mist, receiver: Address) -> Self {
        Self {
            digest,
            status: PaymentStatus::Succeeded,
            amount,
            receiver,
        }
    }

    pub fn digest(&self) -> &str {
        &self.digest
    }

    pub fn status(&self) -> PaymentStatus {
        self.status
    }

    pub fn amount(&self) -> Mist {
        self.amount
    }

    pub fn receiver(&self) -> &Address {
        &self.receiver
    }
}
