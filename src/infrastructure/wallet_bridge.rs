//! Wallet access through a local signing bridge.
//!
//! The bridge holds the user's keys and exposes two routes:
//! `GET /account` reporting the connected account, and `POST /sign-and-execute`
//! which signs, executes and returns `{digest, events}`. Failures come back as
//! `{code, message}` with `code` one of `insufficient_funds`, `rejected`,
//! `disconnected`, or anything else.

use crate::domain::payment::{Address, ExecutionResult, TransferRequest};
use crate::domain::ports::WalletSigner;
use crate::error::{ConfigError, WalletError};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;

#[derive(Debug, Deserialize)]
struct AccountResponse {
    #[serde(default)]
    connected: bool,
    #[serde(default)]
    address: Option<String>,
}

#[derive(Debug, Deserialize)]
struct BridgeError {
    #[serde(default)]
    code: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

impl From<BridgeError> for WalletError {
    fn from(err: BridgeError) -> Self {
        match err.code.as_deref() {
            Some("insufficient_funds") => WalletError::InsufficientFunds,
            Some("rejected") => WalletError::Rejected,
            Some("disconnected") => WalletError::Disconnected,
            _ => WalletError::Other(
                err.message
                    .or(err.code)
                    .unwrap_or_else(|| "Unknown wallet error".to_string()),
            ),
        }
    }
}

#[derive(Debug, Clone)]
pub struct HttpWalletSigner {
    base_url: Url,
    client: Client,
}

impl HttpWalletSigner {
    pub fn new(base_url: Url, timeout_secs: u64) -> Result<Self, ConfigError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()?;
        Ok(Self { base_url, client })
    }

    fn route(&self, path: &str) -> Result<Url, url::ParseError> {
        let mut base = self.base_url.clone();
        if !base.path().ends_with('/') {
            let with_slash = format!("{}/", base.path());
            base.set_path(&with_slash);
        }
        base.join(path)
    }

    async fn account(&self) -> Option<AccountResponse> {
        let url = self.route("account").ok()?;
        let response = match self.client.get(url).send().await {
            Ok(response) if response.status().is_success() => response,
            Ok(response) => {
                warn!(status = response.status().as_u16(), "wallet bridge refused account query");
                return None;
            }
            Err(e) => {
                warn!(error = %e, "wallet bridge unreachable");
                return None;
            }
        };
        response.json().await.ok()
    }
}

#[async_trait]
impl WalletSigner for HttpWalletSigner {
    async fn is_connected(&self) -> bool {
        self.account().await.is_some_and(|account| account.connected)
    }

    async fn address(&self) -> Option<Address> {
        let account = self.account().await?;
        if !account.connected {
            return None;
        }
        account.address?.parse().ok()
    }

    async fn sign_and_execute(
        &self,
        request: TransferRequest,
    ) -> Result<ExecutionResult, WalletError> {
        let url = self
            .route("sign-and-execute")
            .map_err(|e| WalletError::Other(e.to_string()))?;
        debug!(%url, "forwarding transaction to wallet bridge");

        let response = self
            .client
            .post(url)
            .json(&request)
            .send()
            .await
            .map_err(|e| WalletError::Other(format!("Wallet bridge unreachable: {}", e)))?;

        if response.status().is_success() {
            response
                .json::<ExecutionResult>()
                .await
                .map_err(|e| WalletError::Other(format!("Malformed wallet response: {}", e)))
        } else {
            let status = response.status().as_u16();
            let text = response.text().await.unwrap_or_default();
            match serde_json::from_str::<BridgeError>(&text) {
                Ok(err) => Err(err.into()),
                Err(_) if text.is_empty() => {
                    Err(WalletError::Other(format!("Wallet bridge error ({})", status)))
                }
                Err(_) => Err(WalletError::Other(text)),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::payment::Mist;
    use mockito::Matcher;

    fn signer(url: &str) -> HttpWalletSigner {
        HttpWalletSigner::new(Url::parse(url).unwrap(), 2).unwrap()
    }

    fn transfer() -> TransferRequest {
        TransferRequest::pay(Mist::ONE_COIN, "0x42".parse().unwrap())
    }

    #[tokio::test]
    async fn test_account_reports_connection_and_address() {
        let mut server = mockito::Server::new_async().await;
        let _m = server
            .mock("GET", "/account")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"connected": true, "address": "0x5E4D"}"#)
            .create_async()
            .await;

        let signer = signer(&server.url());
        assert!(signer.is_connected().await);
        assert_eq!(signer.address().await.unwrap().as_str(), "0x5e4d");
    }

    #[tokio::test]
    async fn test_unreachable_bridge_is_disconnected() {
        let signer = signer("http://127.0.0.1:9");
        assert!(!signer.is_connected().await);
        assert!(signer.address().await.is_none());
    }

    #[tokio::test]
    async fn test_sign_and_execute_success() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/sign-and-execute")
            .match_body(Matcher::PartialJson(serde_json::json!({
                "options": {"show_events": true}
            })))
            .with_status(200)
            .with_body(r#"{"digest": "0xabc", "events": [{"type": "transfer"}]}"#)
            .create_async()
            .await;

        let result = signer(&server.url()).sign_and_execute(transfer()).await.unwrap();

        assert_eq!(result.digest, "0xabc");
        assert_eq!(result.events.len(), 1);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_typed_bridge_errors() {
        let mut server = mockito::Server::new_async().await;
        let _m = server
            .mock("POST", "/sign-and-execute")
            .with_status(400)
            .with_body(r#"{"code": "rejected", "message": "User said no"}"#)
            .create_async()
            .await;

        let result = signer(&server.url()).sign_and_execute(transfer()).await;
        assert_eq!(result, Err(WalletError::Rejected));
    }

    #[tokio::test]
    async fn test_free_form_bridge_error_keeps_message() {
        let mut server = mockito::Server::new_async().await;
        let _m = server
            .mock("POST", "/sign-and-execute")
            .with_status(500)
            .with_body("InsufficientCoinBalance")
            .create_async()
            .await;

        let result = signer(&server.url()).sign_and_execute(transfer()).await;
        assert_eq!(
            result,
            Err(WalletError::Other("InsufficientCoinBalance".to_string()))
        );
    }
}
