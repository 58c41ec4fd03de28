//! Proposal backend client using reqwest.

use crate::config::DeskConfig;
use crate::domain::ports::ProposalGateway;
use crate::domain::submission::SubmissionRequest;
use crate::error::{ConfigError, GatewayError};
use async_trait::async_trait;
use reqwest::Client;
use reqwest::multipart::{Form, Part};
use std::time::Duration;
use tracing::debug;
use url::Url;

/// Posts paid proposals to `{backend}/api/proposals` as multipart form data.
///
/// Any 2xx status counts as acceptance; the response body is never parsed.
#[derive(Debug, Clone)]
pub struct HttpProposalGateway {
    endpoint: Url,
    client: Client,
}

impl HttpProposalGateway {
    pub fn new(config: &DeskConfig) -> Result<Self, ConfigError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        Ok(Self {
            endpoint: config.proposals_endpoint()?,
            client,
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    fn form(request: SubmissionRequest) -> Result<Form, GatewayError> {
        let mut form = Form::new()
            .text("name", request.name().to_string())
            .text("twitter", request.twitter().to_string())
            .text("website", request.website().to_string())
            .text("description", request.description().to_string())
            .text("creator_wallet", request.creator_wallet().to_string())
            .text("payment_tx", request.payment_tx().to_string());

        if let Some(image) = request.into_profile_picture() {
            let part = Part::bytes(image.bytes)
                .file_name(image.file_name)
                .mime_str(&image.mime_type)
                .map_err(|e| GatewayError::Encoding(format!("invalid image type: {}", e)))?;
            form = form.part("profilePicture", part);
        }

        Ok(form)
    }
}

#[async_trait]
impl ProposalGateway for HttpProposalGateway {
    async fn submit(&self, request: SubmissionRequest) -> Result<(), GatewayError> {
        debug!(endpoint = %self.endpoint, payment_tx = request.payment_tx(), "posting proposal");
        let form = Self::form(request)?;

        let response = self
            .client
            .post(self.endpoint.clone())
            .multipart(form)
            .send()
            .await
            .map_err(|e| GatewayError::Transport(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            let body = response.text().await.unwrap_or_default();
            Err(GatewayError::Rejected {
                status: status.as_u16(),
                body,
            })
        }
    }
}
