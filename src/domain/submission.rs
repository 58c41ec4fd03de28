use super::draft::{ProfileImage, ProposalDraft};
use super::payment::{Address, PaymentReceipt};

/// The outbound proposal, built from a draft and the receipt of its fee payment.
///
/// There is no way to build one without a [`PaymentReceipt`], and receipts only
/// exist for payments that succeeded. Fields are private, so a struct literal
/// does not compile outside this module:
///
/// ```compile_fail
/// use proposal_desk::domain::submission::SubmissionRequest;
///
/// let unpaid = SubmissionRequest {
///     name: "Bot".to_string(),
///     twitter: "@bot".to_string(),
///     website: String::new(),
///     description: "desc".to_string(),
///     creator_wallet: "0x1".parse().unwrap(),
///     payment_tx: "never-paid".to_string(),
///     profile_picture: None,
/// };
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SubmissionRequest {
    name: String,
    twitter: String,
    website: String,
    description: String,
    creator_wallet: Address,
    payment_tx: String,
    profile_picture: Option<ProfileImage>,
}

impl SubmissionRequest {
    pub fn new(draft: &ProposalDraft, sender: Address, receipt: PaymentReceipt) -> Self {
        Self {
            name: draft.name.trim().to_string(),
            twitter: draft.handle.trim().to_string(),
            website: draft.website.trim().to_string(),
            description: draft.description.trim().to_string(),
            creator_wallet: sender,
            payment_tx: receipt.digest().to_string(),
            profile_picture: draft.profile_image().cloned(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn twitter(&self) -> &str {
        &self.twitter
    }

    pub fn website(&self) -> &str {
        &self.website
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn creator_wallet(&self) -> &Address {
        &self.creator_wallet
    }

    /// Digest of the fee payment this proposal was paid with.
    pub fn payment_tx(&self) -> &str {
        &self.payment_tx
    }

    pub fn profile_picture(&self) -> Option<&ProfileImage> {
        self.profile_picture.as_ref()
    }

    pub fn into_profile_picture(self) -> Option<ProfileImage> {
        self.profile_picture
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::payment::Mist;

    #[test]
    fn test_request_carries_draft_and_receipt() {
        let mut draft = ProposalDraft {
            name: " Bot ".to_string(),
            handle: "@bot".to_string(),
            website: String::new(),
            description: "desc".to_string(),
            ..Default::default()
        };
        let image = ProfileImage::new("a.png", "image/png", vec![7]);
        draft.attach_image(image.clone(), 10).unwrap();

        let receipt = PaymentReceipt::succeeded(
            "0xabc".to_string(),
            Mist::ONE_COIN,
            "0x1".parse().unwrap(),
        );
        let request = SubmissionRequest::new(&draft, "0x2".parse().unwrap(), receipt);

        assert_eq!(request.name(), "Bot");
        assert_eq!(request.twitter(), "@bot");
        assert_eq!(request.website(), "");
        assert_eq!(request.creator_wallet().as_str(), "0x2");
        assert_eq!(request.payment_tx(), "0xabc");
        assert_eq!(request.into_profile_picture(), Some(image));
    }
}
