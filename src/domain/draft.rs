use crate::error::ValidationError;
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use mime::Mime;

/// Largest profile image accepted, in bytes (5 MiB).
pub const MAX_IMAGE_BYTES: u64 = 5 * 1024 * 1024;

/// A profile picture selected by the user.
///
/// Only the original bytes are ever sent to the backend; the data URL returned by
/// [`ProfileImage::preview_data_url`] exists purely for local display.
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileImage {
    pub file_name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

impl ProfileImage {
    pub fn new(file_name: impl Into<String>, mime_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            mime_type: mime_type.into(),
            bytes,
        }
    }

    pub(crate) fn len(&self) -> u64 {
        self.bytes.len() as u64
    }

    pub fn preview_data_url(&self) -> String {
        format!("data:{};base64,{}", self.mime_type, STANDARD.encode(&self.bytes))
    }

    /// Checks the MIME type parses as `image/*` and the size is within `max_bytes`.
    pub fn check(&self, max_bytes: u64) -> Result<(), ValidationError> {
        let parsed: Mime = self
            .mime_type
            .parse()
            .map_err(|_| ValidationError::NotAnImage(self.mime_type.clone()))?;
        if parsed.type_() != mime::IMAGE {
            return Err(ValidationError::NotAnImage(self.mime_type.clone()));
        }
        if self.len() > max_bytes {
            return Err(ValidationError::ImageTooLarge {
                size: self.len(),
                max: max_bytes,
            });
        }
        Ok(())
    }
}

/// The user-editable proposal form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProposalDraft {
    pub name: String,
    /// Social handle, sent to the backend as `twitter`.
    pub handle: String,
    pub website: String,
    pub description: String,
    pub(crate) profile_image: Option<ProfileImage>,
}

impl ProposalDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn profile_image(&self) -> Option<&ProfileImage> {
        self.profile_image.as_ref()
    }

    /// Attaches `image` if it is an `image/*` of at most `max_bytes`.
    ///
    /// On rejection the previously attached image (if any) is kept.
    pub fn attach_image(&mut self, image: ProfileImage, max_bytes: u64) -> Result<(), ValidationError> {
        image.check(max_bytes)?;
        self.profile_image = Some(image);
        Ok(())
    }

    /// Checks that name, handle and description are filled in.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let missing: Vec<&'static str> = [
            ("name", &self.name),
            ("handle", &self.handle),
            ("description", &self.description),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(field, _)| field)
        .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(ValidationError::MissingFields(missing))
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ProposalDraft {
        ProposalDraft {
            name: "Bot".to_string(),
            handle: "@bot".to_string(),
            description: "desc".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_validate_accepts_required_fields() {
        assert!(filled().validate().is_ok());
    }

    #[test]
    fn test_validate_reports_every_missing_field() {
        let draft = ProposalDraft {
            name: "  ".to_string(),
            ..Default::default()
        };

        match draft.validate() {
            Err(ValidationError::MissingFields(fields)) => {
                assert_eq!(fields, vec!["name", "handle", "description"]);
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_website_is_optional() {
        let mut draft = filled();
        draft.website.clear();
        assert!(draft.validate().is_ok());
    }

    #[test]
    fn test_attach_image_rejects_non_image_and_keeps_previous() {
        let mut draft = filled();
        let logo = ProfileImage::new("logo.png", "image/png", vec![1, 2, 3]);
        draft.attach_image(logo.clone(), MAX_IMAGE_BYTES).unwrap();

        let pdf = ProfileImage::new("doc.pdf", "application/pdf", vec![0; 10]);
        let result = draft.attach_image(pdf, MAX_IMAGE_BYTES);

        assert!(matches!(result, Err(ValidationError::NotAnImage(_))));
        assert_eq!(draft.profile_image(), Some(&logo));
    }

    #[test]
    fn test_attach_image_rejects_malformed_mime() {
        let mut draft = filled();
        for mime_type in ["image/png\n", "image", "text/plain; image/png"] {
            let odd = ProfileImage::new("a.png", mime_type, vec![1]);
            let result = draft.attach_image(odd, MAX_IMAGE_BYTES);
            assert!(
                matches!(result, Err(ValidationError::NotAnImage(_))),
                "{:?} should be refused",
                mime_type
            );
        }
        assert!(draft.profile_image().is_none());
    }

    #[test]
    fn test_attach_image_accepts_parameters() {
        let mut draft = filled();
        let svg = ProfileImage::new("a.svg", "image/svg+xml; charset=utf-8", vec![1]);
        assert!(draft.attach_image(svg, MAX_IMAGE_BYTES).is_ok());
    }

    #[test]
    fn test_attach_image_rejects_oversized() {
        let mut draft = filled();
        let big = ProfileImage::new("big.png", "image/png", vec![0; MAX_IMAGE_BYTES as usize + 1]);

        let result = draft.attach_image(big, MAX_IMAGE_BYTES);

        assert!(matches!(result, Err(ValidationError::ImageTooLarge { .. })));
        assert!(draft.profile_image().is_none());
    }

    #[test]
    fn test_attach_image_accepts_exact_limit() {
        let mut draft = filled();
        let edge = ProfileImage::new("edge.png", "image/png", vec![0; 16]);
        assert!(draft.attach_image(edge, 16).is_ok());
    }

    #[test]
    fn test_preview_data_url() {
        let image = ProfileImage::new("a.gif", "image/gif", b"GIF".to_vec());
        assert_eq!(image.preview_data_url(), "data:image/gif;base64,R0lG");
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut draft = filled();
        draft
            .attach_image(ProfileImage::new("a.png", "image/png", vec![1]), MAX_IMAGE_BYTES)
            .unwrap();

        draft.reset();

        assert_eq!(draft, ProposalDraft::new());
    }
}
