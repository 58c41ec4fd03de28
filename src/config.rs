use crate::domain::draft::MAX_IMAGE_BYTES;
use crate::domain::payment::{Address, Mist};
use crate::error::ConfigError;
use url::Url;

/// Address that receives proposal fees.
pub const DEFAULT_RECEIVER: &str =
    "0x7b8e0864967427679b4e129f79dc332a885c6087ec9e187b53451a9006ee15f2";

pub const DEFAULT_BACKEND_URL: &str = "http://localhost:3000";

const PROPOSALS_PATH: &str = "api/proposals";

/// Settings shared by the payment and submission steps.
#[derive(Debug, Clone, PartialEq)]
pub struct DeskConfig {
    pub backend_url: Url,
    pub receiver: Address,
    pub amount: Mist,
    pub max_image_bytes: u64,
    pub request_timeout_secs: u64,
}

impl Default for DeskConfig {
    fn default() -> Self {
        Self {
            backend_url: Url::parse(DEFAULT_BACKEND_URL).expect("default backend URL is valid"),
            receiver: DEFAULT_RECEIVER
                .parse()
                .expect("default receiver address is valid"),
            amount: Mist::ONE_COIN,
            max_image_bytes: MAX_IMAGE_BYTES,
            request_timeout_secs: 30,
        }
    }
}

impl DeskConfig {
    /// Builds a config from `BACKEND_URL` plus the optional `PROPOSAL_RECEIVER`,
    /// `PROPOSAL_FEE_MIST` and `PROPOSAL_HTTP_TIMEOUT_SECS` overrides.
    ///
    /// An explicit `backend_url` wins over `BACKEND_URL`, which then becomes
    /// optional.
    pub fn from_env(backend_url: Option<Url>) -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok(), backend_url)
    }

    fn from_lookup(
        lookup: impl Fn(&str) -> Option<String>,
        backend_url: Option<Url>,
    ) -> Result<Self, ConfigError> {
        let backend_url = match backend_url {
            Some(url) => url,
            None => {
                let raw = lookup("BACKEND_URL").ok_or(ConfigError::MissingVar("BACKEND_URL"))?;
                Url::parse(&raw)?
            }
        };
        let mut config = Self {
            backend_url,
            ..Self::default()
        };

        if let Some(receiver) = lookup("PROPOSAL_RECEIVER") {
            config.receiver = receiver.parse()?;
        }
        if let Some(fee) = lookup("PROPOSAL_FEE_MIST") {
            config.amount = fee
                .parse::<u64>()
                .ok()
                .and_then(|v| Mist::new(v).ok())
                .ok_or(ConfigError::InvalidValue {
                    name: "PROPOSAL_FEE_MIST",
                    value: fee,
                })?;
        }
        if let Some(timeout) = lookup("PROPOSAL_HTTP_TIMEOUT_SECS") {
            config.request_timeout_secs =
                timeout.parse().map_err(|_| ConfigError::InvalidValue {
                    name: "PROPOSAL_HTTP_TIMEOUT_SECS",
                    value: timeout,
                })?;
        }

        Ok(config)
    }

    /// `{backend_url}/api/proposals`, regardless of a trailing slash on the base.
    pub fn proposals_endpoint(&self) -> Result<Url, ConfigError> {
        let mut base = self.backend_url.clone();
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        Ok(base.join(PROPOSALS_PATH)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_defaults_carry_fixed_fee() {
        let config = DeskConfig::default();
        assert_eq!(config.amount.value(), 1_000_000_000);
        assert_eq!(config.receiver.as_str(), DEFAULT_RECEIVER);
        assert_eq!(config.max_image_bytes, 5 * 1024 * 1024);
    }

    #[test]
    fn test_from_env_requires_backend_url() {
        let result = DeskConfig::from_lookup(lookup(&[]), None);
        assert!(matches!(result, Err(ConfigError::MissingVar("BACKEND_URL"))));
    }

    #[test]
    fn test_from_env_overrides() {
        let config = DeskConfig::from_lookup(
            lookup(&[
                ("BACKEND_URL", "https://api.example.com"),
                ("PROPOSAL_RECEIVER", "0xBEEF"),
                ("PROPOSAL_FEE_MIST", "42"),
                ("PROPOSAL_HTTP_TIMEOUT_SECS", "5"),
            ]),
            None,
        )
        .unwrap();

        assert_eq!(config.backend_url.as_str(), "https://api.example.com/");
        assert_eq!(config.receiver.as_str(), "0xbeef");
        assert_eq!(config.amount.value(), 42);
        assert_eq!(config.request_timeout_secs, 5);
    }

    #[test]
    fn test_from_env_rejects_zero_fee() {
        let result = DeskConfig::from_lookup(
            lookup(&[
                ("BACKEND_URL", "https://api.example.com"),
                ("PROPOSAL_FEE_MIST", "0"),
            ]),
            None,
        );
        assert!(matches!(result, Err(ConfigError::InvalidValue { .. })));
    }

    #[test]
    fn test_explicit_backend_makes_env_optional() {
        let url = Url::parse("http://127.0.0.1:8080").unwrap();
        let config = DeskConfig::from_lookup(lookup(&[]), Some(url.clone())).unwrap();
        assert_eq!(config.backend_url, url);
    }

    #[test]
    fn test_proposals_endpoint_with_and_without_slash() {
        let mut config = DeskConfig {
            backend_url: Url::parse("https://api.example.com/v1").unwrap(),
            ..DeskConfig::default()
        };
        assert_eq!(
            config.proposals_endpoint().unwrap().as_str(),
            "https://api.example.com/v1/api/proposals"
        );

        config.backend_url = Url::parse("https://api.example.com/v1/").unwrap();
        assert_eq!(
            config.proposals_endpoint().unwrap().as_str(),
            "https://api.example.com/v1/api/proposals"
        );
    }
}
