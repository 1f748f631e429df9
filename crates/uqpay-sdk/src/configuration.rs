/*
[INPUT]:  Client id, API key and target environment
[OUTPUT]: Validated SDK configuration consumed by ApiClient
[POS]:    Configuration layer - environments and credentials wiring
[UPDATE]: When adding environments or connection options
*/

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::http::{ClientConfig, Credentials, UqpayError};

const SANDBOX_BASE_URL: &str = "https://api-sandbox.uqpaytech.com/api";
const SANDBOX_FILES_BASE_URL: &str = "https://files.uqpaytech.com/api";
const PRODUCTION_BASE_URL: &str = "https://api.uqpay.com/api";
const PRODUCTION_FILES_BASE_URL: &str = "https://files.uqpay.com/api";

/// Pair of base URLs for the main API and the file-storage API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Environment {
    pub base_url: String,
    pub files_base_url: String,
}

impl Environment {
    pub fn sandbox() -> Self {
        Self::custom(SANDBOX_BASE_URL, SANDBOX_FILES_BASE_URL)
    }

    pub fn production() -> Self {
        Self::custom(PRODUCTION_BASE_URL, PRODUCTION_FILES_BASE_URL)
    }

    /// Point the client at arbitrary hosts (mock servers, proxies)
    pub fn custom(base_url: impl Into<String>, files_base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            files_base_url: files_base_url.into(),
        }
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::sandbox()
    }
}

impl FromStr for Environment {
    type Err = UqpayError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "sandbox" => Ok(Self::sandbox()),
            "production" | "prod" => Ok(Self::production()),
            other => Err(UqpayError::Config(format!(
                "unknown environment '{other}', expected 'sandbox' or 'production'"
            ))),
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (files: {})", self.base_url, self.files_base_url)
    }
}

/// Everything needed to construct an [`ApiClient`](crate::http::ApiClient)
#[derive(Debug, Clone)]
pub struct Configuration {
    pub credentials: Credentials,
    pub environment: Environment,
    pub client: ClientConfig,
}

impl Configuration {
    pub fn new(
        client_id: impl Into<String>,
        api_key: impl Into<String>,
        environment: Environment,
    ) -> Self {
        Self {
            credentials: Credentials::new(client_id, api_key),
            environment,
            client: ClientConfig::default(),
        }
    }

    /// Replace the HTTP options (timeouts, header names)
    pub fn with_client_config(mut self, client: ClientConfig) -> Self {
        self.client = client;
        self
    }

    pub(crate) fn validate(&self) -> Result<(), UqpayError> {
        if self.credentials.client_id.trim().is_empty() {
            return Err(UqpayError::Config("client_id must not be empty".to_string()));
        }
        if self.credentials.api_key.trim().is_empty() {
            return Err(UqpayError::Config("api_key must not be empty".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_from_str() {
        assert_eq!("sandbox".parse::<Environment>().unwrap(), Environment::sandbox());
        assert_eq!(
            " Production ".parse::<Environment>().unwrap(),
            Environment::production()
        );
        assert!(matches!(
            "staging".parse::<Environment>(),
            Err(UqpayError::Config(_))
        ));
    }

    #[test]
    fn test_sandbox_and_production_differ() {
        let sandbox = Environment::sandbox();
        let production = Environment::production();
        assert_ne!(sandbox.base_url, production.base_url);
        assert_ne!(sandbox.files_base_url, production.files_base_url);
    }

    #[test]
    fn test_validate_rejects_blank_credentials() {
        let config = Configuration::new("", "key", Environment::sandbox());
        assert!(matches!(config.validate(), Err(UqpayError::Config(_))));

        let config = Configuration::new("client", "  ", Environment::sandbox());
        assert!(matches!(config.validate(), Err(UqpayError::Config(_))));

        let config = Configuration::new("client", "key", Environment::sandbox());
        assert!(config.validate().is_ok());
    }
}
