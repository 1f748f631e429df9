/*
[INPUT]:  YAML configuration file and UQPAY_* environment variables
[OUTPUT]: Parsed CLI configuration and the SDK Configuration built from it
[POS]:    Configuration layer - credentials and endpoint selection
[UPDATE]: When adding new configuration options
*/

use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use config::{Config, Environment as EnvSource, File, FileFormat};
use serde::{Deserialize, Serialize};
use uqpay_sdk::{ClientConfig, Configuration, Environment};

/// Prefix of environment variables that override the file, e.g. `UQPAY_API_KEY`
pub const ENV_PREFIX: &str = "UQPAY";

/// Top-level configuration for the CLI
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CliConfig {
    pub client_id: String,
    pub api_key: String,
    /// "sandbox" or "production"
    #[serde(default = "default_environment")]
    pub environment: String,
    /// Overrides the API host of `environment`
    #[serde(default)]
    pub base_url: Option<String>,
    /// Overrides the files host of `environment`
    #[serde(default)]
    pub files_base_url: Option<String>,
    /// Per-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_environment() -> String {
    "sandbox".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

impl CliConfig {
    /// Load from an optional YAML file, then apply `UQPAY_*` environment overrides
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut builder = Config::builder();
        if let Some(path) = path {
            let path_str = path.to_str().context("config path must be valid utf-8")?;
            builder = builder.add_source(File::new(path_str, FileFormat::Yaml).required(true));
        }

        builder
            .add_source(EnvSource::with_prefix(ENV_PREFIX).try_parsing(true))
            .build()
            .context("read configuration sources")?
            .try_deserialize()
            .context("parse configuration")
    }

    /// Named environment with the host overrides applied
    pub fn environment(&self) -> Result<Environment> {
        let mut environment: Environment = self
            .environment
            .parse()
            .with_context(|| format!("unknown environment '{}'", self.environment))?;
        if let Some(base_url) = &self.base_url {
            environment.base_url = base_url.clone();
        }
        if let Some(files_base_url) = &self.files_base_url {
            environment.files_base_url = files_base_url.clone();
        }
        Ok(environment)
    }

    pub fn to_sdk_config(&self) -> Result<Configuration> {
        let client = ClientConfig {
            timeout: Duration::from_secs(self.timeout_secs),
            ..ClientConfig::default()
        };
        Ok(
            Configuration::new(&self.client_id, &self.api_key, self.environment()?)
                .with_client_config(client),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio_test::assert_ok;

    fn write_config(name: &str, contents: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!("uqpay-cli-{}-{name}.yaml", std::process::id()));
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_load_yaml_with_defaults() {
        let path = write_config("defaults", "client_id: cid\napi_key: key\n");
        let config = assert_ok!(CliConfig::load(Some(&path)));
        std::fs::remove_file(&path).unwrap();

        assert_eq!(config.client_id, "cid");
        assert_eq!(config.environment, "sandbox");
        assert_eq!(config.timeout_secs, 30);
        assert_eq!(config.environment().unwrap(), Environment::sandbox());
    }

    #[test]
    fn test_host_overrides() {
        let path = write_config(
            "overrides",
            "client_id: cid\napi_key: key\nenvironment: production\nbase_url: http://localhost:8080/api\ntimeout_secs: 5\n",
        );
        let config = CliConfig::load(Some(&path)).unwrap();
        std::fs::remove_file(&path).unwrap();

        let environment = config.environment().unwrap();
        assert_eq!(environment.base_url, "http://localhost:8080/api");
        assert_eq!(environment.files_base_url, Environment::production().files_base_url);

        let sdk = assert_ok!(config.to_sdk_config());
        assert_eq!(sdk.client.timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_unknown_environment_is_error() {
        let config = CliConfig {
            client_id: "cid".to_string(),
            api_key: "key".to_string(),
            environment: "staging".to_string(),
            base_url: None,
            files_base_url: None,
            timeout_secs: 30,
        };
        assert!(config.to_sdk_config().is_err());
    }

    #[test]
    fn test_missing_file_is_error() {
        let path = std::env::temp_dir().join("uqpay-cli-does-not-exist.yaml");
        assert!(CliConfig::load(Some(&path)).is_err());
    }
}
