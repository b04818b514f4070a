//! Client configuration.
//!
//! Settings come from a JSON secrets file and/or environment variables:
//!
//! | Variable | Meaning | Default |
//! |----------|---------|---------|
//! | `FBN_SECRETS_PATH` | secrets file location | `secrets.json` |
//! | `FBN_LUSID_API_URL` | API base URL | from secrets file |
//! | `FBN_ACCESS_TOKEN` | bearer token | from secrets file |
//! | `FBN_REQUEST_TIMEOUT_MS` | per-request timeout | `30000` |
//! | `FBN_CLIENT_SIDE_VALIDATION` | validate models locally | `true` |

use std::path::Path;
use std::time::Duration;

use log::debug;
use lusid_models::Configuration;
use serde::Deserialize;

use crate::error::{ClientError, Result};

/// Secrets file used when `FBN_SECRETS_PATH` is not set.
pub const DEFAULT_SECRETS_PATH: &str = "secrets.json";

const DEFAULT_TIMEOUT_MS: u64 = 30_000;

/// Connection settings for [`LusidClient`](crate::LusidClient).
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub api_url: String,
    pub access_token: String,
    pub timeout: Duration,
    pub client_side_validation: bool,
}

#[derive(Debug, Deserialize)]
struct SecretsFile {
    api: ApiSecrets,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ApiSecrets {
    #[serde(default)]
    api_url: Option<String>,
    #[serde(default)]
    access_token: Option<String>,
}

impl ClientConfig {
    pub fn new(api_url: impl Into<String>, access_token: impl Into<String>) -> Self {
        Self {
            api_url: api_url.into(),
            access_token: access_token.into(),
            timeout: Duration::from_millis(DEFAULT_TIMEOUT_MS),
            client_side_validation: true,
        }
    }

    /// Loads `.env`, then the secrets file, then environment overrides.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        let secrets_path = std::env::var("FBN_SECRETS_PATH")
            .unwrap_or_else(|_| DEFAULT_SECRETS_PATH.to_string());

        let secrets = if Path::new(&secrets_path).exists() {
            debug!("Reading API secrets from {}", secrets_path);
            Some(read_secrets(Path::new(&secrets_path))?)
        } else {
            None
        };

        Self::resolve(secrets, |key| std::env::var(key).ok())
    }

    /// Reads `{"api": {"apiUrl": ..., "accessToken": ...}}` from `path`.
    pub fn from_secrets_file(path: impl AsRef<Path>) -> Result<Self> {
        let secrets = read_secrets(path.as_ref())?;
        Self::resolve(Some(secrets), |_| None)
    }

    /// Model configuration matching this client's validation policy.
    pub fn model_configuration(&self) -> Configuration {
        Configuration {
            client_side_validation: self.client_side_validation,
        }
    }

    fn resolve(
        secrets: Option<SecretsFile>,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self> {
        let secrets = secrets.map(|s| s.api).unwrap_or_default();

        let api_url = lookup("FBN_LUSID_API_URL")
            .or(secrets.api_url)
            .filter(|url| !url.trim().is_empty())
            .ok_or_else(|| ClientError::config("API URL is not configured (FBN_LUSID_API_URL)"))?;

        let access_token = lookup("FBN_ACCESS_TOKEN")
            .or(secrets.access_token)
            .filter(|token| !token.trim().is_empty())
            .ok_or_else(|| ClientError::config("Access token is not configured (FBN_ACCESS_TOKEN)"))?;

        let timeout_ms: u64 = lookup("FBN_REQUEST_TIMEOUT_MS")
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_TIMEOUT_MS);

        let client_side_validation = lookup("FBN_CLIENT_SIDE_VALIDATION")
            .map(|v| !matches!(v.trim().to_ascii_lowercase().as_str(), "false" | "0" | "no"))
            .unwrap_or(true);

        Ok(Self {
            api_url,
            access_token,
            timeout: Duration::from_millis(timeout_ms),
            client_side_validation,
        })
    }
}

fn read_secrets(path: &Path) -> Result<SecretsFile> {
    let contents = std::fs::read_to_string(path).map_err(|e| {
        ClientError::config(format!("Failed to read {}: {}", path.display(), e))
    })?;
    Ok(serde_json::from_str(&contents)?)
}
