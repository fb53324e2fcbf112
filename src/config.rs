//! Application configuration loading from environment variables.
//!
//! All configuration is loaded from the environment once at startup via standard
//! `std::env::var` and is immutable afterwards.
//!
//! # Environment Variables
//!
//! All variables are optional and default to the values below:
//! - `HOST`: Server bind address (default: "0.0.0.0")
//! - `PORT`: Server port (default: 3000)
//! - `CLASSIFIER_BASE_URL`: Base URL of the remote classifier (default: "http://47.84.53.222")
//! - `CLASSIFIER_UPLOAD_PATH`: Upload endpoint path suffix (default: "/predict/upload")
//! - `CLASSIFIER_URL_PATH`: URL-classification endpoint path suffix (default: "/predict/url")
//! - `CLASSIFIER_TIMEOUT_SECONDS`: Deadline for the forward call (default: 30)
//! - `MOCK_LABELS`: Comma-separated label set for mock results
//!   (default: "Rose,Tulip,Sunflower,Daisy,Lily,Orchid")
//! - `MOCK_DELAY_MS`: Simulated mock classification delay (default: 1500)

use serde::Deserialize;

/// Remote classifier endpoint configuration: one base URL plus two path suffixes.
#[derive(Debug, Clone, Deserialize)]
pub struct RemoteEndpoints {
    /// Base URL of the remote classifier service (no trailing slash)
    pub base_url: String,

    /// Path suffix for multipart image uploads
    pub upload_path: String,

    /// Path suffix for classification by image URL
    pub url_path: String,
}

impl RemoteEndpoints {
    /// Full URL for the multipart upload endpoint.
    pub fn upload_url(&self) -> String {
        format!("{}{}", self.base_url, self.upload_path)
    }

    /// Full URL for the classify-by-URL endpoint.
    pub fn url_url(&self) -> String {
        format!("{}{}", self.base_url, self.url_path)
    }
}

/// Complete server configuration loaded from environment.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Server bind address
    pub host: String,

    /// Server port
    pub port: u16,

    /// Remote classifier endpoints
    pub remote: RemoteEndpoints,

    /// Deadline in seconds for the forward call to the remote classifier
    pub forward_timeout_seconds: u64,

    /// Label set the mock classifier draws from
    pub mock_labels: Vec<String>,

    /// Simulated delay in milliseconds before a mock result is produced
    pub mock_delay_ms: u64,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set but cannot be parsed to the
    /// expected type, or if `MOCK_LABELS` is set to an empty list.
    pub fn from_env() -> anyhow::Result<Self> {
        let mock_labels = parse_labels(&env_or(
            "MOCK_LABELS",
            "Rose,Tulip,Sunflower,Daisy,Lily,Orchid".to_string(),
        )?)?;

        Ok(Self {
            host: env_or("HOST", "0.0.0.0".to_string())?,
            port: env_or("PORT", 3000)?,
            remote: RemoteEndpoints {
                base_url: env_or("CLASSIFIER_BASE_URL", "http://47.84.53.222".to_string())?,
                upload_path: env_or("CLASSIFIER_UPLOAD_PATH", "/predict/upload".to_string())?,
                url_path: env_or("CLASSIFIER_URL_PATH", "/predict/url".to_string())?,
            },
            forward_timeout_seconds: env_or("CLASSIFIER_TIMEOUT_SECONDS", 30)?,
            mock_labels,
            mock_delay_ms: env_or("MOCK_DELAY_MS", 1500)?,
        })
    }
}

/// Parse a comma-separated label list, discarding empty entries.
///
/// # Errors
///
/// Returns an error if no non-empty label remains.
fn parse_labels(raw: &str) -> anyhow::Result<Vec<String>> {
    let labels: Vec<String> = raw
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect();

    if labels.is_empty() {
        anyhow::bail!("MOCK_LABELS must contain at least one label");
    }
    Ok(labels)
}

/// Load an environment variable with a default value.
///
/// Returns the parsed environment variable if set, otherwise returns the default.
///
/// # Errors
///
/// Returns an error if the variable is set but cannot be parsed.
fn env_or<T>(key: &str, default: T) -> anyhow::Result<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match std::env::var(key) {
        Ok(val) => val
            .parse::<T>()
            .map_err(|e| anyhow::anyhow!("Failed to parse {}: {}", key, e)),
        Err(_) => Ok(default),
    }
}
