// Copyright (c) 2025 - Cowboy AI, Inc.
//! Region connection configuration

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::errors::{CloudError, CloudResult};

/// Configuration for one provider region
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionConfig {
    /// Region identifier (e.g., "cn-north-4")
    pub region_id: String,

    /// Project scoping every resource path
    pub project_id: String,

    /// Domain suffix of the service endpoints
    #[serde(default = "default_endpoint_suffix")]
    pub endpoint_suffix: String,

    /// URL scheme of the service endpoints
    #[serde(default = "default_scheme")]
    pub scheme: String,

    /// Token sent with every request
    #[serde(default)]
    pub api_token: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

fn default_endpoint_suffix() -> String {
    "myhuaweicloud.com".to_string()
}

fn default_scheme() -> String {
    "https".to_string()
}

fn default_timeout() -> u64 {
    30
}

impl Default for RegionConfig {
    fn default() -> Self {
        Self {
            region_id: "cn-north-4".to_string(),
            project_id: String::new(),
            endpoint_suffix: default_endpoint_suffix(),
            scheme: default_scheme(),
            api_token: String::new(),
            timeout_secs: default_timeout(),
        }
    }
}

impl RegionConfig {
    /// Load configuration from environment variables
    ///
    /// - `CLOUD_REGION` (required)
    /// - `CLOUD_PROJECT_ID` (required)
    /// - `CLOUD_API_TOKEN` (required)
    /// - `CLOUD_ENDPOINT_SUFFIX` (default: myhuaweicloud.com)
    /// - `CLOUD_TIMEOUT_SECS` (default: 30)
    pub fn from_env() -> CloudResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> CloudResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| {
            lookup(key)
                .filter(|value| !value.is_empty())
                .ok_or_else(|| CloudError::Configuration(format!("{} not set", key)))
        };

        let timeout_secs = match lookup("CLOUD_TIMEOUT_SECS") {
            Some(raw) => raw.parse().map_err(|_| {
                CloudError::Configuration(format!("CLOUD_TIMEOUT_SECS is not a number: {}", raw))
            })?,
            None => default_timeout(),
        };

        let config = Self {
            region_id: required("CLOUD_REGION")?,
            project_id: required("CLOUD_PROJECT_ID")?,
            endpoint_suffix: lookup("CLOUD_ENDPOINT_SUFFIX")
                .unwrap_or_else(default_endpoint_suffix),
            scheme: default_scheme(),
            api_token: required("CLOUD_API_TOKEN")?,
            timeout_secs,
        };

        config.validate()?;
        Ok(config)
    }

    /// Check the configuration is usable for issuing requests
    pub fn validate(&self) -> CloudResult<()> {
        if self.region_id.is_empty() {
            return Err(CloudError::Configuration("region_id is empty".to_string()));
        }
        if self.project_id.is_empty() {
            return Err(CloudError::Configuration("project_id is empty".to_string()));
        }
        if self.timeout_secs == 0 {
            return Err(CloudError::Configuration(
                "timeout_secs must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
