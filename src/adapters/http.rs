// Copyright (c) 2025 - Cowboy AI, Inc.

//! HTTP transport for the provider API
//!
//! Implements [`CloudApiClient`] over the provider's REST endpoints:
//!
//! ```text
//! list(Vpc, "ports", q)   = GET https://vpc.{region}.{suffix}/v1/{project}/ports?q
//! put(Vpc, "ports/p1", b) = PUT https://vpc.{region}.{suffix}/v1/{project}/ports/p1
//! ```
//!
//! The configured token is sent as `X-Auth-Token`. Obtaining or refreshing
//! that token is left to the caller, and failed requests are not retried.
//!
//! # Example
//!
//! ```rust,no_run
//! use cim_cloud_ports::adapters::HttpCloudClient;
//! use cim_cloud_ports::{Region, RegionConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = RegionConfig::from_env()?;
//!     let region = Region::new(config.region_id.clone(), HttpCloudClient::new(config)?);
//!
//!     for port in region.get_ports("").await? {
//!         println!("{} {}", port.id, port.status);
//!     }
//!     Ok(())
//! }
//! ```

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use reqwest::{Client, RequestBuilder};
use tracing::debug;

use crate::client::{ApiResponse, CloudApiClient, ListQuery, ServiceScope};
use crate::config::RegionConfig;
use crate::errors::{CloudError, CloudResult};

const AUTH_TOKEN_HEADER: &str = "X-Auth-Token";

/// Provider API client backed by `reqwest`
#[derive(Debug, Clone)]
pub struct HttpCloudClient {
    config: RegionConfig,
    client: Client,
}

impl HttpCloudClient {
    pub fn new(config: RegionConfig) -> CloudResult<Self> {
        config.validate()?;

        let mut headers = HeaderMap::new();
        headers.insert(
            AUTH_TOKEN_HEADER,
            HeaderValue::from_str(&config.api_token)
                .map_err(|e| CloudError::Configuration(format!("Invalid API token: {}", e)))?,
        );
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let client = Client::builder()
            .timeout(config.timeout())
            .default_headers(headers)
            .build()
            .map_err(|e| {
                CloudError::Configuration(format!("Failed to create HTTP client: {}", e))
            })?;

        Ok(Self { config, client })
    }

    pub fn config(&self) -> &RegionConfig {
        &self.config
    }

    /// Absolute URL of `resource` within `service`
    pub fn resource_url(&self, service: ServiceScope, resource: &str) -> String {
        let path = resource
            .split('/')
            .map(|segment| urlencoding::encode(segment).into_owned())
            .collect::<Vec<_>>()
            .join("/");

        format!(
            "{}://{}.{}.{}/{}/{}/{}",
            self.config.scheme,
            service.as_str(),
            self.config.region_id,
            self.config.endpoint_suffix,
            service.api_version(),
            self.config.project_id,
            path
        )
    }

    async fn send(&self, request: RequestBuilder) -> CloudResult<ApiResponse> {
        let response = request
            .send()
            .await
            .map_err(|e| CloudError::Transport(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| CloudError::Transport(e.to_string()))?;

        if !status.is_success() {
            return Err(CloudError::Api {
                status: status.as_u16(),
                body,
            });
        }

        if body.trim().is_empty() {
            return Ok(ApiResponse::empty());
        }
        Ok(ApiResponse::new(serde_json::from_str(&body)?))
    }
}

#[async_trait]
impl CloudApiClient for HttpCloudClient {
    async fn list(
        &self,
        service: ServiceScope,
        resource: &str,
        query: &ListQuery,
    ) -> CloudResult<ApiResponse> {
        let url = self.resource_url(service, resource);
        debug!("GET {} {:?}", url, query);
        self.send(self.client.get(&url).query(query)).await
    }

    async fn put(
        &self,
        service: ServiceScope,
        resource: &str,
        body: serde_json::Value,
    ) -> CloudResult<ApiResponse> {
        let url = self.resource_url(service, resource);
        debug!("PUT {}", url);
        self.send(self.client.put(&url).json(&body)).await
    }
}
