// Copyright (c) 2025 - Cowboy AI, Inc.
//! Provider API client abstraction
//!
//! The region client only needs two verbs from the provider API: an
//! authenticated GET with query parameters and an authenticated PUT with a
//! JSON body. Anything able to perform them (the optional HTTP adapter, a
//! recording fake in tests) implements [`CloudApiClient`].

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

use crate::errors::{CloudError, CloudResult};

/// Provider service a resource path belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ServiceScope {
    /// Virtual private cloud (networks, subnets, ports)
    Vpc,
}

impl ServiceScope {
    /// Service name used in endpoint host names
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Vpc => "vpc",
        }
    }

    /// API version prefix of resource paths
    pub fn api_version(&self) -> &'static str {
        match self {
            Self::Vpc => "v1",
        }
    }
}

impl fmt::Display for ServiceScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Query parameters of a list call
///
/// Setting a key again replaces its value, and keys are kept ordered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ListQuery(BTreeMap<String, String>);

impl ListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Decoded JSON body of a provider response
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    body: serde_json::Value,
}

impl ApiResponse {
    pub fn new(body: serde_json::Value) -> Self {
        Self { body }
    }

    /// Response without a body
    pub fn empty() -> Self {
        Self::new(serde_json::Value::Null)
    }

    pub fn body(&self) -> &serde_json::Value {
        &self.body
    }

    /// Decode the top-level field `key` into `T`
    pub fn unmarshal<T>(&self, key: &str) -> CloudResult<T>
    where
        T: DeserializeOwned,
    {
        let field = self
            .body
            .get(key)
            .ok_or_else(|| CloudError::Decode(format!("response has no '{}' field", key)))?;

        T::deserialize(field)
            .map_err(|e| CloudError::Decode(format!("field '{}': {}", key, e)))
    }
}

/// Authenticated access to a provider API
#[async_trait]
pub trait CloudApiClient: Send + Sync {
    /// GET `resource` within `service`
    async fn list(
        &self,
        service: ServiceScope,
        resource: &str,
        query: &ListQuery,
    ) -> CloudResult<ApiResponse>;

    /// PUT `body` to `resource` within `service`
    async fn put(
        &self,
        service: ServiceScope,
        resource: &str,
        body: serde_json::Value,
    ) -> CloudResult<ApiResponse>;
}

#[async_trait]
impl<C> CloudApiClient for std::sync::Arc<C>
where
    C: CloudApiClient + ?Sized,
{
    async fn list(
        &self,
        service: ServiceScope,
        resource: &str,
        query: &ListQuery,
    ) -> CloudResult<ApiResponse> {
        (**self).list(service, resource, query).await
    }

    async fn put(
        &self,
        service: ServiceScope,
        resource: &str,
        body: serde_json::Value,
    ) -> CloudResult<ApiResponse> {
        (**self).put(service, resource, body).await
    }
}
