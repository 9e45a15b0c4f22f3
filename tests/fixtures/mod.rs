// Copyright (c) 2025 - Cowboy AI, Inc.
//! Test Fixtures for cim-cloud-ports
//!
//! Provides a scripted in-memory provider API and deterministic port payloads.
//!
//! # Design Principles
//! - Every reply is queued up front; the fake never invents data
//! - Every request is recorded so tests can assert the exact call sequence
//! - Port ids are deterministic (`port-0001`, `port-0002`, ...)

#![allow(dead_code)]

use async_trait::async_trait;
use serde_json::{json, Value};
use std::collections::VecDeque;
use std::sync::Mutex;

use cim_cloud_ports::{
    ApiResponse, CloudApiClient, CloudError, CloudResult, ListQuery, ServiceScope,
};

pub const REGION_ID: &str = "cn-north-4";
pub const NETWORK_ID: &str = "net-1";

/// HTTP verb of a recorded call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verb {
    List,
    Put,
}

/// One request seen by the scripted client
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedCall {
    pub verb: Verb,
    pub service: ServiceScope,
    pub resource: String,
    pub query: ListQuery,
    pub body: Option<Value>,
}

/// Provider API fake replaying queued replies in order
#[derive(Default)]
pub struct ScriptedClient {
    replies: Mutex<VecDeque<CloudResult<ApiResponse>>>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl ScriptedClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_replies(replies: impl IntoIterator<Item = CloudResult<ApiResponse>>) -> Self {
        let client = Self::new();
        for reply in replies {
            client.push(reply);
        }
        client
    }

    pub fn push(&self, reply: CloudResult<ApiResponse>) {
        self.replies.lock().unwrap().push_back(reply);
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    fn answer(&self, call: RecordedCall) -> CloudResult<ApiResponse> {
        let description = format!("{:?} {}", call.verb, call.resource);
        self.calls.lock().unwrap().push(call);
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| {
                Err(CloudError::Transport(format!(
                    "unscripted call: {}",
                    description
                )))
            })
    }
}

#[async_trait]
impl CloudApiClient for ScriptedClient {
    async fn list(
        &self,
        service: ServiceScope,
        resource: &str,
        query: &ListQuery,
    ) -> CloudResult<ApiResponse> {
        self.answer(RecordedCall {
            verb: Verb::List,
            service,
            resource: resource.to_string(),
            query: query.clone(),
            body: None,
        })
    }

    async fn put(
        &self,
        service: ServiceScope,
        resource: &str,
        body: Value,
    ) -> CloudResult<ApiResponse> {
        self.answer(RecordedCall {
            verb: Verb::Put,
            service,
            resource: resource.to_string(),
            query: ListQuery::new(),
            body: Some(body),
        })
    }
}

/// Deterministic id of the n-th port (1-based)
pub fn port_id(n: usize) -> String {
    format!("port-{:04}", n)
}

/// Provider payload of a port attached to a server
pub fn port_json(id: &str) -> Value {
    json!({
        "id": id,
        "name": format!("nic-{}", id),
        "status": "ACTIVE",
        "admin_state_up": true,
        "dns_name": "",
        "mac_address": "fa:16:3e:00:00:01",
        "network_id": NETWORK_ID,
        "tenant_id": "tenant-1",
        "device_id": "ecs-1",
        "device_owner": "compute:cn-north-4a",
        "binding:vnic_type": "normal",
        "fixed_ips": [
            { "ip_address": "192.168.0.10", "subnet_id": "subnet-1" }
        ]
    })
}

/// `{"port": ...}` response of a single port fetch
pub fn port_response(id: &str) -> ApiResponse {
    ApiResponse::new(json!({ "port": port_json(id) }))
}

/// `{"ports": [...]}` response holding ports `first..first + size`
pub fn page_response(first: usize, size: usize) -> ApiResponse {
    let ports: Vec<Value> = (first..first + size)
        .map(|n| port_json(&port_id(n)))
        .collect();
    ApiResponse::new(json!({ "ports": ports }))
}

/// Successive page responses with the given sizes and contiguous ids
pub fn pages_of_sizes(sizes: &[usize]) -> Vec<CloudResult<ApiResponse>> {
    let mut next = 1;
    sizes
        .iter()
        .map(|&size| {
            let page = page_response(next, size);
            next += size;
            Ok(page)
        })
        .collect()
}

/// Install a test subscriber honoring RUST_LOG, once per test binary
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
