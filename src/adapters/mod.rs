// Copyright (c) 2025 - Cowboy AI, Inc.

//! Transport adapter implementations
//!
//! Concrete implementations of the [`CloudApiClient`](crate::client::CloudApiClient)
//! trait for talking to real provider endpoints.

#[cfg(feature = "http")]
pub mod http;

#[cfg(feature = "http")]
pub use http::HttpCloudClient;
