// Copyright (c) 2025 - Cowboy AI, Inc.
//! Multi-cloud network interfaces from provider VPC ports
//!
//! This crate normalizes a provider's port resource into the provider-agnostic
//! network interface abstraction of the CIM multi-cloud layer, and enumerates
//! ports of a region with marker pagination.

pub mod adapters;
pub mod client;
pub mod cloudprovider;
pub mod config;
pub mod domain;
pub mod errors;
pub mod region;

// Re-export commonly used types
pub use client::{ApiResponse, CloudApiClient, ListQuery, ServiceScope};
pub use cloudprovider::{CloudInterfaceAddress, CloudNetworkInterface};
pub use config::RegionConfig;
pub use domain::{
    AllowedAddressPair, AssociationType, ExtraDhcpOpt, FixedIp, InterfaceStatus, Port,
    UpdatePortOpts,
};
pub use errors::{CloudError, CloudResult};
pub use region::{PortPager, Region};
