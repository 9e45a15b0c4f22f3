// Copyright (c) 2025 - Cowboy AI, Inc.
//! Port Domain Models
//!
//! Provider wire model for VPC ports and the normalization of its open
//! vocabularies into the canonical multi-cloud terms.
//!
//! # Values
//!
//! - [`Port`] - a virtual NIC attachment as returned by the provider
//! - [`FixedIp`] - one IP statically bound to a port, always primary
//! - [`UpdatePortOpts`] - partial update request body
//!
//! # Canonical Vocabulary
//!
//! - [`InterfaceStatus`] - `available`, `creating`, or the raw provider status
//! - [`AssociationType`] - `server`, `reserved`, `dhcp`, `loadbalancer`, `vip`,
//!   or the raw device owner

pub mod port;
pub mod status;

pub use port::{AllowedAddressPair, ExtraDhcpOpt, FixedIp, Port, UpdatePortOpts};
pub use status::{AssociationType, InterfaceStatus};
