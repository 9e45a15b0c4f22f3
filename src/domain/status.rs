// Copyright (c) 2025 - Cowboy AI, Inc.
//! Provider Vocabulary Normalization
//!
//! Maps the provider's port `status` codes and `device_owner` tags onto the
//! canonical vocabulary of the multi-cloud layer.
//!
//! Both provider fields are open vocabularies. Values without a canonical
//! counterpart are carried through verbatim in a `Raw` variant; normalization
//! never fails.
//!
//! ```text
//! status:        ACTIVE | DOWN → available
//!                BUILD         → creating
//!                *             → *
//!
//! device_owner:  compute:*                    → server
//!                network:router_*             → reserved
//!                network:dhcp                 → dhcp
//!                neutron:LOADBALANCERV2       → loadbalancer
//!                neutron:VIP_PORT             → vip
//!                *                            → *
//! ```

use serde::Serialize;
use std::fmt;

pub const STATUS_AVAILABLE: &str = "available";
pub const STATUS_CREATING: &str = "creating";

pub const ASSOCIATE_TYPE_SERVER: &str = "server";
pub const ASSOCIATE_TYPE_RESERVED: &str = "reserved";
pub const ASSOCIATE_TYPE_DHCP: &str = "dhcp";
pub const ASSOCIATE_TYPE_LOADBALANCER: &str = "loadbalancer";
pub const ASSOCIATE_TYPE_VIP: &str = "vip";

const COMPUTE_OWNER_PREFIX: &str = "compute:";

/// Canonical network interface status
///
/// Serializes as its canonical string. There is no `Deserialize`: a raw
/// provider status may spell a canonical word, so the string form alone
/// cannot tell `Raw("available")` from `Available`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "String")]
pub enum InterfaceStatus {
    /// Attached or ready to attach
    Available,
    /// Still being built by the provider
    Creating,
    /// Provider status with no canonical counterpart
    Raw(String),
}

impl InterfaceStatus {
    /// Normalize a provider port status code
    pub fn from_provider(raw: &str) -> Self {
        match raw {
            "ACTIVE" | "DOWN" => Self::Available,
            "BUILD" => Self::Creating,
            other => Self::Raw(other.to_string()),
        }
    }

    /// Canonical string, or the raw provider value when unmapped
    pub fn as_str(&self) -> &str {
        match self {
            Self::Available => STATUS_AVAILABLE,
            Self::Creating => STATUS_CREATING,
            Self::Raw(raw) => raw,
        }
    }

    pub fn is_available(&self) -> bool {
        matches!(self, Self::Available)
    }
}

impl fmt::Display for InterfaceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<InterfaceStatus> for String {
    fn from(status: InterfaceStatus) -> Self {
        match status {
            InterfaceStatus::Raw(raw) => raw,
            other => other.as_str().to_string(),
        }
    }
}

/// Canonical kind of resource a network interface is associated with
///
/// Serializes as its canonical string; see [`InterfaceStatus`] for why it
/// does not deserialize.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "String")]
pub enum AssociationType {
    /// Compute instance
    Server,
    /// Router gateway or interface owned by the provider
    Reserved,
    /// DHCP agent
    Dhcp,
    /// Load balancer
    LoadBalancer,
    /// Virtual IP
    Vip,
    /// Device owner with no canonical counterpart
    Raw(String),
}

impl AssociationType {
    /// Classify a provider `device_owner` tag
    ///
    /// Any `compute:` prefixed owner is a server, so availability-zone
    /// specific owners such as `compute:cn-north-4a` classify without being
    /// listed.
    pub fn from_device_owner(owner: &str) -> Self {
        match owner {
            "compute:nova" => Self::Server,
            "network:router_gateway"
            | "network:router_interface"
            | "network:router_interface_distributed" => Self::Reserved,
            "network:dhcp" => Self::Dhcp,
            "neutron:LOADBALANCERV2" => Self::LoadBalancer,
            "neutron:VIP_PORT" => Self::Vip,
            other if other.starts_with(COMPUTE_OWNER_PREFIX) => Self::Server,
            other => Self::Raw(other.to_string()),
        }
    }

    /// Canonical string, or the raw device owner when unmapped
    pub fn as_str(&self) -> &str {
        match self {
            Self::Server => ASSOCIATE_TYPE_SERVER,
            Self::Reserved => ASSOCIATE_TYPE_RESERVED,
            Self::Dhcp => ASSOCIATE_TYPE_DHCP,
            Self::LoadBalancer => ASSOCIATE_TYPE_LOADBALANCER,
            Self::Vip => ASSOCIATE_TYPE_VIP,
            Self::Raw(raw) => raw,
        }
    }
}

impl fmt::Display for AssociationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<AssociationType> for String {
    fn from(kind: AssociationType) -> Self {
        match kind {
            AssociationType::Raw(raw) => raw,
            other => other.as_str().to_string(),
        }
    }
}
