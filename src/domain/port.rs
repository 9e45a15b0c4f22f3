// Copyright (c) 2025 - Cowboy AI, Inc.
//! VPC Port Model
//!
//! Wire model of a provider port (a virtual NIC attachment) and the request
//! body used to update one.
//!
//! API reference: <https://support.huaweicloud.com/api-vpc/vpc_port01_0001.html>

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeSet;

use crate::cloudprovider::{CloudInterfaceAddress, CloudNetworkInterface};
use crate::domain::status::{AssociationType, InterfaceStatus};

/// An IP address statically bound to a port
///
/// The provider payload carries no network id per address; it is copied in
/// from the parent [`Port`] when addresses are read through
/// [`CloudNetworkInterface::interface_addresses`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FixedIp {
    #[serde(default, deserialize_with = "null_as_default")]
    ip_address: String,
    #[serde(default, deserialize_with = "null_as_default")]
    subnet_id: String,
    #[serde(skip)]
    network_id: String,
}

impl FixedIp {
    pub fn new(ip_address: impl Into<String>, subnet_id: impl Into<String>) -> Self {
        Self {
            ip_address: ip_address.into(),
            subnet_id: subnet_id.into(),
            network_id: String::new(),
        }
    }

    pub fn ip_address(&self) -> &str {
        &self.ip_address
    }

    pub fn subnet_id(&self) -> &str {
        &self.subnet_id
    }

    /// Copy of this address attributed to `network_id`
    pub fn with_network_id(&self, network_id: impl Into<String>) -> Self {
        Self {
            network_id: network_id.into(),
            ..self.clone()
        }
    }
}

impl CloudInterfaceAddress for FixedIp {
    fn global_id(&self) -> &str {
        &self.ip_address
    }

    fn ip(&self) -> &str {
        &self.ip_address
    }

    fn network_id(&self) -> &str {
        &self.network_id
    }

    fn is_primary(&self) -> bool {
        true
    }
}

/// Provider port as returned by the VPC API
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Port {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    /// Provider-native status code, see [`InterfaceStatus::from_provider`]
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: String,
    #[serde(default, deserialize_with = "lenient_bool")]
    pub admin_state_up: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub dns_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub mac_address: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub network_id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tenant_id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub device_id: String,
    /// Provider tag naming the owner kind, see [`AssociationType::from_device_owner`]
    #[serde(default, deserialize_with = "null_as_default")]
    pub device_owner: String,
    #[serde(
        rename = "binding:vnic_type",
        default,
        deserialize_with = "null_as_default"
    )]
    pub binding_vnic_type: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub fixed_ips: Vec<FixedIp>,

    /// Region the port was fetched from
    #[serde(skip)]
    pub region_id: String,
}

impl Port {
    /// Fixed IPs attributed to this port's network, in provider order
    pub fn addresses(&self) -> Vec<FixedIp> {
        self.fixed_ips
            .iter()
            .map(|fixed_ip| fixed_ip.with_network_id(self.network_id.as_str()))
            .collect()
    }
}

impl CloudNetworkInterface for Port {
    fn id(&self) -> &str {
        &self.id
    }

    fn global_id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        if self.name.is_empty() {
            &self.id
        } else {
            &self.name
        }
    }

    fn mac_address(&self) -> &str {
        &self.mac_address
    }

    fn associate_type(&self) -> AssociationType {
        AssociationType::from_device_owner(&self.device_owner)
    }

    fn associate_id(&self) -> &str {
        &self.device_id
    }

    fn status(&self) -> InterfaceStatus {
        InterfaceStatus::from_provider(&self.status)
    }

    fn interface_addresses(&self) -> Vec<Box<dyn CloudInterfaceAddress>> {
        self.addresses()
            .into_iter()
            .map(|address| Box::new(address) as Box<dyn CloudInterfaceAddress>)
            .collect()
    }
}

/// IP/MAC pair allowed to pass through a port besides its own addresses
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllowedAddressPair {
    pub ip_address: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub mac_address: String,
}

impl AllowedAddressPair {
    pub fn new(ip_address: impl Into<String>) -> Self {
        Self {
            ip_address: ip_address.into(),
            mac_address: String::new(),
        }
    }

    pub fn with_mac(mut self, mac_address: impl Into<String>) -> Self {
        self.mac_address = mac_address.into();
        self
    }
}

/// Extra DHCP option served to the port
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtraDhcpOpt {
    pub opt_name: String,
    pub opt_value: String,
}

impl ExtraDhcpOpt {
    pub fn new(opt_name: impl Into<String>, opt_value: impl Into<String>) -> Self {
        Self {
            opt_name: opt_name.into(),
            opt_value: opt_value.into(),
        }
    }
}

/// Partial update of a port
///
/// Empty fields are left out of the request body so that an update never
/// clears a value the caller did not mention. Consequently an update cannot
/// reset a port to an empty name or an empty security group list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdatePortOpts {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub security_groups: BTreeSet<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub allowed_address_pairs: Vec<AllowedAddressPair>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extra_dhcp_opts: Vec<ExtraDhcpOpt>,
}

impl UpdatePortOpts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn security_group(mut self, group_id: impl Into<String>) -> Self {
        self.security_groups.insert(group_id.into());
        self
    }

    pub fn allowed_address_pair(mut self, pair: AllowedAddressPair) -> Self {
        self.allowed_address_pairs.push(pair);
        self
    }

    pub fn extra_dhcp_opt(mut self, opt: ExtraDhcpOpt) -> Self {
        self.extra_dhcp_opts.push(opt);
        self
    }

    /// True when the update would send no fields at all
    pub fn is_empty(&self) -> bool {
        self.name.is_empty()
            && self.security_groups.is_empty()
            && self.allowed_address_pairs.is_empty()
            && self.extra_dhcp_opts.is_empty()
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

// Older API versions return admin_state_up as a string; anything that is not
// recognizably "up" decodes as false rather than failing the whole record.
fn lenient_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    use serde_json::Value;

    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Bool(value)) => value,
        Some(Value::Number(number)) => number.as_f64().is_some_and(|n| n != 0.0),
        Some(Value::String(text)) => matches!(
            text.trim().to_ascii_lowercase().as_str(),
            "true" | "up" | "yes" | "1"
        ),
        _ => false,
    })
}
