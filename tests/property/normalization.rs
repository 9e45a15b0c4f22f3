// Copyright (c) 2025 - Cowboy AI, Inc.
//! Property-Based Tests for Vocabulary Normalization
//!
//! Normalization is total: every provider string maps to a canonical value
//! or comes back verbatim, and nothing panics.

use cim_cloud_ports::{
    AssociationType, CloudInterfaceAddress, CloudNetworkInterface, FixedIp, InterfaceStatus, Port,
};
use proptest::prelude::*;

const MAPPED_STATUSES: [&str; 3] = ["ACTIVE", "DOWN", "BUILD"];

const MAPPED_OWNERS: [&str; 7] = [
    "network:router_gateway",
    "network:router_interface",
    "network:router_interface_distributed",
    "network:dhcp",
    "neutron:LOADBALANCERV2",
    "neutron:VIP_PORT",
    "compute:nova",
];

proptest! {
    #[test]
    fn unmapped_status_passes_through(raw in ".*") {
        prop_assume!(!MAPPED_STATUSES.contains(&raw.as_str()));

        let status = InterfaceStatus::from_provider(&raw);
        prop_assert_eq!(status.as_str(), raw.as_str());
        prop_assert_eq!(status, InterfaceStatus::Raw(raw.clone()));
    }

    #[test]
    fn compute_owners_are_servers(suffix in ".*") {
        let owner = format!("compute:{}", suffix);
        prop_assert_eq!(AssociationType::from_device_owner(&owner), AssociationType::Server);
    }

    #[test]
    fn unmapped_owner_passes_through(owner in "[a-z_:]{0,24}") {
        prop_assume!(!owner.starts_with("compute:"));
        prop_assume!(!MAPPED_OWNERS.contains(&owner.as_str()));

        let kind = AssociationType::from_device_owner(&owner);
        prop_assert_eq!(kind.as_str(), owner.as_str());
    }

    #[test]
    fn serialization_emits_canonical_string(raw in ".*") {
        let status = InterfaceStatus::from_provider(&raw);
        let json = serde_json::to_value(&status).unwrap();
        prop_assert_eq!(json, serde_json::Value::String(status.as_str().to_string()));
    }

    #[test]
    fn raw_values_never_become_canonical(raw in "[a-z]{0,12}") {
        let status = InterfaceStatus::from_provider(&raw);
        prop_assert_eq!(status, InterfaceStatus::Raw(raw.clone()));
    }

    #[test]
    fn addresses_follow_port_network(
        network_id in "[a-z0-9-]{1,16}",
        ips in prop::collection::vec("10\\.0\\.[0-9]{1,3}\\.[0-9]{1,3}", 0..8),
    ) {
        let port = Port {
            id: "port-1".to_string(),
            network_id: network_id.clone(),
            fixed_ips: ips.iter().map(|ip| FixedIp::new(ip.as_str(), "subnet-1")).collect(),
            ..Default::default()
        };

        let addresses = port.interface_addresses();
        prop_assert_eq!(addresses.len(), ips.len());
        for (address, ip) in addresses.iter().zip(&ips) {
            prop_assert_eq!(address.ip(), ip.as_str());
            prop_assert_eq!(address.global_id(), ip.as_str());
            prop_assert_eq!(address.network_id(), network_id.as_str());
            prop_assert!(address.is_primary());
        }
    }

    #[test]
    fn name_falls_back_to_id(id in "[a-z0-9-]{1,36}", name in "[a-z0-9-]{0,12}") {
        let port = Port { id: id.clone(), name: name.clone(), ..Default::default() };
        let expected = if name.is_empty() { &id } else { &name };
        prop_assert_eq!(port.name(), expected.as_str());
    }
}

#[test]
fn fixed_ip_is_always_primary() {
    let fixed_ip = FixedIp::new("192.168.0.1", "");
    assert!(fixed_ip.is_primary());
    assert_eq!(fixed_ip.network_id(), "");
    assert_eq!(fixed_ip.with_network_id("net-9").network_id(), "net-9");
}
