// Copyright (c) 2025 - Cowboy AI, Inc.
//! Capability interfaces consumed by the multi-cloud layer
//!
//! Provider resources are exposed through these traits so the management
//! layer never depends on a provider's wire model.
//!
//! ```text
//! Port ──impl──> CloudNetworkInterface
//!                     │ interface_addresses()
//!                     ▼
//! FixedIp ─impl─> CloudInterfaceAddress
//! ```

use crate::domain::{AssociationType, InterfaceStatus};

/// One address bound to a network interface
pub trait CloudInterfaceAddress: Send + Sync {
    /// Globally unique identifier of the address record
    fn global_id(&self) -> &str;

    fn ip(&self) -> &str;

    /// Identifier of the network the address belongs to
    fn network_id(&self) -> &str;

    fn is_primary(&self) -> bool;
}

/// A provider network interface in canonical vocabulary
pub trait CloudNetworkInterface: Send + Sync {
    fn id(&self) -> &str;

    fn global_id(&self) -> &str;

    /// Display name, falling back to the id when the provider has none
    fn name(&self) -> &str;

    fn mac_address(&self) -> &str;

    /// Kind of resource the interface is attached to
    fn associate_type(&self) -> AssociationType;

    /// Identifier of the resource the interface is attached to
    fn associate_id(&self) -> &str;

    fn status(&self) -> InterfaceStatus;

    /// Address records, one per bound IP, in provider order
    fn interface_addresses(&self) -> Vec<Box<dyn CloudInterfaceAddress>>;
}
