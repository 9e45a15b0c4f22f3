// Copyright (c) 2025 - Cowboy AI, Inc.
//! Region Client
//!
//! Fetches, enumerates and updates VPC ports of one provider region.
//!
//! # Marker Pagination
//!
//! The port listing is cursor based. Each request carries the id of the last
//! port of the previous page as `marker`; an empty page ends the listing.
//!
//! ```text
//! GET ports?device_id=..            → [p1 .. p100]
//! GET ports?device_id=..&marker=p100 → [p101 .. p200]
//! GET ports?device_id=..&marker=p200 → [p201 .. p237]
//! GET ports?device_id=..&marker=p237 → []            (done)
//! ```
//!
//! The provider rejects markers it does not know, so the marker is always an
//! id taken verbatim from the previous page.
//!
//! # Example
//!
//! ```rust,ignore
//! use cim_cloud_ports::{Region, UpdatePortOpts};
//!
//! let region = Region::new("cn-north-4", client);
//! let ports = region.get_ports("ecs-1").await?;
//! region
//!     .update_port(&ports[0].id, UpdatePortOpts::new().name("web-nic"))
//!     .await?;
//! ```

use futures::stream::{self, Stream};
use serde_json::json;
use tracing::{debug, info, warn};

use crate::client::{CloudApiClient, ListQuery, ServiceScope};
use crate::cloudprovider::CloudNetworkInterface;
use crate::domain::{Port, UpdatePortOpts};
use crate::errors::{CloudError, CloudResult};

const PORTS_RESOURCE: &str = "ports";
const DEVICE_ID_PARAM: &str = "device_id";
const MARKER_PARAM: &str = "marker";

/// Client for the ports of one region
#[derive(Debug, Clone)]
pub struct Region<C> {
    region_id: String,
    client: C,
}

impl<C: CloudApiClient> Region<C> {
    pub fn new(region_id: impl Into<String>, client: C) -> Self {
        Self {
            region_id: region_id.into(),
            client,
        }
    }

    pub fn region_id(&self) -> &str {
        &self.region_id
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    /// Fetch a single port
    pub async fn get_port(&self, id: &str) -> CloudResult<Port> {
        let resource = port_resource(id).map_err(|e| e.wrap("get port"))?;
        debug!("Fetching port {} in {}", id, self.region_id);

        let response = self
            .client
            .list(ServiceScope::Vpc, &resource, &ListQuery::new())
            .await
            .map_err(|e| e.wrap("get port"))?;

        let mut port: Port = response.unmarshal("port").map_err(|e| e.wrap("get port"))?;
        port.region_id = self.region_id.clone();
        Ok(port)
    }

    /// Enumerate all ports, optionally only those attached to `device_id`
    ///
    /// Any failing page aborts the enumeration; pages fetched before the
    /// failure are discarded.
    pub async fn get_ports(&self, device_id: &str) -> CloudResult<Vec<Port>> {
        let mut pager = self.port_pager(device_id);
        let mut ports = Vec::new();

        loop {
            match pager.next_page().await {
                Ok(Some(page)) => ports.extend(page),
                Ok(None) => break,
                Err(e) => {
                    warn!(
                        "Port enumeration in {} aborted after {} pages: {}",
                        self.region_id,
                        pager.pages_fetched(),
                        e
                    );
                    return Err(e);
                }
            }
        }

        info!(
            "Listed {} ports in {} ({} requests)",
            ports.len(),
            self.region_id,
            pager.pages_fetched()
        );
        Ok(ports)
    }

    /// Lazy page-by-page enumeration of ports
    pub fn port_pager(&self, device_id: &str) -> PortPager<'_, C> {
        let mut query = ListQuery::new();
        if !device_id.is_empty() {
            query.set(DEVICE_ID_PARAM, device_id);
        }
        PortPager {
            region: self,
            query,
            pages_fetched: 0,
            exhausted: false,
        }
    }

    /// Apply a partial update to a port
    ///
    /// Empty fields of `opts` are not sent, see [`UpdatePortOpts`].
    pub async fn update_port(&self, id: &str, opts: UpdatePortOpts) -> CloudResult<()> {
        let context = format!("update port {}", id);
        let resource = match port_resource(id) {
            Ok(resource) => resource,
            Err(e) => return Err(e.wrap(context)),
        };

        let body = json!({ "port": opts });
        debug!("Updating port {} in {}: {}", id, self.region_id, body);

        self.client
            .put(ServiceScope::Vpc, &resource, body)
            .await
            .map_err(|e| e.wrap(context))?;

        Ok(())
    }

    /// Standalone network interfaces of the region
    ///
    /// Always empty. A `device_owner` change on the provider side makes the
    /// same subnet IPs show up again under another port, so syncing ports as
    /// standalone interfaces would duplicate subnet IPs. Ports are reached
    /// through their owning resources instead.
    pub async fn network_interfaces(&self) -> CloudResult<Vec<Box<dyn CloudNetworkInterface>>> {
        debug!(
            "Skipping standalone network interface sync in {}",
            self.region_id
        );
        Ok(Vec::new())
    }
}

/// Resource path of a single port
fn port_resource(id: &str) -> CloudResult<String> {
    if id.is_empty() {
        return Err(CloudError::InvalidArgument("port id is empty".to_string()));
    }
    if id.contains('/') {
        return Err(CloudError::InvalidArgument(format!(
            "port id contains '/': {}",
            id
        )));
    }
    Ok(format!("{}/{}", PORTS_RESOURCE, id))
}

/// Stateful cursor over the pages of a port listing
///
/// Each call to [`PortPager::next_page`] issues exactly one list request.
/// Once an empty page or an error has been returned the pager is exhausted
/// and issues no further requests.
pub struct PortPager<'a, C> {
    region: &'a Region<C>,
    query: ListQuery,
    pages_fetched: usize,
    exhausted: bool,
}

impl<'a, C: CloudApiClient> PortPager<'a, C> {
    /// Fetch the next non-empty page, or `None` when the listing is complete
    pub async fn next_page(&mut self) -> CloudResult<Option<Vec<Port>>> {
        if self.exhausted {
            return Ok(None);
        }

        let page = match self.fetch_page().await {
            Ok(page) => page,
            Err(e) => {
                self.exhausted = true;
                return Err(e);
            }
        };

        let Some(last) = page.last() else {
            self.exhausted = true;
            return Ok(None);
        };

        // An empty marker means "from the start" to the provider.
        if last.id.is_empty() {
            self.exhausted = true;
            return Err(CloudError::Decode(format!(
                "last port of page {} has no id",
                self.pages_fetched
            ))
            .wrap("list ports"));
        }
        self.query.set(MARKER_PARAM, last.id.as_str());

        Ok(Some(page))
    }

    async fn fetch_page(&mut self) -> CloudResult<Vec<Port>> {
        let response = self
            .region
            .client
            .list(ServiceScope::Vpc, PORTS_RESOURCE, &self.query)
            .await
            .map_err(|e| e.wrap("list ports"))?;
        self.pages_fetched += 1;

        let mut page: Vec<Port> = response
            .unmarshal(PORTS_RESOURCE)
            .map_err(|e| e.wrap("list ports"))?;
        for port in &mut page {
            port.region_id = self.region.region_id.clone();
        }

        debug!(
            "Fetched page {} with {} ports (marker: {:?})",
            self.pages_fetched,
            page.len(),
            self.query.get(MARKER_PARAM)
        );
        Ok(page)
    }

    /// Number of list requests answered so far
    pub fn pages_fetched(&self) -> usize {
        self.pages_fetched
    }

    /// Marker the next request will carry
    pub fn marker(&self) -> Option<&str> {
        self.query.get(MARKER_PARAM)
    }

    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }

    /// Expose the remaining pages as a stream
    pub fn into_stream(self) -> impl Stream<Item = CloudResult<Vec<Port>>> + 'a
    where
        C: 'a,
    {
        stream::try_unfold(self, |mut pager| async move {
            let page = pager.next_page().await?;
            Ok::<_, CloudError>(page.map(|page| (page, pager)))
        })
    }
}
