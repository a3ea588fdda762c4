//! # Topology Mapper
//!
//! Turns a parsed containerlab [`Topology`] into inventory [`Node`]s and
//! [`Link`]s.
//!
//! A [`Mapper`] holds nothing but its default [`SiteId`] and the topology it
//! was built from. Every listing is recomputed from those two inputs, so the
//! same mapper always produces the same resources and can be shared freely
//! between threads.
//!
//! Nodes and links are mapped in parallel. Results are collected in source
//! order: nodes by name, links as declared in the document.

use std::collections::BTreeMap;

use knet_common::config::LinkPolicy;
use knet_common::inventory::node::NodeSpec;
use knet_common::inventory::{EndpointId, Link, Node, NodeGroupId, NodeId, SiteId};
use knet_common::labels::NODE_TYPE_KEY;
use rayon::prelude::*;
use tracing::{debug, error, warn};

use crate::error::{EndpointError, MapError};
use crate::provider::resolve_provider;
use crate::topology::{Labels, LinkDefinition, NodeDefinition, Topology};

pub mod resolve;

const ENDPOINT_SEPARATOR: char = ':';

#[derive(Debug, Clone)]
pub struct Mapper {
    site_id: SiteId,
    topology: Topology,
}

impl Mapper {
    /// Parses `yaml` as a containerlab topology and builds a mapper for it.
    pub fn new(site_id: SiteId, yaml: &str) -> Result<Self, MapError> {
        Self::from_topology(site_id, Topology::from_yaml(yaml)?)
    }

    /// Builds a mapper for an already parsed topology.
    ///
    /// Fails if the topology has no name or contains an unnamed node, since
    /// neither could produce a usable identifier.
    pub fn from_topology(site_id: SiteId, topology: Topology) -> Result<Self, MapError> {
        if topology.name.is_empty() {
            return Err(MapError::MissingName);
        }
        if topology.nodes().contains_key("") {
            return Err(MapError::EmptyNodeName);
        }

        debug!(
            "Loaded topology {} with {} nodes and {} links",
            topology.name,
            topology.nodes().len(),
            topology.links().len()
        );

        Ok(Self { site_id, topology })
    }

    pub fn topology(&self) -> &Topology {
        &self.topology
    }

    pub fn site_id(&self) -> &SiteId {
        &self.site_id
    }

    /// One node per topology node. Never drops a node.
    pub fn list_nodes(&self) -> Vec<Node> {
        self.topology
            .nodes()
            .par_iter()
            .map(|(name, def)| self.map_node(name, def))
            .collect()
    }

    /// The outcome of every link, in declaration order.
    pub fn resolve_links(&self) -> Vec<Result<Link, EndpointError>> {
        self.topology
            .links()
            .par_iter()
            .map(|link| self.map_link(link))
            .collect()
    }

    /// Lists the links of the topology.
    ///
    /// With [`LinkPolicy::Abort`] the first link that cannot be resolved fails
    /// the whole listing. With [`LinkPolicy::Skip`] such links are logged and
    /// left out.
    pub fn list_links(&self, policy: LinkPolicy) -> Result<Vec<Link>, MapError> {
        let mut links = Vec::with_capacity(self.topology.links().len());

        for (index, result) in self.resolve_links().into_iter().enumerate() {
            match (result, policy) {
                (Ok(link), _) => links.push(link),
                (Err(source), LinkPolicy::Abort) => {
                    error!("Cannot create link #{index}: {source}");
                    return Err(MapError::Endpoint { index, source });
                }
                (Err(source), LinkPolicy::Skip) => {
                    warn!("Skipping link #{index}: {source}");
                }
            }
        }

        Ok(links)
    }

    pub fn resolve_site(&self, labels: &Labels) -> SiteId {
        resolve::resolve_site(&self.site_id, labels)
    }

    fn node_group_id(&self, labels: &Labels) -> NodeGroupId {
        NodeGroupId::new(&self.topology.name, self.resolve_site(labels))
    }

    fn map_node(&self, name: &str, def: &NodeDefinition) -> Node {
        let (kind, node_type) = self.topology.node_kind_type(name);
        let node_id = NodeId::new(self.node_group_id(&def.labels), name);
        debug!("Mapping node {name} ({kind}) to {node_id}");

        let spec = NodeSpec {
            node_id,
            rack: resolve::resolve_rack(&def.labels),
            position: resolve::resolve_position(&def.labels),
            location: resolve::resolve_location(&def.labels),
            provider: resolve_provider(kind).to_string(),
            labels: BTreeMap::from([(NODE_TYPE_KEY.to_string(), node_type.to_string())]),
        };

        Node::new(spec)
    }

    fn map_link(&self, link: &LinkDefinition) -> Result<Link, EndpointError> {
        let [a, b] = link.endpoints.as_slice() else {
            return Err(EndpointError::Count(link.endpoints.len()));
        };
        let endpoints = [self.resolve_endpoint(a)?, self.resolve_endpoint(b)?];

        Ok(Link::new(endpoints))
    }

    /// Resolves `<nodeName>:<epName>` against the topology's nodes.
    fn resolve_endpoint(&self, raw: &str) -> Result<EndpointId, EndpointError> {
        let mut parts = raw.split(ENDPOINT_SEPARATOR);
        let (Some(node_name), Some(endpoint), None) = (parts.next(), parts.next(), parts.next())
        else {
            return Err(EndpointError::Format(raw.to_string()));
        };

        let node = self
            .topology
            .node(node_name)
            .ok_or_else(|| EndpointError::UnknownNode(node_name.to_string()))?;

        let node_id = NodeId::new(self.node_group_id(&node.labels), node_name);
        Ok(EndpointId::new(node_id, endpoint))
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
