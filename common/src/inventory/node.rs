use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{API_VERSION, NodeId, ObjectMeta};

pub const NODE_KIND: &str = "Node";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub longitude: String,
    pub latitude: String,
}

impl Location {
    /// Parses `<longitude>:<latitude>`.
    ///
    /// Anything other than exactly one `:` yields `None`.
    pub fn parse(s: &str) -> Option<Self> {
        let mut parts = s.split(':');
        let (Some(longitude), Some(latitude), None) = (parts.next(), parts.next(), parts.next())
        else {
            return None;
        };
        Some(Self {
            longitude: longitude.to_string(),
            latitude: latitude.to_string(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeSpec {
    #[serde(flatten)]
    pub node_id: NodeId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rack: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
    /// Vendor/platform domain, empty when the node kind is not recognised.
    #[serde(default)]
    pub provider: String,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub labels: BTreeMap<String, String>,
}

/// An inventory node, one per topology node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Node {
    pub api_version: String,
    pub kind: String,
    pub metadata: ObjectMeta,
    pub spec: NodeSpec,
}

impl Node {
    /// Wraps a spec in its envelope, named after the node's KUID string.
    pub fn new(spec: NodeSpec) -> Self {
        Self {
            api_version: API_VERSION.to_string(),
            kind: NODE_KIND.to_string(),
            metadata: ObjectMeta::new(spec.node_id.kuid_string()),
            spec,
        }
    }

    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.metadata.namespace = namespace.into();
        self
    }

    pub fn id(&self) -> &NodeId {
        &self.spec.node_id
    }

    pub fn name(&self) -> &str {
        &self.metadata.name
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
