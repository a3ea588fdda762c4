//! # Inventory Identifiers
//!
//! Every inventory object is addressed by a hierarchical identifier:
//!
//! ```text
//! SiteId       region . site
//! NodeGroupId  region . site . group
//! NodeId       region . site . group . node
//! EndpointId   region . site . group . node . endpoint
//! ```
//!
//! The flat "KUID string" of an identifier is produced by [`render_key`] and
//! nothing else, so every key in the inventory is built the same way.

use std::fmt;

use serde::{Deserialize, Serialize};

const SEPARATOR: char = '.';

/// Joins identifier components into a flat key.
///
/// `%` and `.` inside a component are percent-escaped before joining, which
/// keeps the mapping injective for a fixed number of components:
/// `("a.b", "c")` renders to `a%2Eb.c` while `("a", "b.c")` renders to `a.b%2Ec`.
pub fn render_key(components: &[&str]) -> String {
    let mut key = String::new();
    for (idx, component) in components.iter().enumerate() {
        if idx > 0 {
            key.push(SEPARATOR);
        }
        for ch in component.chars() {
            match ch {
                '%' => key.push_str("%25"),
                '.' => key.push_str("%2E"),
                _ => key.push(ch),
            }
        }
    }
    key
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SiteId {
    pub region: String,
    pub site: String,
}

impl SiteId {
    pub fn new(region: impl Into<String>, site: impl Into<String>) -> Self {
        Self {
            region: region.into(),
            site: site.into(),
        }
    }

    pub fn kuid_string(&self) -> String {
        render_key(&[self.region.as_str(), self.site.as_str()])
    }
}

/// The logical group a node belongs to: the topology name within a site.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeGroupId {
    #[serde(rename = "nodeGroup")]
    pub group: String,
    #[serde(flatten)]
    pub site: SiteId,
}

impl NodeGroupId {
    pub fn new(group: impl Into<String>, site: SiteId) -> Self {
        Self {
            group: group.into(),
            site,
        }
    }

    pub fn kuid_string(&self) -> String {
        render_key(&[
            self.site.region.as_str(),
            self.site.site.as_str(),
            self.group.as_str(),
        ])
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeId {
    #[serde(flatten)]
    pub group_id: NodeGroupId,
    #[serde(rename = "node")]
    pub name: String,
}

impl NodeId {
    pub fn new(group_id: NodeGroupId, name: impl Into<String>) -> Self {
        Self {
            group_id,
            name: name.into(),
        }
    }

    pub fn kuid_string(&self) -> String {
        render_key(&self.components())
    }

    fn components(&self) -> [&str; 4] {
        [
            self.group_id.site.region.as_str(),
            self.group_id.site.site.as_str(),
            self.group_id.group.as_str(),
            self.name.as_str(),
        ]
    }
}

/// One side of a link.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EndpointId {
    #[serde(flatten)]
    pub node_id: NodeId,
    pub endpoint: String,
}

impl EndpointId {
    pub fn new(node_id: NodeId, endpoint: impl Into<String>) -> Self {
        Self {
            node_id,
            endpoint: endpoint.into(),
        }
    }

    pub fn kuid_string(&self) -> String {
        render_key(&self.components())
    }

    pub(crate) fn components(&self) -> [&str; 5] {
        let [region, site, group, node] = self.node_id.components();
        [region, site, group, node, self.endpoint.as_str()]
    }
}

impl fmt::Display for SiteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.kuid_string())
    }
}

impl fmt::Display for NodeGroupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.kuid_string())
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.kuid_string())
    }
}

impl fmt::Display for EndpointId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.kuid_string())
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
