//! # Containerlab Topology Model
//!
//! Deserializes the subset of a containerlab document the mapper needs:
//!
//! ```yaml
//! name: lab1
//! topology:
//!   defaults: { kind: nokia_srlinux }
//!   kinds:
//!     nokia_srlinux: { type: ixrd3 }
//!   nodes:
//!     r1: { labels: { inv.kuid.dev/site: siteB } }
//!   links:
//!     - endpoints: ["r1:e1-1", "r2:e1-1"]
//! ```
//!
//! Keys the mapper does not use are ignored. Nodes are held in a name-ordered
//! map so every pass over them sees the same order; links keep document order.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer};
use serde_yaml::Value;

use crate::error::MapError;

pub type Labels = BTreeMap<String, String>;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Topology {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub topology: TopologyDefinition,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TopologyDefinition {
    #[serde(default)]
    pub defaults: Option<NodeDefinition>,
    #[serde(default, deserialize_with = "definitions_or_null")]
    pub kinds: BTreeMap<String, NodeDefinition>,
    #[serde(default, deserialize_with = "definitions_or_null")]
    pub nodes: BTreeMap<String, NodeDefinition>,
    #[serde(default)]
    pub links: Vec<LinkDefinition>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct NodeDefinition {
    #[serde(default)]
    pub kind: String,
    #[serde(default, rename = "type")]
    pub node_type: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default, deserialize_with = "scalar_labels")]
    pub labels: Labels,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LinkDefinition {
    /// `<nodeName>:<endpointName>` strings.
    #[serde(default)]
    pub endpoints: Vec<String>,
}

impl Topology {
    pub fn from_yaml(yaml: &str) -> Result<Self, MapError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    pub fn nodes(&self) -> &BTreeMap<String, NodeDefinition> {
        &self.topology.nodes
    }

    pub fn links(&self) -> &[LinkDefinition] {
        &self.topology.links
    }

    pub fn node(&self, name: &str) -> Option<&NodeDefinition> {
        self.topology.nodes.get(name)
    }

    /// Resolves the kind and type of a node.
    ///
    /// The kind comes from the node, else from `defaults`. The type comes from
    /// the node, else from the kind's entry in `kinds`, else from `defaults`.
    /// Whatever cannot be resolved is an empty string, as is everything for an
    /// unknown node.
    pub fn node_kind_type(&self, name: &str) -> (&str, &str) {
        let Some(node) = self.node(name) else {
            return ("", "");
        };
        let defaults = self.topology.defaults.as_ref();

        let kind = non_empty(&node.kind)
            .or_else(|| defaults.and_then(|d| non_empty(&d.kind)))
            .unwrap_or("");

        let node_type = non_empty(&node.node_type)
            .or_else(|| {
                self.topology
                    .kinds
                    .get(kind)
                    .and_then(|k| non_empty(&k.node_type))
            })
            .or_else(|| defaults.and_then(|d| non_empty(&d.node_type)))
            .unwrap_or("");

        (kind, node_type)
    }
}

fn non_empty(s: &str) -> Option<&str> {
    (!s.is_empty()).then_some(s)
}

/// Accepts `r1:` (a node with no body) as a node with default settings.
fn definitions_or_null<'de, D>(deserializer: D) -> Result<BTreeMap<String, NodeDefinition>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<BTreeMap<String, Option<NodeDefinition>>> = Option::deserialize(deserializer)?;
    Ok(raw
        .unwrap_or_default()
        .into_iter()
        .map(|(name, def)| (name, def.unwrap_or_default()))
        .collect())
}

/// Label values are strings, but YAML happily types `position: 3` as a number.
fn scalar_labels<'de, D>(deserializer: D) -> Result<Labels, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<BTreeMap<String, Value>> = Option::deserialize(deserializer)?;
    raw.unwrap_or_default()
        .into_iter()
        .map(|(key, value)| {
            let value = match value {
                Value::String(s) => s,
                Value::Number(n) => n.to_string(),
                Value::Bool(b) => b.to_string(),
                Value::Null => String::new(),
                other => {
                    return Err(<D::Error as serde::de::Error>::custom(format!(
                        "label '{key}' must be a scalar, got {other:?}"
                    )));
                }
            };
            Ok((key, value))
        })
        .collect()
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
