//! # Inventory Model
//!
//! * [`id`]: the site / group / node / endpoint identifier hierarchy.
//! * [`node::Node`] and [`link::Link`]: the resources produced from a topology.
//!
//! Both resources serialize inside the same Kubernetes-style envelope
//! (`apiVersion`, `kind`, `metadata`, `spec`).

use serde::{Deserialize, Serialize};

pub mod id;
pub mod link;
pub mod node;

pub use id::{EndpointId, NodeGroupId, NodeId, SiteId};
pub use link::Link;
pub use node::{Location, Node};

/// API group/version stamped on every resource.
pub const API_VERSION: &str = "inv.kuid.dev/v1alpha1";

/// Namespace used when the configuration does not name one.
pub const DEFAULT_NAMESPACE: &str = "default";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectMeta {
    pub name: String,
    pub namespace: String,
}

impl ObjectMeta {
    pub fn new(name: String) -> Self {
        Self {
            name,
            namespace: DEFAULT_NAMESPACE.to_string(),
        }
    }
}
