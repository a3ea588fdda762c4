use serde::{Deserialize, Serialize};

use super::id::render_key;
use super::{API_VERSION, EndpointId, ObjectMeta};

pub const LINK_KIND: &str = "Link";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkSpec {
    /// Exactly two endpoints, in the order the topology declared them.
    pub endpoints: [EndpointId; 2],
}

/// An inventory link between two node endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Link {
    pub api_version: String,
    pub kind: String,
    pub metadata: ObjectMeta,
    pub spec: LinkSpec,
}

impl Link {
    pub fn new(endpoints: [EndpointId; 2]) -> Self {
        Self {
            api_version: API_VERSION.to_string(),
            kind: LINK_KIND.to_string(),
            metadata: ObjectMeta::new(link_name(&endpoints)),
            spec: LinkSpec { endpoints },
        }
    }

    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.metadata.namespace = namespace.into();
        self
    }

    pub fn endpoints(&self) -> &[EndpointId; 2] {
        &self.spec.endpoints
    }

    pub fn name(&self) -> &str {
        &self.metadata.name
    }
}

/// Both endpoint keys joined, i.e. `<a>.<b>`.
pub fn link_name(endpoints: &[EndpointId; 2]) -> String {
    let [a, b] = endpoints;
    let components: Vec<&str> = a.components().into_iter().chain(b.components()).collect();
    render_key(&components)
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
