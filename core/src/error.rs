use thiserror::Error;

#[derive(Debug, Error)]
pub enum MapError {
    /// The topology document is not valid containerlab YAML.
    #[error("cannot parse topology: {0}")]
    Parse(#[from] serde_yaml::Error),
    /// The topology has no `name`, so nodes would have no group.
    #[error("topology has no name")]
    MissingName,
    #[error("topology contains a node with an empty name")]
    EmptyNodeName,
    /// A link could not be resolved and the link policy is abort.
    #[error("cannot resolve endpoints of link #{index}: {source}")]
    Endpoint {
        index: usize,
        #[source]
        source: EndpointError,
    },
}

/// Why a single link could not be turned into two endpoints.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EndpointError {
    #[error("a link needs exactly 2 endpoints, got {0}")]
    Count(usize),
    #[error("wrong endpoint '{0}', expecting <nodeName>:<epName>")]
    Format(String),
    #[error("node '{0}' not found in topology")]
    UnknownNode(String),
}
