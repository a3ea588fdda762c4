//! Well-known label keys.
//!
//! Keys are case-sensitive and matched exactly against a node's labels.

/// Overrides the region of the node's site.
pub const REGION_KEY: &str = "inv.kuid.dev/region";
/// Overrides the site name of the node's site.
pub const SITE_KEY: &str = "inv.kuid.dev/site";
/// Rack the node is mounted in.
pub const RACK_KEY: &str = "inv.kuid.dev/rack";
/// Position of the node within its rack.
pub const POSITION_KEY: &str = "inv.kuid.dev/position";
/// Geographic location as `<longitude>:<latitude>`.
pub const LOCATION_KEY: &str = "inv.kuid.dev/location";
/// Written on every emitted node, carries the topology node type.
pub const NODE_TYPE_KEY: &str = "inv.kuid.dev/node-type";
