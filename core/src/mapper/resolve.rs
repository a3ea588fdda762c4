//! Label-driven attribute resolution.
//!
//! Each attribute is read from its own well-known key and is absent when the
//! key is missing.

use knet_common::inventory::{Location, SiteId};
use knet_common::labels::{LOCATION_KEY, POSITION_KEY, RACK_KEY, REGION_KEY, SITE_KEY};

use crate::topology::Labels;

/// Region and site fall back to `default` independently of each other.
pub fn resolve_site(default: &SiteId, labels: &Labels) -> SiteId {
    SiteId {
        region: labels
            .get(REGION_KEY)
            .unwrap_or(&default.region)
            .clone(),
        site: labels.get(SITE_KEY).unwrap_or(&default.site).clone(),
    }
}

pub fn resolve_rack(labels: &Labels) -> Option<String> {
    labels.get(RACK_KEY).cloned()
}

pub fn resolve_position(labels: &Labels) -> Option<String> {
    labels.get(POSITION_KEY).cloned()
}

/// A malformed location label is ignored rather than reported.
pub fn resolve_location(labels: &Labels) -> Option<Location> {
    labels.get(LOCATION_KEY).and_then(|value| Location::parse(value))
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
