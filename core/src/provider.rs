//! Node kind to provider domain.

pub const SRLINUX_KIND: &str = "nokia_srlinux";
pub const SROS_KIND: &str = "nokia_sros";

/// Maps a containerlab node kind to the provider domain of its platform.
///
/// Kinds without a known provider map to an empty string.
pub fn resolve_provider(kind: &str) -> &'static str {
    match kind {
        SRLINUX_KIND => "srl.nokia.com",
        SROS_KIND => "sros.nokia.com",
        _ => "",
    }
}
