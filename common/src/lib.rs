//! # Knet Common
//!
//! Shared model for the `knetctl` workspace.
//!
//! * **[`inventory`]**: hierarchical identifiers and the Node/Link inventory resources.
//! * **[`labels`]**: well-known label keys read from (and written to) topology nodes.
//! * **[`config`]**: user configuration (default region/site, link policy).

pub mod config;
pub mod inventory;
pub mod labels;
