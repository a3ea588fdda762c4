//! # Knet Core
//!
//! Maps containerlab topologies onto the inventory model.
//!
//! * **[`topology`]**: the containerlab document, as far as the mapper reads it.
//! * **[`mapper`]**: builds inventory nodes and links from a topology.
//! * **[`provider`]**: node kind to provider domain lookup.
//! * **[`error`]**: what can go wrong while mapping.

pub mod error;
pub mod mapper;
pub mod provider;
pub mod topology;

pub use error::{EndpointError, MapError};
pub use mapper::Mapper;
pub use topology::Topology;
