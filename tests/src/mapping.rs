mod integration;
mod properties;

use knet_common::inventory::{Node, SiteId};
use knet_core::Mapper;

pub const LAB1: &str = include_str!("../fixtures/lab1.clab.yaml");
pub const LEAFSPINE: &str = include_str!("../fixtures/srl-leafspine.clab.yaml");

pub fn default_site() -> SiteId {
    SiteId::new("region1", "site1")
}

pub fn mapper(yaml: &str) -> Mapper {
    Mapper::new(default_site(), yaml).expect("fixture topology should load")
}

pub fn find<'a>(nodes: &'a [Node], name: &str) -> &'a Node {
    nodes
        .iter()
        .find(|n| n.id().name == name)
        .unwrap_or_else(|| panic!("node {name} not mapped"))
}
