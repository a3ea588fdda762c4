#![cfg(test)]
use knet_common::config::LinkPolicy;
use knet_common::inventory::SiteId;
use knet_core::provider::resolve_provider;
use knet_core::{MapError, Mapper};

use super::{LAB1, LEAFSPINE, default_site, find, mapper};

#[test]
fn listings_are_deterministic() {
    for yaml in [LAB1, LEAFSPINE] {
        let first = mapper(yaml);
        let second = mapper(yaml);

        assert_eq!(first.list_nodes(), first.list_nodes());
        assert_eq!(first.list_nodes(), second.list_nodes());
        assert_eq!(
            first.list_links(LinkPolicy::Abort).unwrap(),
            second.list_links(LinkPolicy::Abort).unwrap()
        );
    }
}

#[test]
fn every_node_is_mapped() {
    let empty = mapper("name: empty\n");
    assert!(empty.list_nodes().is_empty());
    assert!(empty.list_links(LinkPolicy::Abort).unwrap().is_empty());

    let mut yaml = String::from("name: big\ntopology:\n  nodes:\n");
    for i in 0..50 {
        yaml.push_str(&format!("    n{i}: {{}}\n"));
    }
    let m = mapper(&yaml);
    assert_eq!(m.list_nodes().len(), m.topology().nodes().len());
    assert_eq!(m.list_nodes().len(), 50);
}

#[test]
fn region_label_leaves_default_site() {
    let yaml = r#"
name: lab1
topology:
  nodes:
    r1:
      labels:
        inv.kuid.dev/region: region9
"#;
    let nodes = mapper(yaml).list_nodes();
    let site = &find(&nodes, "r1").id().group_id.site;
    assert_eq!(site.region, "region9");
    assert_eq!(site.site, "site1");
}

#[test]
fn malformed_endpoints_yield_no_links() {
    for bad in ["r1e1", "r1:e1:x", ":"] {
        let yaml = format!(
            "name: t\ntopology:\n  nodes:\n    r1: {{}}\n    r2: {{}}\n  links:\n    - endpoints: [\"{bad}\", \"r2:e1\"]\n"
        );
        let result = mapper(&yaml).list_links(LinkPolicy::Abort);
        assert!(
            matches!(result, Err(MapError::Endpoint { index: 0, .. })),
            "'{bad}' should be rejected, got {result:?}"
        );
    }
}

#[test]
fn empty_endpoint_name_is_accepted() {
    let yaml = "name: t\ntopology:\n  nodes:\n    r1: {}\n    r2: {}\n  links:\n    - endpoints: [\"r1:\", \"r2:e1\"]\n";
    let links = mapper(yaml).list_links(LinkPolicy::Abort).unwrap();
    assert_eq!(links.len(), 1);

    let [a, b] = links[0].endpoints();
    assert_eq!((a.node_id.name.as_str(), a.endpoint.as_str()), ("r1", ""));
    assert_eq!(b.endpoint, "e1");
}

#[test]
fn skip_policy_keeps_resolvable_links() {
    let yaml = r#"
name: t
topology:
  nodes:
    r1: {}
    r2: {}
  links:
    - endpoints: ["r1:e1", "r2:e1"]
    - endpoints: ["r1:e2", "r3:e1"]
    - endpoints: ["r1-e3", "r2:e3"]
    - endpoints: ["r2:e2", "r1:e4"]
"#;
    let m = mapper(yaml);
    assert!(m.list_links(LinkPolicy::Abort).is_err());

    let links = m.list_links(LinkPolicy::Skip).unwrap();
    assert_eq!(links.len(), 2);
    assert_eq!(links[0].endpoints()[1].endpoint, "e1");
    assert_eq!(links[1].endpoints()[0].node_id.name, "r2");

    let failed: Vec<usize> = m
        .resolve_links()
        .iter()
        .enumerate()
        .filter_map(|(i, r)| r.is_err().then_some(i))
        .collect();
    assert_eq!(failed, vec![1, 2]);
}

#[test]
fn provider_follows_kind() {
    let m = mapper(LEAFSPINE);
    for node in &m.list_nodes() {
        let (kind, _) = m.topology().node_kind_type(&node.id().name);
        assert_eq!(node.spec.provider, resolve_provider(kind));
    }
    assert_eq!(resolve_provider("cisco_xrd"), "");
}

#[test]
fn default_site_is_used_as_given() {
    let m = Mapper::new(SiteId::new("us-east", "nyc1"), LAB1).unwrap();
    let nodes = m.list_nodes();
    assert_eq!(find(&nodes, "r1").id().group_id.site, SiteId::new("us-east", "nyc1"));
    assert_eq!(find(&nodes, "r2").id().group_id.site, SiteId::new("us-east", "siteB"));
    assert_ne!(m.site_id(), &default_site());
}
