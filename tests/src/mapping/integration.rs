#![cfg(test)]
use knet_common::config::LinkPolicy;
use knet_common::inventory::{Link, Node, SiteId};
use knet_common::labels::NODE_TYPE_KEY;
use knet_core::{EndpointError, MapError};

use super::{LAB1, LEAFSPINE, find, mapper};

/// Two nodes, one with a site label, joined by a single link.
#[test]
fn lab1_round_trip() {
    let m = mapper(LAB1);

    let nodes: Vec<Node> = m.list_nodes();
    assert_eq!(nodes.len(), 2);

    let r1 = find(&nodes, "r1");
    assert_eq!(r1.id().group_id.group, "lab1");
    assert_eq!(r1.id().group_id.site, SiteId::new("region1", "site1"));

    let r2 = find(&nodes, "r2");
    assert_eq!(r2.id().group_id.site, SiteId::new("region1", "siteB"));

    let links: Vec<Link> = m.list_links(LinkPolicy::Abort).unwrap();
    assert_eq!(links.len(), 1);

    let [a, b] = links[0].endpoints();
    assert_eq!((a.node_id.name.as_str(), a.endpoint.as_str()), ("r1", "e1"));
    assert_eq!((b.node_id.name.as_str(), b.endpoint.as_str()), ("r2", "e1"));
    assert_eq!(a.node_id.group_id, r1.id().group_id);
    assert_eq!(b.node_id.group_id, r2.id().group_id);
}

#[test]
fn single_endpoint_link_yields_no_links() {
    let yaml = r#"
name: lab1
topology:
  nodes:
    r1: {}
    r2: {}
  links:
    - endpoints: ["r1:e1", "r2:e1"]
    - endpoints: ["r1:e1"]
"#;
    let m = mapper(yaml);

    let result = m.list_links(LinkPolicy::Abort);
    assert!(
        matches!(
            result,
            Err(MapError::Endpoint {
                index: 1,
                source: EndpointError::Count(1)
            })
        ),
        "unexpected result: {result:?}"
    );

    // Node listing is unaffected by a bad link.
    assert_eq!(m.list_nodes().len(), 2);
}

#[test]
fn unknown_node_endpoint_yields_no_links() {
    let yaml = r#"
name: lab1
topology:
  nodes:
    r1: {}
  links:
    - endpoints: ["r1:e1", "r9:e1"]
"#;
    let result = mapper(yaml).list_links(LinkPolicy::Abort);
    match result {
        Err(MapError::Endpoint { index, source }) => {
            assert_eq!(index, 0);
            assert_eq!(source, EndpointError::UnknownNode("r9".to_string()));
        }
        other => panic!("expected an endpoint error, got {other:?}"),
    }
}

#[test]
fn leafspine_nodes() {
    let nodes = mapper(LEAFSPINE).list_nodes();
    assert_eq!(nodes.len(), 5);

    let spine1 = find(&nodes, "spine1");
    assert_eq!(spine1.name(), "region1.site1.leafspine.spine1");
    assert_eq!(spine1.spec.provider, "srl.nokia.com");
    assert_eq!(spine1.spec.rack.as_deref(), Some("rack1"));
    assert_eq!(spine1.spec.position.as_deref(), Some("40"));
    let location = spine1.spec.location.as_ref().unwrap();
    assert_eq!((location.longitude.as_str(), location.latitude.as_str()), ("4.3517", "50.8503"));
    assert_eq!(spine1.spec.labels[NODE_TYPE_KEY], "ixrd5");

    let leaf1 = find(&nodes, "leaf1");
    assert_eq!(leaf1.spec.labels[NODE_TYPE_KEY], "ixrd3");

    let leaf2 = find(&nodes, "leaf2");
    assert_eq!(leaf2.name(), "eu-west.site1.leafspine.leaf2");
    assert_eq!(leaf2.spec.rack, None);
    assert_eq!(leaf2.spec.location, None);

    let pe1 = find(&nodes, "pe1");
    assert_eq!(pe1.name(), "eu-west.ams1.leafspine.pe1");
    assert_eq!(pe1.spec.provider, "sros.nokia.com");
    assert_eq!(pe1.spec.labels[NODE_TYPE_KEY], "sr-1");

    let client1 = find(&nodes, "client1");
    assert_eq!(client1.spec.provider, "");
}

#[test]
fn leafspine_links_keep_declared_order() {
    let links = mapper(LEAFSPINE).list_links(LinkPolicy::Abort).unwrap();
    let names: Vec<&str> = links.iter().map(|l| l.name()).collect();
    assert_eq!(
        names,
        vec![
            "region1.site1.leafspine.spine1.e1-1.region1.site1.leafspine.leaf1.e1-49",
            "region1.site1.leafspine.spine1.e1-2.eu-west.site1.leafspine.leaf2.e1-49",
            "region1.site1.leafspine.spine1.e1-3.eu-west.ams1.leafspine.pe1.1/1/c1/1",
            "region1.site1.leafspine.client1.eth1.region1.site1.leafspine.leaf1.e1-1",
        ]
    );
}

#[test]
fn resources_serialize_as_inventory_objects() {
    let m = mapper(LAB1);
    let node = find(&m.list_nodes(), "r2").clone().with_namespace("labs");
    let link = m.list_links(LinkPolicy::Abort).unwrap().remove(0);

    let node_doc: serde_yaml::Value = serde_yaml::to_value(&node).unwrap();
    assert_eq!(node_doc["apiVersion"].as_str(), Some("inv.kuid.dev/v1alpha1"));
    assert_eq!(node_doc["kind"].as_str(), Some("Node"));
    assert_eq!(node_doc["metadata"]["name"].as_str(), Some("region1.siteB.lab1.r2"));
    assert_eq!(node_doc["metadata"]["namespace"].as_str(), Some("labs"));
    assert_eq!(node_doc["spec"]["site"].as_str(), Some("siteB"));
    assert!(node_doc["spec"].get("rack").is_none());

    let link_doc: serde_yaml::Value = serde_yaml::to_value(&link).unwrap();
    assert_eq!(link_doc["kind"].as_str(), Some("Link"));
    assert_eq!(link_doc["spec"]["endpoints"][0]["node"].as_str(), Some("r1"));
    assert_eq!(link_doc["spec"]["endpoints"][1]["site"].as_str(), Some("siteB"));

    // What goes out can be read back.
    let back: Node = serde_yaml::from_value(node_doc).unwrap();
    assert_eq!(back, node);
}
