use crate::json::attributes_to_json;
use bindgraph_model::PropertyGraph;
use serde_json::{json, Value};

/// Builds the node-link document of `graph`, as read by networkx' `node_link_graph`.
///
/// The graph is declared as a directed multigraph, since edges are never merged.
pub fn to_node_link(graph: &PropertyGraph) -> Value {
    let nodes: Vec<Value> = graph
        .nodes()
        .iter()
        .map(|node| {
            let mut data = attributes_to_json(&node.attributes);
            data.insert("id".to_owned(), Value::String(node.id.clone()));
            Value::Object(data)
        })
        .collect();

    let links: Vec<Value> = graph
        .edges()
        .iter()
        .map(|edge| {
            let mut data = attributes_to_json(&edge.attributes);
            data.insert("source".to_owned(), Value::String(edge.source.clone()));
            data.insert("target".to_owned(), Value::String(edge.target.clone()));
            Value::Object(data)
        })
        .collect();

    json!({
        "directed": true,
        "multigraph": true,
        "graph": {},
        "nodes": nodes,
        "links": links,
    })
}
