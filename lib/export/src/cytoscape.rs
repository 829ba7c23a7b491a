use crate::json::attributes_to_json;
use bindgraph_model::PropertyGraph;
use serde_json::{json, Value};

/// Builds the Cytoscape.js elements document of `graph`.
///
/// Every node gets a `name` (its id unless a `name` attribute is set) so that a
/// `content: data(name)` style labels it. Edges are numbered `e0`, `e1`, ... in edge order.
pub fn to_cytoscape(graph: &PropertyGraph) -> Value {
    let nodes: Vec<Value> = graph
        .nodes()
        .iter()
        .map(|node| {
            let mut data = attributes_to_json(&node.attributes);
            data.entry("name")
                .or_insert_with(|| Value::String(node.id.clone()));
            data.insert("id".to_owned(), Value::String(node.id.clone()));
            json!({ "data": data })
        })
        .collect();

    let edges: Vec<Value> = graph
        .edges()
        .iter()
        .enumerate()
        .map(|(index, edge)| {
            let mut data = attributes_to_json(&edge.attributes);
            data.insert("id".to_owned(), Value::String(format!("e{index}")));
            data.insert("source".to_owned(), Value::String(edge.source.clone()));
            data.insert("target".to_owned(), Value::String(edge.target.clone()));
            json!({ "data": data })
        })
        .collect();

    json!({ "elements": { "nodes": nodes, "edges": edges } })
}
