//! Serializations of [PropertyGraph]s for graph drawing libraries.
//!
//! ```
//! use bindgraph_export::{graph_to_string, GraphFormat};
//! use bindgraph_model::{Edge, PropertyGraph};
//!
//! let mut graph = PropertyGraph::new();
//! graph.push_edge(Edge::new("A", "B"));
//!
//! assert_eq!(
//!     graph_to_string(&graph, GraphFormat::Dot)?,
//!     "digraph {\n  \"A\";\n  \"B\";\n  \"A\" -> \"B\";\n}\n"
//! );
//! # Result::<_, Box<dyn std::error::Error>>::Ok(())
//! ```

mod cytoscape;
mod dot;
mod error;
mod format;
mod json;
mod node_link;

pub use cytoscape::to_cytoscape;
pub use dot::write_dot;
pub use error::ExportError;
pub use format::GraphFormat;
pub use node_link::to_node_link;

use bindgraph_model::PropertyGraph;
use std::io::Write;

/// Writes `graph` in the given format and returns the writer.
pub fn write_graph<W: Write>(
    graph: &PropertyGraph,
    mut writer: W,
    format: GraphFormat,
) -> Result<W, ExportError> {
    tracing::debug!(
        %format,
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "Writing graph"
    );
    match format {
        GraphFormat::Cytoscape => write_json(&to_cytoscape(graph), &mut writer)?,
        GraphFormat::NodeLink => write_json(&to_node_link(graph), &mut writer)?,
        GraphFormat::Dot => return Ok(write_dot(graph, writer)?),
    }
    Ok(writer)
}

/// Serializes `graph` into a string.
pub fn graph_to_string(graph: &PropertyGraph, format: GraphFormat) -> Result<String, ExportError> {
    let buffer = write_graph(graph, Vec::new(), format)?;
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}

fn write_json<W: Write>(document: &serde_json::Value, writer: &mut W) -> Result<(), ExportError> {
    serde_json::to_writer_pretty(&mut *writer, document)?;
    writeln!(writer)?;
    Ok(())
}
