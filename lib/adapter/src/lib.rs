//! The result-to-graph adapter.
//!
//! A [GraphAdapter] turns the rows of a SPARQL `SELECT` result into a [PropertyGraph]: every row
//! becomes one edge from the value of its source field to the value of its target field, and the
//! remaining fields of the row become edge attributes.
//!
//! ```
//! use bindgraph_adapter::{AdapterOptions, GraphAdapter};
//! use bindgraph_model::BindingRow;
//!
//! let rows = [
//!     BindingRow::new().with("P1_label", "SCN5A_HUMAN").with("P2_label", "FGF12_HUMAN").with("nb_expe", 12),
//!     BindingRow::new().with("P1_label", "SCN5A_HUMAN").with("P2_label", "CALM_HUMAN").with("nb_expe", 3),
//! ];
//!
//! let adapter = GraphAdapter::new(AdapterOptions::new("P1_label", "P2_label"));
//! let graph = adapter.build(&rows)?;
//!
//! assert_eq!(graph.node_count(), 3);
//! assert_eq!(graph.edge_count(), 2);
//! # Result::<_, Box<dyn std::error::Error>>::Ok(())
//! ```
//!
//! [PropertyGraph]: bindgraph_model::PropertyGraph

mod adapter;
mod error;
mod options;

pub use adapter::{build_graph, GraphAdapter};
pub use error::{AdapterError, MappingSpecError};
pub use options::{
    AdapterOptions, AttributeMapping, AttributeSelection, EmptyInputPolicy, NodeAttributeMapping,
    NodeRole, SelfLoopPolicy,
};
