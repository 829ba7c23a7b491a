//! Reads SPARQL query results into [BindingRow]s.
//!
//! Result documents are parsed with [sparesults] (CSV with [csv]), RDF documents with
//! [oxrdfio] and remote endpoints are queried with [SparqlClient]. Every reader yields fallible
//! rows; use [collect_rows] to gather them before handing them to the graph adapter, so that a
//! broken document never produces a partial graph.

mod client;
mod error;
mod format;
mod solutions;
mod triples;

pub use client::{SparqlClient, DEFAULT_TIMEOUT};
pub use error::ResultsError;
pub use format::{
    rdf_format_from_name, rdf_format_from_path, results_format_from_name,
    results_format_from_path,
};
pub use oxrdfio::RdfFormat;
pub use solutions::{read_solutions, solution_to_row, Solutions};
pub use sparesults::QueryResultsFormat;
pub use triples::{quad_to_row, read_triples, TripleRows, OBJECT, PREDICATE, SUBJECT};

use bindgraph_model::BindingRow;

/// The rows of a query together with the variables announced by the endpoint.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QueryRows {
    pub variables: Vec<String>,
    pub rows: Vec<BindingRow>,
}

/// Gathers all rows, stopping at the first error.
pub fn collect_rows<E>(
    rows: impl IntoIterator<Item = Result<BindingRow, E>>,
) -> Result<Vec<BindingRow>, E> {
    let rows = rows.into_iter().collect::<Result<Vec<_>, E>>()?;
    tracing::debug!(rows = rows.len(), "Collected query rows");
    Ok(rows)
}
