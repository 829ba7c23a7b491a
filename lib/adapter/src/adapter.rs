use crate::{
    AdapterError, AdapterOptions, AttributeSelection, EmptyInputPolicy, NodeRole, SelfLoopPolicy,
};
use bindgraph_model::{Attributes, BindingRow, BindingValue, Edge, PropertyGraph};
use std::borrow::Borrow;

/// Folds binding rows into a [PropertyGraph].
///
/// The adapter holds no state besides its options, so one adapter can build any number of
/// independent graphs.
#[derive(Clone, Debug, Default)]
pub struct GraphAdapter {
    options: AdapterOptions,
}

impl GraphAdapter {
    pub fn new(options: AdapterOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &AdapterOptions {
        &self.options
    }

    /// Builds a graph with one node per distinct identifier and one edge per row.
    ///
    /// Rows may be passed by value or by reference. The whole input is consumed before the graph
    /// is returned; the first row that lacks an identifier field aborts the fold. Options that
    /// map two fields onto the same attribute name are rejected before any row is read.
    pub fn build<R: Borrow<BindingRow>>(
        &self,
        rows: impl IntoIterator<Item = R>,
    ) -> Result<PropertyGraph, AdapterError> {
        self.options.validate()?;
        let mut graph = PropertyGraph::new();
        let mut row_count = 0;
        let mut skipped = 0;

        for (index, row) in rows.into_iter().enumerate() {
            row_count += 1;
            let row = row.borrow();
            let source = required(row, index, &self.options.source)?.lexical();
            let target = required(row, index, &self.options.target)?.lexical();

            if source == target && self.options.self_loops == SelfLoopPolicy::Skip {
                skipped += 1;
                continue;
            }

            let edge = Edge::new(&*source, &*target)
                .with_attributes(self.edge_attributes(row));
            graph.push_edge(edge);
            self.attach_node_attributes(&mut graph, row, &source, &target);
        }

        if row_count == 0 && self.options.empty_input == EmptyInputPolicy::Reject {
            return Err(AdapterError::EmptyInput);
        }

        tracing::debug!(
            rows = row_count,
            skipped_self_loops = skipped,
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            "Built graph from query results"
        );
        Ok(graph)
    }

    fn edge_attributes(&self, row: &BindingRow) -> Attributes {
        match &self.options.attributes {
            AttributeSelection::Remaining => row
                .iter()
                .filter(|(field, _)| !self.options.is_reserved_field(field))
                .map(|(field, value)| (field.to_owned(), value.to_attribute()))
                .collect(),
            AttributeSelection::None => Attributes::new(),
            AttributeSelection::Named(mappings) => mappings
                .iter()
                .filter_map(|mapping| {
                    row.get(&mapping.field)
                        .map(|value| (mapping.name().to_owned(), value.to_attribute()))
                })
                .collect(),
        }
    }

    fn attach_node_attributes(
        &self,
        graph: &mut PropertyGraph,
        row: &BindingRow,
        source: &str,
        target: &str,
    ) {
        for node_mapping in &self.options.node_attributes {
            let Some(value) = row.get(&node_mapping.mapping.field) else {
                continue;
            };
            let id = match node_mapping.role {
                NodeRole::Source => source,
                NodeRole::Target => target,
            };
            graph
                .insert_node(id)
                .attributes
                .entry(node_mapping.mapping.name().to_owned())
                .or_insert_with(|| value.to_attribute());
        }
    }
}

fn required<'row>(
    row: &'row BindingRow,
    index: usize,
    field: &str,
) -> Result<&'row BindingValue, AdapterError> {
    row.get(field).ok_or_else(|| AdapterError::MissingField {
        row: index,
        field: field.to_owned(),
    })
}

/// Builds a graph from `rows` with the default options and the given identifier fields.
pub fn build_graph<R: Borrow<BindingRow>>(
    rows: impl IntoIterator<Item = R>,
    source: &str,
    target: &str,
) -> Result<PropertyGraph, AdapterError> {
    GraphAdapter::new(AdapterOptions::new(source, target)).build(rows)
}
