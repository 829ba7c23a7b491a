use crate::Attributes;
use rustc_hash::FxHashMap;

/// A node of a [PropertyGraph].
#[derive(Clone, PartialEq, Debug)]
pub struct Node {
    pub id: String,
    pub attributes: Attributes,
}

impl Node {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            attributes: Attributes::new(),
        }
    }
}

/// A directed edge of a [PropertyGraph].
#[derive(Clone, PartialEq, Debug)]
pub struct Edge {
    pub source: String,
    pub target: String,
    pub attributes: Attributes,
}

impl Edge {
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            attributes: Attributes::new(),
        }
    }

    #[must_use]
    pub fn with_attributes(mut self, attributes: Attributes) -> Self {
        self.attributes = attributes;
        self
    }

    pub fn is_self_loop(&self) -> bool {
        self.source == self.target
    }
}

/// A rendering-ready graph: a set of uniquely identified nodes and a list of directed edges.
///
/// Nodes are kept in the order in which they were first seen. Edges are never merged, so two
/// edges with the same endpoints stay two edges. Every edge endpoint is a node of the graph.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct PropertyGraph {
    nodes: Vec<Node>,
    node_index: FxHashMap<String, usize>,
    edges: Vec<Edge>,
}

impl PropertyGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn node(&self, id: &str) -> Option<&Node> {
        self.node_index.get(id).map(|index| &self.nodes[*index])
    }

    pub fn contains_node(&self, id: &str) -> bool {
        self.node_index.contains_key(id)
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.edges.is_empty()
    }

    /// Returns the node with the given id, inserting it if it does not exist yet.
    pub fn insert_node(&mut self, id: &str) -> &mut Node {
        let index = match self.node_index.get(id) {
            Some(index) => *index,
            None => {
                let index = self.nodes.len();
                self.nodes.push(Node::new(id));
                self.node_index.insert(id.to_owned(), index);
                index
            }
        };
        &mut self.nodes[index]
    }

    /// Appends an edge, inserting its source and target nodes if needed.
    pub fn push_edge(&mut self, edge: Edge) {
        self.insert_node(&edge.source);
        self.insert_node(&edge.target);
        self.edges.push(edge);
    }

    pub fn node_attributes_mut(&mut self, id: &str) -> Option<&mut Attributes> {
        let index = *self.node_index.get(id)?;
        Some(&mut self.nodes[index].attributes)
    }

    pub fn edge_attributes_mut(&mut self, index: usize) -> Option<&mut Attributes> {
        self.edges.get_mut(index).map(|edge| &mut edge.attributes)
    }

    pub fn into_parts(self) -> (Vec<Node>, Vec<Edge>) {
        (self.nodes, self.edges)
    }
}
