/// An error raised while folding rows into a graph.
///
/// Every error aborts the whole fold. No partially built graph is ever returned.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum AdapterError {
    /// A row does not bind one of the two identifier fields.
    #[error("Row {row} has no value for the required field '{field}'")]
    MissingField { row: usize, field: String },
    /// Two mappings store their values under the same attribute name of an edge or a node.
    #[error("The attribute name '{name}' is used by more than one mapping")]
    DuplicateAttribute { name: String },
    /// No rows were supplied although a non-empty graph is required.
    #[error("The query returned no rows but a non-empty graph is required")]
    EmptyInput,
}

/// An invalid textual attribute mapping such as `nb_expe=nbExperiments` or `target:P2=href`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid mapping '{spec}': {reason}")]
pub struct MappingSpecError {
    spec: String,
    pub(crate) reason: &'static str,
}

impl MappingSpecError {
    pub(crate) fn new(spec: &str, reason: &'static str) -> Self {
        Self {
            spec: spec.to_owned(),
            reason,
        }
    }
}
