use crate::BindingValue;

/// One solution of a query: the values bound to its variables.
///
/// Unbound variables (e.g. from an `OPTIONAL` that did not match) are absent from the row. The
/// bindings keep the order in which they were added, which for parsed results is the order of
/// the result document.
///
/// ```
/// use bindgraph_model::BindingRow;
///
/// let row = BindingRow::new()
///     .with("P1_label", "SCN5A_HUMAN")
///     .with("P2_label", "FGF12_HUMAN")
///     .with("nb_expe", 12);
///
/// assert_eq!(row.len(), 3);
/// assert_eq!(row.get("P2_label").map(|v| v.lexical().into_owned()), Some("FGF12_HUMAN".to_owned()));
/// assert!(row.get("P2").is_none());
/// ```
#[derive(Clone, PartialEq, Eq, Debug, Default, Hash)]
pub struct BindingRow {
    bindings: Vec<(String, BindingValue)>,
}

impl BindingRow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the row with `value` bound to `variable`.
    #[must_use]
    pub fn with(mut self, variable: impl Into<String>, value: impl Into<BindingValue>) -> Self {
        self.bind(variable, value);
        self
    }

    /// Binds `value` to `variable`, replacing a previous binding of the same variable.
    pub fn bind(&mut self, variable: impl Into<String>, value: impl Into<BindingValue>) {
        let variable = variable.into();
        let value = value.into();
        match self.bindings.iter_mut().find(|(name, _)| *name == variable) {
            Some((_, existing)) => *existing = value,
            None => self.bindings.push((variable, value)),
        }
    }

    pub fn get(&self, variable: &str) -> Option<&BindingValue> {
        self.bindings
            .iter()
            .find_map(|(name, value)| (name == variable).then_some(value))
    }

    pub fn contains(&self, variable: &str) -> bool {
        self.get(variable).is_some()
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &BindingValue)> {
        self.bindings
            .iter()
            .map(|(name, value)| (name.as_str(), value))
    }

    pub fn variables(&self) -> impl Iterator<Item = &str> {
        self.bindings.iter().map(|(name, _)| name.as_str())
    }
}

impl<K: Into<String>, V: Into<BindingValue>> FromIterator<(K, V)> for BindingRow {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut row = Self::new();
        for (variable, value) in iter {
            row.bind(variable, value);
        }
        row
    }
}

impl IntoIterator for BindingRow {
    type Item = (String, BindingValue);
    type IntoIter = std::vec::IntoIter<(String, BindingValue)>;

    fn into_iter(self) -> Self::IntoIter {
        self.bindings.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bind_replaces_existing_value() {
        let mut row = BindingRow::new().with("x", "a").with("y", "b");
        row.bind("x", "c");

        assert_eq!(row.len(), 2);
        assert_eq!(row.get("x"), Some(&BindingValue::from("c")));
        assert_eq!(row.variables().collect::<Vec<_>>(), ["x", "y"]);
    }

    #[test]
    fn from_iter_keeps_order() {
        let row: BindingRow = [("subject", "s"), ("object", "o"), ("predicate", "p")]
            .into_iter()
            .collect();

        assert_eq!(
            row.variables().collect::<Vec<_>>(),
            ["subject", "object", "predicate"]
        );
    }

    #[test]
    fn missing_variable_is_unbound() {
        let row = BindingRow::new().with("x", 1);
        assert!(!row.contains("y"));
        assert!(row.get("y").is_none());
    }
}
