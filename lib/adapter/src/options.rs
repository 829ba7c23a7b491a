use crate::{AdapterError, MappingSpecError};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::str::FromStr;

/// What to do with rows whose source and target identify the same node.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelfLoopPolicy {
    /// Self-loops become edges like any other row.
    #[default]
    Keep,
    /// The row is ignored, as if the query had a `FILTER(?source != ?target)`.
    Skip,
}

/// What to do when no rows are supplied.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmptyInputPolicy {
    /// Return an empty graph.
    #[default]
    Allow,
    /// Fail with [AdapterError::EmptyInput](crate::AdapterError::EmptyInput).
    Reject,
}

/// Which row fields become edge attributes.
#[derive(Clone, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttributeSelection {
    /// Every field that is neither an identifier field nor used as a node attribute.
    #[default]
    Remaining,
    /// No edge attributes.
    None,
    /// Only the listed fields. Unbound fields are left out of the edge.
    Named(Vec<AttributeMapping>),
}

/// Copies a row field into an attribute, optionally under another name.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct AttributeMapping {
    pub field: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl AttributeMapping {
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            name: None,
        }
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// The attribute name, which defaults to the field name.
    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.field)
    }
}

/// Parses `FIELD` or `FIELD=NAME`.
impl FromStr for AttributeMapping {
    type Err = MappingSpecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (field, name) = match s.split_once('=') {
            Some((field, name)) => (field.trim(), Some(name.trim())),
            None => (s.trim(), None),
        };
        if field.is_empty() {
            return Err(MappingSpecError::new(s, "the field name is empty"));
        }
        let mapping = Self::new(field);
        match name {
            Some("") => Err(MappingSpecError::new(s, "the attribute name is empty")),
            Some(name) => Ok(mapping.with_name(name)),
            None => Ok(mapping),
        }
    }
}

/// The end of an edge a node attribute is attached to.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeRole {
    Source,
    Target,
}

/// Attaches a row field to the source or the target node of the row.
///
/// A node keeps the first value it is given. Later rows that mention the same node do not
/// overwrite it.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct NodeAttributeMapping {
    pub role: NodeRole,
    #[serde(flatten)]
    pub mapping: AttributeMapping,
}

impl NodeAttributeMapping {
    pub fn new(role: NodeRole, mapping: AttributeMapping) -> Self {
        Self { role, mapping }
    }
}

/// Parses `source:FIELD[=NAME]` or `target:FIELD[=NAME]`.
impl FromStr for NodeAttributeMapping {
    type Err = MappingSpecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let Some((role, mapping)) = s.split_once(':') else {
            return Err(MappingSpecError::new(
                s,
                "expected 'source:FIELD[=NAME]' or 'target:FIELD[=NAME]'",
            ));
        };
        let role = match role.trim() {
            "source" => NodeRole::Source,
            "target" => NodeRole::Target,
            _ => {
                return Err(MappingSpecError::new(
                    s,
                    "the node role must be 'source' or 'target'",
                ))
            }
        };
        let mapping = mapping
            .parse()
            .map_err(|error: MappingSpecError| MappingSpecError::new(s, error.reason))?;
        Ok(Self::new(role, mapping))
    }
}

/// How rows are mapped onto nodes and edges.
///
/// The options can be deserialized, e.g. from a TOML mapping file:
///
/// ```toml
/// source = "P1_label"
/// target = "P2_label"
/// self_loops = "skip"
/// attributes = { named = [{ field = "nb_expe", name = "nbExperiments" }] }
/// node_attributes = [{ role = "target", field = "P2", name = "href" }]
/// ```
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AdapterOptions {
    /// The field identifying the source node of each edge.
    pub source: String,
    /// The field identifying the target node of each edge.
    pub target: String,
    pub attributes: AttributeSelection,
    pub node_attributes: Vec<NodeAttributeMapping>,
    pub self_loops: SelfLoopPolicy,
    pub empty_input: EmptyInputPolicy,
}

impl Default for AdapterOptions {
    fn default() -> Self {
        Self::new("source", "target")
    }
}

impl AdapterOptions {
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            attributes: AttributeSelection::default(),
            node_attributes: Vec::new(),
            self_loops: SelfLoopPolicy::default(),
            empty_input: EmptyInputPolicy::default(),
        }
    }

    #[must_use]
    pub fn with_attributes(mut self, attributes: AttributeSelection) -> Self {
        self.attributes = attributes;
        self
    }

    #[must_use]
    pub fn with_node_attribute(mut self, mapping: NodeAttributeMapping) -> Self {
        self.node_attributes.push(mapping);
        self
    }

    #[must_use]
    pub fn with_self_loops(mut self, policy: SelfLoopPolicy) -> Self {
        self.self_loops = policy;
        self
    }

    #[must_use]
    pub fn with_empty_input(mut self, policy: EmptyInputPolicy) -> Self {
        self.empty_input = policy;
        self
    }

    /// Checks that no two mappings write to the same edge attribute or to the same attribute
    /// of a source or target node.
    pub fn validate(&self) -> Result<(), AdapterError> {
        if let AttributeSelection::Named(mappings) = &self.attributes {
            check_unique_names(mappings.iter().map(AttributeMapping::name))?;
        }
        for role in [NodeRole::Source, NodeRole::Target] {
            check_unique_names(
                self.node_attributes
                    .iter()
                    .filter(|mapping| mapping.role == role)
                    .map(|mapping| mapping.mapping.name()),
            )?;
        }
        Ok(())
    }

    /// Whether `field` is consumed as an identifier or a node attribute.
    pub(crate) fn is_reserved_field(&self, field: &str) -> bool {
        field == self.source
            || field == self.target
            || self
                .node_attributes
                .iter()
                .any(|mapping| mapping.mapping.field == field)
    }
}

fn check_unique_names<'a>(names: impl IntoIterator<Item = &'a str>) -> Result<(), AdapterError> {
    let mut seen = BTreeSet::new();
    for name in names {
        if !seen.insert(name) {
            return Err(AdapterError::DuplicateAttribute {
                name: name.to_owned(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_attribute_mapping() {
        let plain: AttributeMapping = "nb_expe".parse().unwrap();
        assert_eq!(plain, AttributeMapping::new("nb_expe"));
        assert_eq!(plain.name(), "nb_expe");

        let renamed: AttributeMapping = "nb_expe=nbExperiments".parse().unwrap();
        assert_eq!(renamed.name(), "nbExperiments");

        "=name".parse::<AttributeMapping>().unwrap_err();
        "field=".parse::<AttributeMapping>().unwrap_err();
    }

    #[test]
    fn parse_node_attribute_mapping() {
        let mapping: NodeAttributeMapping = "target:P2=href".parse().unwrap();
        assert_eq!(mapping.role, NodeRole::Target);
        assert_eq!(mapping.mapping.field, "P2");
        assert_eq!(mapping.mapping.name(), "href");

        let mapping: NodeAttributeMapping = "source:org".parse().unwrap();
        assert_eq!(mapping.role, NodeRole::Source);
        assert_eq!(mapping.mapping.name(), "org");

        "P2=href".parse::<NodeAttributeMapping>().unwrap_err();
        "middle:P2".parse::<NodeAttributeMapping>().unwrap_err();
        "target:".parse::<NodeAttributeMapping>().unwrap_err();
    }

    #[test]
    fn reserved_fields() {
        let options = AdapterOptions::new("s", "o").with_node_attribute(
            NodeAttributeMapping::new(NodeRole::Target, AttributeMapping::new("o_iri")),
        );
        assert!(options.is_reserved_field("s"));
        assert!(options.is_reserved_field("o"));
        assert!(options.is_reserved_field("o_iri"));
        assert!(!options.is_reserved_field("p"));
    }

    #[test]
    fn duplicate_attribute_names_are_rejected() {
        let options = AdapterOptions::default().with_attributes(AttributeSelection::Named(vec![
            AttributeMapping::new("nb_expe").with_name("weight"),
            AttributeMapping::new("weight"),
        ]));
        assert_eq!(
            options.validate(),
            Err(AdapterError::DuplicateAttribute {
                name: "weight".to_owned()
            })
        );

        let options = AdapterOptions::default()
            .with_node_attribute("target:P2=href".parse().unwrap())
            .with_node_attribute("target:P2_iri=href".parse().unwrap());
        assert!(options.validate().is_err());

        let options = AdapterOptions::default()
            .with_node_attribute("source:P1=href".parse().unwrap())
            .with_node_attribute("target:P2=href".parse().unwrap());
        assert_eq!(options.validate(), Ok(()));
    }

    #[test]
    fn deserialize_from_toml() {
        let options: AdapterOptions = toml::from_str(
            r#"
            source = "P1_label"
            target = "P2_label"
            self_loops = "skip"
            empty_input = "reject"
            attributes = { named = [{ field = "nb_expe", name = "nbExperiments" }] }
            node_attributes = [{ role = "target", field = "P2", name = "href" }]
            "#,
        )
        .unwrap();

        assert_eq!(
            options,
            AdapterOptions::new("P1_label", "P2_label")
                .with_self_loops(SelfLoopPolicy::Skip)
                .with_empty_input(EmptyInputPolicy::Reject)
                .with_attributes(AttributeSelection::Named(vec![
                    AttributeMapping::new("nb_expe").with_name("nbExperiments")
                ]))
                .with_node_attribute(NodeAttributeMapping::new(
                    NodeRole::Target,
                    AttributeMapping::new("P2").with_name("href")
                ))
        );
    }

    #[test]
    fn deserialize_defaults() {
        let options: AdapterOptions = toml::from_str("attributes = \"none\"").unwrap();
        assert_eq!(options.source, "source");
        assert_eq!(options.target, "target");
        assert_eq!(options.attributes, AttributeSelection::None);
        assert_eq!(options.self_loops, SelfLoopPolicy::Keep);

        toml::from_str::<AdapterOptions>("colour = \"green\"").unwrap_err();
    }
}
