use crate::cli::MappingArgs;
use anyhow::Context;
use bindgraph::adapter::{
    AdapterOptions, AttributeSelection, EmptyInputPolicy, NodeAttributeMapping, SelfLoopPolicy,
};
use bindgraph::results::{OBJECT, SUBJECT};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// The content of a TOML mapping file. Every key is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MappingFile {
    source: Option<String>,
    target: Option<String>,
    attributes: Option<AttributeSelection>,
    node_attributes: Vec<NodeAttributeMapping>,
    self_loops: Option<SelfLoopPolicy>,
    empty_input: Option<EmptyInputPolicy>,
}

impl MappingFile {
    /// Overrides `options` with the keys set in the file.
    fn apply(self, options: &mut AdapterOptions) {
        if let Some(source) = self.source {
            options.source = source;
        }
        if let Some(target) = self.target {
            options.target = target;
        }
        if let Some(attributes) = self.attributes {
            options.attributes = attributes;
        }
        options.node_attributes.extend(self.node_attributes);
        if let Some(self_loops) = self.self_loops {
            options.self_loops = self_loops;
        }
        if let Some(empty_input) = self.empty_input {
            options.empty_input = empty_input;
        }
    }
}

impl MappingArgs {
    /// Builds the adapter options: the defaults of the input kind, then the mapping file if any,
    /// then the command line flags.
    ///
    /// Triples go from their subject to their object unless a source or target is set.
    pub fn to_options(&self, triples: bool) -> anyhow::Result<AdapterOptions> {
        let mut options = if triples {
            AdapterOptions::new(SUBJECT, OBJECT)
        } else {
            AdapterOptions::default()
        };
        if let Some(path) = &self.mapping {
            load_mapping_file(path)?.apply(&mut options);
        }
        if let Some(source) = &self.source {
            options.source.clone_from(source);
        }
        if let Some(target) = &self.target {
            options.target.clone_from(target);
        }
        if self.no_attributes {
            options.attributes = AttributeSelection::None;
        } else if !self.attributes.is_empty() {
            options.attributes = AttributeSelection::Named(self.attributes.clone());
        }
        options
            .node_attributes
            .extend(self.node_attributes.iter().cloned());
        if self.skip_self_loops {
            options.self_loops = SelfLoopPolicy::Skip;
        }
        if self.require_non_empty {
            options.empty_input = EmptyInputPolicy::Reject;
        }
        tracing::debug!(?options, "Resolved mapping");
        Ok(options)
    }
}

/// Reads a [MappingFile] from a TOML file.
pub fn load_mapping_file(path: &Path) -> anyhow::Result<MappingFile> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read the mapping file {}", path.display()))?;
    toml::from_str(&content)
        .with_context(|| format!("Invalid mapping file {}", path.display()))
}
