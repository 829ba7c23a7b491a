use std::ffi::OsStr;
use std::fmt::{Display, Formatter};
use std::path::Path;

/// The serializations a [PropertyGraph](bindgraph_model::PropertyGraph) can be written in.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub enum GraphFormat {
    /// [Cytoscape.js elements JSON](https://js.cytoscape.org/#notation/elements-json).
    Cytoscape,
    /// The node-link JSON used by networkx and d3-force.
    NodeLink,
    /// [Graphviz DOT](https://graphviz.org/doc/info/lang.html).
    Dot,
}

impl GraphFormat {
    /// The canonical file extension.
    pub fn file_extension(self) -> &'static str {
        match self {
            Self::Cytoscape => "cyjs",
            Self::NodeLink => "json",
            Self::Dot => "dot",
        }
    }

    pub fn media_type(self) -> &'static str {
        match self {
            Self::Cytoscape | Self::NodeLink => "application/json",
            Self::Dot => "text/vnd.graphviz",
        }
    }

    /// Looks up a format by extension or short name.
    ///
    /// ```
    /// use bindgraph_export::GraphFormat;
    ///
    /// assert_eq!(GraphFormat::from_extension("gv"), Some(GraphFormat::Dot));
    /// assert_eq!(GraphFormat::from_extension("cytoscape"), Some(GraphFormat::Cytoscape));
    /// ```
    pub fn from_extension(extension: &str) -> Option<Self> {
        match extension.to_ascii_lowercase().as_str() {
            "cyjs" | "cytoscape" => Some(Self::Cytoscape),
            "json" | "node-link" | "nodelink" => Some(Self::NodeLink),
            "dot" | "gv" | "graphviz" => Some(Self::Dot),
            _ => None,
        }
    }

    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(OsStr::to_str)
            .and_then(Self::from_extension)
    }
}

impl Display for GraphFormat {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Cytoscape => "Cytoscape JSON",
            Self::NodeLink => "node-link JSON",
            Self::Dot => "DOT",
        })
    }
}
