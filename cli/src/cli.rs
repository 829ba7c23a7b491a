use bindgraph::adapter::{AttributeMapping, NodeAttributeMapping};
use bindgraph::results::DEFAULT_TIMEOUT;
use clap::{ArgAction, Args as ClapArgs, Parser, Subcommand, ValueHint};
use std::path::PathBuf;

#[derive(Parser)]
#[command(about, version, name = "bindgraph")]
/// Bindgraph turns SPARQL query results into graphs for Cytoscape, networkx or Graphviz
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
    /// Log more details to stderr (-v: info, -vv: debug, -vvv: trace)
    ///
    /// The RUST_LOG environment variable takes precedence.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Command {
    /// Convert a SPARQL results document (or an RDF document) into a graph
    Convert {
        /// File to read the query results from
        ///
        /// If no file is given, stdin is read.
        #[arg(short, long, value_hint = ValueHint::FilePath)]
        from_file: Option<PathBuf>,
        /// The format of the input
        ///
        /// It can be an extension like "srj" or "ttl" or a MIME type like "application/sparql-results+json".
        ///
        /// By default the format is guessed from the input file extension.
        #[arg(long, required_unless_present = "from_file")]
        from_format: Option<String>,
        /// Read an RDF document and turn each triple into an edge from its subject to its object
        ///
        /// The rows have the fields "subject", "predicate" and "object".
        #[arg(long)]
        triples: bool,
        /// Base IRI of the RDF document to read
        #[arg(long, requires = "triples", value_hint = ValueHint::Url)]
        from_base: Option<String>,
        #[command(flatten)]
        mapping: MappingArgs,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Evaluate a query against a remote SPARQL endpoint and write the answer as a graph
    Query {
        /// URL of the SPARQL endpoint, e.g. https://sparql.uniprot.org/sparql/
        #[arg(short, long, env = "BINDGRAPH_ENDPOINT", value_hint = ValueHint::Url)]
        endpoint: String,
        /// The SPARQL query
        #[arg(short, long, conflicts_with = "query_file", required_unless_present = "query_file")]
        query: Option<String>,
        /// File containing the SPARQL query
        #[arg(long, value_hint = ValueHint::FilePath)]
        query_file: Option<PathBuf>,
        /// The query is a CONSTRUCT or DESCRIBE query: each returned triple becomes an edge
        #[arg(long)]
        construct: bool,
        /// Request timeout in seconds
        #[arg(long, default_value_t = DEFAULT_TIMEOUT.as_secs())]
        timeout: u64,
        #[command(flatten)]
        mapping: MappingArgs,
        #[command(flatten)]
        output: OutputArgs,
    },
}

/// How rows become nodes and edges.
#[derive(ClapArgs, Clone, Debug, Default)]
pub struct MappingArgs {
    /// TOML file describing the mapping
    ///
    /// The other mapping options override the values of the file.
    #[arg(long, value_hint = ValueHint::FilePath)]
    pub mapping: Option<PathBuf>,
    /// Variable identifying the source node of each edge [default: "source", or "subject" for triples]
    #[arg(short, long)]
    pub source: Option<String>,
    /// Variable identifying the target node of each edge [default: "target", or "object" for triples]
    #[arg(short, long)]
    pub target: Option<String>,
    /// Variable to copy onto the edges, optionally renamed
    ///
    /// By default every variable that is neither the source, the target nor a node attribute
    /// becomes an edge attribute.
    #[arg(long = "attribute", value_name = "FIELD[=NAME]")]
    pub attributes: Vec<AttributeMapping>,
    /// Do not copy any variable onto the edges
    #[arg(long, conflicts_with = "attributes")]
    pub no_attributes: bool,
    /// Variable to copy onto the source or target node, optionally renamed
    #[arg(long = "node-attribute", value_name = "source|target:FIELD[=NAME]")]
    pub node_attributes: Vec<NodeAttributeMapping>,
    /// Ignore rows whose source and target are the same node
    #[arg(long)]
    pub skip_self_loops: bool,
    /// Fail if the query returned no rows
    #[arg(long)]
    pub require_non_empty: bool,
}

/// Where and how the graph is written.
#[derive(ClapArgs, Clone, Debug)]
pub struct OutputArgs {
    /// File to write the graph to
    ///
    /// If no file is given, stdout is written.
    #[arg(long, value_hint = ValueHint::FilePath)]
    pub to_file: Option<PathBuf>,
    /// The graph format: "cyjs" (Cytoscape.js), "json" (node-link) or "dot" (Graphviz)
    ///
    /// By default the format is guessed from the target file extension.
    #[arg(long, required_unless_present = "to_file")]
    pub to_format: Option<String>,
}
