use crate::cli::{Args, Command, MappingArgs, OutputArgs};
use anyhow::{bail, Context};
use bindgraph::adapter::{AdapterOptions, GraphAdapter};
use bindgraph::export::{write_graph, GraphFormat};
use bindgraph::model::{BindingRow, PropertyGraph};
use bindgraph::results::{
    collect_rows, rdf_format_from_name, rdf_format_from_path, read_solutions, read_triples,
    results_format_from_name, results_format_from_path, SparqlClient,
};
use clap::Parser;
use std::fs::{self, File};
use std::io::{self, stdin, stdout, BufReader, BufWriter, Read, Write};
use std::path::Path;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

mod cli;
mod mapping;

#[tokio::main]
pub async fn main() -> anyhow::Result<()> {
    let matches = Args::parse();
    init_logging(matches.verbose);
    match matches.command {
        Command::Convert {
            from_file,
            from_format,
            triples,
            from_base,
            mapping,
            output,
        } => {
            let options = mapping.to_options(triples)?;
            let input: Box<dyn Read> = match &from_file {
                Some(from_file) => Box::new(BufReader::new(File::open(from_file).with_context(
                    || format!("Failed to open {}", from_file.display()),
                )?)),
                None => Box::new(stdin().lock()),
            };
            let rows = if triples {
                let format = if let Some(format) = from_format {
                    rdf_format_from_name(&format)?
                } else if let Some(from_file) = &from_file {
                    rdf_format_from_path(from_file)?
                } else {
                    bail!("The --from-format option must be set when reading from stdin")
                };
                collect_rows(read_triples(input, format, from_base.as_deref())?)?
            } else {
                let format = if let Some(format) = from_format {
                    results_format_from_name(&format)?
                } else if let Some(from_file) = &from_file {
                    results_format_from_path(from_file)?
                } else {
                    bail!("The --from-format option must be set when reading from stdin")
                };
                collect_rows(read_solutions(input, format)?)?
            };
            let graph = rows_to_graph(options, &rows)?;
            write_output(&graph, &output)
        }
        Command::Query {
            endpoint,
            query,
            query_file,
            construct,
            timeout,
            mapping,
            output,
        } => {
            let query = match (query, query_file) {
                (Some(query), _) => query,
                (None, Some(query_file)) => fs::read_to_string(&query_file)
                    .with_context(|| format!("Failed to read {}", query_file.display()))?,
                (None, None) => bail!("Either --query or --query-file must be set"),
            };
            let graph = query_graph(
                &endpoint,
                &query,
                construct,
                Duration::from_secs(timeout),
                &mapping,
            )
            .await?;
            write_output(&graph, &output)
        }
    }
}

async fn query_graph(
    endpoint: &str,
    query: &str,
    construct: bool,
    timeout: Duration,
    mapping: &MappingArgs,
) -> anyhow::Result<PropertyGraph> {
    let options = mapping.to_options(construct)?;
    let client = SparqlClient::new(endpoint)?.with_timeout(timeout)?;
    let answer = if construct {
        client.construct(query).await
    } else {
        client.select(query).await
    }
    .with_context(|| format!("The query to {endpoint} failed"))?;
    tracing::info!(
        variables = ?answer.variables,
        rows = answer.rows.len(),
        "Received the query answer"
    );
    for field in [&options.source, &options.target] {
        if !answer.variables.contains(field) {
            tracing::warn!(
                field = %field,
                "The query does not project the variable used as edge endpoint"
            );
        }
    }
    rows_to_graph(options, &answer.rows)
}

fn rows_to_graph(options: AdapterOptions, rows: &[BindingRow]) -> anyhow::Result<PropertyGraph> {
    GraphAdapter::new(options)
        .build(rows)
        .context("Failed to build the graph")
}

fn write_output(graph: &PropertyGraph, output: &OutputArgs) -> anyhow::Result<()> {
    let format = if let Some(format) = &output.to_format {
        graph_format_from_name(format)?
    } else if let Some(to_file) = &output.to_file {
        graph_format_from_path(to_file)?
    } else {
        bail!("The --to-format option must be set when writing to stdout")
    };
    match &output.to_file {
        Some(to_file) => close_file_writer(write_graph(
            graph,
            BufWriter::new(
                File::create(to_file)
                    .with_context(|| format!("Failed to create {}", to_file.display()))?,
            ),
            format,
        )?)?,
        None => write_graph(graph, stdout().lock(), format)?.flush()?,
    }
    tracing::info!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        %format,
        "Graph written"
    );
    Ok(())
}

fn graph_format_from_name(name: &str) -> anyhow::Result<GraphFormat> {
    GraphFormat::from_extension(name).with_context(|| {
        format!("The graph format {name} is unknown, expected cyjs, json or dot")
    })
}

fn graph_format_from_path(path: &Path) -> anyhow::Result<GraphFormat> {
    GraphFormat::from_path(path).with_context(|| {
        format!(
            "The graph format of {} cannot be guessed from its extension, use --to-format",
            path.display()
        )
    })
}

fn close_file_writer(writer: BufWriter<File>) -> io::Result<()> {
    let mut file = writer
        .into_inner()
        .map_err(io::IntoInnerError::into_error)?;
    file.flush()?;
    file.sync_all()
}

/// Logs to stderr. RUST_LOG wins over the verbosity flag.
fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

#[cfg(test)]
#[allow(clippy::panic_in_result_fn)]
mod tests {
    use super::*;
    use bindgraph::model::BindingValue;
    use bindgraph::results::DEFAULT_TIMEOUT;

    #[test]
    fn graph_format_names() -> anyhow::Result<()> {
        assert_eq!(graph_format_from_name("cyjs")?, GraphFormat::Cytoscape);
        assert_eq!(graph_format_from_name("DOT")?, GraphFormat::Dot);
        assert_eq!(
            graph_format_from_path(Path::new("interactions.json"))?,
            GraphFormat::NodeLink
        );
        graph_format_from_name("png").unwrap_err();
        graph_format_from_path(Path::new("interactions")).unwrap_err();
        Ok(())
    }

    #[test]
    fn rows_to_graph_adds_context() {
        let rows = [BindingRow::new().with("source", BindingValue::from("A"))];
        let error = rows_to_graph(AdapterOptions::default(), &rows).unwrap_err();
        assert_eq!(error.to_string(), "Failed to build the graph");
        assert!(format!("{error:#}").contains("no value for the required field 'target'"));
    }

    #[test]
    fn query_timeout_defaults_to_client_timeout() -> anyhow::Result<()> {
        let args = Args::try_parse_from([
            "bindgraph",
            "query",
            "--endpoint",
            "http://127.0.0.1:9/sparql",
            "--query",
            "SELECT * WHERE { ?source ?p ?target }",
            "--to-format",
            "dot",
        ])?;
        match args.command {
            Command::Query { timeout, .. } => {
                assert_eq!(Duration::from_secs(timeout), DEFAULT_TIMEOUT);
            }
            Command::Convert { .. } => panic!("expected the query command"),
        }
        Ok(())
    }

    #[test]
    fn clap_debug() {
        use clap::CommandFactory;

        Args::command().debug_assert()
    }
}
