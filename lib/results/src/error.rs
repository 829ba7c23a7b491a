use oxrdfio::RdfParseError;
use sparesults::QueryResultsParseError;
use std::io;

/// An error raised while obtaining binding rows.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ResultsError {
    /// An error while parsing a SPARQL result document.
    #[error(transparent)]
    Parse(#[from] QueryResultsParseError),
    /// An error while reading a CSV result document.
    #[error(transparent)]
    Csv(#[from] csv::Error),
    /// An error while parsing an RDF document.
    #[error(transparent)]
    RdfParse(#[from] RdfParseError),
    /// The document is the answer of an `ASK` query.
    #[error("The query results are a boolean ({0}) and not a sequence of solutions")]
    NotSolutions(bool),
    /// Neither an extension nor a media type of a supported format.
    #[error("The format '{0}' is unknown")]
    UnknownFormat(String),
    #[error("Invalid base IRI '{0}'")]
    InvalidBaseIri(String),
    #[error("Invalid SPARQL endpoint URL '{0}'")]
    InvalidEndpoint(String),
    /// Error from the HTTP client.
    #[error(transparent)]
    Http(#[from] reqwest::Error),
    /// The endpoint answered with a non-success status.
    #[error("The SPARQL endpoint answered with status {status}: {body}")]
    Status { status: u16, body: String },
    #[error(transparent)]
    Io(#[from] io::Error),
}
