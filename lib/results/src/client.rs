use crate::format::{rdf_format_from_content_type, results_format_from_content_type};
use crate::{
    collect_rows, read_solutions, read_triples, QueryRows, ResultsError, OBJECT, PREDICATE, SUBJECT,
};
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::{Client, Response, Url};
use std::time::Duration;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);
const SELECT_ACCEPT: &str =
    "application/sparql-results+json, application/sparql-results+xml;q=0.9, text/tab-separated-values;q=0.8";
const CONSTRUCT_ACCEPT: &str = "text/turtle, application/n-triples;q=0.9, application/rdf+xml;q=0.8";
const MAX_ERROR_BODY_LEN: usize = 512;

/// A client for the [SPARQL 1.1 Protocol](https://www.w3.org/TR/sparql11-protocol/).
///
/// Queries are sent with `POST` as URL-encoded form, which public endpoints such as UniProt,
/// Bgee or DBpedia accept for long queries as well.
#[derive(Clone, Debug)]
pub struct SparqlClient {
    client: Client,
    endpoint: Url,
    timeout: Duration,
    user_agent: String,
}

impl SparqlClient {
    pub fn new(endpoint: &str) -> Result<Self, ResultsError> {
        let endpoint =
            Url::parse(endpoint).map_err(|_| ResultsError::InvalidEndpoint(endpoint.to_owned()))?;
        let timeout = DEFAULT_TIMEOUT;
        let user_agent = concat!("bindgraph/", env!("CARGO_PKG_VERSION")).to_owned();
        Ok(Self {
            client: build_client(timeout, &user_agent)?,
            endpoint,
            timeout,
            user_agent,
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Sets the timeout of a whole request, including reading the answer.
    pub fn with_timeout(mut self, timeout: Duration) -> Result<Self, ResultsError> {
        self.client = build_client(timeout, &self.user_agent)?;
        self.timeout = timeout;
        Ok(self)
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Result<Self, ResultsError> {
        let user_agent = user_agent.into();
        self.client = build_client(self.timeout, &user_agent)?;
        self.user_agent = user_agent;
        Ok(self)
    }

    /// Evaluates a `SELECT` query and returns all of its solutions.
    pub async fn select(&self, query: &str) -> Result<QueryRows, ResultsError> {
        let response = self.send(query, SELECT_ACCEPT).await?;
        let format = results_format_from_content_type(content_type(&response));
        let body = response.bytes().await?;
        tracing::debug!(?format, bytes = body.len(), "Received query results");

        let solutions = read_solutions(&body[..], format)?;
        let variables = solutions.variables();
        let rows = collect_rows(solutions)?;
        Ok(QueryRows { variables, rows })
    }

    /// Evaluates a `CONSTRUCT` or `DESCRIBE` query and returns one row per triple.
    pub async fn construct(&self, query: &str) -> Result<QueryRows, ResultsError> {
        let response = self.send(query, CONSTRUCT_ACCEPT).await?;
        let format = rdf_format_from_content_type(content_type(&response));
        let body = response.bytes().await?;
        tracing::debug!(?format, bytes = body.len(), "Received graph");

        let rows = collect_rows(read_triples(&body[..], format, None)?)?;
        Ok(QueryRows {
            variables: vec![SUBJECT.to_owned(), PREDICATE.to_owned(), OBJECT.to_owned()],
            rows,
        })
    }

    async fn send(&self, query: &str, accept: &str) -> Result<Response, ResultsError> {
        tracing::info!(endpoint = %self.endpoint, "Sending SPARQL query");
        let response = self
            .client
            .post(self.endpoint.clone())
            .header(ACCEPT, accept)
            .form(&[("query", query)])
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let mut body = match response.text().await {
            Ok(body) => body,
            Err(error) => {
                tracing::debug!(%error, %status, "Failed to read the error answer of the endpoint");
                String::new()
            }
        };
        truncate_at_char_boundary(&mut body, MAX_ERROR_BODY_LEN);
        Err(ResultsError::Status {
            status: status.as_u16(),
            body,
        })
    }
}

fn truncate_at_char_boundary(text: &mut String, max_len: usize) {
    if text.len() > max_len {
        let mut end = max_len;
        while !text.is_char_boundary(end) {
            end -= 1;
        }
        text.truncate(end);
    }
}

fn build_client(timeout: Duration, user_agent: &str) -> Result<Client, ResultsError> {
    Ok(Client::builder()
        .timeout(timeout)
        .user_agent(user_agent)
        .build()?)
}

fn content_type(response: &Response) -> Option<&str> {
    response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
}
