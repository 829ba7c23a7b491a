use crate::ResultsError;
use oxrdfio::RdfFormat;
use sparesults::QueryResultsFormat;
use std::ffi::OsStr;
use std::path::Path;

/// Parses a SPARQL results format from an extension like "srj" or a media type like
/// "application/sparql-results+json".
pub fn results_format_from_name(name: &str) -> Result<QueryResultsFormat, ResultsError> {
    QueryResultsFormat::from_extension(name)
        .or_else(|| QueryResultsFormat::from_media_type(name))
        .ok_or_else(|| ResultsError::UnknownFormat(name.to_owned()))
}

/// Guesses the SPARQL results format from the extension of `path`.
pub fn results_format_from_path(path: &Path) -> Result<QueryResultsFormat, ResultsError> {
    results_format_from_name(extension(path)?)
}

/// Parses an RDF format from an extension like "ttl" or a media type like "text/turtle".
pub fn rdf_format_from_name(name: &str) -> Result<RdfFormat, ResultsError> {
    RdfFormat::from_extension(name)
        .or_else(|| RdfFormat::from_media_type(name))
        .ok_or_else(|| ResultsError::UnknownFormat(name.to_owned()))
}

/// Guesses the RDF format from the extension of `path`.
pub fn rdf_format_from_path(path: &Path) -> Result<RdfFormat, ResultsError> {
    rdf_format_from_name(extension(path)?)
}

fn extension(path: &Path) -> Result<&str, ResultsError> {
    path.extension().and_then(OsStr::to_str).ok_or_else(|| {
        ResultsError::UnknownFormat(format!(
            "{} (no file extension to guess a format from)",
            path.display()
        ))
    })
}

/// Picks the results format announced by a `Content-Type` header.
///
/// Parameters such as `charset` are ignored. Endpoints that send no or an unknown content type
/// are assumed to answer in JSON, the format that is requested from them.
pub(crate) fn results_format_from_content_type(content_type: Option<&str>) -> QueryResultsFormat {
    content_type
        .and_then(|value| value.split(';').next())
        .and_then(|media_type| QueryResultsFormat::from_media_type(media_type.trim()))
        .unwrap_or(QueryResultsFormat::Json)
}

/// Same as [results_format_from_content_type] for `CONSTRUCT` answers, defaulting to Turtle.
pub(crate) fn rdf_format_from_content_type(content_type: Option<&str>) -> RdfFormat {
    content_type
        .and_then(|value| value.split(';').next())
        .and_then(|media_type| RdfFormat::from_media_type(media_type.trim()))
        .unwrap_or(RdfFormat::Turtle)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn results_format_names() {
        assert_eq!(
            results_format_from_name("json").unwrap(),
            QueryResultsFormat::Json
        );
        assert_eq!(
            results_format_from_name("application/sparql-results+xml").unwrap(),
            QueryResultsFormat::Xml
        );
        assert_eq!(
            results_format_from_name("tsv").unwrap(),
            QueryResultsFormat::Tsv
        );
        assert!(matches!(
            results_format_from_name("xlsx"),
            Err(ResultsError::UnknownFormat(_))
        ));
    }

    #[test]
    fn results_format_paths() {
        assert_eq!(
            results_format_from_path(Path::new("uniprot/interactions.srj")).unwrap(),
            QueryResultsFormat::Json
        );
        assert!(results_format_from_path(Path::new("interactions")).is_err());
    }

    #[test]
    fn rdf_formats() {
        assert_eq!(rdf_format_from_name("ttl").unwrap(), RdfFormat::Turtle);
        assert_eq!(
            rdf_format_from_path(Path::new("variants.nt")).unwrap(),
            RdfFormat::NTriples
        );
        assert!(rdf_format_from_name("docx").is_err());
    }

    #[test]
    fn content_types() {
        assert_eq!(
            results_format_from_content_type(Some(
                "application/sparql-results+xml; charset=UTF-8"
            )),
            QueryResultsFormat::Xml
        );
        assert_eq!(
            results_format_from_content_type(Some("text/html")),
            QueryResultsFormat::Json
        );
        assert_eq!(
            results_format_from_content_type(None),
            QueryResultsFormat::Json
        );
        assert_eq!(
            rdf_format_from_content_type(Some("application/n-triples")),
            RdfFormat::NTriples
        );
        assert_eq!(rdf_format_from_content_type(None), RdfFormat::Turtle);
    }
}
