use crate::ResultsError;
use bindgraph_model::{BindingRow, BlankNode, Literal, NamedNode, Term};
use sparesults::{
    QueryResultsFormat, QueryResultsParser, QuerySolution, ReaderQueryResultsParserOutput,
    ReaderSolutionsParser,
};
use std::io::Read;

/// The solutions of a SPARQL result document, read lazily as [BindingRow]s.
pub struct Solutions<R: Read> {
    inner: SolutionsKind<R>,
}

enum SolutionsKind<R: Read> {
    Parsed(ReaderSolutionsParser<R>),
    Csv {
        variables: Vec<String>,
        records: csv::StringRecordsIntoIter<R>,
    },
}

impl<R: Read> Solutions<R> {
    /// The variables declared in the head of the document.
    pub fn variables(&self) -> Vec<String> {
        match &self.inner {
            SolutionsKind::Parsed(inner) => inner
                .variables()
                .iter()
                .map(|variable| variable.as_str().to_owned())
                .collect(),
            SolutionsKind::Csv { variables, .. } => variables.clone(),
        }
    }
}

impl<R: Read> Iterator for Solutions<R> {
    type Item = Result<BindingRow, ResultsError>;

    fn next(&mut self) -> Option<Self::Item> {
        match &mut self.inner {
            SolutionsKind::Parsed(inner) => {
                let solution = inner.next()?;
                Some(solution.map(|s| solution_to_row(&s)).map_err(Into::into))
            }
            SolutionsKind::Csv { variables, records } => {
                let record = records.next()?;
                Some(
                    record
                        .map(|record| csv_record_to_row(variables, &record))
                        .map_err(Into::into),
                )
            }
        }
    }
}

/// Reads a SPARQL result document (JSON, XML, CSV or TSV).
///
/// The answer of an `ASK` query is rejected with [ResultsError::NotSolutions].
///
/// CSV results carry no term types: a cell that is an absolute IRI is read as an IRI, a cell
/// starting with `_:` as a blank node and anything else as a simple literal. Empty cells are
/// unbound.
///
/// ```
/// use bindgraph_results::{read_solutions, QueryResultsFormat};
///
/// let document = r#"{"head":{"vars":["x"]},"results":{"bindings":[{"x":{"type":"literal","value":"RAC1"}}]}}"#;
/// let solutions = read_solutions(document.as_bytes(), QueryResultsFormat::Json)?;
/// assert_eq!(solutions.variables(), ["x"]);
/// assert_eq!(solutions.count(), 1);
/// # Result::<_, Box<dyn std::error::Error>>::Ok(())
/// ```
pub fn read_solutions<R: Read>(
    reader: R,
    format: QueryResultsFormat,
) -> Result<Solutions<R>, ResultsError> {
    if format == QueryResultsFormat::Csv {
        return read_csv_solutions(reader);
    }
    match QueryResultsParser::from_format(format).for_reader(reader)? {
        ReaderQueryResultsParserOutput::Solutions(inner) => Ok(Solutions {
            inner: SolutionsKind::Parsed(inner),
        }),
        ReaderQueryResultsParserOutput::Boolean(value) => Err(ResultsError::NotSolutions(value)),
    }
}

fn read_csv_solutions<R: Read>(reader: R) -> Result<Solutions<R>, ResultsError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(reader);
    let variables = reader
        .headers()?
        .iter()
        .map(|variable| variable.trim().to_owned())
        .collect();
    Ok(Solutions {
        inner: SolutionsKind::Csv {
            variables,
            records: reader.into_records(),
        },
    })
}

/// Converts a parsed solution into a row. Unbound variables are left out.
pub fn solution_to_row(solution: &QuerySolution) -> BindingRow {
    solution
        .iter()
        .map(|(variable, term)| (variable.as_str(), term.clone()))
        .collect()
}

fn csv_record_to_row(variables: &[String], record: &csv::StringRecord) -> BindingRow {
    variables
        .iter()
        .zip(record)
        .filter(|(_, cell)| !cell.is_empty())
        .map(|(variable, cell)| (variable.as_str(), csv_cell_to_term(cell)))
        .collect()
}

fn csv_cell_to_term(cell: &str) -> Term {
    if let Some(id) = cell.strip_prefix("_:") {
        if let Ok(node) = BlankNode::new(id) {
            return node.into();
        }
    }
    NamedNode::new(cell).map_or_else(|_| Literal::new_simple_literal(cell).into(), Into::into)
}

#[cfg(test)]
mod tests {
    use super::*;
    use bindgraph_model::{AttributeValue, ValueKind};

    const UNIPROT_JSON: &str = r#"{
      "head": {"vars": ["P1", "P1_label", "P2", "P2_label", "nb_expe", "note"]},
      "results": {"bindings": [
        {
          "P1": {"type": "uri", "value": "http://purl.uniprot.org/uniprot/Q14524"},
          "P1_label": {"type": "literal", "value": "SCN5A_HUMAN"},
          "P2": {"type": "uri", "value": "http://purl.uniprot.org/uniprot/P61328"},
          "P2_label": {"type": "literal", "value": "FGF12_HUMAN"},
          "nb_expe": {"type": "literal", "datatype": "http://www.w3.org/2001/XMLSchema#int", "value": "12"}
        },
        {
          "P1": {"type": "uri", "value": "http://purl.uniprot.org/uniprot/Q14524"},
          "P1_label": {"type": "literal", "value": "SCN5A_HUMAN"},
          "P2": {"type": "bnode", "value": "b0"},
          "P2_label": {"type": "literal", "value": "CALM_HUMAN", "xml:lang": "en"},
          "nb_expe": {"type": "literal", "datatype": "http://www.w3.org/2001/XMLSchema#int", "value": "3"}
        }
      ]}
    }"#;

    #[test]
    fn read_json_bindings() {
        let solutions = read_solutions(UNIPROT_JSON.as_bytes(), QueryResultsFormat::Json).unwrap();
        assert_eq!(
            solutions.variables(),
            ["P1", "P1_label", "P2", "P2_label", "nb_expe", "note"]
        );

        let rows = solutions.collect::<Result<Vec<_>, _>>().unwrap();
        assert_eq!(rows.len(), 2);

        let first = &rows[0];
        assert_eq!(first.len(), 5);
        assert!(!first.contains("note"));
        assert_eq!(first.get("P1").unwrap().kind(), ValueKind::Iri);
        assert_eq!(first.get("P2_label").unwrap().lexical(), "FGF12_HUMAN");
        assert_eq!(
            first.get("nb_expe").unwrap().to_attribute(),
            AttributeValue::Integer(12)
        );

        let second = &rows[1];
        assert_eq!(second.get("P2").unwrap().kind(), ValueKind::BlankNode);
        assert_eq!(second.get("P2_label").unwrap().lexical(), "CALM_HUMAN");
    }

    #[test]
    fn read_tsv_bindings() {
        let document = "?source\t?target\t?weight\n<http://example.com/A>\t\"B\"\t3\n";
        let rows = read_solutions(document.as_bytes(), QueryResultsFormat::Tsv)
            .unwrap()
            .collect::<Result<Vec<_>, _>>()
            .unwrap();

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].get("source").unwrap().lexical(), "http://example.com/A");
        assert_eq!(rows[0].get("target").unwrap().lexical(), "B");
        assert_eq!(
            rows[0].get("weight").unwrap().to_attribute(),
            AttributeValue::Integer(3)
        );
    }

    #[test]
    fn read_csv_bindings() {
        let document = "source,target,weight,note\r\nhttp://example.com/A,B,3,\r\n_:b0,\"B, C\",,x\r\n";
        let solutions = read_solutions(document.as_bytes(), QueryResultsFormat::Csv).unwrap();
        assert_eq!(solutions.variables(), ["source", "target", "weight", "note"]);

        let rows = solutions.collect::<Result<Vec<_>, _>>().unwrap();
        assert_eq!(rows.len(), 2);

        let first = &rows[0];
        assert_eq!(first.len(), 3);
        assert!(!first.contains("note"));
        assert_eq!(first.get("source").unwrap().kind(), ValueKind::Iri);
        assert_eq!(first.get("source").unwrap().lexical(), "http://example.com/A");
        assert_eq!(first.get("target").unwrap().kind(), ValueKind::Literal);
        assert_eq!(first.get("target").unwrap().lexical(), "B");
        assert_eq!(
            first.get("weight").unwrap().to_attribute(),
            AttributeValue::Text("3".to_owned())
        );

        let second = &rows[1];
        assert_eq!(second.get("source").unwrap().kind(), ValueKind::BlankNode);
        assert_eq!(second.get("target").unwrap().lexical(), "B, C");
        assert!(!second.contains("weight"));
    }

    #[test]
    fn csv_rows_with_missing_cells_are_errors() {
        let document = "source,target\r\nA,B\r\nC\r\n";
        let result = read_solutions(document.as_bytes(), QueryResultsFormat::Csv)
            .unwrap()
            .collect::<Result<Vec<_>, _>>();
        assert!(matches!(result, Err(ResultsError::Csv(_))));
    }

    #[test]
    fn read_xml_bindings() {
        let document = r#"<?xml version="1.0"?>
<sparql xmlns="http://www.w3.org/2005/sparql-results#">
  <head><variable name="x"/><variable name="y"/></head>
  <results>
    <result>
      <binding name="x"><uri>http://my_snps/rs527330002</uri></binding>
      <binding name="y"><literal>RAC1</literal></binding>
    </result>
  </results>
</sparql>"#;
        let rows = read_solutions(document.as_bytes(), QueryResultsFormat::Xml)
            .unwrap()
            .collect::<Result<Vec<_>, _>>()
            .unwrap();

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].get("x").unwrap().lexical(), "http://my_snps/rs527330002");
        assert_eq!(rows[0].get("y").unwrap().lexical(), "RAC1");
    }

    #[test]
    fn boolean_results_are_rejected() {
        let document = r#"{"head":{},"boolean":true}"#;
        assert!(matches!(
            read_solutions(document.as_bytes(), QueryResultsFormat::Json),
            Err(ResultsError::NotSolutions(true))
        ));
    }

    #[test]
    fn syntax_errors_are_reported() {
        let document = r#"{"head":{"vars":["x"]},"results":{"bindings":[{"x":{"type":"uri"}}]}}"#;
        let result = read_solutions(document.as_bytes(), QueryResultsFormat::Json)
            .and_then(|solutions| solutions.collect::<Result<Vec<_>, _>>());
        assert!(matches!(result, Err(ResultsError::Parse(_))));
    }
}
