use crate::ResultsError;
use bindgraph_model::{BindingRow, Quad, Term};
use oxrdfio::{RdfFormat, RdfParser, ReaderQuadParser};
use std::io::Read;

/// The field holding the subject of a triple row.
pub const SUBJECT: &str = "subject";
/// The field holding the predicate of a triple row.
pub const PREDICATE: &str = "predicate";
/// The field holding the object of a triple row.
pub const OBJECT: &str = "object";

/// The triples of an RDF document, read lazily as rows with the fields [SUBJECT], [PREDICATE]
/// and [OBJECT].
pub struct TripleRows<R: Read> {
    inner: ReaderQuadParser<R>,
}

impl<R: Read> Iterator for TripleRows<R> {
    type Item = Result<BindingRow, ResultsError>;

    fn next(&mut self) -> Option<Self::Item> {
        let quad = self.inner.next()?;
        Some(quad.map(quad_to_row).map_err(Into::into))
    }
}

/// Reads an RDF document such as Turtle or N-Triples.
///
/// Quads of named graphs are read as well; their graph name is dropped.
pub fn read_triples<R: Read>(
    reader: R,
    format: RdfFormat,
    base_iri: Option<&str>,
) -> Result<TripleRows<R>, ResultsError> {
    let mut parser = RdfParser::from_format(format);
    if let Some(base_iri) = base_iri {
        parser = parser
            .with_base_iri(base_iri)
            .map_err(|_| ResultsError::InvalidBaseIri(base_iri.to_owned()))?;
    }
    Ok(TripleRows {
        inner: parser.for_reader(reader),
    })
}

/// Converts a quad into a row, dropping its graph name.
pub fn quad_to_row(quad: Quad) -> BindingRow {
    BindingRow::new()
        .with(SUBJECT, Term::from(quad.subject))
        .with(PREDICATE, quad.predicate)
        .with(OBJECT, quad.object)
}

#[cfg(test)]
mod tests {
    use super::*;
    use bindgraph_model::ValueKind;

    const VARIANTS: &str = r#"
@prefix ns: <http://my_voc/> .
@prefix snp: <http://my_snps/> .
snp:123 ns:is_a_variant_of "NEMO" .
snp:rs527330002 ns:is_a_variant_of "RAC1" .
snp:rs527330002 ns:refers_to_organism <http://www.uniprot.org/taxonomy/9606> .
snp:rs61753123 ns:is_a_variant_of "RAC1" .
"#;

    #[test]
    fn read_turtle_triples() {
        let rows = read_triples(VARIANTS.as_bytes(), RdfFormat::Turtle, None)
            .unwrap()
            .collect::<Result<Vec<_>, _>>()
            .unwrap();

        assert_eq!(rows.len(), 4);
        let first = &rows[0];
        assert_eq!(first.variables().collect::<Vec<_>>(), [SUBJECT, PREDICATE, OBJECT]);
        assert_eq!(first.get(SUBJECT).unwrap().lexical(), "http://my_snps/123");
        assert_eq!(
            first.get(PREDICATE).unwrap().lexical(),
            "http://my_voc/is_a_variant_of"
        );
        assert_eq!(first.get(OBJECT).unwrap().lexical(), "NEMO");
        assert_eq!(rows[2].get(OBJECT).unwrap().kind(), ValueKind::Iri);
    }

    #[test]
    fn quoted_triples_are_read() {
        let document = "<< <http://example.com/s> <http://example.com/p> <http://example.com/o> >> <http://example.com/certainty> \"0.9\" .";
        let rows = read_triples(document.as_bytes(), RdfFormat::Turtle, None)
            .unwrap()
            .collect::<Result<Vec<_>, _>>()
            .unwrap();

        assert_eq!(rows.len(), 1);
        let subject = rows[0].get(SUBJECT).unwrap();
        assert_eq!(subject.kind(), ValueKind::Triple);
        assert_eq!(
            subject.lexical(),
            "<http://example.com/s> <http://example.com/p> <http://example.com/o>"
        );
    }

    #[test]
    fn relative_iris_need_a_base() {
        let document = "<s> <p> <o> .";
        let rows = read_triples(
            document.as_bytes(),
            RdfFormat::Turtle,
            Some("http://example.com/"),
        )
        .unwrap()
        .collect::<Result<Vec<_>, _>>()
        .unwrap();
        assert_eq!(rows[0].get(SUBJECT).unwrap().lexical(), "http://example.com/s");

        assert!(read_triples(document.as_bytes(), RdfFormat::Turtle, Some("not an iri")).is_err());
    }

    #[test]
    fn syntax_errors_are_reported() {
        let result = read_triples("<http://a> <http://b> .".as_bytes(), RdfFormat::NTriples, None)
            .unwrap()
            .collect::<Result<Vec<_>, _>>();
        assert!(matches!(result, Err(ResultsError::RdfParse(_))));
    }
}
