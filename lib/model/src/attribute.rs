use oxrdf::vocab::xsd;
use oxrdf::{NamedNodeRef, Term};
use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};

/// The attributes of a node or an edge, keyed by attribute name.
pub type Attributes = BTreeMap<String, AttributeValue>;

const INTEGER_TYPES: [NamedNodeRef<'static>; 13] = [
    xsd::INTEGER,
    xsd::INT,
    xsd::LONG,
    xsd::SHORT,
    xsd::BYTE,
    xsd::NON_NEGATIVE_INTEGER,
    xsd::NON_POSITIVE_INTEGER,
    xsd::POSITIVE_INTEGER,
    xsd::NEGATIVE_INTEGER,
    xsd::UNSIGNED_LONG,
    xsd::UNSIGNED_INT,
    xsd::UNSIGNED_SHORT,
    xsd::UNSIGNED_BYTE,
];

const DOUBLE_TYPES: [NamedNodeRef<'static>; 3] = [xsd::DECIMAL, xsd::DOUBLE, xsd::FLOAT];

/// A scalar attribute value as handed to a drawing library.
///
/// Attribute values are owned copies. Changing the attributes of a graph never affects the rows
/// the graph was built from.
#[derive(Clone, PartialEq, Debug)]
pub enum AttributeValue {
    Text(String),
    Integer(i64),
    Double(f64),
    Boolean(bool),
    Iri(String),
}

impl AttributeValue {
    /// Derives a scalar from an RDF term.
    ///
    /// Numeric and boolean literals become numbers and booleans. A literal whose lexical form is
    /// not valid for its datatype is kept as [AttributeValue::Text].
    pub fn from_term(term: &Term) -> Self {
        match term {
            Term::NamedNode(node) => Self::Iri(node.as_str().to_owned()),
            Term::BlankNode(node) => Self::Text(node.as_str().to_owned()),
            Term::Literal(literal) => {
                let value = literal.value();
                let datatype = literal.datatype();
                let lexical = value.trim();
                if INTEGER_TYPES.iter().any(|t| *t == datatype) {
                    if let Ok(integer) = lexical.parse() {
                        return Self::Integer(integer);
                    }
                } else if DOUBLE_TYPES.iter().any(|t| *t == datatype) {
                    if let Ok(double) = lexical.parse() {
                        return Self::Double(double);
                    }
                } else if datatype == xsd::BOOLEAN {
                    match lexical {
                        "true" | "1" => return Self::Boolean(true),
                        "false" | "0" => return Self::Boolean(false),
                        _ => {}
                    }
                }
                Self::Text(value.to_owned())
            }
            Term::Triple(triple) => Self::Text(triple.to_string()),
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(value) | Self::Iri(value) => Some(value),
            Self::Integer(_) | Self::Double(_) | Self::Boolean(_) => None,
        }
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, Self::Integer(_) | Self::Double(_))
    }
}

impl Display for AttributeValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text(value) | Self::Iri(value) => f.write_str(value),
            Self::Integer(value) => write!(f, "{value}"),
            Self::Double(value) => write!(f, "{value}"),
            Self::Boolean(value) => write!(f, "{value}"),
        }
    }
}

impl From<&str> for AttributeValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for AttributeValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<i64> for AttributeValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for AttributeValue {
    fn from(value: f64) -> Self {
        Self::Double(value)
    }
}

impl From<bool> for AttributeValue {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}
