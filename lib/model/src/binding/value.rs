use crate::AttributeValue;
use oxrdf::{BlankNode, Literal, NamedNode, Term};
use std::borrow::Cow;
use std::fmt::{Display, Formatter};

/// The type tag of a bound value, as reported by a SPARQL result document.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub enum ValueKind {
    Iri,
    Literal,
    BlankNode,
    /// An RDF-star quoted triple.
    Triple,
}

/// A value bound to a query variable.
///
/// The full RDF term is kept, so no information from the result document (datatype, language
/// tag, term kind) is lost. Use [BindingValue::lexical] to obtain the plain string value that is
/// used to identify graph nodes.
#[derive(Clone, PartialEq, Eq, Debug, Hash)]
pub struct BindingValue(Term);

impl BindingValue {
    pub fn new(term: impl Into<Term>) -> Self {
        Self(term.into())
    }

    pub fn term(&self) -> &Term {
        &self.0
    }

    pub fn into_term(self) -> Term {
        self.0
    }

    pub fn kind(&self) -> ValueKind {
        match &self.0 {
            Term::NamedNode(_) => ValueKind::Iri,
            Term::BlankNode(_) => ValueKind::BlankNode,
            Term::Literal(_) => ValueKind::Literal,
            Term::Triple(_) => ValueKind::Triple,
        }
    }

    /// Returns the plain string value of the binding.
    ///
    /// This is the IRI for named nodes, the lexical form for literals and the identifier (without
    /// the `_:` prefix) for blank nodes. Quoted triples use their N-Triples form.
    pub fn lexical(&self) -> Cow<'_, str> {
        match &self.0 {
            Term::NamedNode(node) => Cow::Borrowed(node.as_str()),
            Term::BlankNode(node) => Cow::Borrowed(node.as_str()),
            Term::Literal(literal) => Cow::Borrowed(literal.value()),
            Term::Triple(triple) => Cow::Owned(triple.to_string()),
        }
    }

    /// Converts the binding into a scalar attribute value.
    pub fn to_attribute(&self) -> AttributeValue {
        AttributeValue::from_term(&self.0)
    }
}

impl Display for BindingValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&self.0, f)
    }
}

impl From<Term> for BindingValue {
    #[inline]
    fn from(value: Term) -> Self {
        Self(value)
    }
}

impl From<BindingValue> for Term {
    #[inline]
    fn from(value: BindingValue) -> Self {
        value.0
    }
}

macro_rules! implement_from {
    ($t:ty) => {
        impl From<$t> for BindingValue {
            #[inline]
            fn from(value: $t) -> Self {
                Self(value.into())
            }
        }
    };
}

implement_from!(NamedNode);
implement_from!(BlankNode);
implement_from!(Literal);

macro_rules! implement_from_literal {
    ($t:ty) => {
        impl From<$t> for BindingValue {
            #[inline]
            fn from(value: $t) -> Self {
                Self(Literal::from(value).into())
            }
        }
    };
}

implement_from_literal!(&str);
implement_from_literal!(String);
implement_from_literal!(bool);
implement_from_literal!(i32);
implement_from_literal!(i64);
implement_from_literal!(f64);
