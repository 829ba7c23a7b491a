mod attribute;
mod binding;
mod graph;

pub use attribute::*;
pub use binding::*;
pub use graph::*;

// Re-export some oxrdf types.
pub use oxrdf::vocab;
pub use oxrdf::{
    BlankNode, BlankNodeRef, Literal, LiteralRef, NamedNode, NamedNodeRef, Quad, Subject, Term,
    TermRef, Triple, Variable, VariableRef,
};
