use bindgraph_model::{AttributeValue, Attributes, PropertyGraph};
use std::io::{self, Write};

/// Writes `graph` as a Graphviz `digraph`.
///
/// Identifiers and string attributes are always quoted. Numbers are written bare.
pub fn write_dot<W: Write>(graph: &PropertyGraph, mut writer: W) -> io::Result<W> {
    writeln!(writer, "digraph {{")?;
    for node in graph.nodes() {
        write!(writer, "  {}", quote(&node.id))?;
        write_attribute_list(&mut writer, &node.attributes)?;
        writeln!(writer, ";")?;
    }
    for edge in graph.edges() {
        write!(writer, "  {} -> {}", quote(&edge.source), quote(&edge.target))?;
        write_attribute_list(&mut writer, &edge.attributes)?;
        writeln!(writer, ";")?;
    }
    writeln!(writer, "}}")?;
    Ok(writer)
}

fn write_attribute_list<W: Write>(writer: &mut W, attributes: &Attributes) -> io::Result<()> {
    if attributes.is_empty() {
        return Ok(());
    }
    write!(writer, " [")?;
    for (index, (name, value)) in attributes.iter().enumerate() {
        if index > 0 {
            write!(writer, ", ")?;
        }
        write!(writer, "{}={}", quote(name), attribute_value(value))?;
    }
    write!(writer, "]")
}

fn attribute_value(value: &AttributeValue) -> String {
    match value {
        AttributeValue::Integer(_) | AttributeValue::Double(_) if value_is_finite(value) => {
            value.to_string()
        }
        _ => quote(&value.to_string()),
    }
}

fn value_is_finite(value: &AttributeValue) -> bool {
    match value {
        AttributeValue::Double(value) => value.is_finite(),
        _ => true,
    }
}

fn quote(value: &str) -> String {
    let mut quoted = String::with_capacity(value.len() + 2);
    quoted.push('"');
    for c in value.chars() {
        match c {
            '"' => quoted.push_str("\\\""),
            '\\' => quoted.push_str("\\\\"),
            '\n' => quoted.push_str("\\n"),
            '\r' => {}
            _ => quoted.push(c),
        }
    }
    quoted.push('"');
    quoted
}
