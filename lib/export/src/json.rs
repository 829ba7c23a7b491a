use bindgraph_model::{AttributeValue, Attributes};
use serde_json::{Map, Number, Value};

pub(crate) fn attribute_to_json(value: &AttributeValue) -> Value {
    match value {
        AttributeValue::Text(value) | AttributeValue::Iri(value) => Value::String(value.clone()),
        AttributeValue::Integer(value) => Value::Number((*value).into()),
        // JSON has no representation for NaN and infinities.
        AttributeValue::Double(value) => Number::from_f64(*value).map_or(Value::Null, Value::Number),
        AttributeValue::Boolean(value) => Value::Bool(*value),
    }
}

pub(crate) fn attributes_to_json(attributes: &Attributes) -> Map<String, Value> {
    attributes
        .iter()
        .map(|(name, value)| (name.clone(), attribute_to_json(value)))
        .collect()
}
