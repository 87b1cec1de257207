use std::collections::BTreeMap;

use crate::element::AnyElement;

/// Prop mapping produced by rendering an element, owned by the caller once
/// returned. Elements that nest always carry a `children` entry.
pub type Props = BTreeMap<String, PropValue>;

/// The `{"children": [...]}` shape function elements return.
pub fn children_props(children: Vec<AnyElement>) -> Props {
    let mut props = Props::new();
    props.insert("children".to_string(), PropValue::from(children));
    props
}

/// A single prop value: JSON-like data, or a child element that has not
/// been rendered yet. Rendered-tree serialization happens downstream, once
/// every `Element` value has been expanded.
#[derive(Clone, Debug)]
pub enum PropValue {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    List(Vec<PropValue>),
    Map(BTreeMap<String, PropValue>),
    Element(AnyElement),
}

impl From<bool> for PropValue {
    fn from(v: bool) -> Self {
        PropValue::Bool(v)
    }
}

impl From<i32> for PropValue {
    fn from(v: i32) -> Self {
        PropValue::Int(v.into())
    }
}

impl From<i64> for PropValue {
    fn from(v: i64) -> Self {
        PropValue::Int(v)
    }
}

impl From<f64> for PropValue {
    fn from(v: f64) -> Self {
        PropValue::Float(v)
    }
}

impl From<&str> for PropValue {
    fn from(v: &str) -> Self {
        PropValue::Str(v.to_string())
    }
}

impl From<String> for PropValue {
    fn from(v: String) -> Self {
        PropValue::Str(v)
    }
}

impl From<Vec<PropValue>> for PropValue {
    fn from(v: Vec<PropValue>) -> Self {
        PropValue::List(v)
    }
}

impl From<AnyElement> for PropValue {
    fn from(v: AnyElement) -> Self {
        PropValue::Element(v)
    }
}

impl From<Vec<AnyElement>> for PropValue {
    fn from(v: Vec<AnyElement>) -> Self {
        PropValue::List(v.into_iter().map(PropValue::Element).collect())
    }
}
