use std::collections::BTreeMap;

use serde::Serialize;

/// A fully rendered element: every nested element in its props has been
/// expanded, so the tree is plain data an export layer can serialize and
/// ship to the display client.
#[derive(Clone, Debug, Serialize)]
pub struct RenderedNode {
    pub name: String,
    pub props: BTreeMap<String, RenderedValue>,
}

/// Prop value with rendered children in place of element references.
#[derive(Clone, Debug, Serialize)]
#[serde(untagged)]
pub enum RenderedValue {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    List(Vec<RenderedValue>),
    Map(BTreeMap<String, RenderedValue>),
    Node(RenderedNode),
}
