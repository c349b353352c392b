use serde_json::Value as Json;

use super::{List, Node};

/// A stored document value.
///
/// Leaves are opaque JSON scalars or arrays and are never recursed into; the
/// "absent" sentinel removed by `prune` is the JSON null leaf.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Leaf(Json),
    Node(Node),
    List(List),
}

impl Value {
    #[must_use]
    pub fn null() -> Self {
        Value::Leaf(Json::Null)
    }

    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Leaf(Json::Null))
    }

    #[must_use]
    pub fn as_leaf(&self) -> Option<&Json> {
        match self {
            Value::Leaf(json) => Some(json),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_node(&self) -> Option<&Node> {
        match self {
            Value::Node(node) => Some(node),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_node_mut(&mut self) -> Option<&mut Node> {
        match self {
            Value::Node(node) => Some(node),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_list(&self) -> Option<&List> {
        match self {
            Value::List(list) => Some(list),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_list_mut(&mut self) -> Option<&mut List> {
        match self {
            Value::List(list) => Some(list),
            _ => None,
        }
    }

    /// Serializes to a plain JSON value. Non-mutating; node kinds never leak.
    #[must_use]
    pub fn to_json(&self) -> Json {
        match self {
            Value::Leaf(json) => json.clone(),
            Value::Node(node) => node.to_json(),
            Value::List(list) => list.to_json(),
        }
    }
}

impl From<Json> for Value {
    fn from(json: Json) -> Self {
        Value::Leaf(json)
    }
}

impl From<bool> for Value {
    fn from(flag: bool) -> Self {
        Value::Leaf(Json::from(flag))
    }
}

impl From<i64> for Value {
    fn from(number: i64) -> Self {
        Value::Leaf(Json::from(number))
    }
}

impl From<f64> for Value {
    fn from(number: f64) -> Self {
        Value::Leaf(Json::from(number))
    }
}

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Value::Leaf(Json::from(text))
    }
}

impl From<String> for Value {
    fn from(text: String) -> Self {
        Value::Leaf(Json::from(text))
    }
}

impl From<Option<f64>> for Value {
    fn from(number: Option<f64>) -> Self {
        number.map_or_else(Value::null, Value::from)
    }
}

impl From<Vec<f64>> for Value {
    fn from(numbers: Vec<f64>) -> Self {
        Value::Leaf(Json::from(numbers))
    }
}

impl From<(f64, f64)> for Value {
    fn from(pair: (f64, f64)) -> Self {
        Value::Leaf(Json::from(vec![pair.0, pair.1]))
    }
}

impl From<Node> for Value {
    fn from(node: Node) -> Self {
        Value::Node(node)
    }
}

impl From<List> for Value {
    fn from(list: List) -> Self {
        Value::List(list)
    }
}
