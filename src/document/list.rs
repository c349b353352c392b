use serde_json::Value as Json;

use crate::error::{ConvertError, ConvertResult};

use super::{Node, Value};

/// An ordered, homogeneous sequence of document nodes.
///
/// Insertion order is the only meaningful order: it fixes trace indices and
/// the z-order of chart series. The recursive document operations fan out to
/// every member in order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct List {
    items: Vec<Node>,
}

impl List {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, node: Node) {
        self.items.push(node);
    }

    /// Appends a raw value, rejecting anything that is not a node. The list
    /// is unchanged on error.
    pub fn try_push(&mut self, value: Value) -> ConvertResult<()> {
        match value {
            Value::Node(node) => {
                self.items.push(node);
                Ok(())
            }
            _ => Err(ConvertError::NotANode),
        }
    }

    /// Replaces the member at `index`, rejecting non-node values and
    /// out-of-bounds indices. The list is unchanged on error.
    pub fn try_assign(&mut self, index: usize, value: Value) -> ConvertResult<()> {
        let node = match value {
            Value::Node(node) => node,
            _ => return Err(ConvertError::NotANode),
        };
        let len = self.items.len();
        match self.items.get_mut(index) {
            Some(slot) => {
                *slot = node;
                Ok(())
            }
            None => Err(ConvertError::IndexOutOfBounds { index, len }),
        }
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Node> {
        self.items.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Node> {
        self.items.get_mut(index)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Node> {
        self.items.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Node> {
        self.items.iter_mut()
    }

    /// Serializes to a plain JSON array, depth first. Non-mutating.
    #[must_use]
    pub fn to_json(&self) -> Json {
        Json::Array(self.items.iter().map(Node::to_json).collect())
    }

    pub fn strip(&mut self) {
        for node in &mut self.items {
            node.strip();
        }
    }

    pub fn prune(&mut self) {
        for node in &mut self.items {
            node.prune();
        }
    }

    pub fn validate(&self) -> ConvertResult<()> {
        for node in &self.items {
            node.validate()?;
        }
        Ok(())
    }

    pub fn repair_values(&mut self) {
        for node in &mut self.items {
            node.repair_values();
        }
    }

    pub fn repair_keys(&mut self) {
        for node in &mut self.items {
            node.repair_keys();
        }
    }
}

impl<'a> IntoIterator for &'a List {
    type Item = &'a Node;
    type IntoIter = std::slice::Iter<'a, Node>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
