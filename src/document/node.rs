use indexmap::IndexMap;
use serde_json::Value as Json;

use crate::error::{ConvertError, ConvertResult};
use crate::schema::Kind;

use super::Value;

/// A named, schema-aware key/value container.
///
/// Field order is insertion order. The kind is carried as a separate struct
/// field, so serialization never has to hide it: it simply is not a field.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    kind: Kind,
    fields: IndexMap<String, Value>,
}

impl Node {
    #[must_use]
    pub fn new(kind: Kind) -> Self {
        Self {
            kind,
            fields: IndexMap::new(),
        }
    }

    #[must_use]
    pub fn kind(&self) -> Kind {
        self.kind
    }

    pub fn set(&mut self, field: impl Into<String>, value: impl Into<Value>) {
        self.fields.insert(field.into(), value.into());
    }

    /// Builder-style `set` for literal construction.
    #[must_use]
    pub fn with(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.set(field, value);
        self
    }

    #[must_use]
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    pub fn get_mut(&mut self, field: &str) -> Option<&mut Value> {
        self.fields.get_mut(field)
    }

    /// Convenience accessor for a nested node field.
    pub fn node_mut(&mut self, field: &str) -> Option<&mut Node> {
        self.fields.get_mut(field).and_then(Value::as_node_mut)
    }

    pub fn remove(&mut self, field: &str) -> Option<Value> {
        self.fields.shift_remove(field)
    }

    #[must_use]
    pub fn contains(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields.iter().map(|(field, value)| (field.as_str(), value))
    }

    /// Serializes to a plain JSON object, depth first. Non-mutating; the
    /// kind tag never appears in the output.
    #[must_use]
    pub fn to_json(&self) -> Json {
        let mut map = serde_json::Map::with_capacity(self.fields.len());
        for (field, value) in &self.fields {
            map.insert(field.clone(), value.to_json());
        }
        Json::Object(map)
    }

    /// Deletes presentation detail: leaf fields outside the kind's safe set
    /// are removed, nested nodes and lists always survive (possibly emptied).
    pub fn strip(&mut self) {
        let schema = self.kind.schema();
        self.fields.retain(|field, value| match value {
            Value::Node(node) => {
                node.strip();
                true
            }
            Value::List(list) => {
                list.strip();
                true
            }
            Value::Leaf(_) => schema.is_safe(field),
        });
    }

    /// Removes fields holding exactly the null sentinel, at every depth.
    /// Empty containers are left alone.
    pub fn prune(&mut self) {
        self.fields.retain(|_, value| match value {
            Value::Leaf(json) => !json.is_null(),
            Value::Node(node) => {
                node.prune();
                true
            }
            Value::List(list) => {
                list.prune();
                true
            }
        });
    }

    /// Checks every leaf field name against the kind's valid set, failing
    /// fast on the first mismatch. Nested nodes and lists are recursed into
    /// rather than name-checked.
    pub fn validate(&self) -> ConvertResult<()> {
        let schema = self.kind.schema();
        for (field, value) in &self.fields {
            match value {
                Value::Node(node) => node.validate()?,
                Value::List(list) => list.validate()?,
                Value::Leaf(_) => {
                    if !schema.is_valid(field) {
                        return Err(ConvertError::InvalidField {
                            field: field.clone(),
                            kind: self.kind,
                        });
                    }
                }
            }
        }
        Ok(())
    }

    /// Replaces registered suspect values with their corrections, then
    /// prunes so a repair-to-null is cleaned in the same pass.
    pub fn repair_values(&mut self) {
        let schema = self.kind.schema();
        for (field, value) in &mut self.fields {
            match value {
                Value::Node(node) => node.repair_values(),
                Value::List(list) => list.repair_values(),
                Value::Leaf(json) => {
                    if let Some(repair) = schema.value_repair(field) {
                        if json.as_str() == Some(repair.suspect) {
                            *json = repair
                                .correct
                                .map_or(Json::Null, |correct| Json::String(correct.to_owned()));
                        }
                    }
                }
            }
        }
        self.prune();
    }

    /// Renames fields with registered repairs (values preserved; order of
    /// remaining fields is unspecified), recurses, then prunes.
    pub fn repair_keys(&mut self) {
        let schema = self.kind.schema();
        let renames: Vec<(String, &'static str)> = self
            .fields
            .keys()
            .filter_map(|field| schema.rename(field).map(|correct| (field.clone(), correct)))
            .collect();
        for (suspect, correct) in renames {
            if let Some(value) = self.fields.shift_remove(&suspect) {
                self.fields.insert(correct.to_owned(), value);
            }
        }
        for value in self.fields.values_mut() {
            match value {
                Value::Node(node) => node.repair_keys(),
                Value::List(list) => list.repair_keys(),
                Value::Leaf(_) => {}
            }
        }
        self.prune();
    }
}

impl Node {
    /// Fallible nested-node accessor for callers that must have the field.
    pub fn require_node_mut(&mut self, field: &str) -> ConvertResult<&mut Node> {
        self.node_mut(field)
            .ok_or_else(|| ConvertError::TraversalOrder(format!("missing `{field}` node")))
    }
}
