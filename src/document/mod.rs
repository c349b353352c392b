//! Schema-aware document model: tagged values, nodes and homogeneous lists.
//!
//! Every stored value is explicitly one of leaf, node or list, so the
//! recursive operations (`to_json`, `strip`, `prune`, `validate`,
//! `repair_keys`, `repair_values`) dispatch on the tag rather than probing
//! for behavior.

mod list;
mod node;
mod value;

pub use list::List;
pub use node::Node;
pub use value::Value;
