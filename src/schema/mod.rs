//! Static schema registry: one field catalog per document object kind.
//!
//! Adding a new object kind means adding a `Kind` variant and one catalog
//! entry; nothing else in the crate changes.

mod catalog;

use serde::{Deserialize, Serialize};

/// Schema identity of a document node.
///
/// The kind is sidecar metadata used only for validation, repair and strip
/// lookups. It is never serialized into the output document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Kind {
    /// Default entry for kinds without a dedicated catalog.
    Base,
    Data,
    Layout,
    XAxis,
    YAxis,
    Marker,
    Line,
    Margin,
    Font,
    Legend,
    Annotation,
}

impl Kind {
    #[must_use]
    pub fn schema(self) -> &'static Schema {
        catalog::lookup(self)
    }
}

/// Registered value substitution: when the leaf under `field` equals
/// `suspect`, replace it with `correct` (`None` meaning the null sentinel,
/// cleaned by the prune pass that follows repair).
#[derive(Debug, Clone, Copy)]
pub struct ValueRepair {
    pub field: &'static str,
    pub suspect: &'static str,
    pub correct: Option<&'static str>,
}

/// Per-kind field catalog.
#[derive(Debug, Clone, Copy)]
pub struct Schema {
    /// Field names allowed to survive `validate`.
    pub valid: &'static [&'static str],
    /// Field names that survive `strip`.
    pub safe: &'static [&'static str],
    /// Key renames applied by `repair_keys`: (suspect, correct).
    pub repair_keys: &'static [(&'static str, &'static str)],
    /// Value substitutions applied by `repair_values`.
    pub repair_values: &'static [ValueRepair],
}

impl Schema {
    #[must_use]
    pub fn is_valid(&self, field: &str) -> bool {
        self.valid.contains(&field)
    }

    #[must_use]
    pub fn is_safe(&self, field: &str) -> bool {
        self.safe.contains(&field)
    }

    #[must_use]
    pub fn rename(&self, field: &str) -> Option<&'static str> {
        self.repair_keys
            .iter()
            .find(|(suspect, _)| *suspect == field)
            .map(|(_, correct)| *correct)
    }

    #[must_use]
    pub fn value_repair(&self, field: &str) -> Option<&ValueRepair> {
        self.repair_values.iter().find(|repair| repair.field == field)
    }
}
