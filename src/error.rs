use serde::Serialize;
use thiserror::Error;

use crate::events::CoordSpace;
use crate::schema::Kind;

pub type ConvertResult<T> = Result<T, ConvertError>;

/// Fatal conversion failures. No partial document is returned once one of
/// these is raised.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// A field name survived repair but is absent from its kind's valid set.
    /// Either the schema catalog is missing an entry or the producer emitted
    /// a field the consumer does not document.
    #[error("invalid field `{field}` for kind {kind:?}")]
    InvalidField { field: String, kind: Kind },

    /// Only document nodes can populate a document list.
    #[error("attempted to insert a non-node value into a document list")]
    NotANode,

    #[error("list index {index} out of bounds (len {len})")]
    IndexOutOfBounds { index: usize, len: usize },

    /// The traversal invoked a callback outside the documented order, e.g. a
    /// draw call with no open axes scope.
    #[error("traversal order violation: {0}")]
    TraversalOrder(String),
}

/// Recoverable conversion conditions. The offending drawable is skipped, the
/// warning is recorded on the builder, and the conversion continues.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Warning {
    /// A drawable arrived in a coordinate space the builder does not handle.
    UnsupportedCoordinates {
        drawable: &'static str,
        coordinates: CoordSpace,
    },
    /// A drawable kind with no translation (e.g. embedded images).
    UnsupportedDrawable { drawable: &'static str },
    /// A path that matched neither bar orientation.
    NonBarPath,
    /// A path collection whose offsets are not anchored in data coordinates.
    DetachedPathCollection,
    /// A bar group with fewer than two members, assumed to be a stray
    /// rectangle from ambiguous path detection rather than a real series.
    SparseBarGroup { members: usize },
    /// Text whose position could not be mapped into the output document.
    UnplaceableText,
}
