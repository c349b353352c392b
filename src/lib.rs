//! plotly-export: structural translation from a declarative scene graph to a
//! schema-constrained, Plotly-style JSON document.
//!
//! The crate accumulates heterogeneous drawing events emitted in a fixed
//! traversal order into a typed document (one layout node plus one data
//! list), regroups low-level rectangles into bar series, repairs legacy
//! field names and values, and validates every object against its kind's
//! field catalog before serialization.

pub mod bars;
pub mod builder;
pub mod convert;
pub mod document;
pub mod error;
pub mod events;
pub mod schema;
pub mod telemetry;

pub use builder::{FigureBuilder, FigureDocument};
pub use convert::{ConvertOptions, convert_figure};
pub use error::{ConvertError, ConvertResult, Warning};
