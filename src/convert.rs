//! Conversion entry point: drives the external traversal over a fresh
//! builder, applies post-processing flags and hands back the finished
//! document.

use serde::{Deserialize, Serialize};

use crate::builder::{FigureBuilder, FigureDocument};
use crate::error::ConvertResult;
use crate::events::SceneSource;

/// Post-processing applied after the document is built and repaired.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ConvertOptions {
    /// Drop explicit width/height/autosize/margin so the consumer can
    /// auto-size the figure.
    pub resize: bool,
    /// Drop non-essential styling, preserving structure.
    pub strip_style: bool,
}

/// Converts one source figure into a document.
///
/// The traversal is one bounded, synchronous pass; recoverable conditions are
/// recorded on the returned document's `warnings`, while schema violations
/// and traversal misuse abort the conversion with no partial output.
pub fn convert_figure(
    source: &dyn SceneSource,
    options: ConvertOptions,
) -> ConvertResult<FigureDocument> {
    let mut builder = FigureBuilder::new();
    source.traverse(&mut builder)?;
    if options.resize {
        builder.resize();
    }
    if options.strip_style {
        builder.strip();
    }
    Ok(builder.into_document())
}
