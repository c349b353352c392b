//! Callback boundary consumed from the external scene traversal.
//!
//! The traversal walks an already-constructed source figure and replays it
//! into a [`SceneVisitor`] in a fixed order: figure-open, then per axes scope
//! (axes-open, draw calls, optional legend, axes-close), then figure-close.
//! Geometry and style extraction happen upstream; every property record here
//! carries already-converted values (colors as `rgb(r,g,b)` strings, dash
//! patterns and marker symbols in the output vocabulary).

use serde::{Deserialize, Serialize};

use crate::bars::BarOrientation;
use crate::error::ConvertResult;

/// Identity of a source drawable, used to link legend handles back to the
/// data entries they describe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ArtistId(pub u64);

/// Coordinate space a drawable's geometry is expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CoordSpace {
    Data,
    Axes,
    Figure,
    Display,
}

/// Figure-wide properties delivered at figure-open.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FigureProps {
    /// Physical width in inches.
    pub width_in: f64,
    /// Physical height in inches.
    pub height_in: f64,
    /// Render resolution in dots per inch.
    pub dpi: f64,
    /// Fractional (min, max) extent of all axes along x within the figure.
    pub x_bounds: (f64, f64),
    /// Fractional (min, max) extent of all axes along y within the figure.
    pub y_bounds: (f64, f64),
    /// Number of axes scopes the traversal will open.
    pub axes_count: usize,
}

/// Per-axes properties delivered at axes-open.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxesProps {
    /// Fractional (x, y, width, height) of the axes within the figure.
    pub bounds: (f64, f64, f64, f64),
    pub x_range: (f64, f64),
    pub y_range: (f64, f64),
    /// Grid-line visibility for the x axis.
    pub x_grid: bool,
    /// Grid-line visibility for the y axis.
    pub y_grid: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineStyle {
    pub alpha: Option<f64>,
    pub color: String,
    pub width: f64,
    /// Dash pattern, already in the output vocabulary ("solid", "dash", ...).
    pub dash: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineProps {
    pub artist: ArtistId,
    pub coordinates: CoordSpace,
    pub points: Vec<(f64, f64)>,
    pub label: Option<String>,
    pub style: LineStyle,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarkerStyle {
    pub alpha: Option<f64>,
    pub face_color: String,
    pub edge_color: String,
    pub edge_width: f64,
    /// Marker symbol, already in the output vocabulary.
    pub symbol: String,
    pub size: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarkerProps {
    pub artist: ArtistId,
    pub coordinates: CoordSpace,
    pub points: Vec<(f64, f64)>,
    pub label: Option<String>,
    pub style: MarkerStyle,
}

/// A path collection reduced upstream to marker offsets plus one shared
/// style record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollectionProps {
    pub artist: ArtistId,
    /// Coordinate space of `offsets`.
    pub offset_coordinates: CoordSpace,
    pub offsets: Vec<(f64, f64)>,
    pub style: MarkerStyle,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathStyle {
    pub fill_color: String,
    pub edge_color: String,
    pub edge_width: f64,
    pub edge_dash: String,
    pub alpha: Option<f64>,
    pub zorder: f64,
}

/// Output of the upstream rectangle-orientation heuristic for one path.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BarCandidate {
    pub orientation: BarOrientation,
    pub x0: f64,
    pub y0: f64,
    pub x1: f64,
    pub y1: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathProps {
    pub coordinates: CoordSpace,
    /// `None` when the path matched neither bar orientation.
    pub bar: Option<BarCandidate>,
    pub style: PathStyle,
}

/// What a text drawable represents in the source figure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextRole {
    XLabel,
    YLabel,
    FigureTitle,
    Plain,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HorizontalAlign {
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerticalAlign {
    Top,
    Center,
    Bottom,
    Baseline,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextStyle {
    pub alpha: Option<f64>,
    pub color: String,
    pub font_size: f64,
    pub halign: HorizontalAlign,
    pub valign: VerticalAlign,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextProps {
    pub role: TextRole,
    pub coordinates: CoordSpace,
    /// Position in `coordinates` space.
    pub position: (f64, f64),
    /// Display-pixel position (y up), supplied by the traversal when
    /// `coordinates` is not `Data`.
    pub position_px: Option<(f64, f64)>,
    pub text: String,
    pub style: TextStyle,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegendProps {
    /// Drawables referenced by the legend.
    pub handles: Vec<ArtistId>,
    /// Legend extent on the figure in display pixels (x0, y0, x1, y1), y up.
    pub extent_px: (f64, f64, f64, f64),
}

/// Embedded raster images have no translation; the record exists so the
/// traversal can report them and the builder can warn.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageProps {
    pub coordinates: CoordSpace,
    /// Image extent (x0, y0, x1, y1) in `coordinates` space.
    pub extent: (f64, f64, f64, f64),
}

/// Fixed callback interface driven by the external figure traversal.
pub trait SceneVisitor {
    fn open_figure(&mut self, props: &FigureProps) -> ConvertResult<()>;
    fn close_figure(&mut self) -> ConvertResult<()>;
    fn open_axes(&mut self, props: &AxesProps) -> ConvertResult<()>;
    fn close_axes(&mut self) -> ConvertResult<()>;
    fn open_legend(&mut self, props: &LegendProps) -> ConvertResult<()>;
    fn close_legend(&mut self) -> ConvertResult<()>;
    fn draw_line(&mut self, props: &LineProps) -> ConvertResult<()>;
    fn draw_markers(&mut self, props: &MarkerProps) -> ConvertResult<()>;
    fn draw_path(&mut self, props: &PathProps) -> ConvertResult<()>;
    fn draw_path_collection(&mut self, props: &CollectionProps) -> ConvertResult<()>;
    fn draw_text(&mut self, props: &TextProps) -> ConvertResult<()>;
    fn draw_image(&mut self, props: &ImageProps) -> ConvertResult<()>;
}

/// External traversal boundary: replays a fully constructed source figure
/// into a visitor in the documented order.
pub trait SceneSource {
    fn traverse(&self, visitor: &mut dyn SceneVisitor) -> ConvertResult<()>;
}
