//! Stateful visitor that accumulates traversal events into the output
//! document: one layout node plus one data list.

mod paper;

pub use paper::{PaperFrame, x_domain, y_domain};

use indexmap::IndexMap;
use serde_json::Value as Json;
use tracing::warn;

use crate::bars::{BarSpec, BarTracker};
use crate::document::{List, Node, Value};
use crate::error::{ConvertError, ConvertResult, Warning};
use crate::events::{
    ArtistId, AxesProps, CollectionProps, CoordSpace, FigureProps, HorizontalAlign, ImageProps,
    LegendProps, LineProps, MarkerProps, PathProps, SceneVisitor, TextProps, TextRole, TextStyle,
    VerticalAlign,
};
use crate::schema::Kind;

/// Finished conversion output: the repaired, validated document plus every
/// recoverable condition recorded along the way.
#[derive(Debug, Clone, PartialEq)]
pub struct FigureDocument {
    pub data: List,
    pub layout: Node,
    pub warnings: Vec<Warning>,
}

impl FigureDocument {
    /// Serializes to the wire format: `{ "data": [...], "layout": {...} }`.
    #[must_use]
    pub fn to_json(&self) -> Json {
        serde_json::json!({
            "data": self.data.to_json(),
            "layout": self.layout.to_json(),
        })
    }

    #[must_use]
    pub fn to_json_string(&self) -> String {
        self.to_json().to_string()
    }
}

/// Event-driven builder for the output document.
///
/// Owns the layout node, the data list and the per-axes pending-bar state.
/// The external traversal drives it strictly sequentially through the
/// [`SceneVisitor`] callbacks; it can also be driven by hand for
/// troubleshooting, inspecting `data()`/`layout()` between events.
#[derive(Debug)]
pub struct FigureBuilder {
    layout: Node,
    data: List,
    axis_ct: usize,
    axes_count: usize,
    fig_x_bounds: (f64, f64),
    fig_y_bounds: (f64, f64),
    frame: PaperFrame,
    trace_index: IndexMap<ArtistId, usize>,
    bars: BarTracker,
    figure_open: bool,
    axes_open: bool,
    legend_seen: bool,
    warnings: Vec<Warning>,
}

impl Default for FigureBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl FigureBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self {
            layout: Node::new(Kind::Layout),
            data: List::new(),
            axis_ct: 0,
            axes_count: 0,
            fig_x_bounds: (0.0, 1.0),
            fig_y_bounds: (0.0, 1.0),
            frame: PaperFrame::default(),
            trace_index: IndexMap::new(),
            bars: BarTracker::new(),
            figure_open: false,
            axes_open: false,
            legend_seen: false,
            warnings: Vec::new(),
        }
    }

    #[must_use]
    pub fn data(&self) -> &List {
        &self.data
    }

    #[must_use]
    pub fn layout(&self) -> &Node {
        &self.layout
    }

    #[must_use]
    pub fn warnings(&self) -> &[Warning] {
        &self.warnings
    }

    /// Removes explicit sizing so the consumer can auto-size the figure.
    pub fn resize(&mut self) {
        for field in ["width", "height", "autosize", "margin"] {
            self.layout.remove(field);
        }
    }

    /// Strips non-essential styling from the whole document, preserving
    /// structure.
    pub fn strip(&mut self) {
        self.data.strip();
        self.layout.strip();
    }

    #[must_use]
    pub fn into_document(self) -> FigureDocument {
        FigureDocument {
            data: self.data,
            layout: self.layout,
            warnings: self.warnings,
        }
    }

    fn record(&mut self, warning: Warning) {
        warn!(?warning, "recoverable conversion condition, drawable skipped");
        self.warnings.push(warning);
    }

    fn require_figure(&self, event: &str) -> ConvertResult<()> {
        if self.figure_open {
            Ok(())
        } else {
            Err(ConvertError::TraversalOrder(format!(
                "{event} outside an open figure"
            )))
        }
    }

    fn require_axes(&self, event: &str) -> ConvertResult<()> {
        if self.axes_open {
            Ok(())
        } else {
            Err(ConvertError::TraversalOrder(format!(
                "{event} outside an open axes scope"
            )))
        }
    }

    fn push_trace(&mut self, artist: ArtistId, trace: Node) {
        self.trace_index.insert(artist, self.data.len());
        self.data.push(trace);
    }

    fn axis_refs(&self) -> (String, String) {
        (format!("x{}", self.axis_ct), format!("y{}", self.axis_ct))
    }

    fn font_node(style: &TextStyle) -> Node {
        Node::new(Kind::Font)
            .with("color", style.color.as_str())
            .with("size", style.font_size)
    }

    fn push_annotation(&mut self, annotation: Node) {
        match self.layout.get_mut("annotations") {
            Some(Value::List(list)) => list.push(annotation),
            _ => {
                let mut list = List::new();
                list.push(annotation);
                self.layout.set("annotations", list);
            }
        }
    }

    /// Attaches an axis title and title font to the current axis pair node.
    fn set_axis_title(&mut self, axis_field: &str, props: &TextProps) -> ConvertResult<()> {
        let axis = self.layout.require_node_mut(axis_field)?;
        axis.set("title", props.text.as_str());
        axis.set("titlefont", Self::font_node(&props.style));
        Ok(())
    }

    fn draw_figure_title(&mut self, props: &TextProps) {
        if self.axes_count > 1 {
            // Only one title slot per figure; extra-panel titles become
            // paper-referenced annotations.
            let Some((x_px, y_px)) = props.position_px else {
                self.record(Warning::UnplaceableText);
                return;
            };
            let (x, y) = self.frame.to_paper(x_px, y_px);
            let annotation = Node::new(Kind::Annotation)
                .with("text", props.text.as_str())
                .with("font", Self::font_node(&props.style))
                .with("xref", "paper")
                .with("yref", "paper")
                .with("x", x)
                .with("y", y)
                .with("xanchor", "center")
                .with("yanchor", "bottom")
                .with("showarrow", false);
            self.push_annotation(annotation);
        } else {
            self.layout.set("title", props.text.as_str());
            self.layout.set("titlefont", Self::font_node(&props.style));
        }
    }

    fn draw_plain_text(&mut self, props: &TextProps) {
        let (x, y, xref, yref, xanchor, yanchor) = if props.coordinates == CoordSpace::Data {
            let (xref, yref) = self.axis_refs();
            let (x, y) = props.position;
            (x, y, xref, yref, "center", "middle")
        } else {
            let Some((x_px, y_px)) = props.position_px else {
                self.record(Warning::UnplaceableText);
                return;
            };
            let (x, y) = self.frame.to_paper(x_px, y_px);
            (
                x,
                y,
                "paper".to_owned(),
                "paper".to_owned(),
                anchor_for_halign(props.style.halign),
                anchor_for_valign(props.style.valign),
            )
        };
        let annotation = Node::new(Kind::Annotation)
            .with("text", props.text.as_str())
            .with("opacity", props.style.alpha)
            .with("x", x)
            .with("y", y)
            .with("xref", xref)
            .with("yref", yref)
            .with("xanchor", xanchor)
            .with("yanchor", yanchor)
            .with("font", Self::font_node(&props.style))
            .with("showarrow", false);
        self.push_annotation(annotation);
    }
}

fn anchor_for_halign(halign: HorizontalAlign) -> &'static str {
    match halign {
        HorizontalAlign::Left => "left",
        HorizontalAlign::Center => "center",
        HorizontalAlign::Right => "right",
    }
}

fn anchor_for_valign(valign: VerticalAlign) -> &'static str {
    match valign {
        VerticalAlign::Top => "top",
        VerticalAlign::Center => "middle",
        VerticalAlign::Bottom | VerticalAlign::Baseline => "bottom",
    }
}

impl SceneVisitor for FigureBuilder {
    /// Fixes pixel sizing from the physical size and resolution, and derives
    /// margins so the emitted plot area matches the source's.
    fn open_figure(&mut self, props: &FigureProps) -> ConvertResult<()> {
        if self.figure_open {
            return Err(ConvertError::TraversalOrder(
                "figure opened twice".to_owned(),
            ));
        }
        self.figure_open = true;
        self.axes_count = props.axes_count;
        self.fig_x_bounds = props.x_bounds;
        self.fig_y_bounds = props.y_bounds;

        let width = (props.width_in * props.dpi) as i64;
        let height = (props.height_in * props.dpi) as i64;
        let (wf, hf) = (width as f64, height as f64);
        let margin_l = (props.x_bounds.0 * wf) as i64;
        let margin_r = ((1.0 - props.x_bounds.1) * wf) as i64;
        let margin_t = ((1.0 - props.y_bounds.1) * hf) as i64;
        let margin_b = (props.y_bounds.0 * hf) as i64;

        self.layout.set("width", width);
        self.layout.set("height", height);
        self.layout.set("autosize", false);
        self.layout.set(
            "margin",
            Node::new(Kind::Margin)
                .with("l", margin_l)
                .with("r", margin_r)
                .with("t", margin_t)
                .with("b", margin_b)
                .with("pad", 0i64),
        );
        self.frame = PaperFrame {
            width: wf,
            height: hf,
            margin_l: margin_l as f64,
            margin_r: margin_r as f64,
            margin_t: margin_t as f64,
            margin_b: margin_b as f64,
        };
        Ok(())
    }

    /// Repairs, prunes and validates the whole document, then pins the
    /// auto-legend flag (per-entry visibility was already set explicitly).
    fn close_figure(&mut self) -> ConvertResult<()> {
        self.require_figure("close_figure")?;
        self.data.repair_keys();
        self.data.repair_values();
        self.layout.repair_keys();
        self.layout.repair_values();
        self.data.prune();
        self.layout.prune();
        self.data.validate()?;
        self.layout.validate()?;
        if !self.layout.contains("showlegend") {
            self.layout.set("showlegend", false);
        }
        self.figure_open = false;
        Ok(())
    }

    /// Emits a numbered, cross-anchored axis pair with range, grid
    /// visibility and paper domain.
    fn open_axes(&mut self, props: &AxesProps) -> ConvertResult<()> {
        self.require_figure("open_axes")?;
        if self.axes_open {
            return Err(ConvertError::TraversalOrder(
                "axes opened twice".to_owned(),
            ));
        }
        self.axes_open = true;
        self.axis_ct += 1;
        let n = self.axis_ct;

        let (x0, x1) = x_domain(props.bounds, self.fig_x_bounds);
        let xaxis = Node::new(Kind::XAxis)
            .with("range", props.x_range)
            .with("showgrid", props.x_grid)
            .with("domain", (x0, x1))
            .with("anchor", format!("y{n}"))
            .with("zeroline", false);

        let (y0, y1) = y_domain(props.bounds, self.fig_y_bounds);
        let yaxis = Node::new(Kind::YAxis)
            .with("range", props.y_range)
            .with("showgrid", props.y_grid)
            .with("domain", (y0, y1))
            .with("anchor", format!("x{n}"))
            .with("zeroline", false);

        self.layout.set(format!("xaxis{n}"), xaxis);
        self.layout.set(format!("yaxis{n}"), yaxis);
        Ok(())
    }

    /// Flushes buffered rectangles into bar-series entries for the scope
    /// that just closed.
    fn close_axes(&mut self) -> ConvertResult<()> {
        self.require_axes("close_axes")?;
        let flush = self.bars.flush(self.axis_ct);
        for members in flush.discarded {
            self.record(Warning::SparseBarGroup { members });
        }
        for series in flush.series {
            self.data.push(series);
        }
        self.axes_open = false;
        Ok(())
    }

    /// Marks referenced entries legend-visible and positions the legend from
    /// its on-figure extent, anchored at its top-right corner.
    fn open_legend(&mut self, props: &LegendProps) -> ConvertResult<()> {
        self.require_figure("open_legend")?;
        self.legend_seen = true;
        for artist in &props.handles {
            if let Some(&index) = self.trace_index.get(artist) {
                if let Some(entry) = self.data.get_mut(index) {
                    entry.set("showlegend", true);
                }
            }
        }
        let (_, _, x1_px, y1_px) = props.extent_px;
        let (x, y) = self.frame.to_paper(x1_px, y1_px);
        self.layout.set(
            "legend",
            Node::new(Kind::Legend)
                .with("x", x)
                .with("y", y)
                .with("xanchor", "right")
                .with("yanchor", "top"),
        );
        self.layout.set("showlegend", true);
        Ok(())
    }

    fn close_legend(&mut self) -> ConvertResult<()> {
        self.require_figure("close_legend")
    }

    fn draw_line(&mut self, props: &LineProps) -> ConvertResult<()> {
        self.require_axes("draw_line")?;
        if props.coordinates != CoordSpace::Data {
            self.record(Warning::UnsupportedCoordinates {
                drawable: "line",
                coordinates: props.coordinates,
            });
            return Ok(());
        }
        let line = Node::new(Kind::Line)
            .with("opacity", props.style.alpha)
            .with("color", props.style.color.as_str())
            .with("width", props.style.width)
            .with("dash", props.style.dash.as_str());
        let (xs, ys): (Vec<f64>, Vec<f64>) = props.points.iter().copied().unzip();
        let (xaxis, yaxis) = self.axis_refs();
        let mut trace = Node::new(Kind::Data).with("mode", "lines");
        if let Some(label) = &props.label {
            trace.set("name", label.as_str());
        }
        let trace = trace
            .with("x", xs)
            .with("y", ys)
            .with("xaxis", xaxis)
            .with("yaxis", yaxis)
            .with("line", line)
            .with("showlegend", false);
        self.push_trace(props.artist, trace);
        Ok(())
    }

    fn draw_markers(&mut self, props: &MarkerProps) -> ConvertResult<()> {
        self.require_axes("draw_markers")?;
        if props.coordinates != CoordSpace::Data {
            self.record(Warning::UnsupportedCoordinates {
                drawable: "markers",
                coordinates: props.coordinates,
            });
            return Ok(());
        }
        let mut marker = Node::new(Kind::Marker)
            .with("opacity", props.style.alpha)
            .with("color", props.style.face_color.as_str())
            .with("symbol", props.style.symbol.as_str())
            .with(
                "line",
                Node::new(Kind::Line)
                    .with("color", props.style.edge_color.as_str())
                    .with("width", props.style.edge_width),
            );
        if let Some(size) = props.style.size {
            marker.set("size", size);
        }
        let (xs, ys): (Vec<f64>, Vec<f64>) = props.points.iter().copied().unzip();
        let (xaxis, yaxis) = self.axis_refs();
        let mut trace = Node::new(Kind::Data).with("mode", "markers");
        if let Some(label) = &props.label {
            trace.set("name", label.as_str());
        }
        let trace = trace
            .with("x", xs)
            .with("y", ys)
            .with("xaxis", xaxis)
            .with("yaxis", yaxis)
            .with("marker", marker)
            .with("showlegend", false);
        self.push_trace(props.artist, trace);
        Ok(())
    }

    /// Files pre-classified bar candidates with the regrouping tracker;
    /// anything else is dropped with a warning.
    fn draw_path(&mut self, props: &PathProps) -> ConvertResult<()> {
        self.require_axes("draw_path")?;
        if props.coordinates != CoordSpace::Data {
            self.record(Warning::UnsupportedCoordinates {
                drawable: "path",
                coordinates: props.coordinates,
            });
            return Ok(());
        }
        let Some(candidate) = props.bar else {
            self.record(Warning::NonBarPath);
            return Ok(());
        };
        self.bars.file(BarSpec {
            orientation: candidate.orientation,
            x0: candidate.x0,
            y0: candidate.y0,
            x1: candidate.x1,
            y1: candidate.y1,
            fill_color: props.style.fill_color.clone(),
            edge_color: props.style.edge_color.clone(),
            edge_width: props.style.edge_width,
            edge_dash: props.style.edge_dash.clone(),
            opacity: props.style.alpha,
            zorder: props.style.zorder,
        });
        Ok(())
    }

    /// Path collections anchored in data coordinates become marker traces;
    /// others have no stable position in the output and are skipped.
    fn draw_path_collection(&mut self, props: &CollectionProps) -> ConvertResult<()> {
        self.require_axes("draw_path_collection")?;
        if props.offset_coordinates != CoordSpace::Data {
            self.record(Warning::DetachedPathCollection);
            return Ok(());
        }
        let markers = MarkerProps {
            artist: props.artist,
            coordinates: CoordSpace::Data,
            points: props.offsets.clone(),
            label: None,
            style: props.style.clone(),
        };
        self.draw_markers(&markers)
    }

    fn draw_text(&mut self, props: &TextProps) -> ConvertResult<()> {
        self.require_figure("draw_text")?;
        match props.role {
            TextRole::XLabel => {
                self.require_axes("axis label")?;
                self.set_axis_title(&format!("xaxis{}", self.axis_ct), props)
            }
            TextRole::YLabel => {
                self.require_axes("axis label")?;
                self.set_axis_title(&format!("yaxis{}", self.axis_ct), props)
            }
            TextRole::FigureTitle => {
                self.draw_figure_title(props);
                Ok(())
            }
            TextRole::Plain => {
                if props.coordinates == CoordSpace::Data {
                    self.require_axes("data-referenced text")?;
                }
                self.draw_plain_text(props);
                Ok(())
            }
        }
    }

    fn draw_image(&mut self, _props: &ImageProps) -> ConvertResult<()> {
        self.require_figure("draw_image")?;
        self.record(Warning::UnsupportedDrawable { drawable: "image" });
        Ok(())
    }
}
