//! Regroups independent rectangle observations into ordered bar series.
//!
//! Rectangles arrive one at a time within an axes scope. Each is compared
//! against the first member of every open group; identical style means same
//! series. Cost is linear in the number of distinct styles per axes, which
//! real charts keep small.

use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::document::Node;
use crate::schema::Kind;

/// Direction of a bar along its value axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BarOrientation {
    Vertical,
    Horizontal,
}

impl BarOrientation {
    /// Wire-format direction code.
    #[must_use]
    pub fn as_code(self) -> &'static str {
        match self {
            Self::Vertical => "v",
            Self::Horizontal => "h",
        }
    }
}

/// One rectangle observation that might belong to a bar series.
#[derive(Debug, Clone, PartialEq)]
pub struct BarSpec {
    pub orientation: BarOrientation,
    pub x0: f64,
    pub y0: f64,
    pub x1: f64,
    pub y1: f64,
    pub fill_color: String,
    pub edge_color: String,
    pub edge_width: f64,
    pub edge_dash: String,
    pub opacity: Option<f64>,
    pub zorder: f64,
}

impl BarSpec {
    /// Grouping predicate: exact style equality, bit-for-bit on floats.
    /// Upstream color conversion can round differently between rectangles of
    /// the same source series; no tolerance is applied here, matching the
    /// consumer's documented behavior.
    #[must_use]
    fn matches(&self, other: &Self) -> bool {
        self.orientation == other.orientation
            && self.fill_color == other.fill_color
            && self.edge_color == other.edge_color
            && OrderedFloat(self.edge_width) == OrderedFloat(other.edge_width)
            && self.opacity.map(OrderedFloat) == other.opacity.map(OrderedFloat)
            && self.edge_dash == other.edge_dash
    }

    /// Leading corner along the categorical axis; fixes category order.
    #[must_use]
    fn leading_corner(&self) -> f64 {
        match self.orientation {
            BarOrientation::Vertical => self.x0,
            BarOrientation::Horizontal => self.y0,
        }
    }

    /// Category center: midpoint of the span along the categorical axis.
    #[must_use]
    fn center(&self) -> f64 {
        match self.orientation {
            BarOrientation::Vertical => self.x0 + (self.x1 - self.x0) / 2.0,
            BarOrientation::Horizontal => self.y0 + (self.y1 - self.y0) / 2.0,
        }
    }

    /// Bar value: far corner along the value axis.
    #[must_use]
    fn value(&self) -> f64 {
        match self.orientation {
            BarOrientation::Vertical => self.y1,
            BarOrientation::Horizontal => self.x1,
        }
    }
}

/// Result of flushing an axes scope: materialized series nodes plus the
/// member counts of groups that were discarded as too sparse.
#[derive(Debug, Default)]
pub struct BarFlush {
    pub series: Vec<Node>,
    pub discarded: Vec<usize>,
}

/// Accumulates bar candidates for the currently open axes scope.
#[derive(Debug, Default)]
pub struct BarTracker {
    groups: SmallVec<[Vec<BarSpec>; 4]>,
}

impl BarTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    #[must_use]
    pub fn open_groups(&self) -> usize {
        self.groups.len()
    }

    /// Files one rectangle: append to the first group whose leading member
    /// matches its style exactly, or open a new singleton group. Arrival
    /// order within a group is preserved until flush sorts it.
    pub fn file(&mut self, spec: BarSpec) {
        for group in &mut self.groups {
            if group[0].matches(&spec) {
                group.push(spec);
                return;
            }
        }
        self.groups.push(vec![spec]);
    }

    /// Materializes every open group as one bar-series node referencing
    /// `axis`, resetting the tracker. Groups with fewer than two members are
    /// assumed to be stray rectangles from ambiguous path detection and are
    /// reported in `discarded` instead of producing a series.
    pub fn flush(&mut self, axis: usize) -> BarFlush {
        let mut flush = BarFlush::default();
        for group in self.groups.drain(..) {
            if group.len() < 2 {
                flush.discarded.push(group.len());
            } else {
                flush.series.push(materialize(group, axis));
            }
        }
        flush
    }
}

/// Builds one bar-series node from a group of identically styled rectangles.
/// All members share the first member's style by construction of `file`.
fn materialize(mut group: Vec<BarSpec>, axis: usize) -> Node {
    group.sort_by_key(|bar| OrderedFloat(bar.leading_corner()));

    let centers: Vec<f64> = group.iter().map(BarSpec::center).collect();
    let values: Vec<f64> = group.iter().map(BarSpec::value).collect();
    let lead = &group[0];

    let marker = Node::new(Kind::Marker)
        .with("color", lead.fill_color.as_str())
        .with("line", Node::new(Kind::Line).with("width", lead.edge_width));

    Node::new(Kind::Data)
        .with("type", "bar")
        .with("bardir", lead.orientation.as_code())
        .with("x", centers)
        .with("y", values)
        .with("xaxis", format!("x{axis}"))
        .with("yaxis", format!("y{axis}"))
        .with("marker", marker)
        .with("opacity", lead.opacity)
        .with("showlegend", false)
}
