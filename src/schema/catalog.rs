//! Field catalogs for every object kind in the output vocabulary.
//!
//! These lists mirror the consumer's documented schema. `valid` is the
//! whitelist enforced at validation; `safe` is the subset that survives
//! style stripping; the repair tables correct known legacy upstream naming.

use super::{Kind, Schema, ValueRepair};

const EMPTY: &[&str] = &[];
const NO_RENAMES: &[(&str, &str)] = &[];
const NO_VALUE_REPAIRS: &[ValueRepair] = &[];

static BASE: Schema = Schema {
    valid: EMPTY,
    safe: EMPTY,
    repair_keys: NO_RENAMES,
    repair_values: NO_VALUE_REPAIRS,
};

static DATA: Schema = Schema {
    valid: &[
        "textfont",
        "name",
        "marker",
        "mode",
        "y",
        "x",
        "line",
        "type",
        "error_y",
        "opacity",
        "bardir",
        "xaxis",
        "yaxis",
        "showlegend",
    ],
    safe: &["name", "y", "x", "type", "bardir"],
    repair_keys: NO_RENAMES,
    // References to the first axis pair are implicit in the output format.
    repair_values: &[
        ValueRepair {
            field: "xaxis",
            suspect: "x1",
            correct: None,
        },
        ValueRepair {
            field: "yaxis",
            suspect: "y1",
            correct: None,
        },
    ],
};

static LAYOUT: Schema = Schema {
    valid: &[
        "title",
        "xaxis",
        "yaxis",
        "legend",
        "width",
        "height",
        "autosize",
        "margin",
        "paper_bgcolor",
        "plot_bgcolor",
        "barmode",
        "bargap",
        "bargroupgap",
        "boxmode",
        "boxgap",
        "boxgroupgap",
        "font",
        "titlefont",
        "dragmode",
        "hovermode",
        "separators",
        "hidesources",
        "showlegend",
        "annotations",
    ],
    safe: &["title", "width", "height", "autosize"],
    repair_keys: &[("xaxis1", "xaxis"), ("yaxis1", "yaxis")],
    repair_values: NO_VALUE_REPAIRS,
};

const AXIS_VALID: &[&str] = &[
    "range",
    "type",
    "showline",
    "mirror",
    "linecolor",
    "linewidth",
    "tick0",
    "dtick",
    "ticks",
    "ticklen",
    "tickcolor",
    "nticks",
    "showticklabels",
    "tickangle",
    "exponentformat",
    "showexponent",
    "showgrid",
    "gridcolor",
    "gridwidth",
    "autorange",
    "rangemode",
    "autotick",
    "zeroline",
    "zerolinecolor",
    "zerolinewidth",
    "titlefont",
    "tickfont",
    "overlaying",
    "domain",
    "position",
    "anchor",
    "title",
];

const AXIS_SAFE: &[&str] = &[
    "range",
    "type",
    "showticklabels",
    "exponentformat",
    "zeroline",
    "overlaying",
    "domain",
    "position",
    "anchor",
    "title",
];

static XAXIS: Schema = Schema {
    valid: AXIS_VALID,
    safe: AXIS_SAFE,
    repair_keys: NO_RENAMES,
    repair_values: &[ValueRepair {
        field: "anchor",
        suspect: "y1",
        correct: Some("y"),
    }],
};

static YAXIS: Schema = Schema {
    valid: AXIS_VALID,
    safe: AXIS_SAFE,
    repair_keys: NO_RENAMES,
    repair_values: &[ValueRepair {
        field: "anchor",
        suspect: "x1",
        correct: Some("x"),
    }],
};

static MARKER: Schema = Schema {
    valid: &["symbol", "line", "size", "color", "opacity"],
    safe: &["symbol", "size"],
    repair_keys: NO_RENAMES,
    repair_values: NO_VALUE_REPAIRS,
};

static LINE: Schema = Schema {
    valid: &["dash", "color", "width", "opacity"],
    safe: &["dash"],
    repair_keys: NO_RENAMES,
    repair_values: NO_VALUE_REPAIRS,
};

static MARGIN: Schema = Schema {
    valid: &["l", "r", "b", "t", "pad"],
    safe: &["l", "r", "b", "t", "pad"],
    repair_keys: NO_RENAMES,
    repair_values: NO_VALUE_REPAIRS,
};

static FONT: Schema = Schema {
    valid: &["color", "size", "family"],
    safe: EMPTY,
    repair_keys: NO_RENAMES,
    repair_values: NO_VALUE_REPAIRS,
};

static LEGEND: Schema = Schema {
    valid: &[
        "bgcolor",
        "bordercolor",
        "font",
        "traceorder",
        "x",
        "y",
        "xanchor",
        "yanchor",
    ],
    safe: &["traceorder"],
    repair_keys: NO_RENAMES,
    repair_values: NO_VALUE_REPAIRS,
};

static ANNOTATION: Schema = Schema {
    valid: &[
        "text",
        "bordercolor",
        "borderwidth",
        "borderpad",
        "bgcolor",
        "xref",
        "yref",
        "showarrow",
        "arrowwidth",
        "arrowcolor",
        "arrowhead",
        "arrowsize",
        "tag",
        "font",
        "opacity",
        "align",
        "xanchor",
        "yanchor",
        "ay",
        "ax",
        "y",
        "x",
    ],
    safe: &[
        "text", "xref", "yref", "showarrow", "align", "xanchor", "yanchor", "ay", "ax", "y", "x",
    ],
    repair_keys: NO_RENAMES,
    repair_values: &[
        ValueRepair {
            field: "xref",
            suspect: "x1",
            correct: Some("x"),
        },
        ValueRepair {
            field: "yref",
            suspect: "y1",
            correct: Some("y"),
        },
    ],
};

pub(super) fn lookup(kind: Kind) -> &'static Schema {
    match kind {
        Kind::Base => &BASE,
        Kind::Data => &DATA,
        Kind::Layout => &LAYOUT,
        Kind::XAxis => &XAXIS,
        Kind::YAxis => &YAXIS,
        Kind::Marker => &MARKER,
        Kind::Line => &LINE,
        Kind::Margin => &MARGIN,
        Kind::Font => &FONT,
        Kind::Legend => &LEGEND,
        Kind::Annotation => &ANNOTATION,
    }
}
