use plotly_export::bars::BarOrientation;
use plotly_export::events::{
    ArtistId, AxesProps, BarCandidate, CoordSpace, FigureProps, LegendProps, LineProps, LineStyle,
    PathProps, PathStyle, SceneSource, SceneVisitor,
};
use plotly_export::{ConvertOptions, Warning, convert_figure};
use serde_json::json;

/// Replays a fixed single-panel figure: one labeled line, one two-bar series
/// and an optional legend referencing the line.
struct SinglePanelFigure {
    with_legend: bool,
    with_stray_path: bool,
}

impl SinglePanelFigure {
    fn new() -> Self {
        Self {
            with_legend: false,
            with_stray_path: false,
        }
    }

    fn line(&self) -> LineProps {
        LineProps {
            artist: ArtistId(1),
            coordinates: CoordSpace::Data,
            points: vec![(0.0, 0.0), (1.0, 1.0), (2.0, 4.0)],
            label: Some("signal".to_owned()),
            style: LineStyle {
                alpha: Some(1.0),
                color: "rgb(31,119,180)".to_owned(),
                width: 1.5,
                dash: "solid".to_owned(),
            },
        }
    }

    fn bar(&self, x0: f64, x1: f64, height: f64) -> PathProps {
        PathProps {
            coordinates: CoordSpace::Data,
            bar: Some(BarCandidate {
                orientation: BarOrientation::Vertical,
                x0,
                y0: 0.0,
                x1,
                y1: height,
            }),
            style: PathStyle {
                fill_color: "rgb(255,127,14)".to_owned(),
                edge_color: "rgb(0,0,0)".to_owned(),
                edge_width: 1.0,
                edge_dash: "solid".to_owned(),
                alpha: Some(1.0),
                zorder: 1.0,
            },
        }
    }
}

impl SceneSource for SinglePanelFigure {
    fn traverse(&self, visitor: &mut dyn SceneVisitor) -> plotly_export::ConvertResult<()> {
        visitor.open_figure(&FigureProps {
            width_in: 8.0,
            height_in: 6.0,
            dpi: 100.0,
            x_bounds: (0.125, 0.875),
            y_bounds: (0.125, 0.875),
            axes_count: 1,
        })?;
        visitor.open_axes(&AxesProps {
            bounds: (0.125, 0.125, 0.75, 0.75),
            x_range: (0.0, 2.0),
            y_range: (0.0, 5.0),
            x_grid: false,
            y_grid: false,
        })?;
        visitor.draw_line(&self.line())?;
        visitor.draw_path(&self.bar(-0.4, 0.4, 3.0))?;
        visitor.draw_path(&self.bar(0.6, 1.4, 5.0))?;
        if self.with_stray_path {
            visitor.draw_path(&PathProps {
                bar: None,
                ..self.bar(0.0, 1.0, 1.0)
            })?;
        }
        if self.with_legend {
            visitor.open_legend(&LegendProps {
                handles: vec![ArtistId(1)],
                extent_px: (400.0, 300.0, 600.0, 450.0),
            })?;
            visitor.close_legend()?;
        }
        visitor.close_axes()?;
        visitor.close_figure()
    }
}

#[test]
fn full_pipeline_emits_the_wire_document() {
    let document =
        convert_figure(&SinglePanelFigure::new(), ConvertOptions::default()).expect("convert");

    let json = document.to_json();
    let data = json["data"].as_array().expect("data array");
    assert_eq!(data.len(), 2);
    assert_eq!(data[0]["mode"], json!("lines"));
    assert_eq!(data[0]["name"], json!("signal"));
    assert_eq!(data[1]["type"], json!("bar"));
    assert_eq!(data[1]["x"], json!([0.0, 1.0]));
    assert_eq!(data[1]["y"], json!([3.0, 5.0]));

    let layout = &json["layout"];
    assert_eq!(layout["width"], json!(800));
    assert_eq!(layout["showlegend"], json!(false));
    assert!(layout.get("xaxis").is_some());
    assert!(document.warnings.is_empty());
}

#[test]
fn serialized_document_round_trips_through_serde_json() {
    let document =
        convert_figure(&SinglePanelFigure::new(), ConvertOptions::default()).expect("convert");
    let parsed: serde_json::Value =
        serde_json::from_str(&document.to_json_string()).expect("document json parses");
    assert_eq!(parsed, document.to_json());
}

#[test]
fn resize_flag_drops_explicit_sizing() {
    let options = ConvertOptions {
        resize: true,
        strip_style: false,
    };
    let document = convert_figure(&SinglePanelFigure::new(), options).expect("convert");

    let layout = &document.to_json()["layout"];
    for field in ["width", "height", "autosize", "margin"] {
        assert!(layout.get(field).is_none(), "{field} must be removed");
    }
}

#[test]
fn strip_flag_removes_styling_but_not_structure() {
    let options = ConvertOptions {
        resize: false,
        strip_style: true,
    };
    let document = convert_figure(&SinglePanelFigure::new(), options).expect("convert");

    let json = document.to_json();
    let line_entry = &json["data"][0];
    assert!(line_entry.get("mode").is_none());
    assert_eq!(line_entry["x"], json!([0.0, 1.0, 2.0]));
    assert!(line_entry["line"].is_object());
    assert!(line_entry["line"].get("color").is_none());

    let bar_entry = &json["data"][1];
    assert_eq!(bar_entry["type"], json!("bar"));
    assert_eq!(bar_entry["bardir"], json!("v"));
    assert!(bar_entry.get("opacity").is_none());
}

#[test]
fn legend_visibility_survives_the_full_pipeline() {
    let source = SinglePanelFigure {
        with_legend: true,
        with_stray_path: false,
    };
    let document = convert_figure(&source, ConvertOptions::default()).expect("convert");

    let json = document.to_json();
    assert_eq!(json["data"][0]["showlegend"], json!(true));
    assert_eq!(json["data"][1]["showlegend"], json!(false));
    assert_eq!(json["layout"]["showlegend"], json!(true));
}

#[test]
fn recoverable_conditions_are_reported_not_fatal() {
    let source = SinglePanelFigure {
        with_legend: false,
        with_stray_path: true,
    };
    let document = convert_figure(&source, ConvertOptions::default()).expect("convert");

    assert_eq!(document.warnings, vec![Warning::NonBarPath]);
    assert_eq!(document.to_json()["data"].as_array().expect("data").len(), 2);
}
