use plotly_export::bars::{BarOrientation, BarSpec, BarTracker};
use serde_json::json;

fn vertical_bar(center: f64, height: f64, fill: &str) -> BarSpec {
    BarSpec {
        orientation: BarOrientation::Vertical,
        x0: center - 0.4,
        y0: 0.0,
        x1: center + 0.4,
        y1: height,
        fill_color: fill.to_owned(),
        edge_color: "rgb(0,0,0)".to_owned(),
        edge_width: 1.0,
        edge_dash: "solid".to_owned(),
        opacity: Some(1.0),
        zorder: 1.0,
    }
}

fn horizontal_bar(center: f64, length: f64, fill: &str) -> BarSpec {
    BarSpec {
        orientation: BarOrientation::Horizontal,
        x0: 0.0,
        y0: center - 0.4,
        x1: length,
        y1: center + 0.4,
        fill_color: fill.to_owned(),
        edge_color: "rgb(0,0,0)".to_owned(),
        edge_width: 1.0,
        edge_dash: "solid".to_owned(),
        opacity: Some(1.0),
        zorder: 1.0,
    }
}

#[test]
fn two_styles_regroup_into_exactly_two_series() {
    let mut tracker = BarTracker::new();
    // Interleaved arrival across two visually distinct series.
    tracker.file(vertical_bar(0.0, 3.0, "rgb(255,0,0)"));
    tracker.file(vertical_bar(0.0, 5.0, "rgb(0,0,255)"));
    tracker.file(vertical_bar(1.0, 4.0, "rgb(255,0,0)"));
    tracker.file(vertical_bar(1.0, 6.0, "rgb(0,0,255)"));
    tracker.file(vertical_bar(2.0, 5.0, "rgb(255,0,0)"));
    tracker.file(vertical_bar(2.0, 7.0, "rgb(0,0,255)"));

    let flush = tracker.flush(1);
    assert!(flush.discarded.is_empty());
    assert_eq!(flush.series.len(), 2);

    let red = flush.series[0].to_json();
    assert_eq!(red["x"], json!([0.0, 1.0, 2.0]));
    assert_eq!(red["y"], json!([3.0, 4.0, 5.0]));
    assert_eq!(red["marker"]["color"], json!("rgb(255,0,0)"));

    let blue = flush.series[1].to_json();
    assert_eq!(blue["x"], json!([0.0, 1.0, 2.0]));
    assert_eq!(blue["y"], json!([5.0, 6.0, 7.0]));
    assert_eq!(blue["marker"]["color"], json!("rgb(0,0,255)"));
}

#[test]
fn members_are_sorted_by_leading_corner_not_arrival() {
    let mut tracker = BarTracker::new();
    tracker.file(vertical_bar(2.0, 7.0, "rgb(255,0,0)"));
    tracker.file(vertical_bar(0.0, 3.0, "rgb(255,0,0)"));
    tracker.file(vertical_bar(1.0, 5.0, "rgb(255,0,0)"));

    let flush = tracker.flush(1);
    let series = flush.series[0].to_json();
    assert_eq!(series["x"], json!([0.0, 1.0, 2.0]));
    assert_eq!(series["y"], json!([3.0, 5.0, 7.0]));
}

#[test]
fn vertical_series_node_shape() {
    let mut tracker = BarTracker::new();
    tracker.file(vertical_bar(0.0, 3.0, "rgb(255,0,0)"));
    tracker.file(vertical_bar(1.0, 5.0, "rgb(255,0,0)"));

    let flush = tracker.flush(2);
    let series = flush.series[0].to_json();

    assert_eq!(series["type"], json!("bar"));
    assert_eq!(series["bardir"], json!("v"));
    assert_eq!(series["xaxis"], json!("x2"));
    assert_eq!(series["yaxis"], json!("y2"));
    assert_eq!(series["marker"]["line"]["width"], json!(1.0));
    assert_eq!(series["opacity"], json!(1.0));
    assert_eq!(series["showlegend"], json!(false));
}

#[test]
fn horizontal_bars_take_centers_from_the_y_span() {
    let mut tracker = BarTracker::new();
    tracker.file(horizontal_bar(1.0, 6.0, "rgb(0,128,0)"));
    tracker.file(horizontal_bar(0.0, 4.0, "rgb(0,128,0)"));

    let flush = tracker.flush(1);
    let series = flush.series[0].to_json();

    assert_eq!(series["bardir"], json!("h"));
    // Category centers along y, sorted by y0; values from the far x corner.
    assert_eq!(series["x"], json!([0.0, 1.0]));
    assert_eq!(series["y"], json!([4.0, 6.0]));
}

#[test]
fn a_lone_rectangle_is_discarded() {
    let mut tracker = BarTracker::new();
    tracker.file(vertical_bar(0.0, 3.0, "rgb(255,0,0)"));

    let flush = tracker.flush(1);
    assert!(flush.series.is_empty());
    assert_eq!(flush.discarded, vec![1]);
}

#[test]
fn singleton_groups_are_discarded_alongside_real_series() {
    let mut tracker = BarTracker::new();
    tracker.file(vertical_bar(0.0, 3.0, "rgb(255,0,0)"));
    tracker.file(vertical_bar(1.0, 4.0, "rgb(255,0,0)"));
    tracker.file(vertical_bar(0.5, 9.0, "rgb(128,128,128)"));

    let flush = tracker.flush(1);
    assert_eq!(flush.series.len(), 1);
    assert_eq!(flush.discarded, vec![1]);
}

#[test]
fn edge_width_differences_split_series() {
    let mut tracker = BarTracker::new();
    let mut thick = vertical_bar(0.0, 3.0, "rgb(255,0,0)");
    thick.edge_width = 2.0;
    tracker.file(thick);
    tracker.file(vertical_bar(1.0, 4.0, "rgb(255,0,0)"));

    assert_eq!(tracker.open_groups(), 2);
}

#[test]
fn missing_opacity_only_matches_missing_opacity() {
    let mut tracker = BarTracker::new();
    let mut unset = vertical_bar(0.0, 3.0, "rgb(255,0,0)");
    unset.opacity = None;
    tracker.file(unset);
    tracker.file(vertical_bar(1.0, 4.0, "rgb(255,0,0)"));

    assert_eq!(tracker.open_groups(), 2);
}
