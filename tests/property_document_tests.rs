use plotly_export::bars::{BarOrientation, BarSpec, BarTracker};
use plotly_export::document::{List, Node, Value};
use plotly_export::schema::Kind;
use proptest::prelude::*;
use serde_json::json;

fn leaf_strategy() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::null()),
        any::<bool>().prop_map(Value::from),
        (-1_000_000i64..1_000_000).prop_map(Value::from),
        (-1.0e6..1.0e6).prop_map(Value::from),
        "[a-z]{0,8}".prop_map(Value::from),
    ]
}

fn node_strategy() -> impl Strategy<Value = Node> {
    let leaf_node = prop::collection::vec(("[a-z]{1,6}", leaf_strategy()), 0..6).prop_map(|fields| {
        let mut node = Node::new(Kind::Layout);
        for (field, value) in fields {
            node.set(field, value);
        }
        node
    });
    leaf_node.prop_recursive(3, 24, 4, |inner| {
        (
            prop::collection::vec(("[a-z]{1,6}", leaf_strategy()), 0..4),
            prop::collection::vec(("[a-z]{1,6}", inner.clone()), 0..3),
            prop::collection::vec(inner, 0..3),
        )
            .prop_map(|(leaves, nodes, members)| {
                let mut node = Node::new(Kind::Layout);
                for (field, value) in leaves {
                    node.set(field, value);
                }
                for (field, nested) in nodes {
                    node.set(field, nested);
                }
                let mut list = List::new();
                for member in members {
                    list.push(member);
                }
                node.set("annotations", list);
                node
            })
    })
}

proptest! {
    /// A single prune pass removes every null sentinel; a second pass finds
    /// nothing to do.
    #[test]
    fn prune_is_idempotent(mut node in node_strategy()) {
        node.prune();
        let once = node.clone();
        node.prune();
        prop_assert_eq!(node, once);
    }

    /// Stripping never deletes nested nodes or lists, only leaf fields.
    #[test]
    fn strip_preserves_structural_fields(node in node_strategy()) {
        let structural: Vec<String> = node
            .iter()
            .filter(|(_, value)| value.as_leaf().is_none())
            .map(|(field, _)| field.to_owned())
            .collect();
        let mut stripped = node;
        stripped.strip();
        for field in structural {
            prop_assert!(stripped.contains(&field), "structural field {} was deleted", field);
        }
    }

    /// Every non-node value is rejected and leaves the list untouched.
    #[test]
    fn lists_reject_every_leaf(value in leaf_strategy()) {
        let mut data = List::new();
        data.push(Node::new(Kind::Data).with("name", "anchor"));
        prop_assert!(data.try_push(value.clone()).is_err());
        prop_assert!(data.try_assign(0, value).is_err());
        prop_assert_eq!(data.to_json(), json!([{"name": "anchor"}]));
    }
}

fn bar(style: usize, x0: f64, height: f64) -> BarSpec {
    let fill = match style {
        0 => "rgb(255,0,0)",
        _ => "rgb(0,0,255)",
    };
    BarSpec {
        orientation: BarOrientation::Vertical,
        x0,
        y0: 0.0,
        x1: x0 + 0.8,
        y1: height,
        fill_color: fill.to_owned(),
        edge_color: "rgb(0,0,0)".to_owned(),
        edge_width: 1.0,
        edge_dash: "solid".to_owned(),
        opacity: Some(1.0),
        zorder: 1.0,
    }
}

proptest! {
    /// Filing partitions the stream: every rectangle ends up in exactly one
    /// series or one discarded group, and series are sorted by x0.
    #[test]
    fn regrouping_partitions_the_rectangle_stream(
        styles in prop::collection::vec(0usize..2, 1..40),
    ) {
        let mut tracker = BarTracker::new();
        for (index, &style) in styles.iter().enumerate() {
            // Distinct x0 per rectangle so sorting is observable.
            tracker.file(bar(style, index as f64 * 2.0, 1.0 + index as f64));
        }
        let flush = tracker.flush(1);

        let materialized: usize = flush
            .series
            .iter()
            .map(|series| series.to_json()["x"].as_array().expect("x").len())
            .sum();
        let discarded: usize = flush.discarded.iter().sum();
        prop_assert_eq!(materialized + discarded, styles.len());

        let distinct_styles_with_pairs = (0..2)
            .filter(|style| styles.iter().filter(|&&s| s == *style).count() >= 2)
            .count();
        prop_assert_eq!(flush.series.len(), distinct_styles_with_pairs);

        for series in &flush.series {
            let json = series.to_json();
            let xs: Vec<f64> = json["x"]
                .as_array()
                .expect("x")
                .iter()
                .map(|v| v.as_f64().expect("number"))
                .collect();
            prop_assert!(xs.windows(2).all(|pair| pair[0] <= pair[1]));
        }
    }
}
