use super::*;
use crate::{NodeDef, UiTree};

fn text_node(def: NodeDef) -> UiTree {
    UiTree::from_def(&def).unwrap()
}

#[test]
fn font_metrics_scale_and_round() {
    let mut tree = text_node(
        NodeDef::new("t")
            .with_font_size(32.0)
            .with_line_height(40.0)
            .with_stroke_thickness(3.0),
    );
    let root = tree.root();
    let node = tree.node_mut(root).unwrap();
    scale_text_metrics(node, 0.5);
    assert_eq!(node.text_font_size, Some(16.0));
    assert_eq!(node.text_line_height, Some(20.0));
    assert_eq!(node.text_stroke_thickness, Some(2.0));
}

#[test]
fn font_size_floors_at_one_but_line_metrics_do_not() {
    let mut tree = text_node(
        NodeDef::new("t")
            .with_font_size(2.0)
            .with_line_height(1.0)
            .with_stroke_thickness(1.0),
    );
    let root = tree.root();
    let node = tree.node_mut(root).unwrap();
    scale_text_metrics(node, 0.1);
    assert_eq!(node.text_font_size, Some(1.0));
    assert_eq!(node.text_line_height, Some(0.0));
    assert_eq!(node.text_stroke_thickness, Some(0.0));
}

#[test]
fn line_metrics_without_font_size_are_ignored() {
    let mut tree = text_node(NodeDef::new("t").with_line_height(40.0));
    let root = tree.root();
    let node = tree.node_mut(root).unwrap();
    scale_text_metrics(node, 0.5);
    assert_eq!(node.text_font_size, None);
    assert_eq!(node.text_line_height, Some(40.0));
}

#[test]
fn zero_ratio_keeps_font_readable() {
    let mut tree = text_node(NodeDef::new("t").with_font_size(18.0));
    let root = tree.root();
    let node = tree.node_mut(root).unwrap();
    scale_text_metrics(node, 0.0);
    assert_eq!(node.text_font_size, Some(1.0));
}

#[test]
fn null_font_size_scales_like_zero() {
    let mut tree =
        UiTree::from_json_str(r#"{ "name": "t", "textFontSize": null, "textLineHeight": 40 }"#)
            .unwrap();
    let root = tree.root();
    let node = tree.node_mut(root).unwrap();
    scale_text_metrics(node, 0.5);
    assert_eq!(node.text_font_size, Some(1.0));
    assert_eq!(node.text_line_height, Some(20.0));
}
