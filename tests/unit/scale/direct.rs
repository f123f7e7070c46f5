use super::*;
use crate::foundation::core::Vec2;
use crate::{Dim, NodeDef};

fn run(tree: &mut UiTree, ratio: f64, markers: &mut ScaledMarkers) -> ScaleStats {
    let mut stats = ScaleStats::default();
    let root = tree.root();
    apply_direct(tree, root, ratio, markers, &mut stats);
    stats
}

fn named<'a>(tree: &'a UiTree, name: &str) -> &'a crate::UiNode {
    tree.node(tree.find_by_name(name).unwrap()).unwrap()
}

#[test]
fn title_node_scales_by_half() {
    let def = NodeDef::new("title")
        .with_position(50.0, 25.0)
        .with_size(500.0, 50.0)
        .with_font_size(32.0)
        .with_line_height(40.0);
    let mut tree = UiTree::from_def(&def).unwrap();
    run(&mut tree, 0.5, &mut ScaledMarkers::default());

    let n = named(&tree, "title");
    assert_eq!(n.position_offset(), Some(Vec2::new(25.0, 13.0)));
    assert_eq!(n.size_offset(), Some(Vec2::new(250.0, 25.0)));
    assert_eq!(n.text_font_size, Some(16.0));
    assert_eq!(n.text_line_height, Some(20.0));
}

#[test]
fn unit_size_does_not_collapse() {
    let def = NodeDef::new("dot")
        .with_position(0.0, 0.0)
        .with_size(1.0, 1.0);
    let mut tree = UiTree::from_def(&def).unwrap();
    run(&mut tree, 0.5, &mut ScaledMarkers::default());
    assert_eq!(named(&tree, "dot").size_offset(), Some(Vec2::new(1.0, 1.0)));
}

#[test]
fn child_size_ignores_parent_in_direct_mode() {
    let def = NodeDef::new("root")
        .with_position(0.0, 0.0)
        .with_size(1920.0, 1080.0)
        .with_child(
            NodeDef::new("header")
                .with_position(0.0, 0.0)
                .with_size(1920.0, 100.0),
        );
    let mut tree = UiTree::from_def(&def).unwrap();
    run(&mut tree, 0.5, &mut ScaledMarkers::default());
    assert_eq!(
        named(&tree, "root").size_offset(),
        Some(Vec2::new(960.0, 540.0))
    );
    assert_eq!(
        named(&tree, "header").size_offset(),
        Some(Vec2::new(960.0, 50.0))
    );
}

#[test]
fn non_renderable_nodes_are_untouched_but_walked() {
    let def = NodeDef::new("group")
        .with_size(400.0, 400.0)
        .with_font_size(20.0)
        .with_child(
            NodeDef::new("leaf")
                .with_position(10.0, 10.0)
                .with_size(100.0, 100.0),
        );
    let mut tree = UiTree::from_def(&def).unwrap();
    let stats = run(&mut tree, 0.5, &mut ScaledMarkers::default());

    let group = named(&tree, "group");
    assert_eq!(group.size_offset(), Some(Vec2::new(400.0, 400.0)));
    assert_eq!(group.text_font_size, Some(20.0));
    let leaf = named(&tree, "leaf");
    assert_eq!(leaf.position_offset(), Some(Vec2::new(5.0, 5.0)));
    assert_eq!(leaf.size_offset(), Some(Vec2::new(50.0, 50.0)));

    assert_eq!(
        stats,
        ScaleStats {
            visited: 2,
            renderable: 1,
            scaled: 1,
            already_scaled: 0,
        }
    );
}

#[test]
fn missing_position_offset_still_scales_size_and_text() {
    let def = NodeDef {
        position: Some(Dim::default()),
        ..NodeDef::new("label")
            .with_size(200.0, 40.0)
            .with_font_size(24.0)
    };
    let mut tree = UiTree::from_def(&def).unwrap();
    run(&mut tree, 0.5, &mut ScaledMarkers::default());

    let n = named(&tree, "label");
    assert_eq!(n.position_offset(), None);
    assert_eq!(n.size_offset(), Some(Vec2::new(100.0, 20.0)));
    assert_eq!(n.text_font_size, Some(12.0));
}

#[test]
fn marked_nodes_are_not_scaled_twice() {
    let def = NodeDef::new("root")
        .with_position(10.0, 10.0)
        .with_size(100.0, 100.0)
        .with_child(
            NodeDef::new("child")
                .with_position(4.0, 4.0)
                .with_size(20.0, 20.0),
        );
    let mut tree = UiTree::from_def(&def).unwrap();
    let mut markers = ScaledMarkers::default();
    run(&mut tree, 0.5, &mut markers);
    let once = tree.to_def();

    let stats = run(&mut tree, 0.5, &mut markers);
    assert_eq!(tree.to_def(), once);
    assert_eq!(stats.scaled, 0);
    assert_eq!(stats.already_scaled, 2);
    assert_eq!(markers.len(), 2);
}

#[test]
fn negative_ratio_flips_positions_and_clamps_sizes() {
    let def = NodeDef::new("n")
        .with_position(5.0, 3.0)
        .with_size(100.0, 100.0);
    let mut tree = UiTree::from_def(&def).unwrap();
    run(&mut tree, -0.5, &mut ScaledMarkers::default());

    let n = named(&tree, "n");
    // -2.5 and -1.5 round towards positive infinity.
    assert_eq!(n.position_offset(), Some(Vec2::new(-2.0, -1.0)));
    assert_eq!(n.size_offset(), Some(Vec2::new(1.0, 1.0)));
}
