use super::*;

#[test]
fn parses_camel_case_text_metrics_and_nested_children() {
    let def: NodeDef = serde_json::from_str(
        r#"{
            "name": "title",
            "position": { "offset": { "x": 50, "y": 25 } },
            "size": { "offset": { "x": 500, "y": 50 } },
            "textFontSize": 32,
            "textLineHeight": 40,
            "children": [{ "name": "inner" }]
        }"#,
    )
    .unwrap();

    assert_eq!(def.name, "title");
    assert_eq!(def.position.unwrap().offset, Some(Vec2::new(50.0, 25.0)));
    assert_eq!(def.size.unwrap().offset, Some(Vec2::new(500.0, 50.0)));
    assert_eq!(def.text_font_size, Some(32.0));
    assert_eq!(def.text_line_height, Some(40.0));
    assert_eq!(def.text_stroke_thickness, None);
    assert_eq!(def.children.len(), 1);
    assert_eq!(def.children[0].name, "inner");
}

#[test]
fn offset_accepts_array_form() {
    let dim: Dim = serde_json::from_str(r#"{ "offset": [3, 4] }"#).unwrap();
    assert_eq!(dim.offset, Some(Vec2::new(3.0, 4.0)));
}

#[test]
fn null_fields_are_treated_as_absent() {
    let def: NodeDef = serde_json::from_str(
        r#"{ "name": "n", "position": null, "size": { "offset": null }, "children": null }"#,
    )
    .unwrap();
    assert!(def.position.is_none());
    assert_eq!(def.size.as_ref().and_then(|d| d.offset), None);
    assert!(def.children.is_empty());
}

#[test]
fn unknown_keys_survive_a_roundtrip() {
    let src = r#"{
        "name": "frame",
        "visible": true,
        "position": { "offset": { "x": 1, "y": 2 }, "scale": { "x": 0.5, "y": 0 } },
        "size": { "offset": { "x": 10, "y": 20 } }
    }"#;
    let def: NodeDef = serde_json::from_str(src).unwrap();
    assert_eq!(def.extra.get("visible"), Some(&JsonValue::Bool(true)));

    let out = serde_json::to_value(&def).unwrap();
    assert_eq!(out["visible"], JsonValue::Bool(true));
    assert_eq!(out["position"]["scale"]["x"], serde_json::json!(0.5));
    assert_eq!(out["position"]["offset"]["x"], serde_json::json!(1));
    assert!(out.get("textFontSize").is_none());
}

#[test]
fn builders_compose_a_tree() {
    let def = NodeDef::new("root")
        .with_position(0.0, 0.0)
        .with_size(1920.0, 1080.0)
        .with_child(
            NodeDef::new("label")
                .with_font_size(24.0)
                .with_line_height(30.0)
                .with_stroke_thickness(2.0),
        );
    assert_eq!(def.children.len(), 1);
    assert_eq!(def.children[0].text_stroke_thickness, Some(2.0));
    assert_eq!(def.size.unwrap().offset, Some(Vec2::new(1920.0, 1080.0)));
}

#[test]
fn whole_pixels_are_written_as_integers() {
    let def = NodeDef::new("n")
        .with_position(25.0, -3.0)
        .with_size(12.5, 40.0)
        .with_font_size(16.0);
    let out = serde_json::to_string(&def).unwrap();
    assert!(out.contains(r#""position":{"offset":{"x":25,"y":-3}}"#), "{out}");
    assert!(out.contains(r#""size":{"offset":{"x":12.5,"y":40}}"#), "{out}");
    assert!(out.contains(r#""textFontSize":16"#), "{out}");
}

#[test]
fn explicit_nulls_are_written_back() {
    let src = r#"{
        "name": "n",
        "position": null,
        "size": { "offset": null },
        "textLineHeight": null,
        "children": null
    }"#;
    let def: NodeDef = serde_json::from_str(src).unwrap();
    assert!(def.position.is_none());
    assert!(def.text_line_height.is_none());

    let out = serde_json::to_value(&def).unwrap();
    let expected: JsonValue = serde_json::from_str(src).unwrap();
    assert_eq!(out, expected);
}

#[test]
fn extra_offset_components_are_kept() {
    let src = r#"{ "offset": { "x": 3, "y": 4, "z": 9 } }"#;
    let dim: Dim = serde_json::from_str(src).unwrap();
    assert_eq!(dim.offset, Some(Vec2::new(3.0, 4.0)));

    let out = serde_json::to_value(&dim).unwrap();
    let expected: JsonValue = serde_json::from_str(src).unwrap();
    assert_eq!(out, expected);
}

#[test]
fn null_font_size_keeps_the_node_text_capable() {
    let src = r#"{ "name": "t", "textFontSize": null, "textLineHeight": 40 }"#;
    let def: NodeDef = serde_json::from_str(src).unwrap();
    assert_eq!(def.text_font_size, Some(0.0));
    assert_eq!(def.text_line_height, Some(40.0));
}

#[test]
fn malformed_fields_are_rejected() {
    for src in [
        r#"{ "name": 3 }"#,
        r#"{ "position": { "offset": [1, 2, 3] } }"#,
        r#"{ "size": { "offset": { "x": 1 } } }"#,
        r#"{ "textFontSize": "big" }"#,
        r#"{ "children": {} }"#,
        r#"[]"#,
    ] {
        assert!(serde_json::from_str::<NodeDef>(src).is_err(), "{src}");
    }
}
