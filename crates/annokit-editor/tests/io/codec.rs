use annokit_core::{
    CodecError, Error, PageRect, PageRotation, Point, Rgb, ShapeKind, ShapeStyle, StyleParam,
};
use annokit_editor::codec::{deserialize, records_from_json, records_to_json, serialize};
use annokit_editor::{
    derive_circle, derive_rectangle, AnnotationRecord, CommandHistory, EditorEvent, PageInfo,
    Placement, PointerButton, SerializeParams, ShapeEditor, ShapeRecord,
};
use proptest::prelude::*;

fn style(thickness: f64) -> ShapeStyle {
    ShapeStyle {
        stroke_color: Rgb::new(0x12, 0x34, 0x56),
        stroke_opacity: 0.8,
        thickness,
        fill_color: Rgb::new(255, 0, 0),
        fill_opacity: 0.25,
    }
}

fn params(rotation: i32) -> SerializeParams {
    SerializeParams {
        placement: Placement::unplaced(1.0),
        rect: PageRect::from_size(200.0, 100.0),
        rotation,
        page_index: 0,
    }
}

fn committed_rectangle(page: PageInfo, from: (f64, f64), to: (f64, f64)) -> ShapeEditor {
    let mut editor = ShapeEditor::new(ShapeKind::Rectangle, page);
    let mut history = CommandHistory::default();
    history.add(editor.update_style(StyleParam::Thickness(2.0)), &mut editor);
    editor.focus();
    editor.pointer_down(from.0, from.1, PointerButton::Primary);
    for event in editor.pointer_up(to.0, to.1) {
        if let EditorEvent::Command(cmd) = event {
            history.add(cmd, &mut editor);
        }
    }
    editor.commit();
    editor
}

#[test]
fn test_invalid_rotation_fails_the_whole_call() {
    let shapes = [
        ShapeRecord::Rectangle(derive_rectangle(0.0, 0.0, 10.0, 10.0)),
        ShapeRecord::Rectangle(derive_rectangle(5.0, 5.0, 20.0, 20.0)),
    ];
    let err = serialize(&shapes, &style(1.0), &params(45)).unwrap_err();
    let err: Error = err.into();
    assert!(err.is_invalid_rotation());
    assert!(err.is_codec_error());
}

#[test]
fn test_record_json_uses_camel_case_keys() {
    let shapes = [ShapeRecord::Circle(derive_circle(20.0, 20.0, 23.0, 24.0))];
    let records = serialize(&shapes, &style(2.0), &params(90)).unwrap();
    let json = records_to_json(&records).unwrap();
    for key in [
        "\"strokeColorHex\": \"#123456\"",
        "\"fillColorHex\": \"#ff0000\"",
        "\"strokeThickness\"",
        "\"fillOpacity\"",
        "\"pageRect\"",
        "\"pageRotation\": 90",
        "\"pageIndex\"",
        "\"kind\": \"circle\"",
    ] {
        assert!(json.contains(key), "missing {key} in {json}");
    }

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("annotations.json");
    std::fs::write(&path, &json).unwrap();
    let loaded = records_from_json(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(loaded, records);
}

#[test]
fn test_unknown_rotation_in_json_fails_on_decode() {
    let json = r##"[{
        "kind": "rectangle",
        "strokeColorHex": "#000000",
        "strokeThickness": 1.0,
        "opacity": 1.0,
        "fillColorHex": "#ffffff",
        "fillOpacity": 0.0,
        "points": [0.0, 0.0, 10.0, 10.0],
        "pageRect": [0.0, 0.0, 100.0, 100.0],
        "pageRotation": 45,
        "pageIndex": 0
    }]"##;
    let records = records_from_json(json).unwrap();
    let err = deserialize(&records[0], &Placement::unplaced(1.0)).unwrap_err();
    assert!(matches!(err, CodecError::Transform(_)));
}

#[test]
fn test_invalid_style_values_are_rejected() {
    let shapes = [ShapeRecord::Rectangle(derive_rectangle(0.0, 0.0, 10.0, 10.0))];
    let record = serialize(&shapes, &style(1.0), &params(0)).unwrap().remove(0);
    let placement = Placement::unplaced(1.0);

    let mut bad = record.clone();
    bad.opacity = 1.5;
    assert!(matches!(
        deserialize(&bad, &placement),
        Err(CodecError::InvalidOpacity { field: "opacity", .. })
    ));

    let mut bad = record.clone();
    bad.fill_opacity = -0.1;
    assert!(matches!(
        deserialize(&bad, &placement),
        Err(CodecError::InvalidOpacity { field: "fillOpacity", .. })
    ));

    let mut bad = record;
    bad.stroke_thickness = f64::NAN;
    assert!(matches!(
        deserialize(&bad, &placement),
        Err(CodecError::InvalidThickness { .. })
    ));
}

#[test]
fn test_empty_editor_has_no_records() {
    let page = PageInfo::new(0, PageRect::from_size(200.0, 100.0), PageRotation::Deg0, 1.0);
    let editor = ShapeEditor::new(ShapeKind::Circle, page);
    assert!(editor.serialize().unwrap().is_empty());
}

#[test]
fn test_editor_round_trip_through_records() {
    for rotation in PageRotation::ALL {
        let page = PageInfo::new(4, PageRect::new(0.0, 0.0, 200.0, 300.0), rotation, 1.0);
        let original = committed_rectangle(page, (20.0, 30.0), (60.0, 50.0));
        let records = original.serialize().unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].page_index, 4);
        assert_eq!(records[0].page_rotation, rotation.degrees());

        let mut restored = ShapeEditor::deserialize(&records[0], page).unwrap();
        assert!(restored.is_locked());
        assert_eq!(restored.style().thickness, 2.0);
        restored.rebuild();

        assert_eq!(restored.position(), original.position());
        assert_eq!(restored.surface_size(), original.surface_size());
        let again = restored.serialize().unwrap();
        for (a, b) in again[0].points.iter().zip(&records[0].points) {
            assert!((a - b).abs() < 1e-9, "{rotation}: {a} != {b}");
        }
    }
}

#[test]
fn test_record_points_are_in_document_space() {
    let page = PageInfo::new(0, PageRect::from_size(200.0, 100.0), PageRotation::Deg0, 1.0);
    let editor = committed_rectangle(page, (20.0, 30.0), (60.0, 50.0));
    let record: &AnnotationRecord = &editor.serialize().unwrap()[0];
    // The drag corners, with y flipped against the page top.
    assert_eq!(record.points, vec![20.0, 70.0, 60.0, 50.0]);
}

fn shape_strategy() -> impl Strategy<Value = ShapeRecord> {
    let coord = || -1000.0f64..1000.0;
    (any::<bool>(), coord(), coord(), coord(), coord()).prop_map(|(circle, sx, sy, ex, ey)| {
        if circle {
            ShapeRecord::Circle(derive_circle(sx, sy, ex, ey))
        } else {
            ShapeRecord::Rectangle(derive_rectangle(sx, sy, ex, ey))
        }
    })
}

fn placement_strategy() -> impl Strategy<Value = Placement> {
    (
        0.1f64..10.0,
        -500.0f64..500.0,
        -500.0f64..500.0,
        -1000.0f64..1000.0,
        -1000.0f64..1000.0,
    )
        .prop_map(|(scale, tx, ty, ox, oy)| Placement {
            scale,
            translation: Point::new(tx, ty),
            origin: Point::new(ox, oy),
        })
}

proptest! {
    #[test]
    fn prop_codec_round_trip(
        shape in shape_strategy(),
        placement in placement_strategy(),
        rotation in prop::sample::select(PageRotation::ALL.to_vec()),
        thickness in 0.0f64..20.0,
        left in -100.0f64..100.0,
        bottom in -100.0f64..100.0,
    ) {
        let params = SerializeParams {
            placement,
            rect: PageRect::new(left, bottom, left + 612.0, bottom + 792.0),
            rotation: rotation.degrees(),
            page_index: 1,
        };
        let style = style(thickness);
        let records = serialize(&[shape], &style, &params).unwrap();
        prop_assert_eq!(records.len(), 1);

        let decoded = deserialize(&records[0], &placement).unwrap();
        prop_assert_eq!(decoded.kind, records[0].kind);
        prop_assert_eq!(decoded.style, style);
        prop_assert_eq!(decoded.rotation, rotation);
        prop_assert!(
            decoded.shape.approx_eq(&shape, 1e-7),
            "{:?} != {:?}", decoded.shape, shape
        );
    }
}
