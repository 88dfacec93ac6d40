use annokit_core::{PageRect, PageRotation, Point, ShapeKind, StyleParam};
use annokit_editor::{
    CommandHistory, EditorEvent, PageInfo, PointerButton, ShapeEditor, SurfaceSize,
};

fn page(scale: f64) -> PageInfo {
    PageInfo::new(0, PageRect::from_size(300.0, 200.0), PageRotation::Deg0, scale)
}

/// Draws one shape per `(from, to)` pair and commits the editor.
fn committed_editor(kind: ShapeKind, scale: f64, drags: &[((f64, f64), (f64, f64))]) -> ShapeEditor {
    let mut editor = ShapeEditor::new(kind, page(scale));
    let mut history = CommandHistory::default();
    history.add(editor.update_style(StyleParam::Thickness(2.0)), &mut editor);
    editor.focus();
    for &(from, to) in drags {
        editor.pointer_down(from.0, from.1, PointerButton::Primary);
        editor.pointer_move(to.0, to.1);
        for event in editor.pointer_up(to.0, to.1) {
            if let EditorEvent::Command(cmd) = event {
                history.add(cmd, &mut editor);
            }
        }
    }
    editor.commit();
    editor
}

fn snapshot(editor: &ShapeEditor) -> (SurfaceSize, Point, f64) {
    let state = editor.state();
    (editor.surface_size(), state.translation, state.scale_factor)
}

#[test]
fn test_fit_is_idempotent() {
    let mut editor = committed_editor(
        ShapeKind::Circle,
        1.5,
        &[((100.0, 100.0), (130.0, 140.0)), ((40.0, 60.0), (45.0, 60.0))],
    );
    let first = editor.fit_to_content(false);
    let after_first = (snapshot(&editor), editor.position());
    let second = editor.fit_to_content(false);
    assert_eq!(first, second);
    assert_eq!((snapshot(&editor), editor.position()), after_first);
    assert!(!first.iter().any(|e| matches!(e, EditorEvent::Moved { .. })));
}

#[test]
fn test_small_content_uses_min_size() {
    let editor = committed_editor(ShapeKind::Rectangle, 1.0, &[((10.0, 10.0), (12.0, 10.0))]);
    let size = editor.surface_size();
    // 16 minimum + 2 padding
    assert_eq!((size.width, size.height), (18.0, 18.0));
}

#[test]
fn test_unlocked_fit_only_redraws() {
    let mut editor = ShapeEditor::new(ShapeKind::Rectangle, page(1.0));
    assert!(editor.fit_to_content(false).is_empty());

    let mut history = CommandHistory::default();
    editor.focus();
    editor.pointer_down(10.0, 10.0, PointerButton::Primary);
    for event in editor.pointer_up(50.0, 50.0) {
        if let EditorEvent::Command(cmd) = event {
            history.add(cmd, &mut editor);
        }
    }
    let before = editor.surface_size();
    assert_eq!(editor.fit_to_content(false), vec![EditorEvent::RequestRedraw]);
    assert_eq!(editor.surface_size(), before);
}

#[test]
fn test_resize_rescales_locked_editor() {
    let mut editor = committed_editor(ShapeKind::Rectangle, 1.0, &[((20.0, 30.0), (60.0, 50.0))]);
    assert_eq!(editor.surface_size(), SurfaceSize::new(42.0, 22.0));

    // Same rounded size as the fit: nothing to do.
    assert!(editor.on_surface_resized(42.3, 21.8).is_empty());

    assert_eq!(
        editor.on_surface_resized(84.0, 44.0),
        vec![EditorEvent::RequestRedraw]
    );
    assert!((editor.state().scale_factor - 2.05).abs() < 1e-12);
    assert_eq!(editor.surface_size(), SurfaceSize::new(84.0, 44.0));
}

#[test]
fn test_zero_size_resize_is_ignored() {
    let mut editor = committed_editor(ShapeKind::Circle, 1.0, &[((50.0, 50.0), (60.0, 50.0))]);
    let before = snapshot(&editor);
    assert!(editor.on_surface_resized(0.0, 120.0).is_empty());
    assert!(editor.on_surface_resized(120.0, 0.0).is_empty());
    assert_eq!(snapshot(&editor), before);
}

#[test]
fn test_resize_before_first_draw_is_ignored() {
    let mut editor = ShapeEditor::new(ShapeKind::Circle, page(1.0));
    assert!(editor.on_surface_resized(100.0, 100.0).is_empty());
    assert_eq!(editor.surface_size(), SurfaceSize::new(300.0, 200.0));
}

#[test]
fn test_unlocked_resize_keeps_scale() {
    let mut editor = ShapeEditor::new(ShapeKind::Circle, page(1.0));
    editor.focus();
    editor.pointer_down(10.0, 10.0, PointerButton::Primary);
    assert_eq!(
        editor.on_surface_resized(150.0, 100.0),
        vec![EditorEvent::RequestRedraw]
    );
    assert_eq!(editor.state().scale_factor, 1.0);
}

#[test]
fn test_thickness_change_refits_locked_editor() {
    let mut editor = committed_editor(ShapeKind::Rectangle, 1.0, &[((20.0, 30.0), (60.0, 50.0))]);
    let mut history = CommandHistory::default();
    let events = history.add(editor.update_style(StyleParam::Thickness(6.0)), &mut editor);
    assert!(events.contains(&EditorEvent::RequestResize {
        width: 46.0,
        height: 26.0
    }));

    let events = history.add(
        editor.update_style(StyleParam::StrokeOpacity(0.5)),
        &mut editor,
    );
    assert_eq!(events, vec![EditorEvent::RequestRedraw]);
}

#[test]
fn test_resize_smaller_than_padding_is_ignored() {
    let mut editor = committed_editor(ShapeKind::Rectangle, 1.0, &[((20.0, 30.0), (60.0, 50.0))]);
    let before = (snapshot(&editor), editor.line_width());

    // Padding is 2px, so neither size leaves room for content.
    assert!(editor.on_surface_resized(2.0, 2.0).is_empty());
    assert!(editor.on_surface_resized(1.0, 30.0).is_empty());
    assert_eq!((snapshot(&editor), editor.line_width()), before);
    assert!(editor.state().scale_factor > 0.0);

    assert_eq!(
        editor.on_surface_resized(84.0, 44.0),
        vec![EditorEvent::RequestRedraw]
    );
    assert!((editor.state().scale_factor - 2.05).abs() < 1e-12);
}
