use annokit_core::{PageRect, PageRotation, Rgb, ShapeKind, StyleParam};
use annokit_editor::{
    render_editor, CommandHistory, EditorEvent, Ink, PageInfo, PixmapSurface, PointerButton,
    RenderError, RenderSurface, ShapeEditor,
};

fn page() -> PageInfo {
    PageInfo::new(0, PageRect::from_size(200.0, 100.0), PageRotation::Deg0, 1.0)
}

#[test]
fn test_committed_rectangle_fills_inside_stroke() {
    let mut editor = ShapeEditor::new(ShapeKind::Rectangle, page());
    let mut history = CommandHistory::default();
    for param in [
        StyleParam::Thickness(2.0),
        StyleParam::FillColor(Rgb::new(255, 0, 0)),
        StyleParam::FillOpacity(1.0),
    ] {
        history.add(editor.update_style(param), &mut editor);
    }
    editor.focus();
    editor.pointer_down(20.0, 30.0, PointerButton::Primary);
    for event in editor.pointer_up(60.0, 50.0) {
        if let EditorEvent::Command(cmd) = event {
            history.add(cmd, &mut editor);
        }
    }
    editor.commit();

    let mut surface = PixmapSurface::for_editor(&editor).unwrap();
    assert_eq!(surface.physical_size(), (42.0, 22.0));
    render_editor(&mut surface, &editor);

    assert_eq!(surface.pixel(21, 11), Some((255, 0, 0, 255)));
    assert_eq!(surface.pixel(1, 11), Some((0, 0, 0, 255)));
    assert!(surface.encode_png().is_some());
}

#[test]
fn test_draft_circle_is_drawn_while_dragging() {
    let mut editor = ShapeEditor::new(ShapeKind::Circle, page());
    editor.focus();
    editor.pointer_down(50.0, 50.0, PointerButton::Primary);
    editor.pointer_move(60.0, 50.0);

    let mut surface = PixmapSurface::for_editor(&editor).unwrap();
    assert_eq!(surface.physical_size(), (200.0, 100.0));
    render_editor(&mut surface, &editor);

    let (_, _, _, ring) = surface.pixel(60, 50).unwrap();
    assert!(ring > 0);
    // Default fill is fully transparent.
    assert_eq!(surface.pixel(50, 50).map(|p| p.3), Some(0));
}

#[test]
fn test_zero_sized_surface_is_rejected() {
    assert_eq!(
        PixmapSurface::new(0, 10).err(),
        Some(RenderError::InvalidSurfaceSize {
            width: 0,
            height: 10
        })
    );
}

#[derive(Default)]
struct CallLog(Vec<String>);

impl RenderSurface for CallLog {
    fn physical_size(&self) -> (f64, f64) {
        (100.0, 50.0)
    }

    fn set_transform(&mut self, m: [f64; 6]) {
        self.0.push(format!("transform {m:?}"));
    }

    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.0.push(format!("clear {x} {y} {width} {height}"));
    }

    fn stroke_rect(&mut self, x: f64, y: f64, w: f64, h: f64, _ink: Ink, lw: f64) {
        self.0.push(format!("stroke_rect {x} {y} {w} {h} {lw}"));
    }

    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64, _ink: Ink) {
        self.0.push(format!("fill_rect {x} {y} {w} {h}"));
    }

    fn stroke_circle(&mut self, _cx: f64, _cy: f64, _r: f64, _ink: Ink, _lw: f64) {
        self.0.push("stroke_circle".into());
    }

    fn fill_circle(&mut self, _cx: f64, _cy: f64, _r: f64, _ink: Ink) {
        self.0.push("fill_circle".into());
    }
}

#[test]
fn test_render_clears_then_draws_upward_drag() {
    let mut editor = ShapeEditor::new(ShapeKind::Rectangle, page());
    editor.focus();
    editor.pointer_down(10.0, 40.0, PointerButton::Primary);
    editor.pointer_move(30.0, 20.0);

    let mut log = CallLog::default();
    render_editor(&mut log, &editor);
    assert_eq!(
        log.0,
        vec![
            "transform [1.0, 0.0, 0.0, 1.0, 0.0, 0.0]",
            "clear 0 0 100 50",
            "transform [1.0, 0.0, 0.0, 1.0, 0.0, 0.0]",
            "stroke_rect 10 40 20 -20 1",
            "fill_rect 10.5 39.5 19 -19",
        ]
    );
}
