use annokit_core::{PageRect, PageRotation, ParamKind, Rgb, ShapeKind, StyleParam};
use annokit_editor::{
    dispatch_events, CommandHistory, EditCommand, EditorEvent, EditorHooks, PageInfo,
    PointerButton, PropertyValue, ShapeEditor,
};
use annokit_settings::EditorConfig;
use uuid::Uuid;

fn editor() -> ShapeEditor {
    let page = PageInfo::new(0, PageRect::from_size(200.0, 200.0), PageRotation::Deg0, 1.0);
    ShapeEditor::new(ShapeKind::Circle, page)
}

#[test]
fn test_same_param_updates_merge_into_one_step() {
    let mut editor = editor();
    let mut history = CommandHistory::default();
    let original = editor.style().thickness;

    history.add(editor.update_style(StyleParam::Thickness(2.0)), &mut editor);
    history.add(editor.update_style(StyleParam::Thickness(3.0)), &mut editor);
    assert_eq!(history.undo_depth(), 1);
    assert_eq!(editor.style().thickness, 3.0);

    history.undo(&mut editor);
    assert_eq!(editor.style().thickness, original);
    assert!(!history.can_undo());

    history.redo(&mut editor);
    assert_eq!(editor.style().thickness, 3.0);
}

#[test]
fn test_different_params_stay_separate() {
    let mut editor = editor();
    let mut history = CommandHistory::default();

    history.add(editor.update_style(StyleParam::Thickness(2.0)), &mut editor);
    history.add(
        editor.update_style(StyleParam::FillColor(Rgb::new(255, 0, 0))),
        &mut editor,
    );
    history.add(editor.update_style(StyleParam::Thickness(4.0)), &mut editor);
    assert_eq!(history.undo_depth(), 3);

    history.undo(&mut editor);
    assert_eq!(editor.style().thickness, 2.0);
    assert_eq!(editor.style().fill_color, Rgb::new(255, 0, 0));
}

#[test]
fn test_new_command_clears_redo() {
    let mut editor = editor();
    let mut history = CommandHistory::default();

    history.add(editor.update_style(StyleParam::FillOpacity(0.5)), &mut editor);
    history.undo(&mut editor);
    assert!(history.can_redo());

    history.add(editor.update_style(StyleParam::StrokeOpacity(0.2)), &mut editor);
    assert!(!history.can_redo());
    assert_eq!(history.len(), 1);
}

#[test]
fn test_capacity_drops_oldest() {
    let mut editor = editor();
    let mut history = CommandHistory::new(2);
    for param in [
        StyleParam::Thickness(2.0),
        StyleParam::FillOpacity(0.3),
        StyleParam::StrokeOpacity(0.4),
    ] {
        history.add(editor.update_style(param), &mut editor);
    }
    assert_eq!(history.undo_depth(), 2);
    history.undo(&mut editor);
    history.undo(&mut editor);
    assert!(history.undo(&mut editor).is_empty());
    // The thickness step fell off the stack.
    assert_eq!(editor.style().thickness, 2.0);
}

#[test]
fn test_deferred_command_is_not_run_on_add() {
    let mut editor = editor();
    let mut history = CommandHistory::default();
    let mut cmd = editor.update_style(StyleParam::Thickness(9.0));
    cmd.must_apply_immediately = false;

    assert!(history.add(cmd, &mut editor).is_empty());
    assert_ne!(editor.style().thickness, 9.0);
    history.undo(&mut editor);
    history.redo(&mut editor);
    assert_eq!(editor.style().thickness, 9.0);
}

#[test]
fn test_commands_for_other_editors_do_not_merge() {
    let a = EditCommand::set_style(
        Uuid::new_v4(),
        StyleParam::Thickness(2.0),
        StyleParam::Thickness(1.0),
    );
    let b = EditCommand::set_style(
        Uuid::new_v4(),
        StyleParam::Thickness(3.0),
        StyleParam::Thickness(2.0),
    );
    assert!(!a.can_merge_with(&b));
}

#[derive(Default)]
struct Recorder {
    calls: Vec<String>,
    commands: Vec<EditCommand>,
}

impl EditorHooks for Recorder {
    fn on_commit(&mut self, _editor: Uuid) {
        self.calls.push("commit".into());
    }

    fn on_request_redraw(&mut self, _editor: Uuid) {
        self.calls.push("redraw".into());
    }

    fn on_request_resize(&mut self, _editor: Uuid, width: f64, height: f64) {
        self.calls.push(format!("resize {width}x{height}"));
    }

    fn on_restack(&mut self, _editor: Uuid) {
        self.calls.push("restack".into());
    }

    fn on_command(&mut self, _editor: Uuid, command: EditCommand) {
        self.calls.push("command".into());
        self.commands.push(command);
    }
}

#[test]
fn test_hooks_receive_events_in_order() {
    let mut editor = editor();
    let mut history = CommandHistory::default();
    let mut hooks = Recorder::default();
    let id = editor.id();

    editor.focus();
    editor.pointer_down(100.0, 100.0, PointerButton::Primary);
    dispatch_events(&mut hooks, id, editor.pointer_move(110.0, 100.0));
    dispatch_events(&mut hooks, id, editor.pointer_up(110.0, 100.0));
    assert_eq!(hooks.calls, vec!["redraw", "command"]);

    for cmd in std::mem::take(&mut hooks.commands) {
        let events = history.add(cmd, &mut editor);
        dispatch_events(&mut hooks, id, events);
    }
    hooks.calls.clear();

    dispatch_events(&mut hooks, id, editor.commit());
    assert_eq!(hooks.calls.first().map(String::as_str), Some("commit"));
    assert_eq!(hooks.calls.last().map(String::as_str), Some("restack"));
    assert!(hooks.calls.iter().any(|c| c.starts_with("resize")));
}

#[test]
fn test_unhandled_events_are_dropped() {
    let mut hooks = Recorder::default();
    dispatch_events(
        &mut hooks,
        Uuid::nil(),
        vec![
            EditorEvent::Moved { dx: 1.0, dy: 2.0 },
            EditorEvent::Removed,
            EditorEvent::RequestRedraw,
        ],
    );
    assert_eq!(hooks.calls, vec!["redraw"]);
}

#[test]
fn test_history_limit_from_config() {
    let config = EditorConfig {
        history_limit: 3,
        ..EditorConfig::default()
    };
    let history = CommandHistory::from_config(&config);
    assert_eq!(history.capacity(), 3);
    assert!(history.is_empty());
}

#[test]
fn test_properties_report_opacity_as_percent() {
    let props = ShapeEditor::default_properties(ShapeKind::Rectangle);
    let stroke_opacity = props
        .iter()
        .find(|p| p.param == ParamKind::StrokeOpacity)
        .map(|p| p.value);
    assert_eq!(stroke_opacity, Some(PropertyValue::Number(100.0)));

    let mut editor = editor();
    let mut history = CommandHistory::default();
    history.add(editor.update_style(StyleParam::FillOpacity(0.254)), &mut editor);
    let fill_opacity = editor
        .properties()
        .into_iter()
        .find(|p| p.param == ParamKind::FillOpacity)
        .map(|p| p.value);
    assert_eq!(fill_opacity, Some(PropertyValue::Number(25.0)));
    assert_eq!(editor.properties().len(), 5);
}
