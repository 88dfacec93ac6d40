//! Notifications an editor hands back to its host.
//!
//! Editor handlers never call into the host. They return the list of things
//! the host should do, and [`dispatch_events`] routes them to an
//! [`EditorHooks`] implementation.

use uuid::Uuid;

use crate::commands::EditCommand;

#[derive(Debug, Clone, PartialEq)]
pub enum EditorEvent {
    /// The surface content is stale; render on the next frame.
    RequestRedraw,
    /// Resize the host surface, in pixels.
    RequestResize { width: f64, height: f64 },
    /// Move the editor on the page by this many page units.
    Moved { dx: f64, dy: f64 },
    /// Editing finished; the editor is locked.
    Committed,
    /// Place this editor above its siblings of the same kind.
    Restack,
    /// The editor lost its last shape and should be detached.
    Removed,
    /// A discarded editor got a shape back and should be attached again.
    Restored,
    /// Submit this command to the undo manager.
    Command(EditCommand),
}

/// Host side of an editor. Every method defaults to doing nothing.
#[allow(unused_variables)]
pub trait EditorHooks {
    fn on_commit(&mut self, editor: Uuid) {}
    fn on_request_redraw(&mut self, editor: Uuid) {}
    fn on_request_resize(&mut self, editor: Uuid, width: f64, height: f64) {}
    fn on_moved(&mut self, editor: Uuid, dx: f64, dy: f64) {}
    fn on_restack(&mut self, editor: Uuid) {}
    fn on_removed(&mut self, editor: Uuid) {}
    fn on_restored(&mut self, editor: Uuid) {}
    fn on_command(&mut self, editor: Uuid, command: EditCommand) {}
}

/// Delivers `events` to `hooks` in order.
pub fn dispatch_events<H: EditorHooks + ?Sized>(
    hooks: &mut H,
    editor: Uuid,
    events: Vec<EditorEvent>,
) {
    for event in events {
        match event {
            EditorEvent::RequestRedraw => hooks.on_request_redraw(editor),
            EditorEvent::RequestResize { width, height } => {
                hooks.on_request_resize(editor, width, height)
            }
            EditorEvent::Moved { dx, dy } => hooks.on_moved(editor, dx, dy),
            EditorEvent::Committed => hooks.on_commit(editor),
            EditorEvent::Restack => hooks.on_restack(editor),
            EditorEvent::Removed => hooks.on_removed(editor),
            EditorEvent::Restored => hooks.on_restored(editor),
            EditorEvent::Command(command) => hooks.on_command(editor, command),
        }
    }
}
