//! Pointer-driven drawing.
//!
//! ```text
//! Idle --focus--> Armed --pointer_down--> Drawing --pointer_up/leave--> Armed
//! Armed --commit--> Committed
//! Armed --commit, no shapes--> discarded
//! ```
//!
//! Events that do not fit the current state, non-primary buttons and any
//! input on a locked or discarded editor are ignored.

use annokit_core::Point;
use annokit_settings::style_defaults;

use super::ShapeEditor;
use crate::commands::EditCommand;
use crate::events::EditorEvent;
use crate::model::ShapeRecord;

/// Gesture state of an editor.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DrawingState {
    #[default]
    Idle,
    /// Focused and waiting for a press.
    Armed,
    /// Button held. Points are in local space.
    Drawing { start: Point, current: Point },
    /// Locked; no further drawing.
    Committed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    Primary,
    Middle,
    Secondary,
}

impl ShapeEditor {
    fn accepts_input(&self) -> bool {
        !self.state.is_locked && !self.discarded
    }

    /// The editor received focus and is ready to draw.
    pub fn focus(&mut self) -> Vec<EditorEvent> {
        if self.accepts_input() && self.drawing == DrawingState::Idle {
            self.drawing = DrawingState::Armed;
        }
        Vec::new()
    }

    /// Starts a drag at surface pixel `(x, y)`.
    pub fn pointer_down(&mut self, x: f64, y: f64, button: PointerButton) -> Vec<EditorEvent> {
        if button != PointerButton::Primary || !self.accepts_input() {
            tracing::trace!(editor = %self.id, ?button, "Ignored pointer down");
            return Vec::new();
        }
        if !matches!(self.drawing, DrawingState::Idle | DrawingState::Armed) {
            return Vec::new();
        }

        if !self.surface_initialized {
            self.surface_initialized = true;
            self.real_size = Some(self.surface.rounded());
        }
        if self.state.style.is_none() {
            let style = style_defaults(self.kind);
            tracing::debug!(editor = %self.id, thickness = style.thickness, "Snapshotted style defaults");
            self.state.style = Some(style);
        }

        let start = self.surface_transform().to_local(Point::new(x, y));
        self.drawing = DrawingState::Drawing {
            start,
            current: start,
        };
        self.state.current_draft = Some(ShapeRecord::derive(self.kind, start, start));
        self.redraw_pending = false;
        tracing::debug!(editor = %self.id, x = start.x, y = start.y, "Started drawing");
        Vec::new()
    }

    /// Updates the draft. Geometry changes on every call; at most one redraw
    /// request is outstanding until [`ShapeEditor::animation_frame`] runs.
    pub fn pointer_move(&mut self, x: f64, y: f64) -> Vec<EditorEvent> {
        if !self.accepts_input() {
            return Vec::new();
        }
        let DrawingState::Drawing { start, current } = self.drawing else {
            return Vec::new();
        };
        let point = self.surface_transform().to_local(Point::new(x, y));
        if point == current {
            return Vec::new();
        }

        self.drawing = DrawingState::Drawing {
            start,
            current: point,
        };
        self.state.current_draft = Some(ShapeRecord::derive(self.kind, start, point));

        if self.redraw_pending {
            Vec::new()
        } else {
            self.redraw_pending = true;
            vec![EditorEvent::RequestRedraw]
        }
    }

    /// Called by the host once per animation frame. Returns whether the
    /// surface has to be rendered now.
    pub fn animation_frame(&mut self) -> bool {
        std::mem::take(&mut self.redraw_pending)
    }

    /// Releases the button at `(x, y)` and emits the command committing the
    /// drawn shape.
    pub fn pointer_up(&mut self, x: f64, y: f64) -> Vec<EditorEvent> {
        self.finish_drawing(x, y)
    }

    /// The pointer left the surface mid-drag. Finishes the shape exactly like
    /// [`ShapeEditor::pointer_up`].
    pub fn pointer_leave(&mut self, x: f64, y: f64) -> Vec<EditorEvent> {
        self.finish_drawing(x, y)
    }

    fn finish_drawing(&mut self, x: f64, y: f64) -> Vec<EditorEvent> {
        if !self.accepts_input() {
            return Vec::new();
        }
        let DrawingState::Drawing { start, .. } = self.drawing else {
            return Vec::new();
        };

        let x = x.clamp(0.0, self.surface.width.max(0.0));
        let y = y.clamp(0.0, self.surface.height.max(0.0));
        let end = self.surface_transform().to_local(Point::new(x, y));
        let shape = ShapeRecord::derive(self.kind, start, end);

        self.drawing = DrawingState::Armed;
        self.state.current_draft = None;
        self.redraw_pending = false;

        tracing::info!(editor = %self.id, kind = %self.kind, "Finished drawing shape");
        vec![EditorEvent::Command(EditCommand::append_shape(self.id, shape))]
    }

    /// Locks the editor once the user is done annotating. An editor that
    /// never got a shape is discarded instead.
    pub fn commit(&mut self) -> Vec<EditorEvent> {
        if !self.accepts_input() || self.drawing != DrawingState::Armed {
            tracing::trace!(editor = %self.id, state = ?self.drawing, "Ignored commit");
            return Vec::new();
        }
        if self.is_empty() {
            self.discard();
            tracing::debug!(editor = %self.id, "Committed without shapes, discarding editor");
            return vec![EditorEvent::Removed];
        }

        self.drawing = DrawingState::Committed;
        self.state.is_locked = true;
        tracing::info!(editor = %self.id, shapes = self.state.shapes.len(), "Committed editor");

        let mut events = vec![EditorEvent::Committed];
        events.extend(self.fit_to_content(true));
        events.push(EditorEvent::Restack);
        events
    }
}
