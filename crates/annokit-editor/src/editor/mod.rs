//! Shape editor state.
//!
//! A `ShapeEditor` owns the shapes drawn on one region of one page, all
//! sharing a single style. It is driven by plain pointer and resize
//! notifications and answers each with the [`EditorEvent`]s the host has to
//! act on. The implementation is split into submodules:
//! - `drawing`: pointer state machine and commit
//! - `fit`: fit-to-content and surface resize handling
//! - `style`: undoable style updates and the property panel view
//! - `persistence`: annotation record import/export

mod drawing;
mod fit;
mod persistence;
mod style;

pub use drawing::{DrawingState, PointerButton};
pub use fit::{compute_fit, padding_for, Fit, FitInput};
pub use style::{Property, PropertyValue};

use annokit_core::constants::MIN_SIZE;
use annokit_core::{Point, ShapeKind, ShapeStyle};
use annokit_settings::{style_defaults, EditorConfig};
use uuid::Uuid;

use crate::commands::{CommandTarget, Mutation};
use crate::events::EditorEvent;
use crate::model::ShapeRecord;
use crate::page::PageInfo;
use crate::transform::SurfaceTransform;

/// Model state of an editor.
#[derive(Debug, Clone, PartialEq)]
pub struct EditorState {
    /// Committed shapes, oldest first. The last one is drawn on top.
    pub shapes: Vec<ShapeRecord>,
    /// Shape under construction while the pointer is held.
    pub current_draft: Option<ShapeRecord>,
    /// `None` until the first draw or style change snapshots the defaults.
    pub style: Option<ShapeStyle>,
    pub scale_factor: f64,
    pub translation: Point,
    pub is_locked: bool,
}

impl Default for EditorState {
    fn default() -> Self {
        Self {
            shapes: Vec::new(),
            current_draft: None,
            style: None,
            scale_factor: 1.0,
            translation: Point::ORIGIN,
            is_locked: false,
        }
    }
}

/// Size of the host drawing surface, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SurfaceSize {
    pub width: f64,
    pub height: f64,
}

impl SurfaceSize {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    fn rounded(&self) -> (i64, i64) {
        (self.width.round() as i64, self.height.round() as i64)
    }
}

/// A circle or rectangle editor attached to one page.
#[derive(Debug, Clone)]
pub struct ShapeEditor {
    id: Uuid,
    kind: ShapeKind,
    page: PageInfo,
    state: EditorState,
    drawing: DrawingState,
    min_size: f64,
    /// Top-left corner on the page, in page-view units.
    position: Point,
    surface: SurfaceSize,
    /// Content extent of the last fit, in local units.
    base_size: (f64, f64),
    /// Last surface size applied, rounded to whole pixels.
    real_size: Option<(i64, i64)>,
    surface_initialized: bool,
    discarded: bool,
    redraw_pending: bool,
}

impl ShapeEditor {
    /// Creates an empty editor covering the whole page.
    pub fn new(kind: ShapeKind, page: PageInfo) -> Self {
        let (width, height) = page.pixel_size();
        let editor = Self {
            id: Uuid::new_v4(),
            kind,
            page,
            state: EditorState::default(),
            drawing: DrawingState::Idle,
            min_size: MIN_SIZE,
            position: Point::ORIGIN,
            surface: SurfaceSize::new(width, height),
            base_size: (0.0, 0.0),
            real_size: None,
            surface_initialized: false,
            discarded: false,
            redraw_pending: false,
        };
        tracing::debug!(editor = %editor.id, %kind, page = page.index, "Created shape editor");
        editor
    }

    /// Creates an empty editor using the sizing from `config`.
    pub fn with_config(kind: ShapeKind, page: PageInfo, config: &EditorConfig) -> Self {
        let mut editor = Self::new(kind, page);
        editor.min_size = config.min_size;
        editor
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    pub fn page(&self) -> &PageInfo {
        &self.page
    }

    pub fn state(&self) -> &EditorState {
        &self.state
    }

    pub fn shapes(&self) -> &[ShapeRecord] {
        &self.state.shapes
    }

    pub fn drawing_state(&self) -> DrawingState {
        self.drawing
    }

    pub fn is_empty(&self) -> bool {
        crate::model::is_empty(&self.state.shapes)
    }

    pub fn is_locked(&self) -> bool {
        self.state.is_locked
    }

    /// True once undo removed the last shape or the editor was committed
    /// without any. A discarded editor ignores pointer input until a redo
    /// gives it a shape back.
    pub fn is_discarded(&self) -> bool {
        self.discarded
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn surface_size(&self) -> SurfaceSize {
        self.surface
    }

    /// Editor box as `[x, y, width, height]` fractions of the page view.
    pub fn normalized_rect(&self) -> [f64; 4] {
        let origin = self.page.normalize(self.position);
        let extent = self.page.normalize(Point::new(
            self.surface.width / self.page.scale,
            self.surface.height / self.page.scale,
        ));
        [origin.x, origin.y, extent.x, extent.y]
    }

    /// The style in effect: the editor's own once it has one, otherwise the
    /// current defaults for its kind.
    pub fn style(&self) -> ShapeStyle {
        self.state
            .style
            .unwrap_or_else(|| style_defaults(self.kind))
    }

    /// Total padding reserved around the content, in pixels. Only locked
    /// editors reserve room for the stroke.
    pub fn padding(&self) -> f64 {
        padding_for(self.style().thickness, self.page.scale, self.state.is_locked)
    }

    /// Stroke width in local units.
    pub fn line_width(&self) -> f64 {
        self.style().thickness * self.page.scale / self.state.scale_factor
    }

    pub fn surface_transform(&self) -> SurfaceTransform {
        SurfaceTransform::new(
            self.state.scale_factor,
            self.state.translation,
            self.padding(),
        )
    }

    /// Changes the page zoom. The host reports the resulting surface size
    /// through [`ShapeEditor::on_surface_resized`].
    pub fn set_page_scale(&mut self, scale: f64) -> Vec<EditorEvent> {
        debug_assert!(
            scale.is_finite() && scale > 0.0,
            "page scale must be positive and finite, got {scale}"
        );
        self.page.scale = scale;
        vec![EditorEvent::RequestRedraw]
    }

    /// Drops any gesture in progress and stops accepting input.
    fn discard(&mut self) {
        self.discarded = true;
        self.drawing = DrawingState::Idle;
        self.state.current_draft = None;
        self.redraw_pending = false;
    }

    fn apply_mutation(&mut self, mutation: &Mutation) -> Vec<EditorEvent> {
        let mut events = Vec::new();
        match mutation {
            Mutation::AppendShape(shape) => {
                if self.discarded {
                    self.discarded = false;
                    tracing::debug!(editor = %self.id, "Restored discarded editor");
                    events.push(EditorEvent::Restored);
                }
                self.state.shapes.push(*shape);
                events.extend(self.fit_to_content(false));
            }
            Mutation::RemoveLastShape => {
                self.state.shapes.pop();
                if self.state.shapes.is_empty() {
                    self.discard();
                    tracing::debug!(editor = %self.id, "Last shape undone, discarding editor");
                    events.push(EditorEvent::Removed);
                } else {
                    events.extend(self.fit_to_content(false));
                }
            }
            Mutation::SetStyle(param) => {
                self.state.style = Some(self.style().with(*param));
                if param.kind().affects_geometry() {
                    events.extend(self.fit_to_content(false));
                } else {
                    events.push(EditorEvent::RequestRedraw);
                }
            }
        }
        events
    }
}

impl CommandTarget for ShapeEditor {
    fn apply(&mut self, mutation: &Mutation) -> Vec<EditorEvent> {
        self.apply_mutation(mutation)
    }
}
