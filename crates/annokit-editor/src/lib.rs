//! # Annokit Editor
//!
//! Circle and rectangle annotation editors for a paginated document viewer.
//!
//! The crate is the host-independent core of the editors:
//! - shape geometry derived from drag endpoints, with stroke-aware bounds
//! - transforms between pointer, local, page-view and document space,
//!   including the four page rotations
//! - the pointer-driven drawing state machine
//! - fitting the editor surface to its content and rescaling on resize
//! - reversible commands for an external undo manager
//! - the annotation record codec
//!
//! Rendering, input delivery and undo management belong to the host. The
//! editor talks to it only through the [`EditorEvent`]s its handlers return.

pub mod codec;
pub mod commands;
pub mod editor;
pub mod events;
pub mod history;
pub mod model;
pub mod page;
pub mod render;
pub mod transform;

pub use codec::{AnnotationRecord, DecodedRecord, Placement, SerializeParams};
pub use commands::{CommandTarget, EditCommand, Mutation};
pub use editor::{
    DrawingState, EditorState, Fit, FitInput, PointerButton, Property, PropertyValue, ShapeEditor,
    SurfaceSize,
};
pub use events::{dispatch_events, EditorEvent, EditorHooks};
pub use history::CommandHistory;
pub use model::{
    bounding_box, derive_circle, derive_rectangle, is_empty, AnnotationShape, Bounds, CircleShape,
    RectShape, ShapeRecord,
};
pub use page::PageInfo;
pub use render::{render_editor, Ink, PixmapSurface, RenderError, RenderSurface};
pub use transform::{
    to_document_space, to_document_space_degrees, to_local_space, to_local_space_degrees,
    SurfaceTransform,
};
