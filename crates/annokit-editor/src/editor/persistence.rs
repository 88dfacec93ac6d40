use annokit_core::CodecError;

use super::{DrawingState, ShapeEditor};
use crate::codec::{self, AnnotationRecord, Placement, SerializeParams};
use crate::page::PageInfo;

impl ShapeEditor {
    /// Where this editor's local space sits on its page.
    pub fn placement(&self) -> Placement {
        Placement {
            scale: self.state.scale_factor / self.page.scale,
            translation: self.state.translation,
            origin: self.position,
        }
    }

    /// One record per shape. An empty editor yields no records.
    pub fn serialize(&self) -> Result<Vec<AnnotationRecord>, CodecError> {
        if self.is_empty() {
            return Ok(Vec::new());
        }
        let params = SerializeParams {
            placement: self.placement(),
            rect: self.page.rect,
            rotation: self.page.rotation.degrees(),
            page_index: self.page.index,
        };
        codec::serialize(&self.state.shapes, &self.style(), &params).inspect_err(|err| {
            tracing::warn!(editor = %self.id, error = %err, "Failed to serialize editor");
        })
    }

    /// Rebuilds a locked editor holding the shape of `record`. The editor
    /// spans the page until [`ShapeEditor::rebuild`] fits it to the shape.
    pub fn deserialize(record: &AnnotationRecord, page: PageInfo) -> Result<Self, CodecError> {
        let decoded = codec::deserialize(record, &Placement::unplaced(page.scale))
            .inspect_err(|err| tracing::warn!(error = %err, "Failed to decode annotation record"))?;

        let mut editor = ShapeEditor::new(decoded.kind, page);
        editor.state.shapes.push(decoded.shape);
        editor.state.style = Some(decoded.style);
        editor.state.is_locked = true;
        editor.drawing = DrawingState::Committed;
        editor.surface_initialized = true;
        editor.real_size = Some(editor.surface.rounded());
        Ok(editor)
    }
}
