//! What an editor knows about the page it annotates.

use annokit_core::{PageRect, PageRotation, Point};

/// Page geometry supplied by the hosting viewer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageInfo {
    /// Zero-based page number.
    pub index: u32,
    /// Page box in document space; the reference rect of all transforms.
    pub rect: PageRect,
    pub rotation: PageRotation,
    /// Rendered pixels per page unit.
    pub scale: f64,
}

impl PageInfo {
    pub fn new(index: u32, rect: PageRect, rotation: PageRotation, scale: f64) -> Self {
        debug_assert!(
            scale.is_finite() && scale > 0.0,
            "page scale must be positive and finite, got {scale}"
        );
        Self {
            index,
            rect,
            rotation,
            scale,
        }
    }

    /// Page size as displayed, in page units. Quarter turns swap the sides.
    pub fn view_size(&self) -> (f64, f64) {
        let (w, h) = (self.rect.width(), self.rect.height());
        if self.rotation.is_transposed() {
            (h, w)
        } else {
            (w, h)
        }
    }

    /// Page size as displayed, in pixels.
    pub fn pixel_size(&self) -> (f64, f64) {
        let (w, h) = self.view_size();
        (w * self.scale, h * self.scale)
    }

    /// Page-view point to `[0, 1]` page fractions.
    pub fn normalize(&self, view: Point) -> Point {
        let (w, h) = self.view_size();
        Point::new(view.x / w, view.y / h)
    }
}
