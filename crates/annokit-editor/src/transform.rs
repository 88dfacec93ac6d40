//! Coordinate transforms between the editor's spaces.
//!
//! Four spaces are involved:
//!
//! - *pointer*: pixels of the editor's drawing surface, y down
//! - *local*: unscaled drawing units, `pointer = (local + t) * sf + padding / 2`
//! - *page view*: page units of the page as displayed (rotation applied), y down
//! - *document*: the unrotated page, origin bottom-left, y up
//!
//! The page view to document mapping depends on the page rotation and the
//! reference rect `[left, bottom, right, top]`:
//!
//! ```text
//! rotation   document (X, Y) from view (x, y)
//!   0        (x + left,  top - y)
//!  90        (y + left,  x + bottom)
//! 180        (right - x, y + bottom)
//! 270        (right - y, top - x)
//! ```
//!
//! Each mapping is affine with an exact inverse, so
//! `to_local_space(to_document_space(p))` returns `p` up to rounding.
//! Despite its name, `to_local_space` lands in page-view space; the codec
//! finishes the trip to editor-local units.

use annokit_core::{PageRect, PageRotation, Point, TransformError};

/// Maps one page-view point into document space.
pub fn point_to_document(p: Point, rect: &PageRect, rotation: PageRotation) -> Point {
    match rotation {
        PageRotation::Deg0 => Point::new(p.x + rect.left, rect.top - p.y),
        PageRotation::Deg90 => Point::new(p.y + rect.left, p.x + rect.bottom),
        PageRotation::Deg180 => Point::new(rect.right - p.x, p.y + rect.bottom),
        PageRotation::Deg270 => Point::new(rect.right - p.y, rect.top - p.x),
    }
}

/// Maps one document point back into page-view space.
pub fn point_to_local(p: Point, rect: &PageRect, rotation: PageRotation) -> Point {
    match rotation {
        PageRotation::Deg0 => Point::new(p.x - rect.left, rect.top - p.y),
        PageRotation::Deg90 => Point::new(p.y - rect.bottom, p.x - rect.left),
        PageRotation::Deg180 => Point::new(rect.right - p.x, p.y - rect.bottom),
        PageRotation::Deg270 => Point::new(rect.top - p.y, rect.right - p.x),
    }
}

fn map_flat(points: &[f64], f: impl Fn(Point) -> Point) -> Vec<f64> {
    debug_assert!(
        points.len() % 2 == 0,
        "flat point array must hold x/y pairs, got {} values",
        points.len()
    );
    points
        .chunks_exact(2)
        .flat_map(|xy| {
            let p = f(Point::new(xy[0], xy[1]));
            [p.x, p.y]
        })
        .collect()
}

/// Maps a flat `[x0, y0, x1, y1, ...]` array into document space.
pub fn to_document_space(points: &[f64], rect: &PageRect, rotation: PageRotation) -> Vec<f64> {
    map_flat(points, |p| point_to_document(p, rect, rotation))
}

/// Inverse of [`to_document_space`].
pub fn to_local_space(points: &[f64], rect: &PageRect, rotation: PageRotation) -> Vec<f64> {
    map_flat(points, |p| point_to_local(p, rect, rotation))
}

/// [`to_document_space`] with the rotation given in degrees.
pub fn to_document_space_degrees(
    points: &[f64],
    rect: &PageRect,
    degrees: i32,
) -> Result<Vec<f64>, TransformError> {
    let rotation = PageRotation::try_from(degrees)?;
    Ok(to_document_space(points, rect, rotation))
}

/// [`to_local_space`] with the rotation given in degrees.
pub fn to_local_space_degrees(
    points: &[f64],
    rect: &PageRect,
    degrees: i32,
) -> Result<Vec<f64>, TransformError> {
    let rotation = PageRotation::try_from(degrees)?;
    Ok(to_local_space(points, rect, rotation))
}

/// Circle into document space. Only the center moves; quarter turns keep
/// the radius.
pub fn circle_to_document(
    center: Point,
    radius: f64,
    rect: &PageRect,
    rotation: PageRotation,
) -> (Point, f64) {
    (point_to_document(center, rect, rotation), radius)
}

/// Inverse of [`circle_to_document`].
pub fn circle_to_local(
    center: Point,
    radius: f64,
    rect: &PageRect,
    rotation: PageRotation,
) -> (Point, f64) {
    (point_to_local(center, rect, rotation), radius)
}

/// Start and end point of a segment into document space.
pub fn segment_to_document(
    start: Point,
    end: Point,
    rect: &PageRect,
    rotation: PageRotation,
) -> (Point, Point) {
    (
        point_to_document(start, rect, rotation),
        point_to_document(end, rect, rotation),
    )
}

/// Inverse of [`segment_to_document`].
pub fn segment_to_local(
    start: Point,
    end: Point,
    rect: &PageRect,
    rotation: PageRotation,
) -> (Point, Point) {
    (
        point_to_local(start, rect, rotation),
        point_to_local(end, rect, rotation),
    )
}

/// Mapping between pointer space and local space of one editor surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceTransform {
    pub scale_factor: f64,
    pub translation: Point,
    /// Total padding in pixels; half of it sits on each side.
    pub padding: f64,
}

impl SurfaceTransform {
    pub fn new(scale_factor: f64, translation: Point, padding: f64) -> Self {
        Self {
            scale_factor,
            translation,
            padding,
        }
    }

    pub fn to_pointer(&self, local: Point) -> Point {
        let half = self.padding / 2.0;
        Point::new(
            (local.x + self.translation.x) * self.scale_factor + half,
            (local.y + self.translation.y) * self.scale_factor + half,
        )
    }

    pub fn to_local(&self, pointer: Point) -> Point {
        let half = self.padding / 2.0;
        Point::new(
            (pointer.x - half) / self.scale_factor - self.translation.x,
            (pointer.y - half) / self.scale_factor - self.translation.y,
        )
    }

    /// The 2D context matrix `(a, b, c, d, e, f)` drawing local coordinates
    /// onto the surface.
    pub fn matrix(&self) -> [f64; 6] {
        let half = self.padding / 2.0;
        [
            self.scale_factor,
            0.0,
            0.0,
            self.scale_factor,
            self.translation.x * self.scale_factor + half,
            self.translation.y * self.scale_factor + half,
        ]
    }
}
