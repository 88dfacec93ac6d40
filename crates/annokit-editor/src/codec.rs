//! Annotation record codec.
//!
//! One record is written per shape. Geometry goes through
//!
//! ```text
//! view     = origin + scale * (local + translation) + thickness / 2
//! document = rotation mapping of view against the page rect
//! ```
//!
//! where `scale` converts local units to page units. Circles store
//! `[center_x, center_y, radius]` and only their center takes the point
//! mapping; rectangles store both corners `[sx, sy, ex, ey]` so the
//! point-wise rotation applies to them uniformly. Thickness, colours and
//! opacities are copied unscaled.

use annokit_core::{CodecError, PageRect, PageRotation, Point, Rgb, ShapeKind, ShapeStyle};
use serde::{Deserialize, Serialize};

use crate::model::{AnnotationShape, CircleShape, RectShape, ShapeRecord};
use crate::transform::{circle_to_document, circle_to_local, segment_to_document, segment_to_local};

/// The persisted form of one shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnnotationRecord {
    pub kind: ShapeKind,
    pub stroke_color_hex: Rgb,
    pub stroke_thickness: f64,
    /// Stroke opacity in `[0, 1]`.
    pub opacity: f64,
    pub fill_color_hex: Rgb,
    pub fill_opacity: f64,
    pub points: Vec<f64>,
    pub page_rect: PageRect,
    /// Kept as raw degrees so records with an illegal rotation still load
    /// and fail in the codec rather than in the JSON layer.
    pub page_rotation: i32,
    pub page_index: u32,
}

impl AnnotationRecord {
    pub fn style(&self) -> ShapeStyle {
        ShapeStyle {
            stroke_color: self.stroke_color_hex,
            stroke_opacity: self.opacity,
            thickness: self.stroke_thickness,
            fill_color: self.fill_color_hex,
            fill_opacity: self.fill_opacity,
        }
    }
}

/// Where the editor's local space sits on the page.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    /// Page units per local unit.
    pub scale: f64,
    pub translation: Point,
    /// Editor origin in page-view units.
    pub origin: Point,
}

impl Placement {
    /// Placement of an editor spanning the whole page with no scaling of its
    /// own, local units being pixels at `page_scale`.
    pub fn unplaced(page_scale: f64) -> Self {
        Self {
            scale: 1.0 / page_scale,
            translation: Point::ORIGIN,
            origin: Point::ORIGIN,
        }
    }

    fn to_view(&self, local: Point, pad: f64) -> Point {
        Point::new(
            self.origin.x + self.scale * (local.x + self.translation.x) + pad,
            self.origin.y + self.scale * (local.y + self.translation.y) + pad,
        )
    }

    fn to_local(&self, view: Point, pad: f64) -> Point {
        Point::new(
            (view.x - pad - self.origin.x) / self.scale - self.translation.x,
            (view.y - pad - self.origin.y) / self.scale - self.translation.y,
        )
    }
}

/// Everything besides shapes and style that goes into a record.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SerializeParams {
    pub placement: Placement,
    pub rect: PageRect,
    /// Degrees; anything but 0, 90, 180 or 270 fails the call.
    pub rotation: i32,
    pub page_index: u32,
}

/// A record turned back into editor-local geometry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DecodedRecord {
    pub kind: ShapeKind,
    pub shape: ShapeRecord,
    pub style: ShapeStyle,
    pub rect: PageRect,
    pub rotation: PageRotation,
    pub page_index: u32,
}

/// Encodes `shapes` into one record each.
///
/// The rotation is checked before any shape is touched, so a failure never
/// yields partial output.
pub fn serialize(
    shapes: &[ShapeRecord],
    style: &ShapeStyle,
    params: &SerializeParams,
) -> Result<Vec<AnnotationRecord>, CodecError> {
    let rotation = PageRotation::try_from(params.rotation)?;
    let pad = style.thickness / 2.0;
    let placement = &params.placement;

    let records = shapes
        .iter()
        .map(|shape| {
            let points = match shape {
                ShapeRecord::Circle(circle) => {
                    let center = placement.to_view(circle.center(), pad);
                    let radius = circle.radius() * placement.scale;
                    let (center, radius) =
                        circle_to_document(center, radius, &params.rect, rotation);
                    vec![center.x, center.y, radius]
                }
                ShapeRecord::Rectangle(rect) => {
                    let start = placement.to_view(rect.origin(), pad);
                    let end = placement.to_view(rect.end(), pad);
                    let (start, end) = segment_to_document(start, end, &params.rect, rotation);
                    vec![start.x, start.y, end.x, end.y]
                }
            };
            AnnotationRecord {
                kind: shape.kind(),
                stroke_color_hex: style.stroke_color,
                stroke_thickness: style.thickness,
                opacity: style.stroke_opacity,
                fill_color_hex: style.fill_color,
                fill_opacity: style.fill_opacity,
                points,
                page_rect: params.rect,
                page_rotation: rotation.degrees(),
                page_index: params.page_index,
            }
        })
        .collect();
    Ok(records)
}

fn expected_points(kind: ShapeKind) -> usize {
    match kind {
        ShapeKind::Circle => 3,
        ShapeKind::Rectangle => 4,
    }
}

fn validate(record: &AnnotationRecord) -> Result<PageRotation, CodecError> {
    let rotation = PageRotation::try_from(record.page_rotation)?;

    let expected = expected_points(record.kind);
    if record.points.len() != expected {
        return Err(CodecError::MalformedPoints {
            kind: record.kind.to_string(),
            expected,
            actual: record.points.len(),
        });
    }
    if !(record.stroke_thickness.is_finite() && record.stroke_thickness >= 0.0) {
        return Err(CodecError::InvalidThickness {
            value: record.stroke_thickness,
        });
    }
    for (field, value) in [("opacity", record.opacity), ("fillOpacity", record.fill_opacity)] {
        if !(0.0..=1.0).contains(&value) {
            return Err(CodecError::InvalidOpacity { field, value });
        }
    }
    Ok(rotation)
}

/// Decodes one record into local geometry under `placement`.
pub fn deserialize(
    record: &AnnotationRecord,
    placement: &Placement,
) -> Result<DecodedRecord, CodecError> {
    let rotation = validate(record)?;
    let pad = record.stroke_thickness / 2.0;
    let p = &record.points;

    let shape = match record.kind {
        ShapeKind::Circle => {
            let (center, radius) =
                circle_to_local(Point::new(p[0], p[1]), p[2], &record.page_rect, rotation);
            let center = placement.to_local(center, pad);
            ShapeRecord::Circle(CircleShape::from_center_radius(
                center,
                radius / placement.scale,
            ))
        }
        ShapeKind::Rectangle => {
            let (start, end) = segment_to_local(
                Point::new(p[0], p[1]),
                Point::new(p[2], p[3]),
                &record.page_rect,
                rotation,
            );
            ShapeRecord::Rectangle(RectShape::from_corners(
                placement.to_local(start, pad),
                placement.to_local(end, pad),
            ))
        }
    };

    Ok(DecodedRecord {
        kind: record.kind,
        shape,
        style: record.style(),
        rect: record.page_rect,
        rotation,
        page_index: record.page_index,
    })
}

/// Records as a JSON array.
pub fn records_to_json(records: &[AnnotationRecord]) -> Result<String, CodecError> {
    Ok(serde_json::to_string_pretty(records)?)
}

/// Parses a JSON array of records. Geometry is not validated until the
/// records are decoded.
pub fn records_from_json(json: &str) -> Result<Vec<AnnotationRecord>, CodecError> {
    Ok(serde_json::from_str(json)?)
}
