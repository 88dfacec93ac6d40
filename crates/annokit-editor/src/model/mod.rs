//! Shape geometry.
//!
//! Every shape is derived from the two endpoints of a drag gesture. Shapes
//! live in the editor's local space and never carry style; stroke thickness
//! is supplied by the caller wherever it affects extents.

use annokit_core::{Point, ShapeKind};
use serde::{Deserialize, Serialize};

pub mod circle;
pub mod rectangle;

pub use circle::{derive_circle, CircleShape};
pub use rectangle::{derive_rectangle, RectShape};

/// Axis-aligned bounds `[min_x, min_y, max_x, max_y]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl Bounds {
    pub fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    /// Bounds spanning two arbitrary corners.
    pub fn from_corners(a: Point, b: Point) -> Self {
        Self::new(a.x.min(b.x), a.y.min(b.y), a.x.max(b.x), a.y.max(b.y))
    }

    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    pub fn min(&self) -> Point {
        Point::new(self.min_x, self.min_y)
    }

    /// Grows the bounds by `amount` on every side.
    pub fn expand(&self, amount: f64) -> Self {
        Self::new(
            self.min_x - amount,
            self.min_y - amount,
            self.max_x + amount,
            self.max_y + amount,
        )
    }

    pub fn union(&self, other: &Bounds) -> Self {
        Self::new(
            self.min_x.min(other.min_x),
            self.min_y.min(other.min_y),
            self.max_x.max(other.max_x),
            self.max_y.max(other.max_y),
        )
    }

    pub fn to_array(&self) -> [f64; 4] {
        [self.min_x, self.min_y, self.max_x, self.max_y]
    }
}

/// Common behaviour of drawn primitives.
pub trait AnnotationShape {
    /// Kind tag used in annotation records.
    fn kind(&self) -> ShapeKind;

    /// Bounds including half of `thickness` on each side.
    fn bounds(&self, thickness: f64) -> Bounds;

    /// The point where the drag started.
    fn anchor(&self) -> Point;

    /// Whether the shape has no extent.
    fn is_degenerate(&self) -> bool;
}

/// A committed or draft shape.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ShapeRecord {
    Circle(CircleShape),
    Rectangle(RectShape),
}

impl ShapeRecord {
    /// Builds the shape of `kind` spanned by a drag from `start` to `end`.
    pub fn derive(kind: ShapeKind, start: Point, end: Point) -> Self {
        match kind {
            ShapeKind::Circle => Self::Circle(derive_circle(start.x, start.y, end.x, end.y)),
            ShapeKind::Rectangle => {
                Self::Rectangle(derive_rectangle(start.x, start.y, end.x, end.y))
            }
        }
    }

    /// Geometric equality within `epsilon`. Circles compare center and
    /// radius, so two circles whose end points differ only in direction are
    /// equal.
    pub fn approx_eq(&self, other: &ShapeRecord, epsilon: f64) -> bool {
        match (self, other) {
            (Self::Circle(a), Self::Circle(b)) => {
                a.center().approx_eq(&b.center(), epsilon)
                    && (a.radius() - b.radius()).abs() <= epsilon
            }
            (Self::Rectangle(a), Self::Rectangle(b)) => {
                a.origin().approx_eq(&b.origin(), epsilon)
                    && (a.width - b.width).abs() <= epsilon
                    && (a.height - b.height).abs() <= epsilon
            }
            _ => false,
        }
    }
}

impl AnnotationShape for ShapeRecord {
    fn kind(&self) -> ShapeKind {
        match self {
            Self::Circle(c) => c.kind(),
            Self::Rectangle(r) => r.kind(),
        }
    }

    fn bounds(&self, thickness: f64) -> Bounds {
        match self {
            Self::Circle(c) => c.bounds(thickness),
            Self::Rectangle(r) => r.bounds(thickness),
        }
    }

    fn anchor(&self) -> Point {
        match self {
            Self::Circle(c) => c.anchor(),
            Self::Rectangle(r) => r.anchor(),
        }
    }

    fn is_degenerate(&self) -> bool {
        match self {
            Self::Circle(c) => c.is_degenerate(),
            Self::Rectangle(r) => r.is_degenerate(),
        }
    }
}

impl From<CircleShape> for ShapeRecord {
    fn from(circle: CircleShape) -> Self {
        Self::Circle(circle)
    }
}

impl From<RectShape> for ShapeRecord {
    fn from(rect: RectShape) -> Self {
        Self::Rectangle(rect)
    }
}

/// Bounds of all shapes, stroke included. `None` when there are no shapes;
/// check [`is_empty`] first.
pub fn bounding_box(shapes: &[ShapeRecord], thickness: f64) -> Option<Bounds> {
    shapes
        .iter()
        .map(|shape| shape.bounds(thickness))
        .reduce(|acc, b| acc.union(&b))
}

/// True iff there are no shapes. A single zero-size shape is not empty.
pub fn is_empty(shapes: &[ShapeRecord]) -> bool {
    shapes.is_empty()
}
