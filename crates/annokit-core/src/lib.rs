//! # Annokit Core
//!
//! Core types, constants and the error taxonomy shared by the annokit
//! crates. Provides the vocabulary the shape editors, the settings layer and
//! the annotation codec agree on: points, reference rects, page rotations,
//! colours and stroke/fill styles.

pub mod color;
pub mod constants;
pub mod data;
pub mod error;
pub mod rotation;
pub mod style;

pub use color::Rgb;
pub use data::{PageRect, Point, ShapeKind};
pub use error::{CodecError, ColorError, Error, Result, TransformError};
pub use rotation::PageRotation;
pub use style::{ParamKind, ShapeStyle, StyleParam};
