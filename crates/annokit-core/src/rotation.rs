//! Page rotation.
//!
//! Only quarter turns are legal. Anything else is rejected with
//! [`TransformError::InvalidRotation`] rather than rounded.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::TransformError;

/// Rotation of the page view relative to the document, clockwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub enum PageRotation {
    #[default]
    Deg0,
    Deg90,
    Deg180,
    Deg270,
}

impl PageRotation {
    pub const ALL: [PageRotation; 4] = [
        PageRotation::Deg0,
        PageRotation::Deg90,
        PageRotation::Deg180,
        PageRotation::Deg270,
    ];

    pub fn degrees(&self) -> i32 {
        match self {
            Self::Deg0 => 0,
            Self::Deg90 => 90,
            Self::Deg180 => 180,
            Self::Deg270 => 270,
        }
    }

    /// Whether the page view swaps width and height.
    pub fn is_transposed(&self) -> bool {
        matches!(self, Self::Deg90 | Self::Deg270)
    }
}

impl TryFrom<i32> for PageRotation {
    type Error = TransformError;

    fn try_from(degrees: i32) -> Result<Self, Self::Error> {
        match degrees {
            0 => Ok(Self::Deg0),
            90 => Ok(Self::Deg90),
            180 => Ok(Self::Deg180),
            270 => Ok(Self::Deg270),
            _ => Err(TransformError::InvalidRotation { degrees }),
        }
    }
}

impl From<PageRotation> for i32 {
    fn from(rotation: PageRotation) -> Self {
        rotation.degrees()
    }
}

impl fmt::Display for PageRotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}°", self.degrees())
    }
}
