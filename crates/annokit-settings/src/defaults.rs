//! Process-wide default styles for new editors.
//!
//! When the user changes a style parameter of an editor, the host usually
//! wants the next editor of the same kind to start with that value too. The
//! table below stores one [`ShapeStyle`] per [`ShapeKind`]; editors read it
//! lazily the first time they need a style.

use std::sync::OnceLock;

use annokit_core::{ShapeKind, ShapeStyle, StyleParam};
use parking_lot::RwLock;

use crate::config::EditorConfig;

#[derive(Debug, Clone, Copy, Default)]
struct DefaultsTable {
    circle: ShapeStyle,
    rectangle: ShapeStyle,
}

impl DefaultsTable {
    fn slot(&mut self, kind: ShapeKind) -> &mut ShapeStyle {
        match kind {
            ShapeKind::Circle => &mut self.circle,
            ShapeKind::Rectangle => &mut self.rectangle,
        }
    }

    fn get(&self, kind: ShapeKind) -> ShapeStyle {
        match kind {
            ShapeKind::Circle => self.circle,
            ShapeKind::Rectangle => self.rectangle,
        }
    }
}

static REGISTRY: OnceLock<RwLock<DefaultsTable>> = OnceLock::new();

fn registry() -> &'static RwLock<DefaultsTable> {
    REGISTRY.get_or_init(|| RwLock::new(DefaultsTable::default()))
}

/// Current default style for `kind`.
pub fn style_defaults(kind: ShapeKind) -> ShapeStyle {
    registry().read().get(kind)
}

/// Updates one default parameter for `kind`.
pub fn set_style_default(kind: ShapeKind, param: StyleParam) {
    registry().write().slot(kind).apply(param);
    tracing::debug!(%kind, param = %param.kind(), "Updated style default");
}

/// Replaces both default styles with the ones in `config`.
pub fn install_defaults(config: &EditorConfig) {
    let mut table = registry().write();
    for kind in ShapeKind::ALL {
        *table.slot(kind) = *config.style_for(kind);
    }
    tracing::debug!("Installed style defaults from config");
}

/// Restores the built-in defaults.
pub fn reset_style_defaults() {
    *registry().write() = DefaultsTable::default();
}
