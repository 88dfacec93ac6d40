//! # Annokit
//!
//! Circle and rectangle annotation editors for paginated document viewers.
//!
//! ## Architecture
//!
//! Annokit is organized as a workspace of three library crates and a facade:
//!
//! 1. **annokit-core** - Points, page rects, rotations, colours, styles and errors
//! 2. **annokit-settings** - Editor configuration files and per-kind style defaults
//! 3. **annokit-editor** - Shape geometry, page transforms, the drawing state
//!    machine, fit-to-content, undoable commands, annotation records and rendering
//! 4. **annokit** - This facade, re-exporting the above plus logging setup
//!
//! ## Features
//!
//! - **Drag to draw**: circles from center and rim point, rectangles from two corners
//! - **Page rotations**: exact round trips through 0, 90, 180 and 270 degrees
//! - **Undo support**: plain-data commands with merge keys for style tweaks
//! - **Annotation records**: camelCase JSON in document space

pub use annokit_core::{
    CodecError, ColorError, Error, PageRect, PageRotation, ParamKind, Point, Result, Rgb,
    ShapeKind, ShapeStyle, StyleParam, TransformError,
};

pub use annokit_settings::{
    install_defaults, reset_style_defaults, set_style_default, style_defaults, EditorConfig,
    SettingsError, SettingsResult,
};

pub use annokit_editor::{
    codec, dispatch_events, render_editor, to_document_space, to_document_space_degrees,
    to_local_space, to_local_space_degrees, AnnotationRecord, CommandHistory, CommandTarget,
    DrawingState, EditCommand, EditorEvent, EditorHooks, Mutation, PageInfo, PixmapSurface,
    PointerButton, RenderSurface, ShapeEditor, ShapeRecord, SurfaceSize,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Output format of [`init_logging_with`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Multi-line human readable output
    #[default]
    Pretty,
    /// One JSON object per event
    Json,
}

/// Initialize pretty logging to stdout.
///
/// `RUST_LOG` narrows or widens the output; `info` is always enabled.
pub fn init_logging() -> anyhow::Result<()> {
    init_logging_with(LogFormat::default())
}

/// Initialize logging to stdout in the given format.
///
/// Fails if a global subscriber is already installed.
pub fn init_logging_with(format: LogFormat) -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    let registry = tracing_subscriber::registry().with(env_filter);
    match format {
        LogFormat::Pretty => {
            let fmt_layer = fmt::layer()
                .with_writer(std::io::stdout)
                .with_target(true)
                .with_level(true)
                .with_thread_names(true)
                .with_line_number(true)
                .pretty();
            registry.with(fmt_layer).try_init()?;
        }
        LogFormat::Json => {
            let fmt_layer = fmt::layer()
                .with_writer(std::io::stdout)
                .with_target(true)
                .json();
            registry.with(fmt_layer).try_init()?;
        }
    }

    tracing::debug!(version = VERSION, ?format, "Logging initialized");
    Ok(())
}
