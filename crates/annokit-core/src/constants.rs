//! Shared numeric and style constants.

// ── Sizing ──────────────────────────────────────────────────────

/// Minimum content extent of an editor surface, in local units.
pub const MIN_SIZE: f64 = 16.0;

// ── Style defaults ──────────────────────────────────────────────

/// Stroke thickness used before any default has been configured.
pub const DEFAULT_THICKNESS: f64 = 1.0;

/// Stroke opacity used before any default has been configured.
pub const DEFAULT_STROKE_OPACITY: f64 = 1.0;

/// Fill opacity used before any default has been configured (transparent).
pub const DEFAULT_FILL_OPACITY: f64 = 0.0;

// ── History ─────────────────────────────────────────────────────

/// Capacity of the reference undo manager.
pub const DEFAULT_HISTORY_LIMIT: usize = 128;
