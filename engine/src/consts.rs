//! Shared numeric constants for the engine crate.

// ── Element defaults ────────────────────────────────────────────

/// Default minimum width and height for a board element.
pub const DEFAULT_MIN_SIZE: f64 = 100.0;

/// Default initial width and height for a board element.
pub const DEFAULT_SIZE: f64 = 200.0;

// ── Hotzones ────────────────────────────────────────────────────

/// Default thickness of the resize hotzone bars, in CSS pixels.
pub const DEFAULT_BAR_THICKNESS: f64 = 3.0;

/// Corner hotzones are squares with this multiple of the bar thickness
/// as their side.
pub const CORNER_FACTOR: f64 = 1.5;

/// Height of the drag-handle strip at the top of an element.
pub const HANDLE_HEIGHT: f64 = 32.0;

// ── Stacking ────────────────────────────────────────────────────

/// Base z-index for the active element; keeps it above every inactive one.
pub const Z_ACTIVE_BASE: i64 = 99;

/// Base z-index for inactive elements.
pub const Z_INACTIVE_BASE: i64 = 9;
