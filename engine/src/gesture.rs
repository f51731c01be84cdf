//! The per-element gesture state machine.
//!
//! One gesture is a pointer-down → move* → up sequence. Each active variant
//! carries the context needed to turn absolute pointer positions into
//! per-event deltas and to hold the continuously-applied live geometry
//! until the terminal commit.

#[cfg(test)]
#[path = "gesture_test.rs"]
mod gesture_test;

use crate::direction::Direction;
use crate::geometry::{Geometry, Point};

/// Active gesture, if any, for one board element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureState {
    /// No gesture in progress; waiting for the next pointer-down.
    Idle,
    /// The drag handle is being dragged.
    Dragging {
        /// Pointer position at the previous event; deltas are computed
        /// against it.
        last: Point,
        /// Position applied to the rendered element on every move and
        /// committed at drag-stop.
        live: Point,
    },
    /// One of the hotzones is being dragged.
    Resizing {
        /// The hotzone that started the gesture.
        direction: Direction,
        /// Pointer position already consumed. With a grid configured this
        /// trails the real pointer by the sub-increment remainder.
        last: Point,
        /// Geometry applied on every move and committed at resize-stop.
        live: Geometry,
    },
}

impl GestureState {
    #[must_use]
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging { .. })
    }

    #[must_use]
    pub fn is_resizing(&self) -> bool {
        matches!(self, Self::Resizing { .. })
    }

    /// The active resize direction, if a resize is in progress.
    #[must_use]
    pub fn resize_direction(&self) -> Option<Direction> {
        match self {
            Self::Resizing { direction, .. } => Some(*direction),
            Self::Idle | Self::Dragging { .. } => None,
        }
    }
}

impl Default for GestureState {
    fn default() -> Self {
        Self::Idle
    }
}
