//! The per-element interactive core.
//!
//! `ElementCore` owns one element's position, size, activation flag, and
//! gesture state. Pointer handlers consume press/move/release events and
//! return [`Action`]s for the host to process — the host applies live
//! geometry to the rendered element on every move and records committed
//! geometry on the board at gesture stop. All constraint application
//! (movement envelope, minimum size, grid snapping) happens here.

#[cfg(test)]
#[path = "element_test.rs"]
mod element_test;

use crate::board::{BoardElement, ElementId};
use crate::direction::Direction;
use crate::error::ConfigError;
use crate::geometry::{Bounds, Geometry, Grid, Point, Size, clamp, clamp_point, snap};
use crate::gesture::GestureState;
use crate::zone::HitPart;

/// Outputs from the pointer handlers, processed by the host.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Action {
    /// A drag gesture began on the handle.
    DragStarted,
    /// The live position changed; apply it to the rendered element now.
    Moved { position: Point },
    /// The drag ended; `position` is final and persisted.
    DragCommitted { position: Point },
    /// A resize gesture began on the given hotzone.
    ResizeStarted { direction: Direction },
    /// The live geometry changed; apply it to the rendered element now.
    Resized { direction: Direction, geometry: Geometry },
    /// The resize ended; `geometry` is final and persisted.
    ResizeCommitted { direction: Direction, geometry: Geometry },
    /// The body of an inactive element was pressed; the board should make
    /// it the active element.
    ActivationRequested { id: ElementId },
}

/// Interactive state machine for one board element.
///
/// Position and size are mutated exclusively through the pointer handlers;
/// external code observes them via [`ElementCore::geometry`] and the
/// returned actions. Seeded from a validated [`BoardElement`] record.
#[derive(Debug, Clone)]
pub struct ElementCore {
    id: ElementId,
    bounds: Bounds,
    min_size: Size,
    grid: Option<Grid>,
    position: Point,
    size: Size,
    active: bool,
    gesture: GestureState,
}

impl ElementCore {
    /// Build the interactive core for one element, seeded from its record.
    ///
    /// The seed size is raised to the minimum and the seed position is
    /// clamped into the movement envelope, so the geometry invariants hold
    /// before the first gesture.
    pub fn new(config: &BoardElement) -> Result<Self, ConfigError> {
        config.validate()?;
        let size = Size::new(
            config.size.width.max(config.min_size.width),
            config.size.height.max(config.min_size.height),
        );
        let mut core = Self {
            id: config.id,
            bounds: config.bounds,
            min_size: config.min_size,
            grid: config.grid,
            position: config.position,
            size,
            active: config.active,
            gesture: GestureState::Idle,
        };
        core.position = clamp_point(core.position, core.drag_envelope());
        Ok(core)
    }

    // --- Queries ---

    #[must_use]
    pub fn id(&self) -> ElementId {
        self.id
    }

    /// Committed position: the last gesture commit, or the seeded value.
    #[must_use]
    pub fn position(&self) -> Point {
        self.position
    }

    /// Committed size.
    #[must_use]
    pub fn size(&self) -> Size {
        self.size
    }

    /// The geometry to render right now: the live in-gesture value while a
    /// gesture is in progress, the committed value otherwise.
    #[must_use]
    pub fn geometry(&self) -> Geometry {
        match self.gesture {
            GestureState::Idle => Geometry::new(self.position, self.size),
            GestureState::Dragging { live, .. } => Geometry::new(live, self.size),
            GestureState::Resizing { live, .. } => live,
        }
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.gesture.is_dragging()
    }

    #[must_use]
    pub fn gesture(&self) -> GestureState {
        self.gesture
    }

    /// Update the activation flag.
    ///
    /// Deactivating mid-gesture does not cancel the gesture; it runs to its
    /// pointer-up. Hosts are expected to toggle activation only between
    /// gestures.
    pub fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    // --- Pointer handlers ---

    /// Pointer press, with the identity of what was pressed.
    ///
    /// Inactive elements ignore handle and hotzone presses entirely; a body
    /// press on an inactive element requests activation. A press while a
    /// gesture is already in progress is ignored — the active gesture keeps
    /// running.
    pub fn on_pointer_down(&mut self, part: HitPart, at: Point) -> Vec<Action> {
        if !self.gesture.is_idle() {
            return Vec::new();
        }
        match part {
            HitPart::DragHandle => {
                if !self.active {
                    return Vec::new();
                }
                self.gesture = GestureState::Dragging { last: at, live: self.position };
                vec![Action::DragStarted]
            }
            HitPart::ResizeZone(direction) => {
                if !self.active {
                    return Vec::new();
                }
                self.gesture = GestureState::Resizing {
                    direction,
                    last: at,
                    live: Geometry::new(self.position, self.size),
                };
                vec![Action::ResizeStarted { direction }]
            }
            HitPart::Body => {
                if self.active {
                    Vec::new()
                } else {
                    vec![Action::ActivationRequested { id: self.id }]
                }
            }
        }
    }

    /// Pointer move at an absolute position.
    ///
    /// Applies the constrained per-event delta to the live geometry and
    /// returns the update to render. A move with no gesture in progress is
    /// a no-op.
    pub fn on_pointer_move(&mut self, at: Point) -> Vec<Action> {
        match self.gesture {
            GestureState::Idle => Vec::new(),
            GestureState::Dragging { last, live } => {
                let proposed = Point::new(live.x + (at.x - last.x), live.y + (at.y - last.y));
                let moved = clamp_point(proposed, self.drag_envelope());
                self.gesture = GestureState::Dragging { last: at, live: moved };
                vec![Action::Moved { position: moved }]
            }
            GestureState::Resizing { direction, last, live } => {
                let (dx, dy, consumed) = self.snapped_delta(at, last);
                let next = self.apply_resize(direction, live, dx, dy);
                self.gesture = GestureState::Resizing { direction, last: consumed, live: next };
                vec![Action::Resized { direction, geometry: next }]
            }
        }
    }

    /// Terminal pointer release: commit the live geometry into persistent
    /// state and return to idle. A stray release with no gesture in
    /// progress is a no-op.
    pub fn on_pointer_up(&mut self) -> Vec<Action> {
        match self.gesture {
            GestureState::Idle => Vec::new(),
            GestureState::Dragging { live, .. } => {
                self.position = live;
                self.gesture = GestureState::Idle;
                vec![Action::DragCommitted { position: live }]
            }
            GestureState::Resizing { direction, live, .. } => {
                self.position = live.position;
                self.size = live.size;
                self.gesture = GestureState::Idle;
                vec![Action::ResizeCommitted { direction, geometry: live }]
            }
        }
    }

    /// Replace the live size with the dimensions the rendering layer
    /// actually produced, re-clamped to this element's constraints.
    ///
    /// Hosts call this just before the terminal pointer-up of a resize so
    /// any rendering-side rounding lands in the committed state. No-op
    /// outside a resize gesture.
    pub fn reconcile_live_size(&mut self, rendered: Size) {
        if let GestureState::Resizing { direction, last, live } = self.gesture {
            let size = Size::new(
                clamp(rendered.width, self.min_size.width, self.bounds.right - live.position.x),
                clamp(rendered.height, self.min_size.height, self.bounds.bottom - live.position.y),
            );
            self.gesture = GestureState::Resizing {
                direction,
                last,
                live: Geometry::new(live.position, size),
            };
        }
    }

    // --- Constraint math ---

    /// The envelope for the element's top-left corner while dragging: the
    /// static bounds with the far edges pulled in by the element's size, so
    /// the far edge can never cross the boundary. Collapses to the near
    /// edge when the bounds are smaller than the element.
    fn drag_envelope(&self) -> Bounds {
        Bounds {
            top: self.bounds.top,
            left: self.bounds.left,
            right: (self.bounds.right - self.size.width).max(self.bounds.left),
            bottom: (self.bounds.bottom - self.size.height).max(self.bounds.top),
        }
    }

    /// Per-event delta against `last`, snapped per axis when a grid is
    /// configured. The returned point is how far the pointer has been
    /// consumed; with a grid it trails `at` by the sub-increment remainder,
    /// so the remainder accumulates across events instead of being rounded
    /// away each time.
    fn snapped_delta(&self, at: Point, last: Point) -> (f64, f64, Point) {
        let raw_x = at.x - last.x;
        let raw_y = at.y - last.y;
        match self.grid {
            None => (raw_x, raw_y, at),
            Some(grid) => {
                let dx = snap(raw_x, grid.x);
                let dy = snap(raw_y, grid.y);
                (dx, dy, Point::new(last.x + dx, last.y + dy))
            }
        }
    }

    /// One resize step. Corner directions apply both edge components, each
    /// computed from the same pre-step snapshot, so the two axes never
    /// interact.
    ///
    /// Edges that move the element origin (`top`, `left`) recompute the
    /// position so the opposite edge stays fixed; both clamps saturate
    /// consistently, so hitting the minimum size or the boundary never
    /// detaches that fixed edge.
    fn apply_resize(&self, direction: Direction, current: Geometry, dx: f64, dy: f64) -> Geometry {
        let Point { x, y } = current.position;
        let Size { width, height } = current.size;
        let min = self.min_size;
        let mut next = current;

        if direction.has_top() {
            next.size.height = clamp(height - dy, min.height, height + y - self.bounds.top);
            next.position.y = clamp(y + dy, self.bounds.top, y + height - min.height);
        }
        if direction.has_right() {
            next.size.width = clamp(width + dx, min.width, self.bounds.right - x);
        }
        if direction.has_bottom() {
            next.size.height = clamp(height + dy, min.height, self.bounds.bottom - y);
        }
        if direction.has_left() {
            next.size.width = clamp(width - dx, min.width, width + x - self.bounds.left);
            next.position.x = clamp(x + dx, self.bounds.left, x + width - min.width);
        }
        next
    }
}
