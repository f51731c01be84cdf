//! Board-element records and the board collaborator.
//!
//! `BoardElement` is the externally-supplied record for one element:
//! identity, constraints, persisted geometry, activation flag, and stacking
//! index. `Board` owns the collection and the single active-element id. The
//! interactive core notifies the board of committed geometry changes and
//! activation requests; the board never reaches into a core's live state.

#[cfg(test)]
#[path = "board_test.rs"]
mod board_test;

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::consts::{DEFAULT_BAR_THICKNESS, DEFAULT_MIN_SIZE, DEFAULT_SIZE, Z_ACTIVE_BASE, Z_INACTIVE_BASE};
use crate::error::ConfigError;
use crate::geometry::{Bounds, Geometry, Grid, Point, Size};

/// Unique identifier for a board element.
pub type ElementId = Uuid;

/// Configuration and persisted geometry for one board element.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoardElement {
    /// Unique identifier.
    pub id: ElementId,
    /// CSS class hook applied to the rendered element.
    pub class: String,
    /// Movable/resizable envelope. Unbounded by default.
    pub bounds: Bounds,
    /// Smallest allowed size.
    pub min_size: Size,
    /// Current (initially: seed) top-left position.
    pub position: Point,
    /// Current (initially: seed) size.
    pub size: Size,
    /// Snap increments for resize deltas. `None` disables snapping.
    pub grid: Option<Grid>,
    /// Whether this is the board's active element.
    pub active: bool,
    /// Stacking order among elements sharing an activation state.
    pub index: i64,
    /// Thickness of the resize hotzone bars, in CSS pixels.
    pub bar_thickness: f64,
    /// Open-ended per-element payload passed through to the renderer.
    pub data: serde_json::Value,
}

impl BoardElement {
    /// A new element with the stock defaults: unbounded, 100×100 minimum,
    /// 200×200 at the origin, inactive, stacking index 0.
    #[must_use]
    pub fn new(id: ElementId) -> Self {
        Self {
            id,
            class: String::new(),
            bounds: Bounds::unbounded(),
            min_size: Size::new(DEFAULT_MIN_SIZE, DEFAULT_MIN_SIZE),
            position: Point::new(0.0, 0.0),
            size: Size::new(DEFAULT_SIZE, DEFAULT_SIZE),
            grid: None,
            active: false,
            index: 0,
            bar_thickness: DEFAULT_BAR_THICKNESS,
            data: serde_json::Value::Null,
        }
    }

    /// Reject contract violations in the configuration: the minimum size
    /// and any grid increments must be strictly positive.
    ///
    /// Degenerate *bounds* (smaller than the minimum size, or inverted)
    /// are not errors; interaction clamps around them.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.min_size.width > 0.0 && self.min_size.height > 0.0) {
            return Err(ConfigError::NonPositiveMinSize {
                width: self.min_size.width,
                height: self.min_size.height,
            });
        }
        if let Some(grid) = self.grid {
            if !(grid.x > 0.0 && grid.y > 0.0) {
                return Err(ConfigError::NonPositiveGrid { x: grid.x, y: grid.y });
            }
        }
        Ok(())
    }

    /// Stacking order: the active element renders above all inactive ones,
    /// `index` orders elements within each group.
    #[must_use]
    pub fn z_index(&self) -> i64 {
        (if self.active { Z_ACTIVE_BASE } else { Z_INACTIVE_BASE }) + self.index
    }
}

/// The collection of board elements and the single active-element id.
#[derive(Debug, Clone, Default)]
pub struct Board {
    elements: HashMap<ElementId, BoardElement>,
    active_id: Option<ElementId>,
}

impl Board {
    /// Create an empty board.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace an element record. An element inserted with
    /// `active` set becomes the single active element; inserting an
    /// inactive record over the current active element clears activation.
    pub fn insert(&mut self, element: BoardElement) {
        let id = element.id;
        let active = element.active;
        self.elements.insert(id, element);
        if active {
            self.activate(&id);
        } else if self.active_id == Some(id) {
            self.active_id = None;
        }
    }

    /// Remove an element by id, returning it if it was present. Removing
    /// the active element leaves the board with no active element.
    pub fn remove(&mut self, id: &ElementId) -> Option<BoardElement> {
        let removed = self.elements.remove(id);
        if removed.is_some() && self.active_id.as_ref() == Some(id) {
            self.active_id = None;
        }
        removed
    }

    /// Return a reference to an element by id.
    #[must_use]
    pub fn get(&self, id: &ElementId) -> Option<&BoardElement> {
        self.elements.get(id)
    }

    /// The id of the currently active element, if any.
    #[must_use]
    pub fn active_id(&self) -> Option<ElementId> {
        self.active_id
    }

    /// Make `id` the single active element, clearing the flag on every
    /// other element. Returns false if the id is unknown (board unchanged).
    pub fn activate(&mut self, id: &ElementId) -> bool {
        if !self.elements.contains_key(id) {
            return false;
        }
        for element in self.elements.values_mut() {
            element.active = element.id == *id;
        }
        self.active_id = Some(*id);
        true
    }

    /// Record a committed position change for `id`. Returns false if the
    /// element doesn't exist.
    pub fn apply_move(&mut self, id: &ElementId, position: Point) -> bool {
        let Some(element) = self.elements.get_mut(id) else {
            return false;
        };
        element.position = position;
        true
    }

    /// Record a committed geometry change for `id`. Returns false if the
    /// element doesn't exist.
    pub fn apply_resize(&mut self, id: &ElementId, geometry: Geometry) -> bool {
        let Some(element) = self.elements.get_mut(id) else {
            return false;
        };
        element.position = geometry.position;
        element.size = geometry.size;
        true
    }

    /// All elements sorted by `(z_index, id)` for render order.
    #[must_use]
    pub fn sorted(&self) -> Vec<&BoardElement> {
        let mut elements: Vec<&BoardElement> = self.elements.values().collect();
        elements.sort_by(|a, b| a.z_index().cmp(&b.z_index()).then_with(|| a.id.cmp(&b.id)));
        elements
    }

    /// Number of elements on the board.
    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns `true` if the board holds no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}
