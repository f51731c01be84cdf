//! Geometry primitives and pure clamping/snapping helpers.
//!
//! Everything here is free of browser types so the constraint math can be
//! exercised natively. Coordinates are abstract units (CSS pixels in
//! practice) in the board's shared coordinate space; y grows downward.

#[cfg(test)]
#[path = "geometry_test.rs"]
mod geometry_test;

use serde::{Deserialize, Serialize};

/// A position in board space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Width and height of an element. Strictly positive in any valid
/// configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Position and size together: the full on-screen footprint of an element.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Geometry {
    pub position: Point,
    pub size: Size,
}

impl Geometry {
    #[must_use]
    pub fn new(position: Point, size: Size) -> Self {
        Self { position, size }
    }
}

/// The envelope an element must stay within. Edges may be ±infinite.
///
/// Immutable per element instance; supplied by the embedding application.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Bounds {
    #[must_use]
    pub fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self { top, right, bottom, left }
    }

    /// An envelope that never constrains.
    #[must_use]
    pub fn unbounded() -> Self {
        Self {
            top: f64::NEG_INFINITY,
            right: f64::INFINITY,
            bottom: f64::INFINITY,
            left: f64::NEG_INFINITY,
        }
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Self::unbounded()
    }
}

/// Snapping increments for resize deltas. Both strictly positive in any
/// valid configuration; absent means no snapping.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Grid {
    pub x: f64,
    pub y: f64,
}

impl Grid {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// An axis-aligned rectangle in an element's local coordinate space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    /// Whether `p` lies inside this rectangle, edges included.
    #[must_use]
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.x && p.x <= self.x + self.width && p.y >= self.y && p.y <= self.y + self.height
    }
}

/// Clamp `value` into `[min, max]`.
///
/// An inverted range (`min > max`) collapses to `min`. `f64::clamp` panics
/// on that input, which degenerate bounds configurations can legitimately
/// produce, so this helper is used everywhere instead.
#[must_use]
pub fn clamp(value: f64, min: f64, max: f64) -> f64 {
    if max < min {
        return min;
    }
    value.max(min).min(max)
}

/// Clamp a point into a rectangular envelope, per axis.
#[must_use]
pub fn clamp_point(p: Point, bounds: Bounds) -> Point {
    Point {
        x: clamp(p.x, bounds.left, bounds.right),
        y: clamp(p.y, bounds.top, bounds.bottom),
    }
}

/// Round `value` to the nearest multiple of `increment`.
///
/// Identity when `increment` is zero or negative, so an absent grid can be
/// modelled as no-op snapping.
#[must_use]
pub fn snap(value: f64, increment: f64) -> f64 {
    if increment <= 0.0 {
        return value;
    }
    (value / increment).round() * increment
}
