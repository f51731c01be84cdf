//! Hotzone geometry and pointer classification for a board element.
//!
//! The eight resize bars hug the element border: edge bars are `thickness`
//! thick and inset `thickness` from each end, corner squares have a side of
//! `1.5 × thickness`. All are centered on the border line (offset by
//! `−thickness / 2`), so half of each bar hangs outside the element box.

#[cfg(test)]
#[path = "zone_test.rs"]
mod zone_test;

use crate::consts::{CORNER_FACTOR, HANDLE_HEIGHT};
use crate::direction::Direction;
use crate::geometry::{Point, Rect, Size};

/// Which part of an element a pointer press lands on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitPart {
    /// A resize hotzone; starts a resize gesture.
    ResizeZone(Direction),
    /// The drag-handle strip; starts a drag gesture.
    DragHandle,
    /// Anywhere else inside the element; requests activation.
    Body,
}

/// The local-space rectangle of one hotzone bar for an element of `size`.
#[must_use]
pub fn zone_rect(direction: Direction, size: Size, thickness: f64) -> Rect {
    let offset = -thickness / 2.0;
    let corner = thickness * CORNER_FACTOR;
    match direction {
        Direction::Top => Rect {
            x: thickness,
            y: offset,
            width: size.width - 2.0 * thickness,
            height: thickness,
        },
        Direction::Bottom => Rect {
            x: thickness,
            y: size.height + offset,
            width: size.width - 2.0 * thickness,
            height: thickness,
        },
        Direction::Left => Rect {
            x: offset,
            y: thickness,
            width: thickness,
            height: size.height - 2.0 * thickness,
        },
        Direction::Right => Rect {
            x: size.width + offset,
            y: thickness,
            width: thickness,
            height: size.height - 2.0 * thickness,
        },
        Direction::TopLeft => Rect { x: offset, y: offset, width: corner, height: corner },
        Direction::TopRight => Rect {
            x: size.width - thickness,
            y: offset,
            width: corner,
            height: corner,
        },
        Direction::BottomRight => Rect {
            x: size.width - thickness,
            y: size.height - thickness,
            width: corner,
            height: corner,
        },
        Direction::BottomLeft => Rect {
            x: offset,
            y: size.height - thickness,
            width: corner,
            height: corner,
        },
    }
}

/// Classify a pointer position in element-local coordinates.
///
/// Hotzones are tested first (corners before edges, since they overlap the
/// bar ends), then the drag-handle strip, then the body. A press that lands
/// in a hotzone therefore never reaches drag handling. Returns `None` for
/// points outside the element and its hotzone fringe.
#[must_use]
pub fn hit_part(local: Point, size: Size, thickness: f64) -> Option<HitPart> {
    for direction in Direction::CORNERS {
        if zone_rect(direction, size, thickness).contains(local) {
            return Some(HitPart::ResizeZone(direction));
        }
    }
    for direction in Direction::EDGES {
        if zone_rect(direction, size, thickness).contains(local) {
            return Some(HitPart::ResizeZone(direction));
        }
    }
    if local.x < 0.0 || local.x > size.width || local.y < 0.0 || local.y > size.height {
        return None;
    }
    if local.y <= HANDLE_HEIGHT {
        return Some(HitPart::DragHandle);
    }
    Some(HitPart::Body)
}
