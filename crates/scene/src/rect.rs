use crate::coords::FracPoint;
use glam::Vec2;
use serde::{Deserialize, Serialize};
use std::fmt;
use strum::Display;

/// Minimum rectangle side length in fractional units.
///
/// Resize and draw gestures clamp here instead of letting a box collapse or
/// invert.
pub const MIN_SIDE: f32 = 0.005;

/// Unique identifier for a drawn rectangle.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RectId(uuid::Uuid);

impl RectId {
    pub fn new() -> Self {
        Self(uuid::Uuid::new_v4())
    }

    /// Create a RectId from a u128 (useful for tests).
    pub fn from_u128(value: u128) -> Self {
        Self(uuid::Uuid::from_u128(value))
    }
}

impl Default for RectId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for RectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RectId({})", &self.0.to_string()[..8])
    }
}

impl fmt::Display for RectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", &self.0.to_string()[..8])
    }
}

/// Semantic layer of a drawn rectangle.
///
/// All three share the same geometry; the kind picks the layer and the
/// renderer's color.
#[derive(Clone, Copy, Debug, Display, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum RectKind {
    Wall,
    Window,
    Floor,
}

/// One of the eight directional resize handles.
///
/// Each handle moves only the edges its name implies; the opposite edges
/// stay fixed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResizeHandle {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

impl ResizeHandle {
    /// Whether dragging this handle moves the left edge.
    pub fn moves_left(&self) -> bool {
        matches!(
            self,
            ResizeHandle::West | ResizeHandle::NorthWest | ResizeHandle::SouthWest
        )
    }

    /// Whether dragging this handle moves the right edge.
    pub fn moves_right(&self) -> bool {
        matches!(
            self,
            ResizeHandle::East | ResizeHandle::NorthEast | ResizeHandle::SouthEast
        )
    }

    /// Whether dragging this handle moves the top edge.
    pub fn moves_top(&self) -> bool {
        matches!(
            self,
            ResizeHandle::North | ResizeHandle::NorthWest | ResizeHandle::NorthEast
        )
    }

    /// Whether dragging this handle moves the bottom edge.
    pub fn moves_bottom(&self) -> bool {
        matches!(
            self,
            ResizeHandle::South | ResizeHandle::SouthWest | ResizeHandle::SouthEast
        )
    }
}

/// An axis-aligned box in fractional coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct FracRect {
    pub origin: Vec2,
    pub size: Vec2,
}

impl FracRect {
    pub fn new(origin: Vec2, size: Vec2) -> Self {
        Self { origin, size }
    }

    /// Build a rectangle from two opposite corners in any order.
    ///
    /// Takes the min/max of each axis, so the result always has
    /// non-negative size.
    pub fn from_corners(a: FracPoint, b: FracPoint) -> Self {
        let min = a.0.min(b.0);
        let max = a.0.max(b.0);
        Self {
            origin: min,
            size: max - min,
        }
    }

    pub fn left(&self) -> f32 {
        self.origin.x
    }

    pub fn right(&self) -> f32 {
        self.origin.x + self.size.x
    }

    pub fn top(&self) -> f32 {
        self.origin.y
    }

    pub fn bottom(&self) -> f32 {
        self.origin.y + self.size.y
    }

    /// The rectangle moved so its origin sits at `origin`.
    pub fn moved_to(&self, origin: Vec2) -> Self {
        Self {
            origin,
            size: self.size,
        }
    }

    /// Apply a handle drag toward `target`.
    ///
    /// Only the edges implied by the handle move; each moving edge clamps at
    /// `MIN_SIDE` from its fixed counterpart so the box can never invert.
    pub fn resized(&self, handle: ResizeHandle, target: FracPoint) -> Self {
        let mut left = self.left();
        let mut right = self.right();
        let mut top = self.top();
        let mut bottom = self.bottom();

        if handle.moves_left() {
            left = target.x().min(right - MIN_SIDE);
        }
        if handle.moves_right() {
            right = target.x().max(left + MIN_SIDE);
        }
        if handle.moves_top() {
            top = target.y().min(bottom - MIN_SIDE);
        }
        if handle.moves_bottom() {
            bottom = target.y().max(top + MIN_SIDE);
        }

        Self {
            origin: Vec2::new(left, top),
            size: Vec2::new(right - left, bottom - top),
        }
    }

    /// Clamp the box into the unit square, preserving `MIN_SIDE`.
    pub fn clamped_to_unit(&self) -> Self {
        let size = self.size.clamp(Vec2::splat(MIN_SIDE), Vec2::ONE);
        let origin = self.origin.clamp(Vec2::ZERO, Vec2::ONE - size);
        Self { origin, size }
    }

    /// Enforce the minimum side without constraining the position.
    pub fn with_min_side(&self) -> Self {
        Self {
            origin: self.origin,
            size: self.size.max(Vec2::splat(MIN_SIDE)),
        }
    }
}

/// A wall, window, or floor rectangle placed on the plan.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SceneRect {
    pub id: RectId,
    pub kind: RectKind,
    pub rect: FracRect,
    /// Real-world height, entered after drawing. Windows only.
    pub height_cm: Option<f32>,
}

impl SceneRect {
    pub fn new(kind: RectKind, rect: FracRect) -> Self {
        Self {
            id: RectId::new(),
            kind,
            rect,
            height_cm: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_corners_any_order() {
        let a = FracPoint::new(0.8, 0.1);
        let b = FracPoint::new(0.2, 0.6);

        let rect = FracRect::from_corners(a, b);
        assert_eq!(rect.origin, Vec2::new(0.2, 0.1));
        assert_eq!(rect.size, Vec2::new(0.6, 0.5));
    }

    #[test]
    fn test_resized_moves_only_named_edges() {
        let rect = FracRect::new(Vec2::new(0.2, 0.2), Vec2::new(0.4, 0.4));

        let se = rect.resized(ResizeHandle::SouthEast, FracPoint::new(0.9, 0.8));
        assert_eq!(se.left(), 0.2);
        assert_eq!(se.top(), 0.2);
        assert!((se.right() - 0.9).abs() < 1e-6);
        assert!((se.bottom() - 0.8).abs() < 1e-6);

        let n = rect.resized(ResizeHandle::North, FracPoint::new(0.0, 0.1));
        assert_eq!(n.left(), 0.2);
        assert_eq!(n.right(), rect.right());
        assert!((n.top() - 0.1).abs() < 1e-6);
        assert_eq!(n.bottom(), rect.bottom());
    }

    #[test]
    fn test_resized_never_inverts() {
        let rect = FracRect::new(Vec2::new(0.2, 0.2), Vec2::new(0.4, 0.4));

        // Drag the east edge far past the west edge.
        let e = rect.resized(ResizeHandle::East, FracPoint::new(-0.5, 0.4));
        assert!(e.size.x >= MIN_SIDE);
        assert!((e.right() - (e.left() + MIN_SIDE)).abs() < 1e-6);

        // Drag the north-west corner past the south-east corner.
        let nw = rect.resized(ResizeHandle::NorthWest, FracPoint::new(2.0, 2.0));
        assert!(nw.size.x >= MIN_SIDE);
        assert!(nw.size.y >= MIN_SIDE);
    }

    #[test]
    fn test_resized_handle_sequences_keep_invariants() {
        let mut rect = FracRect::new(Vec2::new(0.3, 0.3), Vec2::new(0.2, 0.2));
        let drags = [
            (ResizeHandle::North, FracPoint::new(0.0, 0.9)),
            (ResizeHandle::West, FracPoint::new(0.95, 0.0)),
            (ResizeHandle::SouthEast, FracPoint::new(-1.0, -1.0)),
            (ResizeHandle::South, FracPoint::new(0.5, 1.4)),
            (ResizeHandle::NorthEast, FracPoint::new(-0.2, 2.0)),
        ];

        for (handle, target) in drags {
            rect = rect.resized(handle, target).clamped_to_unit();
            assert!(rect.size.x >= MIN_SIDE);
            assert!(rect.size.y >= MIN_SIDE);
            assert!(rect.left() >= 0.0 && rect.right() <= 1.0);
            assert!(rect.top() >= 0.0 && rect.bottom() <= 1.0);
        }
    }

    #[test]
    fn test_clamped_to_unit() {
        let rect = FracRect::new(Vec2::new(-0.2, 0.9), Vec2::new(0.5, 0.5));
        let clamped = rect.clamped_to_unit();

        assert_eq!(clamped.origin, Vec2::new(0.0, 0.5));
        assert_eq!(clamped.size, Vec2::new(0.5, 0.5));
    }
}
