//! Type-safe coordinate spaces for the editor.
//!
//! Provides distinct types for the two coordinate systems so they cannot be
//! mixed by accident:
//!
//! - **Screen space**: pixels relative to the viewport (what pointer events
//!   report).
//! - **Fractional space**: positions and lengths expressed as fractions of
//!   the background's displayed box, independent of pan and zoom.

use glam::Vec2;
use serde::{Deserialize, Serialize};
use std::ops::{Add, Sub};

/// Position in screen space (pixels, viewport-relative).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ScreenPoint(pub Vec2);

/// Movement in screen space (a delta, not a position).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ScreenDelta(pub Vec2);

/// Position in fractional scene space.
///
/// `(0, 0)` is the top-left of the background box, `(1, 1)` the bottom-right.
/// Values outside `[0, 1]` are legal when the unclamped policy is active.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct FracPoint(pub Vec2);

/// The canvas element's bounding rectangle in screen space.
///
/// Supplied by the host on every interaction; it changes with window
/// resizes, so the core never caches it.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ScreenRect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl ScreenPoint {
    pub fn new(x: f32, y: f32) -> Self {
        Self(Vec2::new(x, y))
    }

    pub fn x(&self) -> f32 {
        self.0.x
    }

    pub fn y(&self) -> f32 {
        self.0.y
    }
}

impl Sub for ScreenPoint {
    type Output = ScreenDelta;

    /// Subtracting two points gives a delta.
    fn sub(self, other: ScreenPoint) -> ScreenDelta {
        ScreenDelta(self.0 - other.0)
    }
}

impl Add<ScreenDelta> for ScreenPoint {
    type Output = ScreenPoint;

    fn add(self, delta: ScreenDelta) -> ScreenPoint {
        ScreenPoint(self.0 + delta.0)
    }
}

impl From<Vec2> for ScreenPoint {
    fn from(v: Vec2) -> Self {
        Self(v)
    }
}

impl ScreenDelta {
    pub fn new(x: f32, y: f32) -> Self {
        Self(Vec2::new(x, y))
    }
}

impl FracPoint {
    pub fn new(x: f32, y: f32) -> Self {
        Self(Vec2::new(x, y))
    }

    pub fn x(&self) -> f32 {
        self.0.x
    }

    pub fn y(&self) -> f32 {
        self.0.y
    }

    /// Clamp both axes into the unit box.
    pub fn clamped(&self) -> Self {
        Self(self.0.clamp(Vec2::ZERO, Vec2::ONE))
    }
}

impl From<Vec2> for FracPoint {
    fn from(v: Vec2) -> Self {
        Self(v)
    }
}

impl Sub for FracPoint {
    type Output = Vec2;

    fn sub(self, other: FracPoint) -> Vec2 {
        self.0 - other.0
    }
}

impl ScreenRect {
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    pub fn origin(&self) -> Vec2 {
        Vec2::new(self.left, self.top)
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }
}
