//! Screen/fraction coordinate transform for the editor.
//!
//! A [`Viewport`] is a throwaway projection value: build one from the canvas
//! bounding rectangle (re-queried from the host every time, it changes with
//! window resizes) and the current background box, pan, and zoom, then
//! convert points in either direction. The renderer must use the same
//! formulas for placement, which is why they live here and nowhere else.

use glam::Vec2;
use scene::{Background, FracPoint, ScreenDelta, ScreenPoint, ScreenRect, VIRTUAL_WORLD};

/// Lower zoom bound.
pub const MIN_SCALE: f32 = 0.2;
/// Upper zoom bound.
pub const MAX_SCALE: f32 = 5.0;

/// Result of a zoom-at-point computation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Zoomed {
    pub scale: f32,
    pub pan: Vec2,
}

/// Projection between screen pixels and fractional scene coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    /// Canvas element bounds in screen space.
    pub canvas: ScreenRect,
    /// Background display box at scale 1.
    pub base: Vec2,
    /// Zoom factor, expected within `MIN_SCALE..=MAX_SCALE`.
    pub scale: f32,
    /// Pan offset in screen pixels.
    pub pan: Vec2,
}

impl Viewport {
    pub fn new(canvas: ScreenRect, base: Vec2, scale: f32, pan: Vec2) -> Self {
        Self {
            canvas,
            base,
            scale,
            pan,
        }
    }

    /// Convenience constructor from a scene's background and pan.
    pub fn of(canvas: ScreenRect, background: &Background, pan: Vec2) -> Self {
        Self::new(canvas, background.base, background.scale, pan)
    }

    /// The background box size as displayed (base scaled by zoom).
    ///
    /// Never returns a degenerate size: a missing or zero-sized box falls
    /// back to the virtual world box so conversions cannot divide by zero.
    pub fn display_size(&self) -> Vec2 {
        let disp = self.base * self.scale;
        if disp.x > 0.0 && disp.y > 0.0 {
            disp
        } else {
            VIRTUAL_WORLD
        }
    }

    /// Top-left of the displayed box in screen space: centered in the
    /// canvas, then shifted by the pan offset.
    pub fn box_origin(&self) -> Vec2 {
        let disp = self.display_size();
        Vec2::new(
            self.canvas.left + ((self.canvas.width - disp.x) / 2.0).floor() + self.pan.x.round(),
            self.canvas.top + ((self.canvas.height - disp.y) / 2.0).floor() + self.pan.y.round(),
        )
    }

    /// Convert a screen point to fractional coordinates, unclamped.
    pub fn screen_to_frac(&self, point: ScreenPoint) -> FracPoint {
        FracPoint((point.0 - self.box_origin()) / self.display_size())
    }

    /// Convert a screen point to fractional coordinates inside the unit box.
    pub fn screen_to_frac_clamped(&self, point: ScreenPoint) -> FracPoint {
        self.screen_to_frac(point).clamped()
    }

    /// Convert fractional coordinates to a screen point.
    pub fn frac_to_screen(&self, frac: FracPoint) -> ScreenPoint {
        ScreenPoint(self.box_origin() + frac.0 * self.display_size())
    }

    /// Convert a screen-space movement into a fractional movement.
    pub fn frac_delta(&self, delta: ScreenDelta) -> Vec2 {
        delta.0 / self.display_size()
    }

    /// Clamp a zoom factor into the legal range.
    pub fn clamp_scale(scale: f32) -> f32 {
        scale.clamp(MIN_SCALE, MAX_SCALE)
    }

    /// Zoom by `factor`, keeping the content under `at` visually fixed.
    ///
    /// Solves for the pan that maps the fraction currently under `at` back
    /// to `at` after the scale change. Anything less exact drifts visibly
    /// across repeated wheel or pinch gestures.
    pub fn zoom_at(&self, at: ScreenPoint, factor: f32) -> Zoomed {
        let scale = Self::clamp_scale(self.scale * factor);
        if scale == self.scale {
            return Zoomed {
                scale: self.scale,
                pan: self.pan,
            };
        }

        let frac = self.screen_to_frac(at);
        let disp = Viewport { scale, ..*self }.display_size();
        let pan = Vec2::new(
            at.x() - self.canvas.left - ((self.canvas.width - disp.x) / 2.0).floor()
                - frac.x() * disp.x,
            at.y() - self.canvas.top - ((self.canvas.height - disp.y) / 2.0).floor()
                - frac.y() * disp.y,
        );
        Zoomed { scale, pan }
    }
}
