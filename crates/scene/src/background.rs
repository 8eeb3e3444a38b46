use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Display box used for perfectly square source images.
pub const SQUARE_BOX: f32 = 300.0;

/// Logical box that fractional coordinates refer to when no background
/// image is set. Also the division fallback for degenerate display boxes.
pub const VIRTUAL_WORLD: Vec2 = Vec2::new(1000.0, 1000.0);

/// Maximum bounding box a background image is fitted into.
pub const DEFAULT_FIT: Vec2 = Vec2::new(640.0, 480.0);

/// Fit a source of `natural` pixel size into `max`, preserving aspect ratio.
///
/// Square sources get a fixed `SQUARE_BOX` box instead of the generic fit.
/// Degenerate sources fall back to the virtual world box.
pub fn fit_within(natural: Vec2, max: Vec2) -> Vec2 {
    if natural.x <= 0.0 || natural.y <= 0.0 {
        return VIRTUAL_WORLD;
    }
    if natural.x == natural.y {
        return Vec2::splat(SQUARE_BOX);
    }
    let ratio = (max.x / natural.x).min(max.y / natural.y);
    natural * ratio
}

/// The reference image behind the plan, or the virtual world box when no
/// image has been uploaded.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Background {
    /// Where the image came from, if any. Opaque to the core; the renderer
    /// resolves it.
    pub source: Option<String>,
    /// Source pixel size, as reported by the image loader.
    pub natural: Vec2,
    /// Logical display box the image is fitted into at scale 1.
    pub base: Vec2,
    /// Zoom factor. Clamped by the viewport whenever it changes.
    pub scale: f32,
}

impl Background {
    /// No image: fractional coordinates refer to the virtual world box.
    pub fn none() -> Self {
        Self {
            source: None,
            natural: Vec2::ZERO,
            base: VIRTUAL_WORLD,
            scale: 1.0,
        }
    }

    /// Descriptor for a decoded image of the given natural size.
    pub fn from_image(source: impl Into<String>, natural: Vec2) -> Self {
        Self {
            source: Some(source.into()),
            natural,
            base: fit_within(natural, DEFAULT_FIT),
            scale: 1.0,
        }
    }

    pub fn has_image(&self) -> bool {
        self.source.is_some()
    }
}

impl Default for Background {
    fn default() -> Self {
        Self::none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fit_within_wide_source() {
        let fitted = fit_within(Vec2::new(2000.0, 1000.0), Vec2::new(500.0, 1000.0));
        assert_eq!(fitted, Vec2::new(500.0, 250.0));
    }

    #[test]
    fn test_fit_within_tall_source() {
        let fitted = fit_within(Vec2::new(1000.0, 2000.0), Vec2::new(500.0, 1000.0));
        assert_eq!(fitted, Vec2::new(500.0, 1000.0));
    }

    #[test]
    fn test_fit_within_square_source_is_special_cased() {
        let fitted = fit_within(Vec2::new(800.0, 800.0), Vec2::new(500.0, 1000.0));
        assert_eq!(fitted, Vec2::splat(SQUARE_BOX));
    }

    #[test]
    fn test_fit_within_degenerate_source() {
        assert_eq!(fit_within(Vec2::ZERO, DEFAULT_FIT), VIRTUAL_WORLD);
        assert_eq!(
            fit_within(Vec2::new(-10.0, 40.0), DEFAULT_FIT),
            VIRTUAL_WORLD
        );
    }

    #[test]
    fn test_background_from_image() {
        let bg = Background::from_image("plan.png", Vec2::new(1280.0, 960.0));
        assert!(bg.has_image());
        assert_eq!(bg.base, Vec2::new(640.0, 480.0));
        assert_eq!(bg.scale, 1.0);
    }
}
