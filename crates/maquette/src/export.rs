//! Flat placement list for rasterized export.
//!
//! The rasterizer draws into a bitmap the size of the background box at
//! scale 1 with no pan, so an export looks the same regardless of how the
//! user happened to have the view positioned. Placements go through the
//! same [`Viewport`] formulas the editor uses; a separate copy of the math
//! here would eventually disagree with it.

use glam::Vec2;
use scene::{FracRect, ItemId, ItemKind, RectId, RectKind, Scene, ScreenRect};
use serde::Serialize;
use viewport::Viewport;

/// What a sprite draws. The host maps kinds to images and colors.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "snake_case", tag = "layer")]
pub enum Layer {
    Background { source: String },
    Rect { kind: RectKind, id: RectId },
    Item { kind: ItemKind, id: ItemId },
}

/// One placement in output pixel space.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Sprite {
    #[serde(flatten)]
    pub layer: Layer,
    pub bounds: ScreenRect,
}

/// Everything a rasterizer needs: the bitmap size and the sprites to draw
/// over it, already in z-order.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ExportLayout {
    /// Output bitmap size in pixels (the background box at scale 1).
    pub size: Vec2,
    pub sprites: Vec<Sprite>,
}

/// Flatten a scene into z-ordered placements.
///
/// Z-order, bottom to top: background image, floors, walls, windows, items.
pub fn layout(scene: &Scene) -> ExportLayout {
    let size = scene.background.base;
    let vp = Viewport::new(
        ScreenRect::new(0.0, 0.0, size.x, size.y),
        size,
        1.0,
        Vec2::ZERO,
    );

    let mut sprites = Vec::new();

    if let Some(source) = &scene.background.source {
        sprites.push(Sprite {
            layer: Layer::Background {
                source: source.clone(),
            },
            bounds: ScreenRect::new(0.0, 0.0, size.x, size.y),
        });
    }

    for kind in [RectKind::Floor, RectKind::Wall, RectKind::Window] {
        for rect in scene.rects(kind) {
            sprites.push(Sprite {
                layer: Layer::Rect {
                    kind,
                    id: rect.id,
                },
                bounds: rect_bounds(&vp, rect.rect),
            });
        }
    }

    for item in &scene.items {
        // Icons are centered on their anchor; size is zoom-independent,
        // and scale 1 here means pixels pass through unchanged.
        let center = vp.frac_to_screen(item.pos);
        sprites.push(Sprite {
            layer: Layer::Item {
                kind: item.kind,
                id: item.id,
            },
            bounds: ScreenRect::new(
                center.x() - item.size / 2.0,
                center.y() - item.size / 2.0,
                item.size,
                item.size,
            ),
        });
    }

    ExportLayout { size, sprites }
}

fn rect_bounds(vp: &Viewport, rect: FracRect) -> ScreenRect {
    let origin = vp.frac_to_screen(rect.origin.into());
    let size = rect.size * vp.display_size();
    ScreenRect::new(origin.x(), origin.y(), size.x, size.y)
}
