use crate::background::Background;
use crate::coords::FracPoint;
use crate::item::{ItemId, ItemKind, PlacedItem};
use crate::rect::{RectId, RectKind, SceneRect};
use glam::Vec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from scene mutations that validate their input.
///
/// Geometry is never rejected (degenerate boxes are clamped instead); only
/// user-entered values and unknown ids produce errors.
#[derive(Debug, Error, PartialEq)]
pub enum SceneError {
    #[error("no window with id {0}")]
    UnknownWindow(RectId),
    #[error("invalid window height: {0} (must be a finite value >= 0)")]
    InvalidHeight(f32),
}

/// The whole editable document.
///
/// One session owns exactly one `Scene`; the history manager stores deep
/// copies of it. `pan` is view state, but it lives in the document so pan
/// and zoom participate in undo the same way shapes do.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    pub items: Vec<PlacedItem>,
    pub walls: Vec<SceneRect>,
    pub windows: Vec<SceneRect>,
    pub floors: Vec<SceneRect>,
    pub background: Background,
    /// Pan offset in screen pixels.
    pub pan: Vec2,
}

impl Scene {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            walls: Vec::new(),
            windows: Vec::new(),
            floors: Vec::new(),
            background: Background::none(),
            pan: Vec2::ZERO,
        }
    }

    /// Place a new item and return its id.
    pub fn place_item(&mut self, kind: ItemKind, pos: FracPoint) -> ItemId {
        let item = PlacedItem::new(kind, pos);
        let id = item.id;
        self.items.push(item);
        id
    }

    pub fn item(&self, id: ItemId) -> Option<&PlacedItem> {
        self.items.iter().find(|i| i.id == id)
    }

    pub fn item_mut(&mut self, id: ItemId) -> Option<&mut PlacedItem> {
        self.items.iter_mut().find(|i| i.id == id)
    }

    /// Remove an item (double-click destroys it). Returns whether it existed.
    pub fn remove_item(&mut self, id: ItemId) -> bool {
        let before = self.items.len();
        self.items.retain(|i| i.id != id);
        self.items.len() != before
    }

    pub fn rects(&self, kind: RectKind) -> &[SceneRect] {
        match kind {
            RectKind::Wall => &self.walls,
            RectKind::Window => &self.windows,
            RectKind::Floor => &self.floors,
        }
    }

    fn rects_mut(&mut self, kind: RectKind) -> &mut Vec<SceneRect> {
        match kind {
            RectKind::Wall => &mut self.walls,
            RectKind::Window => &mut self.windows,
            RectKind::Floor => &mut self.floors,
        }
    }

    /// Add a drawn rectangle to its kind's layer and return its id.
    pub fn add_rect(&mut self, rect: SceneRect) -> RectId {
        let id = rect.id;
        self.rects_mut(rect.kind).push(rect);
        id
    }

    pub fn rect(&self, kind: RectKind, id: RectId) -> Option<&SceneRect> {
        self.rects(kind).iter().find(|r| r.id == id)
    }

    pub fn rect_mut(&mut self, kind: RectKind, id: RectId) -> Option<&mut SceneRect> {
        self.rects_mut(kind).iter_mut().find(|r| r.id == id)
    }

    /// Record the real-world height of a window.
    ///
    /// The prompt value comes from the host already parsed; anything
    /// non-finite or negative is rejected without mutating the scene.
    pub fn set_window_height(&mut self, id: RectId, height_cm: f32) -> Result<(), SceneError> {
        if !height_cm.is_finite() || height_cm < 0.0 {
            return Err(SceneError::InvalidHeight(height_cm));
        }
        let window = self
            .rect_mut(RectKind::Window, id)
            .ok_or(SceneError::UnknownWindow(id))?;
        window.height_cm = Some(height_cm);
        Ok(())
    }

    /// Remove every rectangle of one kind.
    pub fn clear_rects(&mut self, kind: RectKind) {
        self.rects_mut(kind).clear();
    }

    /// Remove all items and rectangles, keeping the background and view.
    pub fn clear(&mut self) {
        self.items.clear();
        self.walls.clear();
        self.windows.clear();
        self.floors.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
            && self.walls.is_empty()
            && self.windows.is_empty()
            && self.floors.is_empty()
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rect::FracRect;

    fn window(scene: &mut Scene) -> RectId {
        scene.add_rect(SceneRect::new(
            RectKind::Window,
            FracRect::new(Vec2::new(0.1, 0.1), Vec2::new(0.2, 0.1)),
        ))
    }

    #[test]
    fn test_place_and_remove_item() {
        let mut scene = Scene::new();
        let id = scene.place_item(ItemKind::Table, FracPoint::new(0.5, 0.5));

        assert!(scene.item(id).is_some());
        assert!(scene.remove_item(id));
        assert!(!scene.remove_item(id));
        assert!(scene.is_empty());
    }

    #[test]
    fn test_rects_go_to_their_layer() {
        let mut scene = Scene::new();
        let rect = FracRect::new(Vec2::new(0.0, 0.0), Vec2::new(0.1, 0.1));

        scene.add_rect(SceneRect::new(RectKind::Wall, rect));
        scene.add_rect(SceneRect::new(RectKind::Floor, rect));

        assert_eq!(scene.walls.len(), 1);
        assert_eq!(scene.floors.len(), 1);
        assert!(scene.windows.is_empty());
    }

    #[test]
    fn test_set_window_height_validates() {
        let mut scene = Scene::new();
        let id = window(&mut scene);

        assert_eq!(
            scene.set_window_height(id, -5.0),
            Err(SceneError::InvalidHeight(-5.0))
        );
        assert!(scene
            .set_window_height(id, f32::NAN)
            .is_err());
        assert_eq!(scene.rect(RectKind::Window, id).unwrap().height_cm, None);

        scene.set_window_height(id, 120.0).unwrap();
        assert_eq!(
            scene.rect(RectKind::Window, id).unwrap().height_cm,
            Some(120.0)
        );

        let missing = RectId::from_u128(7);
        assert_eq!(
            scene.set_window_height(missing, 90.0),
            Err(SceneError::UnknownWindow(missing))
        );
    }

    #[test]
    fn test_clear_keeps_background() {
        let mut scene = Scene::new();
        scene.background = Background::from_image("plan.png", Vec2::new(600.0, 400.0));
        scene.place_item(ItemKind::Bed, FracPoint::new(0.2, 0.2));
        window(&mut scene);

        scene.clear();
        assert!(scene.is_empty());
        assert!(scene.background.has_image());
    }

    #[test]
    fn test_snapshot_copies_do_not_alias() {
        let mut scene = Scene::new();
        let id = scene.place_item(ItemKind::Chair, FracPoint::new(0.3, 0.3));
        let snapshot = scene.clone();

        scene.item_mut(id).unwrap().move_to(FracPoint::new(0.9, 0.9));
        assert_eq!(snapshot.item(id).unwrap().pos, FracPoint::new(0.3, 0.3));
        assert_ne!(snapshot, scene);
    }
}
