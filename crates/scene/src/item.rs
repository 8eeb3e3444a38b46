use crate::coords::FracPoint;
use serde::{Deserialize, Serialize};
use std::fmt;
use strum::Display;

/// Smallest allowed icon size, in pixels.
pub const MIN_ITEM_SIZE: f32 = 16.0;
/// Largest allowed icon size, in pixels.
pub const MAX_ITEM_SIZE: f32 = 256.0;
/// Size a freshly placed icon gets.
pub const DEFAULT_ITEM_SIZE: f32 = 64.0;

/// Unique identifier for a placed item.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ItemId(uuid::Uuid);

impl ItemId {
    pub fn new() -> Self {
        Self(uuid::Uuid::new_v4())
    }

    /// Create an ItemId from a u128 (useful for tests).
    pub fn from_u128(value: u128) -> Self {
        Self(uuid::Uuid::from_u128(value))
    }
}

impl Default for ItemId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ItemId({})", &self.0.to_string()[..8])
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", &self.0.to_string()[..8])
    }
}

/// The kind of furniture icon.
#[derive(Clone, Copy, Debug, Display, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ItemKind {
    Bed,
    Door,
    Table,
    Chair,
}

/// A furniture icon placed on the plan.
///
/// The anchor position is fractional so the item stays put relative to the
/// background across pan, zoom, and window resizes. Size is in pixels and
/// unaffected by zoom.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlacedItem {
    pub id: ItemId,
    pub kind: ItemKind,
    /// Anchor position, clamped to the unit box.
    pub pos: FracPoint,
    /// Icon size in pixels, clamped to `MIN_ITEM_SIZE..=MAX_ITEM_SIZE`.
    pub size: f32,
}

impl PlacedItem {
    pub fn new(kind: ItemKind, pos: FracPoint) -> Self {
        Self {
            id: ItemId::new(),
            kind,
            pos: pos.clamped(),
            size: DEFAULT_ITEM_SIZE,
        }
    }

    /// Move the anchor, keeping it inside the unit box.
    pub fn move_to(&mut self, pos: FracPoint) {
        self.pos = pos.clamped();
    }

    /// Set the icon size, clamped to the legal range.
    pub fn set_size(&mut self, size: f32) {
        self.size = size.clamp(MIN_ITEM_SIZE, MAX_ITEM_SIZE);
    }
}
