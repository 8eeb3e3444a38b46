//! Scene model for the maquette floor-plan editor.
//!
//! A flat, serializable document: placed furniture items, wall/window/floor
//! rectangles in fractional coordinates, and the background descriptor.
//! The whole document is the unit of undo snapshots, so everything here is
//! `Clone + PartialEq` plain data.

pub mod coords;

mod background;
mod item;
mod rect;
mod scene;

pub use background::{fit_within, Background, DEFAULT_FIT, SQUARE_BOX, VIRTUAL_WORLD};
pub use coords::{FracPoint, ScreenDelta, ScreenPoint, ScreenRect};
pub use item::{ItemId, ItemKind, PlacedItem, DEFAULT_ITEM_SIZE, MAX_ITEM_SIZE, MIN_ITEM_SIZE};
pub use rect::{FracRect, RectId, RectKind, ResizeHandle, SceneRect, MIN_SIDE};
pub use scene::{Scene, SceneError};
