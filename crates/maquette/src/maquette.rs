//! # Floor-plan editor core
//!
//! Headless engine for a browser floor-plan editor: the coordinate
//! transform between screen pixels and background-relative fractions, the
//! pointer/wheel gesture state machine, and snapshot undo history. Hosts
//! wire pointer events in and render the scene out; this workspace holds
//! everything in between.

pub mod export;

pub use canvas::{
    Canvas, CanvasConfig, CanvasEvent, ClampMode, Gesture, HitTarget, Modifiers, PointerButton,
    PointerInput, PointerKind, Tool, WheelInput,
};
pub use export::{layout, ExportLayout, Layer, Sprite};
pub use history::{Debounce, History, DEBOUNCE_WINDOW, MAX_ENTRIES};
pub use scene::{
    fit_within, Background, FracPoint, FracRect, ItemId, ItemKind, PlacedItem, RectId, RectKind,
    ResizeHandle, Scene, SceneError, SceneRect, ScreenDelta, ScreenPoint, ScreenRect,
    DEFAULT_FIT, DEFAULT_ITEM_SIZE, MAX_ITEM_SIZE, MIN_ITEM_SIZE, MIN_SIDE, SQUARE_BOX,
    VIRTUAL_WORLD,
};
pub use viewport::{Viewport, Zoomed, MAX_SCALE, MIN_SCALE};
