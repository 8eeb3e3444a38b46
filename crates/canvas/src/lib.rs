//! Interaction controller for the maquette editor.
//!
//! Translates host pointer/wheel events into scene mutations through the
//! coordinate transform, tracks the single active gesture, and decides when
//! the history manager takes a snapshot. Hit-testing is the host renderer's
//! job; events arrive here with the hit target already resolved.

mod canvas;
mod gesture;
mod input;

pub use canvas::{Canvas, CanvasConfig, CanvasEvent, ClampMode};
pub use gesture::Gesture;
pub use input::{
    HitTarget, Modifiers, PointerButton, PointerInput, PointerKind, Tool, WheelInput,
};
