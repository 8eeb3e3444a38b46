use scene::{ItemId, RectId, RectKind, ResizeHandle, ScreenPoint};
use serde::{Deserialize, Serialize};
use strum::Display;

/// What produced a pointer event. Pinch zoom only exists for touch.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PointerKind {
    #[default]
    Mouse,
    Touch,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PointerButton {
    #[default]
    Left,
    Middle,
    Right,
}

/// Modifier-key state carried on every pointer event.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    /// Held space turns a left drag into a pan, like the middle button.
    pub space: bool,
}

/// One pointer event, as reported by the host.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerInput {
    /// Stable identity across a pointer's down/move/up, for multi-touch.
    pub pointer: u64,
    pub kind: PointerKind,
    pub position: ScreenPoint,
    pub button: PointerButton,
    pub modifiers: Modifiers,
}

impl PointerInput {
    pub fn mouse(position: ScreenPoint, button: PointerButton) -> Self {
        Self {
            pointer: 0,
            kind: PointerKind::Mouse,
            position,
            button,
            modifiers: Modifiers::default(),
        }
    }

    pub fn touch(pointer: u64, position: ScreenPoint) -> Self {
        Self {
            pointer,
            kind: PointerKind::Touch,
            position,
            button: PointerButton::Left,
            modifiers: Modifiers::default(),
        }
    }

    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    /// Middle button or a held space modifier starts a pan.
    pub fn is_pan_trigger(&self) -> bool {
        self.button == PointerButton::Middle || self.modifiers.space
    }
}

/// One wheel event. Negative `delta_y` zooms in.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WheelInput {
    pub position: ScreenPoint,
    pub delta_y: f32,
}

/// What the pointer went down on, resolved by the host's hit-testing.
///
/// The core keeps no spatial index; with a handful of DOM-rendered
/// entities, the event target already identifies the grabbed entity.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum HitTarget {
    Background,
    Item(ItemId),
    ItemHandle(ItemId),
    Rect(RectKind, RectId),
    RectHandle(RectKind, RectId, ResizeHandle),
}

/// Active tool mode.
///
/// `Select` manipulates existing entities; the three drawing tools create
/// rectangles with the two-click gesture. Whether resize handles are live
/// is a separate flag on the canvas, so shapes drawn earlier stay editable
/// after leaving draw mode.
#[derive(Clone, Copy, Debug, Default, Display, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Tool {
    #[default]
    Select,
    Wall,
    Window,
    Floor,
}

impl Tool {
    /// The rectangle kind this tool draws, if it is a drawing tool.
    pub fn rect_kind(&self) -> Option<RectKind> {
        match self {
            Tool::Select => None,
            Tool::Wall => Some(RectKind::Wall),
            Tool::Window => Some(RectKind::Window),
            Tool::Floor => Some(RectKind::Floor),
        }
    }
}
