use glam::Vec2;
use scene::{FracPoint, ItemId, RectId, RectKind, ResizeHandle, ScreenPoint};

/// The single active gesture.
///
/// Stored as `Option<Gesture>` on the canvas, so exactly one interaction
/// can be live at a time by construction rather than by convention.
#[derive(Clone, Debug, PartialEq)]
pub enum Gesture {
    /// Moving a placed item. `grab` is the fractional offset between the
    /// initial touch point and the item's anchor, held for the whole drag
    /// so the item does not snap to the cursor.
    ItemDrag { id: ItemId, grab: Vec2 },

    /// Dragging an item's resize handle. Growth follows the dominant axis
    /// of the pointer delta: dragging toward bottom-right grows.
    ItemResize {
        id: ItemId,
        start_size: f32,
        start_pointer: ScreenPoint,
    },

    /// Two-click rectangle drawing: the start corner is set, and pointer
    /// moves update the draft preview until the second click commits.
    /// Survives pointer-up, unlike every other gesture.
    DrawRect { kind: RectKind, start: FracPoint },

    /// Moving a drawn rectangle, same grab-offset contract as `ItemDrag`.
    RectDrag {
        kind: RectKind,
        id: RectId,
        grab: Vec2,
    },

    /// Dragging one of a rectangle's eight resize handles.
    RectResize {
        kind: RectKind,
        id: RectId,
        handle: ResizeHandle,
    },

    /// Panning the view from the pointer position and pan recorded at
    /// gesture start.
    Pan {
        start_pointer: ScreenPoint,
        start_pan: Vec2,
    },

    /// Two-finger pinch: consecutive distance ratios feed zoom, consecutive
    /// midpoint deltas feed pan.
    Pinch {
        last_dist: f32,
        last_mid: ScreenPoint,
    },
}

impl Gesture {
    /// Gestures that commit one history entry when the pointer is released.
    ///
    /// Pan and pinch commit through the debounce timer instead, and rect
    /// drawing commits on its second click.
    pub fn commits_on_release(&self) -> bool {
        matches!(
            self,
            Gesture::ItemDrag { .. }
                | Gesture::ItemResize { .. }
                | Gesture::RectDrag { .. }
                | Gesture::RectResize { .. }
        )
    }
}
