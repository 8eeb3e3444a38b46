use crate::gesture::Gesture;
use crate::input::{HitTarget, PointerInput, PointerKind, Tool, WheelInput};
use glam::Vec2;
use history::{Debounce, History, DEBOUNCE_WINDOW};
use scene::{
    Background, FracPoint, FracRect, ItemId, ItemKind, RectId, RectKind, Scene, SceneError,
    SceneRect, ScreenPoint, ScreenRect,
};
use smallvec::SmallVec;
use std::time::{Duration, Instant};
use viewport::Viewport;

/// Whether rectangle geometry is kept inside the background box.
///
/// Early revisions of the editor clamped everything to the image; later
/// ones deliberately let walls and floors extend past it. Both behaviors
/// survive as a policy.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ClampMode {
    Clamp,
    #[default]
    Unclamped,
}

/// Tunables for a canvas session.
#[derive(Clone, Debug)]
pub struct CanvasConfig {
    /// Clamping policy for drawn rectangles. Item placement always clamps.
    pub rect_clamp: ClampMode,
    /// Zoom factor applied per wheel tick.
    pub wheel_step: f32,
    /// Quiet period before a continuous zoom/pan gets its history entry.
    pub debounce: Duration,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            rect_clamp: ClampMode::default(),
            wheel_step: 1.1,
            debounce: DEBOUNCE_WINDOW,
        }
    }
}

/// Events surfaced to the host for follow-up UI.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CanvasEvent {
    /// A rectangle was committed by the second click of the drawing
    /// gesture. For windows, the host prompts for the height next.
    RectAdded(RectKind, RectId),
}

/// An active touch contact.
#[derive(Clone, Copy, Debug)]
struct Touch {
    pointer: u64,
    position: ScreenPoint,
}

/// One editor session: the live scene, its undo history, and the gesture
/// state machine.
///
/// All methods are synchronous and none panic on odd input; a gesture that
/// cannot proceed is simply ignored, since event handlers must not throw.
/// The host supplies the canvas bounding rectangle on every call because it
/// changes with window resizes.
pub struct Canvas {
    pub scene: Scene,
    history: History<Scene>,
    tool: Tool,
    /// Whether resize handles are interactive. Independent of the tool so
    /// shapes stay editable after leaving draw mode.
    pub selecting: bool,
    gesture: Option<Gesture>,
    touches: SmallVec<[Touch; 2]>,
    /// Live preview box while a rectangle is being drawn.
    draft: Option<FracRect>,
    view_commit: Debounce,
    config: CanvasConfig,
}

impl Canvas {
    pub fn new() -> Self {
        Self::with_config(CanvasConfig::default())
    }

    pub fn with_config(config: CanvasConfig) -> Self {
        let scene = Scene::new();
        Self {
            history: History::new(scene.clone()),
            scene,
            tool: Tool::Select,
            selecting: false,
            gesture: None,
            touches: SmallVec::new(),
            draft: None,
            view_commit: Debounce::new(config.debounce),
            config,
        }
    }

    /// Projection for the current scene under the given canvas rectangle.
    pub fn viewport(&self, rect: ScreenRect) -> Viewport {
        Viewport::of(rect, &self.scene.background, self.scene.pan)
    }

    pub fn tool(&self) -> Tool {
        self.tool
    }

    /// Switch tools. Abandons a half-finished rectangle draw.
    pub fn set_tool(&mut self, tool: Tool) {
        if self.tool != tool {
            self.tool = tool;
            if matches!(self.gesture, Some(Gesture::DrawRect { .. })) {
                self.gesture = None;
            }
            self.draft = None;
        }
    }

    /// The dashed preview rectangle, while drawing.
    pub fn draft(&self) -> Option<FracRect> {
        self.draft
    }

    pub fn gesture(&self) -> Option<&Gesture> {
        self.gesture.as_ref()
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    // --- pointer events -------------------------------------------------

    pub fn pointer_down(
        &mut self,
        rect: ScreenRect,
        input: PointerInput,
        hit: HitTarget,
    ) -> Option<CanvasEvent> {
        // Settle any debounced zoom/pan commit before a new gesture starts
        // mutating the scene, so the view change and the gesture land in
        // separate history entries.
        self.flush_pending();

        if input.kind == PointerKind::Touch {
            self.touch_down(input);
            if self.touches.len() == 2 {
                self.begin_pinch();
                return None;
            }
        }

        if input.is_pan_trigger() {
            self.gesture = Some(Gesture::Pan {
                start_pointer: input.position,
                start_pan: self.scene.pan,
            });
            return None;
        }

        if let Some(kind) = self.tool.rect_kind() {
            return self.draw_click(rect, kind, input.position);
        }

        let vp = self.viewport(rect);
        match hit {
            HitTarget::Item(id) => {
                if let Some(item) = self.scene.item(id) {
                    let frac = vp.screen_to_frac(input.position);
                    self.gesture = Some(Gesture::ItemDrag {
                        id,
                        grab: frac - item.pos,
                    });
                }
            }
            HitTarget::ItemHandle(id) if self.selecting => {
                if let Some(item) = self.scene.item(id) {
                    self.gesture = Some(Gesture::ItemResize {
                        id,
                        start_size: item.size,
                        start_pointer: input.position,
                    });
                }
            }
            HitTarget::Rect(kind, id) => {
                if let Some(rect) = self.scene.rect(kind, id) {
                    let frac = vp.screen_to_frac(input.position);
                    self.gesture = Some(Gesture::RectDrag {
                        kind,
                        id,
                        grab: frac.0 - rect.rect.origin,
                    });
                }
            }
            HitTarget::RectHandle(kind, id, handle) if self.selecting => {
                if self.scene.rect(kind, id).is_some() {
                    self.gesture = Some(Gesture::RectResize { kind, id, handle });
                }
            }
            _ => {}
        }
        None
    }

    pub fn pointer_move(&mut self, rect: ScreenRect, input: PointerInput) {
        if input.kind == PointerKind::Touch {
            self.touch_move(input);
            if matches!(self.gesture, Some(Gesture::Pinch { .. })) {
                self.pinch_update(rect);
                return;
            }
        }

        // Copy the gesture out so scene mutation below can't fight the borrow.
        let gesture = match self.gesture.clone() {
            Some(gesture) => gesture,
            None => return,
        };
        let vp = self.viewport(rect);

        match gesture {
            Gesture::ItemDrag { id, grab } => {
                let frac = vp.screen_to_frac(input.position);
                if let Some(item) = self.scene.item_mut(id) {
                    item.move_to(FracPoint(frac.0 - grab));
                }
            }
            Gesture::ItemResize {
                id,
                start_size,
                start_pointer,
            } => {
                let delta = (input.position - start_pointer).0;
                let grow = delta.x.max(delta.y);
                if let Some(item) = self.scene.item_mut(id) {
                    item.set_size(start_size + grow);
                }
            }
            Gesture::DrawRect { kind: _, start } => {
                let current = self.draw_point(&vp, input.position);
                self.draft = Some(self.apply_clamp(FracRect::from_corners(start, current)));
            }
            Gesture::RectDrag { kind, id, grab } => {
                let frac = vp.screen_to_frac(input.position);
                let origin = frac.0 - grab;
                let clamp = self.config.rect_clamp;
                if let Some(target) = self.scene.rect_mut(kind, id) {
                    let moved = target.rect.moved_to(origin);
                    target.rect = match clamp {
                        ClampMode::Clamp => moved.clamped_to_unit(),
                        ClampMode::Unclamped => moved,
                    };
                }
            }
            Gesture::RectResize { kind, id, handle } => {
                let frac = vp.screen_to_frac(input.position);
                let clamp = self.config.rect_clamp;
                if let Some(target) = self.scene.rect_mut(kind, id) {
                    let resized = target.rect.resized(handle, frac);
                    target.rect = match clamp {
                        ClampMode::Clamp => resized.clamped_to_unit(),
                        ClampMode::Unclamped => resized,
                    };
                }
            }
            Gesture::Pan {
                start_pointer,
                start_pan,
            } => {
                self.scene.pan = start_pan + (input.position - start_pointer).0;
            }
            Gesture::Pinch { .. } => {}
        }
    }

    pub fn pointer_up(&mut self, _rect: ScreenRect, input: PointerInput, now: Instant) {
        if input.kind == PointerKind::Touch {
            self.touches.retain(|t| t.pointer != input.pointer);
        }

        match &self.gesture {
            Some(Gesture::Pinch { .. }) => {
                if self.touches.len() < 2 {
                    self.gesture = None;
                    self.view_commit.touch(now);
                }
            }
            Some(Gesture::Pan { .. }) => {
                self.gesture = None;
                // Pan is a continuous gesture; commit after it pauses.
                self.view_commit.touch(now);
            }
            Some(Gesture::DrawRect { .. }) => {
                // Two-click gesture: release does not end it.
            }
            Some(gesture) if gesture.commits_on_release() => {
                self.gesture = None;
                self.commit();
            }
            _ => {}
        }
    }

    /// Pointer capture lost or the gesture was otherwise interrupted.
    ///
    /// Resets all gesture tracking without committing. The scene keeps
    /// whatever intermediate state it reached; there is deliberately no
    /// rollback (matching the observed editor behavior).
    pub fn pointer_cancel(&mut self, _input: PointerInput) {
        self.gesture = None;
        self.draft = None;
        self.touches.clear();
    }

    pub fn wheel(&mut self, rect: ScreenRect, input: WheelInput, now: Instant) {
        let factor = if input.delta_y < 0.0 {
            self.config.wheel_step
        } else {
            1.0 / self.config.wheel_step
        };

        let zoomed = self.viewport(rect).zoom_at(input.position, factor);
        self.scene.background.scale = zoomed.scale;
        self.scene.pan = zoomed.pan;
        self.view_commit.touch(now);
    }

    /// Drive the debounce clock. Call periodically (or after the debounce
    /// window in tests); performs the delayed zoom/pan commit when due.
    /// Returns whether a history entry was added.
    pub fn tick(&mut self, now: Instant) -> bool {
        if self.view_commit.fire(now) {
            self.commit()
        } else {
            false
        }
    }

    // --- direct operations ----------------------------------------------

    /// Place a new item at a screen position (palette drop or click-place).
    pub fn place_item(&mut self, rect: ScreenRect, kind: ItemKind, at: ScreenPoint) -> ItemId {
        let pos = self.viewport(rect).screen_to_frac_clamped(at);
        let id = self.scene.place_item(kind, pos);
        log::debug!("placed {kind} as {id}");
        self.commit();
        id
    }

    /// Destroy an item (double-click). Returns whether it existed.
    pub fn remove_item(&mut self, id: ItemId) -> bool {
        if self.scene.remove_item(id) {
            self.commit();
            true
        } else {
            false
        }
    }

    /// Record a window's real-world height after the post-draw prompt.
    pub fn set_window_height(&mut self, id: RectId, height_cm: f32) -> Result<(), SceneError> {
        self.scene.set_window_height(id, height_cm)?;
        self.commit();
        Ok(())
    }

    /// Remove every rectangle of one kind.
    pub fn clear_rects(&mut self, kind: RectKind) {
        self.scene.clear_rects(kind);
        self.commit();
    }

    /// Remove all items and rectangles.
    pub fn clear(&mut self) {
        self.scene.clear();
        self.commit();
    }

    /// Install a freshly decoded background image and reset the view.
    pub fn set_background(&mut self, source: impl Into<String>, natural: Vec2) {
        self.scene.background = Background::from_image(source, natural);
        self.scene.pan = Vec2::ZERO;
        self.commit();
    }

    /// Drop the background image, falling back to the virtual world box.
    pub fn remove_background(&mut self) {
        self.scene.background = Background::none();
        self.scene.pan = Vec2::ZERO;
        self.commit();
    }

    pub fn undo(&mut self) -> bool {
        self.flush_pending();
        match self.history.undo() {
            Some(snapshot) => {
                self.scene = snapshot;
                true
            }
            None => false,
        }
    }

    pub fn redo(&mut self) -> bool {
        self.flush_pending();
        match self.history.redo() {
            Some(snapshot) => {
                self.scene = snapshot;
                true
            }
            None => false,
        }
    }

    // --- internals ------------------------------------------------------

    /// One click of the two-click rectangle drawing gesture.
    fn draw_click(
        &mut self,
        rect: ScreenRect,
        kind: RectKind,
        position: ScreenPoint,
    ) -> Option<CanvasEvent> {
        let vp = self.viewport(rect);
        let point = self.draw_point(&vp, position);

        match self.gesture {
            Some(Gesture::DrawRect { kind: active, start }) if active == kind => {
                let shape = self.apply_clamp(FracRect::from_corners(start, point));
                let id = self.scene.add_rect(SceneRect::new(kind, shape));
                log::debug!("drew {kind} rect {id}");
                self.gesture = None;
                self.draft = None;
                self.commit();
                Some(CanvasEvent::RectAdded(kind, id))
            }
            _ => {
                self.gesture = Some(Gesture::DrawRect { kind, start: point });
                self.draft = Some(FracRect::new(point.0, Vec2::ZERO));
                None
            }
        }
    }

    fn draw_point(&self, vp: &Viewport, position: ScreenPoint) -> FracPoint {
        match self.config.rect_clamp {
            ClampMode::Clamp => vp.screen_to_frac_clamped(position),
            ClampMode::Unclamped => vp.screen_to_frac(position),
        }
    }

    fn apply_clamp(&self, rect: FracRect) -> FracRect {
        match self.config.rect_clamp {
            ClampMode::Clamp => rect.clamped_to_unit(),
            ClampMode::Unclamped => rect.with_min_side(),
        }
    }

    fn touch_down(&mut self, input: PointerInput) {
        if let Some(touch) = self.touches.iter_mut().find(|t| t.pointer == input.pointer) {
            touch.position = input.position;
        } else if self.touches.len() < 2 {
            self.touches.push(Touch {
                pointer: input.pointer,
                position: input.position,
            });
        }
    }

    fn touch_move(&mut self, input: PointerInput) {
        if let Some(touch) = self.touches.iter_mut().find(|t| t.pointer == input.pointer) {
            touch.position = input.position;
        }
    }

    fn begin_pinch(&mut self) {
        let (a, b) = (self.touches[0], self.touches[1]);
        self.gesture = Some(Gesture::Pinch {
            last_dist: (b.position.0 - a.position.0).length(),
            last_mid: ScreenPoint((a.position.0 + b.position.0) / 2.0),
        });
        self.draft = None;
    }

    fn pinch_update(&mut self, rect: ScreenRect) {
        if self.touches.len() != 2 {
            return;
        }
        let (a, b) = (self.touches[0], self.touches[1]);
        let dist = (b.position.0 - a.position.0).length();
        let mid = ScreenPoint((a.position.0 + b.position.0) / 2.0);

        if let Some(Gesture::Pinch {
            last_dist,
            last_mid,
        }) = self.gesture.clone()
        {
            if last_dist > 1.0 && dist > 1.0 {
                let factor = dist / last_dist;
                let zoomed = self.viewport(rect).zoom_at(mid, factor);
                self.scene.background.scale = zoomed.scale;
                self.scene.pan = zoomed.pan;
            }
            // Midpoint drift pans, so a pinch can pan and zoom at once.
            self.scene.pan += mid.0 - last_mid.0;
            self.gesture = Some(Gesture::Pinch {
                last_dist: dist,
                last_mid: mid,
            });
        }
    }

    /// Snapshot the live scene if it differs from the current history entry.
    fn commit(&mut self) -> bool {
        self.history.commit(&self.scene)
    }

    /// Perform a scheduled debounced commit immediately, if one is pending.
    /// Keeps history deterministic when undo, redo, or a fresh gesture
    /// races the debounce window.
    fn flush_pending(&mut self) {
        if self.view_commit.cancel() {
            self.commit();
        }
    }
}

impl Default for Canvas {
    fn default() -> Self {
        Self::new()
    }
}
