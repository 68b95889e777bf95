//! Pointer protocol for the desktop: focus on press, drag sessions on handles.
//!
//! `DesktopController` owns the window registry and the single optional drag
//! session. Handlers run to completion one event at a time; anything they
//! cannot act on (no session, no target, unknown window, unreadable
//! coordinates) is ignored rather than reported.

use ratatui::prelude::Rect;

use crate::drivers::pointer::{PointerInput, PointerPhase};
use crate::error::DesktopError;
use crate::layout::{HandleKind, Point, WindowMetrics, WindowRect, drag_patch};
use crate::window::{ElementId, ElementTree, FocusStack, Window, WindowId, classify};

/// An in-progress move or resize. Anchor and start rect stay frozen for the
/// whole session so every update is computed from the drag origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragSession {
    pub window: WindowId,
    pub kind: HandleKind,
    pub anchor: Point,
    pub start_rect: WindowRect,
}

/// Where input focus should go, handed to the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DesktopFocus {
    Desktop,
    Window(WindowId),
}

/// Result of dispatching one pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PointerResponse {
    /// The host should suppress its default gesture handling for this event.
    pub prevent_default: bool,
    /// Window geometry, stacking or focus changed.
    pub changed: bool,
}

#[derive(Debug, Clone)]
pub struct DesktopController {
    stack: FocusStack,
    metrics: WindowMetrics,
    drag: Option<DragSession>,
    focus: DesktopFocus,
    focus_dirty: bool,
    prevent_touch_default: bool,
}

impl DesktopController {
    pub fn new(metrics: WindowMetrics) -> Self {
        Self {
            stack: FocusStack::new(),
            metrics,
            drag: None,
            focus: DesktopFocus::Desktop,
            focus_dirty: false,
            prevent_touch_default: false,
        }
    }

    /// Also suppress default gestures for touch input. Off by default so
    /// scrolling keeps working elsewhere on touch devices.
    pub fn with_touch_prevent_default(mut self, enabled: bool) -> Self {
        self.prevent_touch_default = enabled;
        self
    }

    pub fn metrics(&self) -> &WindowMetrics {
        &self.metrics
    }

    pub fn stack(&self) -> &FocusStack {
        &self.stack
    }

    pub fn window(&self, id: WindowId) -> Option<&Window> {
        self.stack.get(id)
    }

    pub fn drag_session(&self) -> Option<&DragSession> {
        self.drag.as_ref()
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    pub fn focus(&self) -> DesktopFocus {
        self.focus
    }

    /// Focus handoff since the last call, if focus moved.
    pub fn take_focus_change(&mut self) -> Option<DesktopFocus> {
        if self.focus_dirty {
            self.focus_dirty = false;
            Some(self.focus)
        } else {
            None
        }
    }

    pub fn initialize(
        &mut self,
        windows: impl IntoIterator<Item = Window>,
    ) -> Result<(), DesktopError> {
        self.stack.initialize(windows)?;
        self.drag = None;
        self.set_focus(DesktopFocus::Desktop);
        Ok(())
    }

    pub fn mount(&mut self, window: Window) -> Result<(), DesktopError> {
        self.stack.mount(window)
    }

    /// Removes a window. A drag on it ends and focus falls back to the
    /// desktop if it was focused.
    pub fn unmount(&mut self, id: WindowId) -> Result<Window, DesktopError> {
        let removed = self.stack.unmount(id)?;
        if self.drag.is_some_and(|drag| drag.window == id) {
            tracing::debug!(window_id = %id, "drag target unmounted, ending session");
            self.drag = None;
        }
        if self.focus == DesktopFocus::Window(id) {
            self.set_focus(DesktopFocus::Desktop);
        }
        Ok(removed)
    }

    /// Routes a pointer event to the handler for its phase.
    pub fn handle_pointer(
        &mut self,
        input: &PointerInput,
        target: Option<ElementId>,
        tree: &ElementTree,
    ) -> PointerResponse {
        match input.phase() {
            Some(PointerPhase::Down) => self.pointer_down(input, target, tree),
            Some(PointerPhase::Move) => self.pointer_move(input),
            Some(PointerPhase::Up) => self.pointer_up(input),
            None => {
                tracing::trace!(?input, "ignoring pointer event without a phase");
                PointerResponse::default()
            }
        }
    }

    pub fn pointer_down(
        &mut self,
        input: &PointerInput,
        target: Option<ElementId>,
        tree: &ElementTree,
    ) -> PointerResponse {
        let Some(target) = target.filter(|id| tree.contains(*id)) else {
            tracing::trace!("pointer down without a target");
            return PointerResponse::default();
        };
        let Some(position) = input.position() else {
            tracing::trace!(?input, "pointer down without coordinates");
            return PointerResponse::default();
        };
        if let Some(stale) = self.drag.take() {
            // No pointer-up arrived for the previous drag.
            tracing::debug!(
                window_id = %stale.window,
                kind = %stale.kind,
                "replacing stale drag session"
            );
        }

        let class = classify(tree, target);
        let owner = class.window.filter(|id| self.stack.contains(*id));
        let mut changed = false;

        match owner {
            Some(id) if class.is_focusable() => {
                if self.stack.topmost() != Some(id) {
                    changed = true;
                }
                if self.stack.promote(id).is_ok() {
                    changed |= self.set_focus(DesktopFocus::Window(id));
                }
            }
            _ => {
                changed |= self.set_focus(DesktopFocus::Desktop);
            }
        }

        if let (Some(kind), Some(id)) = (class.handle, owner)
            && let Some(window) = self.stack.get(id)
        {
            if kind.is_resize() && !window.resizable() {
                tracing::trace!(window_id = %id, %kind, "resize handle on fixed-size window");
            } else {
                let session = DragSession {
                    window: id,
                    kind,
                    anchor: position,
                    start_rect: window.rect(),
                };
                tracing::debug!(
                    window_id = %id,
                    %kind,
                    x = position.x,
                    y = position.y,
                    "drag started"
                );
                self.drag = Some(session);
            }
        }

        PointerResponse {
            prevent_default: self.prevents_default(input),
            changed,
        }
    }

    pub fn pointer_move(&mut self, input: &PointerInput) -> PointerResponse {
        let Some(session) = self.drag else {
            return PointerResponse::default();
        };
        let Some(position) = input.position() else {
            tracing::trace!(?input, "pointer move without coordinates");
            return PointerResponse::default();
        };
        let Some(current) = self.stack.get(session.window).map(Window::rect) else {
            self.drag = None;
            return PointerResponse::default();
        };

        let patch = drag_patch(
            session.kind,
            session.start_rect,
            session.anchor,
            position,
            &self.metrics,
        );
        let next = patch.apply_to(current);
        let changed = next != current;
        if changed && self.stack.set_rect(session.window, next).is_err() {
            self.drag = None;
            return PointerResponse::default();
        }
        PointerResponse {
            prevent_default: self.prevents_default(input),
            changed,
        }
    }

    pub fn pointer_up(&mut self, input: &PointerInput) -> PointerResponse {
        let Some(session) = self.drag.take() else {
            return PointerResponse::default();
        };
        let rect = self.stack.get(session.window).map(Window::rect);
        tracing::debug!(window_id = %session.window, kind = %session.kind, ?rect, "drag ended");
        PointerResponse {
            prevent_default: self.prevents_default(input),
            changed: false,
        }
    }

    fn prevents_default(&self, input: &PointerInput) -> bool {
        !input.is_touch() || self.prevent_touch_default
    }

    fn set_focus(&mut self, focus: DesktopFocus) -> bool {
        if self.focus == focus {
            return false;
        }
        tracing::debug!(?focus, "focus handoff");
        self.focus = focus;
        self.focus_dirty = true;
        true
    }
}

/// Refuses to engage the desktop on viewports smaller than the minimum.
pub fn ensure_viewport(area: Rect, min_width: u16, min_height: u16) -> Result<(), DesktopError> {
    if area.width < min_width || area.height < min_height {
        return Err(DesktopError::ViewportTooSmall {
            width: area.width,
            height: area.height,
            min_width,
            min_height,
        });
    }
    Ok(())
}
