//! Shared component rendering context
//!
//! `ComponentContext` carries UI metadata that components may need during
//! rendering. It keeps the component trait stable instead of threading ad-hoc
//! boolean parameters through every call.

use crate::window::WindowId;

#[derive(Debug, Clone, Copy, Default)]
pub struct ComponentContext {
    focused: bool,
    window: Option<WindowId>,
}

impl ComponentContext {
    pub const fn new(focused: bool) -> Self {
        Self {
            focused,
            window: None,
        }
    }

    /// Whether the component's window currently holds input focus.
    pub const fn focused(&self) -> bool {
        self.focused
    }

    /// Window the component is rendered inside, if any.
    pub const fn window(&self) -> Option<WindowId> {
        self.window
    }

    pub const fn with_window(mut self, window: WindowId) -> Self {
        self.window = Some(window);
        self
    }
}
