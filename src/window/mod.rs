pub mod decorator;
pub mod element;
pub mod focus;

use std::fmt;

use crate::layout::WindowRect;

pub use element::{Classification, ElementId, ElementTree, Marker, classify};
pub use focus::FocusStack;

/// Stable window identity, also used as the rendering key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WindowId(pub usize);

impl fmt::Display for WindowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One managed window. The z-index is owned by [`FocusStack`] and assigned
/// on mount.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Window {
    id: WindowId,
    z_index: usize,
    rect: WindowRect,
    resizable: bool,
    title: Option<String>,
}

impl Window {
    pub fn new(id: WindowId, rect: WindowRect) -> Self {
        Self {
            id,
            z_index: 0,
            rect,
            resizable: true,
            title: None,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_resizable(mut self, resizable: bool) -> Self {
        self.resizable = resizable;
        self
    }

    pub fn id(&self) -> WindowId {
        self.id
    }

    pub fn z_index(&self) -> usize {
        self.z_index
    }

    pub fn rect(&self) -> WindowRect {
        self.rect
    }

    pub fn resizable(&self) -> bool {
        self.resizable
    }

    pub fn title_or_default(&self) -> String {
        self.title
            .clone()
            .unwrap_or_else(|| format!("Window {}", self.id.0))
    }

    pub(crate) fn set_z_index(&mut self, z_index: usize) {
        self.z_index = z_index;
    }

    pub(crate) fn set_rect(&mut self, rect: WindowRect) {
        self.rect = rect;
    }
}
