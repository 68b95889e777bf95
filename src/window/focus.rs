//! Z-order registry for mounted windows.
//!
//! Every mutation leaves the z-indices of the mounted windows as exactly
//! `0..N` with no gaps or duplicates; the highest index is topmost.

use std::collections::BTreeMap;

use super::{Window, WindowId};
use crate::error::DesktopError;
use crate::layout::WindowRect;

#[derive(Debug, Clone, Default)]
pub struct FocusStack {
    windows: BTreeMap<WindowId, Window>,
}

impl FocusStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the registry with `windows`, assigning z-indices in mount order.
    /// On error the previous registry is kept as it was.
    pub fn initialize(
        &mut self,
        windows: impl IntoIterator<Item = Window>,
    ) -> Result<(), DesktopError> {
        let mut fresh = Self::new();
        for window in windows {
            fresh.mount(window)?;
        }
        *self = fresh;
        Ok(())
    }

    /// Mount a window on top of the stack.
    pub fn mount(&mut self, mut window: Window) -> Result<(), DesktopError> {
        let id = window.id();
        if self.windows.contains_key(&id) {
            return Err(DesktopError::DuplicateWindow(id));
        }
        window.set_z_index(self.windows.len());
        tracing::debug!(window_id = %id, z_index = window.z_index(), "mounted window");
        self.windows.insert(id, window);
        Ok(())
    }

    /// Remove a window and close the gap it leaves in the z-order.
    pub fn unmount(&mut self, id: WindowId) -> Result<Window, DesktopError> {
        let removed = self
            .windows
            .remove(&id)
            .ok_or(DesktopError::UnknownWindow(id))?;
        let cutoff = removed.z_index();
        for window in self.windows.values_mut() {
            if window.z_index() > cutoff {
                window.set_z_index(window.z_index() - 1);
            }
        }
        tracing::debug!(window_id = %id, "unmounted window");
        Ok(removed)
    }

    /// Bring `id` to the top. Windows that were above it shift down by one;
    /// the relative order of everything else is unchanged.
    pub fn promote(&mut self, id: WindowId) -> Result<(), DesktopError> {
        let cutoff = self
            .windows
            .get(&id)
            .map(Window::z_index)
            .ok_or(DesktopError::UnknownWindow(id))?;
        let top = self.windows.len().saturating_sub(1);
        if cutoff == top {
            return Ok(());
        }
        for (other_id, window) in self.windows.iter_mut() {
            if *other_id != id && window.z_index() > cutoff {
                window.set_z_index(window.z_index() - 1);
            }
        }
        if let Some(window) = self.windows.get_mut(&id) {
            window.set_z_index(top);
        }
        tracing::debug!(window_id = %id, from = cutoff, to = top, "promoted window");
        Ok(())
    }

    pub fn get(&self, id: WindowId) -> Option<&Window> {
        self.windows.get(&id)
    }

    pub fn contains(&self, id: WindowId) -> bool {
        self.windows.contains_key(&id)
    }

    pub fn z_index(&self, id: WindowId) -> Option<usize> {
        self.windows.get(&id).map(Window::z_index)
    }

    pub fn set_rect(&mut self, id: WindowId, rect: WindowRect) -> Result<(), DesktopError> {
        let window = self
            .windows
            .get_mut(&id)
            .ok_or(DesktopError::UnknownWindow(id))?;
        window.set_rect(rect);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.windows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }

    /// Windows from bottom to top.
    pub fn draw_order(&self) -> Vec<&Window> {
        let mut ordered: Vec<&Window> = self.windows.values().collect();
        ordered.sort_by_key(|window| window.z_index());
        ordered
    }

    pub fn topmost(&self) -> Option<WindowId> {
        self.windows
            .values()
            .max_by_key(|window| window.z_index())
            .map(Window::id)
    }

    /// True when the z-indices form the permutation `0..N`.
    pub fn is_consistent(&self) -> bool {
        let mut seen = vec![false; self.windows.len()];
        for window in self.windows.values() {
            match seen.get_mut(window.z_index()) {
                Some(slot) if !*slot => *slot = true,
                _ => return false,
            }
        }
        true
    }
}
