pub mod floating;

pub use floating::*;

use ratatui::prelude::Rect;

/// Pointer position in client coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Signed window rectangle. The origin may sit off-screen after a move; the
/// size is never negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WindowRect {
    pub top: i32,
    pub left: i32,
    pub width: i32,
    pub height: i32,
}

impl WindowRect {
    pub const fn new(left: i32, top: i32, width: i32, height: i32) -> Self {
        Self {
            top,
            left,
            width,
            height,
        }
    }

    pub fn right(&self) -> i32 {
        self.left + self.width
    }

    pub fn bottom(&self) -> i32 {
        self.top + self.height
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    pub fn contains(&self, point: Point) -> bool {
        rect_contains(*self, point)
    }

    /// Part of this rectangle that lies inside `bounds`, as a drawable cell rect.
    pub fn clip_to(&self, bounds: Rect) -> Option<Rect> {
        let x0 = self.left.max(bounds.x as i32);
        let y0 = self.top.max(bounds.y as i32);
        let x1 = self.right().min(bounds.x as i32 + bounds.width as i32);
        let y1 = self.bottom().min(bounds.y as i32 + bounds.height as i32);
        if x1 <= x0 || y1 <= y0 {
            return None;
        }
        Some(Rect {
            x: x0 as u16,
            y: y0 as u16,
            width: (x1 - x0) as u16,
            height: (y1 - y0) as u16,
        })
    }
}

impl From<Rect> for WindowRect {
    fn from(rect: Rect) -> Self {
        Self::new(
            rect.x as i32,
            rect.y as i32,
            rect.width as i32,
            rect.height as i32,
        )
    }
}

pub fn rect_contains(rect: WindowRect, point: Point) -> bool {
    if rect.is_empty() {
        return false;
    }
    point.x >= rect.left && point.x < rect.right() && point.y >= rect.top && point.y < rect.bottom()
}
