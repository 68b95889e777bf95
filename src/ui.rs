//! UiFrame: a thin wrapper around `ratatui::Frame` that clips drawing to the
//! visible area.
//!
//! Windows can be dragged partly (or entirely) off-screen, so their rects are
//! signed. Everything the desktop paints goes through `UiFrame`, which clips
//! those rects to the terminal buffer instead of letting out-of-range writes
//! reach `Buffer` and panic.
use crate::layout::WindowRect;
use ratatui::Frame;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::Widget;

pub struct UiFrame<'a> {
    area: Rect,
    buffer: &'a mut Buffer,
}

impl<'a> UiFrame<'a> {
    pub fn new(frame: &'a mut Frame<'_>) -> Self {
        let area = frame.area();
        let buffer = frame.buffer_mut();
        Self { area, buffer }
    }

    /// Construct a `UiFrame` directly from an area and buffer, for offscreen
    /// rendering and tests.
    pub fn from_parts(area: Rect, buffer: &'a mut Buffer) -> Self {
        Self { area, buffer }
    }

    pub fn area(&self) -> Rect {
        self.area
    }

    pub fn buffer_mut(&mut self) -> &mut Buffer {
        self.buffer
    }

    fn clip_rect(&self, rect: Rect) -> Option<Rect> {
        let clipped = rect.intersection(self.area);
        if clipped.width == 0 || clipped.height == 0 {
            None
        } else {
            Some(clipped)
        }
    }

    pub fn render_widget<W>(&mut self, widget: W, area: Rect)
    where
        W: Widget,
    {
        if let Some(clipped) = self.clip_rect(area) {
            widget.render(clipped, self.buffer);
        }
    }

    /// Visible part of a signed window rect.
    pub fn clip_signed(&self, rect: WindowRect) -> Option<Rect> {
        rect.clip_to(self.area)
    }

    /// Fill the visible part of `rect` with `symbol`.
    pub fn fill_signed(&mut self, rect: WindowRect, symbol: &str, style: Style) {
        let Some(visible) = self.clip_signed(rect) else {
            return;
        };
        for y in visible.y..visible.y.saturating_add(visible.height) {
            for x in visible.x..visible.x.saturating_add(visible.width) {
                if let Some(cell) = self.buffer.cell_mut((x, y)) {
                    cell.set_symbol(symbol);
                    cell.set_style(style);
                }
            }
        }
    }

    /// Set one cell at signed coordinates; off-screen cells are skipped.
    pub fn put_signed(&mut self, x: i32, y: i32, symbol: &str, style: Style) {
        if self
            .clip_signed(WindowRect::new(x, y, 1, 1))
            .is_none()
        {
            return;
        }
        if let Some(cell) = self.buffer.cell_mut((x as u16, y as u16)) {
            cell.set_symbol(symbol);
            cell.set_style(style);
        }
    }

    /// Write `text` starting at signed coordinates, clipping on both sides.
    pub fn text_signed(&mut self, x: i32, y: i32, text: &str, style: Style) {
        for (idx, ch) in text.chars().enumerate() {
            let mut buf = [0u8; 4];
            self.put_signed(x + idx as i32, y, ch.encode_utf8(&mut buf), style);
        }
    }
}
