use ratatui::style::Style;

use super::{Component, ComponentContext};
use crate::layout::WindowRect;
use crate::theme;
use crate::ui::UiFrame;

const PATTERN_STEP_X: i32 = 6;
const PATTERN_STEP_Y: i32 = 3;

/// Desktop background: a flat fill with a sparse dot pattern and a label in
/// the bottom-right corner.
#[derive(Debug, Clone)]
pub struct WallpaperComponent {
    label: String,
}

impl WallpaperComponent {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
        }
    }
}

impl Default for WallpaperComponent {
    fn default() -> Self {
        Self::new(concat!("desk-wm ", env!("CARGO_PKG_VERSION")))
    }
}

impl Component for WallpaperComponent {
    fn render(&mut self, frame: &mut UiFrame<'_>, area: WindowRect, _ctx: &ComponentContext) {
        let style = Style::default()
            .bg(theme::wallpaper_bg())
            .fg(theme::wallpaper_fg());
        frame.fill_signed(area, " ", style);
        for y in (area.top..area.bottom()).step_by(PATTERN_STEP_Y as usize) {
            let shift = if (y - area.top) / PATTERN_STEP_Y % 2 == 0 {
                0
            } else {
                PATTERN_STEP_X / 2
            };
            for x in (area.left + shift..area.right()).step_by(PATTERN_STEP_X as usize) {
                frame.put_signed(x, y, "·", style);
            }
        }
        let label_len = self.label.chars().count() as i32;
        frame.text_signed(
            area.right() - label_len - 1,
            area.bottom() - 1,
            &self.label,
            style,
        );
    }
}
