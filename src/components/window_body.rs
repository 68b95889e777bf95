use ratatui::style::{Modifier, Style};

use super::{Component, ComponentContext};
use crate::layout::WindowRect;
use crate::theme;
use crate::ui::UiFrame;
use crate::window::Window;

/// Placeholder content for a window: its live geometry and stacking slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowBodyComponent {
    lines: Vec<String>,
}

impl WindowBodyComponent {
    pub fn for_window(window: &Window) -> Self {
        let rect = window.rect();
        let mut lines = vec![
            format!("z-index {}", window.z_index()),
            format!("{}x{} at {},{}", rect.width, rect.height, rect.left, rect.top),
        ];
        if window.resizable() {
            lines.push("drag the border to resize".to_string());
        } else {
            lines.push("fixed size".to_string());
        }
        Self { lines }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }
}

impl Component for WindowBodyComponent {
    fn render(&mut self, frame: &mut UiFrame<'_>, area: WindowRect, ctx: &ComponentContext) {
        let mut style = Style::default().bg(theme::body_bg()).fg(theme::body_fg());
        frame.fill_signed(area, " ", style);
        if ctx.focused() {
            style = style.add_modifier(Modifier::BOLD);
        }
        let max_chars = area.width.saturating_sub(2).max(0) as usize;
        for (row, line) in self.lines.iter().enumerate() {
            let y = area.top + row as i32;
            if y >= area.bottom() {
                break;
            }
            let text: String = line.chars().take(max_chars).collect();
            frame.text_signed(area.left + 1, y, &text, style);
        }
    }
}
