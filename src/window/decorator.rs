use ratatui::style::{Modifier, Style};

use super::Window;
use crate::components::{Component, ComponentContext, WindowBodyComponent};
use crate::layout::{WindowMetrics, WindowRect, window_regions};
use crate::theme;
use crate::ui::UiFrame;

/// Minimize / maximize / close glyphs. Drawn for familiarity only; they are
/// not wired to any window action.
const CONTROL_GLYPHS: &str = "_ □ x";

pub trait WindowDecorator: std::fmt::Debug {
    /// Paints `window`. The titlebar spans `metrics.body_margin` rows.
    fn render_window(
        &self,
        frame: &mut UiFrame<'_>,
        window: &Window,
        metrics: &WindowMetrics,
        focused: bool,
    );
}

#[derive(Debug, Default)]
pub struct DefaultDecorator;

struct BorderGlyphs {
    horizontal: &'static str,
    vertical: &'static str,
    top_left: &'static str,
    top_right: &'static str,
    bottom_left: &'static str,
    bottom_right: &'static str,
}

const SINGLE: BorderGlyphs = BorderGlyphs {
    horizontal: "─",
    vertical: "│",
    top_left: "┌",
    top_right: "┐",
    bottom_left: "└",
    bottom_right: "┘",
};

const DOUBLE: BorderGlyphs = BorderGlyphs {
    horizontal: "═",
    vertical: "║",
    top_left: "╔",
    top_right: "╗",
    bottom_left: "╚",
    bottom_right: "╝",
};

impl WindowDecorator for DefaultDecorator {
    fn render_window(
        &self,
        frame: &mut UiFrame<'_>,
        window: &Window,
        metrics: &WindowMetrics,
        focused: bool,
    ) {
        let rect = window.rect();
        if rect.is_empty() {
            return;
        }
        let regions = window_regions(rect, window.resizable(), metrics);

        let mut body = WindowBodyComponent::for_window(window);
        let ctx = ComponentContext::new(focused).with_window(window.id());
        body.render(frame, regions.body, &ctx);

        let (glyphs, border_style) = if focused {
            (&DOUBLE, Style::default().fg(theme::border_focused()))
        } else {
            (&SINGLE, Style::default().fg(theme::border()))
        };
        let border_style = border_style.bg(theme::body_bg());
        draw_border(frame, rect, glyphs, border_style);

        let header_style = Style::default()
            .bg(if focused {
                theme::titlebar_focused_bg()
            } else {
                theme::titlebar_unfocused_bg()
            })
            .fg(theme::titlebar_fg())
            .add_modifier(Modifier::BOLD);
        let header = WindowRect::new(
            rect.left + 1,
            rect.top + 1,
            rect.width - 2,
            metrics.body_margin.min(rect.height - 2),
        );
        if header.height <= 0 || header.width <= 0 {
            return;
        }
        frame.fill_signed(header, " ", header_style);

        let controls_len = CONTROL_GLYPHS.chars().count() as i32;
        let title_room = header.width - controls_len - 2;
        if title_room > 0 {
            let title: String = window
                .title_or_default()
                .chars()
                .take(title_room as usize)
                .collect();
            frame.text_signed(header.left + 1, header.top, &title, header_style);
        }
        if header.width > controls_len {
            frame.text_signed(
                header.right() - controls_len - 1,
                header.top,
                CONTROL_GLYPHS,
                header_style,
            );
        }
    }
}

fn draw_border(frame: &mut UiFrame<'_>, rect: WindowRect, glyphs: &BorderGlyphs, style: Style) {
    let right = rect.right() - 1;
    let bottom = rect.bottom() - 1;
    for x in rect.left + 1..right {
        frame.put_signed(x, rect.top, glyphs.horizontal, style);
        frame.put_signed(x, bottom, glyphs.horizontal, style);
    }
    for y in rect.top + 1..bottom {
        frame.put_signed(rect.left, y, glyphs.vertical, style);
        frame.put_signed(right, y, glyphs.vertical, style);
    }
    frame.put_signed(rect.left, rect.top, glyphs.top_left, style);
    frame.put_signed(right, rect.top, glyphs.top_right, style);
    frame.put_signed(rect.left, bottom, glyphs.bottom_left, style);
    frame.put_signed(right, bottom, glyphs.bottom_right, style);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::window::WindowId;
    use ratatui::buffer::Buffer;
    use ratatui::layout::Rect;

    fn render(window: &Window, focused: bool) -> Buffer {
        render_with(window, &WindowMetrics::default(), focused)
    }

    fn render_with(window: &Window, metrics: &WindowMetrics, focused: bool) -> Buffer {
        let rect = Rect {
            x: 0,
            y: 0,
            width: 40,
            height: 12,
        };
        let mut buf = Buffer::empty(rect);
        let mut frame = UiFrame::from_parts(rect, &mut buf);
        DefaultDecorator.render_window(&mut frame, window, metrics, focused);
        buf
    }

    #[test]
    fn draws_border_title_and_controls() {
        let window =
            Window::new(WindowId(0), WindowRect::new(2, 1, 24, 8)).with_title("Notes");
        let buf = render(&window, false);
        assert_eq!(buf.cell((2, 1)).unwrap().symbol(), "┌");
        assert_eq!(buf.cell((25, 8)).unwrap().symbol(), "┘");
        assert_eq!(buf.cell((4, 2)).unwrap().symbol(), "N");
        assert_eq!(buf.cell((23, 2)).unwrap().symbol(), "x");
        assert_eq!(buf.cell((10, 2)).unwrap().bg, theme::titlebar_unfocused_bg());
    }

    #[test]
    fn focused_window_uses_double_border() {
        let window = Window::new(WindowId(0), WindowRect::new(0, 0, 20, 6));
        let buf = render(&window, true);
        assert_eq!(buf.cell((0, 0)).unwrap().symbol(), "╔");
        assert_eq!(buf.cell((5, 1)).unwrap().bg, theme::titlebar_focused_bg());
    }

    #[test]
    fn offscreen_parts_are_clipped() {
        let window = Window::new(WindowId(0), WindowRect::new(-10, -1, 20, 6));
        let buf = render(&window, false);
        // the right border is still visible at column 9
        assert_eq!(buf.cell((9, 2)).unwrap().symbol(), "│");
    }

    #[test]
    fn titlebar_rows_follow_body_margin() {
        let window = Window::new(WindowId(0), WindowRect::new(0, 0, 30, 10));
        let metrics = WindowMetrics {
            body_margin: 3,
            ..WindowMetrics::default()
        };
        let thick = render_with(&window, &metrics, false);
        for y in 1..4 {
            assert_eq!(thick.cell((10, y)).unwrap().bg, theme::titlebar_unfocused_bg());
        }
        assert_ne!(thick.cell((10, 4)).unwrap().bg, theme::titlebar_unfocused_bg());

        let thin = render(&window, false);
        assert_ne!(thin.cell((10, 2)).unwrap().bg, theme::titlebar_unfocused_bg());
    }
}
