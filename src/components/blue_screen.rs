//! Full-screen error view shown instead of the desktop when it cannot run.
//!
//! It only displays an error code and a cause; it never reads or touches
//! window-manager state.

use indoc::formatdoc;
use ratatui::layout::Alignment;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Paragraph, Wrap};

use super::{Component, ComponentContext};
use crate::error::DesktopError;
use crate::layout::WindowRect;
use crate::theme;
use crate::ui::UiFrame;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlueScreenComponent {
    code: String,
    cause: String,
}

impl BlueScreenComponent {
    pub fn new(code: impl Into<String>, cause: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            cause: cause.into(),
        }
    }

    pub fn from_error(err: &DesktopError) -> Self {
        Self::new(err.code(), err.cause())
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn cause(&self) -> &str {
        &self.cause
    }

    fn message(&self) -> String {
        formatdoc! {"
            A problem has been detected and the desktop has been stopped.

            {cause}

            Press q to quit.",
            cause = self.cause,
        }
    }
}

impl Component for BlueScreenComponent {
    fn render(&mut self, frame: &mut UiFrame<'_>, area: WindowRect, _ctx: &ComponentContext) {
        let style = Style::default()
            .bg(theme::blue_screen_bg())
            .fg(theme::blue_screen_fg());
        frame.fill_signed(area, " ", style);
        let Some(visible) = frame.clip_signed(area) else {
            return;
        };

        let mut lines = vec![
            Line::from(Span::styled(
                format!(" {} ", self.code),
                style.add_modifier(Modifier::REVERSED | Modifier::BOLD),
            )),
            Line::default(),
        ];
        lines.extend(self.message().lines().map(|line| Line::from(line.to_string())));
        let paragraph = Paragraph::new(Text::from(lines))
            .style(style)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, visible);
    }
}
