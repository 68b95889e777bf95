use crate::ui::UiFrame;
use ratatui::backend::Backend;
use ratatui::prelude::Rect;
use std::io;

pub trait OutputDriver {
    type Backend: Backend;

    fn enter(&mut self) -> io::Result<()>;
    fn exit(&mut self) -> io::Result<()>;

    /// Current drawable area, used to size the desktop between frames.
    fn size(&self) -> io::Result<Rect>;

    fn draw<F>(&mut self, f: F) -> io::Result<()>
    where
        F: FnOnce(UiFrame<'_>);
}
