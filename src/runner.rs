use std::io;

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::prelude::Rect;

use crate::components::{BlueScreenComponent, Component, ComponentContext, WallpaperComponent};
use crate::config::{DeskConfig, InputMode};
use crate::desktop::{DesktopController, DesktopFocus, ensure_viewport};
use crate::drivers::pointer::{PointerInput, TouchEvent};
use crate::drivers::{InputDriver, OutputDriver};
use crate::error::DesktopError;
use crate::event_loop::{ControlFlow, EventLoop, LoopTick};
use crate::layout::WindowRect;
use crate::ui::UiFrame;
use crate::window::decorator::{DefaultDecorator, WindowDecorator};
use crate::window::{ElementTree, Window, WindowId};

const DEMO_WIDTH: i32 = 30;
const DEMO_HEIGHT: i32 = 9;

/// The running desktop: controller state plus everything needed to turn
/// terminal events into pointer input and paint the result.
pub struct DesktopApp {
    controller: DesktopController,
    config: DeskConfig,
    viewport: Rect,
    tree: ElementTree,
    decorator: Box<dyn WindowDecorator>,
    wallpaper: WallpaperComponent,
    blue_screen: Option<BlueScreenComponent>,
    dirty: bool,
}

impl DesktopApp {
    pub fn new(config: DeskConfig) -> Self {
        let controller = DesktopController::new(config.metrics)
            .with_touch_prevent_default(config.touch_prevent_default);
        Self {
            controller,
            config,
            viewport: Rect::default(),
            tree: ElementTree::new(),
            decorator: Box::new(DefaultDecorator),
            wallpaper: WallpaperComponent::default(),
            blue_screen: None,
            dirty: true,
        }
    }

    pub fn with_decorator(mut self, decorator: Box<dyn WindowDecorator>) -> Self {
        self.decorator = decorator;
        self
    }

    pub fn config(&self) -> &DeskConfig {
        &self.config
    }

    pub fn controller(&self) -> &DesktopController {
        &self.controller
    }

    pub fn tree(&self) -> &ElementTree {
        &self.tree
    }

    pub fn blue_screen(&self) -> Option<&BlueScreenComponent> {
        self.blue_screen.as_ref()
    }

    pub fn initialize(
        &mut self,
        windows: impl IntoIterator<Item = Window>,
    ) -> Result<(), DesktopError> {
        self.controller.initialize(windows)?;
        self.rebuild_tree();
        Ok(())
    }

    pub fn mount(&mut self, window: Window) -> Result<(), DesktopError> {
        self.controller.mount(window)?;
        self.rebuild_tree();
        Ok(())
    }

    pub fn unmount(&mut self, id: WindowId) -> Result<Window, DesktopError> {
        let window = self.controller.unmount(id)?;
        self.rebuild_tree();
        Ok(window)
    }

    /// Adopts a new terminal size. Below the minimum the error view replaces
    /// the desktop until the terminal grows again.
    pub fn resize(&mut self, area: Rect) {
        self.viewport = area;
        match ensure_viewport(area, self.config.min_width, self.config.min_height) {
            Ok(()) => {
                if self.blue_screen.take().is_some() {
                    tracing::info!(
                        width = area.width,
                        height = area.height,
                        "viewport large enough again"
                    );
                }
            }
            Err(err) => {
                if self.blue_screen.is_none() {
                    tracing::warn!(code = err.code(), "{err}");
                }
                self.blue_screen = Some(BlueScreenComponent::from_error(&err));
            }
        }
        self.rebuild_tree();
    }

    /// Returns and clears the pending-redraw flag.
    pub fn take_dirty(&mut self) -> bool {
        std::mem::replace(&mut self.dirty, false)
    }

    pub fn handle_event(&mut self, event: &Event) -> ControlFlow {
        match event {
            Event::Key(key) if is_quit_key(key) => return ControlFlow::Quit,
            Event::Resize(width, height) => {
                self.resize(Rect::new(0, 0, *width, *height));
                return ControlFlow::Continue;
            }
            _ => {}
        }
        if self.blue_screen.is_some() {
            return ControlFlow::Continue;
        }
        let Some(input) = self.pointer_input(event) else {
            return ControlFlow::Continue;
        };
        let target = input.position().and_then(|point| self.tree.hit_test(point));
        let response = self.controller.handle_pointer(&input, target, &self.tree);
        if let Some(focus) = self.controller.take_focus_change() {
            match focus {
                DesktopFocus::Window(id) => tracing::info!(window_id = %id, "window focused"),
                DesktopFocus::Desktop => tracing::info!("desktop focused"),
            }
        }
        if response.changed {
            self.rebuild_tree();
        }
        ControlFlow::Continue
    }

    fn pointer_input(&self, event: &Event) -> Option<PointerInput> {
        match (self.config.input, event) {
            (InputMode::Mouse, _) => PointerInput::from_event(event),
            (InputMode::Touch, Event::Mouse(mouse)) => {
                TouchEvent::from_mouse(mouse).map(PointerInput::Touch)
            }
            (InputMode::Touch, _) => None,
        }
    }

    fn rebuild_tree(&mut self) {
        let viewport = WindowRect::from(self.viewport);
        self.tree =
            ElementTree::from_stack(self.controller.stack(), viewport, self.controller.metrics());
        self.dirty = true;
    }

    pub fn render(&mut self, frame: &mut UiFrame<'_>) {
        let area = WindowRect::from(frame.area());
        let ctx = ComponentContext::default();
        if let Some(screen) = self.blue_screen.as_mut() {
            screen.render(frame, area, &ctx);
            return;
        }
        self.wallpaper.render(frame, area, &ctx);
        let focus = self.controller.focus();
        for window in self.controller.stack().draw_order() {
            let focused = focus == DesktopFocus::Window(window.id());
            self.decorator
                .render_window(frame, window, self.controller.metrics(), focused);
        }
    }
}

fn is_quit_key(key: &KeyEvent) -> bool {
    if key.kind != KeyEventKind::Press {
        return false;
    }
    match key.code {
        KeyCode::Char('q') => !key.modifiers.contains(KeyModifiers::CONTROL),
        KeyCode::Char('c') => key.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

/// A cascade of demo windows. Every third one is fixed-size.
pub fn demo_windows(count: usize) -> Vec<Window> {
    (0..count)
        .map(|idx| {
            let offset = idx as i32;
            Window::new(
                WindowId(idx),
                WindowRect::new(2 + offset * 5, 1 + offset * 2, DEMO_WIDTH, DEMO_HEIGHT),
            )
            .with_title(format!("Window {}", idx + 1))
            .with_resizable(idx % 3 != 2)
        })
        .collect()
}

/// Runs the desktop until a quit key arrives. The output driver is entered
/// before the first frame and always exited afterwards.
pub fn run_desktop<I, O>(input: I, output: &mut O, app: &mut DesktopApp) -> io::Result<()>
where
    I: InputDriver,
    O: OutputDriver,
{
    output.enter()?;
    let result = drive(input, output, app);
    let exited = output.exit();
    result.and(exited)
}

fn drive<I, O>(input: I, output: &mut O, app: &mut DesktopApp) -> io::Result<()>
where
    I: InputDriver,
    O: OutputDriver,
{
    let mut event_loop = EventLoop::new(input, app.config().poll_interval);
    event_loop.driver().set_mouse_capture(true)?;
    app.resize(output.size()?);
    tracing::info!(windows = app.controller().stack().len(), "desktop started");

    event_loop.run(|_driver, tick| match tick {
        LoopTick::Input(event) => Ok(app.handle_event(&event)),
        LoopTick::Frame => {
            if app.take_dirty() {
                output.draw(|mut frame| app.render(&mut frame))?;
            }
            Ok(ControlFlow::Continue)
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
    use ratatui::buffer::Buffer;

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> Event {
        Event::Mouse(MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    fn app_with(config: DeskConfig) -> DesktopApp {
        let mut app = DesktopApp::new(config);
        app.resize(Rect::new(0, 0, 80, 24));
        app.initialize(demo_windows(2)).unwrap();
        app
    }

    #[test]
    fn quit_keys() {
        let mut app = app_with(DeskConfig::default());
        let q = Event::Key(KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE));
        let ctrl_c = Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        let plain_c = Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::NONE));
        assert_eq!(app.handle_event(&q), ControlFlow::Quit);
        assert_eq!(app.handle_event(&ctrl_c), ControlFlow::Quit);
        assert_eq!(app.handle_event(&plain_c), ControlFlow::Continue);
    }

    #[test]
    fn titlebar_drag_moves_window_through_events() {
        let mut app = app_with(DeskConfig::default());
        // window 0 sits at (2,1); its titlebar row is y=2
        app.handle_event(&mouse(MouseEventKind::Down(MouseButton::Left), 5, 2));
        assert_eq!(app.controller().focus(), DesktopFocus::Window(WindowId(0)));
        assert_eq!(app.controller().stack().topmost(), Some(WindowId(0)));
        app.handle_event(&mouse(MouseEventKind::Drag(MouseButton::Left), 15, 6));
        app.handle_event(&mouse(MouseEventKind::Up(MouseButton::Left), 15, 6));
        let rect = app.controller().window(WindowId(0)).unwrap().rect();
        assert_eq!((rect.left, rect.top), (12, 5));
        assert!(!app.controller().is_dragging());
    }

    #[test]
    fn touch_mode_translates_mouse_events() {
        let config = DeskConfig {
            input: InputMode::Touch,
            ..DeskConfig::default()
        };
        let mut app = app_with(config);
        // window 1 sits at (7,3); its south-east corner is (36,11)
        app.handle_event(&mouse(MouseEventKind::Down(MouseButton::Left), 36, 11));
        app.handle_event(&mouse(MouseEventKind::Drag(MouseButton::Left), 40, 13));
        app.handle_event(&mouse(MouseEventKind::Up(MouseButton::Left), 40, 13));
        let rect = app.controller().window(WindowId(1)).unwrap().rect();
        assert_eq!((rect.width, rect.height), (34, 11));
    }

    #[test]
    fn small_viewport_shows_blue_screen_and_ignores_pointer() {
        let mut app = app_with(DeskConfig::default());
        app.handle_event(&Event::Resize(20, 8));
        assert_eq!(app.blue_screen().map(|s| s.code()), Some("VIEWPORT_TOO_SMALL"));
        app.handle_event(&mouse(MouseEventKind::Down(MouseButton::Left), 5, 2));
        assert!(!app.controller().is_dragging());

        let area = Rect::new(0, 0, 20, 8);
        let mut buf = Buffer::empty(area);
        app.render(&mut UiFrame::from_parts(area, &mut buf));
        assert_eq!(buf.cell((0, 7)).unwrap().bg, crate::theme::blue_screen_bg());

        app.handle_event(&Event::Resize(80, 24));
        assert!(app.blue_screen().is_none());
    }

    #[test]
    fn demo_windows_cascade() {
        let windows = demo_windows(3);
        assert_eq!(windows[1].rect(), WindowRect::new(7, 3, DEMO_WIDTH, DEMO_HEIGHT));
        assert!(windows[0].resizable());
        assert!(!windows[2].resizable());
    }
}
