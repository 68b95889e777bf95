use crate::layout::WindowRect;
use crate::ui::UiFrame;

pub mod blue_screen;
pub mod wallpaper;
pub mod window_body;

pub use blue_screen::BlueScreenComponent;
pub use wallpaper::WallpaperComponent;
pub use window_body::WindowBodyComponent;

pub use crate::component_context::ComponentContext;

/// A drawable piece of the desktop. Areas are signed because window surfaces
/// may hang off the edge of the screen; `UiFrame` does the clipping.
pub trait Component {
    fn render(&mut self, frame: &mut UiFrame<'_>, area: WindowRect, ctx: &ComponentContext);
}
