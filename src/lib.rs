pub mod component_context;
pub mod components;
pub mod config;
pub mod constants;
pub mod desktop;
pub mod drivers;
pub mod error;
pub mod event_loop;
pub mod layout;
pub mod runner;
pub mod theme;
pub mod tracing_sub;
pub mod ui;
pub mod window;

pub use config::{DeskCli, DeskConfig, InputMode};
pub use desktop::{DesktopController, DesktopFocus, DragSession, PointerResponse, ensure_viewport};
pub use error::DesktopError;
