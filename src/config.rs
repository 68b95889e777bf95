use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use clap::{Parser, ValueEnum};
use tracing::Level;

use crate::constants::{MIN_VIEWPORT_HEIGHT, MIN_VIEWPORT_WIDTH};
use crate::error::DesktopError;
use crate::layout::WindowMetrics;

pub const MAX_DEMO_WINDOWS: usize = 9;

/// Where pointer input comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum InputMode {
    /// Deliver mouse events as they are.
    #[default]
    Mouse,
    /// Re-emit left-button mouse events as single-finger touch events.
    Touch,
}

#[derive(Parser, Debug, Clone)]
#[command(
    name = "desk-wm",
    version = env!("CARGO_PKG_VERSION"),
    about = "Desktop shell with draggable, resizable windows"
)]
pub struct DeskCli {
    /// Number of demo windows to open.
    #[arg(short = 'n', long = "windows", value_name = "COUNT", default_value_t = 3)]
    pub windows: usize,

    /// Smallest terminal width the desktop will run in.
    #[arg(long = "min-width", value_name = "COLS", default_value_t = MIN_VIEWPORT_WIDTH)]
    pub min_width: u16,

    /// Smallest terminal height the desktop will run in.
    #[arg(long = "min-height", value_name = "ROWS", default_value_t = MIN_VIEWPORT_HEIGHT)]
    pub min_height: u16,

    #[arg(long = "input", value_enum, default_value_t = InputMode::Mouse)]
    pub input: InputMode,

    /// Mark touch events as consumed, like mouse events are.
    #[arg(long = "touch-prevent-default")]
    pub touch_prevent_default: bool,

    /// Append logs to this file. Without it, logs are discarded.
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    #[arg(long = "log-level", value_name = "LEVEL", default_value = "info")]
    pub log_level: String,

    /// Input poll interval in milliseconds.
    #[arg(long = "poll-ms", value_name = "MS", default_value_t = 16)]
    pub poll_ms: u64,
}

#[derive(Debug, Clone)]
pub struct DeskConfig {
    pub windows: usize,
    pub min_width: u16,
    pub min_height: u16,
    pub input: InputMode,
    pub touch_prevent_default: bool,
    pub log_file: Option<PathBuf>,
    pub log_level: Level,
    pub poll_interval: Duration,
    pub metrics: WindowMetrics,
}

impl Default for DeskConfig {
    fn default() -> Self {
        Self {
            windows: 3,
            min_width: MIN_VIEWPORT_WIDTH,
            min_height: MIN_VIEWPORT_HEIGHT,
            input: InputMode::Mouse,
            touch_prevent_default: false,
            log_file: None,
            log_level: Level::INFO,
            poll_interval: Duration::from_millis(16),
            metrics: WindowMetrics::default(),
        }
    }
}

impl TryFrom<&DeskCli> for DeskConfig {
    type Error = DesktopError;

    fn try_from(cli: &DeskCli) -> Result<Self, Self::Error> {
        if !(1..=MAX_DEMO_WINDOWS).contains(&cli.windows) {
            return Err(DesktopError::InvalidConfig(format!(
                "window count must be between 1 and {MAX_DEMO_WINDOWS}"
            )));
        }
        if cli.min_width == 0 || cli.min_height == 0 {
            return Err(DesktopError::InvalidConfig(
                "minimum viewport must be non-zero".to_string(),
            ));
        }
        if !(1..=1000).contains(&cli.poll_ms) {
            return Err(DesktopError::InvalidConfig(
                "poll interval must be between 1 and 1000 ms".to_string(),
            ));
        }
        let log_level = Level::from_str(&cli.log_level).map_err(|_| {
            DesktopError::InvalidConfig(format!("unknown log level `{}`", cli.log_level))
        })?;
        Ok(Self {
            windows: cli.windows,
            min_width: cli.min_width,
            min_height: cli.min_height,
            input: cli.input,
            touch_prevent_default: cli.touch_prevent_default,
            log_file: cli.log_file.clone(),
            log_level,
            poll_interval: Duration::from_millis(cli.poll_ms),
            metrics: WindowMetrics::default(),
        })
    }
}
