use std::io;

use clap::Parser;

use desk_wm::drivers::console::{ConsoleInputDriver, ConsoleOutputDriver};
use desk_wm::runner::{DesktopApp, demo_windows, run_desktop};
use desk_wm::{DeskCli, DeskConfig, tracing_sub};

fn main() -> io::Result<()> {
    let cli = DeskCli::parse();
    let config = DeskConfig::try_from(&cli)?;
    tracing_sub::init_default(config.log_level, config.log_file.as_deref())?;

    let mut app = DesktopApp::new(config.clone());
    app.initialize(demo_windows(config.windows))?;

    let mut output = ConsoleOutputDriver::new()?;
    let result = run_desktop(ConsoleInputDriver::new(), &mut output, &mut app);
    if let Err(err) = &result {
        tracing::error!("desktop stopped: {err}");
    }
    result
}
