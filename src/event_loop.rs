use std::io;
use std::time::Duration;

use crossterm::event::Event;

use crate::drivers::InputDriver;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlFlow {
    Continue,
    Quit,
}

/// What the loop hands to its handler on each turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoopTick {
    /// An input event, delivered in the order the driver produced it.
    Input(Event),
    /// A burst of input has been drained; a good moment to draw.
    Frame,
}

/// Single-threaded poll/dispatch loop that drives the desktop.
///
/// Every handler call runs to completion before the next event is read, so
/// the pointer handlers never observe interleaved state.
pub struct EventLoop<D> {
    driver: D,
    poll_interval: Duration,
}

impl<D: InputDriver> EventLoop<D> {
    pub fn new(driver: D, poll_interval: Duration) -> Self {
        Self {
            driver,
            poll_interval,
        }
    }

    pub fn driver(&mut self) -> &mut D {
        &mut self.driver
    }

    /// Runs until the handler returns [`ControlFlow::Quit`].
    ///
    /// Each turn first offers a [`LoopTick::Frame`], then waits up to the poll
    /// interval for input and drains everything already queued. Draining keeps
    /// drag updates from falling behind the pointer during fast motion.
    pub fn run<F>(&mut self, mut handler: F) -> io::Result<()>
    where
        F: FnMut(&mut D, LoopTick) -> io::Result<ControlFlow>,
    {
        loop {
            if handler(&mut self.driver, LoopTick::Frame)? == ControlFlow::Quit {
                return Ok(());
            }

            if !self.driver.poll(self.poll_interval)? {
                continue;
            }
            loop {
                let event = self.driver.read()?;
                if handler(&mut self.driver, LoopTick::Input(event))? == ControlFlow::Quit {
                    return Ok(());
                }
                if !self.driver.poll(Duration::ZERO)? {
                    break;
                }
            }
        }
    }
}
