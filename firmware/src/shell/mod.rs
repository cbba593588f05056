/// LED command shell over a serial link.
///
/// One cycle: send the prompt, read a line, echo it to the diagnostic
/// console, then try it as an LED command. Bad lines are dropped and the
/// next cycle starts with a fresh prompt.
mod command;
mod line;
mod prompt;

use core::fmt::Write;

use crate::config::LINE_CAPACITY;
use crate::indicator::{IndicatorPins, Indicators};
use crate::link::ByteLink;

pub use command::{dispatch, parse, try_dispatch, Command, CommandError};
pub use line::LineBuffer;
pub use prompt::{emit_prompt, PROMPT};

/// The command loop and everything it owns.
///
/// `L` is the command link, `P` the LED port, `C` the diagnostic console.
pub struct Shell<L, P, C> {
    link: L,
    leds: Indicators<P>,
    console: C,
    line: LineBuffer<LINE_CAPACITY>,
}

impl<L, P, C> Shell<L, P, C>
where
    L: ByteLink,
    P: IndicatorPins,
    C: Write,
{
    /// Build the shell. All indicators are switched off here.
    pub fn new(link: L, pins: P, console: C) -> Self {
        Self {
            link,
            leds: Indicators::new(pins),
            console,
            line: LineBuffer::new(),
        }
    }

    /// Run one prompt / read / echo / dispatch cycle and return what the
    /// line parsed to. Nothing is sent back on the link either way.
    pub fn step(&mut self) -> Result<Command, CommandError> {
        emit_prompt(&mut self.link);
        self.line.read_from(&mut self.link);

        // Echo is best effort.
        let _ = writeln!(self.console, "{}", self.line);

        try_dispatch(&self.line, &mut self.leds)
    }

    /// Run forever. Rejected lines are dropped silently.
    pub fn run(&mut self) -> ! {
        loop {
            let _ = self.step();
        }
    }

    pub fn leds(&self) -> &Indicators<P> {
        &self.leds
    }

    pub fn link(&self) -> &L {
        &self.link
    }

    pub fn link_mut(&mut self) -> &mut L {
        &mut self.link
    }

    pub fn console(&self) -> &C {
        &self.console
    }

    /// The line read by the last cycle.
    pub fn last_line(&self) -> &LineBuffer<LINE_CAPACITY> {
        &self.line
    }
}
