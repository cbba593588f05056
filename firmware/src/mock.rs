/// In-memory stand-ins for the UART and the LED port.
///
/// Only built for host-target tests. `ScriptedLink` plays back a fixed
/// input script and captures everything transmitted; `RecordingPins`
/// keeps the pin levels and every call made on them.
use alloc::collections::VecDeque;
use alloc::string::String;
use alloc::vec::Vec;
use core::convert::Infallible;
use core::fmt;

use crate::indicator::{IndicatorPins, LedIndex};

/// Serial link fed from a byte script.
pub struct ScriptedLink {
    input: VecDeque<u8>,
    output: Vec<u8>,
}

impl ScriptedLink {
    pub fn new(script: &[u8]) -> Self {
        Self {
            input: script.iter().copied().collect(),
            output: Vec::new(),
        }
    }

    /// Queue more input behind whatever is left.
    pub fn feed(&mut self, bytes: &[u8]) {
        self.input.extend(bytes.iter().copied());
    }

    /// Bytes not yet consumed by the reader.
    pub fn remaining(&self) -> usize {
        self.input.len()
    }

    /// Everything transmitted so far.
    pub fn transmitted(&self) -> &[u8] {
        &self.output
    }
}

impl embedded_io::ErrorType for ScriptedLink {
    type Error = Infallible;
}

impl embedded_io::Read for ScriptedLink {
    fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
        if buf.is_empty() {
            return Ok(0);
        }
        // A real UART would block forever here; in a test that is a bug.
        let byte = self.input.pop_front().expect("scripted input exhausted");
        buf[0] = byte;
        Ok(1)
    }
}

impl embedded_io::Write for ScriptedLink {
    fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error> {
        self.output.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// LED port that remembers its level and every call.
#[derive(Default)]
pub struct RecordingPins {
    level: u8,
    calls: Vec<(u8, bool)>,
}

impl RecordingPins {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrite the pin level without recording a call (power-on garbage).
    pub fn force(&mut self, level: u8) {
        self.level = level;
    }

    pub fn level(&self) -> u8 {
        self.level
    }

    /// `(index, on)` for every set/clear, oldest first.
    pub fn calls(&self) -> &[(u8, bool)] {
        &self.calls
    }
}

impl IndicatorPins for RecordingPins {
    fn set_bit(&mut self, index: LedIndex) {
        self.level |= 1 << index.get();
        self.calls.push((index.get(), true));
    }

    fn clear_bit(&mut self, index: LedIndex) {
        self.level &= !(1 << index.get());
        self.calls.push((index.get(), false));
    }
}

/// Diagnostic console that collects text.
#[derive(Default)]
pub struct CaptureConsole {
    text: String,
}

impl CaptureConsole {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

impl fmt::Write for CaptureConsole {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.text.push_str(s);
        Ok(())
    }
}
