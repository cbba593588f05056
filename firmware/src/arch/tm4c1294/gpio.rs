/// GPIO ports on the AHB aperture, and the LED port built on them.
use super::{modify32, write32};
use crate::indicator::{IndicatorPins, LedIndex};

pub const PORTA_AHB_BASE: usize = 0x4005_8000;
pub const PORTD_AHB_BASE: usize = 0x4005_B000;
pub const PORTM_AHB_BASE: usize = 0x4006_3000;

/// GPIO register offsets.
mod regs {
    pub const DATA: usize = 0x000;  // Data, address bits [9:2] mask the write
    pub const DIR: usize = 0x400;   // Direction (1 = output)
    pub const AFSEL: usize = 0x420; // Alternate Function Select
    pub const DEN: usize = 0x51C;   // Digital Enable
    pub const PCTL: usize = 0x52C;  // Port Control (4 bits per pin)
}

/// One GPIO port. The port clock must already be enabled.
pub struct Port {
    base: usize,
}

impl Port {
    pub const fn new(base: usize) -> Self {
        Self { base }
    }

    /// Make the `pins` digital push-pull outputs.
    pub fn make_outputs(&self, pins: u8) {
        modify32(self.base + regs::DEN, 0, pins as u32);
        modify32(self.base + regs::DIR, 0, pins as u32);
    }

    /// Hand `pins` to a peripheral. `pctl` holds the 4-bit mux values at
    /// the position of each pin, e.g. `0x0011_0000` for pins 4 and 5.
    pub fn make_alternate(&self, pins: u8, pctl: u32) {
        modify32(self.base + regs::DEN, 0, pins as u32);
        modify32(self.base + regs::AFSEL, 0, pins as u32);
        modify32(self.base + regs::PCTL, 0, pctl);
    }

    /// Write `value` to the pins in `mask` only. The mask goes into the
    /// address, so other pins are untouched without a read-modify-write.
    #[inline]
    pub fn write_masked(&self, mask: u8, value: u8) {
        write32(self.base + regs::DATA + ((mask as usize) << 2), value as u32);
    }
}

/// PM0..PM3 as the four indicators.
pub struct LedPort {
    port: Port,
}

impl LedPort {
    const PINS: u8 = 0x0F;

    /// Configure PM0..PM3 as outputs. Port M must be clocked.
    pub fn new() -> Self {
        let port = Port::new(PORTM_AHB_BASE);
        port.make_outputs(Self::PINS);
        port.write_masked(Self::PINS, 0);
        Self { port }
    }
}

impl IndicatorPins for LedPort {
    fn set_bit(&mut self, index: LedIndex) {
        let bit = 1 << index.get();
        self.port.write_masked(bit, bit);
    }

    fn clear_bit(&mut self, index: LedIndex) {
        self.port.write_masked(1 << index.get(), 0);
    }
}
