/// Polled UART driver (PL011-style) — bidirectional.
///
/// UART2 carries the LED command link. UART0, wired to the debug probe's
/// virtual COM port, is the diagnostic console behind `console_println!`.
use core::convert::Infallible;
use core::fmt;
use core::hint::spin_loop;

use bitflags::bitflags;
use spin::Mutex;

use super::{modify32, read32, write32};
use crate::config::BaudDivisor;

pub const UART0_BASE: usize = 0x4000_C000;
pub const UART2_BASE: usize = 0x4000_E000;

/// UART register offsets.
mod regs {
    pub const DR: usize = 0x000;   // Data
    pub const FR: usize = 0x018;   // Flag
    pub const IBRD: usize = 0x024; // Integer Baud-Rate Divisor
    pub const FBRD: usize = 0x028; // Fractional Baud-Rate Divisor
    pub const LCRH: usize = 0x02C; // Line Control
    pub const CTL: usize = 0x030;  // Control
}

bitflags! {
    /// UARTFR bits.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Flags: u32 {
        const BUSY = 1 << 3;
        const RXFE = 1 << 4; // receive FIFO/holding register empty
        const TXFF = 1 << 5; // transmit FIFO/holding register full
        const RXFF = 1 << 6;
        const TXFE = 1 << 7;
    }
}

bitflags! {
    /// UARTCTL bits used here.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    struct Ctl: u32 {
        const UARTEN = 1 << 0;
        const TXE = 1 << 8;
        const RXE = 1 << 9;
    }
}

/// 8 data bits, no parity, one stop bit, FIFOs off.
const LCRH_8N1: u32 = 0x60;

pub static CONSOLE: Mutex<Uart> = Mutex::new(Uart::new(UART0_BASE));

pub struct Uart {
    base: usize,
}

impl Uart {
    pub const fn new(base: usize) -> Self {
        Self { base }
    }

    /// Program 8N1 at `divisor` and enable Tx and Rx.
    /// The module clock and its pins must already be set up.
    pub fn init(&self, divisor: BaudDivisor) {
        // Divisor and line control only latch while the UART is disabled.
        modify32(self.base + regs::CTL, Ctl::UARTEN.bits(), 0);
        write32(self.base + regs::IBRD, divisor.integer as u32);
        write32(self.base + regs::FBRD, divisor.fraction as u32);
        // LCRH write must follow the divisor writes to latch them.
        write32(self.base + regs::LCRH, LCRH_8N1);
        modify32(self.base + regs::CTL, 0, (Ctl::UARTEN | Ctl::TXE | Ctl::RXE).bits());
    }

    #[inline]
    fn flags(&self) -> Flags {
        Flags::from_bits_truncate(read32(self.base + regs::FR))
    }

    // ---- Output ----

    /// Write a single byte, waiting while the transmitter is full.
    pub fn write_byte(&self, byte: u8) {
        while self.flags().contains(Flags::TXFF) {
            spin_loop();
        }
        write32(self.base + regs::DR, byte as u32);
    }

    /// Write a string, expanding `\n` to `\r\n`.
    pub fn write_str_raw(&self, s: &str) {
        for byte in s.bytes() {
            if byte == b'\n' {
                self.write_byte(b'\r');
            }
            self.write_byte(byte);
        }
    }

    // ---- Input ----

    /// Check if a byte is waiting in the receiver.
    pub fn has_data(&self) -> bool {
        !self.flags().contains(Flags::RXFE)
    }

    /// Read a byte, blocking until one is available. Error bits in DR
    /// (framing, parity, break, overrun) are dropped.
    pub fn read_byte(&self) -> u8 {
        while !self.has_data() {
            spin_loop();
        }
        read32(self.base + regs::DR) as u8
    }

    /// Try to read a byte without blocking.
    pub fn try_read_byte(&self) -> Option<u8> {
        if self.has_data() {
            Some(read32(self.base + regs::DR) as u8)
        } else {
            None
        }
    }
}

impl fmt::Write for Uart {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.write_str_raw(s);
        Ok(())
    }
}

impl embedded_io::ErrorType for Uart {
    type Error = Infallible;
}

impl embedded_io::Read for Uart {
    /// Blocks for the first byte, then takes whatever else is already there.
    fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
        if buf.is_empty() {
            return Ok(0);
        }
        buf[0] = self.read_byte();
        let mut n = 1;
        while n < buf.len() {
            match self.try_read_byte() {
                Some(b) => {
                    buf[n] = b;
                    n += 1;
                }
                None => break,
            }
        }
        Ok(n)
    }
}

impl embedded_io::Write for Uart {
    fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error> {
        for &byte in buf {
            self.write_byte(byte);
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        while self.flags().contains(Flags::BUSY) {
            spin_loop();
        }
        Ok(())
    }
}

/// `fmt::Write` handle onto the shared console, for code that wants a
/// writer rather than the macros.
pub struct ConsoleWriter;

impl fmt::Write for ConsoleWriter {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        CONSOLE.lock().write_str_raw(s);
        Ok(())
    }
}

/// Print to the diagnostic console.
#[macro_export]
macro_rules! console_print {
    ($($arg:tt)*) => {
        {
            use core::fmt::Write;
            let mut console = $crate::arch::tm4c1294::uart::CONSOLE.lock();
            let _ = write!(console, $($arg)*);
        }
    };
}

/// Print to the diagnostic console with a newline.
#[macro_export]
macro_rules! console_println {
    () => ($crate::console_print!("\n"));
    ($($arg:tt)*) => {
        $crate::console_print!("{}\n", format_args!($($arg)*))
    };
}
