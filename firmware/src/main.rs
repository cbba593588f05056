//! LED command firmware — entry point.
//!
//! On the bare-metal target this brings up the TM4C1294 and runs the
//! command shell on UART2 forever. Built for a hosted target, the same
//! shell runs over stdin/stdout so the protocol can be driven from a
//! terminal without a board.
#![cfg_attr(target_os = "none", no_std)]
#![cfg_attr(target_os = "none", no_main)]

#[cfg(target_os = "none")]
use core::panic::PanicInfo;

#[cfg(target_os = "none")]
use cortex_m_rt::entry;

#[cfg(target_os = "none")]
use ledctl::arch::tm4c1294::{board, uart::ConsoleWriter};
#[cfg(target_os = "none")]
use ledctl::console_println;
#[cfg(target_os = "none")]
use ledctl::shell::Shell;

/// Reset entry point — called by cortex-m-rt once .bss and .data are set up.
#[cfg(target_os = "none")]
#[entry]
fn main() -> ! {
    let board::Board { link, leds } = board::init();
    console_println!("LED control ready. Commands: led+N / led-N, N = 0..3");

    Shell::new(link, leds, ConsoleWriter).run()
}

#[cfg(target_os = "none")]
#[panic_handler]
fn panic(info: &PanicInfo) -> ! {
    console_println!("!!! PANIC !!!");
    console_println!("{}", info);
    loop {
        cortex_m::asm::wfi();
    }
}

#[cfg(not(target_os = "none"))]
fn main() {
    hosted::run()
}

/// stdin/stdout stand-ins for the board peripherals.
#[cfg(not(target_os = "none"))]
mod hosted {
    use std::convert::Infallible;
    use std::fmt;
    use std::io::{self, Read as _, Write as _};
    use std::process;

    use ledctl::config::TERMINATOR;
    use ledctl::indicator::{IndicatorPins, LedIndex};
    use ledctl::shell::Shell;

    /// Maps a terminal's Enter to the board's CR. A bare LF becomes CR; the
    /// LF of a CRLF pair is dropped so it does not start an empty line.
    #[derive(Default)]
    struct EnterKey {
        after_cr: bool,
    }

    impl EnterKey {
        fn map(&mut self, byte: u8) -> Option<u8> {
            let after_cr = core::mem::replace(&mut self.after_cr, byte == TERMINATOR);
            match byte {
                b'\n' if after_cr => None,
                b'\n' => Some(TERMINATOR),
                other => Some(other),
            }
        }
    }

    /// Command link on the process's stdin/stdout.
    struct StdioLink {
        stdin: io::Stdin,
        stdout: io::Stdout,
        enter: EnterKey,
    }

    impl embedded_io::ErrorType for StdioLink {
        type Error = Infallible;
    }

    impl embedded_io::Read for StdioLink {
        fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
            if buf.is_empty() {
                return Ok(0);
            }
            let mut byte = [0u8; 1];
            loop {
                match self.stdin.lock().read(&mut byte) {
                    Ok(1) => {
                        if let Some(b) = self.enter.map(byte[0]) {
                            buf[0] = b;
                            return Ok(1);
                        }
                    }
                    Ok(_) => {
                        eprintln!("[host] stdin closed");
                        process::exit(0);
                    }
                    Err(e) => {
                        eprintln!("[host] stdin error: {}", e);
                        process::exit(1);
                    }
                }
            }
        }
    }

    impl embedded_io::Write for StdioLink {
        fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error> {
            let mut out = self.stdout.lock();
            if let Err(e) = out.write_all(buf).and_then(|_| out.flush()) {
                eprintln!("[host] stdout error: {}", e);
                process::exit(1);
            }
            Ok(buf.len())
        }

        fn flush(&mut self) -> Result<(), Self::Error> {
            Ok(())
        }
    }

    /// Indicators reported on stderr.
    struct LoggedLeds;

    impl IndicatorPins for LoggedLeds {
        fn set_bit(&mut self, index: LedIndex) {
            eprintln!("[led] {} on", index);
        }

        fn clear_bit(&mut self, index: LedIndex) {
            eprintln!("[led] {} off", index);
        }
    }

    /// Diagnostic console on stderr.
    struct StderrConsole;

    impl fmt::Write for StderrConsole {
        fn write_str(&mut self, s: &str) -> fmt::Result {
            io::stderr().write_all(s.as_bytes()).map_err(|_| fmt::Error)
        }
    }

    pub fn run() -> ! {
        eprintln!("[host] LED control simulator; commands led+N / led-N, N = 0..3");
        let link = StdioLink {
            stdin: io::stdin(),
            stdout: io::stdout(),
            enter: EnterKey::default(),
        };
        let mut shell = Shell::new(link, LoggedLeds, StderrConsole);
        loop {
            if let Err(e) = shell.step() {
                eprintln!("[host] rejected: {}", e);
            }
        }
    }

}
