/// Compile-time configuration for the command loop and the serial links.
///
/// Everything here is fixed at build time; the board has no storage to
/// hold runtime settings.
use static_assertions::const_assert;

/// Line buffer capacity, including the terminating NUL.
pub const LINE_CAPACITY: usize = 50;

/// Byte that ends a line (Enter on a serial terminal).
pub const TERMINATOR: u8 = 0x0D;

/// Length of a well-formed command, `led` + action + digit.
pub const COMMAND_LEN: usize = 5;

/// Number of indicator outputs (PM0..PM3).
pub const LED_COUNT: u8 = 4;

/// Core clock after reset: the 16 MHz precision internal oscillator.
pub const SYSTEM_CLOCK_HZ: u32 = 16_000_000;

/// Bit rate for both the command link and the diagnostic console.
pub const BAUD_RATE: u32 = 115_200;

// A command plus its NUL has to fit, otherwise nothing can ever match.
const_assert!(LINE_CAPACITY > COMMAND_LEN);
// Output State is stored in a u8 mask.
const_assert!(LED_COUNT as u32 <= u8::BITS);

/// UART baud-rate divisor split into the IBRD / FBRD register values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BaudDivisor {
    pub integer: u16,
    pub fraction: u8,
}

impl BaudDivisor {
    /// Divisor for `baud` with a UART clocked at `clock_hz` (16x oversampling).
    ///
    /// BRD = clock / (16 * baud). IBRD takes the integer part and FBRD the
    /// fractional part scaled by 64 and rounded to nearest.
    pub const fn for_rate(clock_hz: u32, baud: u32) -> Self {
        // BRD * 64 = clock * 4 / baud; computed at twice that to round.
        let scaled = ((clock_hz as u64 * 8 / baud as u64) + 1) / 2;
        Self {
            integer: (scaled / 64) as u16,
            fraction: (scaled % 64) as u8,
        }
    }
}

/// Divisor programmed into every UART at boot.
pub const LINK_DIVISOR: BaudDivisor = BaudDivisor::for_rate(SYSTEM_CLOCK_HZ, BAUD_RATE);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn divisor_for_115200_at_16mhz() {
        assert_eq!(LINK_DIVISOR, BaudDivisor { integer: 8, fraction: 44 });
    }

    #[test]
    fn divisor_for_9600_at_16mhz() {
        // 16e6 / (16 * 9600) = 104.1667 -> 104 + round(0.1667 * 64) = 11
        let d = BaudDivisor::for_rate(16_000_000, 9_600);
        assert_eq!(d, BaudDivisor { integer: 104, fraction: 11 });
    }

    #[test]
    fn divisor_exact_rate_has_no_fraction() {
        // 16e6 / (16 * 1_000_000) = 1.0
        let d = BaudDivisor::for_rate(16_000_000, 1_000_000);
        assert_eq!(d, BaudDivisor { integer: 1, fraction: 0 });
    }
}
