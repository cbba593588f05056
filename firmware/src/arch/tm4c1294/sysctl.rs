/// System control: run-mode clock gating for GPIO ports and UARTs.
///
/// A peripheral is unusable until its RCGC bit is set and the matching PR
/// bit reads back as ready. Register accesses before that fault.
use core::hint::spin_loop;

use super::{modify32, read32};

const SYSCTL_BASE: usize = 0x400F_E000;

mod regs {
    pub const RCGCGPIO: usize = 0x608; // GPIO Run Mode Clock Gating Control
    pub const RCGCUART: usize = 0x618; // UART Run Mode Clock Gating Control
    pub const PRGPIO: usize = 0xA08;   // GPIO Peripheral Ready
    pub const PRUART: usize = 0xA18;   // UART Peripheral Ready
}

/// GPIO ports, by RCGCGPIO bit position.
#[repr(u8)]
#[derive(Debug, Clone, Copy)]
pub enum GpioPort {
    A = 0,
    D = 3,
    M = 11,
}

/// UART modules, by RCGCUART bit position.
#[repr(u8)]
#[derive(Debug, Clone, Copy)]
pub enum UartModule {
    Uart0 = 0,
    Uart2 = 2,
}

/// Clock a GPIO port and wait until it is ready.
pub fn enable_gpio(port: GpioPort) {
    enable(regs::RCGCGPIO, regs::PRGPIO, 1 << port as u32);
}

/// Clock a UART module and wait until it is ready.
pub fn enable_uart(module: UartModule) {
    enable(regs::RCGCUART, regs::PRUART, 1 << module as u32);
}

fn enable(rcgc: usize, pr: usize, bit: u32) {
    modify32(SYSCTL_BASE + rcgc, 0, bit);
    while read32(SYSCTL_BASE + pr) & bit == 0 {
        spin_loop();
    }
}
