/// Board bring-up for the LED command firmware.
///
/// Pin map (EK-TM4C1294XL):
///   PA0 / PA1   UART0 Rx / Tx   diagnostic console (debug probe VCOM)
///   PD4 / PD5   UART2 Rx / Tx   LED command link
///   PM0..PM3    LED outputs
use super::gpio::{LedPort, Port, PORTA_AHB_BASE, PORTD_AHB_BASE};
use super::sysctl::{self, GpioPort, UartModule};
use super::uart::{Uart, CONSOLE, UART2_BASE};
use crate::config::{BAUD_RATE, LINK_DIVISOR};
use crate::console_println;

/// Peripherals handed to the command loop.
pub struct Board {
    pub link: Uart,
    pub leds: LedPort,
}

/// Bring up the console, the command link and the LED port.
/// Call once, before anything else touches the hardware.
pub fn init() -> Board {
    // 1. Console first so the remaining steps can log
    sysctl::enable_gpio(GpioPort::A);
    Port::new(PORTA_AHB_BASE).make_alternate(0x03, 0x0000_0011);
    sysctl::enable_uart(UartModule::Uart0);
    CONSOLE.lock().init(LINK_DIVISOR);
    console_println!();
    console_println!("[boot] console up on UART0");

    // 2. LEDs, all off
    sysctl::enable_gpio(GpioPort::M);
    let leds = LedPort::new();
    console_println!("[gpio] PM0-PM3 outputs, all off");

    // 3. Command link
    sysctl::enable_gpio(GpioPort::D);
    Port::new(PORTD_AHB_BASE).make_alternate(0x30, 0x0011_0000);
    sysctl::enable_uart(UartModule::Uart2);
    let link = Uart::new(UART2_BASE);
    link.init(LINK_DIVISOR);
    console_println!(
        "[uart] UART2 8N1 at {} baud (IBRD={} FBRD={})",
        BAUD_RATE,
        LINK_DIVISOR.integer,
        LINK_DIVISOR.fraction
    );

    Board { link, leds }
}
