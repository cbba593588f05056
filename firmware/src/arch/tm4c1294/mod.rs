/// TM4C1294NCPDT support.
///
/// This module provides:
/// - Volatile 32-bit register access
/// - System control clock gating (RCGC / PR registers)
/// - GPIO port setup and masked data writes
/// - Polled UART driver and the diagnostic console
/// - Board bring-up for the LED command firmware
pub mod board;
pub mod gpio;
pub mod sysctl;
pub mod uart;

/// Read a 32-bit peripheral register.
#[inline(always)]
pub fn read32(addr: usize) -> u32 {
    // Every address passed in comes from the fixed peripheral map below
    // 0x4010_0000, which is always mapped on this part.
    unsafe { core::ptr::read_volatile(addr as *const u32) }
}

/// Write a 32-bit peripheral register.
#[inline(always)]
pub fn write32(addr: usize, val: u32) {
    unsafe { core::ptr::write_volatile(addr as *mut u32, val) }
}

/// Set the bits in `set` and clear the bits in `clear`.
#[inline(always)]
pub fn modify32(addr: usize, clear: u32, set: u32) {
    write32(addr, (read32(addr) & !clear) | set);
}
