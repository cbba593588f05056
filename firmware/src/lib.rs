#![no_std]

#[cfg(test)]
extern crate alloc;

// Register-level drivers — only compiled for the bare-metal target, not for
// host-target tests or the hosted simulator.
#[cfg(target_os = "none")]
pub mod arch;

pub mod config;
pub mod indicator;
pub mod link;
pub mod shell;

// In-memory link, LED port and console for host-target tests.
#[cfg(test)]
pub mod mock;
