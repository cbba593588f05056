/// Prompt sent before every line: CR, LF, then `>`.
use crate::link::ByteLink;

pub const PROMPT: [u8; 3] = [0x0D, 0x0A, b'>'];

/// Transmit the prompt, one blocking byte at a time.
pub fn emit_prompt<L: ByteLink>(link: &mut L) {
    for &byte in PROMPT.iter() {
        link.transmit_byte(byte);
    }
}
