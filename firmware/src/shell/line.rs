/// Bounded line reader for the command link.
///
/// Reads until CR or until the buffer is full, whichever comes first:
/// - CR (0x0D) ends the line and is not stored
/// - every other byte, control characters included, is stored as-is
/// - at `C - 1` stored bytes the line is cut; bytes the sender keeps typing
///   are left on the link for the next read
///
/// The buffer is NUL-terminated after every read, like a C string.
use core::fmt;

use crate::config::TERMINATOR;
use crate::link::ByteLink;

pub struct LineBuffer<const C: usize> {
    buf: [u8; C],
    len: usize,
}

impl<const C: usize> LineBuffer<C> {
    const CAPACITY_OK: () = assert!(C >= 1, "line buffer needs room for the NUL");

    pub const fn new() -> Self {
        let () = Self::CAPACITY_OK;
        Self {
            buf: [0u8; C],
            len: 0,
        }
    }

    /// Read one line from `link`, overwriting the previous one.
    /// Returns the number of bytes stored, at most `C - 1`.
    pub fn read_from<L: ByteLink>(&mut self, link: &mut L) -> usize {
        self.len = 0;

        while self.len < C - 1 {
            let byte = link.receive_byte();
            if byte == TERMINATOR {
                break;
            }
            self.buf[self.len] = byte;
            self.len += 1;
        }

        // Terminated by CR or truncated at C - 1; both end up here.
        self.buf[self.len] = 0;
        self.len
    }

    /// Stored bytes, without the NUL.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.len]
    }

    /// Stored bytes followed by the NUL.
    #[inline]
    pub fn as_bytes_with_nul(&self) -> &[u8] {
        &self.buf[..=self.len]
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub const fn capacity(&self) -> usize {
        C
    }

    /// Text up to the first NUL, the way `%s` would print it.
    fn c_str(&self) -> &[u8] {
        let bytes = self.as_bytes();
        match bytes.iter().position(|&b| b == 0) {
            Some(end) => &bytes[..end],
            None => bytes,
        }
    }
}

impl<const C: usize> Default for LineBuffer<C> {
    fn default() -> Self {
        Self::new()
    }
}

/// Renders the line as text. Bytes that are not valid UTF-8 show up as
/// U+FFFD.
impl<const C: usize> fmt::Display for LineBuffer<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for chunk in self.c_str().utf8_chunks() {
            f.write_str(chunk.valid())?;
            if !chunk.invalid().is_empty() {
                f.write_str("\u{FFFD}")?;
            }
        }
        Ok(())
    }
}
