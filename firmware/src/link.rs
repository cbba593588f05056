/// ByteLink trait — the serial link as seen by the command loop.
///
/// The prompt emitter and the line reader only ever move one byte at a
/// time and never fail; both calls block until the link is ready.
use core::convert::Infallible;
use core::hint::spin_loop;

use embedded_io::{ErrorType, Read, Write};

/// Blocking, byte-at-a-time serial link.
pub trait ByteLink {
    /// Block until a byte has been received, then return it.
    fn receive_byte(&mut self) -> u8;

    /// Block until the transmitter accepts `byte`.
    fn transmit_byte(&mut self, byte: u8);
}

/// Any infallible `embedded-io` device is a link. Both the UART driver and
/// the test fake come in through here.
///
/// The device must never reach EOF: a link has no end, so `Ok(0)` from
/// `read` or `write` is taken as "not ready yet" and polled again. A
/// device that can hit EOF has to stop the program itself rather than
/// return `Ok(0)`, as the hosted stdin link does.
impl<T> ByteLink for T
where
    T: Read + Write + ErrorType<Error = Infallible>,
{
    fn receive_byte(&mut self) -> u8 {
        let mut byte = [0u8; 1];
        loop {
            match self.read(&mut byte) {
                Ok(0) => spin_loop(),
                Ok(_) => return byte[0],
                Err(e) => match e {},
            }
        }
    }

    fn transmit_byte(&mut self, byte: u8) {
        loop {
            match self.write(&[byte]) {
                Ok(0) => spin_loop(),
                Ok(_) => return,
                Err(e) => match e {},
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Device that is "not ready" for a few polls before each transfer.
    struct SlowDevice {
        stalls: u8,
        pending: u8,
        received: u8,
        sent: Option<u8>,
    }

    impl SlowDevice {
        fn new(stalls: u8, received: u8) -> Self {
            Self { stalls, pending: stalls, received, sent: None }
        }

        fn stalled(&mut self) -> bool {
            if self.pending > 0 {
                self.pending -= 1;
                true
            } else {
                self.pending = self.stalls;
                false
            }
        }
    }

    impl ErrorType for SlowDevice {
        type Error = Infallible;
    }

    impl Read for SlowDevice {
        fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
            if self.stalled() {
                return Ok(0);
            }
            buf[0] = self.received;
            Ok(1)
        }
    }

    impl Write for SlowDevice {
        fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error> {
            if self.stalled() {
                return Ok(0);
            }
            self.sent = Some(buf[0]);
            Ok(1)
        }

        fn flush(&mut self) -> Result<(), Self::Error> {
            Ok(())
        }
    }

    #[test]
    fn receive_polls_past_not_ready() {
        let mut dev = SlowDevice::new(3, b'l');
        assert_eq!(dev.receive_byte(), b'l');
    }

    #[test]
    fn transmit_polls_past_not_ready() {
        let mut dev = SlowDevice::new(2, 0);
        dev.transmit_byte(b'>');
        assert_eq!(dev.sent, Some(b'>'));
    }
}
