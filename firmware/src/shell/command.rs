/// LED command parsing and dispatch.
///
/// The only accepted form is exactly `led` + `+`|`-` + `0`..`3`, followed
/// by the NUL that ends the line. Anything else is dropped without a
/// reply; the caller cannot tell an accepted line from a rejected one.
use core::fmt;

use crate::indicator::{Action, IndicatorPins, Indicators, LedIndex};

use super::line::LineBuffer;

const PREFIX: &[u8] = b"led";

/// A validated command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Command {
    pub led: LedIndex,
    pub action: Action,
}

/// Why a line was not a command. Checks run in this order and stop at the
/// first failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandError {
    /// First three characters are not `led`.
    BadPrefix,
    /// Fourth character is neither `+` nor `-`.
    BadAction(u8),
    /// Fifth character is not a digit `0`..`3`.
    BadIndex(u8),
    /// Something follows the digit.
    TrailingInput,
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandError::BadPrefix => write!(f, "expected 'led'"),
            CommandError::BadAction(b) => write!(f, "expected '+' or '-', got {:#04x}", b),
            CommandError::BadIndex(b) => write!(f, "expected LED digit 0-3, got {:#04x}", b),
            CommandError::TrailingInput => write!(f, "unexpected input after LED digit"),
        }
    }
}

/// Parse a NUL-terminated line.
///
/// Positions past the end of `line` read as NUL, so a short slice fails the
/// same way a short C string would.
pub fn parse(line: &[u8]) -> Result<Command, CommandError> {
    let at = |i: usize| line.get(i).copied().unwrap_or(0);

    if (0..PREFIX.len()).any(|i| at(i) != PREFIX[i]) {
        return Err(CommandError::BadPrefix);
    }

    let action = match at(3) {
        b'+' => Action::On,
        b'-' => Action::Off,
        other => return Err(CommandError::BadAction(other)),
    };

    let digit = at(4);
    let led = match digit {
        b'0'..=b'3' => LedIndex::new(digit - b'0').ok_or(CommandError::BadIndex(digit))?,
        other => return Err(CommandError::BadIndex(other)),
    };

    if at(5) != 0 {
        return Err(CommandError::TrailingInput);
    }

    Ok(Command { led, action })
}

/// Validate `line` and apply it to `leds`. Malformed lines are ignored.
pub fn dispatch<P: IndicatorPins, const C: usize>(line: &LineBuffer<C>, leds: &mut Indicators<P>) {
    let _ = try_dispatch(line, leds);
}

/// Like `dispatch`, but hands back the parse outcome. `leds` is only
/// touched on `Ok`.
pub fn try_dispatch<P: IndicatorPins, const C: usize>(
    line: &LineBuffer<C>,
    leds: &mut Indicators<P>,
) -> Result<Command, CommandError> {
    let cmd = parse(line.as_bytes_with_nul())?;
    leds.apply(cmd.led, cmd.action);
    Ok(cmd)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn led(i: u8) -> LedIndex {
        LedIndex::new(i).unwrap()
    }

    #[test]
    fn parse_all_valid_commands() {
        for d in 0..4u8 {
            let on = [b'l', b'e', b'd', b'+', b'0' + d, 0];
            let off = [b'l', b'e', b'd', b'-', b'0' + d, 0];
            assert_eq!(parse(&on), Ok(Command { led: led(d), action: Action::On }));
            assert_eq!(parse(&off), Ok(Command { led: led(d), action: Action::Off }));
        }
    }

    #[test]
    fn parse_bad_prefix() {
        assert_eq!(parse(b"LED+1\0"), Err(CommandError::BadPrefix));
        assert_eq!(parse(b"lad+1\0"), Err(CommandError::BadPrefix));
        assert_eq!(parse(b" led+1\0"), Err(CommandError::BadPrefix));
        assert_eq!(parse(b"\0"), Err(CommandError::BadPrefix));
        assert_eq!(parse(b""), Err(CommandError::BadPrefix));
    }

    #[test]
    fn parse_bad_action() {
        assert_eq!(parse(b"led*1\0"), Err(CommandError::BadAction(b'*')));
        assert_eq!(parse(b"led 1\0"), Err(CommandError::BadAction(b' ')));
        // Missing action: the NUL sits where the action should be.
        assert_eq!(parse(b"led\0"), Err(CommandError::BadAction(0)));
    }

    #[test]
    fn parse_bad_index() {
        assert_eq!(parse(b"led+9\0"), Err(CommandError::BadIndex(b'9')));
        assert_eq!(parse(b"led+4\0"), Err(CommandError::BadIndex(b'4')));
        assert_eq!(parse(b"led-a\0"), Err(CommandError::BadIndex(b'a')));
        assert_eq!(parse(b"led+\0"), Err(CommandError::BadIndex(0)));
    }

    #[test]
    fn parse_trailing_input() {
        assert_eq!(parse(b"led+1x\0"), Err(CommandError::TrailingInput));
        assert_eq!(parse(b"led+1 \0"), Err(CommandError::TrailingInput));
        assert_eq!(parse(b"led+12\0"), Err(CommandError::TrailingInput));
        assert_eq!(parse(b"led+1\n\0"), Err(CommandError::TrailingInput));
    }

    #[test]
    fn parse_stops_at_first_failure() {
        // Both the prefix and the digit are wrong; the prefix is reported.
        assert_eq!(parse(b"LED+9\0"), Err(CommandError::BadPrefix));
        // Action and digit wrong; the action is reported.
        assert_eq!(parse(b"led?9x\0"), Err(CommandError::BadAction(b'?')));
    }

    #[test]
    fn parse_without_nul_is_treated_as_terminated() {
        assert_eq!(parse(b"led+3"), Ok(Command { led: led(3), action: Action::On }));
    }

    #[test]
    fn parse_nul_after_digit_ends_the_command() {
        // Same as C: whatever follows an embedded NUL is never looked at.
        assert_eq!(parse(b"led-2\0junk\0"), Ok(Command { led: led(2), action: Action::Off }));
    }

    #[test]
    fn error_display() {
        assert_eq!(alloc::format!("{}", CommandError::BadIndex(b'9')), "expected LED digit 0-3, got 0x39");
        assert_eq!(alloc::format!("{}", CommandError::BadPrefix), "expected 'led'");
    }
}
