/// Indicator outputs — the four LEDs and their on/off state.
///
/// `Indicators` owns both the pin driver and the Output State mask. It is
/// the only thing that changes LED state; the command dispatcher goes
/// through `apply`.
use core::fmt;

use bitflags::bitflags;

use crate::config::LED_COUNT;

bitflags! {
    /// On/off state of the indicators, bit N = LED N.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct LedMask: u8 {
        const LED0 = 1 << 0;
        const LED1 = 1 << 1;
        const LED2 = 1 << 2;
        const LED3 = 1 << 3;
    }
}

/// Index of one indicator, always in `0..LED_COUNT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LedIndex(u8);

impl LedIndex {
    /// Returns `None` for indices past the last indicator.
    pub const fn new(index: u8) -> Option<Self> {
        if index < LED_COUNT {
            Some(Self(index))
        } else {
            None
        }
    }

    #[inline]
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Single-bit mask for this indicator.
    #[inline]
    pub const fn mask(self) -> LedMask {
        LedMask::from_bits_truncate(1 << self.0)
    }

    /// All indicators, lowest index first.
    pub fn all() -> impl Iterator<Item = LedIndex> {
        (0..LED_COUNT).map(LedIndex)
    }
}

impl fmt::Display for LedIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LED{}", self.0)
    }
}

/// What a command does to its indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    On,
    Off,
}

/// Output bit sink driving the physical indicators.
pub trait IndicatorPins {
    /// Drive the indicator at `index` on.
    fn set_bit(&mut self, index: LedIndex);

    /// Drive the indicator at `index` off.
    fn clear_bit(&mut self, index: LedIndex);
}

/// Output State plus the pins it is mirrored to.
pub struct Indicators<P> {
    pins: P,
    state: LedMask,
}

impl<P: IndicatorPins> Indicators<P> {
    /// Take over `pins` and force every indicator off.
    pub fn new(mut pins: P) -> Self {
        for index in LedIndex::all() {
            pins.clear_bit(index);
        }
        Self {
            pins,
            state: LedMask::empty(),
        }
    }

    /// Switch one indicator. Setting an already-on indicator is a no-op on
    /// the state, but the pin is still driven.
    pub fn apply(&mut self, index: LedIndex, action: Action) {
        match action {
            Action::On => {
                self.pins.set_bit(index);
                self.state.insert(index.mask());
            }
            Action::Off => {
                self.pins.clear_bit(index);
                self.state.remove(index.mask());
            }
        }
    }

    #[inline]
    pub fn state(&self) -> LedMask {
        self.state
    }

    pub fn is_on(&self, index: LedIndex) -> bool {
        self.state.contains(index.mask())
    }

    pub fn pins(&self) -> &P {
        &self.pins
    }
}
