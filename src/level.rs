//! Raw signal sources.
//!
//! Defines the [`RawLevel`] trait consumed by the button facade, plus adapters
//! for `embedded-hal` input pins and for negating another source.

use crate::types::Polarity;
use embedded_hal::digital::InputPin;

/// Trait for abstracting the instantaneous, unfiltered button level.
///
/// Implement this for anything that can report whether the button is physically
/// pressed right now: a GPIO pin, a port expander bit, a simulated input.
/// Implementations must already be corrected for wiring polarity and must not
/// block.
pub trait RawLevel {
    /// Error reported when the level cannot be read.
    ///
    /// Use [`core::convert::Infallible`] for sources that cannot fail.
    type Error;

    /// Returns `true` if the button is pressed at this instant.
    fn read_raw_level(&mut self) -> Result<bool, Self::Error>;
}

impl<S: RawLevel + ?Sized> RawLevel for &mut S {
    type Error = S::Error;

    #[inline]
    fn read_raw_level(&mut self) -> Result<bool, Self::Error> {
        (**self).read_raw_level()
    }
}

/// Polarity-corrected level of an `embedded-hal` input pin.
///
/// The pin must already be configured as an input (with pull-up or pull-down
/// as the board requires); this adapter only reads it.
pub struct PinLevel<P: InputPin> {
    pin: P,
    polarity: Polarity,
}

impl<P: InputPin> PinLevel<P> {
    /// Wraps a pin whose idle level is `polarity`.
    pub fn new(pin: P, polarity: Polarity) -> Self {
        Self { pin, polarity }
    }

    /// Wraps a pulled-up pin that reads low while pressed.
    pub fn idle_high(pin: P) -> Self {
        Self::new(pin, Polarity::IdleHigh)
    }

    /// Wraps a pulled-down pin that reads high while pressed.
    pub fn idle_low(pin: P) -> Self {
        Self::new(pin, Polarity::IdleLow)
    }

    /// Returns the configured idle polarity.
    pub fn polarity(&self) -> Polarity {
        self.polarity
    }

    /// Releases the wrapped pin.
    pub fn into_inner(self) -> P {
        self.pin
    }
}

impl<P: InputPin> RawLevel for PinLevel<P> {
    type Error = P::Error;

    fn read_raw_level(&mut self) -> Result<bool, Self::Error> {
        match self.polarity {
            Polarity::IdleHigh => self.pin.is_low(),
            Polarity::IdleLow => self.pin.is_high(),
        }
    }
}

/// Negated view of another source.
///
/// Reports `true` while the wrapped source reports released.
pub struct Inverted<S: RawLevel>(pub S);

impl<S: RawLevel> RawLevel for Inverted<S> {
    type Error = S::Error;

    #[inline]
    fn read_raw_level(&mut self) -> Result<bool, Self::Error> {
        self.0.read_raw_level().map(|level| !level)
    }
}
