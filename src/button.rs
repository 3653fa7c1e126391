//! Pushbutton facade with debounced edge polling and blocking waits.
//!
//! Provides [`Pushbutton`], which owns a raw level source and two independent
//! [`DebounceFilter`]s: one fed the pressed level (press detector) and one fed
//! its negation (release detector).

use crate::filter::DebounceFilter;
use crate::level::RawLevel;
use crate::time::{TimeInstant, TimeSource};
use crate::types::{ButtonError, ButtonEvent, FilterState};
use embedded_hal::delay::DelayNs;

/// Delay between the two confirming reads of the blocking wait helpers.
pub const WAIT_DEBOUNCE_MS: u32 = 10;

/// A debounced pushbutton.
///
/// The `poll_*` methods drive the debounce filters and must be called
/// repeatedly, e.g. once per main loop iteration. Polling less often than the
/// debounce window only delays detection; it never produces false edges.
///
/// The `wait_for_*` methods busy-wait on the calling thread with no timeout.
/// They use a simpler debounce (two pressed or released reads separated by
/// [`WAIT_DEBOUNCE_MS`]) and do not touch the filters.
///
/// # Type Parameters
/// * `'t` - Lifetime of the time source reference
/// * `I` - Time instant type
/// * `S` - Raw level source type
/// * `T` - Time source implementation type
pub struct Pushbutton<'t, I: TimeInstant, S: RawLevel, T: TimeSource<I>> {
    source: S,
    time_source: &'t T,
    press: DebounceFilter<I>,
    release: DebounceFilter<I>,
}

impl<'t, I: TimeInstant, S: RawLevel, T: TimeSource<I>> Pushbutton<'t, I, S, T> {
    /// Creates a button with the default debounce window.
    pub fn new(source: S, time_source: &'t T) -> Self {
        Self {
            source,
            time_source,
            press: DebounceFilter::new(),
            release: DebounceFilter::new(),
        }
    }

    /// Replaces both filters with fresh ones using a custom debounce window.
    pub fn with_threshold(mut self, threshold_ms: u16) -> Self {
        self.press = DebounceFilter::with_threshold(threshold_ms);
        self.release = DebounceFilter::with_threshold(threshold_ms);
        self
    }

    /// Returns the raw (not debounced) pressed level.
    pub fn is_pressed(&mut self) -> Result<bool, ButtonError<S::Error>> {
        self.source.read_raw_level().map_err(ButtonError::Read)
    }

    /// Returns true once per debounced press.
    ///
    /// Requires the button to be released for the debounce window and then
    /// pressed for the debounce window.
    pub fn poll_single_press(&mut self) -> Result<bool, ButtonError<S::Error>> {
        let level = self.is_pressed()?;
        let pressed = self.press.evaluate(level, self.time_source.now());

        #[cfg(feature = "defmt")]
        if pressed {
            defmt::debug!("button press confirmed");
        }

        Ok(pressed)
    }

    /// Returns true once per debounced release.
    ///
    /// Requires the button to be pressed for the debounce window and then
    /// released for the debounce window.
    pub fn poll_single_release(&mut self) -> Result<bool, ButtonError<S::Error>> {
        let level = self.is_pressed()?;
        let released = self.release.evaluate(!level, self.time_source.now());

        #[cfg(feature = "defmt")]
        if released {
            defmt::debug!("button release confirmed");
        }

        Ok(released)
    }

    /// Drives both filters from a single read.
    ///
    /// Both filters see complementary views of the same sample, so at most one
    /// event is reported per call.
    pub fn poll(&mut self) -> Result<Option<ButtonEvent>, ButtonError<S::Error>> {
        let level = self.is_pressed()?;
        let now = self.time_source.now();

        let pressed = self.press.evaluate(level, now);
        let released = self.release.evaluate(!level, now);

        let event = match (pressed, released) {
            (true, _) => Some(ButtonEvent::Pressed),
            (_, true) => Some(ButtonEvent::Released),
            _ => None,
        };

        #[cfg(feature = "defmt")]
        if let Some(event) = event {
            defmt::debug!("button event: {}", event);
        }

        Ok(event)
    }

    /// Blocks until the button is pressed.
    pub fn wait_for_press<D: DelayNs>(
        &mut self,
        delay: &mut D,
    ) -> Result<(), ButtonError<S::Error>> {
        self.wait_for_level(true, delay)
    }

    /// Blocks until the button is released.
    pub fn wait_for_release<D: DelayNs>(
        &mut self,
        delay: &mut D,
    ) -> Result<(), ButtonError<S::Error>> {
        self.wait_for_level(false, delay)
    }

    /// Blocks until the button is pressed and then released.
    pub fn wait_for_button<D: DelayNs>(
        &mut self,
        delay: &mut D,
    ) -> Result<(), ButtonError<S::Error>> {
        self.wait_for_press(delay)?;
        self.wait_for_release(delay)
    }

    fn wait_for_level<D: DelayNs>(
        &mut self,
        pressed: bool,
        delay: &mut D,
    ) -> Result<(), ButtonError<S::Error>> {
        loop {
            while self.is_pressed()? != pressed {}
            delay.delay_ms(WAIT_DEBOUNCE_MS);
            if self.is_pressed()? == pressed {
                return Ok(());
            }
        }
    }

    /// Recreates both filters, keeping the debounce window.
    pub fn reset_filters(&mut self) {
        self.press = DebounceFilter::with_threshold(self.press.threshold_ms());
        self.release = DebounceFilter::with_threshold(self.release.threshold_ms());
    }

    /// Returns the state of the press detector.
    pub fn press_state(&self) -> FilterState {
        self.press.state()
    }

    /// Returns the state of the release detector.
    pub fn release_state(&self) -> FilterState {
        self.release.state()
    }

    /// Returns a reference to the raw level source.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Returns a mutable reference to the raw level source.
    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    /// Consumes the button and returns the raw level source.
    pub fn release_source(self) -> S {
        self.source
    }
}
