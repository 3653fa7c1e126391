//! Time-driven debounce state machine.
//!
//! Provides [`DebounceFilter`], which turns a stream of raw boolean samples into
//! debounced rising-edge events. A new level must hold for the whole debounce
//! window before it is accepted; any contrary sample inside the window sends the
//! filter back to the previous stable level instead of restarting the timer.

use crate::time::TimeInstant;
use crate::types::FilterState;

/// Default debounce window in milliseconds.
pub const DEFAULT_DEBOUNCE_MS: u16 = 15;

// The entry timestamp lives inside the unstable variants so it can never be
// read while the filter is settled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase<I> {
    StableTrue,
    MaybeFalling { since: I },
    StableFalse,
    MaybeRising { since: I },
}

/// Debounced rising-edge detector for a single boolean signal.
///
/// Starts in [`FilterState::StableTrue`], matching the idle-high level of a
/// pulled-up input. Feed it with [`evaluate`](Self::evaluate) on a regular
/// cadence; it reports `true` exactly once per confirmed rising edge.
///
/// To detect falling edges, feed a second instance with the negated signal.
///
/// # Type Parameters
/// * `I` - Wrapping millisecond instant type (defaults to `u16`)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DebounceFilter<I: TimeInstant = u16> {
    phase: Phase<I>,
    threshold_ms: u16,
}

impl<I: TimeInstant> DebounceFilter<I> {
    /// Creates a filter with the default 15 ms window.
    pub const fn new() -> Self {
        Self::with_threshold(DEFAULT_DEBOUNCE_MS)
    }

    /// Creates a filter with a custom debounce window.
    ///
    /// The window is fixed for the lifetime of the filter.
    pub const fn with_threshold(threshold_ms: u16) -> Self {
        Self {
            phase: Phase::StableTrue,
            threshold_ms,
        }
    }

    /// Advances the state machine with a new sample taken at `now`.
    ///
    /// Returns `true` only on the call that moves the filter from
    /// `MaybeRising` to `StableTrue`.
    pub fn evaluate(&mut self, sample: bool, now: I) -> bool {
        match self.phase {
            Phase::StableTrue => {
                if !sample {
                    self.phase = Phase::MaybeFalling { since: now };
                }
            }
            Phase::MaybeFalling { since } => {
                if sample {
                    self.phase = Phase::StableTrue;
                } else if self.window_elapsed(since, now) {
                    self.phase = Phase::StableFalse;
                }
            }
            Phase::StableFalse => {
                if sample {
                    self.phase = Phase::MaybeRising { since: now };
                }
            }
            Phase::MaybeRising { since } => {
                if !sample {
                    self.phase = Phase::StableFalse;
                } else if self.window_elapsed(since, now) {
                    self.phase = Phase::StableTrue;
                    return true;
                }
            }
        }

        false
    }

    #[inline]
    fn window_elapsed(&self, since: I, now: I) -> bool {
        now.millis_since(since) >= u32::from(self.threshold_ms)
    }

    /// Returns the current state.
    pub fn state(&self) -> FilterState {
        match self.phase {
            Phase::StableTrue => FilterState::StableTrue,
            Phase::MaybeFalling { .. } => FilterState::MaybeFalling,
            Phase::StableFalse => FilterState::StableFalse,
            Phase::MaybeRising { .. } => FilterState::MaybeRising,
        }
    }

    /// Returns true if the filter is not inside a debounce window.
    pub fn is_settled(&self) -> bool {
        self.state().is_stable()
    }

    /// Returns the debounce window in milliseconds.
    pub fn threshold_ms(&self) -> u16 {
        self.threshold_ms
    }
}

impl<I: TimeInstant> Default for DebounceFilter<I> {
    fn default() -> Self {
        Self::new()
    }
}
