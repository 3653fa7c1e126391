//! Shared test infrastructure for pushbutton integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use core::cell::Cell;
use core::convert::Infallible;
use embedded_hal::delay::DelayNs;
use heapless::Deque;
use pushbutton::{RawLevel, TimeSource};

// ============================================================================
// Mock Time Source
// ============================================================================

/// Mock 16-bit millisecond clock with controllable time advancement
pub struct MockTimeSource {
    current_time: Cell<u16>,
}

impl MockTimeSource {
    pub fn new() -> Self {
        Self::starting_at(0)
    }

    pub fn starting_at(millis: u16) -> Self {
        Self {
            current_time: Cell::new(millis),
        }
    }

    /// Advance time by the given number of milliseconds, wrapping at 16 bits
    pub fn advance(&self, millis: u16) {
        self.current_time
            .set(self.current_time.get().wrapping_add(millis));
    }

    pub fn set_time(&self, millis: u16) {
        self.current_time.set(millis);
    }
}

impl TimeSource<u16> for MockTimeSource {
    fn now(&self) -> u16 {
        self.current_time.get()
    }
}

// ============================================================================
// Mock Level Sources
// ============================================================================

/// Level source whose value is shared with the test through a `Cell`
pub struct SharedLevel<'a> {
    pressed: &'a Cell<bool>,
}

impl<'a> SharedLevel<'a> {
    pub fn new(pressed: &'a Cell<bool>) -> Self {
        Self { pressed }
    }
}

impl RawLevel for SharedLevel<'_> {
    type Error = Infallible;

    fn read_raw_level(&mut self) -> Result<bool, Self::Error> {
        Ok(self.pressed.get())
    }
}

/// Level source replaying a fixed script, then repeating the last sample
pub struct ScriptedLevel {
    samples: Deque<bool, 64>,
    last: bool,
}

impl ScriptedLevel {
    pub fn new(samples: &[bool]) -> Self {
        let mut deque = Deque::new();
        for &sample in samples {
            deque.push_back(sample).unwrap();
        }
        Self {
            samples: deque,
            last: false,
        }
    }

    pub fn remaining(&self) -> usize {
        self.samples.len()
    }
}

impl RawLevel for ScriptedLevel {
    type Error = Infallible;

    fn read_raw_level(&mut self) -> Result<bool, Self::Error> {
        if let Some(sample) = self.samples.pop_front() {
            self.last = sample;
        }
        Ok(self.last)
    }
}

/// Error reported by `FailingLevel`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BusFault;

/// Level source that fails while `failing` is set
pub struct FailingLevel<'a> {
    pressed: &'a Cell<bool>,
    failing: &'a Cell<bool>,
}

impl<'a> FailingLevel<'a> {
    pub fn new(pressed: &'a Cell<bool>, failing: &'a Cell<bool>) -> Self {
        Self { pressed, failing }
    }
}

impl RawLevel for FailingLevel<'_> {
    type Error = BusFault;

    fn read_raw_level(&mut self) -> Result<bool, Self::Error> {
        if self.failing.get() {
            Err(BusFault)
        } else {
            Ok(self.pressed.get())
        }
    }
}

// ============================================================================
// Mock Delay
// ============================================================================

/// Delay that advances a `MockTimeSource` and records every millisecond delay
pub struct ClockDelay<'a> {
    clock: &'a MockTimeSource,
    history: heapless::Vec<u32, 32>,
}

impl<'a> ClockDelay<'a> {
    pub fn new(clock: &'a MockTimeSource) -> Self {
        Self {
            clock,
            history: heapless::Vec::new(),
        }
    }

    pub fn history(&self) -> &[u32] {
        &self.history
    }
}

impl DelayNs for ClockDelay<'_> {
    fn delay_ns(&mut self, ns: u32) {
        self.clock.advance((ns / 1_000_000) as u16);
    }

    fn delay_ms(&mut self, ms: u32) {
        self.clock.advance(ms as u16);
        let _ = self.history.push(ms);
    }
}

// ============================================================================
// Test Helper Functions
// ============================================================================

/// Feeds `(sample, time)` pairs to `evaluate` and collects the results
pub fn run<F: FnMut(bool, u16) -> bool>(
    mut evaluate: F,
    samples: &[(bool, u16)],
) -> heapless::Vec<bool, 64> {
    samples
        .iter()
        .map(|&(sample, now)| evaluate(sample, now))
        .collect()
}
