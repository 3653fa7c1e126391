//! Time abstraction traits for platform-agnostic timing.
//!
//! The debounce filter only ever measures short intervals, so instants are plain
//! wrapping millisecond counters. Elapsed time is computed with modular
//! subtraction over the counter width, which keeps every measurement correct
//! across wraparound no matter how long the device has been running.

/// Trait for abstracting time sources.
pub trait TimeSource<I: TimeInstant> {
    /// Returns the current time instant.
    fn now(&self) -> I;
}

/// Trait abstraction for wrapping millisecond instants.
pub trait TimeInstant: Copy {
    /// Milliseconds elapsed since an earlier instant.
    ///
    /// Must use wrapping subtraction so that a counter which rolled over between
    /// `earlier` and `self` still yields the true (short) interval.
    fn millis_since(&self, earlier: Self) -> u32;
}

impl TimeInstant for u16 {
    #[inline]
    fn millis_since(&self, earlier: Self) -> u32 {
        u32::from(self.wrapping_sub(earlier))
    }
}

impl TimeInstant for u32 {
    #[inline]
    fn millis_since(&self, earlier: Self) -> u32 {
        self.wrapping_sub(earlier)
    }
}
