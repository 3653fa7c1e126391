#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`DebounceFilter`**: 4-state machine that reports debounced rising edges of a boolean signal
//! - **`FilterState`**: Observable state of a filter (`StableTrue`, `MaybeFalling`, `StableFalse`, `MaybeRising`)
//! - **`Pushbutton`**: Owns a press detector, a release detector and a raw level source
//! - **`RawLevel`**: Trait to implement for your button input (polarity-corrected, non-blocking)
//! - **`PinLevel`**: `RawLevel` adapter for `embedded-hal` input pins
//! - **`TimeSource`**: Trait to implement for your millisecond clock
//! - **`TimeInstant`**: Wrapping millisecond instant (`u16` and `u32` provided)
//!
//! All elapsed-time arithmetic wraps, so a 16-bit millisecond counter that rolls
//! over every ~65 seconds is perfectly fine as a time base.

pub mod time;
pub mod types;
pub mod filter;
pub mod level;
pub mod button;

pub use filter::{DEFAULT_DEBOUNCE_MS, DebounceFilter};
pub use types::{ButtonError, ButtonEvent, FilterState, Polarity};
pub use time::{TimeInstant, TimeSource};
pub use level::{Inverted, PinLevel, RawLevel};
pub use button::{Pushbutton, WAIT_DEBOUNCE_MS};
