//! Core types shared by the filter and the button facade.

/// Observable state of a [`DebounceFilter`](crate::DebounceFilter).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FilterState {
    /// Input is considered true.
    StableTrue,

    /// Input was true, but a recent false sample means it might be falling.
    MaybeFalling,

    /// Input is considered false.
    StableFalse,

    /// Input was false, but a recent true sample means it might be rising.
    MaybeRising,
}

impl FilterState {
    /// Returns true for `StableTrue` and `StableFalse`.
    #[inline]
    pub fn is_stable(self) -> bool {
        matches!(self, FilterState::StableTrue | FilterState::StableFalse)
    }
}

/// Electrical level of a button input while it is not pressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Polarity {
    /// Pulled up and shorted to ground when pressed.
    #[default]
    IdleHigh,

    /// Pulled down and driven high when pressed.
    IdleLow,
}

/// A debounced edge reported by [`Pushbutton::poll`](crate::Pushbutton::poll).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ButtonEvent {
    /// Released for at least the debounce window, then pressed for at least the
    /// debounce window.
    Pressed,

    /// Pressed for at least the debounce window, then released for at least the
    /// debounce window.
    Released,
}

/// Errors that can occur during button operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ButtonError<E> {
    /// Reading the raw level from the signal source failed.
    Read(E),
}

impl<E: core::fmt::Debug> core::fmt::Display for ButtonError<E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ButtonError::Read(err) => {
                write!(f, "failed to read raw button level: {:?}", err)
            }
        }
    }
}

#[cfg(feature = "std")]
impl<E: core::fmt::Debug> std::error::Error for ButtonError<E> {}

impl<E> ButtonError<E> {
    /// Returns the source's error.
    pub fn into_inner(self) -> E {
        match self {
            ButtonError::Read(err) => err,
        }
    }
}
