//! Error values returned by `RingBuffer`.

use core::fmt;

use thiserror::Error;

const CAPERROR: &str = "insufficient capacity";

/// Error value indicating insufficient capacity
///
/// This error only occurs on a `RingBuffer` built with `WriteMode::Reject`.
#[derive(Clone, Copy, Eq, Ord, PartialEq, PartialOrd, Error)]
#[error("insufficient capacity")]
pub struct CapacityError<T = ()> {
    /// The element that caused the error.
    pub element: T,
}

impl<T> CapacityError<T> {
    /// Takes back the rejected element.
    #[inline]
    pub fn into_element(self) -> T {
        self.element
    }
}

impl<T> fmt::Debug for CapacityError<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}: {}", "CapacityError", CAPERROR)
    }
}

/// Error value returned by the read operations.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Error)]
pub enum ReadError {
    /// The buffer holds no elements.
    #[error("buffer is empty")]
    Empty,
    /// A peek scan has moved past its anchor; call `reset_scan` or finish the
    /// scan before removing.
    #[error("a peek scan is in progress")]
    ScanInProgress,
}

/// Error value returned when a `RingBuffer` cannot be built.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Error)]
pub enum BuildError {
    /// A ring needs room for at least one element.
    #[error("capacity must be at least 1")]
    ZeroCapacity,
    /// The backing store could not be allocated.
    #[error("failed to allocate storage for {capacity} elements")]
    AllocationFailed {
        /// The requested capacity.
        capacity: usize,
    },
}
