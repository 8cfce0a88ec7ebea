//! Peek scan progress and the outcome of a read.

/// Where the current peek scan stands.
///
/// `ptr` is the slot the next peek returns, `count` is how many elements the
/// scan has returned since it last started over.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScanProgress {
    pub ptr: usize,
    pub count: usize,
}

impl ScanProgress {
    /// A fresh scan starting at `anchor`.
    #[inline]
    pub fn at(anchor: usize) -> ScanProgress {
        ScanProgress { ptr: anchor, count: 0 }
    }

    #[inline]
    pub fn is_started(&self) -> bool {
        self.count != 0
    }
}

/// Whether a read left more elements to return.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ReadStatus {
    /// More elements remain in the current scan, or in the buffer for a removal.
    Remaining,
    /// The element read was the last one: a peek scan has wrapped back to the
    /// oldest element, or a removal has emptied the buffer.
    Complete,
}

/// An element returned by `peek_read` or `remove_read`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Read<T> {
    /// The element.
    pub value: T,
    /// Whether more elements remain.
    pub status: ReadStatus,
}

impl<T> Read<T> {
    #[inline]
    pub(crate) fn new(value: T, complete: bool) -> Read<T> {
        let status = if complete {
            ReadStatus::Complete
        } else {
            ReadStatus::Remaining
        };
        Read { value, status }
    }

    /// Returns `true` if this was the last element of the scan or of the buffer.
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.status == ReadStatus::Complete
    }

    /// Returns `true` if more elements remain.
    #[inline]
    pub fn has_more(&self) -> bool {
        self.status == ReadStatus::Remaining
    }

    /// Takes the element, discarding the status.
    #[inline]
    pub fn into_value(self) -> T {
        self.value
    }

    /// Maps the element, keeping the status.
    #[inline]
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Read<U> {
        Read { value: f(self.value), status: self.status }
    }
}

impl<'a, T: Clone> Read<&'a T> {
    /// Clones the borrowed element.
    ///
    /// ```
    /// use ringscan::{RingBuffer, WriteMode};
    ///
    /// let mut ring = RingBuffer::new(2, WriteMode::Reject).unwrap();
    /// ring.insert(String::from("a")).unwrap();
    ///
    /// let owned = ring.peek_read().unwrap().cloned();
    /// assert_eq!(owned.value, "a");
    /// assert!(owned.is_complete());
    /// ```
    #[inline]
    pub fn cloned(self) -> Read<T> {
        self.map(Clone::clone)
    }
}
