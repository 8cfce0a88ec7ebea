//! A circular buffer with fixed capacity and two ways of reading.
//!
//! The capacity is chosen when the buffer is built and the backing store is
//! allocated once, up front. Two independent choices shape its behavior:
//!
//! - **Writing into a full buffer.** With [`WriteMode::Overwrite`] the oldest
//!   element is evicted to make room. With [`WriteMode::Reject`] the insert
//!   fails and the element is handed back.
//! - **Reading.** [`peek_read`] scans the live elements oldest first without
//!   removing them, starting over automatically once every element has been
//!   returned. [`remove_read`] consumes the oldest element for good.
//!
//! A removal is refused while a peek scan is part way through; call
//! [`reset_scan`] to abandon the scan first.
//!
//! # Feature Flags
//! The **ringscan** crate has the following cargo feature flags:
//!
//! - `std`
//!   - Optional, enabled by default
//!   - Use libstd; without it the crate is `no_std` and needs `alloc`
//!
//! # Examples
//! ```
//! use ringscan::{ReadError, RingBuffer, WriteMode};
//!
//! let mut ring = RingBuffer::new(5, WriteMode::Overwrite).unwrap();
//! for x in 1..4 {
//!     ring.insert(x).unwrap();
//! }
//!
//! // A peek scan returns every element once, then starts over.
//! let seen: Vec<_> = (0..3).map(|_| ring.peek_read().unwrap().cloned()).collect();
//! assert_eq!(seen.iter().map(|r| r.value).collect::<Vec<_>>(), vec![1, 2, 3]);
//! assert!(seen[2].is_complete());
//!
//! // Filling past capacity evicts the oldest element.
//! for x in 4..7 {
//!     ring.insert(x).unwrap();
//! }
//! assert_eq!(format!("{:?}", ring), "[2, 3, 4, 5, 6]");
//!
//! // No removals in the middle of a scan.
//! ring.peek_read().unwrap();
//! assert_eq!(ring.remove_read().err(), Some(ReadError::ScanInProgress));
//! ring.reset_scan();
//!
//! let mut drained = Vec::new();
//! while let Ok(read) = ring.remove_read() {
//!     drained.push(read.value);
//! }
//! assert_eq!(drained, vec![2, 3, 4, 5, 6]);
//! assert!(ring.is_empty());
//! ```
//!
//! [`WriteMode::Overwrite`]: enum.WriteMode.html#variant.Overwrite
//! [`WriteMode::Reject`]: enum.WriteMode.html#variant.Reject
//! [`peek_read`]: struct.RingBuffer.html#method.peek_read
//! [`remove_read`]: struct.RingBuffer.html#method.remove_read
//! [`reset_scan`]: struct.RingBuffer.html#method.reset_scan

#![cfg_attr(not(any(feature = "std", test)), no_std)]
#![deny(missing_docs)]

extern crate alloc;

use core::fmt;

use log::{debug, trace};

mod behavior;
pub mod error;
mod scan;
mod slots;
mod utils;

pub use crate::behavior::WriteMode;
pub use crate::error::{BuildError, CapacityError, ReadError};
pub use crate::scan::{Read, ReadStatus};

use crate::scan::ScanProgress;
use crate::slots::Slots;
use crate::utils::{count, wrap_add};

/// A fixed capacity ring buffer with repeatable peek scans.
///
/// The oldest live element sits at the *anchor*. Peek scans start at the
/// anchor and keep their own position, so scanning never disturbs what a
/// removal will return. Removals and overwrite evictions move the anchor.
pub struct RingBuffer<T> {
    slots: Slots<T>,
    len: usize,
    mode: WriteMode,
    write: usize,
    anchor: usize,
    scan: ScanProgress,
}

// Live elements occupy the `len` slots starting at `anchor`, so
// `write == anchor + len` modulo the capacity.
impl<T> RingBuffer<T> {
    /// Creates an empty `RingBuffer` able to hold `capacity` elements.
    ///
    /// Fails with `BuildError::ZeroCapacity` for a zero capacity, and with
    /// `BuildError::AllocationFailed` if the backing store cannot be allocated.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringscan::{BuildError, RingBuffer, WriteMode};
    ///
    /// let ring: RingBuffer<u32> = RingBuffer::new(3, WriteMode::Reject).unwrap();
    /// assert_eq!(ring.capacity(), 3);
    ///
    /// let zero = RingBuffer::<u32>::new(0, WriteMode::Reject);
    /// assert_eq!(zero.err(), Some(BuildError::ZeroCapacity));
    /// ```
    pub fn new(capacity: usize, mode: WriteMode) -> Result<RingBuffer<T>, BuildError> {
        let slots = Slots::try_new(capacity)?;
        debug!("ring buffer allocated: capacity={}, mode={:?}", capacity, mode);
        Ok(RingBuffer {
            slots,
            len: 0,
            mode,
            write: 0,
            anchor: 0,
            scan: ScanProgress::at(0),
        })
    }

    #[inline]
    fn wrap_add(&self, index: usize, addend: usize) -> usize {
        wrap_add(index, addend, self.capacity())
    }

    #[inline]
    fn debug_check(&self) {
        debug_assert!(self.len <= self.capacity());
        debug_assert!(self.scan.count <= self.len);
        debug_assert_eq!(count(self.anchor, self.write, self.capacity()),
                         self.len % self.capacity());
    }

    /// Returns the number of elements the `RingBuffer` can hold.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Returns the number of live elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the buffer holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns `true` if `len() == capacity()`.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.len == self.capacity()
    }

    /// Returns the write mode chosen at construction.
    #[inline]
    pub fn write_mode(&self) -> WriteMode {
        self.mode
    }

    /// Returns `true` if a peek scan has returned at least one element since
    /// it last started over.
    #[inline]
    pub fn is_scanning(&self) -> bool {
        self.scan.is_started()
    }

    /// Returns how many elements the current peek scan has returned.
    #[inline]
    pub fn scan_position(&self) -> usize {
        self.scan.count
    }

    /// Inserts an element as the newest element of the buffer.
    ///
    /// Returns `Ok(None)` if there was room, `Ok(Some(oldest))` if the buffer
    /// was full and the oldest element was overwritten, or
    /// `Err(CapacityError { element })` if the buffer is full and was built
    /// with `WriteMode::Reject`.
    ///
    /// An overwrite moves the anchor to the next oldest element. A peek scan
    /// that is part way through keeps its position and finishes with the
    /// elements it has not yet returned; the next scan starts from the new
    /// anchor.
    ///
    /// # Examples
    ///
    /// ```text
    /// Overwrite:
    /// [_, _, _] <-(+)- 1 => [1, _, _] -> Ok(None)
    /// [1, 2, 3] <-(+)- 4 => [2, 3, 4] -> Ok(Some(1))
    ///
    /// Reject:
    /// [1, 2, 3] <-(+)- 4 => [1, 2, 3] -> Err(CapacityError { element: 4 })
    /// ```
    ///
    /// ```
    /// use ringscan::{RingBuffer, WriteMode};
    ///
    /// let mut ring = RingBuffer::new(2, WriteMode::Overwrite).unwrap();
    /// assert_eq!(ring.insert(1).ok(), Some(None));
    /// assert_eq!(ring.insert(2).ok(), Some(None));
    /// assert_eq!(ring.insert(3).ok(), Some(Some(1)));
    ///
    /// let mut ring = RingBuffer::new(2, WriteMode::Reject).unwrap();
    /// ring.insert(1).unwrap();
    /// ring.insert(2).unwrap();
    /// assert_eq!(ring.insert(3).unwrap_err().element, 3);
    /// assert_eq!(ring.len(), 2);
    /// ```
    pub fn insert(&mut self, element: T) -> Result<Option<T>, CapacityError<T>> {
        let write = self.write;
        let evicted = if self.is_full() {
            if !self.mode.overwrites() {
                trace!("insert rejected: buffer full at capacity {}", self.capacity());
                return Err(CapacityError { element });
            }
            debug_assert_eq!(write, self.anchor);
            self.anchor = self.wrap_add(self.anchor, 1);
            if !self.scan.is_started() {
                self.scan = ScanProgress::at(self.anchor);
            }
            trace!("overwrote oldest element at slot {}", write);
            // full, so the write slot holds the oldest element
            Some(unsafe { self.slots.replace(write, element) })
        } else {
            unsafe { self.slots.write(write, element) };
            self.len += 1;
            None
        };
        self.write = self.wrap_add(write, 1);
        self.debug_check();
        Ok(evicted)
    }

    /// Returns the next element of the current peek scan without removing it.
    ///
    /// Scans start at the oldest element. The read that returns the last
    /// live element reports `ReadStatus::Complete` and the scan starts over,
    /// so the next call returns the oldest element again.
    ///
    /// Fails with `ReadError::Empty` if there are no elements.
    ///
    /// # Examples
    ///
    /// ```text
    /// [1, 2, 3] -(peek)-> 1 Remaining
    /// [1, 2, 3] -(peek)-> 2 Remaining
    /// [1, 2, 3] -(peek)-> 3 Complete
    /// [1, 2, 3] -(peek)-> 1 Remaining
    /// ```
    ///
    /// ```
    /// use ringscan::{ReadStatus, RingBuffer, WriteMode};
    ///
    /// let mut ring = RingBuffer::new(4, WriteMode::Overwrite).unwrap();
    /// ring.insert('a').unwrap();
    /// ring.insert('b').unwrap();
    ///
    /// let first = ring.peek_read().unwrap();
    /// assert_eq!((*first.value, first.status), ('a', ReadStatus::Remaining));
    /// let second = ring.peek_read().unwrap();
    /// assert_eq!((*second.value, second.status), ('b', ReadStatus::Complete));
    /// assert_eq!(*ring.peek_read().unwrap().value, 'a');
    /// assert_eq!(ring.len(), 2);
    /// ```
    pub fn peek_read(&mut self) -> Result<Read<&T>, ReadError> {
        if self.is_empty() {
            return Err(ReadError::Empty);
        }
        let index = self.scan.ptr;
        self.scan.count += 1;
        let complete = self.scan.count >= self.len;
        if complete {
            self.reset_scan();
        } else {
            self.scan.ptr = self.wrap_add(index, 1);
        }
        self.debug_check();
        // a scan never leaves the live slots
        Ok(Read::new(unsafe { self.slots.get(index) }, complete))
    }

    /// Abandons the current peek scan: the next peek returns the oldest element.
    ///
    /// ```
    /// use ringscan::{RingBuffer, WriteMode};
    ///
    /// let mut ring = RingBuffer::new(3, WriteMode::Reject).unwrap();
    /// ring.insert(10).unwrap();
    /// ring.insert(20).unwrap();
    /// ring.peek_read().unwrap();
    /// assert!(ring.is_scanning());
    ///
    /// ring.reset_scan();
    /// assert!(!ring.is_scanning());
    /// assert_eq!(*ring.peek_read().unwrap().value, 10);
    /// ```
    #[inline]
    pub fn reset_scan(&mut self) {
        trace!("scan reset after {} reads", self.scan.count);
        self.scan = ScanProgress::at(self.anchor);
    }

    /// Removes the oldest element and returns it.
    ///
    /// The status is `ReadStatus::Complete` when the removal emptied the buffer.
    ///
    /// Fails with `ReadError::Empty` if there are no elements, and with
    /// `ReadError::ScanInProgress` if a peek scan has moved past the oldest
    /// element. Finishing the scan or calling `reset_scan` makes removals
    /// possible again.
    ///
    /// # Examples
    ///
    /// ```text
    /// [1, 2] -(remove)-> 1 Remaining => [2]
    /// [2]    -(remove)-> 2 Complete  => []
    /// []     -(remove)-> Err(Empty)
    /// ```
    ///
    /// ```
    /// use ringscan::{ReadError, RingBuffer, WriteMode};
    ///
    /// let mut ring = RingBuffer::new(3, WriteMode::Reject).unwrap();
    /// ring.insert(1).unwrap();
    /// ring.insert(2).unwrap();
    ///
    /// ring.peek_read().unwrap();
    /// assert_eq!(ring.remove_read(), Err(ReadError::ScanInProgress));
    /// ring.reset_scan();
    ///
    /// let one = ring.remove_read().unwrap();
    /// assert_eq!(one.value, 1);
    /// assert!(one.has_more());
    /// let two = ring.remove_read().unwrap();
    /// assert_eq!(two.value, 2);
    /// assert!(two.is_complete());
    /// assert_eq!(ring.remove_read(), Err(ReadError::Empty));
    /// ```
    pub fn remove_read(&mut self) -> Result<Read<T>, ReadError> {
        if self.is_empty() {
            return Err(ReadError::Empty);
        }
        if self.scan.ptr != self.anchor {
            debug!("removal refused: scan at slot {}, anchor at slot {}",
                   self.scan.ptr,
                   self.anchor);
            return Err(ReadError::ScanInProgress);
        }
        let index = self.anchor;
        let value = unsafe { self.slots.take(index) };
        self.anchor = self.wrap_add(index, 1);
        self.scan = ScanProgress::at(self.anchor);
        self.len -= 1;
        self.debug_check();
        Ok(Read::new(value, self.len == 0))
    }
}

impl<T> Drop for RingBuffer<T> {
    fn drop(&mut self) {
        let mut index = self.anchor;
        for _ in 0..self.len {
            unsafe { self.slots.drop_in_place(index) };
            index = self.wrap_add(index, 1);
        }
        self.len = 0;
    }
}

impl<T: fmt::Debug> fmt::Debug for RingBuffer<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let anchor = self.anchor;
        f.debug_list()
            .entries((0..self.len).map(|i| unsafe { self.slots.get(self.wrap_add(anchor, i)) }))
            .finish()
    }
}
