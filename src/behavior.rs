//! Write semantics for `RingBuffer`.

/// What an insert does when the `RingBuffer` **has already reached its capacity**.
///
/// The mode is chosen once in [`RingBuffer::new`](crate::RingBuffer::new) and
/// never changes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum WriteMode {
    /// Inserting into a full buffer **overwrites** the oldest element.
    ///
    /// The evicted element is handed back to the caller and the scan anchor
    /// moves to the next oldest element.
    Overwrite,
    /// Inserting into a full buffer **exits early, without performing any mutation**.
    ///
    /// The rejected element is handed back inside a `CapacityError`.
    Reject,
}

impl WriteMode {
    /// Returns `true` for `WriteMode::Overwrite`.
    #[inline]
    pub fn overwrites(self) -> bool {
        self == WriteMode::Overwrite
    }
}

impl Default for WriteMode {
    #[inline]
    fn default() -> Self {
        WriteMode::Overwrite
    }
}
