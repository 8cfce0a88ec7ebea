//! The owned backing store of a `RingBuffer`.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::mem::MaybeUninit;

use crate::error::BuildError;

/// A fixed run of possibly uninitialized slots.
///
/// `Slots` never tracks which slots hold a value and never drops one on its
/// own; the owning ring does that bookkeeping.
pub struct Slots<T> {
    xs: Box<[MaybeUninit<T>]>,
}

impl<T> Slots<T> {
    /// Allocates `capacity` uninitialized slots in a single block.
    pub fn try_new(capacity: usize) -> Result<Slots<T>, BuildError> {
        if capacity == 0 {
            return Err(BuildError::ZeroCapacity);
        }
        let mut xs = Vec::new();
        xs.try_reserve_exact(capacity)
            .map_err(|_| BuildError::AllocationFailed { capacity })?;
        xs.resize_with(capacity, MaybeUninit::uninit);
        Ok(Slots { xs: xs.into_boxed_slice() })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.xs.len()
    }

    /// Writes `value` into an uninitialized slot.
    ///
    /// The slot must not hold a value, or that value is leaked.
    #[inline]
    pub unsafe fn write(&mut self, index: usize, value: T) {
        self.xs[index].write(value);
    }

    /// Swaps `value` into an initialized slot and returns the old value.
    #[inline]
    pub unsafe fn replace(&mut self, index: usize, value: T) -> T {
        let old = self.take(index);
        self.write(index, value);
        old
    }

    /// Borrows the value in an initialized slot.
    #[inline]
    pub unsafe fn get(&self, index: usize) -> &T {
        self.xs[index].assume_init_ref()
    }

    /// Moves the value out of an initialized slot, leaving it uninitialized.
    #[inline]
    pub unsafe fn take(&mut self, index: usize) -> T {
        self.xs[index].assume_init_read()
    }

    /// Drops the value in an initialized slot, leaving it uninitialized.
    #[inline]
    pub unsafe fn drop_in_place(&mut self, index: usize) {
        self.xs[index].assume_init_drop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_capacity_is_refused() {
        assert_eq!(Slots::<u8>::try_new(0).err(), Some(BuildError::ZeroCapacity));
    }

    #[test]
    fn huge_capacity_reports_allocation_failure() {
        let capacity = usize::MAX / 2;
        assert_eq!(Slots::<u64>::try_new(capacity).err(),
                   Some(BuildError::AllocationFailed { capacity }));
    }

    #[test]
    fn write_take_replace() {
        let mut slots = Slots::try_new(2).unwrap();
        assert_eq!(slots.len(), 2);
        unsafe {
            slots.write(1, String::from("a"));
            assert_eq!(slots.get(1), "a");
            assert_eq!(slots.replace(1, String::from("b")), "a");
            assert_eq!(slots.take(1), "b");
        }
    }
}
