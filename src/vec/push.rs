// This file is part of alloc-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{allocator::Allocator, error::Error, vec::AllocVec};

impl<T, A: Allocator> AllocVec<T, A> {
    /// Appends `value`, growing the block if it is full.
    ///
    /// On error the vector is unchanged and `value` is dropped.
    #[inline]
    pub fn push(&mut self, value: T) -> Result<(), Error> {
        self.emplace_back_with(|| value).map(|_| ())
    }

    /// Appends the value produced by `f` and returns a reference to it.
    ///
    /// With spare capacity the value is constructed straight into the next
    /// slot. Otherwise a block of `max(1, 2 * capacity)` slots is obtained,
    /// `f` runs with its result placed into that block, and only then are
    /// the existing elements moved over. A panic in `f` leaves the vector
    /// unchanged.
    pub fn emplace_back_with<F>(&mut self, f: F) -> Result<&mut T, Error>
    where
        F: FnOnce() -> T,
    {
        let len = self.len;
        if len < self.capacity() {
            let value = f();
            // SAFETY: `len < capacity`; the new element sits at `len`.
            unsafe {
                self.push_in_place(value);
                return Ok(self.slot_mut(len));
            }
        }
        let new_cap = self.grow_for(1)?;
        self.relocate_into(new_cap, len, 1, |staging, _| staging.construct(f()))?;
        // SAFETY: the new element sits at `len < self.len`.
        Ok(unsafe { self.slot_mut(len) })
    }

    /// Appends a clone of the element at `index`.
    ///
    /// When the block is full the clone is taken from the old block into the
    /// new one before any element moves, so the source stays valid
    /// throughout. Returns [`Error::OutOfRange`] if `index >= len`.
    pub fn push_within(&mut self, index: usize) -> Result<&mut T, Error>
    where
        T: Clone,
    {
        let len = self.len;
        if index >= len {
            return Err(Error::OutOfRange { index, len });
        }
        if len < self.capacity() {
            let value = self.as_slice()[index].clone();
            // SAFETY: `len < capacity`.
            unsafe {
                self.push_in_place(value);
                return Ok(self.slot_mut(len));
            }
        }
        let new_cap = self.grow_for(1)?;
        self.relocate_into(new_cap, len, 1, |staging, current| {
            staging.construct(current[index].clone())
        })?;
        // SAFETY: the new element sits at `len < self.len`.
        Ok(unsafe { self.slot_mut(len) })
    }
}
