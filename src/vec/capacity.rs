// This file is part of alloc-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{allocator::Allocator, error::Error, growth, vec::AllocVec};

impl<T, A: Allocator> AllocVec<T, A> {
    /// Ensures `capacity() >= capacity`.
    ///
    /// Takes the requested **total** capacity, not an increment. A request
    /// that already fits does nothing; element addresses stay valid. A larger
    /// one moves the elements into a block of exactly `capacity` slots.
    ///
    /// Returns [`Error::LengthError`] above `max_size` and
    /// [`Error::AllocationFailure`] when the allocator refuses; the vector
    /// is unchanged in both cases.
    pub fn reserve(&mut self, capacity: usize) -> Result<(), Error> {
        if capacity <= self.capacity() {
            return Ok(());
        }
        let new_cap = growth::exact(capacity, self.max_size())?;
        let len = self.len;
        self.relocate_into(new_cap, len, 0, |_, _| {})
    }

    /// Reallocates to exactly `len` slots if there is spare capacity.
    ///
    /// An empty vector gives its block back entirely.
    pub fn shrink_to_fit(&mut self) -> Result<(), Error> {
        let len = self.len;
        if len == self.capacity() {
            return Ok(());
        }
        self.relocate_into(len, len, 0, |_, _| {})
    }

    /// Resizes to `new_len`, filling new slots with values returned by `f`.
    ///
    /// - `new_len < len` destroys the excess from the back.
    /// - `len < new_len <= capacity` appends in place. A panic in `f` keeps
    ///   the elements appended so far.
    /// - `new_len > capacity` builds the new elements into a block of exactly
    ///   `new_len` slots before moving the old ones; a panic in `f` leaves
    ///   the vector unchanged.
    pub fn resize_with<F>(&mut self, new_len: usize, mut f: F) -> Result<(), Error>
    where
        F: FnMut() -> T,
    {
        let len = self.len;
        if new_len <= len {
            self.truncate(new_len);
            return Ok(());
        }
        if new_len > self.capacity() {
            let new_cap = growth::exact(new_len, self.max_size())?;
            return self.relocate_into(new_cap, len, new_len - len, |staging, _| {
                for _ in len..new_len {
                    staging.construct(f());
                }
            });
        }
        while self.len < new_len {
            let value = f();
            // SAFETY: `len < new_len <= capacity`.
            unsafe { self.push_in_place(value) };
        }
        Ok(())
    }

    /// Resizes to `new_len`, filling new slots with clones of `value`.
    #[inline]
    pub fn resize(&mut self, new_len: usize, value: T) -> Result<(), Error>
    where
        T: Clone,
    {
        self.resize_with(new_len, || value.clone())
    }

    /// Resizes to `new_len`, filling new slots with `T::default()`.
    #[inline]
    pub fn resize_default(&mut self, new_len: usize) -> Result<(), Error>
    where
        T: Default,
    {
        self.resize_with(new_len, T::default)
    }
}
