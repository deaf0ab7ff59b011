// This file is part of alloc-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{allocator::Allocator, error::Error, raw::RawBuf, vec::AllocVec};

// Core imports
use core::{mem, ptr};

impl<T, A: Allocator> AllocVec<T, A> {
    /// Inserts the value produced by `f` at `index`, shifting later elements
    /// right, and returns a reference to it.
    ///
    /// - `index == len` appends (see [`emplace_back_with`](AllocVec::emplace_back_with)).
    /// - `index > len` returns [`Error::OutOfRange`] without calling `f`.
    /// - A full block is replaced by a grown one with the new element built
    ///   at `index` first and the old elements moved in around it.
    /// - With spare capacity `f` runs before anything shifts.
    ///
    /// In every case a panic in `f` or an error leaves the vector unchanged.
    pub fn emplace_with<F>(&mut self, index: usize, f: F) -> Result<&mut T, Error>
    where
        F: FnOnce() -> T,
    {
        let len = self.len;
        if index > len {
            return Err(Error::OutOfRange { index, len });
        }
        if index == len {
            return self.emplace_back_with(f);
        }
        if len == self.capacity() {
            let new_cap = self.grow_for(1)?;
            self.relocate_into(new_cap, index, 1, |staging, _| staging.construct(f()))?;
        } else {
            let value = f();
            // SAFETY: `index < len < capacity`, so the shifted run
            // `[index + 1, len + 1)` stays inside the block; slot `index` is
            // raw storage after the copy until `construct` fills it.
            unsafe {
                let at = self.buf.slot(index).as_ptr();
                ptr::copy(at, at.add(1), len - index);
                let gap = Gap {
                    buf: &self.buf,
                    index,
                    tail: len - index,
                };
                self.buf.construct(index, value);
                mem::forget(gap);
            }
            self.len = len + 1;
        }
        // SAFETY: `index < self.len`.
        Ok(unsafe { self.slot_mut(index) })
    }

    /// Inserts `value` at `index`; see [`emplace_with`](AllocVec::emplace_with).
    #[inline]
    pub fn insert(&mut self, index: usize, value: T) -> Result<&mut T, Error> {
        self.emplace_with(index, || value)
    }
}

/// Shifts the tail back over an empty slot if the allocator's `construct`
/// hook unwinds.
struct Gap<'a, T, A: Allocator> {
    buf: &'a RawBuf<T, A>,
    index: usize,
    tail: usize,
}

impl<T, A: Allocator> Drop for Gap<'_, T, A> {
    fn drop(&mut self) {
        // SAFETY: `[index + 1, index + 1 + tail)` holds the shifted live
        // elements and slot `index` is raw storage.
        unsafe {
            let at = self.buf.slot(self.index).as_ptr();
            ptr::copy(at.add(1), at, self.tail);
        }
    }
}
