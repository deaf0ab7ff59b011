// This file is part of alloc-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{
    allocator::Allocator,
    error::Error,
    vec::{capacity_overflow, AllocVec},
};

impl<T, A: Allocator> Extend<T> for AllocVec<T, A> {
    /// Appends every item, reserving for the iterator's lower size bound up
    /// front.
    ///
    /// # Panics
    ///
    /// If storage cannot be obtained.
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        let (lower, _) = iter.size_hint();
        if lower > self.capacity() - self.len {
            let target = self.grow_for(lower).unwrap_or_else(|e| capacity_overflow(e));
            if let Err(e) = self.reserve(target) {
                capacity_overflow(e)
            }
        }
        for item in iter {
            if let Err(e) = self.push(item) {
                capacity_overflow(e)
            }
        }
    }
}

impl<'a, T: Copy + 'a, A: Allocator> Extend<&'a T> for AllocVec<T, A> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}

impl<T: Clone, A: Allocator> AllocVec<T, A> {
    /// Appends clones of every element of `src`.
    ///
    /// If `src` does not fit, a grown block is built with the clones in
    /// place before the existing elements move; an error or a panicking
    /// clone leaves the vector unchanged. If it fits, clones are appended in
    /// place and a panicking clone keeps those appended before it.
    pub fn extend_from_slice(&mut self, src: &[T]) -> Result<(), Error> {
        let len = self.len;
        if src.len() > self.capacity() - len {
            let new_cap = self.grow_for(src.len())?;
            return self.relocate_into(new_cap, len, src.len(), |staging, _| {
                for item in src {
                    staging.construct(item.clone());
                }
            });
        }
        for item in src {
            let value = item.clone();
            // SAFETY: `src` fits into the spare capacity.
            unsafe { self.push_in_place(value) };
        }
        Ok(())
    }
}
