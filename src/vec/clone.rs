// This file is part of alloc-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{
    allocator::Allocator,
    error::Error,
    vec::{capacity_overflow, AllocVec},
};

impl<T: Clone, A: Allocator> AllocVec<T, A> {
    /// Fallible [`Clone::clone`].
    ///
    /// The copy allocates from [`select_on_copy`](Allocator::select_on_copy)
    /// of this vector's allocator and has `capacity == len`.
    #[inline]
    pub fn try_clone(&self) -> Result<Self, Error> {
        self.clone_in(self.buf.alloc.select_on_copy())
    }

    /// Clones the elements into a new vector that allocates from `alloc`.
    #[inline]
    pub fn clone_in(&self, alloc: A) -> Result<Self, Error> {
        Self::from_slice_in(self.as_slice(), alloc)
    }
}

impl<T: Clone, A: Allocator> Clone for AllocVec<T, A> {
    /// # Panics
    ///
    /// If storage for the copy cannot be obtained. Use
    /// [`try_clone`](AllocVec::try_clone) to handle that case.
    fn clone(&self) -> Self {
        self.try_clone().unwrap_or_else(|e| capacity_overflow(e))
    }

    /// Copy assignment; see [`assign_clone`](AllocVec::assign_clone).
    fn clone_from(&mut self, source: &Self) {
        if let Err(e) = self.assign_clone(source) {
            capacity_overflow(e)
        }
    }
}
