// This file is part of alloc-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Indexing support for [`AllocVec`](crate::AllocVec).
//!
//! `Index` and `IndexMut` mirror slice behavior:
//! - panics on out-of-bounds (use [`AllocVec::at`](crate::AllocVec::at) for a
//!   checked lookup);
//! - supports every range form a slice does, including inclusive ranges;
//! - views are restricted to the live prefix `[0..len)`.

// Crate imports
use crate::{allocator::Allocator, vec::AllocVec};

// Core imports
use core::{
    ops::{Index, IndexMut},
    slice::SliceIndex,
};

impl<T, I: SliceIndex<[T]>, A: Allocator> Index<I> for AllocVec<T, A> {
    type Output = I::Output;
    #[inline]
    fn index(&self, index: I) -> &Self::Output {
        &self.as_slice()[index]
    }
}

impl<T, I: SliceIndex<[T]>, A: Allocator> IndexMut<I> for AllocVec<T, A> {
    #[inline]
    fn index_mut(&mut self, index: I) -> &mut Self::Output {
        &mut self.as_mut_slice()[index]
    }
}
