// This file is part of alloc-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Iterator support for [`AllocVec`](crate::AllocVec).
//!
//! - `IntoIter<T, A>` yields by value and supports `DoubleEndedIterator`,
//!   `ExactSizeIterator`, and `FusedIterator`.
//! - `&AllocVec` and `&mut AllocVec` iterate as slices.
//! - `FromIterator` collects into a vector on the default allocator.

// Crate imports
use crate::{
    allocator::{Allocator, Global},
    raw::RawBuf,
    vec::AllocVec,
};

// Core imports
use core::{fmt, iter::FusedIterator, mem::ManuallyDrop, ptr, slice};

/// Owned iterator returned by `AllocVec::into_iter()`.
///
/// Yields elements by value from front to back and supports double-ended
/// iteration via [`DoubleEndedIterator`]. Elements not yielded are destroyed
/// through the allocator when the iterator is dropped, and the block is
/// released.
pub struct IntoIter<T, A: Allocator = Global> {
    buf: RawBuf<T, A>,
    front: usize,
    back: usize, // exclusive
}

// SAFETY: the iterator owns the remaining elements and the allocator.
unsafe impl<T: Send, A: Allocator + Send> Send for IntoIter<T, A> {}
unsafe impl<T: Sync, A: Allocator + Sync> Sync for IntoIter<T, A> {}

impl<T, A: Allocator> IntoIter<T, A> {
    /// Returns the elements not yet yielded.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        let len = self.back - self.front;
        // SAFETY: slots `[front, back)` are live.
        unsafe { slice::from_raw_parts(self.buf.slot(self.front).as_ptr(), len) }
    }

    /// Moves the element at `i` out.
    ///
    /// # Safety
    ///
    /// Slot `i` is live and is excluded from `[front, back)` by the caller.
    #[inline]
    unsafe fn read(&self, i: usize) -> T {
        ptr::read(self.buf.slot(i).as_ptr())
    }

    /// Destroys the slots `[from, to)`.
    fn destroy_range(&mut self, from: usize, to: usize) {
        for i in from..to {
            // SAFETY: the caller has already moved `[from, to)` out of
            // `[front, back)`, so each slot is destroyed exactly once.
            unsafe { self.buf.destroy(i) };
        }
    }
}

impl<T, A: Allocator> Iterator for IntoIter<T, A> {
    type Item = T;
    fn next(&mut self) -> Option<T> {
        if self.front < self.back {
            let i = self.front;
            self.front += 1;
            // SAFETY: `i` was the first live slot.
            Some(unsafe { self.read(i) })
        } else {
            None
        }
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        let rem = self.back - self.front;
        (rem, Some(rem))
    }
    fn nth(&mut self, n: usize) -> Option<T> {
        let rem = self.back - self.front;
        let skip = n.min(rem);
        let start = self.front;
        self.front += skip;
        self.destroy_range(start, start + skip);
        self.next()
    }
}

impl<T, A: Allocator> DoubleEndedIterator for IntoIter<T, A> {
    fn next_back(&mut self) -> Option<T> {
        if self.front < self.back {
            self.back -= 1;
            // SAFETY: `back` was the last live slot.
            Some(unsafe { self.read(self.back) })
        } else {
            None
        }
    }
    fn nth_back(&mut self, n: usize) -> Option<T> {
        let rem = self.back - self.front;
        let skip = n.min(rem);
        let end = self.back;
        self.back -= skip;
        self.destroy_range(end - skip, end);
        self.next_back()
    }
}
impl<T, A: Allocator> FusedIterator for IntoIter<T, A> {}
impl<T, A: Allocator> ExactSizeIterator for IntoIter<T, A> {}

impl<T, A: Allocator> Drop for IntoIter<T, A> {
    fn drop(&mut self) {
        let (front, back) = (self.front, self.back);
        self.front = back;
        self.destroy_range(front, back);
    }
}

impl<T: fmt::Debug, A: Allocator> fmt::Debug for IntoIter<T, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.as_slice()).finish()
    }
}

impl<'a, T, A: Allocator> IntoIterator for &'a AllocVec<T, A> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}
impl<'a, T, A: Allocator> IntoIterator for &'a mut AllocVec<T, A> {
    type Item = &'a mut T;
    type IntoIter = slice::IterMut<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.as_mut_slice().iter_mut()
    }
}
impl<T, A: Allocator> IntoIterator for AllocVec<T, A> {
    type Item = T;
    type IntoIter = IntoIter<T, A>;
    fn into_iter(self) -> Self::IntoIter {
        let v = ManuallyDrop::new(self);
        // SAFETY: `v` is never dropped, so the block and its elements move
        // into the iterator exactly once.
        let buf = unsafe { ptr::read(&v.buf) };
        IntoIter {
            buf,
            front: 0,
            back: v.len,
        }
    }
}

impl<T, A: Allocator + Default> FromIterator<T> for AllocVec<T, A> {
    /// # Panics
    ///
    /// If storage cannot be obtained.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut v = Self::default();
        v.extend(iter);
        v
    }
}
