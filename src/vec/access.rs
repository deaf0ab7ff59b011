// This file is part of alloc-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{allocator::Allocator, error::Error, vec::AllocVec};

// Core imports
use core::ops::Range;

impl<T, A: Allocator> AllocVec<T, A> {
    /// Checked access; [`Error::OutOfRange`] when `index >= len`.
    #[inline]
    pub fn at(&self, index: usize) -> Result<&T, Error> {
        let len = self.len;
        self.as_slice()
            .get(index)
            .ok_or(Error::OutOfRange { index, len })
    }

    /// Checked mutable access; [`Error::OutOfRange`] when `index >= len`.
    #[inline]
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T, Error> {
        let len = self.len;
        self.as_mut_slice()
            .get_mut(index)
            .ok_or(Error::OutOfRange { index, len })
    }

    /// Returns the first element, if any.
    #[inline]
    pub fn front(&self) -> Option<&T> {
        self.as_slice().first()
    }

    /// Returns the last element, if any.
    #[inline]
    pub fn back(&self) -> Option<&T> {
        self.as_slice().last()
    }

    /// Returns the first element mutably, if any.
    #[inline]
    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.as_mut_slice().first_mut()
    }

    /// Returns the last element mutably, if any.
    #[inline]
    pub fn back_mut(&mut self) -> Option<&mut T> {
        self.as_mut_slice().last_mut()
    }

    /// Returns a raw pointer to the start of the block.
    ///
    /// Only the first `len` elements are initialized. The pointer is dangling
    /// (but non-null and aligned) while no block is owned, and is invalidated
    /// by any operation that reallocates.
    #[inline]
    pub fn as_ptr(&self) -> *const T {
        self.buf.ptr().as_ptr()
    }

    /// Returns a mutable raw pointer to the start of the block.
    ///
    /// Writing past `len` does **not** update `len`; such writes are not
    /// part of the vector's contents.
    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.buf.ptr().as_ptr()
    }

    /// Returns the half-open `[begin, end)` pointer range of the live
    /// elements.
    #[inline]
    pub fn as_ptr_range(&self) -> Range<*const T> {
        self.as_slice().as_ptr_range()
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use crate::{AllocVec, Error};

    #[test]
    fn test_at_checks_bounds_in_every_state() {
        let mut v: AllocVec<i32> = AllocVec::new();
        assert_eq!(v.at(0), Err(Error::OutOfRange { index: 0, len: 0 }));
        v.extend_from_slice(&[7, 8, 9]).unwrap();
        assert_eq!(v.at(2), Ok(&9));
        assert_eq!(v.at(3), Err(Error::OutOfRange { index: 3, len: 3 }));
        *v.at_mut(0).unwrap() = 70;
        assert_eq!(v.at_mut(5), Err(Error::OutOfRange { index: 5, len: 3 }));
        assert_eq!(v.as_slice(), &[70, 8, 9]);
    }

    #[test]
    fn test_front_and_back() {
        let mut v = AllocVec::from([1, 2, 3]);
        assert_eq!(v.front(), Some(&1));
        assert_eq!(v.back(), Some(&3));
        *v.front_mut().unwrap() = 10;
        *v.back_mut().unwrap() = 30;
        assert_eq!(v.as_slice(), &[10, 2, 30]);

        let e: AllocVec<u8> = AllocVec::new();
        assert_eq!(e.front(), None);
        assert_eq!(e.back(), None);
    }

    #[test]
    fn test_pointer_range_spans_live_elements() {
        let mut v: AllocVec<u32> = AllocVec::with_capacity(8).unwrap();
        v.extend_from_slice(&[1, 2, 3]).unwrap();
        let range = v.as_ptr_range();
        assert_eq!(range.start, v.as_ptr());
        assert_eq!(range.end, unsafe { v.as_ptr().add(3) });
        unsafe { *v.as_mut_ptr().add(1) = 20 };
        assert_eq!(v.as_slice(), &[1, 20, 3]);
    }
}
