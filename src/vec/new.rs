// This file is part of alloc-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{
    allocator::{Allocator, Global},
    error::Error,
    raw::RawBuf,
    vec::AllocVec,
};

impl<T> AllocVec<T> {
    /// Constructs an empty vector on the global heap. Does not allocate.
    #[inline]
    pub const fn new() -> Self {
        Self::new_in(Global)
    }

    /// Constructs an empty vector with exactly `capacity` slots.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Result<Self, Error> {
        Self::with_capacity_in(capacity, Global)
    }

    /// Constructs a vector of `len` default values; `capacity == len`.
    #[inline]
    pub fn with_len(len: usize) -> Result<Self, Error>
    where
        T: Default,
    {
        Self::with_len_in(len, Global)
    }

    /// Constructs a vector of `len` clones of `value`; `capacity == len`.
    #[inline]
    pub fn from_elem(len: usize, value: &T) -> Result<Self, Error>
    where
        T: Clone,
    {
        Self::from_elem_in(len, value, Global)
    }

    /// Constructs a vector holding clones of `src`; `capacity == src.len()`.
    #[inline]
    pub fn from_slice(src: &[T]) -> Result<Self, Error>
    where
        T: Clone,
    {
        Self::from_slice_in(src, Global)
    }
}

impl<T, A: Allocator> AllocVec<T, A> {
    /// Constructs an empty vector that will allocate from `alloc`.
    #[inline]
    pub const fn new_in(alloc: A) -> Self {
        Self {
            buf: RawBuf::new_in(alloc),
            len: 0,
        }
    }

    /// Constructs an empty vector with exactly `capacity` slots from `alloc`.
    ///
    /// Returns [`Error::LengthError`] if `capacity` exceeds the allocator's
    /// `max_size`, or [`Error::AllocationFailure`] if the allocator refuses.
    pub fn with_capacity_in(capacity: usize, alloc: A) -> Result<Self, Error> {
        Ok(Self {
            buf: RawBuf::with_capacity_in(capacity, alloc)?,
            len: 0,
        })
    }

    /// [`with_len`](AllocVec::with_len) with an explicit allocator.
    #[inline]
    pub fn with_len_in(len: usize, alloc: A) -> Result<Self, Error>
    where
        T: Default,
    {
        Self::from_fn_in(len, alloc, |_| T::default())
    }

    /// [`from_elem`](AllocVec::from_elem) with an explicit allocator.
    #[inline]
    pub fn from_elem_in(len: usize, value: &T, alloc: A) -> Result<Self, Error>
    where
        T: Clone,
    {
        Self::from_fn_in(len, alloc, |_| value.clone())
    }

    /// [`from_slice`](AllocVec::from_slice) with an explicit allocator.
    #[inline]
    pub fn from_slice_in(src: &[T], alloc: A) -> Result<Self, Error>
    where
        T: Clone,
    {
        Self::from_fn_in(src.len(), alloc, |i| src[i].clone())
    }

    /// Allocates exactly `len` slots and fills them with `f(0)..f(len)`.
    ///
    /// A panic in `f` drops the partially built vector, which destroys the
    /// elements made so far and releases the block.
    pub(crate) fn from_fn_in<F>(len: usize, alloc: A, mut f: F) -> Result<Self, Error>
    where
        F: FnMut(usize) -> T,
    {
        let mut v = Self::with_capacity_in(len, alloc)?;
        for i in 0..len {
            let value = f(i);
            // SAFETY: `i < len == capacity`.
            unsafe { v.push_in_place(value) };
        }
        Ok(v)
    }
}
