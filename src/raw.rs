// This file is part of alloc-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Raw storage and the reallocation transaction.
//!
//! [`RawBuf`] owns one block of `capacity` element slots together with the
//! allocator that produced it. It never tracks which slots are live; the
//! owning [`AllocVec`](crate::AllocVec) does that with its `len`.
//!
//! [`Staging`] is the build half of every reallocation. It owns a fresh
//! block and the run of elements constructed into it so far. Dropping it
//! (normally while a constructor panic unwinds) destroys that run and
//! releases the block, so the container it was built for is left exactly as
//! it was. [`Staging::finish`] hands the block over for
//! [`RawBuf::commit`].

// Crate imports
use crate::{allocator::Allocator, error::Error};

// Core imports
use core::{
    alloc::Layout,
    marker::PhantomData,
    mem,
    ptr::{self, NonNull},
};

/// Layout of a block of `cap` slots, or [`Error::LengthError`] when it would
/// exceed the allocator's limit or the address space.
#[inline]
fn block_layout<T, A: Allocator>(alloc: &A, cap: usize) -> Result<Layout, Error> {
    let max = alloc.max_size::<T>();
    if cap > max {
        return Err(Error::LengthError {
            requested: cap,
            max,
        });
    }
    Layout::array::<T>(cap).map_err(|_| Error::LengthError {
        requested: cap,
        max,
    })
}

/// Allocates room for `cap` elements. Zero-sized blocks never reach the
/// allocator.
fn allocate_block<T, A: Allocator>(alloc: &A, cap: usize) -> Result<NonNull<T>, Error> {
    let layout = block_layout::<T, A>(alloc, cap)?;
    if layout.size() == 0 {
        return Ok(NonNull::dangling());
    }
    alloc
        .allocate(layout)
        .map(NonNull::cast)
        .map_err(|_| Error::AllocationFailure { capacity: cap })
}

/// Releases a block obtained from [`allocate_block`].
///
/// # Safety
///
/// `ptr` and `cap` must describe a block allocated by `alloc` (or an
/// allocator it may release for) that holds no live elements.
unsafe fn deallocate_block<T, A: Allocator>(alloc: &A, ptr: NonNull<T>, cap: usize) {
    let size = mem::size_of::<T>() * cap;
    if size == 0 {
        return;
    }
    // SAFETY: the same layout was built successfully when the block was
    // allocated.
    let layout = Layout::from_size_align_unchecked(size, mem::align_of::<T>());
    alloc.deallocate(ptr.cast(), layout);
}

/// An owned block of element slots and the allocator it came from.
pub(crate) struct RawBuf<T, A: Allocator> {
    ptr: NonNull<T>,
    cap: usize,
    pub(crate) alloc: A,
    _marker: PhantomData<T>,
}

impl<T, A: Allocator> RawBuf<T, A> {
    /// A buffer that owns no block.
    #[inline]
    pub(crate) const fn new_in(alloc: A) -> Self {
        Self {
            ptr: NonNull::dangling(),
            cap: 0,
            alloc,
            _marker: PhantomData,
        }
    }

    /// A buffer owning a block of exactly `cap` slots.
    pub(crate) fn with_capacity_in(cap: usize, alloc: A) -> Result<Self, Error> {
        if cap == 0 {
            return Ok(Self::new_in(alloc));
        }
        let ptr = allocate_block::<T, A>(&alloc, cap)?;
        Ok(Self {
            ptr,
            cap,
            alloc,
            _marker: PhantomData,
        })
    }

    #[inline]
    pub(crate) fn ptr(&self) -> NonNull<T> {
        self.ptr
    }

    #[inline]
    pub(crate) fn capacity(&self) -> usize {
        self.cap
    }

    #[inline]
    pub(crate) fn max_size(&self) -> usize {
        self.alloc.max_size::<T>()
    }

    /// Pointer to slot `index`.
    ///
    /// # Safety
    ///
    /// `index <= capacity`.
    #[inline]
    pub(crate) unsafe fn slot(&self, index: usize) -> NonNull<T> {
        NonNull::new_unchecked(self.ptr.as_ptr().add(index))
    }

    /// Constructs `value` in slot `index` through the allocator.
    ///
    /// # Safety
    ///
    /// `index < capacity` and the slot is not live.
    #[inline]
    pub(crate) unsafe fn construct(&self, index: usize, value: T) {
        self.alloc.construct(self.slot(index), value);
    }

    /// Destroys the live element in slot `index` through the allocator.
    ///
    /// # Safety
    ///
    /// The slot is live and is treated as raw storage afterwards.
    #[inline]
    pub(crate) unsafe fn destroy(&self, index: usize) {
        self.alloc.destroy(self.slot(index));
    }

    /// Opens a reallocation transaction for a block of `cap` slots.
    #[inline]
    pub(crate) fn stage(&self, cap: usize) -> Result<Staging<'_, T, A>, Error> {
        Staging::new(&self.alloc, cap)
    }

    /// Releases the current block and adopts a staged one.
    ///
    /// # Safety
    ///
    /// No slot of the current block may still be live: its elements were
    /// relocated into the staged block or destroyed.
    pub(crate) unsafe fn commit(&mut self, (ptr, cap): (NonNull<T>, usize)) {
        log::trace!(
            "reallocated {} buffer: {} -> {} slots",
            core::any::type_name::<T>(),
            self.cap,
            cap
        );
        deallocate_block(&self.alloc, self.ptr, self.cap);
        self.ptr = ptr;
        self.cap = cap;
    }

    /// Releases the current block and returns to the empty state.
    ///
    /// # Safety
    ///
    /// No slot of the current block may still be live.
    pub(crate) unsafe fn release(&mut self) {
        deallocate_block(&self.alloc, self.ptr, self.cap);
        self.ptr = NonNull::dangling();
        self.cap = 0;
    }

    /// Exchanges blocks with `other`, leaving both allocators in place.
    #[inline]
    pub(crate) fn swap_block(&mut self, other: &mut Self) {
        mem::swap(&mut self.ptr, &mut other.ptr);
        mem::swap(&mut self.cap, &mut other.cap);
    }
}

impl<T, A: Allocator> Drop for RawBuf<T, A> {
    fn drop(&mut self) {
        // SAFETY: owners destroy or move out every live element before the
        // block goes away.
        unsafe { deallocate_block(&self.alloc, self.ptr, self.cap) }
    }
}

/// A fresh block being filled for a reallocation.
///
/// Newly constructed elements form one contiguous run starting at the
/// position chosen with [`start_at`](Staging::start_at). Relocated elements
/// are bitwise copies still owned by the old block until the transaction
/// commits, so they are never destroyed from here.
pub(crate) struct Staging<'a, T, A: Allocator> {
    alloc: &'a A,
    ptr: NonNull<T>,
    cap: usize,
    fresh_start: usize,
    fresh_len: usize,
}

impl<'a, T, A: Allocator> Staging<'a, T, A> {
    fn new(alloc: &'a A, cap: usize) -> Result<Self, Error> {
        let ptr = allocate_block::<T, A>(alloc, cap)?;
        Ok(Self {
            alloc,
            ptr,
            cap,
            fresh_start: 0,
            fresh_len: 0,
        })
    }

    /// Positions the run of new elements. Must precede any construction.
    #[inline]
    pub(crate) fn start_at(&mut self, index: usize) {
        debug_assert_eq!(self.fresh_len, 0);
        debug_assert!(index <= self.cap);
        self.fresh_start = index;
    }

    /// Number of new elements constructed so far.
    #[inline]
    pub(crate) fn fresh_len(&self) -> usize {
        self.fresh_len
    }

    /// Constructs the next new element.
    #[inline]
    pub(crate) fn construct(&mut self, value: T) {
        let index = self.fresh_start + self.fresh_len;
        assert!(index < self.cap, "staged block overflow");
        // SAFETY: `index < cap`, and slots past the run are raw storage.
        unsafe {
            let slot = NonNull::new_unchecked(self.ptr.as_ptr().add(index));
            self.alloc.construct(slot, value);
        }
        self.fresh_len += 1;
    }

    /// Moves `count` elements from `src` into slots `dst..dst + count`.
    ///
    /// # Safety
    ///
    /// `src` must point to `count` live elements outside this block, the
    /// destination range must lie within the block and not overlap the run
    /// of new elements, and the caller must treat the source slots as raw
    /// storage once the transaction commits.
    #[inline]
    pub(crate) unsafe fn relocate(&mut self, src: *const T, dst: usize, count: usize) {
        debug_assert!(dst + count <= self.cap);
        ptr::copy_nonoverlapping(src, self.ptr.as_ptr().add(dst), count);
    }

    /// Ends the build phase, handing over the block and its capacity.
    #[inline]
    pub(crate) fn finish(self) -> (NonNull<T>, usize) {
        let out = (self.ptr, self.cap);
        mem::forget(self);
        out
    }
}

impl<T, A: Allocator> Drop for Staging<'_, T, A> {
    fn drop(&mut self) {
        // SAFETY: exactly the slots of the fresh run hold elements owned by
        // this block; the block came from `allocate_block` with `cap`.
        unsafe {
            for i in 0..self.fresh_len {
                let slot = NonNull::new_unchecked(self.ptr.as_ptr().add(self.fresh_start + i));
                self.alloc.destroy(slot);
            }
            deallocate_block(self.alloc, self.ptr, self.cap);
        }
    }
}
