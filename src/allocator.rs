// This file is part of alloc-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The allocator capability consumed by [`AllocVec`](crate::AllocVec).
//!
//! An [`Allocator`] hands out raw blocks, places and destroys elements in
//! them, reports the largest element count it can address and carries a
//! compile-time [`Propagation`] policy deciding whether the allocator
//! instance travels with the container on copy assignment, move assignment
//! and swap.
//!
//! [`Global`] is the default allocator, backed by the global heap.

// Core imports
use core::{alloc::Layout, mem, ptr::NonNull};

// External imports - thiserror
use thiserror::Error;

/// The allocator could not satisfy a request.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("memory allocation failed")]
pub struct AllocError;

/// Allocator propagation policy.
///
/// Mirrors the propagation traits of an allocator-aware container:
///
/// - `on_copy_assign`: [`AllocVec::assign_clone`](crate::AllocVec::assign_clone)
///   adopts the source's allocator.
/// - `on_move_assign`: [`AllocVec::assign_take`](crate::AllocVec::assign_take)
///   adopts the source's allocator and steals its block.
/// - `on_swap`: [`AllocVec::swap_with`](crate::AllocVec::swap_with) exchanges
///   allocators along with the blocks.
/// - `always_equal`: every instance compares equal, so memory obtained from
///   one may be released through any other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Propagation {
    pub on_copy_assign: bool,
    pub on_move_assign: bool,
    pub on_swap: bool,
    pub always_equal: bool,
}

impl Propagation {
    /// Never propagate; instances are compared with `PartialEq`.
    pub const NONE: Self = Self {
        on_copy_assign: false,
        on_move_assign: false,
        on_swap: false,
        always_equal: false,
    };

    /// Propagate on every operation.
    pub const ALL: Self = Self {
        on_copy_assign: true,
        on_move_assign: true,
        on_swap: true,
        always_equal: false,
    };
}

/// A source of raw element storage.
///
/// # Safety
///
/// Implementors must guarantee that:
///
/// - a block returned by [`allocate`](Allocator::allocate) is valid for reads
///   and writes of `layout.size()` bytes, aligned to `layout.align()`, and
///   stays valid until it is passed to [`deallocate`](Allocator::deallocate);
/// - a block may be released through any instance that compares equal
///   (`==`) to the instance that allocated it, and through any instance at
///   all when `PROPAGATION.always_equal` is set;
/// - clones compare equal to their origin.
///
/// Containers never request zero-sized layouts.
pub unsafe trait Allocator: Clone + PartialEq {
    /// Propagation policy used by assignment and swap.
    const PROPAGATION: Propagation;

    /// Allocates a block for `layout`.
    fn allocate(&self, layout: Layout) -> Result<NonNull<u8>, AllocError>;

    /// Releases a block. Must not fail.
    ///
    /// # Safety
    ///
    /// `ptr` must have been returned by `allocate` with the same `layout` on
    /// this instance (or one comparing equal) and not released since.
    unsafe fn deallocate(&self, ptr: NonNull<u8>, layout: Layout);

    /// Places `value` into an uninitialized slot.
    ///
    /// May panic, in which case `value` is dropped and the slot stays raw.
    ///
    /// # Safety
    ///
    /// `slot` must be valid for writes and properly aligned.
    #[inline]
    unsafe fn construct<T>(&self, slot: NonNull<T>, value: T) {
        slot.as_ptr().write(value);
    }

    /// Drops the value in `slot`, leaving it uninitialized. Must not fail.
    ///
    /// # Safety
    ///
    /// `slot` must hold a live `T` that is not used afterwards.
    #[inline]
    unsafe fn destroy<T>(&self, slot: NonNull<T>) {
        slot.as_ptr().drop_in_place();
    }

    /// Largest number of `T` this allocator can address.
    #[inline]
    fn max_size<T>(&self) -> usize {
        match mem::size_of::<T>() {
            0 => usize::MAX,
            size => isize::MAX as usize / size,
        }
    }

    /// Allocator used by a container built as a clone of one using `self`.
    #[inline]
    fn select_on_copy(&self) -> Self {
        self.clone()
    }
}

/// The global heap allocator.
///
/// All instances are interchangeable: `always_equal` is set and the
/// allocator follows the container on move assignment only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Global;

// SAFETY: blocks come straight from the global allocator, which accepts any
// non-zero layout and lets any `Global` release them.
unsafe impl Allocator for Global {
    const PROPAGATION: Propagation = Propagation {
        on_copy_assign: false,
        on_move_assign: true,
        on_swap: false,
        always_equal: true,
    };

    #[inline]
    fn allocate(&self, layout: Layout) -> Result<NonNull<u8>, AllocError> {
        debug_assert!(layout.size() != 0);
        // SAFETY: containers never request zero-sized layouts.
        let ptr = unsafe { alloc::alloc::alloc(layout) };
        NonNull::new(ptr).ok_or(AllocError)
    }

    #[inline]
    unsafe fn deallocate(&self, ptr: NonNull<u8>, layout: Layout) {
        alloc::alloc::dealloc(ptr.as_ptr(), layout);
    }
}
