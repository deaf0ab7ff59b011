// This file is part of alloc-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The `AllocVec` type and its inherent API.
//!
//! `AllocVec<T, A>` is a growable vector whose single heap block comes from a
//! value-held [`Allocator`]. It tracks a logical length inside a block of
//! `capacity` slots. Methods generally mirror slice/vector semantics, with
//! fallible variants wherever storage may have to be obtained.

// Invariants:
// - `0 <= len <= buf.capacity()` always holds.
// - Slots `[0, len)` hold live `T` values constructed through `buf.alloc`.
// - Slots `[len, capacity)` are raw storage and must never be read as `T`.
// - A block that changes size is always replaced through `relocate_into`,
//   which builds the whole new block before touching the old one.

mod access;
mod assign;
mod capacity;
mod clone;
mod cmp;
mod default;
mod extend;
mod from;
mod insert;
mod new;
mod pop;
mod push;
mod remove;
mod take;
mod try_from;

// Crate imports
use crate::{
    allocator::{Allocator, Global},
    error::Error,
    growth,
    raw::{RawBuf, Staging},
};

// Core imports
use core::{
    borrow::{Borrow, BorrowMut},
    fmt,
    hash::{Hash, Hasher},
    ops::{Deref, DerefMut},
    slice,
};

/// A growable, allocator-aware contiguous vector.
///
/// `AllocVec<T, A>` owns one block of `capacity` slots obtained from its
/// allocator `A` and keeps the first `len` of them initialized. It
/// dereferences to `[T]`, so every slice method is available on it.
///
/// # Growth
///
/// When an append or insertion finds no spare slot the vector grows to
/// `max(1, 2 * capacity)`, or to the required length if that is larger,
/// clamped to the allocator's [`max_size`](Allocator::max_size). A run of
/// appends is therefore amortized `O(1)`. [`reserve`](AllocVec::reserve) and
/// [`resize`](AllocVec::resize) allocate exactly what they are asked for.
///
/// # Failure behavior
///
/// Operations that may allocate return `Result<_, Error>`:
///
/// - [`Error::LengthError`] when the requested capacity exceeds `max_size`;
/// - [`Error::AllocationFailure`] when the allocator refuses the request.
///
/// In both cases the vector is left unchanged. Panics raised while building
/// a new block (a `Clone` impl, a `Default` impl, a user closure) also leave
/// the vector unchanged and leak nothing:
///
/// - [`push`](AllocVec::push), [`emplace_back_with`](AllocVec::emplace_back_with),
///   [`push_within`](AllocVec::push_within)
/// - [`insert`](AllocVec::insert), [`emplace_with`](AllocVec::emplace_with)
/// - [`reserve`](AllocVec::reserve), [`shrink_to_fit`](AllocVec::shrink_to_fit)
/// - [`resize`](AllocVec::resize) when it reallocates
/// - [`assign_clone`](AllocVec::assign_clone) when it reallocates
///
/// # Allocators
///
/// The allocator travels with the vector according to
/// [`Allocator::PROPAGATION`]; see [`assign_clone`](AllocVec::assign_clone),
/// [`assign_take`](AllocVec::assign_take) and
/// [`swap_with`](AllocVec::swap_with). Every element is constructed and
/// destroyed through the allocator's `construct`/`destroy` hooks. Moving
/// elements between blocks is a bitwise copy and does not go through them.
///
/// # Examples
///
/// ```rust
/// use alloc_vec::{AllocVec, Error};
///
/// let mut v: AllocVec<String> = AllocVec::new();
/// v.push("a".to_string()).unwrap();
/// v.insert(0, "b".to_string()).unwrap();
/// assert_eq!(v.as_slice(), &["b", "a"]);
///
/// assert_eq!(v.at(2), Err(Error::OutOfRange { index: 2, len: 2 }));
/// assert_eq!(v.pop().as_deref(), Some("a"));
/// ```
pub struct AllocVec<T, A: Allocator = Global> {
    pub(crate) buf: RawBuf<T, A>,
    pub(crate) len: usize,
}

// SAFETY: the vector owns its elements and its allocator outright; sharing or
// sending it is exactly as safe as sharing or sending those.
unsafe impl<T: Send, A: Allocator + Send> Send for AllocVec<T, A> {}
unsafe impl<T: Sync, A: Allocator + Sync> Sync for AllocVec<T, A> {}

impl<T, A: Allocator> AllocVec<T, A> {
    /// Returns the number of live elements.
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if `len == 0`.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of slots in the current block.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buf.capacity()
    }

    /// Returns the largest length the allocator can address for `T`.
    #[inline]
    pub fn max_size(&self) -> usize {
        self.buf.max_size()
    }

    /// Returns the allocator held by this vector.
    #[inline]
    pub fn allocator(&self) -> &A {
        &self.buf.alloc
    }

    /// Returns the initialized prefix as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: slots `[0, len)` are live and the block is valid for `cap >= len`.
        unsafe { slice::from_raw_parts(self.buf.ptr().as_ptr(), self.len) }
    }

    /// Returns the initialized prefix as a mutable slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        // SAFETY: as in `as_slice`, and `&mut self` guarantees exclusivity.
        unsafe { slice::from_raw_parts_mut(self.buf.ptr().as_ptr(), self.len) }
    }

    // iterators
    /// Shorthand for `self.as_slice().iter()`.
    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    /// Shorthand for `self.as_mut_slice().iter_mut()`.
    #[inline]
    pub fn iter_mut(&mut self) -> slice::IterMut<'_, T> {
        self.as_mut_slice().iter_mut()
    }

    /// Constructs `value` in the first spare slot.
    ///
    /// # Safety
    ///
    /// `len < capacity`.
    #[inline]
    pub(crate) unsafe fn push_in_place(&mut self, value: T) {
        debug_assert!(self.len < self.capacity());
        self.buf.construct(self.len, value);
        self.len += 1;
    }

    /// Returns the element at `index` without a bounds check.
    ///
    /// # Safety
    ///
    /// `index < len`.
    #[inline]
    pub(crate) unsafe fn slot_mut(&mut self, index: usize) -> &mut T {
        debug_assert!(index < self.len);
        &mut *self.buf.slot(index).as_ptr()
    }

    /// Capacity to grow to so that `additional` more elements fit.
    #[inline]
    pub(crate) fn grow_for(&self, additional: usize) -> Result<usize, Error> {
        let max = self.max_size();
        let required = growth::required_len(self.len, additional, max)?;
        growth::grow_target(self.capacity(), required, max)
    }

    /// Replaces the block with one of `new_cap` slots holding `count` new
    /// elements at `at` and the current elements around them.
    ///
    /// `build` receives the staged block, already positioned at `at`, and the
    /// current elements (which it may clone from), and must construct exactly
    /// `count` elements. Existing elements are relocated only after it
    /// returns, so a panic inside it, or an allocation error, leaves `self`
    /// untouched.
    pub(crate) fn relocate_into<F>(
        &mut self,
        new_cap: usize,
        at: usize,
        count: usize,
        build: F,
    ) -> Result<(), Error>
    where
        F: FnOnce(&mut Staging<'_, T, A>, &[T]),
    {
        let len = self.len;
        debug_assert!(at <= len);
        debug_assert!(len + count <= new_cap);

        let staged = {
            let mut staging = self.buf.stage(new_cap)?;
            staging.start_at(at);
            // SAFETY: slots `[0, len)` are live; no `&mut` to them exists
            // while `build` runs.
            let current = unsafe { slice::from_raw_parts(self.buf.ptr().as_ptr(), len) };
            build(&mut staging, current);
            assert_eq!(staging.fresh_len(), count, "staged element count mismatch");

            let src = self.buf.ptr().as_ptr();
            // SAFETY: the two runs land on either side of the new elements and
            // the old slots become raw storage once the block is committed.
            unsafe {
                staging.relocate(src, 0, at);
                staging.relocate(src.add(at), at + count, len - at);
            }
            staging.finish()
        };

        // SAFETY: every live element was relocated into the staged block.
        unsafe { self.buf.commit(staged) };
        self.len = len + count;
        Ok(())
    }

    /// Destroys every element and releases the block.
    pub(crate) fn release_storage(&mut self) {
        self.clear();
        // SAFETY: no slot is live after `clear`.
        unsafe { self.buf.release() };
    }

    /// Moves every element of `self` bitwise onto the end of `dst` and
    /// releases `self`'s block.
    pub(crate) fn relocate_onto<B: Allocator>(&mut self, dst: &mut AllocVec<T, B>) {
        let count = self.len;
        assert!(dst.capacity() - dst.len >= count, "destination too small");
        // SAFETY: `dst` has `count` spare slots; the source slots become raw
        // storage as soon as `len` is reset.
        unsafe {
            core::ptr::copy_nonoverlapping(
                self.buf.ptr().as_ptr(),
                dst.buf.ptr().as_ptr().add(dst.len),
                count,
            );
            self.len = 0;
            dst.len += count;
            self.buf.release();
        }
    }
}

/// Panics with the error from a fallible growth path that has no way to
/// report it (`Clone`, `Extend`, `From`).
#[cold]
#[track_caller]
pub(crate) fn capacity_overflow(err: Error) -> ! {
    panic!("{err}")
}

impl<T, A: Allocator> Drop for AllocVec<T, A> {
    fn drop(&mut self) {
        let len = self.len;
        self.len = 0;
        // Forward order; the block itself is released by `RawBuf`.
        for i in 0..len {
            // SAFETY: slot `i` was live and `len` no longer covers it.
            unsafe { self.buf.destroy(i) };
        }
    }
}

impl<T: fmt::Debug, A: Allocator> fmt::Debug for AllocVec<T, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AllocVec")
            .field("len", &self.len)
            .field("capacity", &self.capacity())
            .field("elements", &self.as_slice())
            .finish()
    }
}

impl<T, U, A, B> PartialEq<AllocVec<U, B>> for AllocVec<T, A>
where
    T: PartialEq<U>,
    A: Allocator,
    B: Allocator,
{
    fn eq(&self, other: &AllocVec<U, B>) -> bool {
        self.as_slice() == other.as_slice()
    }
}
impl<T: PartialEq<U>, U, A: Allocator> PartialEq<[U]> for AllocVec<T, A> {
    fn eq(&self, other: &[U]) -> bool {
        self.as_slice() == other
    }
}
impl<T: PartialEq<U>, U, A: Allocator> PartialEq<&[U]> for AllocVec<T, A> {
    fn eq(&self, other: &&[U]) -> bool {
        self.as_slice() == *other
    }
}
impl<T: PartialEq<U>, U, A: Allocator, const N: usize> PartialEq<[U; N]> for AllocVec<T, A> {
    fn eq(&self, other: &[U; N]) -> bool {
        self.as_slice() == other
    }
}
impl<T: Eq, A: Allocator> Eq for AllocVec<T, A> {}

impl<T: PartialOrd, A: Allocator, B: Allocator> PartialOrd<AllocVec<T, B>> for AllocVec<T, A> {
    fn partial_cmp(&self, other: &AllocVec<T, B>) -> Option<core::cmp::Ordering> {
        self.as_slice().partial_cmp(other.as_slice())
    }
}
impl<T: Ord, A: Allocator> Ord for AllocVec<T, A> {
    fn cmp(&self, other: &Self) -> core::cmp::Ordering {
        self.as_slice().cmp(other.as_slice())
    }
}
impl<T: Hash, A: Allocator> Hash for AllocVec<T, A> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state)
    }
}

impl<T, A: Allocator> Deref for AllocVec<T, A> {
    type Target = [T];
    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}
impl<T, A: Allocator> DerefMut for AllocVec<T, A> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.as_mut_slice()
    }
}

impl<T, A: Allocator> AsRef<[T]> for AllocVec<T, A> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}
impl<T, A: Allocator> AsMut<[T]> for AllocVec<T, A> {
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

// Borrow ergonomics (treat as a slice)
impl<T, A: Allocator> Borrow<[T]> for AllocVec<T, A> {
    fn borrow(&self) -> &[T] {
        self.as_slice()
    }
}
impl<T, A: Allocator> BorrowMut<[T]> for AllocVec<T, A> {
    fn borrow_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}
