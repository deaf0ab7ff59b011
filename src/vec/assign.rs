// This file is part of alloc-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{allocator::Allocator, error::Error, growth, vec::AllocVec};

// Core imports
use core::mem;

impl<T, A: Allocator> AllocVec<T, A> {
    /// Copy assignment: makes `self` an element-wise copy of `other`.
    ///
    /// With `PROPAGATION.on_copy_assign` set, `self` adopts a clone of
    /// `other`'s allocator, first releasing its storage if the two
    /// allocators differ. Then:
    ///
    /// - `other.len() > capacity`: a fully cloned block is built first and
    ///   swapped in. A panic or error leaves `self` unchanged.
    /// - otherwise the excess is destroyed, the shared prefix is
    ///   `clone_from`-assigned and the remaining tail clone-constructed. A
    ///   panic leaves `self` valid but possibly partially assigned.
    pub fn assign_clone(&mut self, other: &Self) -> Result<(), Error>
    where
        T: Clone,
    {
        let policy = A::PROPAGATION;
        if policy.on_copy_assign {
            if !policy.always_equal && self.buf.alloc != other.buf.alloc {
                log::debug!("copy assignment adopts the source allocator");
                self.release_storage();
            }
            self.buf.alloc = other.buf.alloc.clone();
        }
        self.assign_from(other.as_slice())
    }

    /// Replaces the contents with clones of `src`, with the same reuse or
    /// rebuild rules as [`assign_clone`](AllocVec::assign_clone).
    ///
    /// Returns `self` for chaining.
    #[inline]
    pub fn assign_slice(&mut self, src: &[T]) -> Result<&mut Self, Error>
    where
        T: Clone,
    {
        self.assign_from(src)?;
        Ok(self)
    }

    fn assign_from(&mut self, src: &[T]) -> Result<(), Error>
    where
        T: Clone,
    {
        let count = src.len();
        if count > self.capacity() {
            let new_cap = growth::exact(count, self.max_size())?;
            let staged = {
                let mut staging = self.buf.stage(new_cap)?;
                for item in src {
                    staging.construct(item.clone());
                }
                staging.finish()
            };
            self.clear();
            // SAFETY: `clear` destroyed every live element of the old block.
            unsafe { self.buf.commit(staged) };
            self.len = count;
            return Ok(());
        }
        self.truncate(count);
        let (head, tail) = src.split_at(self.len);
        self.as_mut_slice().clone_from_slice(head);
        for item in tail {
            let value = item.clone();
            // SAFETY: `len < count <= capacity`.
            unsafe { self.push_in_place(value) };
        }
        Ok(())
    }

    /// Move assignment: moves every element of `other` into `self`, leaving
    /// `other` with no elements and no storage.
    ///
    /// If `PROPAGATION.on_move_assign` or `always_equal` is set, or the two
    /// allocators compare equal, `self` releases its storage and takes over
    /// `other`'s block in `O(1)` (adopting `other`'s allocator when
    /// propagating). Otherwise `self` keeps its allocator, the elements are
    /// moved one by one into its own storage (reused when large enough) and
    /// `other`'s block is released. Only that last path can fail, and on
    /// failure both vectors are unchanged.
    pub fn assign_take(&mut self, other: &mut Self) -> Result<(), Error> {
        let policy = A::PROPAGATION;
        if policy.on_move_assign || policy.always_equal || self.buf.alloc == other.buf.alloc {
            self.release_storage();
            if policy.on_move_assign {
                self.buf.alloc = other.buf.alloc.clone();
            }
            self.buf.swap_block(&mut other.buf);
            self.len = mem::replace(&mut other.len, 0);
            return Ok(());
        }

        log::debug!(
            "move assignment between unequal allocators relocates {} elements",
            other.len
        );
        let count = other.len;
        if count > self.capacity() {
            let new_cap = growth::exact(count, self.max_size())?;
            let staged = {
                let mut staging = self.buf.stage(new_cap)?;
                // SAFETY: `other`'s elements become raw storage once its
                // `len` is reset below.
                unsafe { staging.relocate(other.buf.ptr().as_ptr(), 0, count) };
                staging.finish()
            };
            other.len = 0;
            self.clear();
            // SAFETY: `clear` destroyed every live element of the old block.
            unsafe { self.buf.commit(staged) };
            self.len = count;
            // SAFETY: `other` holds no live elements.
            unsafe { other.buf.release() };
        } else {
            self.clear();
            other.relocate_onto(self);
        }
        Ok(())
    }

    /// Exchanges contents with `other` in `O(1)`, without constructing,
    /// destroying or assigning any element.
    ///
    /// The allocators are exchanged only when `PROPAGATION.on_swap` is set.
    ///
    /// # Panics
    ///
    /// If the allocators are not exchanged, not always-equal and compare
    /// unequal: each block would end up owned by an allocator that cannot
    /// release it.
    pub fn swap_with(&mut self, other: &mut Self) {
        let policy = A::PROPAGATION;
        if policy.on_swap {
            mem::swap(&mut self.buf.alloc, &mut other.buf.alloc);
        } else {
            assert!(
                policy.always_equal || self.buf.alloc == other.buf.alloc,
                "swap between unequal, non-propagating allocators"
            );
        }
        self.buf.swap_block(&mut other.buf);
        mem::swap(&mut self.len, &mut other.len);
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use crate::test_alloc::{AllProp, Bomb, Tracking};
    use crate::{AllocVec, Error};
    use std::cell::Cell;
    use std::panic::{catch_unwind, AssertUnwindSafe};
    use std::rc::Rc;

    #[test]
    fn test_assign_clone_reuses_capacity() {
        let alloc = Tracking::new(1);
        let mut dst = AllocVec::new_in(alloc.clone());
        dst.extend_from_slice(&[0, 0, 0, 0, 0]).unwrap();
        let mut src = AllocVec::new_in(Tracking::new(2));
        src.extend_from_slice(&[7, 8]).unwrap();

        dst.assign_clone(&src).unwrap();
        assert_eq!(dst.as_slice(), &[7, 8]);
        assert_eq!(dst.capacity(), 5);
        assert_eq!(dst.allocator().id(), 1);
        assert_eq!(alloc.stats().allocations.get(), 1);
    }

    #[test]
    fn test_assign_clone_grows_exactly() {
        let mut dst = AllocVec::from([1]);
        let src = AllocVec::from([1, 2, 3, 4]);
        dst.assign_clone(&src).unwrap();
        assert_eq!(dst, src);
        assert_eq!(dst.capacity(), 4);
    }

    #[test]
    fn test_assign_clone_propagating_adopts_allocator() {
        let a = Tracking::propagating(1);
        let b = Tracking::propagating(2);
        let mut dst = AllocVec::new_in(a.clone());
        dst.extend_from_slice(&[1, 2, 3]).unwrap();
        let mut src = AllocVec::new_in(b.clone());
        src.push(9).unwrap();

        dst.assign_clone(&src).unwrap();
        assert_eq!(dst.as_slice(), &[9]);
        assert_eq!(dst.allocator().id(), 2);
        assert_eq!(a.stats().live_blocks.get(), 0);
        assert_eq!(b.stats().live_blocks.get(), 2);
    }

    #[test]
    fn test_assign_clone_panic_on_rebuild_is_strong() {
        let fuse = Rc::new(Cell::new(usize::MAX));
        let mut dst = AllocVec::from([Bomb::new(0, &fuse)]);
        let src = AllocVec::from([1, 2, 3].map(|i| Bomb::new(i, &fuse)));
        fuse.set(1);
        let res = catch_unwind(AssertUnwindSafe(|| {
            let _ = dst.assign_clone(&src);
        }));
        assert!(res.is_err());
        assert_eq!(dst.len(), 1);
        assert_eq!(dst[0].value, 0);
    }

    #[test]
    fn test_assign_slice_chains_on_every_branch() {
        let mut v: AllocVec<i32> = AllocVec::new();
        assert_eq!(v.assign_slice(&[1, 2, 3]).unwrap().len(), 3);
        assert_eq!(v.assign_slice(&[4]).unwrap().as_slice(), &[4]);
        v.assign_slice(&[5, 6]).unwrap().push(7).unwrap();
        assert_eq!(v.as_slice(), &[5, 6, 7]);
        assert_eq!(v.capacity(), 3);
    }

    #[test]
    fn test_assign_take_equal_allocators_is_constant_time() {
        let alloc = Tracking::new(1);
        let mut dst = AllocVec::new_in(alloc.clone());
        dst.extend_from_slice(&[1, 2]).unwrap();
        let mut src = AllocVec::new_in(alloc.clone());
        src.extend_from_slice(&[3, 4, 5]).unwrap();
        let ptr = src.as_ptr();
        alloc.stats().reset_ops();

        dst.assign_take(&mut src).unwrap();
        assert_eq!(dst.as_slice(), &[3, 4, 5]);
        assert_eq!(dst.as_ptr(), ptr);
        assert_eq!(src.len(), 0);
        assert_eq!(src.capacity(), 0);
        assert_eq!(alloc.stats().constructs.get(), 0);
        assert_eq!(alloc.stats().live_blocks.get(), 1);
    }

    #[test]
    fn test_assign_take_propagating_adopts_allocator() {
        let mut dst = AllocVec::new_in(Tracking::propagating(1));
        let mut src = AllocVec::new_in(Tracking::propagating(2));
        src.push(String::from("moved")).unwrap();
        dst.assign_take(&mut src).unwrap();
        assert_eq!(dst.as_slice(), &["moved"]);
        assert_eq!(dst.allocator().id(), 2);
        assert_eq!(src.capacity(), 0);
    }

    #[test]
    fn test_assign_take_unequal_allocators_relocates() {
        let a = Tracking::new(1);
        let b = Tracking::new(2);

        let mut small = AllocVec::new_in(a.clone());
        small.push(String::from("old")).unwrap();
        let mut src = AllocVec::new_in(b.clone());
        src.extend_from_slice(&[String::from("x"), String::from("y")]).unwrap();
        small.assign_take(&mut src).unwrap();
        assert_eq!(small.as_slice(), &["x", "y"]);
        assert_eq!(small.allocator().id(), 1);
        assert_eq!(small.capacity(), 2);
        assert_eq!((src.len(), src.capacity()), (0, 0));
        assert_eq!(b.stats().live_blocks.get(), 0);
        assert_eq!(a.stats().live_blocks.get(), 1);

        let mut big = AllocVec::new_in(Tracking::new(3));
        big.reserve(8).unwrap();
        let mut src = AllocVec::new_in(b.clone());
        src.push(String::from("z")).unwrap();
        big.assign_take(&mut src).unwrap();
        assert_eq!(big.as_slice(), &["z"]);
        assert_eq!(big.capacity(), 8);
        assert_eq!(b.stats().live_blocks.get(), 0);
    }

    #[test]
    fn test_assign_take_failure_keeps_both() {
        let a = Tracking::new(1);
        let mut dst = AllocVec::new_in(a.clone());
        dst.push(1).unwrap();
        let mut src = AllocVec::new_in(Tracking::new(2));
        src.extend_from_slice(&[2, 3]).unwrap();
        a.stats().fail_after.set(Some(0));
        assert_eq!(
            dst.assign_take(&mut src),
            Err(Error::AllocationFailure { capacity: 2 })
        );
        assert_eq!(dst.as_slice(), &[1]);
        assert_eq!(src.as_slice(), &[2, 3]);
    }

    #[test]
    fn test_swap_with_touches_no_element() {
        let alloc = Tracking::new(1);
        let mut a = AllocVec::new_in(alloc.clone());
        a.extend_from_slice(&[1, 2, 3]).unwrap();
        let mut b = AllocVec::new_in(alloc.clone());
        b.push(9).unwrap();
        alloc.stats().reset_ops();

        a.swap_with(&mut b);
        assert_eq!(a.as_slice(), &[9]);
        assert_eq!(b.as_slice(), &[1, 2, 3]);
        assert_eq!(alloc.stats().constructs.get(), 0);
        assert_eq!(alloc.stats().destroys.get(), 0);
    }

    #[test]
    fn test_swap_with_propagating_exchanges_allocators() {
        let first = Tracking::propagating(1);
        let second = Tracking::<AllProp>::with_stats(2, first.shared_stats());
        let mut a: AllocVec<u8, _> = AllocVec::new_in(first.clone());
        let mut b = AllocVec::new_in(second);
        a.push(1).unwrap();
        let constructs = first.stats().constructs.get();

        a.swap_with(&mut b);
        assert_eq!(a.allocator().id(), 2);
        assert_eq!(b.allocator().id(), 1);
        assert_eq!(b.as_slice(), &[1]);
        assert_eq!(first.stats().constructs.get(), constructs);
        drop(a);
        drop(b);
        assert_eq!(first.stats().live_blocks.get(), 0);
    }

    #[test]
    #[should_panic(expected = "unequal")]
    fn test_swap_with_unequal_allocators_panics() {
        let mut a: AllocVec<u8, _> = AllocVec::new_in(Tracking::new(1));
        let mut b = AllocVec::new_in(Tracking::new(2));
        a.swap_with(&mut b);
    }
}
