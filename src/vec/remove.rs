// This file is part of alloc-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{allocator::Allocator, vec::AllocVec};

// Core imports
use core::ptr;

impl<T, A: Allocator> AllocVec<T, A> {
    /// Removes and returns the element at `index`, shifting subsequent elements left.
    ///
    /// Returns `None` if `index >= len`.
    #[inline]
    pub fn remove(&mut self, index: usize) -> Option<T> {
        let len = self.len;
        if index >= len {
            return None;
        }
        // SAFETY: `index < len`; after the read slot `index` is a hole that
        // the tail shift closes.
        unsafe {
            let at = self.buf.slot(index).as_ptr();
            let out = ptr::read(at);
            ptr::copy(at.add(1), at, len - index - 1);
            self.len = len - 1;
            Some(out)
        }
    }

    /// Removes and returns the element at `index` by moving the last element
    /// into its place. `O(1)`; does not preserve order.
    ///
    /// Returns `None` if `index >= len`.
    #[inline]
    pub fn swap_remove(&mut self, index: usize) -> Option<T> {
        let len = self.len;
        if index >= len {
            return None;
        }
        // SAFETY: both slots are live; the last one becomes raw storage.
        unsafe {
            let out = ptr::read(self.buf.slot(index).as_ptr());
            let last = len - 1;
            if index != last {
                ptr::copy_nonoverlapping(
                    self.buf.slot(last).as_ptr(),
                    self.buf.slot(index).as_ptr(),
                    1,
                );
            }
            self.len = last;
            Some(out)
        }
    }

    /// Retains only the elements specified by the predicate `f`, preserving order.
    ///
    /// Rejected elements are destroyed through the allocator. If `f` panics,
    /// the elements not yet visited are kept and the vector stays valid.
    pub fn retain<F: FnMut(&T) -> bool>(&mut self, mut f: F) {
        let len = self.len;
        // Elements are parked outside `len` while the scan runs.
        self.len = 0;
        let mut scan = Retain {
            v: self,
            read: 0,
            write: 0,
            len,
        };
        while scan.read < scan.len {
            // SAFETY: `read < len`, so the slot is live and not yet moved.
            let cur = unsafe { &*scan.v.buf.slot(scan.read).as_ptr() };
            if f(cur) {
                if scan.read != scan.write {
                    // SAFETY: `write < read`, the slot at `write` is a hole.
                    unsafe {
                        ptr::copy_nonoverlapping(
                            scan.v.buf.slot(scan.read).as_ptr(),
                            scan.v.buf.slot(scan.write).as_ptr(),
                            1,
                        );
                    }
                }
                scan.write += 1;
                scan.read += 1;
            } else {
                scan.read += 1;
                // SAFETY: the slot is live and is skipped from now on.
                unsafe { scan.v.buf.destroy(scan.read - 1) };
            }
        }
    }
}

/// Closes the gap left by `retain` on exit, including unwinding.
struct Retain<'a, T, A: Allocator> {
    v: &'a mut AllocVec<T, A>,
    read: usize,
    write: usize,
    len: usize,
}

impl<T, A: Allocator> Drop for Retain<'_, T, A> {
    fn drop(&mut self) {
        let rest = self.len - self.read;
        if rest > 0 && self.read != self.write {
            // SAFETY: `[read, len)` is live and `[write, write + rest)` lies
            // within the block; the ranges may overlap.
            unsafe {
                ptr::copy(
                    self.v.buf.slot(self.read).as_ptr(),
                    self.v.buf.slot(self.write).as_ptr(),
                    rest,
                );
            }
        }
        self.v.len = self.write + rest;
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use crate::test_alloc::Tracking;
    use crate::AllocVec;
    use std::panic::{catch_unwind, AssertUnwindSafe};

    #[test]
    fn test_remove_and_swap_remove() {
        let mut r = AllocVec::from([1, 2, 3, 4, 5]);
        assert_eq!(r.remove(2), Some(3));
        assert_eq!(r.as_slice(), &[1, 2, 4, 5]);
        assert_eq!(r.remove(8), None);
        assert_eq!(r.remove(3), Some(5));
        assert_eq!(r.as_slice(), &[1, 2, 4]);

        let mut s = AllocVec::from([1, 2, 3, 4, 5]);
        assert_eq!(s.swap_remove(1), Some(2));
        assert_eq!(s.as_slice(), &[1, 5, 3, 4]);
        assert_eq!(s.swap_remove(3), Some(4));
        assert_eq!(s.as_slice(), &[1, 5, 3]);
        assert_eq!(s.swap_remove(10), None);
    }

    #[test]
    fn test_retain_is_stable_and_destroys_rejected() {
        let alloc = Tracking::new(0);
        let mut v = AllocVec::new_in(alloc.clone());
        for i in 1..=6 {
            v.push(i.to_string()).unwrap();
        }
        alloc.stats().reset_ops();
        v.retain(|x| x.parse::<i32>().unwrap() % 2 == 0);
        assert_eq!(v.as_slice(), &["2", "4", "6"]);
        assert_eq!(alloc.stats().destroys.get(), 3);
    }

    #[test]
    fn test_retain_panic_keeps_unvisited_elements() {
        let mut v = AllocVec::from([1, 2, 3, 4, 5].map(|i: i32| i.to_string()));
        let mut seen = 0;
        let res = catch_unwind(AssertUnwindSafe(|| {
            v.retain(|x| {
                seen += 1;
                if seen == 4 {
                    panic!("predicate failed");
                }
                x != "2"
            });
        }));
        assert!(res.is_err());
        assert_eq!(v.as_slice(), &["1", "3", "4", "5"]);
    }
}
