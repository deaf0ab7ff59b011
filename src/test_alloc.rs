// This file is part of alloc-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test-only allocator and element types.
//!
//! [`Tracking`] forwards to [`Global`] while counting blocks, constructions
//! and destructions in shared [`Stats`]. Instances compare equal by `id`, so
//! tests can build "unequal" allocators. The propagation policy comes from
//! the `M` marker. `Stats` can also cap `max_size` or make `construct`
//! panic. [`Bomb`] panics when cloned after its shared fuse burns
//! down, which drives the unwind-safety tests.

// Crate imports
use crate::allocator::{AllocError, Allocator, Global, Propagation};

// Std imports
use std::{alloc::Layout, cell::Cell, marker::PhantomData, ptr::NonNull, rc::Rc};

#[derive(Debug, Default)]
pub(crate) struct Stats {
    pub(crate) allocations: Cell<usize>,
    pub(crate) live_blocks: Cell<usize>,
    pub(crate) constructs: Cell<usize>,
    pub(crate) destroys: Cell<usize>,
    /// Number of further allocations allowed to succeed; `None` is unlimited.
    pub(crate) fail_after: Cell<Option<usize>>,
    /// Number of further `construct` calls allowed before one panics.
    pub(crate) construct_budget: Cell<Option<usize>>,
    /// Overrides `max_size` for every element type.
    pub(crate) max_len: Cell<Option<usize>>,
}

impl Stats {
    pub(crate) fn reset_ops(&self) {
        self.constructs.set(0);
        self.destroys.set(0);
    }
}

pub(crate) trait Mode {
    const PROPAGATION: Propagation;
}

#[derive(Debug)]
pub(crate) struct NoProp;
impl Mode for NoProp {
    const PROPAGATION: Propagation = Propagation::NONE;
}

#[derive(Debug)]
pub(crate) struct AllProp;
impl Mode for AllProp {
    const PROPAGATION: Propagation = Propagation::ALL;
}

#[derive(Debug)]
pub(crate) struct Tracking<M = NoProp> {
    id: u32,
    stats: Rc<Stats>,
    _mode: PhantomData<M>,
}

impl Tracking {
    pub(crate) fn new(id: u32) -> Self {
        Self::with_stats(id, Rc::new(Stats::default()))
    }
}

impl Tracking<AllProp> {
    pub(crate) fn propagating(id: u32) -> Self {
        Self::with_stats(id, Rc::new(Stats::default()))
    }
}

impl<M> Tracking<M> {
    pub(crate) fn with_stats(id: u32, stats: Rc<Stats>) -> Self {
        Self {
            id,
            stats,
            _mode: PhantomData,
        }
    }

    pub(crate) fn id(&self) -> u32 {
        self.id
    }

    pub(crate) fn stats(&self) -> &Stats {
        &self.stats
    }

    pub(crate) fn shared_stats(&self) -> Rc<Stats> {
        Rc::clone(&self.stats)
    }
}

impl<M> Clone for Tracking<M> {
    fn clone(&self) -> Self {
        Self::with_stats(self.id, Rc::clone(&self.stats))
    }
}

impl<M> PartialEq for Tracking<M> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

// SAFETY: every block comes from `Global`, which any instance may release.
unsafe impl<M: Mode> Allocator for Tracking<M> {
    const PROPAGATION: Propagation = M::PROPAGATION;

    fn allocate(&self, layout: Layout) -> Result<NonNull<u8>, AllocError> {
        match self.stats.fail_after.get() {
            Some(0) => return Err(AllocError),
            Some(n) => self.stats.fail_after.set(Some(n - 1)),
            None => {}
        }
        let block = Global.allocate(layout)?;
        self.stats.allocations.set(self.stats.allocations.get() + 1);
        self.stats.live_blocks.set(self.stats.live_blocks.get() + 1);
        Ok(block)
    }

    unsafe fn deallocate(&self, ptr: NonNull<u8>, layout: Layout) {
        self.stats.live_blocks.set(self.stats.live_blocks.get() - 1);
        Global.deallocate(ptr, layout);
    }

    unsafe fn construct<T>(&self, slot: NonNull<T>, value: T) {
        match self.stats.construct_budget.get() {
            Some(0) => panic!("construct refused by allocator {}", self.id),
            Some(n) => self.stats.construct_budget.set(Some(n - 1)),
            None => {}
        }
        self.stats.constructs.set(self.stats.constructs.get() + 1);
        slot.as_ptr().write(value);
    }

    unsafe fn destroy<T>(&self, slot: NonNull<T>) {
        self.stats.destroys.set(self.stats.destroys.get() + 1);
        slot.as_ptr().drop_in_place();
    }

    fn max_size<T>(&self) -> usize {
        self.stats
            .max_len
            .get()
            .unwrap_or_else(|| Global.max_size::<T>())
    }
}

/// Element whose `clone` panics once the shared fuse reaches zero.
#[derive(Debug)]
pub(crate) struct Bomb {
    pub(crate) value: i32,
    fuse: Rc<Cell<usize>>,
}

impl Bomb {
    pub(crate) fn new(value: i32, fuse: &Rc<Cell<usize>>) -> Self {
        Self {
            value,
            fuse: Rc::clone(fuse),
        }
    }
}

impl Clone for Bomb {
    fn clone(&self) -> Self {
        let left = self.fuse.get();
        if left == 0 {
            panic!("bomb went off while cloning {}", self.value);
        }
        self.fuse.set(left - 1);
        Self {
            value: self.value,
            fuse: Rc::clone(&self.fuse),
        }
    }
}

impl PartialEq for Bomb {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}
