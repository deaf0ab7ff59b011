// This file is part of alloc-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # `alloc-vec`
//!
//! A `no_std` growable contiguous vector whose storage comes from a
//! pluggable [`Allocator`], with explicit allocator propagation rules and
//! unwind-safe reallocation.
//!
//! The core type, [`AllocVec<T, A>`], owns one heap block of `capacity`
//! slots and tracks how many of them (`len`) hold live elements. Appends are
//! amortized `O(1)`, indexing is `O(1)`, and the vector dereferences to a
//! slice.
//!
//! ## When to use this crate
//!
//! This crate may be useful when:
//!
//! - You need a `Vec`-like buffer backed by your own allocator on stable Rust.
//! - You care which allocator instance a container ends up with after clone,
//!   move or swap (arena/pool allocators with non-interchangeable instances).
//! - You want every element construction and destruction routed through the
//!   allocator, e.g. for accounting.
//!
//! ## Allocators and propagation
//!
//! An [`Allocator`] provides raw blocks, `construct`/`destroy` hooks, a
//! `max_size` bound and a compile-time [`Propagation`] policy:
//!
//! - copy assignment ([`AllocVec::assign_clone`]) adopts the source's
//!   allocator only when `on_copy_assign` is set;
//! - move assignment ([`AllocVec::assign_take`]) steals the source's block in
//!   `O(1)` when `on_move_assign` is set or the allocators compare equal, and
//!   otherwise moves the elements one by one into its own storage;
//! - [`AllocVec::swap_with`] exchanges allocators only when `on_swap` is set.
//!
//! [`Global`] (the default) uses the global heap, and every instance is equal.
//!
//! ## Failure model
//!
//! - Capacity requests above the allocator's `max_size` return
//!   [`Error::LengthError`] before the allocator is asked.
//! - Allocator refusals return [`Error::AllocationFailure`].
//! - Checked access ([`AllocVec::at`]) returns [`Error::OutOfRange`].
//! - Panics from element constructors (`Clone`, `Default`, closures)
//!   propagate unchanged.
//!
//! Every growth path builds the complete new block before touching the old
//! one. If anything fails while building, the new block is torn down and the
//! vector is exactly as it was before the call. Operations that reuse
//! existing storage element by element ([`AllocVec::assign_clone`] within
//! capacity, [`AllocVec::extend_from_slice`], in-place `resize`) keep the
//! vector valid on a panic but may leave it partially updated.
//!
//! ## Example
//!
//! ```rust
//! use alloc_vec::AllocVec;
//!
//! let mut v: AllocVec<u8> = AllocVec::new();
//! v.push(1).unwrap();
//! v.extend_from_slice(&[2, 3]).unwrap();
//! assert_eq!(v.as_slice(), &[1, 2, 3]);
//! assert!(v.at(3).is_err());
//! ```
//!
//! See [`AllocVec`] for detailed behavior, including growth policy and
//! complexity notes.

#![cfg_attr(not(test), no_std)]

extern crate alloc;

// Modules
mod allocator;
mod error;
mod growth;
mod index;
mod iter;
mod raw;
#[cfg(test)]
mod test_alloc;
mod vec;

// Public exports (crate API surface)
pub use allocator::{AllocError, Allocator, Global, Propagation};
pub use error::Error;
pub use iter::IntoIter;
pub use vec::AllocVec;
