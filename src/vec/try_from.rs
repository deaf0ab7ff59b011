// This file is part of alloc-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::Error, vec::AllocVec};

impl<T: Clone> TryFrom<&[T]> for AllocVec<T> {
    type Error = Error;
    fn try_from(src: &[T]) -> Result<Self, Error> {
        Self::from_slice(src)
    }
}
