// Copyright 2026 Google LLC
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The heap buffer holding the benchmark's integers.

use crate::fill::random_item;
use crate::macros::log_debug;
use crate::{ArraySize, Error};
use rand::Rng;
use std::ops::{Deref, DerefMut};

/// An array of integers, allocated once and released when dropped.
///
/// Allocation only reserves memory, so the buffer is empty until
/// [`fill()`](Self::fill) writes every slot in a single pass.
pub struct Buffer {
    size: ArraySize,
    items: Vec<i32>,
}

impl Buffer {
    /// Allocates room for exactly `size` integers.
    ///
    /// Fails with [`Error::Allocation`] instead of aborting the process if the
    /// allocator can't satisfy the request.
    pub fn allocate(size: ArraySize) -> Result<Self, Error> {
        let len = size.len();
        let mut items = Vec::new();
        items
            .try_reserve_exact(len)
            .map_err(|source| Error::Allocation { len, source })?;
        log_debug!(
            "Allocated {len} integers ({} bytes)",
            len * std::mem::size_of::<i32>()
        );
        Ok(Self { size, items })
    }

    /// Writes a uniform value in `0..=RAND_MAX` to each of the allocated
    /// slots, replacing any previous contents.
    pub fn fill(&mut self, rng: &mut impl Rng) {
        self.items.clear();
        self.items
            .extend(std::iter::repeat_with(|| random_item(rng)).take(self.size.len()));
    }
}

impl Deref for Buffer {
    type Target = [i32];

    fn deref(&self) -> &[i32] {
        &self.items
    }
}

impl DerefMut for Buffer {
    fn deref_mut(&mut self) -> &mut [i32] {
        &mut self.items
    }
}

impl Drop for Buffer {
    fn drop(&mut self) {
        log_debug!("Releasing buffer of {} integers", self.items.len());
    }
}
