// Copyright 2026 Google LLC
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Single-pass summation of the benchmark input.

use crate::Error;

/// What to do when the running sum leaves the range of an [`i32`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OverflowPolicy {
    /// Wrap around in two's complement, like native 32-bit arithmetic.
    #[default]
    Wrapping,
    /// Clamp the running sum to [`i32::MIN`] or [`i32::MAX`].
    Saturating,
    /// Fail with [`Error::Overflow`] on the first overflowing addition.
    Checked,
}

/// Sums the values in order, starting from zero.
///
/// ```
/// # use sumbench::{sum, OverflowPolicy};
/// assert_eq!(sum(&[1, 2, 3], OverflowPolicy::Wrapping).unwrap(), 6);
/// assert_eq!(sum(&[i32::MAX, 1], OverflowPolicy::Wrapping).unwrap(), i32::MIN);
/// assert!(sum(&[i32::MAX, 1], OverflowPolicy::Checked).is_err());
/// ```
pub fn sum(values: &[i32], policy: OverflowPolicy) -> Result<i32, Error> {
    match policy {
        OverflowPolicy::Wrapping => Ok(values.iter().fold(0i32, |acc, &x| acc.wrapping_add(x))),
        OverflowPolicy::Saturating => Ok(values
            .iter()
            .fold(0i32, |acc, &x| acc.saturating_add(x))),
        OverflowPolicy::Checked => {
            values
                .iter()
                .enumerate()
                .try_fold(0i32, |acc, (index, &x)| {
                    acc.checked_add(x).ok_or(Error::Overflow { index })
                })
        }
    }
}
