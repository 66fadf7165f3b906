// Copyright 2026 Google LLC
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Parsing of the array size argument.

use crate::Error;
use std::convert::TryFrom;
use std::fmt;

/// Parses a textual integer the way C's `atoi()` does.
///
/// Leading ASCII whitespace is skipped, then an optional sign and as many
/// decimal digits as possible are consumed. Everything after the first
/// non-digit is ignored, and an input without any digit parses to zero.
/// Magnitudes that don't fit in an [`i32`] saturate.
///
/// ```
/// # use sumbench::parse_size;
/// assert_eq!(parse_size("42"), 42);
/// assert_eq!(parse_size("  -7"), -7);
/// assert_eq!(parse_size("5abc"), 5);
/// assert_eq!(parse_size("abc"), 0);
/// ```
pub fn parse_size(text: &str) -> i32 {
    let mut bytes = text
        .trim_start_matches(|c: char| c.is_ascii_whitespace())
        .bytes()
        .peekable();

    let negative = match bytes.peek() {
        Some(b'-') => {
            bytes.next();
            true
        }
        Some(b'+') => {
            bytes.next();
            false
        }
        _ => false,
    };

    // Accumulate as a negative number so that `i32::MIN` is representable.
    let mut value: i32 = 0;
    for digit in bytes.map_while(|b| b.is_ascii_digit().then(|| (b - b'0') as i32)) {
        value = value.saturating_mul(10).saturating_sub(digit);
    }

    if negative {
        value
    } else {
        value.checked_neg().unwrap_or(i32::MAX)
    }
}

/// A validated, non-negative array length.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ArraySize(u32);

impl ArraySize {
    /// Number of items in the array.
    pub fn len(self) -> usize {
        self.0 as usize
    }

    /// Whether the array holds no items.
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl TryFrom<i32> for ArraySize {
    type Error = Error;

    fn try_from(size: i32) -> Result<Self, Self::Error> {
        u32::try_from(size)
            .map(ArraySize)
            .map_err(|_| Error::InvalidSize(size))
    }
}

impl fmt::Display for ArraySize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
