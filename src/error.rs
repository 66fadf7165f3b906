// Copyright 2026 Google LLC
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::collections::TryReserveError;
use std::fmt;

/// Errors that can abort a benchmark run.
#[derive(Debug)]
pub enum Error {
    /// The command line didn't contain exactly one argument.
    Usage {
        /// Name under which the program was invoked.
        program: String,
    },
    /// The requested array size is negative.
    InvalidSize(i32),
    /// The buffer couldn't be allocated.
    Allocation {
        /// Number of items that were requested.
        len: usize,
        /// Underlying reservation failure.
        source: TryReserveError,
    },
    /// The sum overflowed a 32-bit integer, with the [`Checked`] policy.
    ///
    /// [`Checked`]: crate::OverflowPolicy::Checked
    Overflow {
        /// Index of the item whose addition overflowed.
        index: usize,
    },
    /// Writing the report failed.
    Io(std::io::Error),
}

impl Error {
    /// Process exit code to report for this error.
    pub fn exit_code(&self) -> i32 {
        1
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Usage { program } => write!(f, "Usage: {program} <array_size>"),
            Error::InvalidSize(size) => write!(f, "invalid array size {size}: must not be negative"),
            Error::Allocation { len, .. } => {
                write!(f, "failed to allocate an array of {len} integers")
            }
            Error::Overflow { index } => write!(f, "sum overflowed at index {index}"),
            Error::Io(_) => write!(f, "failed to write the report"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Allocation { source, .. } => Some(source),
            Error::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::Io(e)
    }
}
