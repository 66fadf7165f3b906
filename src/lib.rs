// Copyright 2026 Google LLC
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! A micro-benchmark that allocates an array of integers, fills it with
//! pseudo-random values, sums it and reports how many numbers were summed.
//!
//! ```
//! # use sumbench::{Driver, SeedSource};
//! let mut out = Vec::new();
//! Driver::new(SeedSource::WallClock)
//!     .run(["sumbench", "1000"], &mut out)
//!     .unwrap();
//! assert_eq!(String::from_utf8(out).unwrap(), "Sum 1000 numbers\n");
//! ```
//!
//! The computed sum is returned to library callers in the [`Report`], but the
//! printed report only echoes the array size.

#![forbid(missing_docs, unsafe_code)]

mod args;
mod buffer;
mod cli;
mod driver;
mod error;
mod fill;
mod macros;
mod reduce;

pub use args::{parse_size, ArraySize};
pub use buffer::Buffer;
pub use cli::Cli;
pub use driver::{Driver, Report};
pub use error::Error;
pub use fill::{fill, SeedSource, RAND_MAX};
pub use reduce::{sum, OverflowPolicy};
