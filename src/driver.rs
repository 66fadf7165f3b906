// Copyright 2026 Google LLC
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The benchmark run: allocate, fill, reduce, report and release.

use crate::macros::{log_debug, log_error};
use crate::{parse_size, sum, ArraySize, Buffer, Cli, Error, OverflowPolicy, SeedSource};
use std::convert::TryFrom;
use std::ffi::OsString;
use std::hint::black_box;
use std::io::Write;

/// Outcome of a successful run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Report {
    /// Number of integers that were summed.
    pub size: ArraySize,
    /// The computed sum. It is deliberately not part of the printed report.
    pub sum: i32,
}

/// Runs the benchmark for a command line.
#[derive(Clone, Copy, Debug)]
pub struct Driver {
    /// Seed of the pseudo-random input.
    pub seed: SeedSource,
    /// Overflow behavior of the summation.
    pub overflow: OverflowPolicy,
}

impl Default for Driver {
    fn default() -> Self {
        Self::new(SeedSource::WallClock)
    }
}

impl Driver {
    /// Creates a driver that wraps around on overflow.
    pub fn new(seed: SeedSource) -> Self {
        Self {
            seed,
            overflow: OverflowPolicy::Wrapping,
        }
    }

    /// Runs the benchmark, writing the report (or the usage line) to `out`.
    ///
    /// ```
    /// # use sumbench::{Driver, SeedSource};
    /// let mut out = Vec::new();
    /// let report = Driver::new(SeedSource::Fixed(1))
    ///     .run(["prog", "5"], &mut out)
    ///     .unwrap();
    /// assert_eq!(report.size.len(), 5);
    /// assert_eq!(out, b"Sum 5 numbers\n");
    /// ```
    pub fn run<I, T>(&self, args: I, out: &mut impl Write) -> Result<Report, Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let cli = match Cli::try_parse_args(args) {
            Ok(cli) => cli,
            Err(e) => {
                writeln!(out, "{e}")?;
                return Err(e);
            }
        };

        let size = ArraySize::try_from(parse_size(&cli.array_size())).inspect_err(|e| {
            log_error!("{e}");
        })?;

        let mut buffer = Buffer::allocate(size)?;
        let mut rng = self.seed.rng();
        buffer.fill(&mut rng);
        let total = sum(black_box(&buffer[..]), self.overflow)?;
        log_debug!("Sum of {size} numbers is {total}");

        writeln!(out, "Sum {size} numbers")?;
        out.flush()?;
        drop(buffer);

        Ok(Report { size, sum: total })
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::fill;

    fn run(args: &[&str]) -> (Result<Report, Error>, String) {
        let mut out = Vec::new();
        let result = Driver::new(SeedSource::Fixed(42)).run(args.iter().copied(), &mut out);
        (result, String::from_utf8(out).unwrap())
    }

    #[test]
    fn sum_five_numbers() {
        let (result, out) = run(&["prog", "5"]);
        let report = result.unwrap();
        assert_eq!(report.size.len(), 5);
        assert_eq!(out, "Sum 5 numbers\n");
    }

    #[test]
    fn sum_zero_numbers() {
        let (result, out) = run(&["prog", "0"]);
        assert_eq!(result.unwrap().sum, 0);
        assert_eq!(out, "Sum 0 numbers\n");
    }

    #[test]
    fn non_numeric_size_is_zero() {
        let (result, out) = run(&["prog", "abc"]);
        assert_eq!(result.unwrap().size.len(), 0);
        assert_eq!(out, "Sum 0 numbers\n");
    }

    #[test]
    fn trailing_garbage_is_ignored() {
        let (result, out) = run(&["prog", "12xyz"]);
        assert_eq!(result.unwrap().size.len(), 12);
        assert_eq!(out, "Sum 12 numbers\n");
    }

    #[test]
    fn missing_argument_prints_usage() {
        let (result, out) = run(&["prog"]);
        let e = result.unwrap_err();
        assert!(matches!(e, Error::Usage { .. }));
        assert_eq!(e.exit_code(), 1);
        assert_eq!(out, "Usage: prog <array_size>\n");
    }

    #[test]
    fn extra_arguments_print_usage() {
        let (result, out) = run(&["./sumbench", "1", "2"]);
        assert!(matches!(result, Err(Error::Usage { .. })));
        assert_eq!(out, "Usage: ./sumbench <array_size>\n");
    }

    #[test]
    fn flag_shaped_arguments_are_sizes() {
        for arg in ["--help", "-h", "--version", "--"] {
            let (result, out) = run(&["prog", arg]);
            assert_eq!(result.unwrap().size.len(), 0);
            assert_eq!(out, "Sum 0 numbers\n");
        }
    }

    #[test]
    fn separator_with_size_prints_usage() {
        for args in [["prog", "--", "5"], ["prog", "5", "--"]] {
            let (result, out) = run(&args);
            assert!(matches!(result, Err(Error::Usage { .. })));
            assert_eq!(out, "Usage: prog <array_size>\n");
        }
    }

    #[test]
    fn negative_size_is_rejected() {
        let (result, out) = run(&["prog", "-5"]);
        assert!(matches!(result, Err(Error::InvalidSize(-5))));
        assert_eq!(out, "");
    }

    #[test]
    fn sum_matches_fixed_seed_input() {
        let (result, _) = run(&["prog", "1000"]);
        let report = result.unwrap();

        let mut expected = vec![0; 1000];
        fill(&mut SeedSource::Fixed(42).rng(), &mut expected);
        assert_eq!(
            report.sum,
            sum(&expected, OverflowPolicy::Wrapping).unwrap()
        );
    }

    #[test]
    fn output_identical_across_seeds() {
        let mut first = Vec::new();
        let mut second = Vec::new();
        let a = Driver::new(SeedSource::Fixed(1))
            .run(["prog", "100"], &mut first)
            .unwrap();
        let b = Driver::new(SeedSource::Fixed(2))
            .run(["prog", "100"], &mut second)
            .unwrap();
        assert_ne!(a.sum, b.sum);
        assert_eq!(first, second);
    }

    #[test]
    fn checked_overflow_fails() {
        let driver = Driver {
            seed: SeedSource::Fixed(42),
            overflow: OverflowPolicy::Checked,
        };
        let mut out = Vec::new();
        // 1000 values uniform in 0..=i32::MAX overflow a 32-bit sum.
        let result = driver.run(["prog", "1000"], &mut out);
        assert!(matches!(result, Err(Error::Overflow { .. })));
        assert!(out.is_empty());
    }
}
