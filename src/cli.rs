// Copyright 2026 Google LLC
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Command-line surface of the benchmark.

use crate::macros::log_debug;
use crate::Error;
use clap::Parser;
use std::ffi::OsString;

/// Fallback program name, when the command line is completely empty.
const DEFAULT_PROGRAM: &str = env!("CARGO_PKG_NAME");

/// Fills an array with pseudo-random integers and sums it.
#[derive(Parser, Debug, PartialEq, Eq)]
#[command(disable_help_flag = true, disable_version_flag = true)]
pub struct Cli {
    /// Number of integers to allocate, fill and sum.
    #[arg(allow_hyphen_values = true)]
    array_size: OsString,
}

impl Cli {
    /// Parses the full command line, including the program name.
    ///
    /// Any command line that isn't exactly one argument after the program name
    /// yields [`Error::Usage`].
    pub fn try_parse_args<I, T>(args: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let args = args.into_iter().map(Into::into).collect::<Vec<OsString>>();
        let usage = || Error::Usage {
            program: args
                .first()
                .map(|program| program.to_string_lossy().into_owned())
                .unwrap_or_else(|| DEFAULT_PROGRAM.to_owned()),
        };

        let [program, array_size] = args.as_slice() else {
            log_debug!("Expected 1 argument, got {}", args.len().saturating_sub(1));
            return Err(usage());
        };
        // The separator makes clap take the argument verbatim, even `--`.
        Cli::try_parse_from([program, &OsString::from("--"), array_size]).map_err(|e| {
            log_debug!("Rejected command line: {:?}", e.kind());
            usage()
        })
    }

    /// The array size argument, as typed by the user.
    pub fn array_size(&self) -> String {
        self.array_size.to_string_lossy().into_owned()
    }
}
