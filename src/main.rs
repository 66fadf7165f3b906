// Copyright 2026 Google LLC
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Fills an array of `<array_size>` pseudo-random integers and sums it.
//!
//! Usage: `sumbench <array_size>`. Set `RUST_LOG=debug` to see the phases of
//! the run on stderr.

use sumbench::{Driver, Error};

fn main() {
    #[cfg(feature = "log")]
    env_logger::init();

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let code = match Driver::default().run(std::env::args_os(), &mut out) {
        Ok(_) => 0,
        // The usage line was already printed to stdout.
        Err(e @ Error::Usage { .. }) => e.exit_code(),
        Err(e) => {
            eprintln!("error: {e}");
            e.exit_code()
        }
    };
    drop(out);
    std::process::exit(code);
}
