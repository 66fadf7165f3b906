// Copyright 2026 Google LLC
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Crate-internal logging front-end.
//!
//! With the `log` feature, each macro forwards to the `log` crate macro of the
//! same level. Without it, the format arguments are still type-checked (so
//! that variables only referenced in log lines don't trigger warnings), but
//! nothing is emitted.

/// Logs at the given `log` level, or only checks the format arguments when the
/// `log` feature is disabled.
macro_rules! log_at {
    ( $level:ident, $($args:tt)* ) => {{
        #[cfg(feature = "log")]
        log::$level!( $($args)* );
        #[cfg(not(feature = "log"))]
        let _ = format_args!( $($args)* );
    }};
}

macro_rules! log_debug {
    ( $($args:tt)* ) => {
        $crate::macros::log_at!(debug, $($args)*)
    };
}

macro_rules! log_error {
    ( $($args:tt)* ) => {
        $crate::macros::log_at!(error, $($args)*)
    };
}

macro_rules! log_trace {
    ( $($args:tt)* ) => {
        $crate::macros::log_at!(trace, $($args)*)
    };
}

macro_rules! log_warn {
    ( $($args:tt)* ) => {
        $crate::macros::log_at!(warn, $($args)*)
    };
}

pub(crate) use log_at;
pub(crate) use log_debug;
pub(crate) use log_error;
pub(crate) use log_trace;
pub(crate) use log_warn;
