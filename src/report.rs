//! Diagnostics for failures nobody planned for.
use std::backtrace::{Backtrace, BacktraceStatus};
use std::fmt::Write;
use std::panic;

use crate::term;

/// Error, its causes and a stack trace, whatever `RUST_BACKTRACE` says.
pub fn unexpected(e: &anyhow::Error) -> String {
    let mut out = format!("Unexpected error: {e}\n");
    for cause in e.chain().skip(1) {
        let _ = writeln!(out, "Caused by: {cause}");
    }

    let trace = e.backtrace();
    if trace.status() == BacktraceStatus::Captured {
        let _ = write!(out, "\nstack backtrace:\n{trace}");
    } else {
        let _ = write!(out, "\nstack backtrace:\n{}", Backtrace::force_capture());
    }
    out
}

/// Print panics as unexpected errors, always with a stack trace.
pub fn install_panic_hook() {
    panic::set_hook(Box::new(|info| {
        term::error(&format!("Unexpected error: {info}"));
        eprintln!("stack backtrace:\n{}", Backtrace::force_capture());
    }));
}
