//! Error reporting seam.
//!
//! Failures that are already rendered to the user (a failed chat exchange) are
//! also reported here for diagnostics. The default sink forwards to the `log`
//! facade, which the WASM entry point backs with the browser console.

#[cfg(test)]
#[path = "diagnostics_test.rs"]
mod diagnostics_test;

use std::error::Error;

/// Receives errors that were handled locally but should still be recorded.
pub trait DiagnosticSink {
    fn report(&self, context: &str, error: &dyn Error);
}

/// [`DiagnosticSink`] that logs at `error` level.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogDiagnostics;

impl DiagnosticSink for LogDiagnostics {
    fn report(&self, context: &str, error: &dyn Error) {
        log::error!("{context}: {error}");
    }
}

impl<T: DiagnosticSink + ?Sized> DiagnosticSink for &T {
    fn report(&self, context: &str, error: &dyn Error) {
        (**self).report(context, error);
    }
}
