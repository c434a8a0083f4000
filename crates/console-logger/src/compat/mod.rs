//! Compatibility bridges for other logging crates
//!
//! Both bridges decide enablement at runtime from the record's level, since
//! `log` and `tracing` levels are values rather than types. They still honor
//! the compile-time threshold and render through the same palette.

#[cfg(feature = "log-compat")]
pub mod log_bridge;

#[cfg(feature = "tracing-compat")]
pub mod tracing_bridge;

use crate::callsite::CallSite;
use crate::palette;
use crate::preamble::Preamble;
use crate::severity::Severity;
use crate::stream::{self, StreamKind};
use std::fmt;

/// Render and write one bridged record
pub(crate) fn forward(severity: Severity, callsite: &CallSite, body: fmt::Arguments<'_>) {
    if !severity.is_enabled() {
        return;
    }

    let line = Preamble::build(severity, callsite, palette::current()).render(body);
    stream::write_line(StreamKind::of(severity), &line);
}
