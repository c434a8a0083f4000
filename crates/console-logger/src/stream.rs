//! Output sinks

use crate::severity::Severity;
use std::io::Write;

/// Which console stream a line goes to
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StreamKind {
    /// Standard output
    Standard,
    /// Standard error
    Error,
}

impl StreamKind {
    /// Stream a severity is routed to
    pub const fn of(severity: Severity) -> Self {
        if severity.is_urgent() {
            Self::Error
        } else {
            Self::Standard
        }
    }
}

/// Ordered, synchronous line sink selected at compile time
pub trait Stream: 'static {
    /// Stream this sink writes to
    const KIND: StreamKind;

    /// Write one line and flush
    #[inline]
    fn write_line(line: &str) {
        write_line(Self::KIND, line);
    }
}

/// Standard output sink
#[derive(Debug)]
pub struct Stdout;

/// Standard error sink
#[derive(Debug)]
pub struct Stderr;

impl Stream for Stdout {
    const KIND: StreamKind = StreamKind::Standard;
}

impl Stream for Stderr {
    const KIND: StreamKind = StreamKind::Error;
}

/// Write one line to a stream chosen at runtime
///
/// The stream is locked for the whole line so concurrent writers do not
/// interleave. I/O errors are dropped: logging never fails the caller.
pub fn write_line(kind: StreamKind, line: &str) {
    #[cfg(feature = "test-support")]
    if crate::test_support::intercept(kind, line) {
        return;
    }

    match kind {
        StreamKind::Standard => emit(std::io::stdout().lock(), line),
        StreamKind::Error => emit(std::io::stderr().lock(), line),
    }
}

fn emit(mut out: impl Write, line: &str) {
    let _ = writeln!(out, "{line}");
    let _ = out.flush();
}
