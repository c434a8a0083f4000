//! Test support utilities
//!
//! This module diverts sink writes into memory so tests can assert on what
//! would have reached the console. It's only available when the
//! `test-support` feature is enabled.

use crate::stream::StreamKind;
use std::cell::RefCell;

thread_local! {
    static CAPTURE: RefCell<Option<Captured>> = const { RefCell::new(None) };
}

/// Lines written while a capture was active
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Captured {
    /// Every line in write order, tagged with its stream
    pub lines: Vec<(StreamKind, String)>,
}

impl Captured {
    /// Lines written to standard output
    pub fn stdout(&self) -> Vec<&str> {
        self.on(StreamKind::Standard)
    }

    /// Lines written to standard error
    pub fn stderr(&self) -> Vec<&str> {
        self.on(StreamKind::Error)
    }

    /// Whether nothing was written at all
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Total bytes written, counting one newline per line
    pub fn bytes(&self) -> usize {
        self.lines.iter().map(|(_, line)| line.len() + 1).sum()
    }

    /// Check if any line contains a specific string
    pub fn contains(&self, text: &str) -> bool {
        self.lines.iter().any(|(_, line)| line.contains(text))
    }

    fn on(&self, kind: StreamKind) -> Vec<&str> {
        self.lines
            .iter()
            .filter(|(k, _)| *k == kind)
            .map(|(_, line)| line.as_str())
            .collect()
    }
}

/// Run `f` with this thread's sink writes captured
///
/// Captures nest: the inner capture sees only its own writes and the outer
/// capture resumes afterwards.
pub fn capture<R>(f: impl FnOnce() -> R) -> (R, Captured) {
    let outer = CAPTURE.with(|cell| cell.replace(Some(Captured::default())));
    let mut guard = Restore(outer);
    let result = f();
    let captured = CAPTURE.with(|cell| cell.replace(guard.0.take()));
    (result, captured.unwrap_or_default())
}

/// Puts the outer capture back if `f` panics
struct Restore(Option<Captured>);

impl Drop for Restore {
    fn drop(&mut self) {
        if std::thread::panicking() {
            let outer = self.0.take();
            CAPTURE.with(|cell| cell.replace(outer));
        }
    }
}

/// Record a line if a capture is active on this thread
pub(crate) fn intercept(kind: StreamKind, line: &str) -> bool {
    CAPTURE.with(|cell| match cell.borrow_mut().as_mut() {
        Some(captured) => {
            captured.lines.push((kind, line.to_string()));
            true
        }
        None => false,
    })
}
