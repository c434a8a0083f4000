//! Type-level severities and logger selection
//!
//! Each severity has a marker type implementing [`Level`]. Its `Logger` and
//! `Stream` are picked once, at compile time, by projecting through
//! [`Gate`] with a `const fn` result as the parameter. A disabled severity
//! therefore names [`InertLogger`] directly and its call sites compile to
//! nothing.

use crate::logger::{ActiveLogger, InertLogger, LogSession};
use crate::severity::Severity;
use crate::stream::{Stderr, Stdout, Stream};

/// A severity lifted to the type level
pub trait Level: Sized + 'static {
    /// Severity this marker stands for
    const SEVERITY: Severity;

    /// Whether this severity passes the compile-time threshold
    const ENABLED: bool = Self::SEVERITY.is_enabled();

    /// Sink this severity writes to
    type Stream: Stream;

    /// Concrete logger for this severity
    type Logger: LogSession;
}

/// Type-level boolean used to select implementations
#[derive(Debug)]
pub struct Gate<const OPEN: bool>;

/// Picks the logger behind a gate
pub trait Dispatch<L> {
    /// Selected logger
    type Logger: LogSession;
}

impl<L: Level> Dispatch<L> for Gate<true> {
    type Logger = ActiveLogger<L>;
}

impl<L> Dispatch<L> for Gate<false> {
    type Logger = InertLogger;
}

/// Picks the stream behind a gate; open means urgent
pub trait Route {
    /// Selected stream
    type Stream: Stream;
}

impl Route for Gate<true> {
    type Stream = Stderr;
}

impl Route for Gate<false> {
    type Stream = Stdout;
}

/// Logger selected for a severity marker
pub type Logger<L> = <L as Level>::Logger;

macro_rules! define_level {
    ($(#[$meta:meta])* $name:ident => $severity:expr) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
        pub struct $name;

        impl Level for $name {
            const SEVERITY: Severity = $severity;
            type Stream = <Gate<{ $severity.is_urgent() }> as Route>::Stream;
            type Logger = <Gate<{ $severity.is_enabled() }> as Dispatch<Self>>::Logger;
        }
    };
}

define_level! {
    /// [`Severity::Error`]
    Error => Severity::Error
}

define_level! {
    /// [`Severity::Exception`]
    Exception => Severity::Exception
}

define_level! {
    /// [`Severity::Warning`]
    Warning => Severity::Warning
}

define_level! {
    /// [`Severity::Info`]
    Info => Severity::Info
}
