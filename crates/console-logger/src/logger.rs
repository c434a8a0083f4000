//! Active and inert loggers

use crate::callsite::CallSite;
use crate::level::Level;
use crate::palette;
use crate::preamble::Preamble;
use crate::stream::Stream;
use std::fmt;
use std::marker::PhantomData;
use std::ops::Deref;

/// Call surface shared by active and inert loggers
///
/// Dereferencing a session yields the last formatted message.
pub trait LogSession: Deref<Target = str> + Sized {
    /// Create a session with the call site fixed and no message yet
    fn open(callsite: CallSite) -> Self;

    /// Format and write one message part
    fn emit(&mut self, args: fmt::Arguments<'_>) -> &mut Self;

    /// Last formatted message, empty before the first part
    fn message(&self) -> &str;

    /// Create a session and write its first part
    #[inline(always)]
    fn new(callsite: CallSite, args: fmt::Arguments<'_>) -> Self {
        let mut session = Self::open(callsite);
        session.emit(args);
        session
    }

    /// Write another part, passing the session along
    #[inline(always)]
    #[must_use]
    fn then(mut self, args: fmt::Arguments<'_>) -> Self {
        self.emit(args);
        self
    }
}

/// Logger for a severity that passes the threshold
///
/// Owns its call site, preamble and message buffer. Each part re-renders the
/// buffer and writes it as one line to the severity's stream.
pub struct ActiveLogger<L> {
    callsite: CallSite,
    preamble: Preamble,
    buf: String,
    _level: PhantomData<L>,
}

impl<L: Level> ActiveLogger<L> {
    /// Call site captured at construction
    pub const fn callsite(&self) -> &CallSite {
        &self.callsite
    }

    /// Preamble every part is rendered against
    pub const fn preamble(&self) -> &Preamble {
        &self.preamble
    }
}

impl<L: Level> LogSession for ActiveLogger<L> {
    fn open(callsite: CallSite) -> Self {
        Self {
            preamble: Preamble::build(L::SEVERITY, &callsite, palette::current()),
            callsite,
            buf: String::new(),
            _level: PhantomData,
        }
    }

    fn emit(&mut self, args: fmt::Arguments<'_>) -> &mut Self {
        self.preamble.render_into(&mut self.buf, args);
        L::Stream::write_line(&self.buf);
        self
    }

    #[inline]
    fn message(&self) -> &str {
        &self.buf
    }
}

impl<L: Level> Deref for ActiveLogger<L> {
    type Target = str;

    fn deref(&self) -> &str {
        self.message()
    }
}

impl<L: Level> fmt::Debug for ActiveLogger<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ActiveLogger")
            .field("severity", &L::SEVERITY)
            .field("callsite", &self.callsite)
            .field("buf", &self.buf)
            .finish()
    }
}

/// Logger for a severity below the threshold
///
/// Zero-sized; never formats, writes or allocates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InertLogger;

impl LogSession for InertLogger {
    #[inline(always)]
    fn open(_callsite: CallSite) -> Self {
        Self
    }

    #[inline(always)]
    fn emit(&mut self, _args: fmt::Arguments<'_>) -> &mut Self {
        self
    }

    #[inline(always)]
    fn message(&self) -> &str {
        ""
    }
}

impl Deref for InertLogger {
    type Target = str;

    #[inline(always)]
    fn deref(&self) -> &str {
        ""
    }
}
