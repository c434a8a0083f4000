//! Logging macros

/// Log one or more message parts at a severity
///
/// Parts are separated by `;` and written in order, one line each. The
/// expression evaluates to the severity's logger; dereference it for the last
/// formatted line, which is empty when the severity is compiled out.
///
/// ```
/// use proven_console_logger::log;
///
/// let last = log!(Info, "loading {}", "config"; "loaded {} entries", 3);
/// assert!(last.is_empty() || last.ends_with("loaded 3 entries"));
/// ```
#[macro_export]
macro_rules! log {
    ($level:ident, $($fmt:literal $(, $arg:expr)* $(,)?);+) => {{
        let mut logger = <$crate::Logger<$crate::level::$level> as $crate::LogSession>::open(
            $crate::callsite!(),
        );
        $( $crate::__capture!(logger; $fmt; []; $($arg),*); )+
        logger
    }};
}

/// Log at [`Severity::Error`](crate::Severity::Error)
#[macro_export]
macro_rules! error {
    ($($parts:tt)+) => {
        $crate::log!(Error, $($parts)+)
    };
}

/// Log at [`Severity::Exception`](crate::Severity::Exception)
#[macro_export]
macro_rules! exception {
    ($($parts:tt)+) => {
        $crate::log!(Exception, $($parts)+)
    };
}

/// Log at [`Severity::Warning`](crate::Severity::Warning)
#[macro_export]
macro_rules! warning {
    ($($parts:tt)+) => {
        $crate::log!(Warning, $($parts)+)
    };
}

/// Log at [`Severity::Info`](crate::Severity::Info)
#[macro_export]
macro_rules! info {
    ($($parts:tt)+) => {
        $crate::log!(Info, $($parts)+)
    };
}

/// Bind each argument in turn, then format against the bindings
///
/// Every recursion step matches its argument into a binding named `arg`;
/// hygiene keeps them distinct, and the accumulated list names all of them.
/// Temporaries in a `match` scrutinee live until the match ends, so an
/// argument that borrows from a temporary stays valid until `emit` returns.
#[doc(hidden)]
#[macro_export]
macro_rules! __capture {
    ($logger:ident; $fmt:literal; [$($bound:ident)*];) => {{
        $crate::LogSession::emit(&mut $logger, ::core::format_args!($fmt $(, $bound)*));
    }};
    ($logger:ident; $fmt:literal; [$($bound:ident)*]; $head:expr $(, $tail:expr)*) => {
        match $head {
            arg => $crate::__capture!($logger; $fmt; [$($bound)* arg]; $($tail),*),
        }
    };
}
