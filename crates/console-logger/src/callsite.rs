//! Call-site capture

use serde::Serialize;
use std::fmt;
use std::panic::Location;

/// Placeholder used when a call-site field is unavailable
pub const UNKNOWN: &str = "<unknown>";

/// Source location a logger was constructed at
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct CallSite {
    file: &'static str,
    function: &'static str,
    line: u32,
}

impl CallSite {
    /// Call site used when nothing is known about the caller
    pub const UNKNOWN: Self = Self {
        file: UNKNOWN,
        function: UNKNOWN,
        line: 0,
    };

    /// Create a call site from explicit parts
    ///
    /// Empty names are replaced by the [`UNKNOWN`] placeholder.
    pub const fn new(file: &'static str, function: &'static str, line: u32) -> Self {
        Self {
            file: if file.is_empty() { UNKNOWN } else { file },
            function: if function.is_empty() { UNKNOWN } else { function },
            line,
        }
    }

    /// Capture the file and line of the caller
    ///
    /// Rust has no caller function name at runtime, so it is passed in; the
    /// [`callsite!`](crate::callsite!) macro fills it from the enclosing item.
    #[track_caller]
    #[inline]
    pub fn caller(function: &'static str) -> Self {
        let location = Location::caller();
        Self::new(location.file(), function, location.line())
    }

    /// Source file path
    pub const fn file(&self) -> &'static str {
        self.file
    }

    /// Enclosing function path
    pub const fn function(&self) -> &'static str {
        self.function
    }

    /// Source line
    pub const fn line(&self) -> u32 {
        self.line
    }
}

impl Default for CallSite {
    fn default() -> Self {
        Self::UNKNOWN
    }
}

impl fmt::Display for CallSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{} ({})", self.file, self.line, self.function)
    }
}

/// Trim the helper item and closure frames off a `type_name` path
#[doc(hidden)]
pub fn function_path(raw: &'static str) -> &'static str {
    let mut name = raw.strip_suffix("::__here").unwrap_or(raw);
    while let Some(outer) = name.strip_suffix("::{{closure}}") {
        name = outer;
    }
    name
}

/// Capture the current file, enclosing function and line
///
/// ```
/// let site = proven_console_logger::callsite!();
/// assert!(site.function().ends_with("main"));
/// ```
#[macro_export]
macro_rules! callsite {
    () => {{
        fn __here() {}
        fn __name_of<T>(_: T) -> &'static str {
            ::core::any::type_name::<T>()
        }
        $crate::CallSite::new(
            ::core::file!(),
            $crate::callsite::function_path(__name_of(__here)),
            ::core::line!(),
        )
    }};
}
