//! Severity-gated, colorized console logging
//!
//! This crate provides a console logger whose disabled severities vanish at
//! compile time:
//! - Four severities, `Error`, `Exception`, `Warning` and `Info`, most severe first
//! - A build-time threshold chosen with the `max-level-*` features
//! - Loggers resolved per severity through the type system, so a disabled
//!   severity is a zero-sized no-op with no runtime level check
//! - Multi-part messages stamped with file, function and line, colored by
//!   severity and routed to stderr for `Error`/`Exception`, stdout otherwise
//!
//! # Example
//! ```
//! use proven_console_logger::{Severity, error, info};
//!
//! let last = error!("cache {} is {}", "blocks", "corrupt"; "rebuilding {} entries", 42);
//! if Severity::Error.is_enabled() {
//!     assert!(last.ends_with("rebuilding 42 entries"));
//! }
//!
//! // Compiled out under the default threshold
//! let skipped = info!("cache {} warmed", "blocks");
//! if !Severity::Info.is_enabled() {
//!     assert_eq!(&*skipped, "");
//! }
//! ```

#![warn(missing_docs, unreachable_pub)]
#![forbid(unsafe_code)]

pub mod callsite;
mod error;
pub mod level;
mod logger;
mod macros;
pub mod palette;
mod preamble;
mod severity;
pub mod stream;

#[cfg(any(feature = "log-compat", feature = "tracing-compat"))]
pub mod compat;

#[cfg(feature = "test-support")]
pub mod test_support;

pub use callsite::CallSite;
pub use error::{Error, Result};
pub use level::{Level, Logger};
pub use logger::{ActiveLogger, InertLogger, LogSession};
pub use palette::{Palette, Template};
pub use preamble::Preamble;
pub use severity::{Severity, THRESHOLD};
pub use stream::StreamKind;
