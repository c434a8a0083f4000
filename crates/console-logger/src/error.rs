//! Error types for logger configuration
//!
//! Logging calls themselves never fail; these errors only come out of
//! palette parsing, palette installation and bridge setup.

/// Result type for logger configuration
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while configuring the logger
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A severity name could not be parsed
    #[error("Unknown severity: {0}")]
    UnknownSeverity(String),

    /// A template contains a lone `{` or `}`
    #[error("Unbalanced brace at byte {offset} in template")]
    UnbalancedBrace {
        /// Byte offset of the offending brace
        offset: usize,
    },

    /// A template has the wrong number of `{}` holes
    #[error("Template has {found} placeholders, expected {expected}")]
    Placeholders {
        /// Number of holes required
        expected: usize,
        /// Number of holes found
        found: usize,
    },

    /// The process palette was already installed
    #[error("Palette already installed")]
    PaletteInstalled,

    /// Installing the `log` bridge failed
    #[cfg(feature = "log-compat")]
    #[error("Failed to set log bridge: {0}")]
    SetLogger(#[from] log::SetLoggerError),

    /// Installing the `tracing` bridge failed
    #[cfg(feature = "tracing-compat")]
    #[error("Failed to set tracing bridge: {0}")]
    SetSubscriber(#[from] tracing_subscriber::util::TryInitError),
}
