//! Bridge from tracing to the console logger

use crate::callsite::CallSite;
use crate::error::Result;
use crate::severity::Severity;
use std::fmt::Write;
use tracing::{Event, Subscriber, field::Visit};
use tracing_subscriber::{Layer, layer::Context, registry::LookupSpan};

/// A tracing layer that forwards events through the severity palette
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingBridge;

impl TracingBridge {
    /// Create a new tracing bridge
    pub const fn new() -> Self {
        Self
    }
}

impl<S> Layer<S> for TracingBridge
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_event(&self, event: &Event<'_>, ctx: Context<'_, S>) {
        let metadata = event.metadata();
        let severity = map_level(*metadata.level());

        // Skip if not enabled
        if !severity.is_enabled() {
            return;
        }

        let mut visitor = MessageVisitor::default();
        event.record(&mut visitor);

        let mut spans = Vec::new();
        if let Some(scope) = ctx.event_scope(event) {
            for span in scope.from_root() {
                spans.push(span.name());
            }
        }

        let callsite = CallSite::new(
            metadata.file().unwrap_or_default(),
            metadata.module_path().unwrap_or_default(),
            metadata.line().unwrap_or_default(),
        );

        if spans.is_empty() {
            super::forward(severity, &callsite, format_args!("{}", visitor.message));
        } else {
            super::forward(
                severity,
                &callsite,
                format_args!("{}: {}", spans.join("::"), visitor.message),
            );
        }
    }
}

/// Map tracing levels to severities
pub fn map_level(level: tracing::Level) -> Severity {
    match level {
        tracing::Level::ERROR => Severity::Error,
        tracing::Level::WARN => Severity::Warning,
        _ => Severity::Info,
    }
}

/// Visitor to extract the message from tracing fields
#[derive(Default)]
struct MessageVisitor {
    message: String,
}

impl MessageVisitor {
    fn field(&mut self, name: &str, value: impl std::fmt::Display) {
        if !self.message.is_empty() {
            self.message.push(' ');
        }
        let _ = write!(self.message, "{name}={value}");
    }
}

impl Visit for MessageVisitor {
    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        if field.name() == "message" {
            self.message.insert_str(0, value);
        } else {
            self.field(field.name(), value);
        }
    }

    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            self.message.insert_str(0, &format!("{value:?}"));
        } else {
            self.field(field.name(), format_args!("{value:?}"));
        }
    }

    fn record_i64(&mut self, field: &tracing::field::Field, value: i64) {
        self.field(field.name(), value);
    }

    fn record_u64(&mut self, field: &tracing::field::Field, value: u64) {
        self.field(field.name(), value);
    }

    fn record_bool(&mut self, field: &tracing::field::Field, value: bool) {
        self.field(field.name(), value);
    }
}

/// Initialize tracing to forward to the console logger
///
/// # Example
/// ```no_run
/// use proven_console_logger::compat::tracing_bridge::init_tracing_bridge;
///
/// init_tracing_bridge().expect("Failed to set tracing bridge");
/// tracing::warn!(attempt = 3, "retrying");
/// ```
///
/// # Errors
///
/// Fails if a global tracing subscriber is already set.
pub fn init_tracing_bridge() -> Result<()> {
    use tracing_subscriber::prelude::*;

    tracing_subscriber::registry().with(TracingBridge::new()).try_init()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_level() {
        assert_eq!(map_level(tracing::Level::ERROR), Severity::Error);
        assert_eq!(map_level(tracing::Level::WARN), Severity::Warning);
        assert_eq!(map_level(tracing::Level::DEBUG), Severity::Info);
    }
}
