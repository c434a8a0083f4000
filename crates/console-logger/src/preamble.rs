//! Colorized, call-site-stamped message prefix

use crate::callsite::CallSite;
use crate::palette::Palette;
use crate::severity::Severity;
use std::fmt::{self, Write as _};

/// Palette entry with the call site filled in and the body hole left open
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Preamble {
    head: String,
    tail: String,
}

impl Preamble {
    /// Build the preamble for a severity and call site
    pub fn build(severity: Severity, callsite: &CallSite, palette: &Palette) -> Self {
        let filled = palette.entry(severity).fill(&[
            &callsite.file(),
            &callsite.function(),
            &callsite.line(),
        ]);

        // Palettes are checked for exactly four holes on construction
        let (head, tail) = filled.split_once().unwrap_or_default();
        Self { head, tail }
    }

    /// Text before the message body
    pub fn head(&self) -> &str {
        &self.head
    }

    /// Text after the message body
    pub fn tail(&self) -> &str {
        &self.tail
    }

    /// Render a message body into `buf`, replacing its contents
    pub fn render_into(&self, buf: &mut String, body: fmt::Arguments<'_>) {
        buf.clear();
        buf.push_str(&self.head);
        let _ = buf.write_fmt(body);
        buf.push_str(&self.tail);
    }

    /// Render a message body into a new string
    pub fn render(&self, body: fmt::Arguments<'_>) -> String {
        let mut buf = String::new();
        self.render_into(&mut buf, body);
        buf
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_plain_preamble() {
        let site = CallSite::new("src/main.rs", "demo::main", 12);
        let preamble = Preamble::build(Severity::Info, &site, &Palette::plain());
        assert_eq!(preamble.head(), "src/main.rs> demo::main> in line: 12 ");
        assert_eq!(preamble.tail(), "");
        assert_eq!(
            preamble.render(format_args!("{}-{}", "x", 1)),
            "src/main.rs> demo::main> in line: 12 x-1"
        );
    }

    #[test]
    fn test_braces_in_call_site_stay_literal() {
        let site = CallSite::new("{weird}.rs", "f", 1);
        let preamble = Preamble::build(Severity::Error, &site, &Palette::plain());
        assert_eq!(preamble.render(format_args!("ok")), "{weird}.rs> f> in line: 1 ok");
    }

    #[cfg(feature = "color")]
    #[test]
    fn test_ansi_preamble_contains_call_site() {
        let site = CallSite::new("lib.rs", "run", 99);
        let preamble = Preamble::build(Severity::Exception, &site, &Palette::ansi());
        let line = preamble.render(format_args!("body"));
        let stripped = String::from_utf8(strip_ansi_escapes::strip(&line)).unwrap();
        assert_eq!(stripped, "lib.rs> run> in line: 99 body");
        assert!(line.ends_with("body"));
    }

    #[test]
    fn test_render_into_overwrites() {
        let preamble = Preamble::build(Severity::Warning, &CallSite::UNKNOWN, &Palette::plain());
        let mut buf = String::from("stale");
        preamble.render_into(&mut buf, format_args!("fresh"));
        assert_eq!(buf, "<unknown>> <unknown>> in line: 0 fresh");
    }
}
