//! Palette of per-severity prefix templates

use crate::error::{Error, Result};
use crate::severity::Severity;
use std::fmt::{self, Write as _};
use std::sync::OnceLock;

#[cfg(feature = "color")]
use std::io::Write as _;
#[cfg(feature = "color")]
use termcolor::{Ansi, Color, ColorSpec, WriteColor};

/// Number of holes every palette entry carries: context, call, line and body
pub const HOLES: usize = 4;

/// Piece of a parsed template
#[derive(Clone, Debug, PartialEq, Eq)]
enum Segment {
    Text(String),
    Hole,
}

/// Text with positional `{}` holes
///
/// `{{` and `}}` stand for literal braces. Holes carry no format spec.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Template {
    segments: Vec<Segment>,
}

impl Template {
    /// Parse a template
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnbalancedBrace`] on a lone `{` or `}`.
    pub fn parse(source: &str) -> Result<Self> {
        let mut segments = Vec::new();
        let mut text = String::new();
        let mut chars = source.char_indices().peekable();

        while let Some((offset, c)) = chars.next() {
            match (c, chars.peek().map(|&(_, next)| next)) {
                ('{', Some('{')) | ('}', Some('}')) => {
                    chars.next();
                    text.push(c);
                }
                ('{', Some('}')) => {
                    chars.next();
                    if !text.is_empty() {
                        segments.push(Segment::Text(std::mem::take(&mut text)));
                    }
                    segments.push(Segment::Hole);
                }
                ('{' | '}', _) => return Err(Error::UnbalancedBrace { offset }),
                _ => text.push(c),
            }
        }

        if !text.is_empty() {
            segments.push(Segment::Text(text));
        }

        Ok(Self { segments })
    }

    /// Number of `{}` holes
    pub fn holes(&self) -> usize {
        self.segments
            .iter()
            .filter(|segment| matches!(segment, Segment::Hole))
            .count()
    }

    /// Substitute holes in order
    ///
    /// Holes past the end of `values` are left open and come back as `{}`;
    /// surplus values are ignored. Literal braces are re-escaped so the result
    /// is itself a template.
    pub fn fill(&self, values: &[&dyn fmt::Display]) -> Self {
        let mut segments = Vec::with_capacity(self.segments.len());
        let mut values = values.iter();
        let mut text = String::new();

        for segment in &self.segments {
            match segment {
                Segment::Text(t) => text.push_str(t),
                Segment::Hole => match values.next() {
                    Some(value) => {
                        let _ = write!(text, "{value}");
                    }
                    None => {
                        if !text.is_empty() {
                            segments.push(Segment::Text(std::mem::take(&mut text)));
                        }
                        segments.push(Segment::Hole);
                    }
                },
            }
        }

        if !text.is_empty() {
            segments.push(Segment::Text(text));
        }

        Self { segments }
    }

    /// Split around the single remaining hole
    ///
    /// Returns `None` unless exactly one hole is left.
    pub(crate) fn split_once(&self) -> Option<(String, String)> {
        if self.holes() != 1 {
            return None;
        }

        let mut head = String::new();
        let mut tail = String::new();
        let mut seen = false;
        for segment in &self.segments {
            match segment {
                Segment::Text(t) if seen => tail.push_str(t),
                Segment::Text(t) => head.push_str(t),
                Segment::Hole => seen = true,
            }
        }
        Some((head, tail))
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for segment in &self.segments {
            match segment {
                Segment::Text(t) => f.write_str(&t.replace('{', "{{").replace('}', "}}"))?,
                Segment::Hole => f.write_str("{}")?,
            }
        }
        Ok(())
    }
}

/// One template per severity, indexed cyclically by ordinal
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Palette {
    entries: [Template; 4],
}

impl Palette {
    /// Build a palette from four template sources
    ///
    /// # Errors
    ///
    /// Fails if a source does not parse or does not have exactly [`HOLES`]
    /// holes.
    pub fn from_templates(sources: [&str; 4]) -> Result<Self> {
        let [error, exception, warning, info] = sources;
        Ok(Self {
            entries: [
                checked_entry(error)?,
                checked_entry(exception)?,
                checked_entry(warning)?,
                checked_entry(info)?,
            ],
        })
    }

    /// Colorless palette
    pub fn plain() -> Self {
        let template = Template {
            segments: vec![
                Segment::Hole,
                Segment::Text("> ".to_string()),
                Segment::Hole,
                Segment::Text("> in line: ".to_string()),
                Segment::Hole,
                Segment::Text(" ".to_string()),
                Segment::Hole,
            ],
        };
        Self {
            entries: std::array::from_fn(|_| template.clone()),
        }
    }

    /// Default ANSI palette
    ///
    /// Each entry paints the context token, the call token and the line label
    /// with the severity's colors and resets before the message body.
    #[cfg(feature = "color")]
    pub fn ansi() -> Self {
        Self {
            entries: [
                ansi_entry(Color::White, Color::Red),
                ansi_entry(Color::Magenta, Color::Yellow),
                ansi_entry(Color::Yellow, Color::Cyan),
                ansi_entry(Color::White, Color::Green),
            ],
        }
    }

    /// Template used for a severity
    pub fn entry(&self, severity: Severity) -> &Template {
        &self.entries[severity.index() % self.entries.len()]
    }
}

impl Default for Palette {
    #[cfg(feature = "color")]
    fn default() -> Self {
        Self::ansi()
    }

    #[cfg(not(feature = "color"))]
    fn default() -> Self {
        Self::plain()
    }
}

fn checked_entry(source: &str) -> Result<Template> {
    let template = Template::parse(source)?;
    match template.holes() {
        HOLES => Ok(template),
        found => Err(Error::Placeholders {
            expected: HOLES,
            found,
        }),
    }
}

/// Render one colored entry
///
/// `fg`/`bg` paint the context token; the call token reuses `bg` as its
/// foreground on the default background.
#[cfg(feature = "color")]
fn ansi_entry(fg: Color, bg: Color) -> Template {
    let mut segments = Vec::with_capacity(7);
    let mut out = Ansi::new(Vec::new());

    let _ = out.set_color(ColorSpec::new().set_bold(true).set_fg(Some(fg)).set_bg(Some(bg)));
    segments.push(Segment::Text(take_text(&mut out)));
    segments.push(Segment::Hole);

    let _ = out.write_all(b"> ");
    let _ = out.set_color(ColorSpec::new().set_bold(true).set_fg(Some(bg)));
    segments.push(Segment::Text(take_text(&mut out)));
    segments.push(Segment::Hole);

    let _ = out.write_all(b"> ");
    let _ = out.set_color(ColorSpec::new().set_italic(true).set_fg(Some(Color::White)));
    let _ = out.write_all(b"in line: ");
    segments.push(Segment::Text(take_text(&mut out)));
    segments.push(Segment::Hole);

    let _ = out.reset();
    let _ = out.write_all(b" ");
    segments.push(Segment::Text(take_text(&mut out)));
    segments.push(Segment::Hole);

    Template { segments }
}

#[cfg(feature = "color")]
fn take_text(out: &mut Ansi<Vec<u8>>) -> String {
    String::from_utf8_lossy(&std::mem::take(out.get_mut())).into_owned()
}

static PALETTE: OnceLock<Palette> = OnceLock::new();

/// Install the process palette
///
/// Must run before the first log call; afterwards the palette is fixed.
///
/// # Errors
///
/// Returns [`Error::PaletteInstalled`] if a palette is already in place.
pub fn install(palette: Palette) -> Result<()> {
    PALETTE.set(palette).map_err(|_| Error::PaletteInstalled)
}

/// The process palette, falling back to [`Palette::default`]
pub fn current() -> &'static Palette {
    PALETTE.get_or_init(Palette::default)
}
