//! Styled text fragments.
//!
//! A [`Span`] carries one run of text together with its fully resolved visual
//! attributes.  Block builders copy font, size and color out of the active
//! [`StyleConfig`][crate::style::StyleConfig] when a span is created, so the
//! model never needs to look the configuration up again — a span is ready to
//! be turned into a [`docx_rs::Run`] as-is.

use docx_rs::{Run, RunFonts};

/// A slice of text together with resolved inline style attributes.
///
/// Colors are hex strings without `#` and sizes are half-points, the same
/// conventions as [`StyleConfig`][crate::style::StyleConfig].  Underline is
/// only produced by the hyperlink builders but is an ordinary span attribute.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Span {
    text: String,
    font: String,
    size: usize,
    color: String,
    bold: bool,
    italic: bool,
    underline: bool,
}

impl Span {
    /// Creates a new span with the provided text and no attributes resolved.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    /// Returns the raw text contained in this span.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the resolved font name.
    pub fn font(&self) -> &str {
        &self.font
    }

    /// Returns the resolved size in half-points.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the resolved color as a hex string without `#`.
    pub fn color(&self) -> &str {
        &self.color
    }

    /// Returns whether the span should be rendered in bold.
    pub fn is_bold(&self) -> bool {
        self.bold
    }

    /// Returns whether the span should be rendered in italic.
    pub fn is_italic(&self) -> bool {
        self.italic
    }

    /// Returns whether the span should be rendered underlined.
    pub fn is_underlined(&self) -> bool {
        self.underline
    }

    /// Sets the font and returns the updated span.
    pub fn with_font(mut self, font: impl Into<String>) -> Self {
        self.font = font.into();
        self
    }

    /// Sets the size and returns the updated span.
    pub fn with_size(mut self, size: usize) -> Self {
        self.size = size;
        self
    }

    /// Sets the color and returns the updated span.
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    /// Sets the bold flag and returns the updated span.
    pub fn with_bold(mut self, bold: bool) -> Self {
        self.bold = bold;
        self
    }

    /// Sets the italic flag and returns the updated span.
    pub fn with_italic(mut self, italic: bool) -> Self {
        self.italic = italic;
        self
    }

    /// Sets the underline flag and returns the updated span.
    pub fn with_underline(mut self, underline: bool) -> Self {
        self.underline = underline;
        self
    }

    /// Convenience shorthand that marks the span as bold.
    pub fn bold(self) -> Self {
        self.with_bold(true)
    }

    /// Convenience shorthand that marks the span as italic.
    pub fn italic(self) -> Self {
        self.with_italic(true)
    }

    /// Convenience shorthand that marks the span as underlined.
    pub fn underline(self) -> Self {
        self.with_underline(true)
    }

    /// Converts the span into a `docx-rs` run carrying all attributes.
    pub fn to_run(&self) -> Run {
        let mut run = Run::new()
            .add_text(self.text.clone())
            .fonts(RunFonts::new().ascii(&self.font))
            .size(self.size)
            .color(&self.color);
        if self.bold {
            run = run.bold();
        }
        if self.italic {
            run = run.italic();
        }
        if self.underline {
            run = run.underline("single");
        }
        run
    }
}

impl From<&Span> for Run {
    fn from(span: &Span) -> Self {
        span.to_run()
    }
}

impl From<Span> for Run {
    fn from(span: Span) -> Self {
        span.to_run()
    }
}
