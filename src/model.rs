//! Data structures describing the logical content of a DOCX document.
//!
//! The types in this module form the document description handed to a
//! [`DocxSerializer`][crate::render::DocxSerializer].  Blocks carry fully
//! resolved spans (see [`crate::richtext`]) rather than references into the
//! style configuration, so a description can outlive the builder that
//! produced it.

use crate::error::{Error, Result};
use crate::richtext::Span;
use crate::style::StyleConfig;

/// Inline content of a paragraph: either a plain span or an external link.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Inline {
    /// A plain styled text run.
    Text(Span),
    /// A clickable external reference wrapping one styled run.
    Link {
        /// The visible, styled link text.
        span: Span,
        /// The target URL.
        url: String,
    },
}

/// Selects which of the two per-document numbering definitions a list item
/// belongs to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ListKind {
    /// The bulleted definition (`•`).
    #[default]
    Bullet,
    /// The decimal definition (`1.`, `2.`, ...).
    Decimal,
}

/// Grid content for a table block.
///
/// Every body row must have exactly as many cells as the header row; the
/// shape is checked once at construction.  Column widths are derived, not
/// stored: each column gets `usable_width / column_count` twentieths of a
/// point, with the integer remainder dropped.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TableSpec {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl TableSpec {
    /// Creates a table description after validating its shape.
    pub fn new(
        headers: impl Into<Vec<String>>,
        rows: impl Into<Vec<Vec<String>>>,
    ) -> Result<Self> {
        let headers = headers.into();
        let rows = rows.into();

        if headers.is_empty() {
            return Err(Error::EmptyTableHeader);
        }
        for (index, row) in rows.iter().enumerate() {
            if row.len() != headers.len() {
                return Err(Error::RaggedTableRow {
                    row: index,
                    expected: headers.len(),
                    found: row.len(),
                });
            }
        }

        Ok(Self { headers, rows })
    }

    /// Returns the header row.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Returns the body rows.
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Returns the number of columns in the grid.
    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    /// Returns the width of every column for the given usable page width,
    /// in twentieths of a point.  The remainder of the division is dropped.
    pub fn column_width(&self, usable_width: usize) -> usize {
        usable_width / self.headers.len()
    }
}

/// Individual content blocks that make up the document body, one case per
/// block kind.
///
/// All paragraph-shaped content (plain, bold, mixed, italic, hyperlinks)
/// shares the [`Block::Paragraph`] case; the builders in [`crate::blocks`]
/// decide which spans go into it.
#[derive(Clone, Debug, PartialEq)]
pub enum Block {
    /// An empty paragraph used as vertical spacing.
    Blank,
    /// A paragraph of inline runs and links.
    Paragraph(Vec<Inline>),
    /// The document title.
    Title(Span),
    /// A level-1 heading.
    Heading1(Span),
    /// A level-2 heading.
    Heading2(Span),
    /// A bulleted or numbered list member at nesting level zero.
    ListItem {
        /// The styled item text.
        span: Span,
        /// Which numbering definition the item references.
        kind: ListKind,
    },
    /// A grid with a shaded header row and bordered body cells.
    Table(TableSpec),
    /// Forces the next content to start on a new page.
    PageBreak,
}

/// The complete description handed to the serializer: style, optional page
/// chrome text, and the body blocks in order.
///
/// Page geometry, the footer page-number field and the two numbering
/// definitions are fixed properties of the output format and live in the
/// renderer, not here.
#[derive(Clone, Debug, Default)]
pub struct DocxDocument {
    style: StyleConfig,
    header_text: Option<String>,
    blocks: Vec<Block>,
}

impl DocxDocument {
    /// Creates an empty document using the provided style.
    pub fn new(style: StyleConfig) -> Self {
        Self {
            style,
            ..Self::default()
        }
    }

    /// Returns the style configuration the document was built with.
    pub fn style(&self) -> &StyleConfig {
        &self.style
    }

    /// Returns the running header text, if any.
    pub fn header_text(&self) -> Option<&str> {
        self.header_text.as_deref()
    }

    /// Returns the body blocks in document order.
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// Sets the running header text and returns the updated document.
    pub fn with_header_text(mut self, header_text: impl Into<Option<String>>) -> Self {
        self.header_text = header_text.into();
        self
    }

    /// Appends a block and returns the updated document.
    pub fn with_block(mut self, block: Block) -> Self {
        self.blocks.push(block);
        self
    }

    /// Extends the document with multiple blocks and returns the updated
    /// instance.
    pub fn with_blocks<I>(mut self, blocks: I) -> Self
    where
        I: IntoIterator<Item = Block>,
    {
        self.blocks.extend(blocks);
        self
    }
}
