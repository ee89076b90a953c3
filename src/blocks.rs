//! Block builders: pure functions mapping text to content blocks.
//!
//! A [`BlockBuilder`] borrows the active [`StyleConfig`] and composes its
//! fields directly into the spans of every block it returns.  Visual
//! attributes are derived at construction time, never stored independently,
//! so one configuration change propagates to every block type uniformly.

use crate::error::Result;
use crate::model::{Block, Inline, ListKind, TableSpec};
use crate::richtext::Span;
use crate::style::StyleConfig;

/// Factory for [`Block`] values styled by a borrowed [`StyleConfig`].
#[derive(Clone, Copy, Debug)]
pub struct BlockBuilder<'a> {
    style: &'a StyleConfig,
}

impl<'a> BlockBuilder<'a> {
    /// Creates a builder reading from the given style configuration.
    pub fn new(style: &'a StyleConfig) -> Self {
        Self { style }
    }

    fn body_span(&self, text: impl Into<String>) -> Span {
        Span::new(text)
            .with_font(&self.style.fonts.body)
            .with_size(self.style.sizes.body)
            .with_color(&self.style.colors.text)
    }

    fn link_span(&self, text: impl Into<String>) -> Span {
        Span::new(text)
            .with_font(&self.style.fonts.body)
            .with_size(self.style.sizes.body)
            .with_color(&self.style.colors.link)
            .underline()
    }

    /// An empty paragraph used as vertical spacing.
    pub fn blank(&self) -> Block {
        Block::Blank
    }

    /// A single-run body paragraph.
    pub fn paragraph(&self, text: impl Into<String>) -> Block {
        Block::Paragraph(vec![Inline::Text(self.body_span(text))])
    }

    /// A single-run body paragraph in bold.
    pub fn paragraph_bold(&self, text: impl Into<String>) -> Block {
        Block::Paragraph(vec![Inline::Text(self.body_span(text).bold())])
    }

    /// A two-run paragraph: a bold label followed by normal text.
    pub fn paragraph_mixed(
        &self,
        bold_text: impl Into<String>,
        normal_text: impl Into<String>,
    ) -> Block {
        Block::Paragraph(vec![
            Inline::Text(self.body_span(bold_text).bold()),
            Inline::Text(self.body_span(normal_text)),
        ])
    }

    /// A single-run italic paragraph in the muted color.
    pub fn paragraph_italic(&self, text: impl Into<String>) -> Block {
        Block::Paragraph(vec![Inline::Text(
            Span::new(text)
                .with_font(&self.style.fonts.body)
                .with_size(self.style.sizes.body)
                .with_color(&self.style.colors.muted)
                .italic(),
        )])
    }

    /// The document title.
    pub fn title(&self, text: impl Into<String>) -> Block {
        Block::Title(
            Span::new(text)
                .with_font(&self.style.fonts.title)
                .with_size(self.style.sizes.title)
                .with_color(&self.style.colors.primary)
                .bold(),
        )
    }

    /// A level-1 heading.
    pub fn heading1(&self, text: impl Into<String>) -> Block {
        Block::Heading1(
            Span::new(text)
                .with_font(&self.style.fonts.heading)
                .with_size(self.style.sizes.h1)
                .with_color(&self.style.colors.secondary)
                .bold(),
        )
    }

    /// A level-2 heading.
    pub fn heading2(&self, text: impl Into<String>) -> Block {
        Block::Heading2(
            Span::new(text)
                .with_font(&self.style.fonts.heading)
                .with_size(self.style.sizes.h2)
                .with_color(&self.style.colors.accent)
                .bold(),
        )
    }

    /// A list member referencing the given numbering definition.
    pub fn list_item(&self, text: impl Into<String>, kind: ListKind) -> Block {
        Block::ListItem {
            span: self.body_span(text),
            kind,
        }
    }

    /// A bulleted list member.
    pub fn bullet(&self, text: impl Into<String>) -> Block {
        self.list_item(text, ListKind::Bullet)
    }

    /// A decimal-numbered list member.
    pub fn numbered(&self, text: impl Into<String>) -> Block {
        self.list_item(text, ListKind::Decimal)
    }

    /// A paragraph whose entire run is a clickable external reference,
    /// underlined in the link color.
    pub fn hyperlink(&self, label: impl Into<String>, url: impl Into<String>) -> Block {
        Block::Paragraph(vec![Inline::Link {
            span: self.link_span(label),
            url: url.into(),
        }])
    }

    /// A paragraph mixing plain runs with one embedded external reference.
    ///
    /// The trailing plain run is emitted only when `after` is non-empty.
    pub fn hyperlink_inline(
        &self,
        before: impl Into<String>,
        link_text: impl Into<String>,
        url: impl Into<String>,
        after: impl Into<String>,
    ) -> Block {
        let mut inlines = vec![
            Inline::Text(self.body_span(before)),
            Inline::Link {
                span: self.link_span(link_text),
                url: url.into(),
            },
        ];
        let after = after.into();
        if !after.is_empty() {
            inlines.push(Inline::Text(self.body_span(after)));
        }
        Block::Paragraph(inlines)
    }

    /// A grid with a shaded, bold, center-aligned header row and bordered
    /// body cells.  Fails when any row length differs from the header row or
    /// when no header columns are given.
    pub fn table(
        &self,
        headers: impl Into<Vec<String>>,
        rows: impl Into<Vec<Vec<String>>>,
    ) -> Result<Block> {
        Ok(Block::Table(TableSpec::new(headers, rows)?))
    }

    /// Forces the next content to start on a new page.
    pub fn page_break(&self) -> Block {
        Block::PageBreak
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn first_span(block: &Block) -> &Span {
        match block {
            Block::Paragraph(inlines) => match &inlines[0] {
                Inline::Text(span) => span,
                Inline::Link { span, .. } => span,
            },
            Block::Title(span) | Block::Heading1(span) | Block::Heading2(span) => span,
            Block::ListItem { span, .. } => span,
            other => panic!("block {other:?} carries no span"),
        }
    }

    #[test]
    fn paragraph_reads_body_font_size_and_text_color() {
        let style = StyleConfig::professional();
        let block = BlockBuilder::new(&style).paragraph("plain");
        let span = first_span(&block);
        assert_eq!(span.font(), style.fonts.body);
        assert_eq!(span.size(), style.sizes.body);
        assert_eq!(span.color(), style.colors.text);
        assert!(!span.is_bold());
        assert!(!span.is_italic());
    }

    #[test]
    fn italic_paragraph_uses_muted_instead_of_text() {
        let style = StyleConfig::professional();
        let block = BlockBuilder::new(&style).paragraph_italic("tagline");
        let span = first_span(&block);
        assert_eq!(span.color(), style.colors.muted);
        assert!(span.is_italic());
        assert!(!span.is_bold());
    }

    #[test]
    fn mixed_paragraph_bolds_only_the_first_run() {
        let style = StyleConfig::professional();
        let block = BlockBuilder::new(&style).paragraph_mixed("Status: ", "on track");
        let Block::Paragraph(inlines) = &block else {
            panic!("expected a paragraph");
        };
        assert_eq!(inlines.len(), 2);
        let (Inline::Text(label), Inline::Text(value)) = (&inlines[0], &inlines[1]) else {
            panic!("expected two plain runs");
        };
        assert_eq!(label.text(), "Status: ");
        assert!(label.is_bold());
        assert_eq!(value.text(), "on track");
        assert!(!value.is_bold());
    }

    #[test]
    fn heading_tiers_use_their_own_color_and_size() {
        let style = StyleConfig::fun();
        let builder = BlockBuilder::new(&style);

        let title = first_span(&builder.title("T")).clone();
        assert_eq!(title.color(), style.colors.primary);
        assert_eq!(title.size(), style.sizes.title);
        assert_eq!(title.font(), style.fonts.title);
        assert!(title.is_bold());

        let h1 = first_span(&builder.heading1("H1")).clone();
        assert_eq!(h1.color(), style.colors.secondary);
        assert_eq!(h1.size(), style.sizes.h1);

        let h2 = first_span(&builder.heading2("H2")).clone();
        assert_eq!(h2.color(), style.colors.accent);
        assert_eq!(h2.size(), style.sizes.h2);
        assert_eq!(h2.font(), style.fonts.heading);
    }

    #[test]
    fn changing_one_color_leaves_unrelated_blocks_untouched() {
        let base = StyleConfig::professional();
        let mut changed = base.clone();
        changed.colors.accent = "ff0000".to_owned();

        let before = BlockBuilder::new(&base);
        let after = BlockBuilder::new(&changed);

        // heading2 reads accent; heading1 and body paragraphs must not move.
        assert_ne!(
            first_span(&before.heading2("x")).color(),
            first_span(&after.heading2("x")).color()
        );
        assert_eq!(
            first_span(&before.heading1("x")),
            first_span(&after.heading1("x"))
        );
        assert_eq!(
            first_span(&before.paragraph("x")),
            first_span(&after.paragraph("x"))
        );
    }

    #[test]
    fn bullet_and_numbered_reference_different_definitions() {
        let style = StyleConfig::professional();
        let builder = BlockBuilder::new(&style);
        let Block::ListItem { kind: bullet, .. } = builder.bullet("a") else {
            panic!("expected a list item");
        };
        let Block::ListItem { kind: numbered, .. } = builder.numbered("b") else {
            panic!("expected a list item");
        };
        assert_eq!(bullet, ListKind::Bullet);
        assert_eq!(numbered, ListKind::Decimal);
    }

    #[test]
    fn hyperlink_run_is_underlined_in_link_color() {
        let style = StyleConfig::casual();
        let block = BlockBuilder::new(&style).hyperlink("Docs", "https://example.com/docs");
        let Block::Paragraph(inlines) = &block else {
            panic!("expected a paragraph");
        };
        assert_eq!(inlines.len(), 1);
        let Inline::Link { span, url } = &inlines[0] else {
            panic!("expected a link run");
        };
        assert_eq!(url, "https://example.com/docs");
        assert_eq!(span.color(), style.colors.link);
        assert!(span.is_underlined());
    }

    #[test]
    fn inline_hyperlink_omits_empty_trailing_run() {
        let style = StyleConfig::professional();
        let builder = BlockBuilder::new(&style);

        let Block::Paragraph(without_after) =
            builder.hyperlink_inline("See ", "the guide", "https://example.com", "")
        else {
            panic!("expected a paragraph");
        };
        assert_eq!(without_after.len(), 2);
        assert!(matches!(without_after[1], Inline::Link { .. }));

        let Block::Paragraph(with_after) =
            builder.hyperlink_inline("See ", "the guide", "https://example.com", " for details.")
        else {
            panic!("expected a paragraph");
        };
        assert_eq!(with_after.len(), 3);
        let Inline::Text(trailing) = &with_after[2] else {
            panic!("expected a trailing plain run");
        };
        assert_eq!(trailing.text(), " for details.");
        assert!(!trailing.is_underlined());
    }

    #[test]
    fn table_builder_propagates_shape_errors() {
        let style = StyleConfig::professional();
        let builder = BlockBuilder::new(&style);
        let result = builder.table(
            vec!["A".to_owned(), "B".to_owned()],
            vec![vec!["only one".to_owned()]],
        );
        assert!(result.is_err());
    }
}
