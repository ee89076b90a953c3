//! Document construction helpers for the docx_helper crate.

use std::fs;
use std::path::Path;

use crate::blocks::BlockBuilder;
use crate::error::Result;
use crate::model::{Block, DocxDocument, ListKind};
use crate::render::{DocxSerializer, OoxmlSerializer};
use crate::style::StyleConfig;

/// Builder for styled DOCX documents.
///
/// The builder owns one immutable [`StyleConfig`] for its whole lifetime and
/// threads it through every block convenience method, so two builders with
/// different styles can assemble documents side by side in the same process.
#[derive(Clone, Debug, Default)]
pub struct DocxBuilder {
    style: StyleConfig,
    header_text: Option<String>,
    blocks: Vec<Block>,
}

/// Finished serialization output.
pub struct RenderedDocx {
    /// The complete `.docx` payload.
    pub bytes: Vec<u8>,
}

impl DocxBuilder {
    /// Creates a new builder using the default (professional) style.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new builder using the provided style.
    pub fn with_style(style: StyleConfig) -> Self {
        Self {
            style,
            ..Self::default()
        }
    }

    /// Returns the style configuration the builder was created with.
    pub fn style(&self) -> &StyleConfig {
        &self.style
    }

    /// Returns the blocks accumulated so far, in order.
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// Sets the running header text shown on every page.
    pub fn with_header_text(mut self, header_text: impl Into<String>) -> Self {
        self.header_text = Some(header_text.into());
        self
    }

    /// Appends a prebuilt block and returns the updated builder.
    pub fn push_block(mut self, block: Block) -> Self {
        self.blocks.push(block);
        self
    }

    /// Extends the builder with multiple prebuilt blocks.
    pub fn extend_blocks<I>(mut self, blocks: I) -> Self
    where
        I: IntoIterator<Item = Block>,
    {
        self.blocks.extend(blocks);
        self
    }

    /// Appends an empty spacer paragraph.
    pub fn blank(self) -> Self {
        let block = BlockBuilder::new(&self.style).blank();
        self.push_block(block)
    }

    /// Appends a body paragraph.
    pub fn paragraph(self, text: impl Into<String>) -> Self {
        let block = BlockBuilder::new(&self.style).paragraph(text);
        self.push_block(block)
    }

    /// Appends a bold body paragraph.
    pub fn paragraph_bold(self, text: impl Into<String>) -> Self {
        let block = BlockBuilder::new(&self.style).paragraph_bold(text);
        self.push_block(block)
    }

    /// Appends a bold-label/normal-value paragraph.
    pub fn paragraph_mixed(
        self,
        bold_text: impl Into<String>,
        normal_text: impl Into<String>,
    ) -> Self {
        let block = BlockBuilder::new(&self.style).paragraph_mixed(bold_text, normal_text);
        self.push_block(block)
    }

    /// Appends an italic paragraph in the muted color.
    pub fn paragraph_italic(self, text: impl Into<String>) -> Self {
        let block = BlockBuilder::new(&self.style).paragraph_italic(text);
        self.push_block(block)
    }

    /// Appends the document title.
    pub fn title(self, text: impl Into<String>) -> Self {
        let block = BlockBuilder::new(&self.style).title(text);
        self.push_block(block)
    }

    /// Appends a level-1 heading.
    pub fn heading1(self, text: impl Into<String>) -> Self {
        let block = BlockBuilder::new(&self.style).heading1(text);
        self.push_block(block)
    }

    /// Appends a level-2 heading.
    pub fn heading2(self, text: impl Into<String>) -> Self {
        let block = BlockBuilder::new(&self.style).heading2(text);
        self.push_block(block)
    }

    /// Appends a bulleted list item.
    pub fn bullet(self, text: impl Into<String>) -> Self {
        let block = BlockBuilder::new(&self.style).bullet(text);
        self.push_block(block)
    }

    /// Appends a decimal-numbered list item.
    pub fn numbered(self, text: impl Into<String>) -> Self {
        let block = BlockBuilder::new(&self.style).numbered(text);
        self.push_block(block)
    }

    /// Appends a list item referencing the given numbering definition.
    pub fn list_item(self, text: impl Into<String>, kind: ListKind) -> Self {
        let block = BlockBuilder::new(&self.style).list_item(text, kind);
        self.push_block(block)
    }

    /// Appends a full-paragraph external hyperlink.
    pub fn hyperlink(self, label: impl Into<String>, url: impl Into<String>) -> Self {
        let block = BlockBuilder::new(&self.style).hyperlink(label, url);
        self.push_block(block)
    }

    /// Appends a paragraph with an embedded external hyperlink.
    pub fn hyperlink_inline(
        self,
        before: impl Into<String>,
        link_text: impl Into<String>,
        url: impl Into<String>,
        after: impl Into<String>,
    ) -> Self {
        let block = BlockBuilder::new(&self.style).hyperlink_inline(before, link_text, url, after);
        self.push_block(block)
    }

    /// Appends a table, failing on ragged rows or an empty header list.
    pub fn table(
        self,
        headers: impl Into<Vec<String>>,
        rows: impl Into<Vec<Vec<String>>>,
    ) -> Result<Self> {
        let block = BlockBuilder::new(&self.style).table(headers, rows)?;
        Ok(self.push_block(block))
    }

    /// Appends an explicit page break.
    pub fn page_break(self) -> Self {
        let block = BlockBuilder::new(&self.style).page_break();
        self.push_block(block)
    }

    /// Consumes the builder and returns the document description.
    pub fn document(self) -> DocxDocument {
        DocxDocument::new(self.style)
            .with_header_text(self.header_text)
            .with_blocks(self.blocks)
    }

    /// Serializes the accumulated document with the default OOXML serializer.
    pub fn render(&self) -> Result<RenderedDocx> {
        self.render_with(&OoxmlSerializer)
    }

    /// Serializes the accumulated document with the provided serializer.
    pub fn render_with(&self, serializer: &dyn DocxSerializer) -> Result<RenderedDocx> {
        let document = self.clone().document();
        let bytes = serializer.serialize(&document)?;
        Ok(RenderedDocx { bytes })
    }

    /// Renders the document and writes it to `path`.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let rendered = self.render()?;
        fs::write(path, &rendered.bytes)?;
        log::info!(
            "wrote {} ({} bytes)",
            path.display(),
            rendered.bytes.len()
        );
        Ok(())
    }
}
