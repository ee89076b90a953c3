//! OOXML serialization of a [`DocxDocument`] through `docx-rs`.
//!
//! The serializer is the only place that touches the wire format: it
//! registers the paragraph styles and the two numbering definitions once per
//! document, applies the fixed page geometry and header/footer chrome, walks
//! the block sequence in order, and packs the result into the OOXML ZIP
//! container in memory.

use std::io::Cursor;

use docx_rs::{
    AbstractNumbering, AlignmentType, BorderType, BreakType, Docx, FieldCharType, Footer, Header,
    Hyperlink, HyperlinkType, IndentLevel, InstrText, Level, LevelJc, LevelText, NumberFormat,
    Numbering, NumberingId, PageMargin, Paragraph, Run, RunFonts, ShdType, Shading,
    SpecialIndentType, Start, Style, StyleType, Table, TableBorder, TableBorderPosition,
    TableBorders, TableCell, TableRow, VAlignType, WidthType,
};

use crate::error::Result;
use crate::model::{Block, DocxDocument, Inline, ListKind, TableSpec};
use crate::richtext::Span;
use crate::style::StyleConfig;

/// Page margin on all four sides, in twentieths of a point (1 inch).
const PAGE_MARGIN: i32 = 1440;
/// Width available to tables between the margins, in twentieths of a point.
const USABLE_WIDTH: usize = 9360;
/// Run size for header and footer text, in half-points.
const CHROME_SIZE: usize = 18;
/// Left indent applied to list items.
const LIST_INDENT: i32 = 720;
/// Hanging indent separating the list marker from the item text.
const LIST_HANGING: i32 = 360;
/// Left indent inside body table cells.
const CELL_TEXT_INDENT: i32 = 100;

/// Numbering definition id for bulleted lists.
const BULLET_NUMBERING: usize = 1;
/// Numbering definition id for decimal-numbered lists.
const DECIMAL_NUMBERING: usize = 2;

/// Narrow serialization seam: a structured document description in, an
/// opaque byte buffer (or an error) out.
pub trait DocxSerializer {
    /// Serializes the document description into a finished `.docx` payload.
    fn serialize(&self, document: &DocxDocument) -> Result<Vec<u8>>;
}

/// The `docx-rs` backed serializer used by default.
#[derive(Clone, Copy, Debug, Default)]
pub struct OoxmlSerializer;

impl DocxSerializer for OoxmlSerializer {
    fn serialize(&self, document: &DocxDocument) -> Result<Vec<u8>> {
        log::debug!("serializing document with {} blocks", document.blocks().len());
        let docx = build_docx(document);
        let mut buffer = Cursor::new(Vec::new());
        docx.build()
            .pack(&mut buffer)
            .map_err(docx_rs::DocxError::from)?;
        Ok(buffer.into_inner())
    }
}

fn build_docx(document: &DocxDocument) -> Docx {
    let style = document.style();

    let mut docx = Docx::new()
        .page_margin(
            PageMargin::new()
                .top(PAGE_MARGIN)
                .right(PAGE_MARGIN)
                .bottom(PAGE_MARGIN)
                .left(PAGE_MARGIN),
        )
        .default_fonts(RunFonts::new().ascii(&style.fonts.body))
        .default_size(style.sizes.body);

    docx = register_styles(docx, style);
    docx = register_numberings(docx);

    if let Some(text) = document.header_text() {
        docx = docx.header(
            Header::new().add_paragraph(
                Paragraph::new()
                    .align(AlignmentType::Right)
                    .add_run(chrome_run(text, style)),
            ),
        );
    }
    docx = docx.footer(
        Footer::new().add_paragraph(
            Paragraph::new()
                .align(AlignmentType::Center)
                .add_run(chrome_run("Page ", style))
                .add_run(page_number_run(style)),
        ),
    );

    for block in document.blocks() {
        docx = match block {
            Block::Blank => docx.add_paragraph(Paragraph::new()),
            Block::Paragraph(inlines) => docx.add_paragraph(paragraph_from_inlines(inlines)),
            Block::Title(span) => {
                docx.add_paragraph(Paragraph::new().style("Title").add_run(span.to_run()))
            }
            Block::Heading1(span) => {
                docx.add_paragraph(Paragraph::new().style("Heading1").add_run(span.to_run()))
            }
            Block::Heading2(span) => {
                docx.add_paragraph(Paragraph::new().style("Heading2").add_run(span.to_run()))
            }
            Block::ListItem { span, kind } => {
                let numbering = match kind {
                    ListKind::Bullet => BULLET_NUMBERING,
                    ListKind::Decimal => DECIMAL_NUMBERING,
                };
                docx.add_paragraph(
                    Paragraph::new()
                        .numbering(NumberingId::new(numbering), IndentLevel::new(0))
                        .add_run(span.to_run()),
                )
            }
            Block::Table(spec) => docx.add_table(table_from(style, spec)),
            Block::PageBreak => docx
                .add_paragraph(Paragraph::new().add_run(Run::new().add_break(BreakType::Page))),
        };
    }

    docx
}

fn paragraph_from_inlines(inlines: &[Inline]) -> Paragraph {
    let mut paragraph = Paragraph::new();
    for inline in inlines {
        paragraph = match inline {
            Inline::Text(span) => paragraph.add_run(span.to_run()),
            Inline::Link { span, url } => paragraph.add_hyperlink(
                Hyperlink::new(url, HyperlinkType::External).add_run(span.to_run()),
            ),
        };
    }
    paragraph
}

fn chrome_run(text: &str, style: &StyleConfig) -> Run {
    Span::new(text)
        .with_font(&style.fonts.body)
        .with_size(CHROME_SIZE)
        .with_color(&style.colors.muted)
        .to_run()
}

/// A live page-number field, resolved by the consuming word processor.
fn page_number_run(style: &StyleConfig) -> Run {
    Run::new()
        .fonts(RunFonts::new().ascii(&style.fonts.body))
        .size(CHROME_SIZE)
        .color(&style.colors.muted)
        .add_field_char(FieldCharType::Begin, false)
        .add_instr_text(InstrText::Unsupported("PAGE".to_owned()))
        .add_field_char(FieldCharType::End, false)
}

fn register_styles(docx: Docx, style: &StyleConfig) -> Docx {
    docx.add_style(
        Style::new("Title", StyleType::Paragraph)
            .name("Title")
            .fonts(RunFonts::new().ascii(&style.fonts.title))
            .size(style.sizes.title)
            .color(&style.colors.primary)
            .bold(),
    )
    .add_style(
        Style::new("Heading1", StyleType::Paragraph)
            .name("Heading 1")
            .fonts(RunFonts::new().ascii(&style.fonts.heading))
            .size(style.sizes.h1)
            .color(&style.colors.secondary)
            .bold(),
    )
    .add_style(
        Style::new("Heading2", StyleType::Paragraph)
            .name("Heading 2")
            .fonts(RunFonts::new().ascii(&style.fonts.heading))
            .size(style.sizes.h2)
            .color(&style.colors.accent)
            .bold(),
    )
    .add_style(
        Style::new("BodyText", StyleType::Paragraph)
            .name("Body Text")
            .fonts(RunFonts::new().ascii(&style.fonts.body))
            .size(style.sizes.body)
            .color(&style.colors.text),
    )
}

fn register_numberings(docx: Docx) -> Docx {
    docx.add_abstract_numbering(
        AbstractNumbering::new(BULLET_NUMBERING).add_level(list_level(
            NumberFormat::new("bullet"),
            LevelText::new("•"),
        )),
    )
    .add_numbering(Numbering::new(BULLET_NUMBERING, BULLET_NUMBERING))
    .add_abstract_numbering(
        AbstractNumbering::new(DECIMAL_NUMBERING).add_level(list_level(
            NumberFormat::new("decimal"),
            LevelText::new("%1."),
        )),
    )
    .add_numbering(Numbering::new(DECIMAL_NUMBERING, DECIMAL_NUMBERING))
}

fn list_level(format: NumberFormat, text: LevelText) -> Level {
    Level::new(0, Start::new(1), format, text, LevelJc::new("left")).indent(
        Some(LIST_INDENT),
        Some(SpecialIndentType::Hanging(LIST_HANGING)),
        None,
        None,
    )
}

fn table_from(style: &StyleConfig, spec: &TableSpec) -> Table {
    let column_width = spec.column_width(USABLE_WIDTH);

    let header_cells = spec
        .headers()
        .iter()
        .map(|header| {
            TableCell::new()
                .width(column_width, WidthType::Dxa)
                .vertical_align(VAlignType::Center)
                .shading(
                    Shading::new()
                        .shd_type(ShdType::Clear)
                        .fill(&style.colors.table_header),
                )
                .add_paragraph(
                    Paragraph::new()
                        .align(AlignmentType::Center)
                        .add_run(header_span(style, header).to_run()),
                )
        })
        .collect();

    let mut rows = vec![TableRow::new(header_cells)];
    for row in spec.rows() {
        let cells = row
            .iter()
            .map(|cell| {
                TableCell::new()
                    .width(column_width, WidthType::Dxa)
                    .vertical_align(VAlignType::Center)
                    .add_paragraph(
                        Paragraph::new()
                            .indent(Some(CELL_TEXT_INDENT), None, None, None)
                            .add_run(body_span(style, cell).to_run()),
                    )
            })
            .collect();
        rows.push(TableRow::new(cells));
    }

    Table::new(rows)
        .set_grid(vec![column_width; spec.column_count()])
        .set_borders(table_borders(&style.colors.table_border))
}

fn header_span(style: &StyleConfig, text: &str) -> Span {
    Span::new(text)
        .with_font(&style.fonts.body)
        .with_size(style.sizes.body)
        .with_color(&style.colors.secondary)
        .bold()
}

fn body_span(style: &StyleConfig, text: &str) -> Span {
    Span::new(text)
        .with_font(&style.fonts.body)
        .with_size(style.sizes.body)
        .with_color(&style.colors.text)
}

fn table_borders(color: &str) -> TableBorders {
    [
        TableBorderPosition::Top,
        TableBorderPosition::Bottom,
        TableBorderPosition::Left,
        TableBorderPosition::Right,
        TableBorderPosition::InsideH,
        TableBorderPosition::InsideV,
    ]
    .into_iter()
    .fold(TableBorders::with_empty(), |borders, position| {
        borders.set(
            TableBorder::new(position)
                .border_type(BorderType::Single)
                .size(1)
                .color(color),
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blocks::BlockBuilder;

    #[test]
    fn serializes_minimal_document_to_bytes() {
        let style = StyleConfig::professional();
        let blocks = BlockBuilder::new(&style);
        let document = DocxDocument::new(style.clone())
            .with_block(blocks.title("Minimal"))
            .with_block(blocks.paragraph("One paragraph."));

        let bytes = OoxmlSerializer
            .serialize(&document)
            .expect("serialization succeeds");
        assert!(!bytes.is_empty());
    }

    #[test]
    fn empty_document_still_produces_a_container() {
        let document = DocxDocument::new(StyleConfig::professional());
        let bytes = OoxmlSerializer
            .serialize(&document)
            .expect("serialization succeeds");
        // ZIP local file header signature.
        assert_eq!(&bytes[..4], b"PK\x03\x04");
    }
}
