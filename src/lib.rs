//! Core entry point for the docx_helper crate.

pub mod blocks;
pub mod builder;
pub mod error;
pub mod examples;
pub mod model;
pub mod render;
pub mod richtext;
pub mod style;

pub use blocks::BlockBuilder;
pub use builder::{DocxBuilder, RenderedDocx};
pub use error::{Error, Result};
pub use model::{Block, DocxDocument, Inline, ListKind, TableSpec};
pub use render::{DocxSerializer, OoxmlSerializer};
pub use richtext::Span;
pub use style::StyleConfig;
