//! Top-level block definitions

use super::super::location::ByteRange;
use super::line::Line;
use super::sub_document::SubDocument;
use serde::Serialize;

/// A run of consecutive non-sub-document lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Text {
    lines: Vec<Line>,
    span: ByteRange,
}

impl Text {
    pub(crate) fn new(lines: Vec<Line>, span: ByteRange) -> Self {
        Self { lines, span }
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    pub fn span(&self) -> ByteRange {
        self.span.clone()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    Text(Text),
    SubDocument(SubDocument),
}

impl Block {
    pub fn node_type(&self) -> &'static str {
        match self {
            Block::Text(_) => "Text",
            Block::SubDocument(_) => "SubDocument",
        }
    }

    pub fn span(&self) -> ByteRange {
        match self {
            Block::Text(text) => text.span(),
            Block::SubDocument(sub) => sub.span(),
        }
    }

    pub fn as_text(&self) -> Option<&Text> {
        match self {
            Block::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn as_sub_document(&self) -> Option<&SubDocument> {
        match self {
            Block::SubDocument(sub) => Some(sub),
            _ => None,
        }
    }
}
