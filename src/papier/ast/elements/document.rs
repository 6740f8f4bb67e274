//! Document element definition

use super::block::{Block, Text};
use super::sub_document::SubDocument;
use serde::Serialize;

/// The root of a papier tree: top-level blocks in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Document {
    blocks: Vec<Block>,
}

impl Document {
    pub(crate) fn with_blocks(blocks: Vec<Block>) -> Self {
        Self { blocks }
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn iter_text(&self) -> impl Iterator<Item = &Text> {
        self.blocks.iter().filter_map(Block::as_text)
    }

    pub fn iter_sub_documents(&self) -> impl Iterator<Item = &SubDocument> {
        self.blocks.iter().filter_map(Block::as_sub_document)
    }

    /// Returns (text blocks, sub-documents).
    pub fn count_by_type(&self) -> (usize, usize) {
        (self.iter_text().count(), self.iter_sub_documents().count())
    }
}
