//! Line element definition

use super::super::location::ByteRange;
use super::word::Word;
use serde::Serialize;

/// The words of one source line. The terminating line break is not stored, but it is
/// covered by the span.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Line {
    words: Vec<Word>,
    span: ByteRange,
}

impl Line {
    pub(crate) fn new(words: Vec<Word>, span: ByteRange) -> Self {
        Self { words, span }
    }

    pub fn words(&self) -> &[Word] {
        &self.words
    }

    pub fn span(&self) -> ByteRange {
        self.span.clone()
    }

    pub fn is_blank(&self) -> bool {
        self.words.is_empty()
    }

    pub(crate) fn into_words(self) -> Vec<Word> {
        self.words
    }
}
