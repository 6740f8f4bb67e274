//! Detokenizer for the papier format
//!
//! Converts tokens and trees back into papier text. The canonical form separates words
//! with single spaces and ends every line with `\n`; source text already in that form
//! comes back byte for byte.
//!
//! Two kinds of text line only stay text because of their blanks, so the canonical form
//! keeps a blank for them: a line opening with a bare `*` word puts a tab after it (a
//! space would make an opener), and a line holding only `}` keeps one leading space.

use crate::papier::ast::{Block, Document, Line, SubDocument, Word};
use crate::papier::lexing::Token;

/// Trait for converting a node to its canonical papier text
pub trait ToPapierString {
    fn to_papier_string(&self) -> String;
}

impl ToPapierString for Token {
    fn to_papier_string(&self) -> String {
        match self {
            Token::Word(word) => word.literal(),
            Token::Blank => " ".to_string(),
            Token::LineBreak => "\n".to_string(),
        }
    }
}

impl ToPapierString for Line {
    fn to_papier_string(&self) -> String {
        let mut text = match self.words() {
            [only] if only.is_plain_text("}") => " }".to_string(),
            [first, rest @ ..] if first.is_plain_text("*") && !rest.is_empty() => {
                format!("*\t{}", join_words(rest))
            }
            words => join_words(words),
        };
        text.push('\n');
        text
    }
}

impl ToPapierString for SubDocument {
    fn to_papier_string(&self) -> String {
        let mut text = String::from("* ");
        if let Some(title) = self.title() {
            text.push_str(&join_words(title));
            text.push(' ');
        }
        text.push_str(&self.delimiter().open());
        text.push('\n');
        for content in self.contents() {
            text.push_str(content);
            text.push('\n');
        }
        text.push_str(&self.delimiter().close());
        text.push('\n');
        text
    }
}

impl ToPapierString for Block {
    fn to_papier_string(&self) -> String {
        match self {
            Block::Text(text) => text.lines().iter().map(Line::to_papier_string).collect(),
            Block::SubDocument(sub) => sub.to_papier_string(),
        }
    }
}

/// Detokenize a stream of tokens into a string
pub fn detokenize(tokens: &[Token]) -> String {
    tokens.iter().map(ToPapierString::to_papier_string).collect()
}

/// Canonical papier text for a whole document.
pub fn to_papier(doc: &Document) -> String {
    doc.blocks().iter().map(Block::to_papier_string).collect()
}

/// The source text behind each block, concatenated in order. Block spans tile the
/// input, so this reproduces the parsed source exactly.
pub fn source_slices(doc: &Document, source: &str) -> String {
    doc.blocks()
        .iter()
        .map(|block| &source[block.span()])
        .collect()
}

fn join_words(words: &[Word]) -> String {
    words.iter().map(Word::literal).collect::<Vec<_>>().join(" ")
}
