//! Scanner
//!
//! Turns source text into a lazy sequence of classified tokens. A fresh scanner must
//! be created for every parse; it cannot be rewound.

use super::tokens::{RawToken, Token};
use super::words::classify;
use crate::papier::ast::ByteRange;
use logos::{Logos, SpannedIter};
use std::iter::Peekable;

pub struct Scanner<'s> {
    source: &'s str,
    raw: Peekable<SpannedIter<'s, RawToken>>,
}

impl<'s> Scanner<'s> {
    pub fn new(source: &'s str) -> Self {
        Self {
            source,
            raw: RawToken::lexer(source).spanned().peekable(),
        }
    }

    pub fn source_len(&self) -> usize {
        self.source.len()
    }

    /// Consume raw tokens of the same class that follow directly, which only happens
    /// when a skipped carriage return separated them. Returns the new end offset.
    fn absorb(&mut self, class: RawToken, mut end: usize, text: &mut String) -> usize {
        while let Some((next, span)) = self.raw.peek() {
            if next.unwrap_or(RawToken::Chunk) != class {
                break;
            }
            text.push_str(&self.source[span.clone()]);
            end = span.end;
            self.raw.next();
        }
        end
    }
}

impl Iterator for Scanner<'_> {
    type Item = (Token, ByteRange);

    fn next(&mut self) -> Option<Self::Item> {
        let (raw, span) = self.raw.next()?;
        // Every character belongs to one of the raw classes, so a lexing error can only
        // be a chunk logos failed to name; treat it as one.
        let class = raw.unwrap_or(RawToken::Chunk);
        let mut text = self.source[span.clone()].to_string();

        let token = match class {
            RawToken::Newline => return Some((Token::LineBreak, span)),
            RawToken::Blank => {
                let end = self.absorb(class, span.end, &mut text);
                (Token::Blank, span.start..end)
            }
            RawToken::Chunk => {
                let end = self.absorb(class, span.end, &mut text);
                let range = span.start..end;
                let word = classify(&text, range.clone());
                log::trace!("scanned {:?} word {:?} at {:?}", word.kind(), text, range);
                (Token::Word(word), range)
            }
        };
        Some(token)
    }
}
