//! Line Assembly
//!
//! Groups scanner tokens into [`Line`]s. Blank runs separate words and are dropped; the
//! line break ends the line and is dropped too, though the line's span still covers it.
//! A final line without a line break is emitted as well.

use super::tokens::Token;
use crate::papier::ast::{ByteRange, Line};

pub struct LineAssembler<I> {
    tokens: I,
    line_start: usize,
    source_len: usize,
}

impl<I> LineAssembler<I>
where
    I: Iterator<Item = (Token, ByteRange)>,
{
    pub fn new(tokens: I, source_len: usize) -> Self {
        Self {
            tokens,
            line_start: 0,
            source_len,
        }
    }
}

impl<I> Iterator for LineAssembler<I>
where
    I: Iterator<Item = (Token, ByteRange)>,
{
    type Item = Line;

    fn next(&mut self) -> Option<Line> {
        let mut words = Vec::new();

        for (token, span) in self.tokens.by_ref() {
            match token {
                Token::Word(word) => words.push(word),
                Token::Blank => {}
                Token::LineBreak => {
                    let line = Line::new(words, self.line_start..span.end);
                    self.line_start = span.end;
                    return Some(line);
                }
            }
        }

        if self.line_start < self.source_len {
            let line = Line::new(words, self.line_start..self.source_len);
            self.line_start = self.source_len;
            return Some(line);
        }
        None
    }
}
