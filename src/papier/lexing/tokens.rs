//! Token definitions for the papier format
//!
//! [`RawToken`] is the logos layer: it only knows line breaks, blank runs and
//! non-blank chunks. Carriage returns are skipped here and never reach later stages.
//! [`Token`] is what the scanner hands out after classifying chunks into words.

use crate::papier::ast::Word;
use logos::Logos;
use serde::Serialize;
use std::fmt;

#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
#[logos(skip r"\r")]
pub enum RawToken {
    #[token("\n")]
    Newline,

    #[regex(r"[ \t]+")]
    Blank,

    #[regex(r"[^ \t\r\n]+")]
    Chunk,
}

/// A classified token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "token", rename_all = "snake_case")]
pub enum Token {
    Word(Word),
    /// A run of spaces and tabs.
    Blank,
    LineBreak,
}

impl Token {
    pub fn as_word(&self) -> Option<&Word> {
        match self {
            Token::Word(word) => Some(word),
            _ => None,
        }
    }

    pub fn is_line_break(&self) -> bool {
        matches!(self, Token::LineBreak)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Word(word) => match word.punctuation() {
                Some(mark) => write!(f, "<{}:{}|{}>", word.kind(), word.payload(), mark),
                None => write!(f, "<{}:{}>", word.kind(), word.payload()),
            },
            Token::Blank => f.write_str("<blank>"),
            Token::LineBreak => f.write_str("<nl>"),
        }
    }
}
