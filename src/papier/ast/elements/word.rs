//! Word element definition
//!
//! A word is the maximal run of non-blank characters on a line. Prefixed words keep the
//! prefix out of their payload; [`Word::literal`] puts it back.

use super::super::location::ByteRange;
use serde::Serialize;
use std::fmt;

/// Classification of a word by its prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum WordKind {
    /// `!` + 8-4-4-4-12 lowercase hex
    Uuid,
    /// `!!` + `[a-zA-Z][-_a-zA-Z0-9]*`
    Alias,
    /// `!?` + any non-blank run
    Ref,
    /// `#` + `[a-z0-9][-_a-z0-9]*`, any case
    Tag,
    /// `@` + `[a-z][-_a-z0-9]*`
    Fmt,
    Plain,
}

impl WordKind {
    /// The literal prefix that introduces this kind of word.
    pub fn prefix(self) -> &'static str {
        match self {
            WordKind::Uuid => "!",
            WordKind::Alias => "!!",
            WordKind::Ref => "!?",
            WordKind::Tag => "#",
            WordKind::Fmt => "@",
            WordKind::Plain => "",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            WordKind::Uuid => "uuid",
            WordKind::Alias => "alias",
            WordKind::Ref => "ref",
            WordKind::Tag => "tag",
            WordKind::Fmt => "fmt",
            WordKind::Plain => "plain",
        }
    }
}

impl fmt::Display for WordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A classified word with its payload and optional trailing punctuation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Word {
    kind: WordKind,
    payload: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    punctuation: Option<char>,
    span: ByteRange,
}

impl Word {
    pub(crate) fn new(
        kind: WordKind,
        payload: impl Into<String>,
        punctuation: Option<char>,
        span: ByteRange,
    ) -> Self {
        Self {
            kind,
            payload: payload.into(),
            punctuation,
            span,
        }
    }

    pub fn kind(&self) -> WordKind {
        self.kind
    }

    /// The matched payload, without prefix or trailing punctuation.
    pub fn payload(&self) -> &str {
        &self.payload
    }

    pub fn punctuation(&self) -> Option<char> {
        self.punctuation
    }

    pub fn span(&self) -> ByteRange {
        self.span.clone()
    }

    /// The word as written, minus any carriage returns.
    pub fn literal(&self) -> String {
        let mut literal = String::with_capacity(self.payload.len() + 3);
        literal.push_str(self.kind.prefix());
        literal.push_str(&self.payload);
        if let Some(mark) = self.punctuation {
            literal.push(mark);
        }
        literal
    }

    /// True for a plain word whose whole text is `text`.
    pub fn is_plain_text(&self, text: &str) -> bool {
        self.kind == WordKind::Plain && self.payload == text
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.literal())
    }
}
