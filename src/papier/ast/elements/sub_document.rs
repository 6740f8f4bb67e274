//! Sub-document element definition
//!
//! A sub-document is introduced by `* ` at the start of a line, an optional title and
//! an opening delimiter, and runs until the matching closing line:
//!
//!     * Title {
//!     raw content
//!     }
//!
//! Named here-document delimiters let the contents hold a bare `}` line:
//!
//!     * Title !EOF{
//!     }
//!     }EOF!

use super::super::location::ByteRange;
use super::word::Word;
use serde::Serialize;

/// The brace pair that encloses a sub-document's contents.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Delimiter {
    /// `{` … `}`
    Brace,
    /// `!NAME{` … `}NAME!`
    Heredoc(String),
}

impl Delimiter {
    pub fn open(&self) -> String {
        match self {
            Delimiter::Brace => "{".to_string(),
            Delimiter::Heredoc(name) => format!("!{}{{", name),
        }
    }

    pub fn close(&self) -> String {
        match self {
            Delimiter::Brace => "}".to_string(),
            Delimiter::Heredoc(name) => format!("}}{}!", name),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubDocument {
    title: Option<Vec<Word>>,
    delimiter: Delimiter,
    contents: Vec<String>,
    span: ByteRange,
}

impl SubDocument {
    pub(crate) fn new(
        title: Option<Vec<Word>>,
        delimiter: Delimiter,
        contents: Vec<String>,
        span: ByteRange,
    ) -> Self {
        Self {
            title,
            delimiter,
            contents,
            span,
        }
    }

    pub fn title(&self) -> Option<&[Word]> {
        self.title.as_deref()
    }

    /// Title words joined by single spaces.
    pub fn title_text(&self) -> Option<String> {
        self.title.as_ref().map(|words| {
            words
                .iter()
                .map(Word::literal)
                .collect::<Vec<_>>()
                .join(" ")
        })
    }

    pub fn delimiter(&self) -> &Delimiter {
        &self.delimiter
    }

    /// Raw content lines, without line breaks or carriage returns.
    pub fn contents(&self) -> &[String] {
        &self.contents
    }

    pub fn span(&self) -> ByteRange {
        self.span.clone()
    }
}
