//! Document builder
//!
//! A two-mode state machine over assembled lines.
//!
//!     Top            a line starting with `* ` opens a sub-document, a bare `}` is an
//!                    error, anything else joins the current text block
//!     InSubDocument  lines are kept verbatim until the closing delimiter line
//!
//! Sub-document contents are flat: a `* … {` line inside them is ordinary content.

use crate::papier::ast::{
    Block, ByteRange, Delimiter, Document, Line, Position, SourceLocation, SubDocument, Text,
    Word,
};
use crate::papier::lexing::{assemble, scan};
use crate::papier::parsing::error::StructuralError;
use once_cell::sync::Lazy;
use regex::Regex;

/// Literal that opens a sub-document at the start of a line.
pub const SUB_DOCUMENT_MARKER: &str = "* ";

static HEREDOC_OPEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^!([A-Za-z][A-Za-z0-9_]*)\{$").expect("heredoc pattern"));

struct OpenSubDocument {
    title: Option<Vec<Word>>,
    delimiter: Delimiter,
    contents: Vec<String>,
    start: usize,
}

enum Mode {
    Top,
    InSubDocument(OpenSubDocument),
}

pub struct DocumentBuilder<'s> {
    source: &'s str,
    location: SourceLocation,
    blocks: Vec<Block>,
    pending_lines: Vec<Line>,
    mode: Mode,
}

impl<'s> DocumentBuilder<'s> {
    pub fn new(source: &'s str) -> Self {
        Self {
            source,
            location: SourceLocation::new(source),
            blocks: Vec::new(),
            pending_lines: Vec::new(),
            mode: Mode::Top,
        }
    }

    /// Run the whole input through the builder.
    pub fn build(mut self) -> Result<Document, StructuralError> {
        for line in assemble(scan(self.source)) {
            self.feed(line)?;
        }
        self.finish()
    }

    fn feed(&mut self, line: Line) -> Result<(), StructuralError> {
        let raw = raw_text(self.source, &line.span());
        log::trace!("line {:?}: {:?}", line.span(), raw);

        match std::mem::replace(&mut self.mode, Mode::Top) {
            Mode::Top => self.feed_top(line, &raw),
            Mode::InSubDocument(mut open) => {
                if raw == open.delimiter.close() {
                    let span = open.start..line.span().end;
                    log::debug!(
                        "closed sub-document {:?} with {} content lines",
                        span,
                        open.contents.len()
                    );
                    self.blocks.push(Block::SubDocument(SubDocument::new(
                        open.title,
                        open.delimiter,
                        open.contents,
                        span,
                    )));
                } else {
                    open.contents.push(raw);
                    self.mode = Mode::InSubDocument(open);
                }
                Ok(())
            }
        }
    }

    fn feed_top(&mut self, line: Line, raw: &str) -> Result<(), StructuralError> {
        if raw.starts_with(SUB_DOCUMENT_MARKER) {
            self.flush_text();
            let open = self.open_sub_document(line)?;
            self.mode = Mode::InSubDocument(open);
        } else if raw == Delimiter::Brace.close() {
            let offset = line
                .words()
                .first()
                .map_or(line.span().start, |word| word.span().start);
            return Err(StructuralError::UnexpectedCloseBrace {
                at: self.position(offset),
            });
        } else {
            self.pending_lines.push(line);
        }
        Ok(())
    }

    /// The opener line is `*`, the title words, then the opening delimiter.
    fn open_sub_document(&self, line: Line) -> Result<OpenSubDocument, StructuralError> {
        let start = line.span().start;
        let mut words = line.into_words();

        let delimiter = match words.last().and_then(opening_delimiter) {
            Some(delimiter) if words.len() > 1 => delimiter,
            _ => {
                let expected_at = words.last().map_or(start, |word| word.span().end);
                return Err(StructuralError::MissingOpenBrace {
                    at: self.position(expected_at),
                });
            }
        };

        words.pop();
        words.remove(0);
        let title = (!words.is_empty()).then_some(words);

        log::debug!(
            "opened sub-document at {} with {:?} delimiter",
            self.position(start),
            delimiter
        );
        Ok(OpenSubDocument {
            title,
            delimiter,
            contents: Vec::new(),
            start,
        })
    }

    fn flush_text(&mut self) {
        let lines = std::mem::take(&mut self.pending_lines);
        if let (Some(first), Some(last)) = (lines.first(), lines.last()) {
            let span = first.span().start..last.span().end;
            self.blocks.push(Block::Text(Text::new(lines, span)));
        }
    }

    fn finish(mut self) -> Result<Document, StructuralError> {
        if let Mode::InSubDocument(open) = &self.mode {
            return Err(StructuralError::UnterminatedSubDocument {
                opened_at: self.position(open.start),
                at: self.position(self.source.len()),
            });
        }
        self.flush_text();
        log::debug!("built document with {} blocks", self.blocks.len());
        Ok(Document::with_blocks(self.blocks))
    }

    fn position(&self, offset: usize) -> Position {
        self.location.byte_to_position(offset)
    }
}

/// A line's source text without its line break or any carriage returns.
fn raw_text(source: &str, span: &ByteRange) -> String {
    let text = &source[span.clone()];
    text.strip_suffix('\n').unwrap_or(text).replace('\r', "")
}

fn opening_delimiter(word: &Word) -> Option<Delimiter> {
    if word.is_plain_text("{") {
        return Some(Delimiter::Brace);
    }
    let literal = word.literal();
    HEREDOC_OPEN
        .captures(&literal)
        .map(|caps| Delimiter::Heredoc(caps[1].to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::papier::ast::WordKind;

    fn build(source: &str) -> Result<Document, StructuralError> {
        DocumentBuilder::new(source).build()
    }

    #[test]
    fn test_empty_input() {
        assert!(build("").expect("parse").is_empty());
    }

    #[test]
    fn test_text_blocks_split_by_sub_document() {
        let doc = build("a\n* T {\nx\n}\nb\n").expect("parse");
        let types: Vec<_> = doc.blocks().iter().map(Block::node_type).collect();
        assert_eq!(types, vec!["Text", "SubDocument", "Text"]);
    }

    #[test]
    fn test_untitled_sub_document() {
        let doc = build("* {\n}\n").expect("parse");
        let sub = doc.iter_sub_documents().next().expect("sub-document");
        assert!(sub.title().is_none());
        assert!(sub.contents().is_empty());
    }

    #[test]
    fn test_title_words_are_classified() {
        let doc = build("* Notes #draft {\n}\n").expect("parse");
        let sub = doc.iter_sub_documents().next().expect("sub-document");
        let kinds: Vec<_> = sub
            .title()
            .expect("title")
            .iter()
            .map(Word::kind)
            .collect();
        assert_eq!(kinds, vec![WordKind::Plain, WordKind::Tag]);
    }

    #[test]
    fn test_star_without_space_is_text() {
        let doc = build("*bold*\n*\n").expect("parse");
        assert_eq!(doc.count_by_type(), (1, 0));
    }

    #[test]
    fn test_missing_open_brace_points_after_title() {
        let err = build("* Intro\n").unwrap_err();
        assert_eq!(
            err,
            StructuralError::MissingOpenBrace {
                at: Position::new(0, 7, 7)
            }
        );
    }

    #[test]
    fn test_marker_alone_is_missing_brace() {
        let err = build("* \n").unwrap_err();
        assert!(matches!(err, StructuralError::MissingOpenBrace { .. }));
    }

    #[test]
    fn test_stray_close_brace() {
        let err = build("text\n}\n").unwrap_err();
        assert_eq!(
            err,
            StructuralError::UnexpectedCloseBrace {
                at: Position::new(1, 0, 5)
            }
        );
    }

    #[test]
    fn test_crlf_contents_are_clean() {
        let doc = build("* T {\r\nline one\r\n}\r\n").expect("parse");
        let sub = doc.iter_sub_documents().next().expect("sub-document");
        assert_eq!(sub.contents(), ["line one"]);
        assert_eq!(sub.span(), 0..20);
    }

    #[test]
    fn test_heredoc_keeps_bare_close_brace() {
        let doc = build("* Code !EOF{\nfn x() {\n}\n}EOF!\n").expect("parse");
        let sub = doc.iter_sub_documents().next().expect("sub-document");
        assert_eq!(sub.delimiter(), &Delimiter::Heredoc("EOF".to_string()));
        assert_eq!(sub.contents(), ["fn x() {", "}"]);
    }

    #[test]
    fn test_unterminated_reports_opener_and_end() {
        let err = build("intro\n* Open {\nbody").unwrap_err();
        assert_eq!(
            err,
            StructuralError::UnterminatedSubDocument {
                opened_at: Position::new(1, 0, 6),
                at: Position::new(2, 4, 19),
            }
        );
    }
}
