//! Lexer
//!
//! This module holds the two lower stages of the papier pipeline.
//!
//! Structure:
//!     Raw character classes (newline, blank run, non-blank chunk) come from a logos
//!     lexer. The [`Scanner`] merges chunks split only by carriage returns and
//!     classifies each chunk into a [`Word`](crate::papier::ast::Word) through the
//!     ordered prefix table in [`words`]. The [`LineAssembler`] then groups words into
//!     lines.
//!
//! Both stages are lazy iterators and keep at most one raw token of lookahead, so the
//! document builder pulls the whole input through in one left-to-right pass.

pub mod line_assembly;
pub mod scanner;
pub mod tokens;
pub mod words;

pub use line_assembly::LineAssembler;
pub use scanner::Scanner;
pub use tokens::{RawToken, Token};

/// Start a fresh scan of `source`.
pub fn scan(source: &str) -> Scanner<'_> {
    Scanner::new(source)
}

/// Group the tokens of a scan into lines.
pub fn assemble(scanner: Scanner<'_>) -> LineAssembler<Scanner<'_>> {
    let source_len = scanner.source_len();
    LineAssembler::new(scanner, source_len)
}

/// Convenience function to scan a string and collect tokens with their spans
pub fn tokenize(source: &str) -> Vec<(Token, crate::papier::ast::ByteRange)> {
    scan(source).collect()
}
