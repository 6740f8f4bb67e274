//! Parsing
//!
//! The document builder pulls lines from the lexing stages and assembles the tree.
//! [`build`] is the entry point used by every collaborator: it returns the finished
//! [`Document`] or the first [`StructuralError`], never a partial tree.

pub mod builder;
pub mod error;

pub use builder::DocumentBuilder;
pub use error::StructuralError;

use crate::papier::ast::Document;

/// Parse papier source text into a document tree.
pub fn build(source: &str) -> Result<Document, StructuralError> {
    DocumentBuilder::new(source).build()
}
