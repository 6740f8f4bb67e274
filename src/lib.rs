//! # papier
//!
//! A parser for the Papier format: free-form prose lines, prefixed semantic words
//! (`!uuid`, `!!alias`, `!?ref`, `#tag`, `@fmt`) and brace-delimited sub-documents
//! introduced by `* ` at the start of a line.
//!
//! The entry point for collaborators is [`build`], which turns source text into an
//! immutable [`Document`] or a [`StructuralError`].

pub mod papier;

pub use papier::ast::{Block, Document, Line, SubDocument, Word, WordKind};
pub use papier::parsing::{build, StructuralError};
