//! Document tree for papier
//!
//! The tree is produced once per [`build`](crate::papier::parsing::build) call and is
//! read-only afterwards: every node exposes accessors, none expose mutation.
//! All nodes carry byte spans into the source they were parsed from.

pub mod elements;
pub mod location;

pub use elements::{Block, Delimiter, Document, Line, SubDocument, Text, Word, WordKind};
pub use location::{ByteRange, Position, SourceLocation};
