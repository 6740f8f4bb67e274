//! Element types making up a papier document tree

pub mod block;
pub mod document;
pub mod line;
pub mod sub_document;
pub mod word;

pub use block::{Block, Text};
pub use document::Document;
pub use line::Line;
pub use sub_document::{Delimiter, SubDocument};
pub use word::{Word, WordKind};
