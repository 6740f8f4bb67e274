//! Output formats over papier tokens and trees
//!
//! These are inspection formats for tooling. They never render a document for
//! presentation.

pub mod detokenizer;
pub mod treeviz;

pub use detokenizer::{detokenize, source_slices, to_papier, ToPapierString};
pub use treeviz::{to_treeviz_str, to_treeviz_str_with_width, DEFAULT_LABEL_WIDTH};
