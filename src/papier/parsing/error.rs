//! Structural errors
//!
//! Token-level problems never surface here: a malformed prefixed word silently becomes
//! plain text. Only delimiter problems that make the nesting ambiguous are fatal.

use crate::papier::ast::Position;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StructuralError {
    /// End of input reached while a sub-document was still open.
    #[error("unterminated sub-document opened at {opened_at}: end of input reached at {at}")]
    UnterminatedSubDocument { opened_at: Position, at: Position },

    /// A `* ` opener line that does not end in an opening delimiter.
    #[error("expected `{{` to open the sub-document at {at}")]
    MissingOpenBrace { at: Position },

    /// A `}` line with no open sub-document to close.
    #[error("unmatched `}}` at {at}")]
    UnexpectedCloseBrace { at: Position },
}

impl StructuralError {
    /// Where the error was detected.
    pub fn position(&self) -> Position {
        match self {
            StructuralError::UnterminatedSubDocument { at, .. }
            | StructuralError::MissingOpenBrace { at }
            | StructuralError::UnexpectedCloseBrace { at } => *at,
        }
    }
}
