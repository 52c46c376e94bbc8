//! Error types for position setup and game play.

/// Errors raised by the rules engine.
///
/// Search code never sees these: it only plays moves the engine itself
/// generated. They surface when positions or moves come from outside
/// (FEN strings, UCI commands, a stray `undo`).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChessError {
    /// FEN string could not be parsed
    #[error("invalid FEN: {reason}")]
    InvalidFen { reason: String },

    /// Move text does not name a legal move in the current position
    #[error("illegal move: {uci}")]
    IllegalMove { uci: String },

    /// `undo` called with no pending `apply`
    #[error("no move to undo")]
    NothingToUndo,

    /// Square text is not a board coordinate
    #[error("invalid square: {0}")]
    InvalidSquare(String),
}

impl ChessError {
    pub(crate) fn fen(reason: impl Into<String>) -> Self {
        ChessError::InvalidFen {
            reason: reason.into(),
        }
    }
}

/// Result type alias for rules-engine operations
pub type ChessResult<T> = Result<T, ChessError>;
