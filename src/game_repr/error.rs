use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PositionError {
    #[error("no move to undo")]
    EmptyHistory,
    #[error("move {notation} is not legal in the current position")]
    IllegalMove { notation: String },
    #[error("invalid notation: {notation:?}")]
    InvalidNotation { notation: String },
    #[error("no legal move matches {notation}")]
    NoSuchMove { notation: String },
    #[error("invalid setup: {message}")]
    InvalidSetup { message: String },
}

impl PositionError {
    pub fn kind(&self) -> &'static str {
        match self {
            PositionError::EmptyHistory => "empty_history",
            PositionError::IllegalMove { .. } => "illegal_move",
            PositionError::InvalidNotation { .. } => "invalid_notation",
            PositionError::NoSuchMove { .. } => "no_such_move",
            PositionError::InvalidSetup { .. } => "invalid_setup",
        }
    }

    pub(crate) fn setup(message: impl Into<String>) -> Self {
        PositionError::InvalidSetup {
            message: message.into(),
        }
    }
}
