//! Shared error types for the services crate.

use thiserror::Error;

use signs_core::model::{AnswerError, QuizResultError};
use storage::repository::StorageError;

use crate::quiz::QuizState;

/// Errors emitted by the quiz session and engine.
///
/// Everything except `Storage` is a caller contract violation; the session is
/// left exactly as it was before the rejected call.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum QuizError {
    #[error("question count must be at least 1")]
    InvalidQuestionCount,
    #[error("quiz has not been initialized")]
    NotInitialized,
    #[error("no questions available for quiz")]
    Empty,
    #[error("cannot {action} a quiz that is {state}")]
    InvalidTransition {
        action: &'static str,
        state: QuizState,
    },
    #[error(transparent)]
    Answer(#[from] AnswerError),
    #[error(transparent)]
    Result(#[from] QuizResultError),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Errors emitted by `HistoryService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum HistoryError {
    #[error(transparent)]
    Storage(#[from] StorageError),
}
