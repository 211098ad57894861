#![forbid(unsafe_code)]

pub mod error;
pub mod history;
pub mod quiz;

pub use signs_core::Clock;

pub use error::{HistoryError, QuizError};
pub use history::HistoryService;
pub use quiz::{
    CompletionHook, QuizAnswerResult, QuizEngine, QuizProgress, QuizSession, QuizState,
    select_questions,
};
