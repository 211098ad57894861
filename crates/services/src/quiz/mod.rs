mod engine;
mod progress;
mod selector;
mod session;

// Public API of the quiz subsystem.
pub use engine::{CompletionHook, QuizAnswerResult, QuizEngine};
pub use progress::QuizProgress;
pub use selector::select_questions;
pub use session::{QuizSession, QuizState};
