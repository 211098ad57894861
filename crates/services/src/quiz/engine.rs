use std::fmt;
use std::sync::Arc;

use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use signs_core::model::{AnswerRecord, Question, QuizResult};
use storage::repository::QuizHistoryRepository;

use super::progress::QuizProgress;
use super::selector::select_questions;
use super::session::{QuizSession, QuizState};
use crate::Clock;
use crate::error::QuizError;

/// Called once per completed quiz, after its result has been persisted.
pub type CompletionHook = Box<dyn FnMut(&QuizResult) + Send>;

/// Result of answering a single question through the engine.
#[derive(Debug, Clone, PartialEq)]
pub struct QuizAnswerResult {
    pub answer: AnswerRecord,
    pub is_complete: bool,
    pub result_id: Option<i64>,
}

/// Drives quiz attempts end to end: sampling, timing, scoring, persistence
/// and the completion notification.
pub struct QuizEngine {
    pool: Vec<Question>,
    history: Arc<dyn QuizHistoryRepository>,
    clock: Clock,
    rng: Box<dyn RngCore + Send>,
    on_complete: Option<CompletionHook>,
    question_count: Option<usize>,
    session: Option<QuizSession>,
    result_id: Option<i64>,
}

impl QuizEngine {
    /// An engine drawing from `pool` and appending results to `history`.
    ///
    /// Call [`QuizEngine::initialize`] before starting.
    #[must_use]
    pub fn new(pool: Vec<Question>, history: Arc<dyn QuizHistoryRepository>) -> Self {
        Self {
            pool,
            history,
            clock: Clock::default_clock(),
            rng: Box::new(StdRng::from_os_rng()),
            on_complete: None,
            question_count: None,
            session: None,
            result_id: None,
        }
    }

    #[must_use]
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    /// Replace the random source used to sample questions.
    #[must_use]
    pub fn with_rng(mut self, rng: impl RngCore + Send + 'static) -> Self {
        self.rng = Box::new(rng);
        self
    }

    #[must_use]
    pub fn with_completion(mut self, hook: impl FnMut(&QuizResult) + Send + 'static) -> Self {
        self.on_complete = Some(Box::new(hook));
        self
    }

    /// Mutable access to the clock, e.g. to advance a fixed clock in tests.
    pub fn clock_mut(&mut self) -> &mut Clock {
        &mut self.clock
    }

    /// Sample a fresh question sequence and reset to `NotStarted`.
    ///
    /// An empty pool produces a session with no questions, which refuses to start.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::InvalidQuestionCount` when `question_count` is zero.
    pub fn initialize(&mut self, question_count: usize) -> Result<(), QuizError> {
        if question_count == 0 {
            return Err(QuizError::InvalidQuestionCount);
        }

        let questions = select_questions(&self.pool, question_count, self.rng.as_mut());
        if questions.is_empty() {
            tracing::warn!(requested = question_count, "question pool is empty");
        } else {
            tracing::debug!(
                requested = question_count,
                selected = questions.len(),
                "quiz initialized"
            );
        }

        self.question_count = Some(question_count);
        self.session = Some(QuizSession::new(questions));
        self.result_id = None;
        Ok(())
    }

    /// Discard the current attempt and re-sample with the same question count.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::NotInitialized` if `initialize` was never called.
    pub fn restart(&mut self) -> Result<(), QuizError> {
        let count = self.question_count.ok_or(QuizError::NotInitialized)?;
        self.initialize(count)
    }

    /// Start the quiz and show the first question.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::Empty` for a session without questions and
    /// `QuizError::InvalidTransition` if the quiz already started.
    pub fn start(&mut self) -> Result<(), QuizError> {
        let now = self.clock.now();
        let session = self.session.as_mut().ok_or(QuizError::NotInitialized)?;
        session.start(now)?;
        tracing::debug!(questions = session.questions().len(), "quiz started");
        Ok(())
    }

    /// Answer the current question with the option at `selected`.
    ///
    /// On the final question the result is appended to history and the
    /// completion hook fires. If that append fails the quiz still completes;
    /// call [`QuizEngine::finalize`] to retry.
    ///
    /// # Errors
    ///
    /// Returns `QuizError` for contract violations (state unchanged) or
    /// `QuizError::Storage` if persisting the result fails.
    pub async fn answer(&mut self, selected: usize) -> Result<QuizAnswerResult, QuizError> {
        let now = self.clock.now();
        let session = self.session.as_mut().ok_or(QuizError::NotInitialized)?;
        let answer = session.answer(selected, now)?.clone();
        let is_complete = session.is_complete();

        let result_id = if is_complete {
            Some(self.finalize().await?)
        } else {
            None
        };

        Ok(QuizAnswerResult {
            answer,
            is_complete,
            result_id,
        })
    }

    /// Persist the completed result and notify, unless already done.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::InvalidTransition` if the quiz is not complete and
    /// `QuizError::Storage` if the append fails.
    pub async fn finalize(&mut self) -> Result<i64, QuizError> {
        let session = self.session.as_ref().ok_or(QuizError::NotInitialized)?;
        let Some(result) = session.result() else {
            return Err(QuizError::InvalidTransition {
                action: "finalize",
                state: session.state(),
            });
        };
        if let Some(id) = self.result_id {
            return Ok(id);
        }

        let id = match self.history.append_result(result).await {
            Ok(id) => id,
            Err(err) => {
                tracing::error!(error = %err, "failed to persist quiz result");
                return Err(err.into());
            }
        };
        self.result_id = Some(id);
        tracing::info!(
            result_id = id,
            score = result.score_percent(),
            total = result.total_questions(),
            "quiz completed"
        );

        if let Some(hook) = self.on_complete.as_mut() {
            hook(result);
        }
        Ok(id)
    }

    #[must_use]
    pub fn state(&self) -> Option<QuizState> {
        self.session.as_ref().map(QuizSession::state)
    }

    #[must_use]
    pub fn session(&self) -> Option<&QuizSession> {
        self.session.as_ref()
    }

    #[must_use]
    pub fn current_question(&self) -> Option<&Question> {
        self.session.as_ref()?.current_question()
    }

    #[must_use]
    pub fn progress(&self) -> Option<QuizProgress> {
        self.session.as_ref().map(QuizSession::progress)
    }

    #[must_use]
    pub fn result(&self) -> Option<&QuizResult> {
        self.session.as_ref()?.result()
    }

    /// Storage id of the persisted result, once `finalize` succeeded.
    #[must_use]
    pub fn result_id(&self) -> Option<i64> {
        self.result_id
    }
}

impl fmt::Debug for QuizEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuizEngine")
            .field("pool_len", &self.pool.len())
            .field("clock", &self.clock)
            .field("question_count", &self.question_count)
            .field("session", &self.session)
            .field("result_id", &self.result_id)
            .finish_non_exhaustive()
    }
}
