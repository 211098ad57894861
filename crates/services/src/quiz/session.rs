use chrono::{DateTime, Utc};
use std::fmt;

use signs_core::model::{AnswerRecord, Question, QuizResult};
use signs_core::time::elapsed_millis;

use super::progress::QuizProgress;
use crate::error::QuizError;

//
// ─── STATE ─────────────────────────────────────────────────────────────────────
//

/// Lifecycle of one quiz attempt. Only `restart` goes backwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizState {
    NotStarted,
    InProgress,
    Completed,
}

impl fmt::Display for QuizState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            QuizState::NotStarted => "not started",
            QuizState::InProgress => "in progress",
            QuizState::Completed => "completed",
        })
    }
}

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// In-memory quiz attempt over a fixed sequence of questions.
///
/// Timestamps are passed in by the caller so the state machine stays free of
/// clocks and storage. While in progress, `current_index() == answers().len()`.
pub struct QuizSession {
    questions: Vec<Question>,
    current: usize,
    answers: Vec<AnswerRecord>,
    state: QuizState,
    started_at: Option<DateTime<Utc>>,
    displayed_at: Option<DateTime<Utc>>,
    result: Option<QuizResult>,
}

impl QuizSession {
    /// A fresh, not-yet-started session. `questions` may be empty, in which
    /// case the session can never start.
    #[must_use]
    pub fn new(questions: Vec<Question>) -> Self {
        Self {
            questions,
            current: 0,
            answers: Vec::new(),
            state: QuizState::NotStarted,
            started_at: None,
            displayed_at: None,
            result: None,
        }
    }

    #[must_use]
    pub fn state(&self) -> QuizState {
        self.state
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    #[must_use]
    pub fn answers(&self) -> &[AnswerRecord] {
        &self.answers
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current
    }

    #[must_use]
    pub fn started_at(&self) -> Option<DateTime<Utc>> {
        self.started_at
    }

    #[must_use]
    pub fn result(&self) -> Option<&QuizResult> {
        self.result.as_ref()
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.state == QuizState::Completed
    }

    /// The question awaiting an answer, if the quiz is in progress.
    #[must_use]
    pub fn current_question(&self) -> Option<&Question> {
        match self.state {
            QuizState::InProgress => self.questions.get(self.current),
            _ => None,
        }
    }

    #[must_use]
    pub fn progress(&self) -> QuizProgress {
        QuizProgress {
            total: self.questions.len(),
            answered: self.answers.len(),
            remaining: self.questions.len().saturating_sub(self.answers.len()),
            is_complete: self.is_complete(),
        }
    }

    /// Show the first question.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::InvalidTransition` unless the session is not started,
    /// and `QuizError::Empty` when there are no questions.
    pub fn start(&mut self, now: DateTime<Utc>) -> Result<(), QuizError> {
        if self.state != QuizState::NotStarted {
            return Err(QuizError::InvalidTransition {
                action: "start",
                state: self.state,
            });
        }
        if self.questions.is_empty() {
            return Err(QuizError::Empty);
        }

        self.state = QuizState::InProgress;
        self.started_at = Some(now);
        self.displayed_at = Some(now);
        Ok(())
    }

    /// Record the participant's choice for the current question and advance.
    ///
    /// Answering the last question builds the result and completes the
    /// session. A rejected call leaves the session untouched.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::InvalidTransition` unless the quiz is in progress,
    /// and `QuizError::Answer` when `selected` is not a valid option index.
    pub fn answer(
        &mut self,
        selected: usize,
        now: DateTime<Utc>,
    ) -> Result<&AnswerRecord, QuizError> {
        let Some(question) = self.current_question() else {
            return Err(QuizError::InvalidTransition {
                action: "answer",
                state: self.state,
            });
        };

        let displayed_at = self.displayed_at.unwrap_or(now);
        let record = AnswerRecord::grade(question, selected, elapsed_millis(displayed_at, now))?;

        let is_last = self.current + 1 == self.questions.len();
        let result = if is_last {
            let mut all = self.answers.clone();
            all.push(record.clone());
            Some(QuizResult::from_answers(all, now)?)
        } else {
            None
        };

        self.answers.push(record);
        self.current += 1;
        if let Some(result) = result {
            self.state = QuizState::Completed;
            self.displayed_at = None;
            self.result = Some(result);
        } else {
            self.displayed_at = Some(now);
        }

        self.answers.last().ok_or(QuizError::Empty)
    }
}

impl fmt::Debug for QuizSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuizSession")
            .field("state", &self.state)
            .field("questions_len", &self.questions.len())
            .field("current", &self.current)
            .field("answers_len", &self.answers.len())
            .field("started_at", &self.started_at)
            .finish_non_exhaustive()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
