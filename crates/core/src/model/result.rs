use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use crate::model::answer::AnswerRecord;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuizResultError {
    #[error("a result needs at least one answer")]
    Empty,

    #[error("too many answers for a single quiz: {len}")]
    TooManyAnswers { len: usize },

    #[error("total questions ({total}) does not match answer count ({answers})")]
    CountMismatch { total: u32, answers: usize },

    #[error("score {stored}% does not match answers ({expected}%)")]
    ScoreMismatch { stored: u8, expected: u8 },
}

/// Percentage of correct answers, rounded half up.
///
/// Returns `None` when `total` is zero.
#[must_use]
pub fn score_percent(correct: u32, total: u32) -> Option<u8> {
    if total == 0 {
        return None;
    }
    let correct = u64::from(correct.min(total));
    let total = u64::from(total);
    // round(100c/t) == floor((200c + t) / 2t) for non-negative values.
    let pct = (200 * correct + total) / (2 * total);
    u8::try_from(pct).ok()
}

/// Qualitative band shown alongside a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Performance {
    Excellent,
    Good,
    NeedsPractice,
}

impl Performance {
    #[must_use]
    pub fn from_score(score_percent: u8) -> Self {
        match score_percent {
            80.. => Performance::Excellent,
            60..=79 => Performance::Good,
            _ => Performance::NeedsPractice,
        }
    }
}

impl fmt::Display for Performance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Performance::Excellent => "Excellent",
            Performance::Good => "Good",
            Performance::NeedsPractice => "Needs Practice",
        })
    }
}

/// Immutable outcome of a completed quiz.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "StoredResult")]
pub struct QuizResult {
    score_percent: u8,
    total_questions: u32,
    answers: Vec<AnswerRecord>,
    completed_at: DateTime<Utc>,
}

/// Wire shape of a [`QuizResult`]; totals and score are re-checked.
#[derive(Deserialize)]
struct StoredResult {
    score_percent: u8,
    total_questions: u32,
    answers: Vec<AnswerRecord>,
    completed_at: DateTime<Utc>,
}

impl TryFrom<StoredResult> for QuizResult {
    type Error = QuizResultError;

    fn try_from(raw: StoredResult) -> Result<Self, Self::Error> {
        Self::from_persisted(
            raw.score_percent,
            raw.total_questions,
            raw.answers,
            raw.completed_at,
        )
    }
}

impl QuizResult {
    /// Build a result from the full, ordered answer list.
    ///
    /// # Errors
    ///
    /// Returns `QuizResultError::Empty` when there are no answers, or
    /// `QuizResultError::TooManyAnswers` if the count cannot fit in `u32`.
    pub fn from_answers(
        answers: Vec<AnswerRecord>,
        completed_at: DateTime<Utc>,
    ) -> Result<Self, QuizResultError> {
        let total_questions = u32::try_from(answers.len())
            .map_err(|_| QuizResultError::TooManyAnswers { len: answers.len() })?;
        let correct = count_correct(&answers);
        let score_percent = score_percent(correct, total_questions).ok_or(QuizResultError::Empty)?;

        Ok(Self {
            score_percent,
            total_questions,
            answers,
            completed_at,
        })
    }

    /// Rehydrate a result from persisted storage.
    ///
    /// # Errors
    ///
    /// Returns `QuizResultError` if the stored totals or score disagree with
    /// the stored answers.
    pub fn from_persisted(
        score_percent: u8,
        total_questions: u32,
        answers: Vec<AnswerRecord>,
        completed_at: DateTime<Utc>,
    ) -> Result<Self, QuizResultError> {
        if usize::try_from(total_questions).ok() != Some(answers.len()) {
            return Err(QuizResultError::CountMismatch {
                total: total_questions,
                answers: answers.len(),
            });
        }
        let expected = score_percent_checked(&answers, total_questions)?;
        if expected != score_percent {
            return Err(QuizResultError::ScoreMismatch {
                stored: score_percent,
                expected,
            });
        }

        Ok(Self {
            score_percent,
            total_questions,
            answers,
            completed_at,
        })
    }

    #[must_use]
    pub fn score_percent(&self) -> u8 {
        self.score_percent
    }

    #[must_use]
    pub fn total_questions(&self) -> u32 {
        self.total_questions
    }

    #[must_use]
    pub fn answers(&self) -> &[AnswerRecord] {
        &self.answers
    }

    #[must_use]
    pub fn completed_at(&self) -> DateTime<Utc> {
        self.completed_at
    }

    #[must_use]
    pub fn correct_count(&self) -> u32 {
        count_correct(&self.answers)
    }

    #[must_use]
    pub fn performance(&self) -> Performance {
        Performance::from_score(self.score_percent)
    }

    /// Mean time per answered question, in milliseconds.
    #[must_use]
    pub fn average_time_ms(&self) -> u64 {
        let total: u64 = self.answers.iter().map(AnswerRecord::time_spent_ms).sum();
        total / u64::from(self.total_questions.max(1))
    }
}

fn count_correct(answers: &[AnswerRecord]) -> u32 {
    let n = answers.iter().filter(|a| a.is_correct()).count();
    u32::try_from(n).unwrap_or(u32::MAX)
}

fn score_percent_checked(answers: &[AnswerRecord], total: u32) -> Result<u8, QuizResultError> {
    score_percent(count_correct(answers), total).ok_or(QuizResultError::Empty)
}
