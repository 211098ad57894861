use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::ids::QuestionId;
use crate::model::question::{OPTION_COUNT, Question};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum AnswerError {
    #[error("selected option {selected} is out of range (expected 0-3)")]
    OptionOutOfRange { selected: usize },
}

/// One participant selection, graded against its question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "StoredAnswer")]
pub struct AnswerRecord {
    question_id: QuestionId,
    selected_option: usize,
    is_correct: bool,
    time_spent_ms: u64,
}

/// Wire shape of an [`AnswerRecord`]; checked on the way in.
#[derive(Deserialize)]
struct StoredAnswer {
    question_id: QuestionId,
    selected_option: usize,
    is_correct: bool,
    time_spent_ms: u64,
}

impl TryFrom<StoredAnswer> for AnswerRecord {
    type Error = AnswerError;

    fn try_from(raw: StoredAnswer) -> Result<Self, Self::Error> {
        Self::from_persisted(
            raw.question_id,
            raw.selected_option,
            raw.is_correct,
            raw.time_spent_ms,
        )
    }
}

impl AnswerRecord {
    /// Grade `selected` against `question`.
    ///
    /// # Errors
    ///
    /// Returns `AnswerError::OptionOutOfRange` if `selected` does not index
    /// into the question's options.
    pub fn grade(
        question: &Question,
        selected: usize,
        time_spent_ms: u64,
    ) -> Result<Self, AnswerError> {
        if question.option(selected).is_none() {
            return Err(AnswerError::OptionOutOfRange { selected });
        }
        Ok(Self {
            question_id: question.id().clone(),
            selected_option: selected,
            is_correct: question.is_correct(selected),
            time_spent_ms,
        })
    }

    /// Rehydrate an answer from persisted storage.
    ///
    /// # Errors
    ///
    /// Returns `AnswerError::OptionOutOfRange` for an impossible selection.
    pub fn from_persisted(
        question_id: QuestionId,
        selected_option: usize,
        is_correct: bool,
        time_spent_ms: u64,
    ) -> Result<Self, AnswerError> {
        if selected_option >= OPTION_COUNT {
            return Err(AnswerError::OptionOutOfRange {
                selected: selected_option,
            });
        }
        Ok(Self {
            question_id,
            selected_option,
            is_correct,
            time_spent_ms,
        })
    }

    #[must_use]
    pub fn question_id(&self) -> &QuestionId {
        &self.question_id
    }

    #[must_use]
    pub fn selected_option(&self) -> usize {
        self.selected_option
    }

    #[must_use]
    pub fn is_correct(&self) -> bool {
        self.is_correct
    }

    #[must_use]
    pub fn time_spent_ms(&self) -> u64 {
        self.time_spent_ms
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::SignId;

    fn question() -> Question {
        Question::new(
            QuestionId::new("q1"),
            SignId::new("regulatory-stop"),
            "What should you do when you see this sign?",
            ["Slow down", "Come to complete stop", "Yield", "Proceed"].map(String::from),
            1,
            "Stop completely.",
        )
        .unwrap()
    }

    #[test]
    fn grades_selection() {
        let q = question();
        let right = AnswerRecord::grade(&q, 1, 1200).unwrap();
        assert!(right.is_correct());
        assert_eq!(right.time_spent_ms(), 1200);
        assert_eq!(right.question_id(), q.id());

        let wrong = AnswerRecord::grade(&q, 3, 10).unwrap();
        assert!(!wrong.is_correct());
    }

    #[test]
    fn rejects_out_of_range_selection() {
        let err = AnswerRecord::grade(&question(), 5, 0).unwrap_err();
        assert_eq!(err, AnswerError::OptionOutOfRange { selected: 5 });
    }

    #[test]
    fn deserialize_rejects_impossible_selection() {
        let ok: AnswerRecord = serde_json::from_str(
            r#"{"question_id":"q1","selected_option":2,"is_correct":false,"time_spent_ms":40}"#,
        )
        .unwrap();
        assert_eq!(ok.selected_option(), 2);

        let err = serde_json::from_str::<AnswerRecord>(
            r#"{"question_id":"q1","selected_option":9,"is_correct":true,"time_spent_ms":40}"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("out of range"));
    }
}
