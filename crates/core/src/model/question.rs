use serde::Serialize;
use thiserror::Error;

use crate::model::ids::{QuestionId, SignId};

/// Every question offers exactly this many choices.
pub const OPTION_COUNT: usize = 4;

//
// ─── ERRORS ───────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionError {
    #[error("question prompt cannot be empty")]
    EmptyPrompt,

    #[error("option {index} cannot be empty")]
    EmptyOption { index: usize },

    #[error("correct option {index} is out of range (expected 0-3)")]
    CorrectOptionOutOfRange { index: usize },
}

//
// ─── QUESTION ─────────────────────────────────────────────────────────────────
//

/// Multiple-choice question about one sign in the catalog.
///
/// Built through [`Question::new`], so `correct_option` always indexes into
/// `options`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Question {
    id: QuestionId,
    sign_id: SignId,
    prompt: String,
    options: [String; OPTION_COUNT],
    correct_option: usize,
    explanation: String,
}

impl Question {
    /// Validate and build a question.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError` if the prompt or any option is blank, or if
    /// `correct_option` does not index into the options.
    pub fn new(
        id: QuestionId,
        sign_id: SignId,
        prompt: impl Into<String>,
        options: [String; OPTION_COUNT],
        correct_option: usize,
        explanation: impl Into<String>,
    ) -> Result<Self, QuestionError> {
        let prompt = prompt.into();
        if prompt.trim().is_empty() {
            return Err(QuestionError::EmptyPrompt);
        }
        if let Some(index) = options.iter().position(|o| o.trim().is_empty()) {
            return Err(QuestionError::EmptyOption { index });
        }
        if correct_option >= OPTION_COUNT {
            return Err(QuestionError::CorrectOptionOutOfRange {
                index: correct_option,
            });
        }

        Ok(Self {
            id,
            sign_id,
            prompt,
            options,
            correct_option,
            explanation: explanation.into(),
        })
    }

    #[must_use]
    pub fn id(&self) -> &QuestionId {
        &self.id
    }

    #[must_use]
    pub fn sign_id(&self) -> &SignId {
        &self.sign_id
    }

    #[must_use]
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    #[must_use]
    pub fn options(&self) -> &[String; OPTION_COUNT] {
        &self.options
    }

    #[must_use]
    pub fn option(&self, index: usize) -> Option<&str> {
        self.options.get(index).map(String::as_str)
    }

    #[must_use]
    pub fn correct_option(&self) -> usize {
        self.correct_option
    }

    #[must_use]
    pub fn correct_text(&self) -> &str {
        &self.options[self.correct_option]
    }

    #[must_use]
    pub fn explanation(&self) -> &str {
        &self.explanation
    }

    #[must_use]
    pub fn is_correct(&self, selected: usize) -> bool {
        selected == self.correct_option
    }
}

/// Letter label shown next to an option (`0 -> 'A'`).
#[must_use]
pub fn option_label(index: usize) -> Option<char> {
    if index < OPTION_COUNT {
        u8::try_from(index).ok().map(|i| char::from(b'A' + i))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options() -> [String; OPTION_COUNT] {
        ["Hotel", "Highway", "Hospital", "Help center"].map(String::from)
    }

    #[test]
    fn builds_valid_question() {
        let q = Question::new(
            QuestionId::new("q4"),
            SignId::new("info-hospital"),
            "What does this blue sign with H indicate?",
            options(),
            2,
            "The H symbol indicates a hospital.",
        )
        .unwrap();
        assert_eq!(q.correct_text(), "Hospital");
        assert!(q.is_correct(2));
        assert!(!q.is_correct(0));
        assert_eq!(q.option(4), None);
    }

    #[test]
    fn rejects_out_of_range_correct_option() {
        let err = Question::new(
            QuestionId::new("q"),
            SignId::new("s"),
            "Prompt",
            options(),
            4,
            "",
        )
        .unwrap_err();
        assert_eq!(err, QuestionError::CorrectOptionOutOfRange { index: 4 });
    }

    #[test]
    fn rejects_blank_prompt_and_options() {
        let err = Question::new(QuestionId::new("q"), SignId::new("s"), "  ", options(), 0, "")
            .unwrap_err();
        assert_eq!(err, QuestionError::EmptyPrompt);

        let mut opts = options();
        opts[1] = " ".into();
        let err =
            Question::new(QuestionId::new("q"), SignId::new("s"), "P", opts, 0, "").unwrap_err();
        assert_eq!(err, QuestionError::EmptyOption { index: 1 });
    }

    #[test]
    fn labels_options_by_letter() {
        assert_eq!(option_label(0), Some('A'));
        assert_eq!(option_label(3), Some('D'));
        assert_eq!(option_label(4), None);
    }
}
