use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::result::QuizResult;

/// Aggregate view over a participant's quiz history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProgress {
    pub total_quizzes_taken: u32,
    pub average_score: f64,
    pub best_score: u8,
    pub last_quiz_at: DateTime<Utc>,
}

impl UserProgress {
    /// Summarize `results`; `None` when nothing has been recorded yet.
    #[must_use]
    pub fn from_results(results: &[QuizResult]) -> Option<Self> {
        let last_quiz_at = results.iter().map(QuizResult::completed_at).max()?;
        let best_score = results
            .iter()
            .map(QuizResult::score_percent)
            .max()
            .unwrap_or(0);
        let sum: u64 = results
            .iter()
            .map(|r| u64::from(r.score_percent()))
            .sum();
        let total_quizzes_taken = u32::try_from(results.len()).unwrap_or(u32::MAX);

        #[allow(clippy::cast_precision_loss)]
        let average_score = sum as f64 / results.len() as f64;

        Some(Self {
            total_quizzes_taken,
            average_score,
            best_score,
            last_quiz_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{AnswerRecord, QuestionId};
    use crate::time::fixed_now;

    fn result(correct: &[bool], at: DateTime<Utc>) -> QuizResult {
        let answers = correct
            .iter()
            .enumerate()
            .map(|(i, c)| {
                AnswerRecord::from_persisted(QuestionId::new(format!("q{i}")), 0, *c, 0).unwrap()
            })
            .collect();
        QuizResult::from_answers(answers, at).unwrap()
    }

    #[test]
    fn no_results_means_no_progress() {
        assert!(UserProgress::from_results(&[]).is_none());
    }

    #[test]
    fn aggregates_scores_and_dates() {
        let now = fixed_now();
        let later = now + chrono::Duration::hours(2);
        let results = vec![
            result(&[true, true, true, true, false], later),
            result(&[true, false], now),
        ];

        let progress = UserProgress::from_results(&results).unwrap();
        assert_eq!(progress.total_quizzes_taken, 2);
        assert_eq!(progress.best_score, 80);
        assert!((progress.average_score - 65.0).abs() < f64::EPSILON);
        assert_eq!(progress.last_quiz_at, later);
    }
}
