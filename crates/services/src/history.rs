use std::sync::Arc;

use signs_core::model::{QuizResult, UserProgress};
use storage::repository::QuizHistoryRepository;

use crate::error::HistoryError;

/// Read side of the quiz history: past results and aggregate progress.
#[derive(Clone)]
pub struct HistoryService {
    history: Arc<dyn QuizHistoryRepository>,
}

impl HistoryService {
    #[must_use]
    pub fn new(history: Arc<dyn QuizHistoryRepository>) -> Self {
        Self { history }
    }

    /// All recorded results, oldest first.
    ///
    /// # Errors
    ///
    /// Returns `HistoryError::Storage` if the history cannot be read.
    pub async fn results(&self) -> Result<Vec<QuizResult>, HistoryError> {
        Ok(self.history.list_results().await?)
    }

    /// The `limit` most recent results, newest first.
    ///
    /// # Errors
    ///
    /// Returns `HistoryError::Storage` if the history cannot be read.
    pub async fn recent(&self, limit: usize) -> Result<Vec<QuizResult>, HistoryError> {
        let mut results = self.results().await?;
        results.reverse();
        results.truncate(limit);
        Ok(results)
    }

    /// Aggregate progress, or `None` before the first completed quiz.
    ///
    /// # Errors
    ///
    /// Returns `HistoryError::Storage` if the history cannot be read.
    pub async fn progress(&self) -> Result<Option<UserProgress>, HistoryError> {
        let results = self.results().await?;
        Ok(UserProgress::from_results(&results))
    }
}
