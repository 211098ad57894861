/// Aggregated view of quiz progress, useful for UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizProgress {
    pub total: usize,
    pub answered: usize,
    pub remaining: usize,
    pub is_complete: bool,
}

impl QuizProgress {
    /// Share of questions answered, rounded to a whole percent.
    #[must_use]
    pub fn percent_complete(&self) -> u8 {
        if self.total == 0 {
            return 0;
        }
        let pct = (200 * self.answered.min(self.total) + self.total) / (2 * self.total);
        u8::try_from(pct).unwrap_or(100)
    }

    /// 1-based number of the question awaiting an answer, `None` once done.
    #[must_use]
    pub fn current_number(&self) -> Option<usize> {
        (!self.is_complete && self.answered < self.total).then_some(self.answered + 1)
    }
}
