use signs_core::model::QuizResult;
use sqlx::Row;

use super::SqliteRepository;
use super::mapping::{
    i64_from_u64, i64_from_usize, map_answer_row, ser, u8_from_i64, u32_from_i64,
};
use crate::repository::{QuizHistoryRepository, StorageError};

fn conn(e: sqlx::Error) -> StorageError {
    StorageError::Connection(e.to_string())
}

#[async_trait::async_trait]
impl QuizHistoryRepository for SqliteRepository {
    async fn append_result(&self, result: &QuizResult) -> Result<i64, StorageError> {
        let mut tx = self.pool.begin().await.map_err(conn)?;

        let res = sqlx::query(
            r"
                INSERT INTO quiz_results (score_percent, total_questions, completed_at)
                VALUES (?1, ?2, ?3)
            ",
        )
        .bind(i64::from(result.score_percent()))
        .bind(i64::from(result.total_questions()))
        .bind(result.completed_at())
        .execute(&mut *tx)
        .await
        .map_err(conn)?;
        let result_id = res.last_insert_rowid();

        for (position, answer) in result.answers().iter().enumerate() {
            sqlx::query(
                r"
                    INSERT INTO quiz_answers (
                        result_id, position, question_id, selected_option,
                        is_correct, time_spent_ms
                    )
                    VALUES (?1, ?2, ?3, ?4, ?5, ?6)
                ",
            )
            .bind(result_id)
            .bind(i64_from_usize("position", position)?)
            .bind(answer.question_id().as_str())
            .bind(i64_from_usize("selected_option", answer.selected_option())?)
            .bind(answer.is_correct())
            .bind(i64_from_u64("time_spent_ms", answer.time_spent_ms())?)
            .execute(&mut *tx)
            .await
            .map_err(conn)?;
        }

        tx.commit().await.map_err(conn)?;
        Ok(result_id)
    }

    async fn list_results(&self) -> Result<Vec<QuizResult>, StorageError> {
        let rows = sqlx::query(
            r"
                SELECT id, score_percent, total_questions, completed_at
                FROM quiz_results
                ORDER BY id ASC
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(conn)?;

        let answer_rows = sqlx::query(
            r"
                SELECT result_id, question_id, selected_option, is_correct, time_spent_ms
                FROM quiz_answers
                ORDER BY result_id ASC, position ASC
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(conn)?;

        let mut answers = answer_rows.iter().peekable();
        let mut out = Vec::with_capacity(rows.len());
        for row in rows {
            let id: i64 = row.try_get("id").map_err(ser)?;
            let score = u8_from_i64("score_percent", row.try_get("score_percent").map_err(ser)?)?;
            let total =
                u32_from_i64("total_questions", row.try_get("total_questions").map_err(ser)?)?;
            let completed_at = row.try_get("completed_at").map_err(ser)?;

            let mut result_answers = Vec::new();
            while let Some(answer) = answers.next_if(|a| {
                a.try_get::<i64, _>("result_id").is_ok_and(|result_id| result_id == id)
            }) {
                result_answers.push(map_answer_row(answer)?);
            }

            out.push(
                QuizResult::from_persisted(score, total, result_answers, completed_at)
                    .map_err(ser)?,
            );
        }

        Ok(out)
    }
}
