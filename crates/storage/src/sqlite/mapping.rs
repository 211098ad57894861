use signs_core::model::{AnswerRecord, QuestionId};
use sqlx::Row;

use crate::repository::StorageError;

pub(crate) fn ser<E: core::fmt::Display>(e: E) -> StorageError {
    StorageError::Serialization(e.to_string())
}

pub(crate) fn u32_from_i64(field: &'static str, v: i64) -> Result<u32, StorageError> {
    u32::try_from(v).map_err(|_| StorageError::Serialization(format!("invalid {field}: {v}")))
}

pub(crate) fn u8_from_i64(field: &'static str, v: i64) -> Result<u8, StorageError> {
    u8::try_from(v).map_err(|_| StorageError::Serialization(format!("invalid {field}: {v}")))
}

pub(crate) fn i64_from_u64(field: &'static str, v: u64) -> Result<i64, StorageError> {
    i64::try_from(v).map_err(|_| StorageError::Serialization(format!("{field} overflow")))
}

pub(crate) fn i64_from_usize(field: &'static str, v: usize) -> Result<i64, StorageError> {
    i64::try_from(v).map_err(|_| StorageError::Serialization(format!("{field} overflow")))
}

pub(crate) fn map_answer_row(row: &sqlx::sqlite::SqliteRow) -> Result<AnswerRecord, StorageError> {
    let question_id: String = row.try_get("question_id").map_err(ser)?;
    let selected: i64 = row.try_get("selected_option").map_err(ser)?;
    let selected = usize::try_from(selected)
        .map_err(|_| StorageError::Serialization(format!("invalid selected_option: {selected}")))?;
    let is_correct: bool = row.try_get("is_correct").map_err(ser)?;
    let time_spent: i64 = row.try_get("time_spent_ms").map_err(ser)?;
    let time_spent = u64::try_from(time_spent)
        .map_err(|_| StorageError::Serialization(format!("invalid time_spent_ms: {time_spent}")))?;

    AnswerRecord::from_persisted(QuestionId::new(question_id), selected, is_correct, time_spent)
        .map_err(ser)
}
