use chrono::Duration;
use signs_core::model::{AnswerRecord, QuestionId, QuizResult};
use signs_core::time::fixed_now;
use storage::repository::{QuizHistoryRepository, Storage};
use storage::sqlite::SqliteRepository;

fn build_result(answers: &[(&str, usize, bool, u64)], minutes: i64) -> QuizResult {
    let answers = answers
        .iter()
        .map(|(id, selected, correct, ms)| {
            AnswerRecord::from_persisted(QuestionId::new(*id), *selected, *correct, *ms).unwrap()
        })
        .collect();
    QuizResult::from_answers(answers, fixed_now() + Duration::minutes(minutes)).unwrap()
}

async fn connect_memory(name: &str) -> SqliteRepository {
    SqliteRepository::connect(&format!("sqlite:file:{name}?mode=memory&cache=shared"))
        .await
        .expect("connect")
}

#[tokio::test]
async fn sqlite_roundtrip_preserves_answers_in_order() {
    let repo = connect_memory("memdb_history_roundtrip").await;
    repo.migrate().await.expect("migrate");

    let first = build_result(
        &[
            ("q3", 2, true, 1_250),
            ("q1", 0, false, 4_000),
            ("q5", 1, true, 900),
        ],
        0,
    );
    let second = build_result(&[("q2", 1, true, 3_100), ("q4", 3, false, 700)], 5);

    let first_id = repo.append_result(&first).await.unwrap();
    let second_id = repo.append_result(&second).await.unwrap();
    assert!(second_id > first_id);

    let listed = repo.list_results().await.unwrap();
    assert_eq!(listed, vec![first, second]);
    assert_eq!(listed[0].score_percent(), 67);
    assert_eq!(listed[0].answers()[1].question_id().as_str(), "q1");
    assert_eq!(listed[1].answers()[0].time_spent_ms(), 3_100);
}

#[tokio::test]
async fn sqlite_history_is_append_only_without_dedup() {
    let repo = connect_memory("memdb_history_dupes").await;
    repo.migrate().await.expect("migrate");

    let result = build_result(&[("q1", 1, true, 10)], 0);
    repo.append_result(&result).await.unwrap();
    repo.append_result(&result).await.unwrap();

    let listed = repo.list_results().await.unwrap();
    assert_eq!(listed.len(), 2);
    assert_eq!(listed[0], listed[1]);
}

#[tokio::test]
async fn migrations_are_idempotent() {
    let repo = connect_memory("memdb_history_migrate").await;
    repo.migrate().await.expect("first migrate");
    repo.migrate().await.expect("second migrate");
    assert!(repo.list_results().await.unwrap().is_empty());
}

#[tokio::test]
async fn storage_sqlite_exposes_history() {
    let storage = Storage::sqlite("sqlite:file:memdb_history_storage?mode=memory&cache=shared")
        .await
        .expect("storage");
    storage
        .history
        .append_result(&build_result(&[("q4", 2, true, 50)], 0))
        .await
        .unwrap();
    let listed = storage.history.list_results().await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].score_percent(), 100);
}
