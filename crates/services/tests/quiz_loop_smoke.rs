use std::sync::{Arc, Mutex};

use rand::SeedableRng;
use rand::rngs::StdRng;
use services::{QuizEngine, QuizError, QuizState};
use signs_core::Catalog;
use signs_core::model::{CategoryId, QuizResult};
use signs_core::time::fixed_clock;
use storage::repository::{InMemoryRepository, QuizHistoryRepository};

fn build_engine(repo: &InMemoryRepository, seed: u64) -> (QuizEngine, Arc<Mutex<Vec<QuizResult>>>) {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    let engine = QuizEngine::new(
        Catalog::builtin().questions().to_vec(),
        Arc::new(repo.clone()),
    )
    .with_clock(fixed_clock())
    .with_rng(StdRng::seed_from_u64(seed))
    .with_completion(move |result| sink.lock().unwrap().push(result.clone()));
    (engine, seen)
}

#[tokio::test]
async fn quiz_loop_persists_result_and_notifies_once() {
    let repo = InMemoryRepository::new();
    let (mut engine, seen) = build_engine(&repo, 5);

    engine.initialize(5).unwrap();
    assert_eq!(engine.state(), Some(QuizState::NotStarted));
    engine.start().unwrap();

    let mut answered = 0;
    while let Some(question) = engine.current_question() {
        let pick = question.correct_option();
        let step = engine.answer(pick).await.unwrap();
        answered += 1;
        if !step.is_complete {
            let session = engine.session().unwrap();
            assert_eq!(session.answers().len(), session.current_index());
        }
    }

    assert_eq!(answered, 5);
    assert_eq!(engine.state(), Some(QuizState::Completed));
    assert!(engine.result_id().is_some());

    let notified = seen.lock().unwrap().clone();
    assert_eq!(notified.len(), 1);
    assert_eq!(notified[0].total_questions(), 5);
    assert_eq!(notified[0].score_percent(), 100);

    let stored = repo.list_results().await.unwrap();
    assert_eq!(stored, notified);

    assert!(matches!(
        engine.answer(0).await,
        Err(QuizError::InvalidTransition { .. })
    ));
    assert_eq!(seen.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn out_of_range_answer_is_rejected_without_side_effects() {
    let repo = InMemoryRepository::new();
    let (mut engine, seen) = build_engine(&repo, 9);
    engine.initialize(1).unwrap();
    engine.start().unwrap();

    let err = engine.answer(5).await.unwrap_err();
    assert!(matches!(err, QuizError::Answer(_)));
    let session = engine.session().unwrap();
    assert!(session.answers().is_empty());
    assert_eq!(session.current_index(), 0);
    assert_eq!(session.state(), QuizState::InProgress);
    assert!(seen.lock().unwrap().is_empty());
    assert!(repo.list_results().await.unwrap().is_empty());
}

#[tokio::test]
async fn restart_after_completion_resamples_same_length() {
    let repo = InMemoryRepository::new();
    let (mut engine, seen) = build_engine(&repo, 21);
    engine.initialize(3).unwrap();
    engine.start().unwrap();
    for _ in 0..3 {
        engine.answer(0).await.unwrap();
    }
    assert_eq!(engine.state(), Some(QuizState::Completed));

    engine.restart().unwrap();
    assert_eq!(engine.state(), Some(QuizState::NotStarted));
    assert_eq!(engine.result_id(), None);
    let session = engine.session().unwrap();
    assert_eq!(session.questions().len(), 3);
    assert!(session.answers().is_empty());

    engine.start().unwrap();
    for _ in 0..3 {
        engine.answer(1).await.unwrap();
    }
    assert_eq!(seen.lock().unwrap().len(), 2);
    assert_eq!(repo.list_results().await.unwrap().len(), 2);
}

#[tokio::test]
async fn empty_pool_never_starts() {
    let repo = InMemoryRepository::new();
    let mut engine = QuizEngine::new(Vec::new(), Arc::new(repo.clone()))
        .with_rng(StdRng::seed_from_u64(1));

    engine.initialize(5).unwrap();
    assert!(engine.session().unwrap().questions().is_empty());
    assert!(matches!(engine.start(), Err(QuizError::Empty)));
    assert_eq!(engine.state(), Some(QuizState::NotStarted));
    assert!(repo.list_results().await.unwrap().is_empty());
}

#[tokio::test]
async fn category_pool_limits_questions() {
    let repo = InMemoryRepository::new();
    let pool = Catalog::builtin().questions_in_category(&CategoryId::new("regulatory"));
    let mut engine =
        QuizEngine::new(pool, Arc::new(repo)).with_rng(StdRng::seed_from_u64(3));

    engine.initialize(5).unwrap();
    let session = engine.session().unwrap();
    assert_eq!(session.questions().len(), 2);
    assert!(
        session
            .questions()
            .iter()
            .all(|q| ["q1", "q3"].contains(&q.id().as_str()))
    );
}
