use std::sync::Arc;

use services::HistoryService;
use storage::repository::Storage;

pub async fn execute(storage: &Storage, limit: usize) -> Result<(), Box<dyn std::error::Error>> {
    let service = HistoryService::new(Arc::clone(&storage.history));

    let Some(progress) = service.progress().await? else {
        println!("No quizzes taken yet.");
        return Ok(());
    };

    for result in service.recent(limit).await? {
        println!(
            "{}  {:>3}%  {}/{}  {}",
            result.completed_at().format("%Y-%m-%d %H:%M"),
            result.score_percent(),
            result.correct_count(),
            result.total_questions(),
            result.performance()
        );
    }

    println!();
    println!("Quizzes taken: {}", progress.total_quizzes_taken);
    println!("Average score: {:.1}%", progress.average_score);
    println!("Best score:    {}%", progress.best_score);
    println!(
        "Last quiz:     {}",
        progress.last_quiz_at.format("%Y-%m-%d %H:%M")
    );
    Ok(())
}
