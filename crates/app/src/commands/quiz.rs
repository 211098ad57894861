use std::sync::Arc;

use rand::SeedableRng;
use rand::rngs::StdRng;
use services::{QuizEngine, QuizError, QuizSession};
use signs_core::Catalog;
use signs_core::model::{AnswerRecord, CategoryId, OPTION_COUNT, option_label};
use signs_core::time::elapsed_millis;
use storage::repository::Storage;
use tokio::io::{AsyncBufReadExt, BufReader};

/// Map `A`-`D` (any case) or `1`-`4` to an option index.
fn parse_choice(input: &str) -> Option<usize> {
    let mut chars = input.trim().chars();
    let c = chars.next()?;
    if chars.next().is_some() {
        return None;
    }
    let index = match c.to_ascii_uppercase() {
        l @ 'A'..='Z' => (l as usize) - ('A' as usize),
        d @ '1'..='9' => (d as usize) - ('1' as usize),
        _ => return None,
    };
    (index < OPTION_COUNT).then_some(index)
}

/// Answer the current question. If saving the finished quiz fails, the save
/// is retried once before giving up.
async fn submit(engine: &mut QuizEngine, choice: usize) -> Result<bool, QuizError> {
    match engine.answer(choice).await {
        Ok(step) => Ok(step.answer.is_correct()),
        Err(QuizError::Storage(err)) if engine.result().is_some() => {
            tracing::warn!(error = %err, "saving quiz result failed, retrying");
            eprintln!("Could not save your result ({err}); retrying.");
            engine.finalize().await?;
            Ok(engine
                .session()
                .and_then(|s| s.answers().last())
                .is_some_and(AnswerRecord::is_correct))
        }
        Err(err) => Err(err),
    }
}

pub async fn execute(
    storage: &Storage,
    count: usize,
    category: Option<String>,
    seed: Option<u64>,
) -> Result<(), Box<dyn std::error::Error>> {
    let catalog = Catalog::builtin();
    let pool = match category {
        Some(raw) => {
            let id: CategoryId = raw.parse()?;
            if catalog.category(&id).is_none() {
                return Err(format!("unknown category: {id}").into());
            }
            catalog.questions_in_category(&id)
        }
        None => catalog.questions().to_vec(),
    };

    let mut engine = QuizEngine::new(pool, Arc::clone(&storage.history)).with_completion(|r| {
        tracing::debug!(score = r.score_percent(), "completion hook fired");
    });
    if let Some(seed) = seed {
        engine = engine.with_rng(StdRng::seed_from_u64(seed));
    }

    engine.initialize(count)?;
    match engine.start() {
        Err(QuizError::Empty) => {
            println!("No questions available for this quiz.");
            return Ok(());
        }
        other => other?,
    }

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(question) = engine.current_question().cloned() {
        let Some(progress) = engine.progress() else {
            break;
        };
        let Some(number) = progress.current_number() else {
            break;
        };
        println!();
        println!(
            "Question {number} of {} ({}% complete)",
            progress.total,
            progress.percent_complete()
        );
        if let Some(sign) = catalog.sign(question.sign_id()) {
            println!("[sign: {} ({}, {})]", sign.name, sign.shape, sign.color);
        }
        println!("{}", question.prompt());
        for (i, option) in question.options().iter().enumerate() {
            let label = option_label(i).unwrap_or('?');
            println!("  {label}) {option}");
        }

        let Some(line) = lines.next_line().await? else {
            println!("Quiz abandoned; nothing was saved.");
            return Ok(());
        };
        let Some(choice) = parse_choice(&line) else {
            println!("Please answer with A-D or 1-4.");
            continue;
        };

        if submit(&mut engine, choice).await? {
            println!("Correct! {}", question.explanation());
        } else {
            println!(
                "Incorrect. The answer is: {}. {}",
                question.correct_text(),
                question.explanation()
            );
        }
    }

    if let Some(result) = engine.result() {
        println!();
        println!("Quiz complete! Your score: {}%", result.score_percent());
        println!(
            "Correct answers: {}/{}",
            result.correct_count(),
            result.total_questions()
        );
        #[allow(clippy::cast_precision_loss)]
        let avg_secs = result.average_time_ms() as f64 / 1000.0;
        println!("Avg. time per question: {avg_secs:.1}s");
        if let Some(started) = engine.session().and_then(QuizSession::started_at) {
            #[allow(clippy::cast_precision_loss)]
            let total_secs = elapsed_millis(started, result.completed_at()) as f64 / 1000.0;
            println!("Total time: {total_secs:.1}s");
        }
        println!("Performance: {}", result.performance());
    }
    Ok(())
}
