//! Terminal front-end: take the quiz, browse the sign catalog, review history.

use clap::{Parser, Subcommand};
use signs_core::model::{SignColor, SignShape};

mod commands;
mod db;

#[derive(Parser)]
#[command(name = "signs", version, about = "Traffic signs catalog and quiz")]
struct Cli {
    /// SQLite database holding the quiz history
    #[arg(long, global = true, env = "SIGNS_DB_URL", default_value = "sqlite://signs.sqlite3")]
    db: String,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Take a multiple-choice quiz (default)
    Quiz {
        /// Number of questions to draw
        #[arg(long, default_value_t = 5)]
        count: usize,

        /// Only ask about signs in this category
        #[arg(long)]
        category: Option<String>,

        /// Seed for a reproducible question order
        #[arg(long)]
        seed: Option<u64>,
    },

    /// List signs, optionally filtered
    Signs {
        #[arg(long)]
        category: Option<String>,

        #[arg(long)]
        shape: Option<SignShape>,

        #[arg(long)]
        color: Option<SignColor>,

        /// Keyword to search names, descriptions and keywords
        #[arg(long, short)]
        query: Option<String>,
    },

    /// List sign categories
    Categories,

    /// Show past quiz results and overall progress
    History {
        /// How many recent results to show
        #[arg(long, default_value_t = 10)]
        limit: usize,
    },
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let command = cli.command.unwrap_or(Commands::Quiz {
        count: 5,
        category: None,
        seed: None,
    });

    match command {
        Commands::Quiz {
            count,
            category,
            seed,
        } => {
            let storage = db::open(&cli.db).await?;
            commands::quiz::execute(&storage, count, category, seed).await
        }
        Commands::Signs {
            category,
            shape,
            color,
            query,
        } => commands::signs::execute(category, shape, color, query),
        Commands::Categories => commands::signs::categories(),
        Commands::History { limit } => {
            let storage = db::open(&cli.db).await?;
            commands::history::execute(&storage, limit).await
        }
    }
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn,services=info")),
        )
        .init();

    let cli = Cli::parse();
    if let Err(err) = run(cli).await {
        eprintln!("{err}");
        std::process::exit(2);
    }
}
