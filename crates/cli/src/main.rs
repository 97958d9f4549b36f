use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;
mod render;

use commands::GlobalArgs;

#[derive(Parser)]
#[command(name = "sqlchat")]
#[command(about = "Ask questions about a SQLite database in plain language", long_about = None)]
#[command(version)]
struct Cli {
    /// SQLite database file (overrides DB_PATH)
    #[arg(long, global = true)]
    db: Option<PathBuf>,
    /// Model id for the chat-completions API (overrides SQLCHAT_MODEL)
    #[arg(long, global = true)]
    model: Option<String>,
    /// Refuse statements that would modify the database
    #[arg(long, global = true)]
    read_only: bool,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive conversation (default)
    Chat,
    /// Answer a single question and exit
    Ask {
        question: String,
        #[arg(long)]
        json: bool,
    },
    /// Print the schema description sent to the model
    Schema {
        #[arg(long)]
        json: bool,
    },
    /// Run SQL directly against the database
    Query {
        sql: String,
        #[arg(long)]
        json: bool,
    },
    /// Generate insights about the database
    Insights { request: Option<String> },
    /// Start the HTTP API server
    Serve {
        #[arg(short, long, default_value = "37778")]
        port: u16,
        #[arg(short = 'H', long, default_value = "127.0.0.1")]
        host: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let global = GlobalArgs { db: cli.db, model: cli.model, read_only: cli.read_only };

    match cli.command.unwrap_or(Commands::Chat) {
        Commands::Chat => commands::chat::run(&global).await?,
        Commands::Ask { question, json } => commands::ask::run(&global, &question, json).await?,
        Commands::Schema { json } => commands::schema::run(&global, json)?,
        Commands::Query { sql, json } => commands::query::run(&global, &sql, json)?,
        Commands::Insights { request } => {
            commands::insights::run(&global, request.as_deref()).await?;
        },
        Commands::Serve { port, host } => commands::serve::run(&global, port, host).await?,
    }

    Ok(())
}
