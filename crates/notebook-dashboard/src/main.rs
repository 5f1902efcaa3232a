//! notebook-dashboard: command-line dashboard for the notebook JSON API.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use notebook_core::defaults::API_URL;
use notebook_dashboard::{render, ClientError, NotebookClient};

#[derive(Parser)]
#[command(name = "notebook-dashboard")]
#[command(author, version, about = "Browse and edit notes through the notebook API")]
#[command(propagate_version = true)]
struct Cli {
    /// Base URL of the notebook API
    #[arg(long, global = true, env = "NOTEBOOK_API_URL", default_value = API_URL)]
    api_url: String,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show every note with its comments (default)
    Show,

    /// Add a note
    Add {
        /// Note title (must be unique)
        #[arg(short, long)]
        title: String,

        /// Note content
        #[arg(short, long)]
        content: String,
    },

    /// Search titles, contents, and comments
    Search {
        /// Case-sensitive substring
        query: String,
    },

    /// Comment on a note
    Comment {
        /// Note id
        note_id: i64,

        /// Comment text
        content: String,
    },

    /// Delete a note and its comments
    Delete {
        /// Note id
        note_id: i64,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) if e.is_connect() => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<(), ClientError> {
    let client = NotebookClient::new(cli.api_url)?;

    match cli.command.unwrap_or(Commands::Show) {
        Commands::Show => {
            let notes = client.list_notes().await?;
            print!("{}", render::all_notes(&notes));
        }
        Commands::Add { title, content } => {
            let created = client.create_note(&title, &content).await?;
            println!("{}", created.message);
        }
        Commands::Search { query } => {
            let notes = client.search(&query).await?;
            print!("{}", render::search_results(&notes));
        }
        Commands::Comment { note_id, content } => {
            client.add_comment(note_id, &content).await?;
            println!("Comment added!");
        }
        Commands::Delete { note_id } => {
            client.delete_note(note_id).await?;
            println!("Note deleted!");
        }
    }

    Ok(())
}
