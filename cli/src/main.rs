//! Command-line client for the notes service.
//!
//! This CLI tool provides commands for all note operations:
//! - list: List notes, with local search and category filtering
//! - read: Show one note
//! - create: Create a note
//! - update: Change some fields of a note
//! - delete: Delete a note
//! - shell: Interactive view with a form, filters and delete confirmation
//!
//! Configuration via environment:
//! - NOTES_URL: Base URL of the notes server (default: http://localhost:3000)

mod client;
mod commands;
mod render;
mod view;

use clap::{Parser, Subcommand};

use client::NotesClient;
use commands::{
    create::CreateArgs, delete::DeleteArgs, list::ListArgs, read::ReadArgs, shell::ShellArgs,
    update::UpdateArgs,
};

/// Notes CLI
///
/// Output is JSON by default; pass --human for formatted text.
#[derive(Parser)]
#[command(name = "notes")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Output human-readable formatted text instead of JSON
    #[arg(long, global = true)]
    human: bool,

    /// Notes server URL
    #[arg(
        long,
        env = "NOTES_URL",
        default_value = "http://localhost:3000",
        global = true
    )]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List notes
    List(ListArgs),

    /// Show a single note
    Read(ReadArgs),

    /// Create a new note
    Create(CreateArgs),

    /// Update an existing note
    Update(UpdateArgs),

    /// Delete a note
    Delete(DeleteArgs),

    /// Open the interactive view
    Shell(ShellArgs),
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let client = match NotesClient::new(&cli.url) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let result = match cli.command {
        Commands::List(args) => commands::list::execute(&client, cli.human, args).await,
        Commands::Read(args) => commands::read::execute(&client, cli.human, args).await,
        Commands::Create(args) => commands::create::execute(&client, cli.human, args).await,
        Commands::Update(args) => commands::update::execute(&client, cli.human, args).await,
        Commands::Delete(args) => commands::delete::execute(&client, cli.human, args).await,
        Commands::Shell(args) => commands::shell::execute(&client, args).await,
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
