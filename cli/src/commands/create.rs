//! CREATE command - Create a new note.

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use notes_core::Category;

use super::{output, read_content_arg};
use crate::client::{NoteBody, NotesClient};

/// Arguments for the create command.
#[derive(Args)]
pub struct CreateArgs {
    /// Note title
    pub title: String,

    /// Note content (use @filename to read from file, or - for stdin)
    #[arg(short, long)]
    pub content: String,

    /// Category (Work, Personal, Ideas, Others); defaults to Others
    #[arg(long)]
    pub category: Option<Category>,
}

/// Execute the create command.
pub async fn execute(client: &NotesClient, human: bool, args: CreateArgs) -> Result<()> {
    let body = NoteBody {
        title: Some(args.title),
        content: Some(read_content_arg(args.content)?),
        category: Some(args.category.unwrap_or_default()),
    };

    let note = client.create(&body).await?;

    if human {
        println!("{}", "Note created successfully!".green().bold());
        println!();
    }
    output(&note, human)
}
