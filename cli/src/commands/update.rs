//! UPDATE command - Replace some fields of an existing note.

use anyhow::{Result, bail};
use clap::Args;
use colored::Colorize;
use notes_core::{Category, NoteId};

use super::{output, read_content_arg};
use crate::client::{NoteBody, NotesClient};

/// Arguments for the update command.
#[derive(Args)]
pub struct UpdateArgs {
    /// Note ID to update
    pub note_id: NoteId,

    /// New title
    #[arg(short, long)]
    pub title: Option<String>,

    /// New content (use @filename to read from file, or - for stdin)
    #[arg(short, long)]
    pub content: Option<String>,

    /// New category
    #[arg(long)]
    pub category: Option<Category>,
}

/// Execute the update command.
pub async fn execute(client: &NotesClient, human: bool, args: UpdateArgs) -> Result<()> {
    if args.title.is_none() && args.content.is_none() && args.category.is_none() {
        bail!("nothing to update: pass --title, --content or --category");
    }

    let body = NoteBody {
        title: args.title,
        content: args.content.map(read_content_arg).transpose()?,
        category: args.category,
    };

    let note = client.update(args.note_id, &body).await?;

    if human {
        println!("{}", "Note updated successfully!".green().bold());
        println!();
    }
    output(&note, human)
}
