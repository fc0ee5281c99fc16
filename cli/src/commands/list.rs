//! LIST command - List notes, optionally filtered locally.

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use notes_core::{CategoryFilter, Note, NoteFilter};
use serde::Serialize;

use super::{HumanReadable, format_timestamp, output, truncate};
use crate::client::NotesClient;

/// Arguments for the list command.
#[derive(Args)]
pub struct ListArgs {
    /// Only show notes whose title or content contains this text (case-insensitive)
    #[arg(short, long, default_value = "")]
    pub search: String,

    /// Only show notes in this category (Work, Personal, Ideas, Others, or All)
    #[arg(short, long, default_value = "All")]
    pub category: CategoryFilter,
}

/// Filtered list, serialized as a plain array.
#[derive(Debug, Serialize)]
#[serde(transparent)]
pub struct NoteList(pub Vec<Note>);

impl HumanReadable for NoteList {
    fn print_human(&self) {
        println!("{}", "Notes".green().bold());
        println!("{}", "=".repeat(80));
        println!();

        if self.0.is_empty() {
            println!("  {}", "(No notes)".dimmed());
            return;
        }

        for note in &self.0 {
            println!(
                "  {} {}",
                note.title.bold(),
                format!("[{}]", note.category).dimmed()
            );
            println!("    {} {}", "ID:".cyan(), note.id);
            println!("    {}", truncate(&note.content.replace('\n', " "), 72));
            println!(
                "    {} {}",
                "Created:".cyan(),
                format_timestamp(&note.created_at)
            );
            println!();
        }

        println!("  {} {}", "Total:".cyan(), self.0.len());
    }
}

/// Execute the list command.
pub async fn execute(client: &NotesClient, human: bool, args: ListArgs) -> Result<()> {
    let notes = client.list().await?;

    let filter = NoteFilter::new(args.search, args.category);
    let visible = NoteList(filter.apply(&notes).into_iter().cloned().collect());

    output(&visible, human)
}
