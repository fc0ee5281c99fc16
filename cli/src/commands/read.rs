//! READ command - Show a single note.

use anyhow::Result;
use clap::Args;
use notes_core::NoteId;

use super::output;
use crate::client::NotesClient;

/// Arguments for the read command.
#[derive(Args)]
pub struct ReadArgs {
    /// Note ID to read
    pub note_id: NoteId,
}

/// Execute the read command.
pub async fn execute(client: &NotesClient, human: bool, args: ReadArgs) -> Result<()> {
    let note = client.get(args.note_id).await?;
    output(&note, human)
}
