//! SHELL command - Interactive single-view client.
//!
//! Each input line becomes an [`Action`] for the view state; the returned
//! effect is run against the server and its outcome fed back as the next
//! action until nothing is left to do. The list is re-fetched after every
//! successful change.

use std::io::{BufRead, Write};

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use notes_core::{Category, CategoryFilter, NoteId};

use crate::client::NotesClient;
use crate::render::{render, status_line};
use crate::view::{Action, Effect, ViewState};

/// Arguments for the shell command.
#[derive(Args)]
pub struct ShellArgs {}

const HELP: &str = "\
Commands:
  title <text>        set the form title
  content <text>      set the form content
  category <name>     set the form category (Work, Personal, Ideas, Others, none)
  save                add the note, or update the one being edited
  clear               empty the form and leave edit mode
  edit <n>            load note n (as listed) into the form
  delete <n>          delete note n (asks for confirmation)
  yes | no            answer a delete confirmation
  search [text]       filter by text in title or content (empty clears)
  filter <name>       filter by category (All, Work, Personal, Ideas, Others)
  retry | refresh     fetch the note list again
  theme               toggle light/dark colours
  show                redraw
  help                this text
  quit                leave";

/// A parsed input line.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Act(Action),
    Show,
    Help,
    Quit,
}

/// Resolve a 1-based position in the visible list, or an id, to a note id.
fn resolve_note(arg: &str, state: &ViewState) -> Result<NoteId, String> {
    let arg = arg.trim();
    if let Ok(n) = arg.parse::<usize>() {
        return state
            .visible_notes()
            .get(n.wrapping_sub(1))
            .map(|note| note.id)
            .ok_or_else(|| format!("no note number {}", n));
    }
    arg.parse::<NoteId>()
        .map_err(|_| format!("'{}' is neither a list number nor a note id", arg))
}

/// Parse one input line against the current view.
pub fn parse_command(line: &str, state: &ViewState) -> Result<Command, String> {
    let line = line.trim();
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    let command = match word.to_lowercase().as_str() {
        "" | "show" => Command::Show,
        "help" | "?" => Command::Help,
        "quit" | "exit" | "q" => Command::Quit,
        "title" => Command::Act(Action::SetTitle(rest.to_string())),
        "content" => Command::Act(Action::SetContent(rest.to_string())),
        "category" => {
            let category = if rest.is_empty() || rest.eq_ignore_ascii_case("none") {
                None
            } else {
                Some(rest.parse::<Category>().map_err(|e| e.to_string())?)
            };
            Command::Act(Action::SetCategory(category))
        }
        "save" | "submit" => Command::Act(Action::Submit),
        "clear" => Command::Act(Action::ClearForm),
        "edit" => Command::Act(Action::Edit(resolve_note(rest, state)?)),
        "delete" | "rm" => Command::Act(Action::RequestDelete(resolve_note(rest, state)?)),
        "yes" | "y" => Command::Act(Action::ConfirmDelete),
        "no" | "n" => Command::Act(Action::CancelDelete),
        "search" => Command::Act(Action::SetQuery(rest.to_string())),
        "filter" => {
            let filter = if rest.is_empty() {
                CategoryFilter::All
            } else {
                rest.parse::<CategoryFilter>().map_err(|e| e.to_string())?
            };
            Command::Act(Action::SetCategoryFilter(filter))
        }
        "retry" | "refresh" => Command::Act(Action::Retry),
        "theme" => Command::Act(Action::ToggleTheme),
        other => return Err(format!("unknown command '{}' (type 'help')", other)),
    };

    Ok(command)
}

/// Perform an effect and report its outcome as the next action.
async fn run_effect(client: &NotesClient, effect: Effect) -> Option<Action> {
    match effect {
        Effect::None => None,
        Effect::Fetch => Some(match client.list().await {
            Ok(notes) => Action::Loaded(notes),
            Err(e) => Action::LoadFailed(e.user_message()),
        }),
        Effect::Create(body) => Some(match client.create(&body).await {
            Ok(_) => Action::Saved,
            Err(e) => Action::SaveFailed(e.user_message()),
        }),
        Effect::Update(id, body) => Some(match client.update(id, &body).await {
            Ok(_) => Action::Saved,
            Err(e) => Action::SaveFailed(e.user_message()),
        }),
        Effect::Delete(id) => Some(match client.delete(id).await {
            Ok(_) => Action::Deleted(id),
            Err(e) => Action::DeleteFailed(e.user_message()),
        }),
    }
}

/// Apply an action and every follow-up it triggers.
async fn dispatch(client: &NotesClient, state: &mut ViewState, action: Action) {
    let mut next = Some(action);
    while let Some(action) = next.take() {
        let effect = state.update(action);
        if effect != Effect::None {
            if let Some(status) = status_line(state) {
                println!("{}", status.dimmed());
            }
        }
        next = run_effect(client, effect).await;
    }
}

/// Execute the shell command.
pub async fn execute(client: &NotesClient, _args: ShellArgs) -> Result<()> {
    let mut state = ViewState::new();
    dispatch(client, &mut state, Action::Load).await;
    print!("{}", render(&state));

    let stdin = std::io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("{} ", ">".bold());
        std::io::stdout().flush()?;

        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;

        match parse_command(&line, &state) {
            Ok(Command::Quit) => break,
            Ok(Command::Help) => println!("{}", HELP),
            Ok(Command::Show) => print!("{}", render(&state)),
            Ok(Command::Act(action)) => {
                dispatch(client, &mut state, action).await;
                print!("{}", render(&state));
            }
            Err(message) => eprintln!("{} {}", "Error:".red().bold(), message),
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use notes_core::Note;

    fn state_with(titles: &[&str]) -> ViewState {
        let now = Utc::now();
        let notes = titles
            .iter()
            .map(|t| Note {
                id: NoteId::new(),
                title: t.to_string(),
                content: "body".to_string(),
                category: Category::Others,
                created_at: now,
                updated_at: now,
            })
            .collect();
        let mut state = ViewState::new();
        state.update(Action::Loaded(notes));
        state
    }

    #[test]
    fn parses_form_commands() {
        let state = ViewState::new();
        assert_eq!(
            parse_command("title Weekly plan", &state),
            Ok(Command::Act(Action::SetTitle("Weekly plan".to_string())))
        );
        assert_eq!(
            parse_command("category work", &state),
            Ok(Command::Act(Action::SetCategory(Some(Category::Work))))
        );
        assert_eq!(
            parse_command("category none", &state),
            Ok(Command::Act(Action::SetCategory(None)))
        );
        assert_eq!(parse_command("save", &state), Ok(Command::Act(Action::Submit)));
        assert_eq!(parse_command("", &state), Ok(Command::Show));
        assert_eq!(parse_command("quit", &state), Ok(Command::Quit));
    }

    #[test]
    fn resolves_list_positions_against_visible_notes() {
        let mut state = state_with(&["Shopping", "Report"]);
        let report = state.notes[1].id;

        assert_eq!(
            parse_command("edit 2", &state),
            Ok(Command::Act(Action::Edit(report)))
        );

        state.update(Action::SetQuery("rep".to_string()));
        assert_eq!(
            parse_command("delete 1", &state),
            Ok(Command::Act(Action::RequestDelete(report)))
        );
        assert!(parse_command("delete 2", &state).is_err());
        assert!(parse_command("delete 0", &state).is_err());
    }

    #[test]
    fn accepts_note_ids() {
        let state = ViewState::new();
        let id = NoteId::new();
        assert_eq!(
            parse_command(&format!("edit {}", id), &state),
            Ok(Command::Act(Action::Edit(id)))
        );
    }

    #[test]
    fn parses_filters() {
        let state = ViewState::new();
        assert_eq!(
            parse_command("filter Ideas", &state),
            Ok(Command::Act(Action::SetCategoryFilter(CategoryFilter::Only(
                Category::Ideas
            ))))
        );
        assert_eq!(
            parse_command("filter", &state),
            Ok(Command::Act(Action::SetCategoryFilter(CategoryFilter::All)))
        );
        assert_eq!(
            parse_command("search", &state),
            Ok(Command::Act(Action::SetQuery(String::new())))
        );
        assert!(parse_command("filter Chores", &state).is_err());
    }

    #[test]
    fn rejects_unknown_commands() {
        let state = ViewState::new();
        assert!(parse_command("launch", &state).is_err());
    }
}
