//! View state for the interactive client.
//!
//! All state lives in [`ViewState`]. User input and request outcomes arrive
//! as [`Action`]s; [`ViewState::update`] applies one and returns the
//! [`Effect`] the runtime must perform next. Nothing here touches the
//! network or the terminal.

use notes_core::{
    Category, CategoryFilter, NewNoteInput, Note, NoteFilter, NoteId, Validated, validate_new,
};

use crate::client::NoteBody;

/// Shown when the note list cannot be fetched.
pub const LOAD_FAILED_MESSAGE: &str = "Unable to load notes. Please try again.";

/// Display palette. Has no effect outside rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

/// The note form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft {
    pub title: String,
    pub content: String,
    /// `None` means "not chosen"; submitted as the default category.
    pub category: Option<Category>,
}

impl Draft {
    fn from_note(note: &Note) -> Self {
        Self {
            title: note.title.clone(),
            content: note.content.clone(),
            category: Some(note.category),
        }
    }
}

/// Everything the view knows.
#[derive(Debug, Clone, Default)]
pub struct ViewState {
    /// Last list fetched from the server.
    pub notes: Vec<Note>,
    /// A request is in flight.
    pub loading: bool,
    pub error: Option<String>,
    /// The last fetch failed; offer a retry.
    pub can_retry: bool,
    pub draft: Draft,
    /// Note being edited; `None` means the form creates a new note.
    pub editing: Option<NoteId>,
    pub filter: NoteFilter,
    /// Note awaiting delete confirmation.
    pub confirm_delete: Option<NoteId>,
    pub theme: Theme,
}

/// Something that happened: user input or a request outcome.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Load,
    Retry,
    Loaded(Vec<Note>),
    LoadFailed(String),

    SetTitle(String),
    SetContent(String),
    SetCategory(Option<Category>),
    Edit(NoteId),
    ClearForm,
    Submit,
    Saved,
    SaveFailed(String),

    RequestDelete(NoteId),
    ConfirmDelete,
    CancelDelete,
    Deleted(NoteId),
    DeleteFailed(String),

    SetQuery(String),
    SetCategoryFilter(CategoryFilter),
    ToggleTheme,
}

/// Work the runtime must do after an update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    Fetch,
    Create(NoteBody),
    Update(NoteId, NoteBody),
    Delete(NoteId),
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Notes passing the current search and category filter.
    pub fn visible_notes(&self) -> Vec<&Note> {
        self.filter.apply(&self.notes)
    }

    /// Submit button label.
    pub fn submit_label(&self) -> &'static str {
        if self.loading {
            "Saving..."
        } else if self.editing.is_some() {
            "Update Note"
        } else {
            "Add Note"
        }
    }

    fn start_fetch(&mut self) -> Effect {
        if self.loading {
            return Effect::None;
        }
        self.loading = true;
        Effect::Fetch
    }

    fn reset_form(&mut self) {
        self.draft = Draft::default();
        self.editing = None;
        self.error = None;
    }

    /// Apply one action.
    pub fn update(&mut self, action: Action) -> Effect {
        match action {
            Action::Load | Action::Retry => self.start_fetch(),
            Action::Loaded(notes) => {
                self.notes = notes;
                self.loading = false;
                self.error = None;
                self.can_retry = false;
                Effect::None
            }
            Action::LoadFailed(_) => {
                self.loading = false;
                self.error = Some(LOAD_FAILED_MESSAGE.to_string());
                self.can_retry = true;
                Effect::None
            }

            Action::SetTitle(title) => {
                self.draft.title = title;
                Effect::None
            }
            Action::SetContent(content) => {
                self.draft.content = content;
                Effect::None
            }
            Action::SetCategory(category) => {
                self.draft.category = category;
                Effect::None
            }
            Action::Edit(id) => {
                match self.notes.iter().find(|n| n.id == id) {
                    Some(note) => {
                        self.draft = Draft::from_note(note);
                        self.editing = Some(id);
                        self.error = None;
                    }
                    None => self.error = Some("Note not found".to_string()),
                }
                Effect::None
            }
            Action::ClearForm => {
                self.reset_form();
                Effect::None
            }
            Action::Submit => self.submit(),
            Action::Saved => {
                self.loading = false;
                self.reset_form();
                self.start_fetch()
            }
            Action::SaveFailed(message) => {
                self.loading = false;
                self.error = Some(message);
                Effect::None
            }

            Action::RequestDelete(id) => {
                self.confirm_delete = Some(id);
                Effect::None
            }
            Action::ConfirmDelete => {
                if self.loading {
                    return Effect::None;
                }
                match self.confirm_delete.take() {
                    Some(id) => {
                        self.loading = true;
                        Effect::Delete(id)
                    }
                    None => Effect::None,
                }
            }
            Action::CancelDelete => {
                self.confirm_delete = None;
                Effect::None
            }
            Action::Deleted(id) => {
                self.loading = false;
                if self.editing == Some(id) {
                    self.reset_form();
                }
                self.start_fetch()
            }
            Action::DeleteFailed(message) => {
                self.loading = false;
                self.error = Some(message);
                Effect::None
            }

            Action::SetQuery(query) => {
                self.filter.query = query;
                Effect::None
            }
            Action::SetCategoryFilter(category) => {
                self.filter.category = category;
                Effect::None
            }
            Action::ToggleTheme => {
                self.theme = self.theme.toggled();
                Effect::None
            }
        }
    }

    fn submit(&mut self) -> Effect {
        if self.loading {
            return Effect::None;
        }

        let input = NewNoteInput {
            title: Some(self.draft.title.clone()),
            content: Some(self.draft.content.clone()),
            category: self.draft.category.map(|c| c.to_string()),
        };
        let note = match validate_new(input) {
            Validated::Ok(note) => note,
            Validated::Invalid(e) => {
                self.error = Some(e.to_string());
                return Effect::None;
            }
        };

        let body = NoteBody {
            title: Some(note.title().to_string()),
            content: Some(note.content().to_string()),
            category: Some(note.category()),
        };

        self.loading = true;
        match self.editing {
            Some(id) => Effect::Update(id, body),
            None => Effect::Create(body),
        }
    }
}
