//! Server-rendered HTML page.
//!
//! A second consumer of the same `NoteStore` as the JSON API:
//! - GET / - Add form and note list (optional `?q=` and `?category=` filters)
//! - POST /add - Create a note from a form post, then redirect to `/`
//! - POST /delete/{id} - Delete a note, then redirect to `/`

use std::fmt::Write as _;

use axum::{
    Form, Router,
    extract::{Path, Query, State, rejection::FormRejection},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    routing::{get, post},
};
use serde::Deserialize;

use notes_core::{
    Category, CategoryFilter, NewNoteInput, Note, NoteFilter, NoteId, Validated, validate_new,
};
use notes_store::StoreError;

use crate::error::{FALLBACK_MESSAGE, NOT_FOUND_MESSAGE};
use crate::state::AppState;

/// Query parameters for GET /.
#[derive(Debug, Default, Deserialize)]
pub struct PageParams {
    #[serde(default)]
    pub q: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
}

impl PageParams {
    fn filter(&self) -> NoteFilter {
        let category = self
            .category
            .as_deref()
            .and_then(|c| c.parse().ok())
            .unwrap_or(CategoryFilter::All);
        NoteFilter::new(self.q.clone().unwrap_or_default(), category)
    }
}

/// Escape text for inclusion in HTML element content or attribute values.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Render the full page.
pub fn render_page(notes: &[Note], filter: &NoteFilter, error: Option<&str>) -> String {
    let mut html = String::from(
        "<!doctype html>\n<html>\n<head><meta charset=\"utf-8\"><title>Notes</title></head>\n<body>\n<h1>Notes</h1>\n",
    );

    if let Some(message) = error {
        let _ = writeln!(html, "<p class=\"error\">{}</p>", escape_html(message));
    }

    html.push_str("<form method=\"POST\" action=\"/add\">\n");
    html.push_str("  <input name=\"title\" placeholder=\"Title\" required />\n");
    html.push_str("  <input name=\"content\" placeholder=\"Content\" required />\n");
    html.push_str("  <select name=\"category\">\n");
    for category in Category::ALL {
        let selected = if category == Category::default() {
            " selected"
        } else {
            ""
        };
        let _ = writeln!(
            html,
            "    <option value=\"{0}\"{1}>{0}</option>",
            category, selected
        );
    }
    html.push_str("  </select>\n  <button type=\"submit\">Add Note</button>\n</form>\n");

    let _ = writeln!(
        html,
        "<form method=\"GET\" action=\"/\">\n  <input name=\"q\" value=\"{}\" placeholder=\"Search\" />\n  <input name=\"category\" value=\"{}\" />\n  <button type=\"submit\">Filter</button>\n</form>",
        escape_html(&filter.query),
        filter.category
    );

    html.push_str("<ul>\n");
    for note in filter.apply(notes) {
        let _ = writeln!(
            html,
            "  <li><strong>{}</strong> [{}]: {}\n    <form method=\"POST\" action=\"/delete/{}\" style=\"display:inline\"><button type=\"submit\">Delete</button></form>\n  </li>",
            escape_html(&note.title),
            note.category,
            escape_html(&note.content),
            note.id
        );
    }
    html.push_str("</ul>\n</body>\n</html>\n");

    html
}

fn error_page(status: StatusCode, message: &str) -> Response {
    let body = format!(
        "<!doctype html>\n<html><body><h1>{}</h1><p>{}</p><p><a href=\"/\">Back</a></p></body></html>\n",
        status.as_u16(),
        escape_html(message)
    );
    (status, Html(body)).into_response()
}

fn store_failure(e: StoreError) -> Response {
    tracing::error!(error = %e, "Page request failed");
    error_page(StatusCode::INTERNAL_SERVER_ERROR, FALLBACK_MESSAGE)
}

/// GET / - Render the page.
async fn index(State(state): State<AppState>, Query(params): Query<PageParams>) -> Response {
    match state.store().list().await {
        Ok(notes) => Html(render_page(&notes, &params.filter(), None)).into_response(),
        Err(e) => store_failure(e),
    }
}

/// POST /add - Create a note from form fields.
async fn add(
    State(state): State<AppState>,
    form: Result<Form<NewNoteInput>, FormRejection>,
) -> Response {
    let input = match form {
        Ok(Form(input)) => input,
        Err(rejection) => return error_page(rejection.status(), &rejection.body_text()),
    };

    let new_note = match validate_new(input) {
        Validated::Ok(note) => note,
        Validated::Invalid(e) => {
            // Re-render with the message so the user sees why nothing was added.
            return match state.store().list().await {
                Ok(notes) => (
                    StatusCode::BAD_REQUEST,
                    Html(render_page(&notes, &NoteFilter::default(), Some(&e.to_string()))),
                )
                    .into_response(),
                Err(e) => store_failure(e),
            };
        }
    };

    match state.store().create(new_note).await {
        Ok(note) => {
            tracing::info!(note_id = %note.id, "Note created from page");
            Redirect::to("/").into_response()
        }
        Err(e) => store_failure(e),
    }
}

/// POST /delete/{id} - Delete a note.
async fn delete(State(state): State<AppState>, Path(raw_id): Path<String>) -> Response {
    let Ok(id) = raw_id.parse::<NoteId>() else {
        return error_page(StatusCode::NOT_FOUND, NOT_FOUND_MESSAGE);
    };

    match state.store().delete(id).await {
        Ok(()) => {
            tracing::info!(note_id = %id, "Note deleted from page");
            Redirect::to("/").into_response()
        }
        Err(StoreError::NoteNotFound(_)) => error_page(StatusCode::NOT_FOUND, NOT_FOUND_MESSAGE),
        Err(e) => store_failure(e),
    }
}

/// Build page routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(index))
        .route("/add", post(add))
        .route("/delete/{id}", post(delete))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use notes_core::REQUIRED_FIELDS_MESSAGE;

    fn note(title: &str, content: &str) -> Note {
        let now = Utc::now();
        Note {
            id: NoteId::new(),
            title: title.to_string(),
            content: content.to_string(),
            category: Category::Work,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html("<b>\"Tom\" & 'Jerry'</b>"),
            "&lt;b&gt;&quot;Tom&quot; &amp; &#39;Jerry&#39;&lt;/b&gt;"
        );
    }

    #[test]
    fn test_render_page_escapes_notes() {
        let notes = vec![note("<script>", "x & y")];
        let html = render_page(&notes, &NoteFilter::default(), None);
        assert!(html.contains("&lt;script&gt;"));
        assert!(!html.contains("<script>"));
        assert!(html.contains("x &amp; y"));
        assert!(html.contains(&format!("/delete/{}", notes[0].id)));
    }

    #[test]
    fn test_render_page_applies_filter() {
        let notes = vec![note("Shopping", "milk"), note("Report", "numbers")];
        let filter = NoteFilter::new("shop", CategoryFilter::All);
        let html = render_page(&notes, &filter, None);
        assert!(html.contains("Shopping"));
        assert!(!html.contains("<strong>Report</strong>"));
    }

    #[test]
    fn test_render_page_shows_error() {
        let html = render_page(&[], &NoteFilter::default(), Some(REQUIRED_FIELDS_MESSAGE));
        assert!(html.contains("class=\"error\""));
        assert!(html.contains(REQUIRED_FIELDS_MESSAGE));
    }
}
