//! HTTP client for the notes API.

use notes_core::{Category, Note, NoteId};
use reqwest::StatusCode;
use serde::{Deserialize, Serialize, de::DeserializeOwned};

/// Common error type for HTTP requests.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Server error ({status}): {message}")]
    Server { status: u16, message: String },
}

impl CliError {
    /// Message suitable for showing to the user: the server's own message
    /// when there is one.
    pub fn user_message(&self) -> String {
        match self {
            CliError::Server { message, .. } => message.clone(),
            CliError::Http(e) => e.to_string(),
        }
    }
}

/// Body for create and update requests. Unset fields are omitted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NoteBody {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
}

/// Response from deleting a note.
#[derive(Debug, Deserialize, Serialize)]
pub struct DeleteNoteResponse {
    pub message: String,
    pub id: NoteId,
}

/// Error body returned by the server.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

/// Thin client over `/api/notes`.
#[derive(Debug, Clone)]
pub struct NotesClient {
    http: reqwest::Client,
    base_url: String,
}

impl NotesClient {
    pub fn new(base_url: &str) -> Result<Self, CliError> {
        Ok(Self {
            http: reqwest::Client::builder().build()?,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn notes_url(&self) -> String {
        format!("{}/api/notes", self.base_url)
    }

    fn note_url(&self, id: NoteId) -> String {
        format!("{}/api/notes/{}", self.base_url, id)
    }

    pub async fn list(&self) -> Result<Vec<Note>, CliError> {
        make_request(self.http.get(self.notes_url())).await
    }

    pub async fn get(&self, id: NoteId) -> Result<Note, CliError> {
        make_request(self.http.get(self.note_url(id))).await
    }

    pub async fn create(&self, body: &NoteBody) -> Result<Note, CliError> {
        make_request(self.http.post(self.notes_url()).json(body)).await
    }

    pub async fn update(&self, id: NoteId, body: &NoteBody) -> Result<Note, CliError> {
        make_request(self.http.put(self.note_url(id)).json(body)).await
    }

    pub async fn delete(&self, id: NoteId) -> Result<DeleteNoteResponse, CliError> {
        make_request(self.http.delete(self.note_url(id))).await
    }
}

/// Send a request and decode either the success body or the server's error
/// message.
async fn make_request<T: DeserializeOwned>(request: reqwest::RequestBuilder) -> Result<T, CliError> {
    let response = request.send().await?;
    let status = response.status();

    if status.is_success() {
        return Ok(response.json::<T>().await?);
    }

    let body = response.text().await.unwrap_or_default();
    Err(CliError::Server {
        status: status.as_u16(),
        message: error_message(status, &body),
    })
}

fn error_message(status: StatusCode, body: &str) -> String {
    match serde_json::from_str::<ErrorBody>(body) {
        Ok(parsed) => parsed.message,
        Err(_) if body.trim().is_empty() => status
            .canonical_reason()
            .unwrap_or("request failed")
            .to_string(),
        Err(_) => body.to_string(),
    }
}
