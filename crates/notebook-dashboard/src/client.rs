//! HTTP client for the notebook JSON API.

use std::time::Duration;

use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::debug;

use notebook_core::defaults::CLIENT_TIMEOUT_SECS;
use notebook_core::{CommentCreated, ErrorBody, Note, NoteCreated, NoteDeleted};

/// Failures talking to the API, split by what the user can do about them.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Nothing is listening at the configured URL.
    #[error("Unable to connect to the backend server. Please ensure that the API server is running at {url}.")]
    Connect { url: String },

    /// The API answered with a non-2xx status.
    #[error("{detail}")]
    Api { status: u16, detail: String },

    /// A 2xx body that is not the expected JSON.
    #[error("Error decoding JSON from response. Raw response text: {body}")]
    Decode { body: String },

    /// Any other transport failure (timeout, broken connection, bad URL).
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

impl ClientError {
    pub fn is_connect(&self) -> bool {
        matches!(self, ClientError::Connect { .. })
    }
}

/// Client for the notebook JSON API.
#[derive(Clone)]
pub struct NotebookClient {
    client: Client,
    base_url: String,
}

impl NotebookClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self, ClientError> {
        Self::with_timeout(base_url, Duration::from_secs(CLIENT_TIMEOUT_SECS))
    }

    pub fn with_timeout(base_url: impl Into<String>, timeout: Duration) -> Result<Self, ClientError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn list_notes(&self) -> Result<Vec<Note>, ClientError> {
        let response = self
            .client
            .get(format!("{}/notes/", self.base_url))
            .send()
            .await
            .map_err(|e| self.send_error(e))?;
        decode(response).await
    }

    pub async fn create_note(&self, title: &str, content: &str) -> Result<NoteCreated, ClientError> {
        let response = self
            .client
            .post(format!("{}/notes/", self.base_url))
            .query(&[("title", title), ("content", content)])
            .send()
            .await
            .map_err(|e| self.send_error(e))?;
        decode(response).await
    }

    pub async fn delete_note(&self, id: i64) -> Result<NoteDeleted, ClientError> {
        let response = self
            .client
            .delete(format!("{}/notes/{}", self.base_url, id))
            .send()
            .await
            .map_err(|e| self.send_error(e))?;
        decode(response).await
    }

    pub async fn add_comment(&self, note_id: i64, content: &str) -> Result<CommentCreated, ClientError> {
        let response = self
            .client
            .post(format!("{}/notes/{}/comments", self.base_url, note_id))
            .query(&[("content", content)])
            .send()
            .await
            .map_err(|e| self.send_error(e))?;
        decode(response).await
    }

    pub async fn search(&self, query: &str) -> Result<Vec<Note>, ClientError> {
        let response = self
            .client
            .get(format!("{}/search/", self.base_url))
            .query(&[("query", query)])
            .send()
            .await
            .map_err(|e| self.send_error(e))?;
        decode(response).await
    }

    fn send_error(&self, err: reqwest::Error) -> ClientError {
        if err.is_connect() {
            debug!(error = %err, url = %self.base_url, "Connection refused");
            ClientError::Connect {
                url: self.base_url.clone(),
            }
        } else {
            ClientError::Transport(err)
        }
    }
}

/// Decode a JSON body, or turn a non-2xx answer into [`ClientError::Api`].
async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ClientError> {
    let status = response.status();
    let body = response.text().await?;

    if !status.is_success() {
        let detail = serde_json::from_str::<ErrorBody>(&body)
            .map(|e| e.detail)
            .unwrap_or_else(|_| {
                if body.trim().is_empty() {
                    status.to_string()
                } else {
                    body.clone()
                }
            });
        return Err(ClientError::Api {
            status: status.as_u16(),
            detail,
        });
    }

    serde_json::from_str(&body).map_err(|_| ClientError::Decode { body })
}
