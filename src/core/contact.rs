// Typed payloads for the contact and chat endpoints.
//
// Both boundaries are plain JSON with no versioning or retry semantics, but
// the shapes are explicit records rather than ad hoc maps, and a response
// that does not match the expected shape is its own error kind instead of a
// silently-missing field.

use super::constants::{CHAT_HISTORY_LIMIT, CONTACT_MESSAGE_MIN_CHARS};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Failure taxonomy for the fetch boundary. None of these retry; the host
/// shows a single failure notice and moves on.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    #[error("request could not be sent")]
    Network,
    #[error("service responded with status {0}")]
    Http(u16),
    #[error("service response was malformed")]
    MalformedResponse,
}

// ---------------- Contact form ----------------

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Message,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldError {
    pub field: ContactField,
    pub message: &'static str,
}

impl ContactForm {
    /// Per-field validation; an empty result means the form can be sent.
    pub fn validate(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();
        if self.name.trim().is_empty() {
            errors.push(FieldError {
                field: ContactField::Name,
                message: "Your name is required",
            });
        }
        if !looks_like_email(&self.email) {
            errors.push(FieldError {
                field: ContactField::Email,
                message: "A valid email is required",
            });
        }
        if self.message.chars().count() < CONTACT_MESSAGE_MIN_CHARS {
            errors.push(FieldError {
                field: ContactField::Message,
                message: "Tell me more (10+ characters)",
            });
        }
        errors
    }
}

/// Shape check only (`local@domain.tld`); deliverability is the backend's
/// problem.
pub fn looks_like_email(s: &str) -> bool {
    let Some(at) = s.find('@') else {
        return false;
    };
    if at == 0 {
        return false;
    }
    let domain = &s[at + 1..];
    match domain.rfind('.') {
        Some(dot) => dot > 0 && dot + 1 < domain.len(),
        None => false,
    }
}

// ---------------- Chat relay ----------------

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatTurn {
    pub role: Role,
    pub content: String,
}

impl ChatTurn {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

/// Request body for the chat relay: the most recent turns, oldest first.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ChatRequest {
    pub messages: Vec<ChatTurn>,
}

impl ChatRequest {
    pub fn from_history(history: &[ChatTurn]) -> Self {
        Self {
            messages: bound_history(history).to_vec(),
        }
    }
}

/// The tail of the history that is actually sent.
pub fn bound_history(history: &[ChatTurn]) -> &[ChatTurn] {
    let skip = history.len().saturating_sub(CHAT_HISTORY_LIMIT);
    &history[skip..]
}

#[derive(Debug, Deserialize)]
struct ChatReplyWire {
    reply: Option<String>,
}

/// Extract the reply string from a chat response body. Non-JSON bodies and
/// missing or empty `reply` fields are [`ApiError::MalformedResponse`].
pub fn parse_chat_reply(body: &str) -> Result<String, ApiError> {
    let wire: ChatReplyWire =
        serde_json::from_str(body).map_err(|_| ApiError::MalformedResponse)?;
    match wire.reply {
        Some(reply) if !reply.is_empty() => Ok(reply),
        _ => Err(ApiError::MalformedResponse),
    }
}
