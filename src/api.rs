//! Fetch boundary for the contact and chat endpoints. Fire-and-forget: any
//! failure maps to one `ApiError` and a single notice in the UI.

use crate::constants::{CHAT_ENDPOINT, CONTACT_ENDPOINT};
use crate::core::contact::{parse_chat_reply, ApiError, ChatRequest, ChatTurn, ContactForm};
use gloo::net::http::Request;

pub async fn send_contact(form: &ContactForm) -> Result<(), ApiError> {
    let resp = Request::post(CONTACT_ENDPOINT)
        .json(form)
        .map_err(|_| ApiError::Network)?
        .send()
        .await
        .map_err(|_| ApiError::Network)?;
    if !resp.ok() {
        return Err(ApiError::Http(resp.status()));
    }
    Ok(())
}

/// Send the bounded history, newest turn last; returns the reply text.
pub async fn send_chat(history: &[ChatTurn]) -> Result<String, ApiError> {
    let resp = Request::post(CHAT_ENDPOINT)
        .json(&ChatRequest::from_history(history))
        .map_err(|_| ApiError::Network)?
        .send()
        .await
        .map_err(|_| ApiError::Network)?;
    if !resp.ok() {
        return Err(ApiError::Http(resp.status()));
    }
    let body = resp.text().await.map_err(|_| ApiError::Network)?;
    parse_chat_reply(&body)
}
