//! Client for the chat answer service.
//!
//! Client-side (hydrate): a real `POST` via `gloo-net`.
//! Native builds: `ask` fails with [`AnswerError::Unavailable`] since there
//! is no browser to issue the request from.
//!
//! ERROR HANDLING
//! ==============
//! The HTTP status is not inspected. Every failure, whether transport or
//! body decoding, surfaces as an `AnswerError`; the chat widget turns any of
//! them into the same connection-error reply.

#[cfg(test)]
#[path = "answer_test.rs"]
mod answer_test;

use std::future::Future;

use serde::{Deserialize, Serialize};

/// Default path of the answer endpoint, relative to the page origin.
pub const DEFAULT_ANSWER_ENDPOINT: &str = "/get_answer";

/// Request body: `{"message": "..."}`.
#[derive(Debug, Serialize)]
pub struct AnswerRequest<'a> {
    pub message: &'a str,
}

/// Response body: `{"answer": "..."}`.
#[derive(Debug, Deserialize)]
pub struct AnswerResponse {
    pub answer: String,
}

#[derive(Debug, thiserror::Error)]
pub enum AnswerError {
    #[error("failed to encode request: {0}")]
    Encode(String),
    #[error("request failed: {0}")]
    Transport(String),
    #[error("invalid answer body: {0}")]
    Decode(String),
    #[error("answer service unavailable outside the browser")]
    Unavailable,
}

/// Something that can answer a chat message.
pub trait AnswerService {
    fn ask(&self, message: &str) -> impl Future<Output = Result<String, AnswerError>>;
}

/// Serialize the request body for `message`.
pub fn encode_request(message: &str) -> Result<String, AnswerError> {
    serde_json::to_string(&AnswerRequest { message }).map_err(|e| AnswerError::Encode(e.to_string()))
}

/// Extract the `answer` field from a response body.
pub fn decode_answer(body: &str) -> Result<String, AnswerError> {
    serde_json::from_str::<AnswerResponse>(body)
        .map(|resp| resp.answer)
        .map_err(|e| AnswerError::Decode(e.to_string()))
}

/// [`AnswerService`] backed by the site's HTTP endpoint.
#[derive(Clone, Debug)]
pub struct HttpAnswerService {
    endpoint: String,
}

impl HttpAnswerService {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self { endpoint: endpoint.into() }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl Default for HttpAnswerService {
    fn default() -> Self {
        Self::new(DEFAULT_ANSWER_ENDPOINT)
    }
}

impl AnswerService for HttpAnswerService {
    #[cfg(feature = "hydrate")]
    async fn ask(&self, message: &str) -> Result<String, AnswerError> {
        let payload = encode_request(message)?;
        let resp = gloo_net::http::Request::post(&self.endpoint)
            .header("Content-Type", "application/json")
            .body(payload)
            .map_err(|e| AnswerError::Encode(e.to_string()))?
            .send()
            .await
            .map_err(|e| AnswerError::Transport(e.to_string()))?;
        let body = resp.text().await.map_err(|e| AnswerError::Transport(e.to_string()))?;
        decode_answer(&body)
    }

    /// No browser fetch outside `hydrate`.
    #[cfg(not(feature = "hydrate"))]
    async fn ask(&self, _message: &str) -> Result<String, AnswerError> {
        Err(AnswerError::Unavailable)
    }
}
