//! LearnScape API Client
//!
//! Blocking HTTP client for the chapter backend and the illustration
//! generation service. The editor core never talks to the network
//! itself; it hands a [`learnscape_core::editor::SavePayload`] to this
//! crate (directly, or through [`RemoteStore`]) and reports the outcome
//! back into its save state.

mod client;
mod imagegen;

pub use client::{ApiClient, ChapterCreate, RemoteStore};
pub use imagegen::{
    GenerationRequest, GenerationSubmitted, ImageModel, PollConfig, TaskState, TaskStatus,
};

use thiserror::Error;

/// API errors.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("transport error: {0}")]
    Transport(String),
    #[error("server returned {code}: {message}")]
    Status { code: u16, message: String },
    #[error("could not decode response: {0}")]
    Decode(String),
    #[error("image generation failed: {0}")]
    GenerationFailed(String),
    #[error("image generation timed out")]
    TimedOut,
}

impl From<ureq::Error> for ApiError {
    fn from(err: ureq::Error) -> Self {
        match err {
            ureq::Error::Status(code, response) => {
                let message = response
                    .into_string()
                    .unwrap_or_else(|_| "no response body".to_string());
                ApiError::Status { code, message }
            }
            ureq::Error::Transport(transport) => ApiError::Transport(transport.to_string()),
        }
    }
}
