//! Client error types

use thiserror::Error;

pub type ClientResult<T> = Result<T, ClientError>;

#[derive(Error, Debug)]
pub enum ClientError {
    /// The configured base URL could not be used to build endpoints
    #[error("Invalid base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    /// An operation that addresses a task by id was given a draft
    #[error("Task has no id")]
    MissingId,

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Tasks API returned {status} for {url}")]
    Status {
        status: reqwest::StatusCode,
        url: String,
    },

    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),
}
