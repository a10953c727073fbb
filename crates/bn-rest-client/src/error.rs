// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Error types for the REST client

use reqwest::StatusCode;
use thiserror::Error;

/// Errors that can occur when talking to the BarberNet backend
#[derive(Debug, Error)]
pub enum RestClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("URL parsing error: {0}")]
    Url(#[from] url::ParseError),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Server error ({status}): {message}")]
    Server { status: StatusCode, message: String },

    #[error("Unexpected response: {0}")]
    UnexpectedResponse(String),
}

pub type RestClientResult<T> = Result<T, RestClientError>;
