// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error types.
//!
//! The engines themselves cannot fail. Errors only show up at the edges:
//! loading configuration at startup, validating a step before it is
//! submitted, and talking to the search index.

use thiserror::Error;

/// Message shown to users when a network round-trip fails for any reason.
pub const GENERIC_FAILURE_MESSAGE: &str =
    "An unexpected error occurred, check your connection and try again.";

/// Message shown when two product steps carry the same licence number.
pub const DUPLICATE_LICENCE_MESSAGE: &str = "Duplicate licence numbers are not allowed";

/// Configuration problems, raised once at startup.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required setting {0}")]
    Missing(&'static str),

    #[error("setting {key} must be a number, got '{value}'")]
    NotNumeric { key: &'static str, value: String },

    #[error("setting {key} is out of range: {reason}")]
    OutOfRange { key: &'static str, reason: String },

    #[error("failed to read config file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Step validation failures. `Display` is the message the user sees.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{}", DUPLICATE_LICENCE_MESSAGE)]
    DuplicateLicence {
        /// Form fields the error should be attached to.
        fields: Vec<&'static str>,
    },

    #[error("{field} is required")]
    MissingField { field: String },

    #[error("{name} is not a PDF file")]
    UnsupportedFileType { name: String },

    /// A navigation action named a step the wizard does not have.
    #[error("no step at index {index} (wizard has {len})")]
    NoSuchStep { index: usize, len: usize },
}

impl ValidationError {
    /// Form fields the UI should mark invalid.
    pub fn fields(&self) -> Vec<&str> {
        match self {
            ValidationError::DuplicateLicence { fields } => fields.clone(),
            ValidationError::MissingField { field } => vec![field.as_str()],
            ValidationError::UnsupportedFileType { .. } | ValidationError::NoSuchStep { .. } => {
                Vec::new()
            }
        }
    }
}

/// Failures building a search request or decoding its response.
#[derive(Debug, Error)]
pub enum RequestError {
    #[error("invalid search endpoint: {0}")]
    InvalidEndpoint(#[from] url::ParseError),

    #[error("failed to decode search response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl RequestError {
    /// What the user is told, whatever went wrong underneath.
    pub fn user_message(&self) -> &'static str {
        GENERIC_FAILURE_MESSAGE
    }
}
