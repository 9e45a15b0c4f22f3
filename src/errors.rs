// Copyright (c) 2025 - Cowboy AI, Inc.
//! Error types for cloud port operations

use thiserror::Error;

/// Errors that can occur while talking to a provider region
#[derive(Debug, Error)]
pub enum CloudError {
    /// The request could not be completed by the transport
    #[error("Transport error: {0}")]
    Transport(String),

    /// The provider answered with a non-success status
    #[error("Provider API returned {status}: {body}")]
    Api { status: u16, body: String },

    /// Response body could not be decoded
    #[error("Decode error: {0}")]
    Decode(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Caller supplied an unusable argument
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Operation-specific annotation around another error
    #[error("{context}: {source}")]
    Context {
        context: String,
        #[source]
        source: Box<CloudError>,
    },
}

/// Result type for cloud port operations
pub type CloudResult<T> = Result<T, CloudError>;

impl CloudError {
    /// Annotate this error with the operation that produced it
    pub fn wrap(self, context: impl Into<String>) -> Self {
        CloudError::Context {
            context: context.into(),
            source: Box::new(self),
        }
    }

    /// Innermost error beneath any context layers
    pub fn root_cause(&self) -> &CloudError {
        let mut current = self;
        while let CloudError::Context { source, .. } = current {
            current = source;
        }
        current
    }
}

impl From<serde_json::Error> for CloudError {
    fn from(err: serde_json::Error) -> Self {
        CloudError::Decode(err.to_string())
    }
}
