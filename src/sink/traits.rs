//! Trait abstraction for the form save target to enable mocking in tests

use crate::state::FormData;
use async_trait::async_trait;
use thiserror::Error;

/// Errors from a form sink
#[derive(Debug, Error)]
pub enum SinkError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Opaque save target for form documents
///
/// The builder core never calls this; only the app's save/load flow does.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FormSink: Send + Sync {
    /// Persist the document
    async fn save(&self, form: &FormData) -> Result<(), SinkError>;

    /// Load the previously saved document, if any
    async fn load(&self) -> Result<Option<FormData>, SinkError>;
}
