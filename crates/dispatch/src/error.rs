use thiserror::Error;

/// Errors that can occur in the dispatch layer.
#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("sink closed: {0}")]
    SinkClosed(String),

    #[error("dispatch failed for target {target}: {reason}")]
    PublishFailed { target: String, reason: String },
}
