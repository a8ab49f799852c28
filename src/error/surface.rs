use thiserror::Error;

/// Sharing a message failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShareError {
    #[error("clipboard unavailable: {0}")]
    ClipboardUnavailable(String),
    #[error("could not write to clipboard: {0}")]
    WriteFailed(String),
}

/// Opening a URL outside the terminal failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("could not open {url}: {message}")]
pub struct LaunchError {
    pub url: String,
    pub message: String,
}
