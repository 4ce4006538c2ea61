use std::path::Path;

pub type MorphkitResult<T> = Result<T, MorphkitError>;

#[derive(thiserror::Error, Debug)]
pub enum MorphkitError {
    #[error("input not found: {0}")]
    InputNotFound(String),

    #[error("insufficient frames: grid needs {needed}, only {found} available")]
    InsufficientFrames { needed: usize, found: usize },

    #[error("unreadable image '{path}': {reason}")]
    UnreadableImage { path: String, reason: String },

    #[error("encoding failure for '{path}': {reason}")]
    EncodingFailure { path: String, reason: String },

    #[error("validation error: {0}")]
    Validation(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl MorphkitError {
    pub fn input_not_found(msg: impl Into<String>) -> Self {
        Self::InputNotFound(msg.into())
    }

    pub fn unreadable_image(path: &Path, reason: impl std::fmt::Display) -> Self {
        Self::UnreadableImage {
            path: path.display().to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn encoding_failure(path: &Path, reason: impl std::fmt::Display) -> Self {
        Self::EncodingFailure {
            path: path.display().to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}
