use thiserror::Error;

/// Errors that stop a page from starting or a model from appearing.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ViewerError {
    #[error("required document element `{0}` was not found")]
    MissingElement(String),

    #[error("no browser document is available")]
    NoDocument,

    #[error("invalid page name `{0}`: expected letters, digits, `_` or `-`")]
    InvalidPageName(String),

    #[error("particle spread must be a positive length, got {0}")]
    InvalidParticleSpread(f32),

    #[error("invalid colour `{value}`: {reason}")]
    InvalidColor { value: String, reason: String },

    #[error("page configuration `{path}` failed to load: {reason}")]
    ConfigLoad { path: String, reason: String },

    #[error("model `{path}` failed to load: {reason}")]
    ModelLoad { path: String, reason: String },
}

pub type ViewerResult<T> = Result<T, ViewerError>;
