use std::path::PathBuf;

pub type CapburnResult<T> = Result<T, CapburnError>;

#[derive(thiserror::Error, Debug)]
pub enum CapburnError {
    #[error("captions file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("no captions found in source file: {}", .0.display())]
    Empty(PathBuf),

    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("caption engine failure: {0}")]
    Engine(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CapburnError {
    pub fn invalid_parameter(msg: impl Into<String>) -> Self {
        Self::InvalidParameter(msg.into())
    }

    pub fn engine(msg: impl Into<String>) -> Self {
        Self::Engine(msg.into())
    }
}
