use thiserror::Error;

pub type Result<T> = std::result::Result<T, GhvizError>;

#[derive(Error, Debug)]
pub enum GhvizError {
    #[error("user not found: {0}")]
    UserNotFound(String),
    #[error("GitHub API error: HTTP {status} for {url}")]
    Api { status: u16, url: String },
    #[error("HTTP error: {0}")]
    Http(#[from] Box<ureq::Error>),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid date: {0}")]
    InvalidDate(String),
    #[error("Unknown repository filter: {0}")]
    UnknownRepository(String),
}

// Manual From implementation for the unboxed to boxed conversion
impl From<ureq::Error> for GhvizError {
    fn from(err: ureq::Error) -> Self {
        GhvizError::Http(Box::new(err))
    }
}
