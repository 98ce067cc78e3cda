use thiserror::Error;

/// Errors surfaced by customer directory implementations.
#[derive(Debug, Error)]
pub enum DirectoryError {
    #[error("Entity not found")]
    NotFound,

    /// The directory answered, but with a failure status or envelope.
    #[error("Api error: status {status}")]
    Api { status: u16, message: Option<String> },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Decode error: {0}")]
    Decode(String),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

pub type DirectoryResult<T> = Result<T, DirectoryError>;

impl DirectoryError {
    /// Server-supplied display message, when the failure envelope carried one.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            DirectoryError::Api { message, .. } => message.as_deref(),
            _ => None,
        }
    }
}

#[cfg(feature = "http")]
impl From<reqwest::Error> for DirectoryError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            return DirectoryError::Decode(err.to_string());
        }

        match err.status() {
            Some(status) if status == reqwest::StatusCode::NOT_FOUND => DirectoryError::NotFound,
            Some(status) => DirectoryError::Api {
                status: status.as_u16(),
                message: None,
            },
            None => DirectoryError::Network(err.to_string()),
        }
    }
}
