/// Crate-wide error taxonomy.
///
/// `Validation` is always raised before any storage or network call;
/// everything else surfaces from the layer that produced it.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("project not found: {id}")]
    NotFound { id: String },

    #[error("validation failed: {0}")]
    Validation(String),

    #[error("authentication failed: {0}")]
    RemoteAuth(String),

    #[error("file upload failed: {0}")]
    UploadTransport(String),

    #[error("storage error: {0}")]
    Storage(anyhow::Error),

    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
}

// anyhow::Error is not a std Error, so thiserror cannot derive this one.
impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Self {
        Self::Storage(err)
    }
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn not_found(id: impl Into<String>) -> Self {
        Self::NotFound { id: id.into() }
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message_names_id() {
        let err = Error::not_found("01ABC");
        assert_eq!(err.to_string(), "project not found: 01ABC");
    }

    #[test]
    fn test_validation_message() {
        let err = Error::validation("Title is required");
        assert!(err.to_string().contains("Title is required"));
    }
}
