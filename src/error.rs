use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid configuration: {0}")]
    ConfigError(String),

    #[error("Identifier must be {expected} characters long, got {actual}")]
    IdentifierLength { expected: usize, actual: usize },

    #[error("Owner not found: {namespace}/{name}")]
    OwnerNotFound { namespace: String, name: String },
}

impl Error {
    /// Determine if this error is caused by caller input rather than setup
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            Error::IdentifierLength { .. } | Error::OwnerNotFound { .. }
        )
    }
}
