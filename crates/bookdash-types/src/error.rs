use std::fmt;

/// Result type for bookdash-types operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the types layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A label did not name any age bucket
    UnknownAgeBucket(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::UnknownAgeBucket(label) => write!(f, "Unknown age bucket: {}", label),
        }
    }
}

impl std::error::Error for Error {}
