use std::fmt;

/// Result type for catchlog-types operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the types layer
#[derive(Debug)]
pub enum Error {
    /// A string did not name one of the known fish types
    UnknownFishType(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::UnknownFishType(name) => write!(f, "unknown fish type: {}", name),
        }
    }
}

impl std::error::Error for Error {}
