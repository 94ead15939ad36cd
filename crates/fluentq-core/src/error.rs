use thiserror::Error;

/// Canonical result for every fluentq operation that can fail.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The construction argument cannot back a sequence.
    #[error("invalid source: {0}")]
    InvalidSource(String),

    /// A required argument was missing or malformed.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("type mismatch: {0}")]
    TypeMismatch(String),

    #[error("sequence contains no elements")]
    EmptySequence,

    #[error("index {index} out of range for sequence of length {length}")]
    IndexOutOfRange { index: usize, length: usize },

    #[error("no element matches the predicate")]
    NoMatch,

    #[error("more than one element matches the predicate")]
    MultipleMatches,

    // Only reachable through `CanonicalKey::of` and named keys.
    #[error("key encoding error: {0}")]
    KeyEncoding(String),
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::KeyEncoding(e.to_string())
    }
}

impl Error {
    /// True for the failures that the `*_or_default` terminals turn into `None`.
    pub fn is_absent(&self) -> bool {
        matches!(
            self,
            Error::EmptySequence | Error::IndexOutOfRange { .. } | Error::NoMatch
        )
    }
}
