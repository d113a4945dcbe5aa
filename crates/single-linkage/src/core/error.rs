//! Errors raised while configuring or running a clustering.

/// The errors that may be returned by the functions in this crate.
///
/// All errors are detected before any clustering work begins and are never
/// recovered internally. Repeating a failed call with the same arguments
/// yields the same error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum LinkageError {
    /// An unknown metric or algorithm name, or an unsupported norm order.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
    /// The points or distance matrix cannot be clustered.
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl From<LinkageError> for String {
    fn from(e: LinkageError) -> Self {
        e.to_string()
    }
}
