use thiserror::Error;

/// Error type for this crate.
///
/// None of these are fatal: the store stays usable after returning any of them.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A key or value was the null-sentinel of its type, or a configuration value is unusable.
    #[error("invalid argument")]
    InvalidArgument,
    /// `create` was called for a key that is already present.
    #[error("already exists")]
    AlreadyExists,
    /// The key is not present.
    #[error("not found")]
    NotFound,
}

/// Type alias to use this crate's [`Error`](enum@crate::Error) type in a [`Result`](core::result::Result).
pub type Result<T> = core::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        for (err, expected) in [
            (Error::InvalidArgument, "invalid argument"),
            (Error::AlreadyExists, "already exists"),
            (Error::NotFound, "not found"),
        ] {
            assert_eq!(err.to_string(), expected);
        }
    }

    #[test]
    fn boxed() {
        let err: Box<dyn std::error::Error + Send + Sync> = Error::NotFound.into();
        assert_eq!(err.to_string(), "not found");
        assert_eq!(err.downcast_ref::<Error>(), Some(&Error::NotFound));
    }
}
