use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Runtime failures reported by this crate.
///
/// Shape mismatches between vectors and matrices are rejected at compile time and never show up
/// here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum Error {
    /// A value of zero length was normalized (or converted to a direction).
    #[error("cannot normalize a zero-length value")]
    ZeroLength,

    /// A flat buffer did not contain the expected number of elements.
    #[error("expected a buffer of {expected} elements, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },
}

pub(crate) fn check_len(expected: usize, actual: usize) -> Result<()> {
    if expected == actual {
        Ok(())
    } else {
        Err(Error::LengthMismatch { expected, actual })
    }
}
