use std::fmt;

/// Errors raised while decoding a position stream
///
/// The stream carries no checksums or version field, so the only failure the
/// decoder can detect is running out of bytes in the middle of a field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// A read of `wanted` bytes at `offset` went past the end of the buffer
    Truncated {
        offset: usize,
        wanted: usize,
        available: usize,
    },
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodeError::Truncated {
                offset,
                wanted,
                available,
            } => write!(
                f,
                "Truncated stream: wanted {} byte(s) at offset {}, {} available",
                wanted, offset, available
            ),
        }
    }
}

impl std::error::Error for DecodeError {}

pub type DecodeResult<T> = std::result::Result<T, DecodeError>;
