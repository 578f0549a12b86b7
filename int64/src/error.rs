use thiserror::Error;

/// Errors from decoding an `Int64` out of bytes.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The input ended before the 8 bytes of one value.
    #[error("Int64 needs 8 bytes, only {available} available")]
    Truncated { available: usize },
    /// The underlying reader failed for a reason other than running out.
    #[error("I/O error while decoding Int64: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors from parsing hex or bit strings.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("empty input")]
    Empty,
    #[error("{len} digits exceed the {max}-digit limit")]
    TooLong { len: usize, max: usize },
    #[error("invalid digit {digit:?} at position {position}")]
    InvalidDigit { digit: char, position: usize },
}
