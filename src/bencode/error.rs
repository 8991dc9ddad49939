use thiserror::Error;

/// Errors produced while tokenizing a bencoded buffer.
///
/// Every error is terminal for the tokenizer that produced it: parsing never
/// resynchronizes, and subsequent calls replay the same error.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum BencodeError {
    /// A declared string length or an open container ran past the end of the
    /// buffer.
    #[error("unexpected end of input")]
    UnexpectedEof,

    /// Malformed integer: no digits, `-0`, a redundant leading zero, or a
    /// missing `e` terminator.
    #[error("invalid integer at offset {0}")]
    InvalidInteger(usize),

    /// Malformed string length prefix, or its `:` separator is missing.
    #[error("invalid string length at offset {0}")]
    InvalidLengthPrefix(usize),

    /// A byte that cannot start any bencode value.
    #[error("unexpected byte {byte:#04x} at offset {offset}")]
    InvalidToken {
        /// Position of the offending byte.
        offset: usize,
        /// The byte itself.
        byte: u8,
    },

    /// An `e` with no open container to close.
    #[error("unbalanced container close at offset {0}")]
    UnbalancedContainer(usize),

    /// A dictionary key position holds a non-string token.
    #[error("dictionary key at offset {0} is not a string")]
    InvalidDictKey(usize),

    /// A dictionary closed while its last key still awaited a value.
    #[error("dictionary entry closed at offset {0} has no value")]
    MissingDictValue(usize),

    /// Container nesting exceeded the configured bound.
    #[error("nesting exceeds {0} levels")]
    DepthExceeded(usize),
}
