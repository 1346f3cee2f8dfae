//! Error types for the codec crate.

use crate::format::FormatTag;
use thiserror::Error;

/// Result type for codec operations.
pub type CodecResult<T> = Result<T, CodecError>;

/// Errors that can occur during encoding or decoding.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// The encoded value carries a format tag the transcoder does not accept.
    #[error("format mismatch: expected {expected} document, got flags {actual:#010x}")]
    FormatMismatch {
        /// The format the transcoder expects.
        expected: FormatTag,
        /// The raw flags found on the encoded value.
        actual: u32,
    },

    /// A numeric field could not be parsed.
    #[error("line {line}: invalid {field} value {value:?}")]
    ParseFailure {
        /// 1-based line number in the input.
        line: usize,
        /// Name of the field that failed to parse.
        field: &'static str,
        /// The offending text.
        value: String,
    },

    /// Input line is not valid UTF-8.
    #[error("line {line}: invalid UTF-8")]
    InvalidUtf8 {
        /// 1-based line number in the input.
        line: usize,
    },

    /// Failed to encode a document.
    #[error("encoding failed: {message}")]
    EncodingFailed {
        /// Description of the encoding error.
        message: String,
    },

    /// Failed to decode a document.
    #[error("decoding failed: {message}")]
    DecodingFailed {
        /// Description of the decoding error.
        message: String,
    },
}

impl CodecError {
    /// Create a format mismatch error.
    pub fn format_mismatch(expected: FormatTag, actual: u32) -> Self {
        Self::FormatMismatch { expected, actual }
    }

    /// Create a parse failure error.
    pub fn parse_failure(line: usize, field: &'static str, value: impl Into<String>) -> Self {
        Self::ParseFailure {
            line,
            field,
            value: value.into(),
        }
    }

    /// Create an encoding failed error.
    pub fn encoding_failed(message: impl Into<String>) -> Self {
        Self::EncodingFailed {
            message: message.into(),
        }
    }

    /// Create a decoding failed error.
    pub fn decoding_failed(message: impl Into<String>) -> Self {
        Self::DecodingFailed {
            message: message.into(),
        }
    }
}
