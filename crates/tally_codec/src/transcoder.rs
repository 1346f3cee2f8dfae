//! Transcoders: per-document-type encode/decode strategies.
//!
//! A storage client never interprets document bytes itself. At each call
//! site the caller names a [`Transcoder`], which turns the document into an
//! [`EncodedValue`] (bytes plus format flags) and back again.

use crate::decoder::from_csv;
use crate::encoder::to_csv;
use crate::error::{CodecError, CodecResult};
use crate::format::FormatTag;
use crate::ledger::Ledger;
use bytes::Bytes;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::marker::PhantomData;

/// Bytes and format flags as handed to and received from storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedValue {
    /// Document payload.
    pub data: Bytes,
    /// Flags word stored alongside the payload.
    pub flags: u32,
}

impl EncodedValue {
    /// Creates a value tagged with the given format.
    pub fn new(data: impl Into<Bytes>, format: FormatTag) -> Self {
        Self {
            data: data.into(),
            flags: format.flags(),
        }
    }

    /// Creates a value with raw flags, e.g. as read back from storage.
    pub fn with_flags(data: impl Into<Bytes>, flags: u32) -> Self {
        Self {
            data: data.into(),
            flags,
        }
    }

    /// Returns the format encoded in the flags, if known.
    #[must_use]
    pub fn format(&self) -> Option<FormatTag> {
        FormatTag::from_flags(self.flags)
    }

    /// Fails with [`CodecError::FormatMismatch`] unless the flags carry `expected`.
    pub fn expect_format(&self, expected: FormatTag) -> CodecResult<()> {
        if expected.matches(self.flags) {
            Ok(())
        } else {
            Err(CodecError::format_mismatch(expected, self.flags))
        }
    }
}

/// Encode/decode strategy for one document type.
///
/// Transcoders are stateless; the type itself is the strategy and is picked
/// by the caller at each storage call.
///
/// # Example
///
/// ```
/// use tally_codec::{CsvTranscoder, FormatTag, Ledger, Transcoder};
///
/// let mut ledger = Ledger::new();
/// ledger.record_movement("2024-08-30", "Accounts Receivable", "Cash", 1500, "Payment received");
///
/// let encoded = CsvTranscoder::encode(&ledger).unwrap();
/// assert_eq!(encoded.format(), Some(FormatTag::Binary));
/// assert_eq!(CsvTranscoder::decode(&encoded).unwrap(), ledger);
/// ```
pub trait Transcoder {
    /// The document type handled by this transcoder.
    type Document;

    /// Encodes a document for storage.
    fn encode(document: &Self::Document) -> CodecResult<EncodedValue>;

    /// Decodes a document read from storage.
    fn decode(encoded: &EncodedValue) -> CodecResult<Self::Document>;
}

/// Stores a [`Ledger`] as CSV, tagged as opaque binary data.
#[derive(Debug, Clone, Copy, Default)]
pub struct CsvTranscoder;

impl Transcoder for CsvTranscoder {
    type Document = Ledger;

    fn encode(document: &Ledger) -> CodecResult<EncodedValue> {
        Ok(EncodedValue::new(to_csv(document), FormatTag::Binary))
    }

    fn decode(encoded: &EncodedValue) -> CodecResult<Ledger> {
        encoded.expect_format(FormatTag::Binary)?;
        from_csv(&encoded.data)
    }
}

/// Stores any serde type as JSON.
pub struct JsonTranscoder<T>(PhantomData<fn() -> T>);

impl<T> Transcoder for JsonTranscoder<T>
where
    T: Serialize + DeserializeOwned,
{
    type Document = T;

    fn encode(document: &T) -> CodecResult<EncodedValue> {
        let data =
            serde_json::to_vec(document).map_err(|e| CodecError::encoding_failed(e.to_string()))?;
        Ok(EncodedValue::new(data, FormatTag::Json))
    }

    fn decode(encoded: &EncodedValue) -> CodecResult<T> {
        encoded.expect_format(FormatTag::Json)?;
        serde_json::from_slice(&encoded.data)
            .map_err(|e| CodecError::decoding_failed(e.to_string()))
    }
}

/// Passes bytes through untouched, tagged as binary.
#[derive(Debug, Clone, Copy, Default)]
pub struct RawBinaryTranscoder;

impl Transcoder for RawBinaryTranscoder {
    type Document = Vec<u8>;

    fn encode(document: &Vec<u8>) -> CodecResult<EncodedValue> {
        Ok(EncodedValue::new(document.clone(), FormatTag::Binary))
    }

    fn decode(encoded: &EncodedValue) -> CodecResult<Vec<u8>> {
        encoded.expect_format(FormatTag::Binary)?;
        Ok(encoded.data.to_vec())
    }
}
