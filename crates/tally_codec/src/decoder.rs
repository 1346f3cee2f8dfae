//! CSV decoder.

use crate::entry::LedgerEntry;
use crate::error::{CodecError, CodecResult};
use crate::ledger::Ledger;

/// Decode a ledger from CSV bytes.
///
/// The first line is the header and is skipped whatever it contains. Each
/// following line holds `date,description,account,debit,credit`. The decoder
/// is lenient about shape and strict about numbers:
/// - empty lines are skipped
/// - missing trailing fields default to an empty string or zero
/// - fields after the fifth are ignored
/// - an empty debit or credit is zero
///
/// # Errors
///
/// Returns [`CodecError::ParseFailure`] if a debit or credit field is not an
/// unsigned decimal integer, and [`CodecError::InvalidUtf8`] if a line is not
/// UTF-8. No partial ledger is returned.
pub fn from_csv(bytes: &[u8]) -> CodecResult<Ledger> {
    let entries = CsvDecoder::new(bytes).collect::<CodecResult<Vec<_>>>()?;
    Ok(Ledger::from_entries(entries))
}

/// A streaming CSV decoder.
///
/// Yields one entry per data line. The header line is consumed on
/// construction.
pub struct CsvDecoder<'a> {
    data: &'a [u8],
    pos: usize,
    line: usize,
}

impl<'a> CsvDecoder<'a> {
    /// Create a new decoder for the given bytes.
    pub fn new(data: &'a [u8]) -> Self {
        let mut decoder = Self {
            data,
            pos: 0,
            line: 0,
        };
        let _header = decoder.next_line();
        decoder
    }

    /// Check if all bytes have been consumed.
    pub fn is_empty(&self) -> bool {
        self.pos >= self.data.len()
    }

    /// Get remaining bytes.
    pub fn remaining(&self) -> &[u8] {
        &self.data[self.pos.min(self.data.len())..]
    }

    /// Returns the next raw line without its terminator, with its 1-based number.
    fn next_line(&mut self) -> Option<(usize, &'a [u8])> {
        if self.is_empty() {
            return None;
        }
        let data = self.data;
        let rest = &data[self.pos..];
        let (line, consumed) = match rest.iter().position(|&b| b == b'\n') {
            Some(end) => (&rest[..end], end + 1),
            None => (rest, rest.len()),
        };
        self.pos += consumed;
        self.line += 1;

        let line = line.strip_suffix(b"\r").unwrap_or(line);
        Some((self.line, line))
    }
}

impl Iterator for CsvDecoder<'_> {
    type Item = CodecResult<LedgerEntry>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (number, line) = self.next_line()?;
            if line.is_empty() {
                continue;
            }
            return Some(decode_line(number, line));
        }
    }
}

fn decode_line(number: usize, line: &[u8]) -> CodecResult<LedgerEntry> {
    let text = std::str::from_utf8(line).map_err(|_| CodecError::InvalidUtf8 { line: number })?;
    let mut fields = text.split(',');
    let mut next_field = || fields.next().unwrap_or("");

    let date = next_field().to_string();
    let description = next_field().to_string();
    let account = next_field().to_string();
    let debit = parse_amount(number, "debit", next_field())?;
    let credit = parse_amount(number, "credit", next_field())?;

    Ok(LedgerEntry {
        date,
        description,
        account,
        debit,
        credit,
    })
}

fn parse_amount(line: usize, field: &'static str, text: &str) -> CodecResult<u64> {
    if text.is_empty() {
        return Ok(0);
    }
    // `u64::from_str` accepts a leading '+'; only bare digits are allowed here.
    if !text.bytes().all(|b| b.is_ascii_digit()) {
        return Err(CodecError::parse_failure(line, field, text));
    }
    text.parse::<u64>()
        .map_err(|_| CodecError::parse_failure(line, field, text))
}
