//! Format tags carried next to encoded bytes.
//!
//! Storage layers keep a 32-bit flags word with every document. The top byte
//! holds the "common flags" format code shared by all clients; the lower
//! bytes are reserved for legacy per-client data and are ignored here.

use std::fmt;

const FORMAT_SHIFT: u32 = 24;
const FORMAT_MASK: u32 = 0xff << FORMAT_SHIFT;

/// Content format of an encoded document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormatTag {
    /// Client-private data, never interpreted by other clients.
    Private,
    /// Structured JSON.
    Json,
    /// Opaque bytes.
    Binary,
    /// UTF-8 text that is not JSON.
    String,
}

impl FormatTag {
    /// All known tags.
    pub const ALL: [FormatTag; 4] = [
        FormatTag::Private,
        FormatTag::Json,
        FormatTag::Binary,
        FormatTag::String,
    ];

    /// Returns the canonical flags word for this format.
    #[must_use]
    pub const fn flags(self) -> u32 {
        let code = match self {
            FormatTag::Private => 0x01,
            FormatTag::Json => 0x02,
            FormatTag::Binary => 0x03,
            FormatTag::String => 0x04,
        };
        code << FORMAT_SHIFT
    }

    /// Classifies a flags word by its format byte.
    ///
    /// Returns `None` when the format byte is zero (legacy documents) or
    /// unknown.
    #[must_use]
    pub const fn from_flags(flags: u32) -> Option<FormatTag> {
        match (flags & FORMAT_MASK) >> FORMAT_SHIFT {
            0x01 => Some(FormatTag::Private),
            0x02 => Some(FormatTag::Json),
            0x03 => Some(FormatTag::Binary),
            0x04 => Some(FormatTag::String),
            _ => None,
        }
    }

    /// Returns true if `flags` carries this format.
    #[must_use]
    pub fn matches(self, flags: u32) -> bool {
        Self::from_flags(flags) == Some(self)
    }

    /// Lowercase name of the format.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            FormatTag::Private => "private",
            FormatTag::Json => "json",
            FormatTag::Binary => "binary",
            FormatTag::String => "string",
        }
    }
}

impl fmt::Display for FormatTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
