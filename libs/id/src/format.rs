//! Text layouts for IDs.
//!
//! Formatting never allocates when writing into a caller buffer, and neither
//! formatting nor parsing depends on the process locale.
//!
//! | Token | Layout | Length |
//! |-------|--------|--------|
//! | `D` (or empty) | `3fa85f64-5717-4562-b3fc-2c963f66afa6` | 36 |
//! | `N` | `3fa85f6457174562b3fc2c963f66afa6` | 32 |
//! | `B` | `{3fa85f64-5717-4562-b3fc-2c963f66afa6}` | 38 |
//! | `P` | `(3fa85f64-5717-4562-b3fc-2c963f66afa6)` | 38 |
//! | `U` | `urn:uuid:3fa85f64-5717-4562-b3fc-2c963f66afa6` | 45 |
//! | `X` | `{0x3fa85f64,0x5717,0x4562,{0xb3,0xfc,0x2c,0x96,0x3f,0x66,0xaf,0xa6}}` | 68 |
//!
//! Tokens are case-insensitive and always produce lowercase hex digits, so
//! `D` is exactly what `Display` prints. Uppercase output is opt-in through
//! [`FormatSpec::uppercase`].
//!
//! Parsing ignores surrounding ASCII whitespace.

use uuid::fmt::{Braced, Hyphenated, Simple, Urn};
use uuid::Uuid;

use crate::IdError;

/// Length of the `X` layout.
pub const HEX_FIELDS_LEN: usize = 68;

/// Longest layout produced by any [`FormatSpec`].
pub const MAX_FORMATTED_LEN: usize = HEX_FIELDS_LEN;

/// Arrangement of the 32 hex digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Layout {
    /// 8-4-4-4-12 groups separated by hyphens.
    Hyphenated,
    /// 32 digits, no separators.
    Simple,
    /// Hyphenated, wrapped in braces.
    Braced,
    /// Hyphenated, wrapped in parentheses.
    Parenthesized,
    /// Hyphenated, prefixed with `urn:uuid:`.
    Urn,
    /// The UUID fields as `0x`-prefixed hex values in nested braces.
    Hex,
}

/// A parsed format token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FormatSpec {
    pub layout: Layout,
    pub uppercase: bool,
}

impl FormatSpec {
    /// The canonical layout used by `Display`.
    pub const CANONICAL: Self = Self {
        layout: Layout::Hyphenated,
        uppercase: false,
    };

    /// Parses a single-letter format token.
    pub fn parse(token: &str) -> Result<Self, IdError> {
        let mut chars = token.chars();
        let (Some(c), None) = (chars.next(), chars.next()) else {
            return if token.is_empty() {
                Ok(Self::CANONICAL)
            } else {
                Err(IdError::UnknownFormat(token.to_string()))
            };
        };

        let layout = match c.to_ascii_uppercase() {
            'D' => Layout::Hyphenated,
            'N' => Layout::Simple,
            'B' => Layout::Braced,
            'P' => Layout::Parenthesized,
            'U' => Layout::Urn,
            'X' => Layout::Hex,
            _ => return Err(IdError::UnknownFormat(token.to_string())),
        };

        Ok(Self {
            layout,
            uppercase: false,
        })
    }

    /// Returns the same layout with uppercase hex digits.
    #[must_use]
    pub const fn uppercase(self) -> Self {
        Self {
            layout: self.layout,
            uppercase: true,
        }
    }

    /// Number of characters (and UTF-8 bytes) this layout produces.
    #[must_use]
    pub const fn formatted_len(&self) -> usize {
        match self.layout {
            Layout::Hyphenated => Hyphenated::LENGTH,
            Layout::Simple => Simple::LENGTH,
            Layout::Braced | Layout::Parenthesized => Braced::LENGTH,
            Layout::Urn => Urn::LENGTH,
            Layout::Hex => HEX_FIELDS_LEN,
        }
    }

    /// Writes `uuid` into `dest` as ASCII, returning the number of bytes written.
    pub fn encode_utf8(&self, uuid: &Uuid, dest: &mut [u8]) -> Result<usize, IdError> {
        let required = self.formatted_len();
        if dest.len() < required {
            return Err(IdError::InsufficientBuffer {
                required,
                available: dest.len(),
            });
        }

        let dest = &mut dest[..required];
        match (self.layout, self.uppercase) {
            (Layout::Hyphenated, false) => {
                uuid.hyphenated().encode_lower(dest);
            }
            (Layout::Hyphenated, true) => {
                uuid.hyphenated().encode_upper(dest);
            }
            (Layout::Simple, false) => {
                uuid.simple().encode_lower(dest);
            }
            (Layout::Simple, true) => {
                uuid.simple().encode_upper(dest);
            }
            (Layout::Braced, false) => {
                uuid.braced().encode_lower(dest);
            }
            (Layout::Braced, true) => {
                uuid.braced().encode_upper(dest);
            }
            (Layout::Urn, false) => {
                uuid.urn().encode_lower(dest);
            }
            (Layout::Urn, true) => {
                uuid.urn().encode_upper(dest);
            }
            (Layout::Parenthesized, uppercase) => {
                let inner = &mut dest[1..=Hyphenated::LENGTH];
                if uppercase {
                    uuid.hyphenated().encode_upper(inner);
                } else {
                    uuid.hyphenated().encode_lower(inner);
                }
                dest[0] = b'(';
                dest[required - 1] = b')';
            }
            (Layout::Hex, uppercase) => encode_hex_fields(uuid, dest, uppercase),
        }

        Ok(required)
    }

    /// Writes `uuid` into a character buffer, returning the number of chars written.
    pub fn encode_chars(&self, uuid: &Uuid, dest: &mut [char]) -> Result<usize, IdError> {
        let required = self.formatted_len();
        if dest.len() < required {
            return Err(IdError::InsufficientBuffer {
                required,
                available: dest.len(),
            });
        }

        let mut scratch = [0u8; MAX_FORMATTED_LEN];
        let written = self.encode_utf8(uuid, &mut scratch)?;
        for (slot, byte) in dest.iter_mut().zip(&scratch[..written]) {
            *slot = char::from(*byte);
        }

        Ok(written)
    }

    /// Formats `uuid` into a new string.
    #[must_use]
    pub fn render(&self, uuid: &Uuid) -> String {
        let mut scratch = [0u8; MAX_FORMATTED_LEN];
        match self.encode_utf8(uuid, &mut scratch) {
            Ok(written) => scratch[..written].iter().copied().map(char::from).collect(),
            // scratch always fits the longest layout
            Err(_) => String::new(),
        }
    }
}

impl Default for FormatSpec {
    fn default() -> Self {
        Self::CANONICAL
    }
}

impl std::str::FromStr for FormatSpec {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Parses identifier text in any supported layout.
pub fn parse_str(input: &str) -> Result<Uuid, IdError> {
    parse_utf8(input.as_bytes())
}

/// Parses UTF-8 identifier text in any supported layout.
pub fn parse_utf8(input: &[u8]) -> Result<Uuid, IdError> {
    let trimmed = input.trim_ascii();
    let result = match trimmed {
        [b'(', inner @ .., b')'] if inner.len() == Hyphenated::LENGTH => {
            Uuid::try_parse_ascii(inner).map_err(|e| e.to_string())
        }
        [b'{', b'0', b'x' | b'X', ..] => {
            parse_hex_fields(trimmed).ok_or_else(|| "invalid hex field layout".to_string())
        }
        _ => Uuid::try_parse_ascii(trimmed).map_err(|e| e.to_string()),
    };

    result.map_err(|reason| IdError::format(input, reason))
}

struct Cursor<'a> {
    buf: &'a mut [u8],
    pos: usize,
}

impl Cursor<'_> {
    fn push(&mut self, bytes: &[u8]) {
        self.buf[self.pos..self.pos + bytes.len()].copy_from_slice(bytes);
        self.pos += bytes.len();
    }

    fn push_hex(&mut self, value: u32, digits: u32, table: &[u8; 16]) {
        self.push(b"0x");
        for shift in (0..digits).rev() {
            let nibble = (value >> (shift * 4)) & 0xf;
            self.push(&[table[nibble as usize]]);
        }
    }
}

/// `dest` must be exactly [`HEX_FIELDS_LEN`] bytes.
fn encode_hex_fields(uuid: &Uuid, dest: &mut [u8], uppercase: bool) {
    let table = if uppercase {
        b"0123456789ABCDEF"
    } else {
        b"0123456789abcdef"
    };
    let (d1, d2, d3, d4) = uuid.as_fields();

    let mut out = Cursor { buf: dest, pos: 0 };
    out.push(b"{");
    out.push_hex(d1, 8, table);
    out.push(b",");
    out.push_hex(u32::from(d2), 4, table);
    out.push(b",");
    out.push_hex(u32::from(d3), 4, table);
    out.push(b",{");
    for (i, byte) in d4.iter().enumerate() {
        if i > 0 {
            out.push(b",");
        }
        out.push_hex(u32::from(*byte), 2, table);
    }
    out.push(b"}}");
}

fn parse_hex_fields(input: &[u8]) -> Option<Uuid> {
    let inner = input.strip_prefix(b"{")?.strip_suffix(b"}}")?;
    let split = inner.iter().position(|b| *b == b'{')?;
    let head = inner[..split].strip_suffix(b",")?;
    let tail = &inner[split + 1..];

    let mut head = head.split(|b| *b == b',');
    let d1 = hex_field(head.next()?, 8)?;
    let d2 = u16::try_from(hex_field(head.next()?, 4)?).ok()?;
    let d3 = u16::try_from(hex_field(head.next()?, 4)?).ok()?;
    if head.next().is_some() {
        return None;
    }

    let mut d4 = [0u8; 8];
    let mut tail = tail.split(|b| *b == b',');
    for slot in &mut d4 {
        *slot = u8::try_from(hex_field(tail.next()?, 2)?).ok()?;
    }
    if tail.next().is_some() {
        return None;
    }

    Some(Uuid::from_fields(d1, d2, d3, &d4))
}

/// Parses `0x`-prefixed hex of at most `max_digits` digits.
fn hex_field(field: &[u8], max_digits: usize) -> Option<u32> {
    let digits = field
        .strip_prefix(b"0x")
        .or_else(|| field.strip_prefix(b"0X"))?;
    if digits.is_empty() || digits.len() > max_digits {
        return None;
    }

    digits.iter().try_fold(0u32, |acc, b| {
        let nibble = char::from(*b).to_digit(16)?;
        Some((acc << 4) | nibble)
    })
}
