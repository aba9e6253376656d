//! Byte ↔ hex text codec.

use crate::error::{Error, Result};

const HEX_PREFIX: &str = "0x";

/// Rendering options for [`bytes_to_hex`].
///
/// The default renders plain uppercase pairs with no prefix, no separator, no
/// length limit and in input order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HexOptions {
    /// Prepend `0x` to a non-empty result.
    pub prefix_0x: bool,
    /// Appended after every rendered pair, including the last one.
    pub separator: Option<String>,
    /// Stop rendering once the body reaches this many characters. `0` means no limit.
    pub max_length: Option<usize>,
    /// Render the last byte first.
    pub reverse: bool,
    /// Render `A`-`F` in uppercase.
    pub uppercase: bool,
}

impl Default for HexOptions {
    fn default() -> Self {
        Self {
            prefix_0x: false,
            separator: None,
            max_length: None,
            reverse: false,
            uppercase: true,
        }
    }
}

impl HexOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn prefixed(mut self, prefix_0x: bool) -> Self {
        self.prefix_0x = prefix_0x;
        self
    }

    #[must_use]
    pub fn separator<S: Into<String>>(mut self, separator: S) -> Self {
        self.separator = Some(separator.into());
        self
    }

    #[must_use]
    pub fn max_length(mut self, max_length: usize) -> Self {
        self.max_length = Some(max_length);
        self
    }

    #[must_use]
    pub fn reversed(mut self, reverse: bool) -> Self {
        self.reverse = reverse;
        self
    }

    #[must_use]
    pub fn lowercase(mut self) -> Self {
        self.uppercase = false;
        self
    }

    fn limit(&self) -> Option<usize> {
        self.max_length.filter(|&n| n > 0)
    }
}

fn nibble_to_char(nibble: u8, upper: bool) -> char {
    let c = if nibble < 10 {
        b'0' + nibble
    } else if upper {
        b'A' + nibble - 10
    } else {
        b'a' + nibble - 10
    };
    c as char
}

fn push_byte(out: &mut String, byte: u8, upper: bool) {
    out.push(nibble_to_char(byte >> 4, upper));
    out.push(nibble_to_char(byte & 0b0000_1111, upper));
}

/// Renders `bytes` as hex text according to `options`.
///
/// Empty input yields an empty string, even when a prefix is requested. The
/// length limit is checked after each byte and measured on the body only, so
/// the result always holds whole `pair + separator` units and can overshoot
/// the limit by up to one unit.
pub fn bytes_to_hex(bytes: &[u8], options: &HexOptions) -> String {
    if bytes.is_empty() {
        return String::new();
    }

    let separator = options.separator.as_deref().unwrap_or("");
    let unit_len = 2 + separator.chars().count();
    // the limit is checked after each unit, so it keeps ceil(limit / unit) bytes
    let kept = options
        .limit()
        .map_or(bytes.len(), |n| bytes.len().min(n.div_ceil(unit_len)));
    let kept = &bytes[..kept];

    let mut body = String::with_capacity(kept.len() * (2 + separator.len()));
    let mut push_unit = |byte: u8| {
        push_byte(&mut body, byte, options.uppercase);
        body.push_str(separator);
    };
    if options.reverse {
        kept.iter().rev().copied().for_each(&mut push_unit);
    } else {
        kept.iter().copied().for_each(&mut push_unit);
    }

    if options.prefix_0x {
        format!("{HEX_PREFIX}{body}")
    } else {
        body
    }
}

/// Plain uppercase hex, no separator.
pub fn hex_encode<B: AsRef<[u8]>>(data: B) -> String {
    bytes_to_hex(data.as_ref(), &HexOptions::default())
}

pub fn hex_encode_with_separator<B: AsRef<[u8]>>(data: B, separator: &str) -> String {
    bytes_to_hex(data.as_ref(), &HexOptions::new().separator(separator))
}

pub fn hex_encode_prefixed<B: AsRef<[u8]>>(data: B, prefix_0x: bool, reverse: bool) -> String {
    bytes_to_hex(
        data.as_ref(),
        &HexOptions::new().prefixed(prefix_0x).reversed(reverse),
    )
}

pub fn byte_to_hex(byte: u8, prefix_0x: bool) -> String {
    hex_encode_prefixed([byte], prefix_0x, false)
}

/// Two digits when `value` fits in an `i8`, otherwise the big-endian low 16
/// bits as four digits.
///
/// ```
/// assert_eq!(binhex::int_to_hex(-1, false), "FF");
/// assert_eq!(binhex::int_to_hex(0x1234, true), "0x1234");
/// ```
pub fn int_to_hex(value: i32, prefix_0x: bool) -> String {
    let [_, _, high, low] = value.to_be_bytes();
    if i8::try_from(value).is_ok() {
        byte_to_hex(low, prefix_0x)
    } else {
        hex_encode_prefixed([high, low], prefix_0x, false)
    }
}

fn map_to_nibble(index: usize, c: u8) -> Result<u8> {
    match c {
        b'0'..=b'9' => Ok(c - b'0'),
        b'a'..=b'f' => Ok(c - b'a' + 10),
        b'A'..=b'F' => Ok(c - b'A' + 10),
        _ => Err(Error::MalformedHex {
            index,
            character: char::from(c),
        }),
    }
}

/// Decodes separator-free hex pairs.
///
/// Fails on odd-length input and on the first byte that is not an ASCII hex
/// digit. Non-ASCII input is reported byte by byte.
///
/// # Errors
///
/// [`Error::OddLength`] or [`Error::MalformedHex`].
pub fn hex_decode<B: AsRef<[u8]>>(data: B) -> Result<Vec<u8>> {
    let data = data.as_ref();
    if data.len() % 2 != 0 {
        return Err(Error::OddLength { len: data.len() });
    }

    data.chunks_exact(2)
        .enumerate()
        .map(|(i, pair)| {
            let high = map_to_nibble(2 * i, pair[0])?;
            let low = map_to_nibble(2 * i + 1, pair[1])?;
            Ok((high << 4) | low)
        })
        .collect()
}

/// Like [`hex_decode`], but the output must be exactly `N` bytes.
///
/// # Errors
///
/// Any [`hex_decode`] error, or [`Error::LengthMismatch`].
pub fn hex_decode_fixed<const N: usize>(data: impl AsRef<[u8]>) -> Result<[u8; N]> {
    let bytes = hex_decode(data)?;
    <[u8; N]>::try_from(bytes).map_err(|bytes| Error::LengthMismatch {
        expected: N,
        actual: bytes.len(),
    })
}
