use crate::binary::ToBinaryString;
use crate::hex::{bytes_to_hex, HexOptions};

pub trait BytesExt {
    /// Plain uppercase hex, no separator
    fn to_hex(&self) -> String;

    /// Hex rendered with the given options
    fn to_hex_with(&self, options: &HexOptions) -> String;

    /// 8-digit binary of each byte, joined by `separator`
    fn to_bit_string(&self, separator: &str) -> String;
}

impl BytesExt for [u8] {
    fn to_hex(&self) -> String {
        self.to_hex_with(&HexOptions::default())
    }

    fn to_hex_with(&self, options: &HexOptions) -> String {
        bytes_to_hex(self, options)
    }

    fn to_bit_string(&self, separator: &str) -> String {
        self.iter()
            .map(ToBinaryString::to_binary_string)
            .collect::<Vec<_>>()
            .join(separator)
    }
}
