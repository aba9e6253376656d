/// Fixed-width, zero-padded base-2 rendering.
///
/// Byte types render 8 characters. Wider integers render their low 16 bits
/// as 16 characters; higher bits are dropped.
pub trait ToBinaryString {
    fn to_binary_string(&self) -> String;
}

impl ToBinaryString for u8 {
    fn to_binary_string(&self) -> String {
        format!("{self:08b}")
    }
}

impl ToBinaryString for i8 {
    fn to_binary_string(&self) -> String {
        self.to_be_bytes()[0].to_binary_string()
    }
}

impl ToBinaryString for u16 {
    fn to_binary_string(&self) -> String {
        format!("{self:016b}")
    }
}

impl ToBinaryString for i16 {
    fn to_binary_string(&self) -> String {
        u16::from_be_bytes(self.to_be_bytes()).to_binary_string()
    }
}

impl ToBinaryString for i32 {
    fn to_binary_string(&self) -> String {
        let [_, _, high, low] = self.to_be_bytes();
        u16::from_be_bytes([high, low]).to_binary_string()
    }
}

pub fn byte_to_binary(byte: u8) -> String {
    byte.to_binary_string()
}

pub fn short_to_binary(value: i32) -> String {
    value.to_binary_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_byte_to_binary() {
        let cases: &[(u8, &str)] = &[
            (0, "00000000"),
            (5, "00000101"),
            (0x80, "10000000"),
            (0xFF, "11111111"),
        ];

        for (input, expected) in cases {
            assert_eq!(byte_to_binary(*input), *expected);
        }
    }

    #[test]
    fn test_signed_byte_uses_unsigned_value() {
        assert_eq!((-1i8).to_binary_string(), "11111111");
        assert_eq!(i8::MIN.to_binary_string(), "10000000");
        assert_eq!(5i8.to_binary_string(), "00000101");
    }

    #[test]
    fn test_short_to_binary() {
        let cases: &[(i32, &str)] = &[
            (0, "0000000000000000"),
            (5, "0000000000000101"),
            (0xABCD, "1010101111001101"),
            (0x1_0001, "0000000000000001"),
            (-1, "1111111111111111"),
        ];

        for (input, expected) in cases {
            assert_eq!(short_to_binary(*input), *expected);
        }
    }

    #[test]
    fn test_fixed_width() {
        assert_eq!(u16::MAX.to_binary_string().len(), 16);
        assert_eq!(i16::MIN.to_binary_string(), "1000000000000000");
        assert_eq!(0u8.to_binary_string().len(), 8);
    }
}
