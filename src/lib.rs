//! Byte/hex codec, bit operations and MAC address helpers.
//!
//! Everything here is a pure function over numbers, bytes and text. Decoding
//! errors are reported through [`Error`]; formatting helpers that can meet
//! expected-but-invalid input return `Option` or `bool` instead.
#![warn(clippy::pedantic)]
#![warn(clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]
#![allow(clippy::must_use_candidate)]

mod binary;
mod bits;
mod bytes_ext;
mod error;
mod hex;
mod mac;
mod text;
mod weekdays;

pub use binary::{byte_to_binary, short_to_binary, ToBinaryString};
pub use bits::{get_bit, get_digit, set_bit, toggle_bit};
pub use bytes_ext::BytesExt;
pub use error::{Error, Result};
pub use hex::{
    byte_to_hex, bytes_to_hex, hex_decode, hex_decode_fixed, hex_encode, hex_encode_prefixed,
    hex_encode_with_separator, int_to_hex, HexOptions,
};
pub use mac::{check_mac_address_validity, format_mac_address, normalize_mac_address, MacAddress};
pub use text::{
    check_email_validity, check_ipv4_address_validity, check_ipv6_address_validity,
    escape_meta_characters, hash_code, is_phone_number, remove_forbidden_json_key_characters,
};
pub use weekdays::{symbol as weekday_symbol, Weekday, Weekdays};

/// End-to-end scenarios over the public API.
///
/// Each test only sets up inputs and expected values, calls the API and
/// asserts; the behavior itself lives in the modules.
#[cfg(test)]
mod scenarios {
    mod codec {
        use crate::{bytes_to_hex, hex_decode, HexOptions};

        #[test]
        fn hex_without_separator() {
            let input = [0x01, 0xAA, 0x22];
            let expected = "01AA22";

            let actual = bytes_to_hex(&input, &HexOptions::default());

            assert_eq!(actual, expected);
        }

        #[test]
        fn hex_keeps_trailing_separator() {
            let input = [0x01, 0xAA];
            let expected = "01:AA:";

            let actual = bytes_to_hex(&input, &HexOptions::new().separator(":"));

            assert_eq!(actual, expected);
        }

        #[test]
        fn prefixed_reversed_and_truncated() {
            let input = [0xDE, 0xAD, 0xBE, 0xEF];
            let expected = "0xADDE";

            let options = HexOptions::new()
                .prefixed(true)
                .reversed(true)
                .max_length(4);
            let actual = bytes_to_hex(&input, &options);

            assert_eq!(actual, expected);
        }

        #[test]
        fn decode_round_trip() {
            let input = b"\x00\x01\x7f\x80\xfe\xff".to_vec();

            let encoded = bytes_to_hex(&input, &HexOptions::default());
            let decoded = hex_decode(encoded).unwrap();

            assert_eq!(decoded, input);
        }

        #[test]
        fn decode_rejects_non_hex() {
            let input = "0x01";

            let actual = hex_decode(input);

            assert!(matches!(
                actual,
                Err(crate::Error::MalformedHex { index: 1, character: 'x' })
            ));
        }
    }

    mod mac {
        use crate::{
            check_mac_address_validity, format_mac_address, normalize_mac_address, MacAddress,
        };

        #[test]
        fn format_raw_mac() {
            let input = "01AA2233BB44";
            let expected = Some("01:AA:22:33:BB:44".to_string());

            let actual = format_mac_address(input, ':');

            assert_eq!(actual, expected);
        }

        #[test]
        fn normalize_formatted_mac() {
            let input = "01:aa:22:33:bb:44";
            let expected = Some("01AA2233BB44".to_string());

            let actual = normalize_mac_address(input);

            assert_eq!(actual, expected);
        }

        #[test]
        fn validity() {
            assert!(check_mac_address_validity("01AA2233BB44"));
            assert!(!check_mac_address_validity("01AA2233BB4"));
        }

        #[test]
        fn normalize_undoes_format() {
            let raw = "0a1b2c3d4e5f";

            let formatted = format_mac_address(raw, ':').unwrap();
            let normalized = normalize_mac_address(&formatted).unwrap();

            assert_eq!(normalized, raw.to_ascii_uppercase());
        }

        #[test]
        fn typed_mac_agrees_with_string_helpers() {
            let input = "01-aa-22-33-bb-44";

            let mac: MacAddress = input.parse().unwrap();

            assert_eq!(Some(mac.to_raw()), normalize_mac_address(input));
            assert_eq!(Some(mac.to_string()), format_mac_address(input, ':'));
        }
    }

    mod bits {
        use crate::{get_bit, get_digit, set_bit, toggle_bit, ToBinaryString};

        #[test]
        fn bit_operations() {
            assert_eq!(get_bit(0b0100, 2), 1);
            assert_eq!(set_bit(0b0100, 0, 1), 0b0101);
            assert_eq!(toggle_bit(0b0101, 0), 0b0100);
        }

        #[test]
        fn binary_string_of_byte() {
            let input = 5u8;
            let expected = "00000101";

            let actual = input.to_binary_string();

            assert_eq!(actual, expected);
        }

        #[test]
        fn digit_of_number() {
            assert_eq!(get_digit(2024, 1), Ok(0));
            assert!(get_digit(2024, 4).is_err());
        }
    }

    mod weekdays {
        use crate::{Weekday, Weekdays};

        #[test]
        fn working_days() {
            let expected = " M  T  W  T  F  -  - ";

            let days: Weekdays = Weekday::ALL[..5].iter().copied().collect();

            assert_eq!(days.bits(), 0x1F);
            assert_eq!(days.to_string(), expected);
        }
    }
}
