//! Bit and decimal-digit operations on 32-bit integers.
//!
//! Bit indices count from the least significant bit and wrap modulo 32, the
//! same way a shift amount is masked to its low five bits.

use crate::error::{Error, Result};

fn mask(bit_index: u32) -> i32 {
    1i32.wrapping_shl(bit_index)
}

/// Returns the bit of `number` at `bit_index` (0 or 1).
pub fn get_bit(number: i32, bit_index: u32) -> i32 {
    number.wrapping_shr(bit_index) & 1
}

/// Forces the bit at `bit_index` to `bit_value`.
///
/// Only 0 and 1 are meaningful; any other `bit_value` returns `number`
/// unchanged.
pub fn set_bit(number: i32, bit_index: u32, bit_value: i32) -> i32 {
    match bit_value {
        0 => number & !mask(bit_index),
        1 => number | mask(bit_index),
        _ => number,
    }
}

pub fn toggle_bit(number: i32, bit_index: u32) -> i32 {
    number ^ mask(bit_index)
}

/// Returns the decimal digit found at `position` in the printed form of
/// `number`, counting from the left.
///
/// A negative number prints with a leading `-`, which takes position 0 and
/// yields [`Error::NotADigit`].
///
/// # Errors
///
/// [`Error::IndexOutOfRange`] when `position` is past the printed text.
pub fn get_digit(number: i32, position: usize) -> Result<u8> {
    let printed = number.to_string();
    let c = printed
        .as_bytes()
        .get(position)
        .copied()
        .ok_or(Error::IndexOutOfRange {
            position,
            len: printed.len(),
        })?;

    match c {
        b'0'..=b'9' => Ok(c - b'0'),
        _ => Err(Error::NotADigit {
            position,
            character: char::from(c),
        }),
    }
}
