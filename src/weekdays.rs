//! Days of the week packed into one byte, Monday in bit 0 through Sunday in
//! bit 6.

use std::fmt;

use crate::bits::{get_bit, set_bit, toggle_bit};

const DAY_MASK: u8 = 0b0111_1111;
const UNSET_SYMBOL: &str = " - ";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    pub const ALL: [Weekday; 7] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];

    /// 0 for Monday through 6 for Sunday.
    pub fn index(self) -> u32 {
        self as u32
    }

    pub fn from_index(index: u32) -> Option<Self> {
        Self::ALL.get(usize::try_from(index).ok()?).copied()
    }

    /// The day's bit in a [`Weekdays`] mask: `0x01` for Monday through `0x40`
    /// for Sunday.
    pub fn code(self) -> u8 {
        1 << self.index()
    }

    /// Narrow display symbol padded with one space on each side.
    pub fn symbol(self) -> &'static str {
        match self {
            Weekday::Monday => " M ",
            Weekday::Tuesday | Weekday::Thursday => " T ",
            Weekday::Wednesday => " W ",
            Weekday::Friday => " F ",
            Weekday::Saturday | Weekday::Sunday => " S ",
        }
    }
}

/// The day's symbol when `set`, a dash otherwise.
pub fn symbol(day: Weekday, set: bool) -> &'static str {
    if set {
        day.symbol()
    } else {
        UNSET_SYMBOL
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Weekdays(u8);

impl Weekdays {
    pub const fn empty() -> Self {
        Self(0)
    }

    pub const fn all() -> Self {
        Self(DAY_MASK)
    }

    /// Bit 7 carries no day and is dropped.
    pub const fn from_bits(bits: u8) -> Self {
        Self(bits & DAY_MASK)
    }

    pub const fn bits(self) -> u8 {
        self.0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn contains(self, day: Weekday) -> bool {
        get_bit(i32::from(self.0), day.index()) == 1
    }

    pub fn insert(&mut self, day: Weekday) {
        self.update(set_bit(i32::from(self.0), day.index(), 1));
    }

    pub fn remove(&mut self, day: Weekday) {
        self.update(set_bit(i32::from(self.0), day.index(), 0));
    }

    pub fn toggle(&mut self, day: Weekday) {
        self.update(toggle_bit(i32::from(self.0), day.index()));
    }

    pub fn iter(self) -> impl Iterator<Item = Weekday> {
        Weekday::ALL.into_iter().filter(move |day| self.contains(*day))
    }

    fn update(&mut self, bits: i32) {
        let [.., low] = bits.to_be_bytes();
        self.0 = low & DAY_MASK;
    }
}

impl FromIterator<Weekday> for Weekdays {
    fn from_iter<I: IntoIterator<Item = Weekday>>(iter: I) -> Self {
        let mut days = Self::empty();
        for day in iter {
            days.insert(day);
        }
        days
    }
}

impl fmt::Display for Weekdays {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for day in Weekday::ALL {
            f.write_str(symbol(day, self.contains(day)))?;
        }
        Ok(())
    }
}
