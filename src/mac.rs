//! MAC address formatting, normalization and validation.
//!
//! A MAC address has two textual forms: *raw*, 12 hex digits with nothing in
//! between (`01AA2233BB44`), and *formatted*, six digit pairs joined by a
//! single division character (`01:AA:22:33:BB:44`).

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use rand::Rng;
use regex::Regex;

use crate::error::{Error, Result};
use crate::hex::{bytes_to_hex, hex_decode_fixed, hex_encode, HexOptions};

const RAW_LEN: usize = 12;
const FORMATTED_LEN: usize = 17;

const MULTICAST_BIT: u8 = 0b0000_0001;
const LOCAL_BIT: u8 = 0b0000_0010;

static MAC_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([0-9A-Fa-f]{2}[.:-]?){5}[0-9A-Fa-f]{2}$").unwrap());

fn raw_octets(mac: &str) -> Option<[u8; 6]> {
    hex_decode_fixed::<6>(mac).ok()
}

// Pairs sit at char offsets 3k and 3k+1; whatever sits at 3k+2 must not be a hex digit.
fn separated_octets(mac: &[char]) -> Option<[u8; 6]> {
    let mut digits = String::with_capacity(RAW_LEN);
    for chunk in mac.chunks(3) {
        if chunk.get(2).is_some_and(char::is_ascii_hexdigit) {
            return None;
        }
        digits.extend(chunk.get(..2)?);
    }
    raw_octets(&digits)
}

fn join_octets(octets: &[u8; 6], division: char) -> String {
    let mut mac = bytes_to_hex(octets, &HexOptions::new().separator(division));
    // drop the separator trailing the last pair
    mac.pop();
    mac
}

/// Re-renders `raw` as six uppercase pairs joined by `division`.
///
/// Accepts the raw 12-character form or any 17-character separated form.
/// Returns `None` for any other length, or when the digit pairs cannot be
/// read from their expected positions.
pub fn format_mac_address(raw: &str, division: char) -> Option<String> {
    let chars: Vec<char> = raw.chars().collect();
    let octets = match chars.len() {
        RAW_LEN => raw_octets(raw)?,
        FORMATTED_LEN => separated_octets(&chars)?,
        _ => return None,
    };
    Some(join_octets(&octets, division))
}

/// Strips every non-hex character and uppercases what is left.
///
/// Returns `None` unless exactly 12 digits remain.
pub fn normalize_mac_address(formatted: &str) -> Option<String> {
    let mac: String = formatted
        .chars()
        .filter(char::is_ascii_hexdigit)
        .map(|c| c.to_ascii_uppercase())
        .collect();

    (mac.len() == RAW_LEN).then_some(mac)
}

/// Accepts `01AA2233BB44`, `01:AA:22:33:BB:44`, `01.aa.22.33.bb.44`,
/// `01-AA-22-33-BB-44` and the like.
pub fn check_mac_address_validity(mac: &str) -> bool {
    let len = mac.chars().count();
    if len != RAW_LEN && len != FORMATTED_LEN {
        return false;
    }
    MAC_RE.is_match(mac)
}

/// A 6-byte hardware address.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MacAddress([u8; 6]);

impl MacAddress {
    pub const ZERO: Self = Self([0; 6]);
    pub const BROADCAST: Self = Self([0xFF; 6]);

    pub const fn new(octets: [u8; 6]) -> Self {
        Self(octets)
    }

    /// Takes the first six bytes of `slice`.
    pub fn from_slice(slice: &[u8]) -> Option<Self> {
        let octets = slice.get(..6)?.try_into().ok()?;
        Some(Self(octets))
    }

    /// A random unicast, locally administered address.
    pub fn random() -> Self {
        Self::random_with(&mut rand::thread_rng())
    }

    pub fn random_with<R: Rng>(rng: &mut R) -> Self {
        let mut octets: [u8; 6] = rng.gen();
        octets[0] = (octets[0] | LOCAL_BIT) & !MULTICAST_BIT;
        Self(octets)
    }

    pub fn as_bytes(&self) -> &[u8; 6] {
        &self.0
    }

    pub fn octets(self) -> [u8; 6] {
        self.0
    }

    pub fn is_multicast(&self) -> bool {
        self.0[0] & MULTICAST_BIT != 0
    }

    pub fn is_unicast(&self) -> bool {
        !self.is_multicast()
    }

    pub fn is_broadcast(&self) -> bool {
        *self == Self::BROADCAST
    }

    pub fn is_locally_administered(&self) -> bool {
        self.0[0] & LOCAL_BIT != 0
    }

    pub fn is_universally_administered(&self) -> bool {
        !self.is_locally_administered()
    }

    /// The 12-digit form, e.g. `01AA2233BB44`.
    pub fn to_raw(&self) -> String {
        hex_encode(self.0)
    }

    pub fn to_formatted(&self, division: char) -> String {
        join_octets(&self.0, division)
    }
}

impl From<[u8; 6]> for MacAddress {
    fn from(octets: [u8; 6]) -> Self {
        Self(octets)
    }
}

impl From<MacAddress> for [u8; 6] {
    fn from(mac: MacAddress) -> Self {
        mac.0
    }
}

impl AsRef<[u8]> for MacAddress {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl FromStr for MacAddress {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        if !check_mac_address_validity(s) {
            return Err(Error::InvalidMac(s.to_string()));
        }
        let raw = normalize_mac_address(s).ok_or_else(|| Error::InvalidMac(s.to_string()))?;
        Ok(Self(hex_decode_fixed(raw)?))
    }
}

impl fmt::Display for MacAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_formatted(':'))
    }
}
