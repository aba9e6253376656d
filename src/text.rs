//! Checks and small transforms over free-form text: network addresses,
//! e-mail and phone numbers, JSON keys, escaping and hashing.

use std::sync::LazyLock;

use regex::Regex;

static IPV4_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(([01]?[0-9][0-9]?|2[0-4][0-9]|25[0-5])\.){3}([01]?[0-9][0-9]?|2[0-4][0-9]|25[0-5])$")
        .unwrap()
});

static IPV6_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([0-9a-f]{1,4}:){7}[0-9a-f]{1,4}$").unwrap());

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([a-zA-Z0-9_\-.]+)@([a-zA-Z0-9_\-.]+)\.([a-zA-Z]{2,5})$").unwrap()
});

static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\+[0-9]{1,4})?(\([0-9]{1,3}\))?[0-9]{7,13}$").unwrap());

const FORBIDDEN_JSON_KEY_CHARS: &[char] = &[
    '|', '&', ';', '$', '%', '@', '"', '<', '>', '(', ')', '+', ',', '#', '[', ']', '.', '\\', '/',
];

/// Dotted-quad IPv4, each part in `0..=255`.
pub fn check_ipv4_address_validity(ip: &str) -> bool {
    IPV4_RE.is_match(ip)
}

/// Full eight-group IPv6 in lowercase. The `::` shorthand is not accepted.
pub fn check_ipv6_address_validity(ip: &str) -> bool {
    IPV6_RE.is_match(ip)
}

pub fn check_email_validity(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Permissive phone number check: optional `+country`, optional `(area)`,
/// then 7 to 13 digits.
pub fn is_phone_number(phone: &str) -> bool {
    PHONE_RE.is_match(phone)
}

/// Replaces characters that cannot appear in a JSON key with `_`.
pub fn remove_forbidden_json_key_characters(key: &str) -> String {
    key.chars()
        .map(|c| {
            if FORBIDDEN_JSON_KEY_CHARS.contains(&c) {
                '_'
            } else {
                c
            }
        })
        .collect()
}

/// Prefixes every occurrence of each meta string with a backslash.
///
/// Metas are applied one after the other, so a `\` listed after other metas
/// also escapes the backslashes added before it. Empty metas are skipped.
pub fn escape_meta_characters(input: &str, metas: &[&str]) -> String {
    metas
        .iter()
        .filter(|meta| !meta.is_empty())
        .fold(input.to_string(), |acc, meta| {
            if acc.contains(meta) {
                acc.replace(meta, &format!("\\{meta}"))
            } else {
                acc
            }
        })
}

/// Polynomial hash `s[0]*31^(n-1) + ... + s[n-1]` over UTF-16 code units,
/// wrapping at 32 bits.
pub fn hash_code(s: &str) -> i32 {
    s.encode_utf16()
        .fold(0i32, |hash, unit| hash.wrapping_mul(31).wrapping_add(i32::from(unit)))
}
