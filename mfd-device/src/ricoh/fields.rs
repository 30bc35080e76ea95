//! uDirectory address-book schema

use mfd_core::{CanonicalField, FieldMapper};

/// uDirectory property names and the canonical fields they carry
const FIELD_TABLE: &[(&str, CanonicalField)] = &[
    ("id", CanonicalField::Id),
    ("name", CanonicalField::Name),
    ("mail:address", CanonicalField::EmailAddress),
];

pub const FIELD_MAPPER: FieldMapper = FieldMapper::new(FIELD_TABLE);

/// Properties requested for every fetched entry
pub const ENTRY_PROPS: &[&str] = &[
    "entryType",
    "id",
    "name",
    "longName",
    "index",
    "mail:address",
    "tagId",
];

/// Object class of address-book entries
pub(crate) const ENTRY_CLASS: &str = "entry";

/// Property holding an entry's numeric id
pub(crate) const ID_PROP: &str = "id";

/// Prefix turning a raw numeric id into an object id
pub const ENTRY_ID_PREFIX: &str = "entry:";

/// Raw ids at or above this value belong to system entries
pub const RESERVED_ID_THRESHOLD: u64 = 1 << 30;

/// Parse a raw id the way C `strtoul(raw, NULL, 0)` does
///
/// Accepts `0x` hex, leading-`0` octal and decimal. Parsing stops at the
/// first invalid character; nothing parsable yields 0. Overflow saturates.
pub(crate) fn parse_raw_id(raw: &str) -> u64 {
    let s = raw.trim_start();
    let (negative, s) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let hex = s
        .strip_prefix("0x")
        .or_else(|| s.strip_prefix("0X"))
        .filter(|rest| rest.starts_with(|c: char| c.is_ascii_hexdigit()));
    let (radix, digits) = match hex {
        Some(rest) => (16, rest),
        None if s.starts_with('0') => (8, s),
        None => (10, s),
    };

    let mut value: u64 = 0;
    for c in digits.chars() {
        let Some(digit) = c.to_digit(radix) else {
            break;
        };
        match value
            .checked_mul(u64::from(radix))
            .and_then(|v| v.checked_add(u64::from(digit)))
        {
            Some(v) => value = v,
            None => return u64::MAX,
        }
    }

    if negative { value.wrapping_neg() } else { value }
}

/// Check whether a raw id names a reserved system entry
pub(crate) fn is_reserved_id(raw: &str) -> bool {
    parse_raw_id(raw) >= RESERVED_ID_THRESHOLD
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_raw_id_bases() {
        assert_eq!(parse_raw_id("5"), 5);
        assert_eq!(parse_raw_id("0x1f"), 31);
        assert_eq!(parse_raw_id("0X1F"), 31);
        assert_eq!(parse_raw_id("010"), 8);
        assert_eq!(parse_raw_id("0"), 0);
        assert_eq!(parse_raw_id("  42"), 42);
    }

    #[test]
    fn test_parse_raw_id_stops_at_garbage() {
        assert_eq!(parse_raw_id("12abc"), 12);
        assert_eq!(parse_raw_id("abc"), 0);
        assert_eq!(parse_raw_id(""), 0);
        assert_eq!(parse_raw_id("0x"), 0);
        assert_eq!(parse_raw_id("09"), 0);
    }

    #[test]
    fn test_parse_raw_id_overflow_and_sign() {
        assert_eq!(parse_raw_id("99999999999999999999999"), u64::MAX);
        assert_eq!(parse_raw_id("-1"), u64::MAX);
        assert_eq!(parse_raw_id("+7"), 7);
    }

    #[test]
    fn test_reserved_threshold() {
        assert!(!is_reserved_id("5"));
        assert!(!is_reserved_id("1073741823"));
        assert!(is_reserved_id("1073741824"));
        assert!(is_reserved_id("0x40000000"));
        assert!(is_reserved_id("-1"));
    }

    #[test]
    fn test_mapper_table() {
        assert_eq!(FIELD_MAPPER.canonical("mail:address"), Some(CanonicalField::EmailAddress));
        assert_eq!(FIELD_MAPPER.canonical("longName"), None);
        for name in FIELD_MAPPER.vendor_names() {
            assert!(ENTRY_PROPS.contains(&name), "{} is never fetched", name);
        }
    }
}
