//! Free-text duration normalization.
//!
//! Witness reports describe durations in prose: "about 5 min", "2-3 sec",
//! "1 hour 30 minutes", "5 mins.". This module turns such text into a count
//! of seconds, or `None` when the text cannot be read confidently.
//!
//! # Algorithm
//!
//! 1. Lowercase, then drop every character that is not alphanumeric,
//!    whitespace, or `-`.
//! 2. Split on whitespace.
//! 3. Reject unless the text has a numeric character *and* a token from
//!    [`UNIT_SPELLINGS`].
//! 4. Classify tokens: unit spellings and bare [`UNIT_CODES`] become units,
//!    `N-M` ranges collapse to their truncated mean, integers stay counts,
//!    everything else is dropped.
//! 5. Sum `count * unit` over each adjacent (count, unit) pair.
//! 6. A zero total is `None`.

use std::num::NonZeroU64;

use sighting_model::DurationUnit;

/// Raw spellings (including observed typos) and the unit each one denotes.
///
/// Extending coverage means adding rows here.
pub const UNIT_SPELLINGS: &[(&str, DurationUnit)] = &[
    ("s", DurationUnit::Second),
    ("se", DurationUnit::Second),
    ("sec", DurationUnit::Second),
    ("second", DurationUnit::Second),
    ("seconds", DurationUnit::Second),
    ("m", DurationUnit::Minute),
    ("mi", DurationUnit::Minute),
    ("mii", DurationUnit::Minute),
    ("min", DurationUnit::Minute),
    ("mins", DurationUnit::Minute),
    ("mon", DurationUnit::Minute),
    ("mnutes", DurationUnit::Minute),
    ("kinutes", DurationUnit::Minute),
    ("ninutes", DurationUnit::Minute),
    ("minute", DurationUnit::Minute),
    ("minutes", DurationUnit::Minute),
    ("h", DurationUnit::Hour),
    ("hr", DurationUnit::Hour),
    ("hrs", DurationUnit::Hour),
    ("hour", DurationUnit::Hour),
    ("hours", DurationUnit::Hour),
    ("day", DurationUnit::Day),
    ("days", DurationUnit::Day),
    ("week", DurationUnit::Week),
    ("month", DurationUnit::Month),
    ("months", DurationUnit::Month),
    ("yrs", DurationUnit::Year),
    ("year", DurationUnit::Year),
];

/// Canonical unit codes.
///
/// A code pairs with a preceding count like any spelling, but a code alone
/// does not make text look like a duration: `"5 d"` is rejected while
/// `"5 d 3 min"` is five days and three minutes.
pub const UNIT_CODES: &[(&str, DurationUnit)] = &[
    ("s", DurationUnit::Second),
    ("m", DurationUnit::Minute),
    ("h", DurationUnit::Hour),
    ("d", DurationUnit::Day),
    ("w", DurationUnit::Week),
    ("mo", DurationUnit::Month),
    ("y", DurationUnit::Year),
];

/// Fraction glyphs that may trail an integer ("2½").
const FRACTION_GLYPHS: &[char] = &['¼', '½', '¾', '⅓', '⅔', '⅛'];

/// Latin-1 read as UTF-8 turns "½" into "Â½"; lowercasing gives "â½".
const MOJIBAKE_PREFIXES: &[char] = &['â', 'Â'];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Token {
    Count(u64),
    Unit(DurationUnit),
}

/// Normalize a free-text duration to seconds.
///
/// Returns `None` when the text has no numeric character, no recognized unit
/// word, no count directly followed by a unit, or a total that overflows.
///
/// ```
/// use sighting_normalize::normalize_duration;
///
/// assert_eq!(normalize_duration("about 5 min").map(|s| s.get()), Some(300));
/// assert_eq!(normalize_duration("2 hours 30 minutes").map(|s| s.get()), Some(9000));
/// assert_eq!(normalize_duration("half a second maybe"), None);
/// ```
pub fn normalize_duration(raw: &str) -> Option<NonZeroU64> {
    let cleaned = clean(raw);
    if !has_numeric_char(&cleaned) || !has_unit_keyword(&cleaned) {
        return None;
    }
    let tokens: Vec<Token> = cleaned.split_whitespace().filter_map(classify).collect();
    sum_pairs(&tokens).and_then(NonZeroU64::new)
}

/// Look up a single lowercase token in [`UNIT_SPELLINGS`].
pub fn unit_for_token(token: &str) -> Option<DurationUnit> {
    UNIT_SPELLINGS
        .iter()
        .find(|(spelling, _)| *spelling == token)
        .map(|(_, unit)| *unit)
}

fn unit_for_code(token: &str) -> Option<DurationUnit> {
    UNIT_CODES
        .iter()
        .find(|(code, _)| *code == token)
        .map(|(_, unit)| *unit)
}

fn clean(raw: &str) -> String {
    raw.to_lowercase()
        .chars()
        .filter(|c| c.is_alphanumeric() || c.is_whitespace() || *c == '-')
        .collect()
}

fn has_numeric_char(cleaned: &str) -> bool {
    cleaned.chars().any(char::is_numeric)
}

fn has_unit_keyword(cleaned: &str) -> bool {
    cleaned
        .split_whitespace()
        .any(|token| unit_for_token(token).is_some())
}

fn classify(token: &str) -> Option<Token> {
    if let Some(unit) = unit_for_token(token).or_else(|| unit_for_code(token)) {
        return Some(Token::Unit(unit));
    }
    collapse_range(token)
        .or_else(|| parse_count(token))
        .map(Token::Count)
}

/// `"2-3"` -> mean of the bounds, truncated.
fn collapse_range(token: &str) -> Option<u64> {
    let (low, high) = token.split_once('-')?;
    if high.contains('-') {
        return None;
    }
    let low = parse_count(low)?;
    let high = parse_count(high)?;
    low.checked_add(high).map(|sum| sum / 2)
}

/// Parse an ASCII integer, tolerating one trailing fraction glyph ("2½" -> 2).
fn parse_count(token: &str) -> Option<u64> {
    let integral = match token.find(|c: char| !c.is_ascii_digit()) {
        None => token,
        Some(idx) if is_fraction_suffix(&token[idx..]) => &token[..idx],
        Some(_) => return None,
    };
    if integral.is_empty() {
        return None;
    }
    integral.parse().ok()
}

fn is_fraction_suffix(rest: &str) -> bool {
    let rest = rest.trim_start_matches(MOJIBAKE_PREFIXES);
    let mut chars = rest.chars();
    matches!(
        (chars.next(), chars.next()),
        (Some(glyph), None) if FRACTION_GLYPHS.contains(&glyph)
    )
}

fn sum_pairs(tokens: &[Token]) -> Option<u64> {
    tokens.windows(2).try_fold(0u64, |total, pair| match pair {
        [Token::Count(count), Token::Unit(unit)] => count
            .checked_mul(unit.seconds())
            .and_then(|seconds| total.checked_add(seconds)),
        _ => Some(total),
    })
}
