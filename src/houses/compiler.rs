//! Description compiler
//!
//! Turns a free-text street segment description such as
//! `"нечетные 1-21, четные 2-28"` into a [`RuleSet`].
//!
//! The description is split on the first `нечетные` and then on the first
//! `четные` inside each half. Since `четные` is a substring of `нечетные`,
//! the odd keyword must be searched for first.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{HousesError, Result};
use crate::houses::rule::{Parity, Rule, RuleSet, Rules};

/// Odd-side keyword
pub const ODD_KEYWORD: &str = "нечетные";
/// Even-side keyword, also a substring of [`ODD_KEYWORD`]
pub const EVEN_KEYWORD: &str = "четные";
/// Open-ended range phrase, same meaning as a trailing `+`
pub const END_OF_STREET: &str = "до конца улицы";

static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Digits, optionally followed by one of: `/digits`, letters, `+`,
/// `-` with optional digits, or words ending in the end-of-street phrase.
static TOKEN_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[0-9]+(?:/[0-9]+|[a-zа-я]+|\+|-[0-9]*|\s[a-zа-я\s]*до конца улицы)?").unwrap()
});

/// Compile a raw description into rule lists
pub fn compile(description: &str) -> Result<RuleSet> {
    let normalized = normalize_description(description);
    if !has_house_information(&normalized) {
        return Err(HousesError::NoHouseInformation(description.to_string()));
    }

    let mut rules = RuleSet::default();
    let (prefix, odd_scope) = split_at_keyword(&normalized, ODD_KEYWORD);

    if let Some(odd_scope) = odd_scope {
        let (odd_part, even_part) = split_at_keyword(odd_scope, EVEN_KEYWORD);
        if let Some(segment) = odd_part {
            extract_rules(&mut rules.odd, segment, Some(Parity::Odd));
        }
        if let Some(segment) = even_part {
            extract_rules(&mut rules.even, segment, Some(Parity::Even));
        }
    }

    if let Some(prefix) = prefix {
        let (any_part, even_part) = split_at_keyword(prefix, EVEN_KEYWORD);
        if let Some(segment) = even_part {
            extract_rules(&mut rules.even, segment, Some(Parity::Even));
        }
        if let Some(segment) = any_part {
            extract_rules(&mut rules.all, segment, None);
        }
    }

    tracing::debug!(
        description = %normalized,
        odd = rules.odd.len(),
        even = rules.even.len(),
        all = rules.all.len(),
        "compiled house description"
    );

    Ok(rules)
}

/// Trim, collapse whitespace, lowercase and fold `ё` into `е`
pub fn normalize_description(description: &str) -> String {
    WHITESPACE_RE
        .replace_all(description.trim(), " ")
        .to_lowercase()
        .replace('ё', "е")
}

/// A description is usable if it has a digit or at least a parity keyword
fn has_house_information(normalized: &str) -> bool {
    normalized.bytes().any(|b| b.is_ascii_digit()) || normalized.contains(EVEN_KEYWORD)
}

/// Split on the first occurrence of `keyword`.
///
/// Returns `(before, after)`. `before` is `None` when the keyword starts the
/// text, `after` is `None` when the keyword is absent (and `before` is then
/// the whole text).
fn split_at_keyword<'a>(text: &'a str, keyword: &str) -> (Option<&'a str>, Option<&'a str>) {
    match text.find(keyword) {
        Some(0) => (None, Some(&text[keyword.len()..])),
        Some(pos) => (Some(&text[..pos]), Some(&text[pos + keyword.len()..])),
        None => (Some(text), None),
    }
}

/// Append the rules found in `segment` to `target`.
///
/// An empty segment means the keyword stood alone, which yields a parity rule.
/// Outside any keyword scope there is no parity to fall back on and even is used.
fn extract_rules(target: &mut Rules, segment: &str, default_parity: Option<Parity>) {
    if segment.trim().is_empty() {
        target.push(Rule::Parity {
            parity: default_parity.unwrap_or(Parity::Even),
        });
        return;
    }

    let mut literals = Vec::new();
    for token in TOKEN_RE.find_iter(segment).map(|m| m.as_str()) {
        match classify(token) {
            Some(rule) => target.push(rule),
            None => literals.push(token.to_string()),
        }
    }

    if !literals.is_empty() {
        target.push(Rule::Literal { houses: literals });
    }
}

/// Numeric rule for a token, or `None` if the token is a verbatim house number
fn classify(token: &str) -> Option<Rule> {
    if token.ends_with('+') || token.contains(END_OF_STREET) {
        return Some(Rule::AtLeast {
            min: leading_digits(token),
        });
    }

    if token.ends_with('-') {
        return Some(Rule::AtMost {
            max: leading_digits(token),
        });
    }

    token.split_once('-').map(|(low, high)| Rule::InRange {
        min: leading_digits(low),
        max: leading_digits(high),
    })
}

/// Value of the leading ASCII digits, saturating on overflow
pub(crate) fn leading_digits(token: &str) -> u64 {
    let end = token
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(token.len());
    token[..end]
        .bytes()
        .fold(0u64, |acc, b| acc.saturating_mul(10).saturating_add(u64::from(b - b'0')))
}
