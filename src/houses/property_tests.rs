//! Property tests for the houses module
//!
//! Covers parity scoping, numeric rule bounds, separator equivalence and
//! cache consistency.

use proptest::prelude::*;

use crate::error::HousesError;
use crate::houses::cache::check_house;
use crate::houses::parser::HousesParser;

// ═══════════════════════════════════════════════════════════════════════════
// Strategy generators for property tests
// ═══════════════════════════════════════════════════════════════════════════

/// Generate house number suffixes that do not affect the magnitude
fn suffix_strategy() -> impl Strategy<Value = &'static str> {
    prop_oneof![
        Just(""),
        Just("а"),
        Just("Б"),
        Just("/1"),
        Just("/2"),
        Just(" к"),
    ]
}

/// Generate clause separators
fn separator_strategy() -> impl Strategy<Value = &'static str> {
    prop_oneof![Just(", "), Just("; "), Just(" "), Just(""),]
}

/// Generate house magnitudes
fn magnitude_strategy() -> impl Strategy<Value = u64> {
    1..=500u64
}

/// Generate an inclusive range with min <= max
fn range_strategy() -> impl Strategy<Value = (u64, u64)> {
    (1..=200u64, 0..=200u64).prop_map(|(min, len)| (min, min + len))
}

fn is_even(magnitude: u64) -> bool {
    magnitude % 2 == 0
}

// ═══════════════════════════════════════════════════════════════════════════
// Property Tests
// ═══════════════════════════════════════════════════════════════════════════

proptest! {
    /// A bare even keyword accepts exactly the even magnitudes, whatever the suffix
    #[test]
    fn prop_even_keyword_is_parity_only(m in magnitude_strategy(), suffix in suffix_strategy()) {
        let parser = HousesParser::new("Четные").unwrap();
        let house = format!("{}{}", m, suffix);
        prop_assert_eq!(parser.is_included(&house).unwrap(), is_even(m), "house: {}", house);
    }

    /// A bare odd keyword accepts exactly the odd magnitudes, whatever the suffix
    #[test]
    fn prop_odd_keyword_is_parity_only(m in magnitude_strategy(), suffix in suffix_strategy()) {
        let parser = HousesParser::new("нечётные").unwrap();
        let house = format!("{}{}", m, suffix);
        prop_assert_eq!(parser.is_included(&house).unwrap(), !is_even(m), "house: {}", house);
    }

    /// Open-ended rules compare against the magnitude within their parity
    #[test]
    fn prop_at_least_and_at_most(
        odd_min in magnitude_strategy(),
        even_max in magnitude_strategy(),
        m in magnitude_strategy(),
        suffix in suffix_strategy()
    ) {
        let parser = HousesParser::new(&format!("нечетные {}+, четные {}-", odd_min, even_max)).unwrap();
        let expected = if is_even(m) { m <= even_max } else { m >= odd_min };
        let house = format!("{}{}", m, suffix);
        prop_assert_eq!(parser.is_included(&house).unwrap(), expected, "house: {}", house);
    }

    /// A parity-scoped range never admits the other parity
    #[test]
    fn prop_odd_range_excludes_even(range in range_strategy(), m in magnitude_strategy()) {
        let (min, max) = range;
        let parser = HousesParser::new(&format!("нечетные {}-{}", min, max)).unwrap();
        let expected = !is_even(m) && min <= m && m <= max;
        prop_assert_eq!(parser.is_included(&m.to_string()).unwrap(), expected);
    }

    /// Ranges outside any keyword apply to both parities
    #[test]
    fn prop_agnostic_range(range in range_strategy(), m in magnitude_strategy()) {
        let (min, max) = range;
        let parser = HousesParser::new(&format!("{}-{}", min, max)).unwrap();
        prop_assert_eq!(parser.is_included(&m.to_string()).unwrap(), min <= m && m <= max);
    }

    /// Clause separators do not change the meaning of a description
    #[test]
    fn prop_separators_are_equivalent(
        even in range_strategy(),
        odd in range_strategy(),
        separator in separator_strategy(),
        m in magnitude_strategy()
    ) {
        let reference = HousesParser::new(&format!("четные {}-{}, нечетные {}-{}", even.0, even.1, odd.0, odd.1)).unwrap();
        let variant = HousesParser::new(&format!("четные{}-{}{}нечетные{}-{}", even.0, even.1, separator, odd.0, odd.1)).unwrap();
        let house = m.to_string();
        prop_assert_eq!(reference.is_included(&house).unwrap(), variant.is_included(&house).unwrap());
    }

    /// Literal lists match the whole normalized house number
    #[test]
    fn prop_literal_list_is_exact(
        listed in prop::collection::btree_set(1..=100u64, 1..=6),
        m in 1..=100u64,
        suffix in prop_oneof![Just(""), Just("а"), Just("/1")]
    ) {
        let description = listed.iter().map(|n| n.to_string()).collect::<Vec<_>>().join(", ");
        let parser = HousesParser::new(&description).unwrap();
        let house = format!("{}{}", m, suffix);
        let expected = suffix.is_empty() && listed.contains(&m);
        prop_assert_eq!(parser.is_included(&house).unwrap(), expected, "description: {}, house: {}", description, house);
    }

    /// Non-positive house numbers are malformed and keep the raw text in the error
    #[test]
    fn prop_non_positive_is_malformed(n in 0..=1000u64, suffix in suffix_strategy()) {
        let parser = HousesParser::new("четные").unwrap();
        let raw = format!("-{}{}", n, suffix);
        prop_assert_eq!(parser.is_included(&raw).unwrap_err(), HousesError::MalformedNumber(raw.clone()));
    }

    /// Cached checks agree with direct parsing
    #[test]
    fn prop_cache_consistency(range in range_strategy(), m in magnitude_strategy()) {
        let description = format!("четные {}-{}", range.0, range.1);
        let parser = HousesParser::new(&description).unwrap();
        let house = m.to_string();

        let direct = parser.is_included(&house).unwrap();
        let cached_first = check_house(&description, &house).unwrap();
        let cached_second = check_house(&description, &house).unwrap();

        prop_assert_eq!(direct, cached_first);
        prop_assert_eq!(cached_first, cached_second);
    }
}
