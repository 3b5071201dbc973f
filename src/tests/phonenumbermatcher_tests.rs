use std::sync::Once;

use strum::IntoEnumIterator;

use crate::{
    CountryCodeSource, Leniency, PhoneNumberMatch, PhoneNumberMatcher, PHONE_NUMBER_UTIL,
};

use super::region_code::RegionCode;

static ONCE: Once = Once::new();

fn init_logger() {
    ONCE.call_once(|| {
        let _ = colog::default_builder()
            .filter_level(log::LevelFilter::Trace)
            .try_init();
    });
}

fn find_all(text: &str, region: &str, leniency: Leniency) -> Vec<PhoneNumberMatch> {
    init_logger();
    PhoneNumberMatcher::with_options(&PHONE_NUMBER_UTIL, text, region, leniency, i32::MAX)
        .collect()
}

fn find_valid(text: &str, region: &str) -> Vec<PhoneNumberMatch> {
    find_all(text, region, Leniency::Valid)
}

#[test]
fn finds_number_and_reports_byte_range() {
    let text = "My number is 650-253-0000.";
    let matches = find_valid(text, RegionCode::us());
    assert_eq!(matches.len(), 1);
    let found = &matches[0];
    assert_eq!(found.start(), 13);
    assert_eq!(found.end(), 25);
    assert_eq!(found.raw_string(), "650-253-0000");
    assert_eq!(&text[found.start()..found.end()], found.raw_string());
    assert_eq!(found.number().country_code(), 1);
    assert_eq!(found.number().national_number(), 6502530000);
}

#[test]
fn number_at_start_and_end_of_text() {
    let matches = find_valid("650-253-0000", RegionCode::us());
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].start(), 0);
    assert_eq!(matches[0].raw_string(), "650-253-0000");
}

#[test]
fn vanity_words_after_number_are_not_swallowed() {
    // The alpha part never enters the candidate, and what is left of the
    // number is not valid on its own.
    let matches = find_valid("Call 1-800-FLOWERS", RegionCode::us());
    assert!(matches.is_empty());
}

#[test]
fn rejects_publication_page_references() {
    let matches = find_valid("VLDB J. 12(3): 211-227 (2003).", RegionCode::us());
    assert!(matches.is_empty());
}

#[test]
fn rejects_slash_separated_dates() {
    let matches = find_valid("Deadline moved from 10/12/2011 to 10/14/2011.", RegionCode::us());
    assert!(matches.is_empty());
}

#[test]
fn rejects_timestamps_with_time_suffix() {
    let matches = find_valid("Meeting at 2012-01-02 08:00 in room 5.", RegionCode::us());
    assert!(matches.is_empty());
}

#[test]
fn finds_several_numbers_with_extension() {
    let text = "Reach me at (650) 253-0000 x123 or 415-555-1212.";
    let matches = find_valid(text, RegionCode::us());
    assert_eq!(matches.len(), 2);

    let first = &matches[0];
    assert_eq!(first.raw_string(), "(650) 253-0000 x123");
    assert_eq!(first.number().national_number(), 6502530000);
    assert_eq!(first.number().extension(), "123");

    let second = &matches[1];
    assert_eq!(second.raw_string(), "415-555-1212");
    assert_eq!(second.number().national_number(), 4155551212);
    assert!(second.start() > first.end());
    assert_eq!(&text[second.start()..second.end()], second.raw_string());
}

#[test]
fn emitted_number_carries_no_parsing_context() {
    let matches = find_valid("Call 650-253-0000 today", RegionCode::us());
    assert_eq!(matches.len(), 1);
    let number = matches[0].number();
    assert!(!number.has_raw_input());
    assert!(!number.has_country_code_source());
    assert_eq!(number.preferred_domestic_carrier_code(), "");
}

#[test]
fn exact_grouping_requires_canonical_groups() {
    // Canonical US grouping is 650-253-0000; running the last two groups
    // together no longer matches it exactly.
    assert!(find_all("650-2530000", RegionCode::us(), Leniency::ExactGrouping).is_empty());
    assert_eq!(find_all("650-2530000", RegionCode::us(), Leniency::Valid).len(), 1);

    // A single undivided block is always acceptable.
    assert_eq!(find_all("6502530000", RegionCode::us(), Leniency::ExactGrouping).len(), 1);
    assert_eq!(find_all("(650) 253-0000", RegionCode::us(), Leniency::ExactGrouping).len(), 1);
    // The extension forms a group of its own and is skipped.
    assert_eq!(
        find_all("(650) 253-0000 x123", RegionCode::us(), Leniency::ExactGrouping).len(),
        1
    );
}

#[test]
fn strict_grouping_rejects_groups_cutting_across_canonical_ones() {
    assert_eq!(find_all("650 253 0000", RegionCode::us(), Leniency::StrictGrouping).len(), 1);
    assert_eq!(find_all("6502530000", RegionCode::us(), Leniency::StrictGrouping).len(), 1);
    assert!(find_all("650-25-30000", RegionCode::us(), Leniency::StrictGrouping).is_empty());
    assert_eq!(find_all("650-25-30000", RegionCode::us(), Leniency::Valid).len(), 1);
}

#[test]
fn possible_accepts_what_valid_rejects() {
    // 700 is not assigned in the plan we carry, but ten digits are a
    // possible length.
    let text = "700-253-0000";
    assert!(find_valid(text, RegionCode::us()).is_empty());
    let matches = find_all(text, RegionCode::us(), Leniency::Possible);
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].number().national_number(), 7002530000);
}

#[test]
fn local_only_lengths_are_not_matched() {
    // Seven digits only dial locally; the finder does not report them even
    // at the loosest tier.
    assert!(find_all("253-0000", RegionCode::us(), Leniency::Possible).is_empty());
}

#[test]
fn leniency_tiers_are_monotonic() {
    let texts = [
        "650-253-0000",
        "650 253 0000",
        "(650) 253-0000",
        "6502530000",
        "650-2530000",
        "650-25-30000",
        "7002530000",
        "my number is 650-253-0000 x123, call me",
    ];
    for text in texts {
        let mut previous: Option<Vec<(usize, String)>> = None;
        // Walk the tiers from strictest to loosest; every match must survive
        // the loosening.
        for leniency in Leniency::iter().rev() {
            let current: Vec<(usize, String)> = find_all(text, RegionCode::us(), leniency)
                .iter()
                .map(|found| (found.start(), found.raw_string().to_string()))
                .collect();
            if let Some(previous) = previous {
                for found in &previous {
                    assert!(
                        current.contains(found),
                        "{:?} found at a stricter tier but lost at {:?} in {:?}",
                        found,
                        leniency,
                        text
                    );
                }
            }
            previous = Some(current);
        }
    }
}

#[test]
fn no_digits_means_no_matches() {
    for leniency in Leniency::iter() {
        assert!(find_all("", RegionCode::us(), leniency).is_empty());
        assert!(find_all("Hello, world! No numbers here.", RegionCode::us(), leniency).is_empty());
    }
}

#[test]
fn zero_tries_finds_nothing() {
    init_logger();
    let mut matcher = PhoneNumberMatcher::with_options(
        &PHONE_NUMBER_UTIL,
        "Call 650-253-0000 now",
        RegionCode::us(),
        Leniency::Valid,
        0,
    );
    assert!(!matcher.has_next());
    assert!(matcher.next().is_none());
}

#[test]
fn tries_are_spent_on_rejected_candidates() {
    init_logger();
    // The date burns the single attempt, so the real number afterwards is
    // never reached.
    let text = "sent 12/10/2011 from 650-253-0000";
    let mut matcher = PhoneNumberMatcher::with_options(
        &PHONE_NUMBER_UTIL,
        text,
        RegionCode::us(),
        Leniency::Valid,
        1,
    );
    assert!(matcher.next().is_none());
    // With budget to spare the number is found.
    let matches = find_valid(text, RegionCode::us());
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].raw_string(), "650-253-0000");
}

#[test]
fn matches_are_ordered_and_do_not_overlap() {
    let text = "a 650-253-0000, b 415-555-1212, c 212-555-9999.";
    let matches = find_valid(text, RegionCode::us());
    assert_eq!(matches.len(), 3);
    let mut last_end = 0;
    for found in &matches {
        assert!(found.start() >= last_end);
        assert!(found.end() > found.start());
        assert_eq!(&text[found.start()..found.end()], found.raw_string());
        last_end = found.end();
    }
}

#[test]
fn iterator_protocol() {
    init_logger();
    let mut matcher =
        PhoneNumberMatcher::new(&PHONE_NUMBER_UTIL, "call 650-253-0000", RegionCode::us());
    // has_next is idempotent until the match is consumed.
    assert!(matcher.has_next());
    assert!(matcher.has_next());
    let found = matcher.next().expect("a match was announced");
    assert_eq!(found.raw_string(), "650-253-0000");
    // Once done, the matcher stays done.
    assert!(!matcher.has_next());
    assert!(matcher.next().is_none());
    assert!(matcher.next().is_none());
}

#[test]
fn splits_two_adjacent_numbers() {
    // The loose candidate pattern first swallows both numbers; the inner
    // extraction recovers the leading one, and the scan then picks the
    // second up on its own.
    let text = "650-253-0000 115-353-2203";
    let matches = find_valid(text, RegionCode::us());
    assert_eq!(matches.len(), 2);
    assert_eq!(matches[0].raw_string(), "650-253-0000");
    assert_eq!(matches[0].start(), 0);
    assert_eq!(matches[1].raw_string(), "115-353-2203");
    assert_eq!(matches[1].start(), 13);
}

#[test]
fn rejects_numbers_glued_to_latin_letters() {
    assert!(find_valid("abc6502530000", RegionCode::us()).is_empty());
    assert!(find_valid("6502530000def", RegionCode::us()).is_empty());
    // A leading bracket shields the candidate from the preceding letter.
    let matches = find_valid("Tel(650) 253-0000.", RegionCode::us());
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].raw_string(), "(650) 253-0000");
}

#[test]
fn possible_leniency_skips_context_checks() {
    let matches = find_all("abc6502530000", RegionCode::us(), Leniency::Possible);
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].raw_string(), "6502530000");
}

#[test]
fn rejects_numbers_next_to_currency_and_percent() {
    assert!(find_valid("\u{20AC}650-253-0000", RegionCode::us()).is_empty());
    assert!(find_valid("$650-253-0000", RegionCode::us()).is_empty());
    assert!(find_valid("650-253-0000%", RegionCode::us()).is_empty());
}

#[test]
fn offsets_are_byte_offsets_in_utf8_text() {
    let text = "tel\u{00E9}fono: 650-253-0000, ll\u{00E1}mame";
    let matches = find_valid(text, RegionCode::us());
    assert_eq!(matches.len(), 1);
    let found = &matches[0];
    // The accented letter takes two bytes, so the match starts at byte 11.
    assert_eq!(found.start(), 11);
    assert_eq!(&text[found.start()..found.end()], found.raw_string());
}

#[test]
fn accented_letter_before_number_rejects_it() {
    assert!(find_valid("\u{00FC}650-253-0000", RegionCode::us()).is_empty());
}

#[test]
fn non_latin_text_around_numbers_is_fine() {
    // No whitespace between script and number is common in CJK text.
    let matches = find_valid("\u{96FB}\u{8A71}650-253-0000", RegionCode::us());
    assert_eq!(matches.len(), 1);
}

#[test]
fn finds_international_numbers() {
    let matches = find_valid("office: +44 20 7031 3000.", RegionCode::us());
    assert_eq!(matches.len(), 1);
    let number = matches[0].number();
    assert_eq!(number.country_code(), 44);
    assert_eq!(number.national_number(), 2070313000);
}

#[test]
fn national_prefix_must_be_written_where_the_plan_requires_it() {
    // British numbers are written nationally with a leading 0.
    assert_eq!(find_valid("call 020 7031 3000 now", RegionCode::gb()).len(), 1);
    assert!(find_valid("call 20 7031 3000 now", RegionCode::gb()).is_empty());
    // In international form the prefix is not expected.
    assert_eq!(find_valid("call +44 20 7031 3000 now", RegionCode::gb()).len(), 1);
    // German numbers behave the same way.
    assert_eq!(find_valid("ruf 030 123456 an", RegionCode::de()).len(), 1);
    assert!(find_valid("ruf 30 123456 an", RegionCode::de()).is_empty());
}

#[test]
fn keeps_italian_leading_zero() {
    let matches = find_valid("chiamami al +39 02 3661 8300", RegionCode::us());
    assert_eq!(matches.len(), 1);
    let number = matches[0].number();
    assert_eq!(number.country_code(), 39);
    assert!(number.italian_leading_zero());
    assert_eq!(
        PHONE_NUMBER_UTIL.get_national_significant_number(number),
        "0236618300"
    );
}

#[test]
fn fullwidth_digits_and_punctuation_are_matched() {
    let text = "\u{FF16}\u{FF15}\u{FF10}\u{FF0D}\u{FF12}\u{FF15}\u{FF13}\u{FF0D}\u{FF10}\u{FF10}\u{FF10}\u{FF10}";
    let matches = find_valid(text, RegionCode::us());
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].number().national_number(), 6502530000);
    assert_eq!(matches[0].raw_string(), text);
}

#[test]
fn reparsing_raw_string_yields_the_same_number() {
    let text = "numbers: (650) 253-0000 x123, +44 20 7031 3000, 030 123456";
    for region in [RegionCode::us(), RegionCode::gb(), RegionCode::de()] {
        for found in find_valid(text, region) {
            let reparsed = PHONE_NUMBER_UTIL
                .parse(found.raw_string(), region)
                .expect("emitted raw strings parse");
            assert_eq!(
                PHONE_NUMBER_UTIL.is_number_match(&reparsed, found.number()),
                crate::MatchType::ExactMatch,
                "{:?} in region {}",
                found.raw_string(),
                region
            );
        }
    }
}

#[test]
fn matcher_state_survives_consumed_matches() {
    init_logger();
    let text = "650-253-0000 and then 415-555-1212";
    let mut matcher = PhoneNumberMatcher::new(&PHONE_NUMBER_UTIL, text, RegionCode::us());
    let first = matcher.next().expect("first match");
    assert_eq!(first.raw_string(), "650-253-0000");
    assert!(matcher.has_next());
    let second = matcher.next().expect("second match");
    assert_eq!(second.raw_string(), "415-555-1212");
    assert!(second.start() >= first.end());
    assert!(matcher.next().is_none());
}

#[test]
fn extension_markers_must_agree_with_the_parsed_extension() {
    // A second x-marked run after the extension makes the candidate split;
    // only the leading number survives.
    let matches = find_valid("(530) 583-6985 x302/x2303", RegionCode::us());
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].raw_string(), "(530) 583-6985 x302");
    assert_eq!(matches[0].number().extension(), "302");
}

#[test]
fn default_constructor_uses_valid_leniency() {
    init_logger();
    let possible_only = "700-253-0000";
    let mut matcher = PhoneNumberMatcher::new(&PHONE_NUMBER_UTIL, possible_only, RegionCode::us());
    assert!(!matcher.has_next());
}

#[test]
fn util_find_numbers_front_door() {
    init_logger();
    let matches: Vec<PhoneNumberMatch> = PHONE_NUMBER_UTIL
        .find_numbers("at 650-253-0000", RegionCode::us())
        .collect();
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].number().country_code(), 1);
}

#[test]
fn source_region_is_honoured_for_ambiguous_nationals() {
    // The same digits parse differently depending on the preferred region.
    let fr_matches = find_valid("01 42 68 53 00", RegionCode::fr());
    assert_eq!(fr_matches.len(), 1);
    assert_eq!(fr_matches[0].number().country_code(), 33);
    assert_eq!(fr_matches[0].number().national_number(), 142685300);
}

#[test]
fn cleared_source_does_not_leak_into_reparse() {
    // parse_and_keep_raw_input on the raw string reproduces the context the
    // matcher stripped.
    let matches = find_valid("650-253-0000", RegionCode::us());
    let reparsed = PHONE_NUMBER_UTIL
        .parse_and_keep_raw_input(matches[0].raw_string(), RegionCode::us())
        .unwrap();
    assert_eq!(reparsed.country_code_source(), CountryCodeSource::FromDefaultCountry);
    assert_eq!(reparsed.raw_input(), "650-253-0000");
}
