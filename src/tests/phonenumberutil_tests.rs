use std::sync::Once;

use crate::{
    CountryCodeSource, MatchType, ParseError, PhoneNumberFormat, PhoneNumberType,
    PhoneNumberUtil, PHONE_NUMBER_UTIL,
};

use super::region_code::RegionCode;

static ONCE: Once = Once::new();

fn get_phone_util() -> &'static PhoneNumberUtil {
    ONCE.call_once(|| {
        let _ = colog::default_builder()
            .filter_level(log::LevelFilter::Trace)
            .try_init();
    });
    &PHONE_NUMBER_UTIL
}

#[test]
fn get_supported_regions() {
    let phone_util = get_phone_util();
    let regions: Vec<&str> = phone_util.get_supported_regions().collect();
    assert_eq!(regions.len(), 5);
    assert!(regions.contains(&RegionCode::us()));
    assert!(regions.contains(&RegionCode::gb()));
}

#[test]
fn region_code_for_country_code() {
    let phone_util = get_phone_util();
    assert_eq!(RegionCode::us(), phone_util.get_region_code_for_country_code(1));
    assert_eq!(RegionCode::gb(), phone_util.get_region_code_for_country_code(44));
    assert_eq!(RegionCode::it(), phone_util.get_region_code_for_country_code(39));
    assert_eq!(RegionCode::zz(), phone_util.get_region_code_for_country_code(999));
}

#[test]
fn parse_national_number_with_punctuation() {
    let phone_util = get_phone_util();
    let number = phone_util.parse("(650) 253-0000", RegionCode::us()).unwrap();
    assert_eq!(number.country_code(), 1);
    assert_eq!(number.national_number(), 6502530000);
    assert!(!number.has_extension());
}

#[test]
fn parse_number_with_plus_sign() {
    let phone_util = get_phone_util();
    let number = phone_util.parse("+1 650 253 0000", RegionCode::gb()).unwrap();
    assert_eq!(number.country_code(), 1);
    assert_eq!(number.national_number(), 6502530000);

    // The fullwidth plus works the same way.
    let number = phone_util.parse("\u{FF0B}44 20 7031 3000", RegionCode::us()).unwrap();
    assert_eq!(number.country_code(), 44);
    assert_eq!(number.national_number(), 2070313000);
}

#[test]
fn parse_strips_national_prefix() {
    let phone_util = get_phone_util();
    let number = phone_util.parse("020 7031 3000", RegionCode::gb()).unwrap();
    assert_eq!(number.country_code(), 44);
    assert_eq!(number.national_number(), 2070313000);

    let number = phone_util.parse("1-650-253-0000", RegionCode::us()).unwrap();
    assert_eq!(number.national_number(), 6502530000);
}

#[test]
fn parse_number_with_idd() {
    let phone_util = get_phone_util();
    let number = phone_util
        .parse_and_keep_raw_input("011 44 2070313000", RegionCode::us())
        .unwrap();
    assert_eq!(number.country_code(), 44);
    assert_eq!(number.national_number(), 2070313000);
    assert_eq!(number.country_code_source(), CountryCodeSource::FromNumberWithIdd);
}

#[test]
fn parse_keeps_raw_input_and_source() {
    let phone_util = get_phone_util();
    let number = phone_util
        .parse_and_keep_raw_input("650-253-0000", RegionCode::us())
        .unwrap();
    assert_eq!(number.raw_input(), "650-253-0000");
    assert_eq!(number.country_code_source(), CountryCodeSource::FromDefaultCountry);

    let number = phone_util
        .parse_and_keep_raw_input("+1 650-253-0000", RegionCode::us())
        .unwrap();
    assert_eq!(number.country_code_source(), CountryCodeSource::FromNumberWithPlusSign);

    // A country code written without a plus is recognised when the rest of
    // the number only makes sense without it.
    let number = phone_util
        .parse_and_keep_raw_input("1 650 253 0000", RegionCode::us())
        .unwrap();
    assert_eq!(number.country_code(), 1);
    assert_eq!(number.national_number(), 6502530000);
    assert_eq!(
        number.country_code_source(),
        CountryCodeSource::FromNumberWithoutPlusSign
    );

    // The plain parse leaves all context fields unset.
    let number = phone_util.parse("650-253-0000", RegionCode::us()).unwrap();
    assert!(!number.has_raw_input());
    assert!(!number.has_country_code_source());
}

#[test]
fn parse_extension_variants() {
    let phone_util = get_phone_util();
    for input in [
        "650-253-0000 x123",
        "650-253-0000 ext. 123",
        "650-253-0000 extension 123",
        "650-253-0000;ext=123",
    ] {
        let number = phone_util.parse(input, RegionCode::us()).unwrap();
        assert_eq!(number.national_number(), 6502530000, "{}", input);
        assert_eq!(number.extension(), "123", "{}", input);
    }
}

#[test]
fn parse_italian_leading_zero() {
    let phone_util = get_phone_util();
    let number = phone_util.parse("+39 02 3661 8300", RegionCode::us()).unwrap();
    assert_eq!(number.country_code(), 39);
    assert!(number.italian_leading_zero());
    assert_eq!(number.national_number(), 236618300);
    assert_eq!(phone_util.get_national_significant_number(&number), "0236618300");
}

#[test]
fn parse_failures() {
    let phone_util = get_phone_util();
    assert_eq!(
        phone_util.parse("this is not a phone number", RegionCode::us()),
        Err(ParseError::NotANumber)
    );
    assert_eq!(
        phone_util.parse("650-253-0000", RegionCode::zz()),
        Err(ParseError::InvalidCountryCode)
    );
    assert_eq!(
        phone_util.parse("+44 123456789012345678", RegionCode::us()),
        Err(ParseError::TooLongNsn)
    );
    assert_eq!(
        phone_util.parse("+44 1", RegionCode::us()),
        Err(ParseError::TooShortNsn)
    );
    assert_eq!(
        phone_util.parse("+801 234 5678", RegionCode::us()),
        Err(ParseError::InvalidCountryCode)
    );
}

#[test]
fn normalize_digits_only() {
    let phone_util = get_phone_util();
    assert_eq!(phone_util.normalize_digits_only("034-56&+a#234"), "03456234");
    // Fullwidth and arabic-indic digits are folded to ASCII.
    assert_eq!(phone_util.normalize_digits_only("\u{FF16}\u{FF15}\u{FF10}"), "650");
    assert_eq!(phone_util.normalize_digits_only("\u{0661}\u{0662}\u{0663}"), "123");
}

#[test]
fn trim_unwanted_end_chars() {
    let phone_util = get_phone_util();
    let mut number = "650-253-0000...".to_string();
    phone_util.trim_unwanted_end_chars(&mut number);
    assert_eq!(number, "650-253-0000");

    // The hash stays, as it may close an extension.
    let mut number = "1234#.".to_string();
    phone_util.trim_unwanted_end_chars(&mut number);
    assert_eq!(number, "1234#");

    let mut number = "...".to_string();
    phone_util.trim_unwanted_end_chars(&mut number);
    assert_eq!(number, "");
}

#[test]
fn is_viable_phone_number() {
    let phone_util = get_phone_util();
    assert!(phone_util.is_viable_phone_number("650-253-0000"));
    assert!(phone_util.is_viable_phone_number("+1 650 253 0000"));
    // Two bare digits are viable, one is not.
    assert!(phone_util.is_viable_phone_number("15"));
    assert!(!phone_util.is_viable_phone_number("1"));
    assert!(!phone_util.is_viable_phone_number("alpha"));
    assert!(!phone_util.is_viable_phone_number(""));
}

#[test]
fn format_in_standard_formats() {
    let phone_util = get_phone_util();
    let number = phone_util.parse("650-253-0000", RegionCode::us()).unwrap();
    assert_eq!(phone_util.format(&number, PhoneNumberFormat::E164), "+16502530000");
    assert_eq!(
        phone_util.format(&number, PhoneNumberFormat::National),
        "(650) 253-0000"
    );
    assert_eq!(
        phone_util.format(&number, PhoneNumberFormat::International),
        "+1 (650) 253-0000"
    );
    assert_eq!(
        phone_util.format(&number, PhoneNumberFormat::RFC3966),
        "tel:+1-650-253-0000"
    );
}

#[test]
fn format_applies_national_prefix_rule() {
    let phone_util = get_phone_util();
    let number = phone_util.parse("+44 20 7031 3000", RegionCode::us()).unwrap();
    assert_eq!(
        phone_util.format(&number, PhoneNumberFormat::National),
        "(020) 7031 3000"
    );
    assert_eq!(
        phone_util.format(&number, PhoneNumberFormat::RFC3966),
        "tel:+44-20-7031-3000"
    );
}

#[test]
fn format_with_extension() {
    let phone_util = get_phone_util();
    let number = phone_util
        .parse("(650) 253-0000 x123", RegionCode::us())
        .unwrap();
    assert_eq!(
        phone_util.format(&number, PhoneNumberFormat::RFC3966),
        "tel:+1-650-253-0000;ext=123"
    );
    assert_eq!(
        phone_util.format(&number, PhoneNumberFormat::National),
        "(650) 253-0000 ext. 123"
    );
}

#[test]
fn format_italian_number_keeps_leading_zero() {
    let phone_util = get_phone_util();
    let number = phone_util.parse("+390236618300", RegionCode::us()).unwrap();
    assert_eq!(
        phone_util.format(&number, PhoneNumberFormat::RFC3966),
        "tel:+39-02-3661-8300"
    );
    assert_eq!(phone_util.format(&number, PhoneNumberFormat::E164), "+390236618300");
}

#[test]
fn validity_and_type() {
    let phone_util = get_phone_util();
    let fixed_or_mobile = phone_util.parse("650-253-0000", RegionCode::us()).unwrap();
    assert!(phone_util.is_valid_number(&fixed_or_mobile));
    assert_eq!(
        phone_util.get_number_type(&fixed_or_mobile),
        PhoneNumberType::FixedLineOrMobile
    );

    let toll_free = phone_util.parse("800-331-6000", RegionCode::us()).unwrap();
    assert!(phone_util.is_valid_number(&toll_free));
    assert_eq!(phone_util.get_number_type(&toll_free), PhoneNumberType::TollFree);

    let gb_mobile = phone_util.parse("+44 7912 345 678", RegionCode::us()).unwrap();
    assert!(phone_util.is_valid_number(&gb_mobile));
    assert_eq!(phone_util.get_number_type(&gb_mobile), PhoneNumberType::Mobile);

    let unassigned = phone_util.parse("700-253-0000", RegionCode::us()).unwrap();
    assert!(!phone_util.is_valid_number(&unassigned));
    assert_eq!(phone_util.get_number_type(&unassigned), PhoneNumberType::Unknown);
}

#[test]
fn possible_is_looser_than_valid() {
    let phone_util = get_phone_util();
    let number = phone_util.parse("700-253-0000", RegionCode::us()).unwrap();
    assert!(phone_util.is_possible_number(&number));
    assert!(!phone_util.is_valid_number(&number));

    // Local-only lengths are reported as such, not as possible.
    let local = phone_util.parse("253-0000", RegionCode::us()).unwrap();
    assert!(!phone_util.is_possible_number(&local));
}

#[test]
fn number_match() {
    let phone_util = get_phone_util();
    let first = phone_util.parse("+1 650-253-0000", RegionCode::us()).unwrap();
    let second = phone_util.parse("650-253-0000", RegionCode::us()).unwrap();
    // Both parses resolve the country code, so this is an exact match.
    assert_eq!(phone_util.is_number_match(&first, &second), MatchType::ExactMatch);

    let other = phone_util.parse("650-253-0001", RegionCode::us()).unwrap();
    assert_eq!(phone_util.is_number_match(&first, &other), MatchType::NoMatch);
}

#[test]
fn number_match_with_one_string() {
    let phone_util = get_phone_util();
    let number = phone_util.parse("+1 650-253-0000", RegionCode::us()).unwrap();
    assert_eq!(
        phone_util.is_number_match_with_one_string(&number, "+16502530000"),
        MatchType::ExactMatch
    );
    // Without a country code of its own the string can only agree on the
    // national number.
    assert_eq!(
        phone_util.is_number_match_with_one_string(&number, "650-253-0000"),
        MatchType::NsnMatch
    );
    assert_eq!(
        phone_util.is_number_match_with_one_string(&number, "415-555-1212"),
        MatchType::NoMatch
    );
    assert_eq!(
        phone_util.is_number_match_with_one_string(&number, "not a number"),
        MatchType::NoMatch
    );
}
