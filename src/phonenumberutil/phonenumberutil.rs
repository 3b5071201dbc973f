// Copyright (C) 2009 The Libphonenumber Authors
// Copyright (C) 2025 Kashin Vladislav (Rust adaptation author)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! The phone-number engine the text finder is built on.
//!
//! `PhoneNumberUtil` parses strings into structured `PhoneNumber` values,
//! validates them against the compiled-in numbering plans, formats them and
//! compares them. It carries exactly the surface the finder consumes; it is
//! not a full numbering-plan library.

use regex::Regex;

use crate::{
    metadata::{metadata_for_region, region_code_for_country_code, NumberFormat, PhoneMetadata,
               PhoneNumberDesc, supported_regions},
    regexp_cache::InvalidRegexError,
    regex_util::{RegexConsume, RegexFullMatch},
    phonenumbermatcher::PhoneNumberMatcher,
};

use super::{
    enums::{MatchType, NumberLengthType, PhoneNumberFormat, PhoneNumberType},
    errors::{ParseError, ParseErrorInternal, ValidationError},
    helper_constants::{
        DEFAULT_EXTN_PREFIX, MAX_LENGTH_COUNTRY_CODE, MAX_LENGTH_FOR_NSN, MIN_LENGTH_FOR_NSN,
        RFC3966_EXTN_PREFIX, UNKNOWN_REGION,
    },
    helper_functions::{
        is_national_number_suffix_of_the_other, normalize_helper,
        prefix_number_with_country_calling_code, set_italian_leading_zeros_for_phone_number,
        test_number_length,
    },
    phone_number::{CountryCodeSource, PhoneNumber},
    phone_number_regexps_and_mappings::PhoneNumberRegExpsAndMappings,
};

/// The main struct for all phone number-related operations.
///
/// An instance of this struct is the primary entry point for parsing,
/// formatting and validating phone numbers, and for finding them inside
/// free text via [`PhoneNumberUtil::find_numbers`].
pub struct PhoneNumberUtil {
    regexps: PhoneNumberRegExpsAndMappings,
}

impl PhoneNumberUtil {
    /// Creates new `PhoneNumberUtil` instance.
    pub fn new() -> Self {
        Self {
            regexps: PhoneNumberRegExpsAndMappings::new(),
        }
    }

    /// Returns an iterator over the phone numbers found in `text`, assuming
    /// numbers written without a country code belong to `default_region`.
    ///
    /// The iterator verifies candidates at the default `Valid` leniency; use
    /// [`PhoneNumberMatcher::with_options`] for other tiers.
    pub fn find_numbers<'a>(
        &'a self,
        text: &'a str,
        default_region: impl AsRef<str>,
    ) -> PhoneNumberMatcher<'a> {
        PhoneNumberMatcher::new(self, text, default_region.as_ref())
    }

    /// Parses a string into a `PhoneNumber`.
    ///
    /// This is the primary method for converting a string representation of a
    /// number into a structured `PhoneNumber` object.
    ///
    /// # Parameters
    ///
    /// * `number_to_parse`: The phone number string.
    /// * `default_region`: The two-letter region code (ISO 3166-1) to use if
    ///   the number is not in international format.
    ///
    /// # Returns
    ///
    /// A `Result` containing the parsed `PhoneNumber` on success, or a
    /// `ParseError` on failure.
    pub fn parse(
        &self,
        number_to_parse: impl AsRef<str>,
        default_region: impl AsRef<str>,
    ) -> Result<PhoneNumber, ParseError> {
        self.parse_helper(number_to_parse.as_ref(), default_region.as_ref(), false)
            .map_err(|err| err.into_public())
    }

    /// Parses a string into a `PhoneNumber`, keeping the raw input string.
    ///
    /// In addition to the fields `parse` populates, the returned number
    /// records the raw input, how the country code was deduced, and any
    /// carrier code stripped from the front.
    pub fn parse_and_keep_raw_input(
        &self,
        number_to_parse: impl AsRef<str>,
        default_region: impl AsRef<str>,
    ) -> Result<PhoneNumber, ParseError> {
        self.parse_helper(number_to_parse.as_ref(), default_region.as_ref(), true)
            .map_err(|err| err.into_public())
    }

    /// Formats a `PhoneNumber` into a standardized format.
    ///
    /// # Panics
    ///
    /// This method panics if the underlying metadata contains an invalid
    /// regular expression, which indicates a critical library bug.
    pub fn format(&self, phone_number: &PhoneNumber, number_format: PhoneNumberFormat) -> String {
        self.format_internal(phone_number, number_format)
            // This should not never happen
            .expect("A valid regex is expected in metadata; this indicates a library bug.")
    }

    /// Performs a fast check to determine if a `PhoneNumber` is possibly
    /// valid, based only on its length. This is less strict than
    /// `is_valid_number`.
    pub fn is_possible_number(&self, phone_number: &PhoneNumber) -> bool {
        matches!(
            self.is_possible_number_with_reason(phone_number),
            Ok(NumberLengthType::IsPossible)
        )
    }

    /// Checks if a `PhoneNumber` is possibly valid and provides a reason if
    /// not.
    pub fn is_possible_number_with_reason(
        &self,
        phone_number: &PhoneNumber,
    ) -> Result<NumberLengthType, ValidationError> {
        let national_number = self.get_national_significant_number(phone_number);
        let region_code = self.get_region_code_for_country_code(phone_number.country_code());
        let Some(metadata) = metadata_for_region(region_code) else {
            return Err(ValidationError::InvalidCountryCode);
        };
        test_number_length(&national_number, metadata)
    }

    /// Performs a full validation of a `PhoneNumber`: the national
    /// significant number must match one of the number classes of its
    /// region's plan.
    ///
    /// # Panics
    ///
    /// Panics on invalid metadata, indicating a library bug.
    pub fn is_valid_number(&self, phone_number: &PhoneNumber) -> bool {
        self.is_valid_number_internal(phone_number)
            // This should not never happen
            .expect("A valid regex is expected in metadata; this indicates a library bug.")
    }

    /// Determines the `PhoneNumberType` of a given `PhoneNumber`.
    ///
    /// # Panics
    ///
    /// Panics on invalid metadata, indicating a library bug.
    pub fn get_number_type(&self, phone_number: &PhoneNumber) -> PhoneNumberType {
        let region_code = self.get_region_code_for_country_code(phone_number.country_code());
        let Some(metadata) = metadata_for_region(region_code) else {
            return PhoneNumberType::Unknown;
        };
        let national_significant_number = self.get_national_significant_number(phone_number);
        self.get_number_type_helper(&national_significant_number, metadata)
            // This should not never happen
            .expect("A valid regex is expected in metadata; this indicates a library bug.")
    }

    /// Gets the National Significant Number (NSN) from a `PhoneNumber`.
    ///
    /// The NSN is the part of the number that follows the country code,
    /// including any meaningful leading zeros.
    pub fn get_national_significant_number(&self, phone_number: &PhoneNumber) -> String {
        // If leading zero(s) have been set, we prefix this now. Note this is
        // not a national prefix.
        let mut national_number = String::new();
        if phone_number.italian_leading_zero() && phone_number.number_of_leading_zeros() > 0 {
            for _ in 0..phone_number.number_of_leading_zeros() {
                national_number.push('0');
            }
        }
        let mut buf = itoa::Buffer::new();
        national_number.push_str(buf.format(phone_number.national_number()));
        national_number
    }

    /// Gets the primary region code for a given country calling code.
    ///
    /// Note: Some country codes are shared by multiple regions; this returns
    /// the main region for that code (e.g. "US" for +1). Returns "ZZ" for
    /// codes without metadata.
    pub fn get_region_code_for_country_code(&self, country_code: i32) -> &'static str {
        region_code_for_country_code(country_code)
    }

    /// The numbering plan of a region, if we carry one for it.
    pub fn get_metadata_for_region(&self, region_code: impl AsRef<str>) -> Option<&'static PhoneMetadata> {
        metadata_for_region(region_code.as_ref())
    }

    /// Gets an iterator over all supported two-letter region codes.
    pub fn get_supported_regions(&self) -> impl ExactSizeIterator<Item = &'static str> {
        supported_regions()
    }

    /// Normalizes a string of characters representing a phone number by
    /// converting every decimal digit (in any script) to its ASCII value and
    /// dropping everything else.
    pub fn normalize_digits_only(&self, number: impl AsRef<str>) -> String {
        let normalized = dec_from_char::normalize_decimals(number.as_ref());
        normalized
            .chars()
            .filter(|character| character.is_ascii_digit())
            .collect()
    }

    /// Strips trailing characters from a number that can neither be part of
    /// it nor mark an extension: everything except letters, numbers and `#`.
    pub fn trim_unwanted_end_chars(&self, number: &mut String) {
        number.truncate(trimmed_end_len(number));
    }

    /// Checks whether a string looks like it could plausibly be a phone
    /// number, before any region-specific validation.
    pub fn is_viable_phone_number(&self, number: impl AsRef<str>) -> bool {
        let number = number.as_ref();
        if number.len() < MIN_LENGTH_FOR_NSN {
            return false;
        }
        self.regexps.valid_phone_number_pattern.full_match(number)
    }

    /// Compares two phone numbers and returns their `MatchType`.
    ///
    /// Context fields (raw input, country code source, carrier code) are
    /// ignored; only the identity of the numbers is compared.
    pub fn is_number_match(
        &self,
        first_number_in: &PhoneNumber,
        second_number_in: &PhoneNumber,
    ) -> MatchType {
        let first_number = first_number_in.core_fields_only();
        let second_number = second_number_in.core_fields_only();
        // Early exit if both had extensions and these are different.
        if first_number.has_extension()
            && second_number.has_extension()
            && first_number.extension() != second_number.extension()
        {
            return MatchType::NoMatch;
        }
        let first_number_country_code = first_number.country_code();
        let second_number_country_code = second_number.country_code();
        // Both had country calling code specified.
        if first_number_country_code != 0 && second_number_country_code != 0 {
            if first_number == second_number {
                return MatchType::ExactMatch;
            } else if first_number_country_code == second_number_country_code
                && is_national_number_suffix_of_the_other(&first_number, &second_number)
            {
                // A SHORT_NSN_MATCH occurs if there is a difference because of
                // the presence or absence of an 'Italian leading zero', the
                // presence or absence of an extension, or one NSN being a
                // shorter variant of the other.
                return MatchType::ShortNsnMatch;
            }
            return MatchType::NoMatch;
        }
        // Checks cases where one or both country codes were not specified. To
        // make equality checks easier, we first set the country codes to be
        // equal.
        let mut first_number = first_number;
        first_number.set_country_code(second_number_country_code);
        // If all else was the same, then this is an NSN_MATCH.
        if first_number == second_number {
            return MatchType::NsnMatch;
        }
        if is_national_number_suffix_of_the_other(&first_number, &second_number) {
            return MatchType::ShortNsnMatch;
        }
        MatchType::NoMatch
    }

    /// Compares a number against a string, parsing the string first. Returns
    /// `NsnMatch` when the two agree on the national significant number but
    /// the string carried no country code of its own.
    pub fn is_number_match_with_one_string(
        &self,
        first_number: &PhoneNumber,
        second_number: impl AsRef<str>,
    ) -> MatchType {
        let second_number = second_number.as_ref();
        // First see if the second number has an implicit country calling
        // code, by attempting to parse it.
        match self.parse(second_number, UNKNOWN_REGION) {
            Ok(second_number_as_proto) => self.is_number_match(first_number, &second_number_as_proto),
            Err(ParseError::InvalidCountryCode) => {
                // The second number has no country calling code. EXACT_MATCH
                // is no longer possible. We parse it as if the region was the
                // same as that for the first number, and if EXACT_MATCH is
                // returned we replace this with NSN_MATCH.
                let first_number_region =
                    self.get_region_code_for_country_code(first_number.country_code());
                if first_number_region == UNKNOWN_REGION {
                    return MatchType::NoMatch;
                }
                match self.parse(second_number, first_number_region) {
                    Ok(second_number_with_first_number_region) => {
                        let match_type = self
                            .is_number_match(first_number, &second_number_with_first_number_region);
                        if match_type == MatchType::ExactMatch {
                            MatchType::NsnMatch
                        } else {
                            match_type
                        }
                    }
                    Err(_) => MatchType::NoMatch,
                }
            }
            Err(_) => MatchType::NoMatch,
        }
    }

    // ------------------------------------------------------------------
    // Formatting internals.

    fn format_internal(
        &self,
        phone_number: &PhoneNumber,
        number_format: PhoneNumberFormat,
    ) -> Result<String, InvalidRegexError> {
        let country_calling_code = phone_number.country_code();
        let national_significant_number = self.get_national_significant_number(phone_number);
        if let PhoneNumberFormat::E164 = number_format {
            // Early exit for E164 case (even if the country calling code is
            // invalid) since no formatting of the national number needs to be
            // applied. Extensions are not formatted.
            let mut formatted_number = national_significant_number;
            prefix_number_with_country_calling_code(
                country_calling_code,
                PhoneNumberFormat::E164,
                &mut formatted_number,
            );
            return Ok(formatted_number);
        }
        let region_code = self.get_region_code_for_country_code(country_calling_code);
        let Some(metadata) = metadata_for_region(region_code) else {
            // No plan for this country code; the best we can do is the bare
            // national significant number.
            return Ok(national_significant_number);
        };
        let mut formatted_number =
            self.format_nsn(&national_significant_number, metadata, number_format)?;
        self.maybe_append_formatted_extension(phone_number, number_format, &mut formatted_number);
        prefix_number_with_country_calling_code(
            country_calling_code,
            number_format,
            &mut formatted_number,
        );
        Ok(formatted_number)
    }

    /// Picks the formatting rule whose leading-digits and full pattern both
    /// agree with the national significant number.
    pub(crate) fn choose_formatting_pattern_for_number(
        &self,
        available_formats: &'static [NumberFormat],
        national_number: &str,
    ) -> Result<Option<&'static NumberFormat>, InvalidRegexError> {
        for number_format in available_formats {
            if let Some(leading_digits) = number_format.leading_digits_pattern.last() {
                // We always use the last leading_digits_pattern, as it is the
                // most detailed.
                let leading_digits_regex = self.regexps.regexp_cache.get_regex(leading_digits)?;
                if !leading_digits_regex.matches_start(national_number) {
                    continue;
                }
            }
            let pattern = self.regexps.regexp_cache.get_regex(number_format.pattern)?;
            if pattern.full_match(national_number) {
                return Ok(Some(number_format));
            }
        }
        Ok(None)
    }

    fn format_nsn(
        &self,
        national_number: &str,
        metadata: &'static PhoneMetadata,
        number_format: PhoneNumberFormat,
    ) -> Result<String, InvalidRegexError> {
        let Some(formatting_pattern) =
            self.choose_formatting_pattern_for_number(metadata.number_formats, national_number)?
        else {
            // If no pattern was matched, we format the number as a whole.
            return Ok(national_number.to_string());
        };
        self.format_nsn_using_pattern(national_number, formatting_pattern, number_format)
    }

    fn format_nsn_using_pattern(
        &self,
        national_number: &str,
        formatting_pattern: &NumberFormat,
        number_format: PhoneNumberFormat,
    ) -> Result<String, InvalidRegexError> {
        let pattern = self.regexps.regexp_cache.get_regex(formatting_pattern.pattern)?;
        let mut number_format_rule = formatting_pattern.format.to_string();
        if matches!(number_format, PhoneNumberFormat::National)
            && !formatting_pattern.national_prefix_formatting_rule.is_empty()
        {
            // Apply the national-prefix formatting rule to the first group
            // of the format before using it.
            number_format_rule = self
                .regexps
                .first_group_capturing_pattern
                .replace(
                    &number_format_rule,
                    formatting_pattern.national_prefix_formatting_rule,
                )
                .into_owned();
        }
        let mut formatted_number = pattern
            .replace(national_number, number_format_rule.as_str())
            .into_owned();
        if let PhoneNumberFormat::RFC3966 = number_format {
            // Strip any leading punctuation.
            let leading_separator_end = self
                .regexps
                .separator_pattern
                .find_start(&formatted_number)
                .map(|found| found.end());
            if let Some(end) = leading_separator_end {
                formatted_number.drain(..end);
            }
            // Replace the rest with a dash between each segment.
            formatted_number = self
                .regexps
                .separator_pattern
                .replace_all(&formatted_number, "-")
                .into_owned();
        }
        Ok(formatted_number)
    }

    fn maybe_append_formatted_extension(
        &self,
        phone_number: &PhoneNumber,
        number_format: PhoneNumberFormat,
        formatted_number: &mut String,
    ) {
        if !phone_number.has_extension() || phone_number.extension().is_empty() {
            return;
        }
        if let PhoneNumberFormat::RFC3966 = number_format {
            formatted_number.push_str(RFC3966_EXTN_PREFIX);
        } else {
            formatted_number.push_str(DEFAULT_EXTN_PREFIX);
        }
        formatted_number.push_str(phone_number.extension());
    }

    // ------------------------------------------------------------------
    // Validation internals.

    fn is_valid_number_internal(&self, phone_number: &PhoneNumber) -> Result<bool, InvalidRegexError> {
        let region_code = self.get_region_code_for_country_code(phone_number.country_code());
        let Some(metadata) = metadata_for_region(region_code) else {
            return Ok(false);
        };
        if metadata.country_code != phone_number.country_code() {
            return Ok(false);
        }
        let national_significant_number = self.get_national_significant_number(phone_number);
        Ok(self.get_number_type_helper(&national_significant_number, metadata)?
            != PhoneNumberType::Unknown)
    }

    fn get_number_type_helper(
        &self,
        national_number: &str,
        metadata: &PhoneMetadata,
    ) -> Result<PhoneNumberType, InvalidRegexError> {
        if !self.is_number_matching_desc(national_number, &metadata.general_desc)? {
            return Ok(PhoneNumberType::Unknown);
        }
        if self.is_number_matching_desc(national_number, &metadata.toll_free)? {
            return Ok(PhoneNumberType::TollFree);
        }
        let is_fixed_line = self.is_number_matching_desc(national_number, &metadata.fixed_line)?;
        if is_fixed_line {
            if self.is_number_matching_desc(national_number, &metadata.mobile)? {
                return Ok(PhoneNumberType::FixedLineOrMobile);
            }
            return Ok(PhoneNumberType::FixedLine);
        }
        // Otherwise, test to see if the number is mobile. Only do this if
        // certain that the patterns for mobile and fixed line aren't the same.
        if self.is_number_matching_desc(national_number, &metadata.mobile)? {
            return Ok(PhoneNumberType::Mobile);
        }
        Ok(PhoneNumberType::Unknown)
    }

    fn is_number_matching_desc(
        &self,
        national_number: &str,
        desc: &PhoneNumberDesc,
    ) -> Result<bool, InvalidRegexError> {
        // We don't want to consider it a match when matching non-empty input
        // against an empty pattern.
        if !desc.has_data() {
            return Ok(false);
        }
        let actual_length = national_number.len() as i32;
        if !desc.possible_length.is_empty() && !desc.possible_length.contains(&actual_length) {
            return Ok(false);
        }
        let pattern = self.regexps.regexp_cache.get_regex(desc.national_number_pattern)?;
        Ok(pattern.full_match(national_number))
    }

    // ------------------------------------------------------------------
    // Parsing internals.

    /// Converts a number's representation to the digits it dials: alpha
    /// ("vanity") numbers are mapped through the keypad letters, everything
    /// else is reduced to plain digits.
    pub(crate) fn normalize(&self, number: &str) -> String {
        if self.regexps.valid_alpha_phone_pattern.full_match(number) {
            normalize_helper(&self.regexps.alpha_phone_mappings, true, number)
        } else {
            self.normalize_digits_only(number)
        }
    }

    /// Attempts to extract a possible number from the string passed in.
    fn extract_possible_number<'a>(&self, number: &'a str) -> &'a str {
        let Some(start_match) = self.regexps.valid_start_char_pattern.find(number) else {
            return "";
        };
        let mut possible_number = &number[start_match.start()..];
        // Remove trailing non-alpha non-numerical characters.
        possible_number = &possible_number[..trimmed_end_len(possible_number)];
        // Check for extra numbers at the end.
        if let Some(captures) = self
            .regexps
            .capture_up_to_second_number_start_pattern
            .captures(possible_number)
        {
            if let Some(up_to_second_number) = captures.get(1) {
                possible_number = up_to_second_number.as_str();
            }
        }
        possible_number
    }

    /// Strips any extension from the end of `number` and returns it. The
    /// extension is only removed when what precedes it is itself viable.
    fn maybe_strip_extension(&self, number: &mut String) -> Option<String> {
        let (strip_at, extension) = {
            let captures = self.regexps.extn_pattern.captures(number)?;
            let whole_match = captures.get(0)?;
            if !self.is_viable_phone_number(&number[..whole_match.start()]) {
                return None;
            }
            // The numbers are captured into groups in the regular expression.
            let extension = captures
                .iter()
                .skip(1)
                .flatten()
                .next()
                .map(|group| group.as_str().to_string())?;
            (whole_match.start(), extension)
        };
        number.truncate(strip_at);
        Some(extension)
    }

    /// Strips the IDD from the start of `number` when present, normalizing
    /// the rest either way, and reports how the country code is written.
    fn maybe_strip_international_prefix_and_normalize(
        &self,
        number: &mut String,
        possible_idd_prefix: &str,
    ) -> Result<CountryCodeSource, InvalidRegexError> {
        if number.is_empty() {
            return Ok(CountryCodeSource::FromDefaultCountry);
        }
        // Check to see if the number begins with one or more plus signs.
        let plus_end = self
            .regexps
            .plus_chars_pattern
            .find_start(number)
            .map(|found| found.end());
        if let Some(end) = plus_end {
            number.drain(..end);
            // Can now normalize the rest of the number since we've consumed
            // the "+" sign at the start.
            *number = self.normalize(number);
            return Ok(CountryCodeSource::FromNumberWithPlusSign);
        }
        // Attempt to parse the first digits as an international prefix.
        let idd_pattern = self.regexps.regexp_cache.get_regex(possible_idd_prefix)?;
        *number = self.normalize(number);
        Ok(if self.parse_prefix_as_idd(&idd_pattern, number) {
            CountryCodeSource::FromNumberWithIdd
        } else {
            CountryCodeSource::FromDefaultCountry
        })
    }

    /// Strips the IDD from the start of `number` when it is followed by
    /// something that could be a country code. Assumes `number` is already
    /// normalized.
    fn parse_prefix_as_idd(&self, idd_pattern: &Regex, number: &mut String) -> bool {
        let Some(found_end) = idd_pattern.find_start(number).map(|found| found.end()) else {
            return false;
        };
        // Only strip this if the first digit after the match is not a 0,
        // since country calling codes cannot begin with 0.
        let next_digit_is_zero = self
            .regexps
            .capturing_digit_pattern
            .captures(&number[found_end..])
            .map(|captures| &captures[1] == "0")
            .unwrap_or(false);
        if next_digit_is_zero {
            return false;
        }
        number.drain(..found_end);
        true
    }

    /// Picks the shortest leading digit run that is a country code we carry
    /// metadata for.
    fn extract_country_code(&self, full_number: &str) -> Option<(i32, String)> {
        if full_number.is_empty() || full_number.starts_with('0') {
            // Country codes do not begin with a '0'.
            return None;
        }
        for length in 1..=MAX_LENGTH_COUNTRY_CODE.min(full_number.len()) {
            let potential_country_code: i32 = full_number[..length].parse().ok()?;
            if region_code_for_country_code(potential_country_code) != UNKNOWN_REGION {
                return Some((potential_country_code, full_number[length..].to_string()));
            }
        }
        None
    }

    /// Works out the country code of `number` and returns the remaining
    /// national number, normalized. Sets the country code and its source on
    /// `phone_number`.
    fn maybe_extract_country_code(
        &self,
        number: &str,
        default_metadata: Option<&'static PhoneMetadata>,
        keep_raw_input: bool,
        phone_number: &mut PhoneNumber,
    ) -> Result<String, ParseErrorInternal> {
        if number.is_empty() {
            return Err(ParseError::NotANumber.into());
        }
        let mut full_number = number.to_string();
        // Set the default prefix to be something that will never match if
        // there is no default region.
        let possible_idd_prefix = default_metadata
            .map(|metadata| metadata.international_prefix)
            .unwrap_or("NonMatch");
        let country_code_source = self
            .maybe_strip_international_prefix_and_normalize(&mut full_number, possible_idd_prefix)?;
        if keep_raw_input {
            phone_number.set_country_code_source(country_code_source);
        }
        if country_code_source != CountryCodeSource::FromDefaultCountry {
            if full_number.len() <= MIN_LENGTH_FOR_NSN {
                return Err(ParseError::TooShortAfterIdd.into());
            }
            if let Some((country_code, national_number)) = self.extract_country_code(&full_number) {
                phone_number.set_country_code(country_code);
                return Ok(national_number);
            }
            // If this fails, they must be using a strange country calling code
            // that we don't recognize, or that doesn't exist.
            return Err(ParseError::InvalidCountryCode.into());
        }
        if let Some(metadata) = default_metadata {
            // Check to see if the number starts with the country calling code
            // for the default region. If so, we remove the country calling
            // code, and do some checks on the validity of the number before
            // and after.
            let default_country_code = metadata.country_code;
            let mut buf = itoa::Buffer::new();
            let default_country_code_str = buf.format(default_country_code);
            if let Some(rest) = full_number.strip_prefix(default_country_code_str) {
                let mut potential_national_number = rest.to_string();
                self.maybe_strip_national_prefix_and_carrier_code(
                    &mut potential_national_number,
                    metadata,
                    None,
                )?;
                let general_pattern = self
                    .regexps
                    .regexp_cache
                    .get_regex(metadata.general_desc.national_number_pattern)?;
                // If the number was not valid before but is valid now, or if
                // it was too long before, we consider the number with the
                // country calling code stripped to be a better result.
                if (!general_pattern.full_match(&full_number)
                    && general_pattern.full_match(&potential_national_number))
                    || matches!(
                        test_number_length(&full_number, metadata),
                        Err(ValidationError::TooLong)
                    )
                {
                    if keep_raw_input {
                        phone_number
                            .set_country_code_source(CountryCodeSource::FromNumberWithoutPlusSign);
                    }
                    phone_number.set_country_code(default_country_code);
                    return Ok(potential_national_number);
                }
            }
        }
        phone_number.set_country_code(0);
        Ok(full_number)
    }

    /// Strips any national prefix (and carrier code, where the plan captures
    /// one) from the start of `number`. Returns whether anything was
    /// stripped.
    pub(crate) fn maybe_strip_national_prefix_and_carrier_code(
        &self,
        number: &mut String,
        metadata: &PhoneMetadata,
        carrier_code: Option<&mut String>,
    ) -> Result<bool, InvalidRegexError> {
        let possible_national_prefix = metadata.national_prefix_for_parsing();
        if number.is_empty() || possible_national_prefix.is_empty() {
            // Early return for numbers of zero length or with no national
            // prefix.
            return Ok(false);
        }
        let prefix_regex = self.regexps.regexp_cache.get_regex(possible_national_prefix)?;
        let national_rule = self
            .regexps
            .regexp_cache
            .get_regex(metadata.general_desc.national_number_pattern)?;
        let transform_rule = metadata.national_prefix_transform_rule;
        let is_viable_original_number = national_rule.full_match(number);
        let (stripped_number, captured_carrier) = {
            let Some(captures) = prefix_regex.captures_start(number) else {
                return Ok(false);
            };
            let prefix_end = captures.get(0).map(|whole| whole.end()).unwrap_or(0);
            let group_count = prefix_regex.captures_len() - 1;
            let last_group_present =
                group_count > 0 && captures.get(group_count).is_some();
            if transform_rule.is_empty() || !last_group_present {
                // No transformation is required: check that the number is
                // still viable after the prefix is removed before stripping.
                if is_viable_original_number && !national_rule.full_match(&number[prefix_end..]) {
                    return Ok(false);
                }
                let captured_carrier = if last_group_present {
                    captures.get(1).map(|group| group.as_str().to_string())
                } else {
                    None
                };
                (number[prefix_end..].to_string(), captured_carrier)
            } else {
                // The national prefix takes a transformation with it, e.g.
                // when a mobile token has to be inserted.
                let transformed = prefix_regex.replace(number, transform_rule).into_owned();
                if is_viable_original_number && !national_rule.full_match(&transformed) {
                    return Ok(false);
                }
                let captured_carrier = captures.get(1).map(|group| group.as_str().to_string());
                (transformed, captured_carrier)
            }
        };
        *number = stripped_number;
        if let (Some(carrier_code), Some(captured_carrier)) = (carrier_code, captured_carrier) {
            carrier_code.push_str(&captured_carrier);
        }
        Ok(true)
    }

    fn parse_helper(
        &self,
        number_to_parse: &str,
        default_region: &str,
        keep_raw_input: bool,
    ) -> Result<PhoneNumber, ParseErrorInternal> {
        let extracted = self.extract_possible_number(number_to_parse);
        if !self.is_viable_phone_number(extracted) {
            return Err(ParseError::NotANumber.into());
        }
        let default_metadata = metadata_for_region(default_region);
        // The number could only be parsed without a plan for the default
        // region if it carries its own country code.
        if default_metadata.is_none() && !self.regexps.plus_chars_pattern.matches_start(extracted) {
            return Err(ParseError::InvalidCountryCode.into());
        }
        let mut phone_number = PhoneNumber::new();
        if keep_raw_input {
            phone_number.set_raw_input(number_to_parse.to_string());
        }
        let mut national_number = extracted.to_string();
        if let Some(extension) = self.maybe_strip_extension(&mut national_number) {
            phone_number.set_extension(extension);
        }
        let mut normalized_national_number = self.maybe_extract_country_code(
            &national_number,
            default_metadata,
            keep_raw_input,
            &mut phone_number,
        )?;
        let country_code = phone_number.country_code();
        let region_metadata = if country_code != 0 {
            metadata_for_region(self.get_region_code_for_country_code(country_code))
        } else {
            // If no extracted country calling code, use the region supplied
            // instead.
            let metadata = default_metadata.ok_or(ParseError::InvalidCountryCode)?;
            phone_number.set_country_code(metadata.country_code);
            default_metadata
        };
        if normalized_national_number.len() < MIN_LENGTH_FOR_NSN {
            return Err(ParseError::TooShortNsn.into());
        }
        if let Some(metadata) = region_metadata {
            let mut carrier_code = String::new();
            let mut potential_national_number = normalized_national_number.clone();
            self.maybe_strip_national_prefix_and_carrier_code(
                &mut potential_national_number,
                metadata,
                Some(&mut carrier_code),
            )?;
            // We require that the NSN remaining after stripping the national
            // prefix and carrier code be long enough to be a possible length
            // for the region. Otherwise, we don't do the stripping, since the
            // original number could be a valid short number.
            match test_number_length(&potential_national_number, metadata) {
                Err(ValidationError::TooShort)
                | Err(ValidationError::InvalidLength)
                | Ok(NumberLengthType::IsPossibleLocalOnly) => {}
                _ => {
                    normalized_national_number = potential_national_number;
                    if keep_raw_input && !carrier_code.is_empty() {
                        phone_number.set_preferred_domestic_carrier_code(carrier_code);
                    }
                }
            }
        }
        let length_of_national_number = normalized_national_number.len();
        if length_of_national_number < MIN_LENGTH_FOR_NSN {
            return Err(ParseError::TooShortNsn.into());
        }
        if length_of_national_number > MAX_LENGTH_FOR_NSN {
            return Err(ParseError::TooLongNsn.into());
        }
        set_italian_leading_zeros_for_phone_number(
            &normalized_national_number,
            &mut phone_number,
        );
        phone_number.set_national_number(
            normalized_national_number
                .parse::<u64>()
                .map_err(|_| ParseError::NotANumber)?,
        );
        Ok(phone_number)
    }
}

impl Default for PhoneNumberUtil {
    fn default() -> Self {
        Self::new()
    }
}

fn trimmed_end_len(number: &str) -> usize {
    number
        .char_indices()
        .rev()
        .find(|(_, character)| is_wanted_end_char(*character))
        .map(|(index, character)| index + character.len_utf8())
        .unwrap_or(0)
}

fn is_wanted_end_char(character: char) -> bool {
    // The hash character is retained, as it may signify the previous block
    // was an extension.
    character.is_alphanumeric() || character == '#'
}
