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

use std::sync::LazyLock;

use regex::Regex;

use crate::phonenumberutil::{
    helper_constants::{
        CAPTURE_UP_TO_SECOND_NUMBER_START, MAX_LENGTH_COUNTRY_CODE, MAX_LENGTH_FOR_NSN,
        PLUS_CHARS, VALID_PUNCTUATION,
    },
    helper_functions::create_extn_pattern,
};

/// The process-wide bundle of patterns the finder scans with. Compiled once
/// on first use and shared by every matcher instance.
pub(crate) static MATCHER_REGEXPS: LazyLock<PhoneNumberMatcherRegExps> =
    LazyLock::new(PhoneNumberMatcherRegExps::new);

/// Builds a bounded-repetition quantifier.
fn limit(lower: usize, upper: usize) -> String {
    format!("{{{},{}}}", lower, upper)
}

pub(crate) struct PhoneNumberMatcherRegExps {
    /// The phone number pattern used by the candidate producer: loosely
    /// grouped digit blocks with optional punctuation between them and an
    /// optional extension at the end. Case-insensitive so that upper-case
    /// and wide extension labels are found.
    pub pattern: Regex,

    /// Matches strings that look like publication pages, to exclude
    /// references like "Computing Surveys, 24:293-318, 1992. 21(3):48-57".
    pub pub_pages: Regex,

    /// Matches strings that look like dates using "/" as a separator.
    /// Examples: 3/10/2011, 31/10/96 or 08/31/95.
    pub slash_separated_dates: Regex,

    /// Matches timestamps. Examples: "2012-01-02 08:00". The trailing hour
    /// is anchored at the end of the candidate; the minutes follow in the
    /// surrounding text and are checked with `time_stamps_suffix`.
    pub time_stamps: Regex,
    pub time_stamps_suffix: Regex,

    /// Pattern to check that brackets match. Opening brackets should be
    /// closed within the phone number. This also checks that there is
    /// something inside the brackets. Having no brackets at all is also
    /// fine.
    pub matching_brackets: Regex,

    /// Matches white-space up to the next character that could start a phone
    /// number. Used to split a failed candidate into groups.
    pub group_separator: Regex,

    pub capturing_ascii_digits: Regex,

    /// The characters a phone number may start with: open brackets and the
    /// plus family.
    pub lead_class_pattern: Regex,

    /// Regular expression of valid characters before a marker that might
    /// indicate a second number.
    pub capture_up_to_second_number_start_pattern: Regex,
}

impl PhoneNumberMatcherRegExps {
    fn new() -> Self {
        let opening_parens = "(\\[\u{FF08}\u{FF3B}";
        let closing_parens = ")\\]\u{FF09}\u{FF3D}";
        let non_parens = format!("[^{}{}]", opening_parens, closing_parens);
        // Limit on the number of pairs of brackets in a phone number.
        let bracket_pair_limit = limit(0, 3);
        let matching_brackets = format!(
            "(?:[{op}])?(?:{np}+[{cl}])?{np}+(?:[{op}]{np}+[{cl}]){lim}{np}*",
            op = opening_parens,
            cl = closing_parens,
            np = non_parens,
            lim = bracket_pair_limit,
        );

        // Limit on the number of leading (plus) characters.
        let lead_limit = limit(0, 2);
        // Limit on the number of consecutive punctuation characters.
        let punctuation_limit = limit(0, 4);
        // The maximum number of digits allowed in a digit-separated block.
        // As we allow all digits in a single block, this should be set high
        // enough to accommodate the entire national number and the maximum
        // country code.
        let digit_block_limit = MAX_LENGTH_FOR_NSN + MAX_LENGTH_COUNTRY_CODE;
        // Limit on the number of blocks separated by punctuation. Uses
        // digit_block_limit since some formats use spaces to separate each
        // digit.
        let block_limit = limit(0, digit_block_limit);
        let punctuation = format!("[{}]{}", VALID_PUNCTUATION, punctuation_limit);
        // A digit block is a group of consecutive digits.
        let digit_sequence = format!("\\p{{Nd}}{}", limit(1, digit_block_limit));
        // Punctuation that may be at the start of a phone number: brackets
        // and plus signs.
        let lead_class_chars = format!("{}{}", opening_parens, PLUS_CHARS);
        let lead_class = format!("[{}]", lead_class_chars);
        let opening_punctuation = format!("(?:{}{})", lead_class, punctuation);

        let pattern = format!(
            "(?i){}{}{}(?:{}{}){}(?:{})?",
            opening_punctuation,
            lead_limit,
            digit_sequence,
            punctuation,
            digit_sequence,
            block_limit,
            create_extn_pattern(false),
        );

        // Matches white-space, which may indicate the end of a phone number
        // and the start of something else (such as a neighbouring zip-code).
        // Continues over characters that cannot begin a phone number, so
        // that the next attempt starts at one that can.
        let group_separator = format!("\\p{{Z}}[^{}\\p{{Nd}}]*", lead_class_chars);

        Self {
            pattern: Regex::new(&pattern).unwrap(),
            pub_pages: Regex::new(r"\d{1,5}-+\d{1,5}\s{0,4}\(\d{1,4}").unwrap(),
            slash_separated_dates: Regex::new(
                r"(?:(?:[0-3]?\d/[01]?\d)|(?:[01]?\d/[0-3]?\d))/(?:[12]\d)?\d{2}",
            )
            .unwrap(),
            time_stamps: Regex::new(r"[12]\d{3}[-/]?[01]\d[-/]?[0-3]\d +[0-2]\d$").unwrap(),
            time_stamps_suffix: Regex::new(r":[0-5]\d").unwrap(),
            matching_brackets: Regex::new(&matching_brackets).unwrap(),
            group_separator: Regex::new(&group_separator).unwrap(),
            capturing_ascii_digits: Regex::new(r"(\d+)").unwrap(),
            lead_class_pattern: Regex::new(&lead_class).unwrap(),
            capture_up_to_second_number_start_pattern: Regex::new(
                CAPTURE_UP_TO_SECOND_NUMBER_START,
            )
            .unwrap(),
        }
    }
}

#[cfg(test)]
mod tests {
    #[test]
    fn check_regexps_are_compiling() {
        super::PhoneNumberMatcherRegExps::new();
    }
}
