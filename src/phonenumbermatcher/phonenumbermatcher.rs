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

//! The scanner that walks a piece of text and pulls phone numbers out of it.
//!
//! Scanning runs in two stages: a loose pattern proposes candidate
//! substrings, then each candidate is classified against common numeric
//! noise (dates, timestamps, publication pages), parsed, and verified at the
//! configured [`Leniency`]. When a whole candidate fails verification, the
//! matcher peels whitespace-separated groups off either end and retries the
//! inner parts.

use log::trace;
use unicode_general_category::{get_general_category, GeneralCategory};

use crate::{
    phonenumberutil::phonenumberutil::PhoneNumberUtil,
    regex_util::{RegexConsume, RegexFullMatch},
};

use super::{
    leniency::Leniency, matcher_regexps::MATCHER_REGEXPS, phone_number_match::PhoneNumberMatch,
};

/// The iterator state: either we still have to look for the next match, or
/// one is cached and waiting to be handed out, or the text is exhausted.
enum MatcherState {
    NotReady,
    Ready(PhoneNumberMatch),
    Done,
}

/// A stateful scanner over one piece of text.
///
/// Construct it with [`PhoneNumberUtil::find_numbers`] or
/// [`PhoneNumberMatcher::new`] and drive it either through the `Iterator`
/// implementation or through [`has_next`](Self::has_next) /
/// [`Iterator::next`]. Matches come out in strictly increasing text order
/// and never overlap.
///
/// A matcher borrows its text and util for as long as it lives; it is not
/// meant to be shared between threads, but any number of matchers may run in
/// parallel over their own texts.
pub struct PhoneNumberMatcher<'a> {
    phone_util: &'a PhoneNumberUtil,
    /// The text searched.
    text: &'a str,
    /// The region numbers without an explicit country code are assumed to
    /// belong to.
    preferred_region: String,
    leniency: Leniency,
    /// Attempts left before scanning gives up; one is spent per rejected
    /// candidate, including the peeled inner ones. Bounds the work on
    /// adversarial input.
    max_tries: i32,
    state: MatcherState,
    /// Byte offset the next scan starts from. Never decreases.
    search_index: usize,
}

impl<'a> PhoneNumberMatcher<'a> {
    /// Creates a matcher over `text` with the default verification tier
    /// (`Leniency::Valid`) and an effectively unlimited attempt budget.
    pub fn new(phone_util: &'a PhoneNumberUtil, text: &'a str, preferred_region: &str) -> Self {
        Self::with_options(phone_util, text, preferred_region, Leniency::Valid, i32::MAX)
    }

    /// Creates a matcher with an explicit leniency tier and attempt budget.
    /// A matcher constructed with `max_tries == 0` finds nothing.
    pub fn with_options(
        phone_util: &'a PhoneNumberUtil,
        text: &'a str,
        preferred_region: &str,
        leniency: Leniency,
        max_tries: i32,
    ) -> Self {
        Self {
            phone_util,
            text,
            preferred_region: preferred_region.to_string(),
            leniency,
            max_tries,
            state: MatcherState::NotReady,
            search_index: 0,
        }
    }

    /// Returns whether another match is available, searching for it if
    /// necessary. Idempotent until the match is consumed with `next`.
    pub fn has_next(&mut self) -> bool {
        if let MatcherState::NotReady = self.state {
            match self.find(self.search_index) {
                Some(phone_match) => {
                    // No need to keep anything that precedes the match.
                    self.search_index = phone_match.end();
                    self.state = MatcherState::Ready(phone_match);
                }
                None => self.state = MatcherState::Done,
            }
        }
        matches!(self.state, MatcherState::Ready(_))
    }

    /// Attempts to find the next match in the text starting at `index`.
    fn find(&mut self, index: usize) -> Option<PhoneNumberMatch> {
        let mut index = index;
        while self.max_tries > 0 {
            let found = MATCHER_REGEXPS.pattern.find_at(self.text, index)?;
            let start = found.start();
            let mut candidate = found.as_str();
            // Check for extra numbers at the end: we don't want one candidate
            // to swallow the start of a neighbouring number.
            if let Some(captures) = MATCHER_REGEXPS
                .capture_up_to_second_number_start_pattern
                .captures(candidate)
            {
                if let Some(up_to_second_number) = captures.get(1) {
                    candidate = up_to_second_number.as_str();
                }
            }
            if let Some(phone_match) = self.extract_match(candidate, start) {
                return Some(phone_match);
            }
            // Move past this candidate and keep looking.
            index = start + candidate.len();
            self.max_tries -= 1;
        }
        None
    }

    /// Classifies the candidate against numeric noise, then tries to parse
    /// and verify it, falling back to its inner parts.
    fn extract_match(&mut self, candidate: &str, offset: usize) -> Option<PhoneNumberMatch> {
        // Skip a match that is more likely to be a publication page reference.
        if MATCHER_REGEXPS.pub_pages.is_match(candidate) {
            trace!("candidate {:?} rejected: publication pages", candidate);
            return None;
        }
        // Skip a match that is more likely a date.
        if MATCHER_REGEXPS.slash_separated_dates.is_match(candidate) {
            trace!("candidate {:?} rejected: slash-separated date", candidate);
            return None;
        }
        // Skip potential time-stamps.
        if MATCHER_REGEXPS.time_stamps.is_match(candidate) {
            let following_text = &self.text[offset + candidate.len()..];
            if MATCHER_REGEXPS.time_stamps_suffix.matches_start(following_text) {
                trace!("candidate {:?} rejected: timestamp", candidate);
                return None;
            }
        }
        // Try to come up with a valid match given the entire candidate.
        if let Some(phone_match) = self.parse_and_verify(candidate, offset) {
            return Some(phone_match);
        }
        // If that failed, try to find an "inner match" -- there might be a
        // phone number within this candidate.
        self.extract_inner_match(candidate, offset)
    }

    /// Attempts to extract a match from `candidate` when the whole candidate
    /// does not qualify: first the leading whitespace-delimited group alone,
    /// then everything after it, then everything before the last group.
    fn extract_inner_match(&mut self, candidate: &str, offset: usize) -> Option<PhoneNumberMatch> {
        let group_separator = &MATCHER_REGEXPS.group_separator;
        let first_separator = group_separator.find(candidate)?;
        // Found a group separator in the candidate, so now re-check the
        // validity of the number grouped by the separator. The separator
        // itself stays on the head and is trimmed off below.
        let group_start_index = first_separator.end();

        // Try the first group by itself.
        let mut first_group_only = candidate[..group_start_index].to_string();
        self.phone_util.trim_unwanted_end_chars(&mut first_group_only);
        if let Some(phone_match) = self.parse_and_verify(&first_group_only, offset) {
            return Some(phone_match);
        }
        self.max_tries -= 1;

        // Try the rest of the candidate without the first group.
        let mut without_first_group = candidate[group_start_index..].to_string();
        self.phone_util.trim_unwanted_end_chars(&mut without_first_group);
        if let Some(phone_match) =
            self.parse_and_verify(&without_first_group, offset + group_start_index)
        {
            return Some(phone_match);
        }
        self.max_tries -= 1;

        if self.max_tries > 0 {
            // Find the last group.
            let mut last_group_start = group_start_index;
            while let Some(separator) = group_separator.find_at(candidate, last_group_start) {
                last_group_start = separator.end();
            }
            let mut without_last_group = candidate[..last_group_start].to_string();
            self.phone_util.trim_unwanted_end_chars(&mut without_last_group);
            if without_last_group == first_group_only {
                // If there are only two groups, then the group "without the
                // last group" is the same as the first group. In these cases,
                // we don't want to re-check the number group, so we exit
                // already.
                return None;
            }
            if let Some(phone_match) = self.parse_and_verify(&without_last_group, offset) {
                return Some(phone_match);
            }
            self.max_tries -= 1;
        }
        None
    }

    /// Parses a candidate and verifies it against the leniency tier. Returns
    /// the finished match on success, with the context fields the parser
    /// recorded stripped off the number.
    fn parse_and_verify(&self, candidate: &str, offset: usize) -> Option<PhoneNumberMatch> {
        // Check the candidate doesn't contain any formatting which would
        // indicate that it really isn't a phone number.
        if !MATCHER_REGEXPS.matching_brackets.full_match(candidate) {
            return None;
        }

        // If leniency is set to VALID or stricter, we also want to skip
        // numbers that are surrounded by Latin alphabetic characters, to
        // skip cases like abc8005001234 or 8005001234def.
        if self.leniency >= Leniency::Valid {
            // If the candidate is not at the start of the text, and does not
            // start with phone-number punctuation, check the previous
            // character.
            if offset > 0 && !MATCHER_REGEXPS.lead_class_pattern.matches_start(candidate) {
                if let Some(previous_char) = self.text[..offset].chars().next_back() {
                    // We return if it is a latin letter or an invalid
                    // punctuation symbol.
                    if is_invalid_punctuation_symbol(previous_char) || is_latin_letter(previous_char)
                    {
                        return None;
                    }
                }
            }
            let last_char_index = offset + candidate.len();
            if last_char_index < self.text.len() {
                if let Some(next_char) = self.text[last_char_index..].chars().next() {
                    if is_invalid_punctuation_symbol(next_char) || is_latin_letter(next_char) {
                        return None;
                    }
                }
            }
        }

        let mut number = self
            .phone_util
            .parse_and_keep_raw_input(candidate, &self.preferred_region)
            .ok()?;
        if self.leniency.verify(&number, candidate, self.phone_util) {
            // We used parse_and_keep_raw_input to create this number, but for
            // now we don't return the extra values parsed.
            // TODO: stop clearing all values here and switch all users over
            // to using raw_string() rather than the raw_input() on the number.
            number.clear_country_code_source();
            number.clear_raw_input();
            number.clear_preferred_domestic_carrier_code();
            return Some(PhoneNumberMatch::new(offset, candidate.to_string(), number));
        }
        None
    }
}

impl Iterator for PhoneNumberMatcher<'_> {
    type Item = PhoneNumberMatch;

    fn next(&mut self) -> Option<PhoneNumberMatch> {
        if !self.has_next() {
            return None;
        }
        if let MatcherState::Ready(phone_match) =
            std::mem::replace(&mut self.state, MatcherState::NotReady)
        {
            Some(phone_match)
        } else {
            None
        }
    }
}

/// Whether `letter` comes from one of the Latin (or combining-mark) blocks.
/// Used to reject digit runs embedded in words, while still allowing numbers
/// next to CJK or other non-Latin scripts, where there may be no whitespace.
fn is_latin_letter(letter: char) -> bool {
    // Combining marks are a subset of non-spacing-mark.
    if !letter.is_alphabetic()
        && get_general_category(letter) != GeneralCategory::NonspacingMark
    {
        return false;
    }
    matches!(
        letter as u32,
        // Basic Latin and Latin-1 Supplement.
        0x0000..=0x00FF
        // Latin Extended-A and Extended-B.
        | 0x0100..=0x024F
        // Combining Diacritical Marks.
        | 0x0300..=0x036F
        // Latin Extended Additional.
        | 0x1E00..=0x1EFF
    )
}

fn is_invalid_punctuation_symbol(character: char) -> bool {
    character == '%' || get_general_category(character) == GeneralCategory::CurrencySymbol
}

#[cfg(test)]
mod tests {
    use super::{is_invalid_punctuation_symbol, is_latin_letter};

    #[test]
    fn latin_letter_classification() {
        assert!(is_latin_letter('c'));
        assert!(is_latin_letter('C'));
        assert!(is_latin_letter('\u{00C9}')); // É
        assert!(is_latin_letter('\u{0301}')); // combining acute accent
        // Punctuation, digits and white-space are not considered letters.
        assert!(!is_latin_letter(':'));
        assert!(!is_latin_letter('5'));
        assert!(!is_latin_letter('-'));
        assert!(!is_latin_letter('.'));
        assert!(!is_latin_letter(' '));
        // Non-latin letters are deliberately let through.
        assert!(!is_latin_letter('\u{0416}')); // Ж cyrillic
        assert!(!is_latin_letter('\u{306E}')); // の hiragana
    }

    #[test]
    fn invalid_punctuation_symbols() {
        assert!(is_invalid_punctuation_symbol('%'));
        assert!(is_invalid_punctuation_symbol('$'));
        assert!(is_invalid_punctuation_symbol('\u{20AC}')); // €
        assert!(!is_invalid_punctuation_symbol('-'));
        assert!(!is_invalid_punctuation_symbol('#'));
    }
}
