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

//! The verification tiers a candidate must clear before it is emitted as a
//! match, and the predicates they are built from.

use log::error;
use strum::EnumIter;

use crate::phonenumberutil::{
    enums::{MatchType, PhoneNumberFormat},
    phone_number::{CountryCodeSource, PhoneNumber},
    phonenumberutil::PhoneNumberUtil,
};

use super::matcher_regexps::MATCHER_REGEXPS;

/// How strictly a candidate's formatting must correspond to the canonical
/// grouping of the number it parses to.
///
/// The tiers are ordered: everything `ExactGrouping` accepts is accepted by
/// `StrictGrouping`, and everything `StrictGrouping` accepts is accepted by
/// `Valid`. `Possible` sits apart, accepting anything of a plausible length
/// whether or not it is a real number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, EnumIter)]
pub enum Leniency {
    /// Accepts possible numbers, valid or not. Candidates are length-checked
    /// but not matched against the numbering plan.
    Possible,
    /// Accepts valid numbers that are written with acceptable extension and
    /// carrier-code markers and carry their national prefix when the plan
    /// requires one written.
    Valid,
    /// As `Valid`, and the digit groups of the candidate must not cut across
    /// the groups of the number's canonical format.
    StrictGrouping,
    /// As `Valid`, and the digit groups of the candidate must be exactly the
    /// groups of the number's canonical format.
    ExactGrouping,
}

impl Leniency {
    /// Decides whether `number`, parsed from `candidate`, clears this tier.
    pub(crate) fn verify(
        &self,
        number: &PhoneNumber,
        candidate: &str,
        util: &PhoneNumberUtil,
    ) -> bool {
        match self {
            Leniency::Possible => util.is_possible_number(number),
            Leniency::Valid => {
                util.is_valid_number(number)
                    && contains_only_valid_x_chars(number, candidate, util)
                    && is_national_prefix_present_if_required(number, util)
            }
            Leniency::StrictGrouping => {
                Leniency::Valid.verify(number, candidate, util)
                    && !contains_more_than_one_slash(candidate)
                    && check_number_grouping_is_valid(
                        number,
                        candidate,
                        util,
                        all_number_groups_remain_consistent,
                    )
            }
            Leniency::ExactGrouping => {
                Leniency::Valid.verify(number, candidate, util)
                    && !contains_more_than_one_slash(candidate)
                    && check_number_grouping_is_valid(
                        number,
                        candidate,
                        util,
                        all_number_groups_are_exactly_present,
                    )
            }
        }
    }
}

/// A candidate with two or more slashes is more likely two numbers (or a
/// number and something else) than one number written with slashes.
fn contains_more_than_one_slash(candidate: &str) -> bool {
    candidate.bytes().filter(|byte| *byte == b'/').count() >= 2
}

/// Checks that any `x`/`X` characters inside the candidate are legitimate:
/// either the `xx` carrier-code marker, after which the rest of the candidate
/// must still dial the same national number, or a single extension marker
/// whose digits must equal the parsed extension. A trailing `x` as the very
/// last character is ignored.
fn contains_only_valid_x_chars(
    number: &PhoneNumber,
    candidate: &str,
    util: &PhoneNumberUtil,
) -> bool {
    // The characters 'x' and 'X' can be (1) a carrier code, in which case
    // they always precede the national significant number or (2) an
    // extension sign, in which case they always precede the extension number.
    // We assume a carrier code is more than 1 digit, so the first case has to
    // have more than 1 consecutive 'x' or 'X', whereas the second case can
    // only have exactly 1 'x' or 'X'.
    let bytes = candidate.as_bytes();
    let mut index = 0;
    while index + 1 < bytes.len() {
        if bytes[index] == b'x' || bytes[index] == b'X' {
            let next = bytes[index + 1];
            if next == b'x' || next == b'X' {
                // This is the carrier code case, in which the 'X's always
                // precede the national significant number.
                index += 1;
                if util.is_number_match_with_one_string(number, &candidate[index..])
                    != MatchType::NsnMatch
                {
                    return false;
                }
            } else if util.normalize_digits_only(&candidate[index..]) != number.extension() {
                return false;
            }
        }
        index += 1;
    }
    true
}

/// When the number was parsed against the default region, the plan may
/// require the national prefix to have been written; check the raw input
/// actually carried one.
fn is_national_prefix_present_if_required(number: &PhoneNumber, util: &PhoneNumberUtil) -> bool {
    // First, check how we deduced the country code. If it was written in
    // international format, then the national prefix is not required.
    if number.country_code_source() != CountryCodeSource::FromDefaultCountry {
        return true;
    }
    let phone_number_region = util.get_region_code_for_country_code(number.country_code());
    let Some(metadata) = util.get_metadata_for_region(phone_number_region) else {
        return true;
    };
    // Check if a national prefix should be present when formatting this
    // number.
    let national_number = util.get_national_significant_number(number);
    let format_rule =
        match util.choose_formatting_pattern_for_number(metadata.number_formats, &national_number) {
            Ok(format_rule) => format_rule,
            Err(err) => {
                error!("Invalid regex in number format metadata! {}", err);
                return false;
            }
        };
    let Some(format_rule) = format_rule else {
        return true;
    };
    if format_rule.national_prefix_formatting_rule.is_empty() {
        return true;
    }
    if format_rule.national_prefix_optional_when_formatting {
        // The national-prefix is optional in these cases, so we don't need to
        // check if it was present.
        return true;
    }
    // Remove the first-group symbol.
    let candidate_national_prefix_rule =
        format_rule.national_prefix_formatting_rule.replace("$1", "");
    let candidate_national_prefix_rule = util.normalize_digits_only(&candidate_national_prefix_rule);
    if candidate_national_prefix_rule.is_empty() {
        // National Prefix not needed for this number.
        return true;
    }
    let mut normalized_raw_input = util.normalize_digits_only(number.raw_input());
    match util.maybe_strip_national_prefix_and_carrier_code(&mut normalized_raw_input, metadata, None)
    {
        Ok(stripped) => stripped,
        Err(err) => {
            error!("Invalid regex in national prefix metadata! {}", err);
            false
        }
    }
}

fn check_number_grouping_is_valid(
    number: &PhoneNumber,
    candidate: &str,
    util: &PhoneNumberUtil,
    checker: fn(&PhoneNumberUtil, &PhoneNumber, &str, &[String]) -> bool,
) -> bool {
    // Normalize the decimal digits to ASCII while keeping the formatting
    // characters in place, so grouping can be checked byte-wise.
    let normalized_candidate: String = dec_from_char::normalize_decimals(candidate).into();
    let formatted_number_groups = get_national_number_groups(util, number);
    checker(util, number, &normalized_candidate, &formatted_number_groups)
}

/// The digit groups of the number's canonical format. This relies on the
/// RFC3966 rendering `tel:+CC-G1-G2-...-GN[;ext=EXT]`: everything between the
/// country code's dash and the extension marker, split on dashes.
fn get_national_number_groups(util: &PhoneNumberUtil, number: &PhoneNumber) -> Vec<String> {
    let rfc3966_format = util.format(number, PhoneNumberFormat::RFC3966);
    // We remove the extension part from the formatted string before splitting
    // it into different groups.
    let end_index = rfc3966_format.find(';').unwrap_or(rfc3966_format.len());
    // The country-code will have a '-' following it.
    let start_index = rfc3966_format
        .find('-')
        .map(|index| index + 1)
        .unwrap_or(0);
    rfc3966_format[start_index..end_index]
        .split('-')
        .map(str::to_string)
        .collect()
}

/// The strict-grouping checker: every canonical group must appear in order
/// inside the candidate, and a candidate that runs digits straight through
/// after the first group must spell the whole national number as one run.
fn all_number_groups_remain_consistent(
    util: &PhoneNumberUtil,
    number: &PhoneNumber,
    normalized_candidate: &str,
    formatted_number_groups: &[String],
) -> bool {
    let mut from_index = 0usize;
    for (group_index, group) in formatted_number_groups.iter().enumerate() {
        // Fails if the substring of normalized_candidate starting from
        // from_index doesn't contain the consecutive digits in this group.
        let Some(found) = normalized_candidate[from_index..].find(group.as_str()) else {
            return false;
        };
        from_index += found + group.len();
        if group_index == 0 && from_index < normalized_candidate.len() {
            // We are at the position right after the national destination
            // code. If there is no formatting symbol here, the candidate runs
            // its digits together; we then only accept it when the whole
            // national significant number is present as one block.
            if normalized_candidate.as_bytes()[from_index].is_ascii_digit() {
                let national_significant_number = util.get_national_significant_number(number);
                return normalized_candidate[from_index - group.len()..]
                    .starts_with(&national_significant_number);
            }
        }
    }
    // The check here makes sure that we haven't mistakenly already used the
    // extension. This can happen if we interpret the extension as part of
    // the phone number.
    normalized_candidate[from_index..].contains(number.extension())
}

/// The exact-grouping checker: the candidate's digit runs, read from the
/// back, must equal the canonical groups, with the national prefix allowed
/// in front of the first one.
fn all_number_groups_are_exactly_present(
    util: &PhoneNumberUtil,
    number: &PhoneNumber,
    normalized_candidate: &str,
    formatted_number_groups: &[String],
) -> bool {
    let candidate_groups: Vec<&str> = MATCHER_REGEXPS
        .capturing_ascii_digits
        .find_iter(normalized_candidate)
        .map(|found| found.as_str())
        .collect();
    if candidate_groups.is_empty() {
        return false;
    }
    // Set this to the last group, skipping it if the number has an extension.
    let mut candidate_number_group_index: isize = if number.has_extension() {
        candidate_groups.len() as isize - 2
    } else {
        candidate_groups.len() as isize - 1
    };
    if candidate_number_group_index < 0 {
        return false;
    }
    // First we check if the national significant number is formatted as a
    // block. We use contains and not equals, since the national significant
    // number can be present with a prefix such as a national number prefix,
    // or the country code itself.
    if candidate_groups.len() == 1
        || candidate_groups[candidate_number_group_index as usize]
            .contains(util.get_national_significant_number(number).as_str())
    {
        return true;
    }
    // Starting from the end, go through in reverse, excluding the first
    // group, and check the candidate and number groups are the same.
    let mut formatted_number_group_index = formatted_number_groups.len() as isize - 1;
    while formatted_number_group_index > 0 && candidate_number_group_index >= 0 {
        if candidate_groups[candidate_number_group_index as usize]
            != formatted_number_groups[formatted_number_group_index as usize]
        {
            return false;
        }
        formatted_number_group_index -= 1;
        candidate_number_group_index -= 1;
    }
    // Now check the first group. There may be a national prefix at the start,
    // so we only check that the candidate group ends with the first number
    // group.
    candidate_number_group_index >= 0
        && candidate_groups[candidate_number_group_index as usize]
            .ends_with(formatted_number_groups[0].as_str())
}

#[cfg(test)]
mod tests {
    use super::Leniency;

    #[test]
    fn leniency_tiers_are_ordered() {
        assert!(Leniency::Possible < Leniency::Valid);
        assert!(Leniency::Valid < Leniency::StrictGrouping);
        assert!(Leniency::StrictGrouping < Leniency::ExactGrouping);
    }
}
