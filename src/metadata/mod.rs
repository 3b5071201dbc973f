// Copyright (C) 2009 The Libphonenumber Authors
// Copyright (C) 2025 The Kashin Vladislav (Rust adaptation author)
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

//! Numbering-plan metadata, compiled into the binary as static tables.
//!
//! The shape of these types follows the upstream metadata schema; only the
//! fields the finder and its parser actually consult are carried. All
//! patterns are written for the `regex` crate, so no look-around is allowed
//! anywhere in the tables.

mod regions;

pub use regions::{metadata_for_region, region_code_for_country_code, supported_regions};

/// Description of a class of numbers (general, fixed-line, mobile, ...)
/// within one numbering plan.
#[derive(Debug)]
pub struct PhoneNumberDesc {
    /// Pattern the national significant number must match in full. Empty
    /// means no numbers of this class exist in the plan.
    pub national_number_pattern: &'static str,
    /// Allowed lengths of the national significant number. `-1` marks a
    /// class with no numbers at all.
    pub possible_length: &'static [i32],
    /// Lengths that are only dialable locally (e.g. without an area code).
    pub possible_length_local_only: &'static [i32],
}

impl PhoneNumberDesc {
    pub fn has_data(&self) -> bool {
        !self.national_number_pattern.is_empty()
    }
}

/// One formatting rule: a capturing pattern over the national significant
/// number plus the replacement that lays the groups out.
#[derive(Debug)]
pub struct NumberFormat {
    pub pattern: &'static str,
    pub format: &'static str,
    /// Successively refined prefix patterns; the last one decides whether
    /// this rule applies. Empty means the rule applies to every number the
    /// pattern itself matches.
    pub leading_digits_pattern: &'static [&'static str],
    /// How the national prefix is laid out when formatting nationally,
    /// already resolved against the plan's prefix (e.g. `"(0$1)"`). Empty
    /// when the prefix is never written.
    pub national_prefix_formatting_rule: &'static str,
    pub national_prefix_optional_when_formatting: bool,
}

/// The numbering plan of one region.
#[derive(Debug)]
pub struct PhoneMetadata {
    pub id: &'static str,
    pub country_code: i32,
    pub international_prefix: &'static str,
    /// National dialling prefix, empty when the region has none.
    pub national_prefix: &'static str,
    /// Pattern stripped off the front of a nationally-formatted number when
    /// parsing; defaults to `national_prefix` when empty.
    pub national_prefix_for_parsing: &'static str,
    pub national_prefix_transform_rule: &'static str,
    pub general_desc: PhoneNumberDesc,
    pub fixed_line: PhoneNumberDesc,
    pub mobile: PhoneNumberDesc,
    pub toll_free: PhoneNumberDesc,
    pub number_formats: &'static [NumberFormat],
}

impl PhoneMetadata {
    /// The pattern used when stripping a national prefix during parsing.
    pub fn national_prefix_for_parsing(&self) -> &'static str {
        if self.national_prefix_for_parsing.is_empty() {
            self.national_prefix
        } else {
            self.national_prefix_for_parsing
        }
    }
}

/// A description with no numbers at all, for classes a plan does not use.
pub(crate) const NO_DESC: PhoneNumberDesc = PhoneNumberDesc {
    national_number_pattern: "",
    possible_length: &[-1],
    possible_length_local_only: &[],
};
