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

use strum::EnumIter;

/// Defines the standardized output formats for a phone number.
///
/// For example, the Google Switzerland office number would be:
/// - **INTERNATIONAL**: `+41 44 668 1800`
/// - **NATIONAL**: `044 668 1800`
/// - **E164**: `+41446681800` (international format without formatting)
/// - **RFC3966**: `tel:+41-44-668-1800` (hyphen-separated with a "tel:" prefix)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PhoneNumberFormat {
    /// International format with no spaces or symbols, always starting with
    /// a `+` followed by the country code. Example: `+41446681800`.
    E164,
    /// Country code plus the nationally formatted number, space separated.
    /// Example: `+41 44 668 1800`.
    International,
    /// The format used for dialing within the number's own country,
    /// including the national prefix where one is written.
    /// Example: `044 668 1800`.
    National,
    /// The "tel:" link format with hyphens between digit groups.
    /// Example: `tel:+41-44-668-1800`.
    RFC3966,
}

/// Categorizes phone numbers based on their primary use.
///
/// Only the classes the compiled-in metadata distinguishes are carried.
#[derive(Debug, EnumIter, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PhoneNumberType {
    /// Traditional landline numbers tied to a geographic location.
    FixedLine,
    /// Numbers assigned to wireless devices.
    Mobile,
    /// Used in regions (e.g. the USA) where fixed-line and mobile numbers
    /// cannot be told apart by looking at the number itself.
    FixedLineOrMobile,
    /// Calls are free for the caller, e.g. "800" numbers in the US.
    TollFree,
    /// The number does not match any known pattern for its region.
    Unknown,
}

/// Describes the degree of similarity between two phone numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatchType {
    /// The two numbers are entirely different.
    NoMatch,
    /// One number is a shorter version of the other's National Significant
    /// Number (NSN). For example, `6502530000` is a short match for
    /// `16502530000`.
    ShortNsnMatch,
    /// The numbers share the same NSN but may differ in country code or
    /// formatting, e.g. `0446681800` and `+41446681800`.
    NsnMatch,
    /// Identical in country code, NSN and extension.
    ExactMatch,
}

/// The possible outcomes of checking a number's length against its region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumberLengthType {
    /// The length matches a complete, dialable number.
    IsPossible,
    /// The length only matches a number dialable within a local area,
    /// e.g. a US number without its area code.
    IsPossibleLocalOnly,
}
