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

//! Finds phone numbers embedded in free text.
//!
//! ```no_run
//! use rlibphonematcher::PHONE_NUMBER_UTIL;
//!
//! let text = "Reach me at (650) 253-0000 x123 or 415-555-1212.";
//! for found in PHONE_NUMBER_UTIL.find_numbers(text, "US") {
//!     println!("{}..{}: {:?}", found.start(), found.end(), found.number());
//! }
//! ```

mod metadata;
mod phonenumberutil;
mod phonenumbermatcher;
mod regexp_cache;
pub(crate) mod regex_util;

pub use phonenumberutil::{
    PHONE_NUMBER_UTIL,
    phonenumberutil::PhoneNumberUtil,
    errors::{*},
    enums::{*},
    phone_number::{CountryCodeSource, PhoneNumber},
};
pub use phonenumbermatcher::{Leniency, PhoneNumberMatch, PhoneNumberMatcher};
pub use metadata::{NumberFormat, PhoneMetadata, PhoneNumberDesc};
mod tests;
