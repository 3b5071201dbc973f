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

use crate::phonenumberutil::phone_number::PhoneNumber;

/// One occurrence of a phone number within a piece of text.
///
/// Holds the byte range the number occupies, the matched substring exactly
/// as it was written, and the parsed number. For a match `m` over text `t`,
/// `&t[m.start()..m.end()] == m.raw_string()` always holds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhoneNumberMatch {
    start: usize,
    raw_string: String,
    number: PhoneNumber,
}

impl PhoneNumberMatch {
    pub(crate) fn new(start: usize, raw_string: String, number: PhoneNumber) -> Self {
        Self {
            start,
            raw_string,
            number,
        }
    }

    /// Byte offset of the first character of the match within the text.
    pub fn start(&self) -> usize {
        self.start
    }

    /// Byte offset just past the last character of the match.
    pub fn end(&self) -> usize {
        self.start + self.raw_string.len()
    }

    /// The matched substring, exactly as written in the text.
    pub fn raw_string(&self) -> &str {
        &self.raw_string
    }

    /// The parsed and verified phone number.
    pub fn number(&self) -> &PhoneNumber {
        &self.number
    }

    /// Consumes the match, yielding the parsed number.
    pub fn into_number(self) -> PhoneNumber {
        self.number
    }
}
