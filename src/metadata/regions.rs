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

//! The per-region tables. Patterns are modelled on the upstream testing
//! metadata: simple enough to audit by eye, strict enough that validity and
//! grouping behave like the real plans for common numbers.

use crate::phonenumberutil::helper_constants::UNKNOWN_REGION;

use super::{NumberFormat, PhoneMetadata, PhoneNumberDesc, NO_DESC};

static US: PhoneMetadata = PhoneMetadata {
    id: "US",
    country_code: 1,
    international_prefix: "011",
    national_prefix: "1",
    national_prefix_for_parsing: "1",
    national_prefix_transform_rule: "",
    general_desc: PhoneNumberDesc {
        national_number_pattern: r"[13-689]\d{9}|2[0-35-9]\d{8}",
        possible_length: &[10],
        possible_length_local_only: &[7],
    },
    fixed_line: PhoneNumberDesc {
        national_number_pattern: r"[13-689]\d{9}|2[0-35-9]\d{8}",
        possible_length: &[10],
        possible_length_local_only: &[7],
    },
    mobile: PhoneNumberDesc {
        national_number_pattern: r"[13-689]\d{9}|2[0-35-9]\d{8}",
        possible_length: &[10],
        possible_length_local_only: &[7],
    },
    toll_free: PhoneNumberDesc {
        national_number_pattern: r"8(?:00|66|77|88)\d{7}",
        possible_length: &[10],
        possible_length_local_only: &[],
    },
    number_formats: &[
        NumberFormat {
            pattern: r"(\d{3})(\d{4})",
            format: "$1 $2",
            leading_digits_pattern: &[],
            national_prefix_formatting_rule: "",
            national_prefix_optional_when_formatting: false,
        },
        NumberFormat {
            pattern: r"(\d{3})(\d{3})(\d{4})",
            format: "($1) $2-$3",
            leading_digits_pattern: &[],
            national_prefix_formatting_rule: "",
            national_prefix_optional_when_formatting: false,
        },
    ],
};

static GB: PhoneMetadata = PhoneMetadata {
    id: "GB",
    country_code: 44,
    international_prefix: "00",
    national_prefix: "0",
    national_prefix_for_parsing: "0",
    national_prefix_transform_rule: "",
    general_desc: PhoneNumberDesc {
        national_number_pattern: r"[1-9]\d{9}",
        possible_length: &[10],
        possible_length_local_only: &[],
    },
    fixed_line: PhoneNumberDesc {
        national_number_pattern: r"[1-6]\d{9}",
        possible_length: &[10],
        possible_length_local_only: &[],
    },
    mobile: PhoneNumberDesc {
        national_number_pattern: r"7[1-57-9]\d{8}",
        possible_length: &[10],
        possible_length_local_only: &[],
    },
    toll_free: PhoneNumberDesc {
        national_number_pattern: r"80\d{8}",
        possible_length: &[10],
        possible_length_local_only: &[],
    },
    number_formats: &[
        NumberFormat {
            pattern: r"(\d{2})(\d{4})(\d{4})",
            format: "$1 $2 $3",
            leading_digits_pattern: &["[1-59]|[78]0"],
            national_prefix_formatting_rule: "(0$1)",
            national_prefix_optional_when_formatting: false,
        },
        NumberFormat {
            pattern: r"(\d{4})(\d{6})",
            format: "$1 $2",
            leading_digits_pattern: &["7[1-57-9]"],
            national_prefix_formatting_rule: "(0$1)",
            national_prefix_optional_when_formatting: false,
        },
    ],
};

static DE: PhoneMetadata = PhoneMetadata {
    id: "DE",
    country_code: 49,
    international_prefix: "00",
    national_prefix: "0",
    national_prefix_for_parsing: "0",
    national_prefix_transform_rule: "",
    general_desc: PhoneNumberDesc {
        national_number_pattern: r"[1-9]\d{4,10}",
        possible_length: &[5, 6, 7, 8, 9, 10, 11],
        possible_length_local_only: &[],
    },
    fixed_line: PhoneNumberDesc {
        national_number_pattern: r"[2-9]\d{4,10}",
        possible_length: &[5, 6, 7, 8, 9, 10, 11],
        possible_length_local_only: &[],
    },
    mobile: PhoneNumberDesc {
        national_number_pattern: r"1[5-7]\d{7,8}",
        possible_length: &[10, 11],
        possible_length_local_only: &[],
    },
    toll_free: PhoneNumberDesc {
        national_number_pattern: r"800\d{7,9}",
        possible_length: &[10, 11, 12],
        possible_length_local_only: &[],
    },
    number_formats: &[
        NumberFormat {
            pattern: r"(\d{2})(\d{4,9})",
            format: "$1 $2",
            leading_digits_pattern: &["3[02]|40|69|89"],
            national_prefix_formatting_rule: "0$1",
            national_prefix_optional_when_formatting: false,
        },
        NumberFormat {
            pattern: r"(\d{3})(\d{3,8})",
            format: "$1 $2",
            leading_digits_pattern: &["[2-9]"],
            national_prefix_formatting_rule: "0$1",
            national_prefix_optional_when_formatting: false,
        },
        NumberFormat {
            pattern: r"(\d{4})(\d{7,8})",
            format: "$1 $2",
            leading_digits_pattern: &["1[5-7]"],
            national_prefix_formatting_rule: "0$1",
            national_prefix_optional_when_formatting: false,
        },
    ],
};

static FR: PhoneMetadata = PhoneMetadata {
    id: "FR",
    country_code: 33,
    international_prefix: "00",
    national_prefix: "0",
    national_prefix_for_parsing: "0",
    national_prefix_transform_rule: "",
    general_desc: PhoneNumberDesc {
        national_number_pattern: r"[1-9]\d{8}",
        possible_length: &[9],
        possible_length_local_only: &[],
    },
    fixed_line: PhoneNumberDesc {
        national_number_pattern: r"[1-5]\d{8}",
        possible_length: &[9],
        possible_length_local_only: &[],
    },
    mobile: PhoneNumberDesc {
        national_number_pattern: r"[67]\d{8}",
        possible_length: &[9],
        possible_length_local_only: &[],
    },
    toll_free: PhoneNumberDesc {
        national_number_pattern: r"80\d{7}",
        possible_length: &[9],
        possible_length_local_only: &[],
    },
    number_formats: &[NumberFormat {
        pattern: r"(\d)(\d{2})(\d{2})(\d{2})(\d{2})",
        format: "$1 $2 $3 $4 $5",
        leading_digits_pattern: &[],
        national_prefix_formatting_rule: "0$1",
        national_prefix_optional_when_formatting: false,
    }],
};

static IT: PhoneMetadata = PhoneMetadata {
    id: "IT",
    country_code: 39,
    international_prefix: "00",
    // Italy dials the leading zero as part of the number itself.
    national_prefix: "",
    national_prefix_for_parsing: "",
    national_prefix_transform_rule: "",
    general_desc: PhoneNumberDesc {
        national_number_pattern: r"0\d{5,10}|3\d{8,9}",
        possible_length: &[6, 7, 8, 9, 10, 11],
        possible_length_local_only: &[],
    },
    fixed_line: PhoneNumberDesc {
        national_number_pattern: r"0\d{5,10}",
        possible_length: &[6, 7, 8, 9, 10, 11],
        possible_length_local_only: &[],
    },
    mobile: PhoneNumberDesc {
        national_number_pattern: r"3\d{8,9}",
        possible_length: &[9, 10],
        possible_length_local_only: &[],
    },
    toll_free: NO_DESC,
    number_formats: &[
        NumberFormat {
            pattern: r"(\d{2})(\d{4})(\d{4})",
            format: "$1 $2 $3",
            leading_digits_pattern: &["0[26]"],
            national_prefix_formatting_rule: "",
            national_prefix_optional_when_formatting: false,
        },
        NumberFormat {
            pattern: r"(\d{3})(\d{3})(\d{4})",
            format: "$1 $2 $3",
            leading_digits_pattern: &["3"],
            national_prefix_formatting_rule: "",
            national_prefix_optional_when_formatting: false,
        },
    ],
};

/// Looks the numbering plan of a region up by its ISO 3166-1 code.
pub fn metadata_for_region(region_code: &str) -> Option<&'static PhoneMetadata> {
    match region_code {
        "US" => Some(&US),
        "GB" => Some(&GB),
        "DE" => Some(&DE),
        "FR" => Some(&FR),
        "IT" => Some(&IT),
        _ => None,
    }
}

/// Maps a country calling code to its main region, or `"ZZ"` when the code
/// is not one we carry metadata for.
pub fn region_code_for_country_code(country_code: i32) -> &'static str {
    match country_code {
        1 => "US",
        33 => "FR",
        39 => "IT",
        44 => "GB",
        49 => "DE",
        _ => UNKNOWN_REGION,
    }
}

/// All regions with compiled-in metadata.
pub fn supported_regions() -> impl ExactSizeIterator<Item = &'static str> {
    ["US", "GB", "DE", "FR", "IT"].into_iter()
}
