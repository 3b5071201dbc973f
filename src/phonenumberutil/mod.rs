pub(crate) mod helper_constants;
pub(crate) mod helper_functions;
pub mod errors;
pub mod enums;
pub mod phone_number;
pub mod phonenumberutil;
mod phone_number_regexps_and_mappings;

use std::sync::LazyLock;

pub use enums::{MatchType, NumberLengthType, PhoneNumberFormat, PhoneNumberType};
use crate::phonenumberutil::phonenumberutil::PhoneNumberUtil;

pub static PHONE_NUMBER_UTIL: LazyLock<PhoneNumberUtil> = LazyLock::new(|| {
    PhoneNumberUtil::new()
});
