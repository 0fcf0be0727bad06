mod helper_constants;
mod helper_functions;
pub mod errors;
pub mod enums;
pub mod phonenumberutil;
mod phone_number_regexps_and_mappings;
pub(crate) mod helper_types;

pub use enums::CountryCodeStrategy;
pub use helper_functions::national_significant_number;
pub use phonenumberutil::PhoneNumberUtil;
pub(crate) use phone_number_regexps_and_mappings::phone_like_substring_pattern;
pub(crate) use helper_constants::PLUS_CHARS;
