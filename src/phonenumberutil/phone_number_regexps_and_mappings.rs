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

use regex::Regex;

use crate::phonenumberutil::{
    helper_constants::{
        DIGITS, MIN_LENGTH_FOR_NSN, PLUS_CHARS, STAR_SIGN, VALID_PUNCTUATION,
    },
    helper_functions::create_extn_pattern,
};

/// Regular expression of phone-number-like substrings in free text. Checks
/// we have at least three digits, and only valid punctuation and digits
/// between them, optionally followed by an extension. The symbol 'x' is
/// allowed here as valid punctuation since it is often used as a placeholder
/// for carrier codes, for example in Brazilian phone numbers. We also allow
/// multiple plus-signs at the start.
///
/// Corresponds to the following:
/// `plus_sign*(([punctuation]|[star])*[digits]){3,}
/// ([punctuation]|[star]|[digits])*(extension)?|[digits]{minLengthNsn}`
///
/// Unlike the viable-number check of libphonenumber, letters are not allowed
/// after the digits, so that the words following a number in a sentence are
/// not swallowed. The last alternative allows short numbers (two digits long)
/// to be found if they are entered as "15" etc, but only if there is no
/// punctuation in them.
pub(crate) fn phone_like_substring_pattern() -> String {
    format!(
        // 2-digits pattern goes last so the full number is matched first
        "(?i)[{}]*(?:[{}{}]*{}){{3,}}[{}{}{}]*(?:{})?|{}{{{}}}",
        PLUS_CHARS,
        VALID_PUNCTUATION, STAR_SIGN, DIGITS,
        VALID_PUNCTUATION, STAR_SIGN, DIGITS,
        create_extn_pattern(),
        DIGITS, MIN_LENGTH_FOR_NSN,
    )
}

pub(super) struct PhoneNumberRegExps {
    /// Regexp of all possible ways to write extensions, for use when parsing,
    /// anchored at the end of the number. This will be run as a
    /// case-insensitive regexp match. Wide character versions are also
    /// provided after each ASCII version.
    pub extn_pattern: Regex,
}

impl PhoneNumberRegExps {
    pub fn new() -> Self {
        Self {
            extn_pattern: Regex::new(&format!("(?i)(?:{})$", create_extn_pattern()))
                .expect("Invalid constant pattern!"),
        }
    }
}

#[cfg(test)]
mod tests {
    use regex::Regex;

    #[test]
    fn check_regexps_are_compiling() {
        super::PhoneNumberRegExps::new();
        Regex::new(&super::phone_like_substring_pattern()).unwrap();
    }
}
