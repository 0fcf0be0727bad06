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

use regex::{Captures, Regex};

/// Wraps `pattern` so that it only matches the entire input, the equivalent
/// of RE2's `FullMatch`. Leftmost-first search alone would accept `1|12`
/// stopping after `1` on the input `12`.
pub fn full_match_pattern(pattern: &str) -> String {
    fast_cat::concat_str!("^(?:", pattern, ")$")
}

/// Wraps `pattern` so that it only matches at the start of the input.
pub fn prefix_pattern(pattern: &str) -> String {
    fast_cat::concat_str!("^(?:", pattern, ")")
}

/// Matching anchored at the start of the haystack, the way RE2's `Consume`
/// works.
pub trait RegexConsume {
    fn captures_start<'a>(&self, s: &'a str) -> Option<Captures<'a>>;
}

impl RegexConsume for Regex {
    fn captures_start<'a>(&self, s: &'a str) -> Option<Captures<'a>> {
        let captures = self.captures(s)?;
        let full_capture = captures.get(0)?;
        if full_capture.start() != 0 {
            return None
        }

        Some(captures)
    }
}

#[cfg(test)]
mod tests {
    use regex::Regex;

    use super::{full_match_pattern, prefix_pattern, RegexConsume};

    #[test]
    fn full_match_requires_whole_input() {
        let regex = Regex::new(&full_match_pattern("\\d{3}")).unwrap();
        assert!(regex.is_match("123"));
        assert!(!regex.is_match("1234"));
        assert!(!regex.is_match("a123"));
    }

    #[test]
    fn full_match_tries_later_alternatives() {
        let regex = Regex::new(&full_match_pattern("1|12")).unwrap();
        assert!(regex.is_match("12"));
    }

    #[test]
    fn prefix_pattern_only_matches_at_start() {
        let regex = Regex::new(&prefix_pattern("0|1")).unwrap();
        assert!(regex.is_match("0123"));
        assert!(!regex.is_match("2013"));
    }

    #[test]
    fn captures_start_ignores_inner_matches() {
        let regex = Regex::new("0(8)?").unwrap();
        assert!(regex.captures_start("1080").is_none());
        let captures = regex.captures_start("0812").unwrap();
        assert_eq!("08", captures.get(0).unwrap().as_str());
        assert_eq!("8", captures.get(1).unwrap().as_str());
    }
}
