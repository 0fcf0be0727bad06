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

use std::{borrow::Cow, sync::Arc};

use log::error;
use regex::Regex;

use super::regex_util::{full_match_pattern, prefix_pattern, RegexConsume};
use crate::{
    interfaces::{PatternMatcher, PrefixMatch},
    phonenumberutil::{phone_like_substring_pattern, PLUS_CHARS},
    regexp_cache::RegexCache,
};

/// [`PatternMatcher`] on top of the `regex` crate. Metadata patterns are
/// compiled once and cached; an invalid one never matches.
pub struct RegexBasedMatcher {
    cache: RegexCache,
    phone_like_substring: Regex,
}

impl Default for RegexBasedMatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl RegexBasedMatcher {
    pub fn new() -> Self {
        Self {
            cache: RegexCache::with_capacity(128),
            phone_like_substring: Regex::new(&phone_like_substring_pattern())
                .expect("Invalid constant pattern!"),
        }
    }

    fn get_regex(&self, pattern: &str) -> Option<Arc<Regex>> {
        match self.cache.get_regex(pattern) {
            Ok(regex) => Some(regex),
            Err(err) => {
                error!("Invalid regex! {}: {}", pattern, err);
                None
            }
        }
    }
}

impl PatternMatcher for RegexBasedMatcher {
    fn find_phone_like_substrings<'a>(&self, text: &'a str) -> Vec<&'a str> {
        self.phone_like_substring
            .find_iter(text)
            // A number starts with a plus sign or a digit; trailing
            // punctuation and spaces are not part of it either.
            .map(|found| {
                found
                    .as_str()
                    .trim_start_matches(|c: char| !is_valid_start_char(c))
                    .trim_end_matches(is_unwanted_end_char)
            })
            .filter(|candidate| !candidate.is_empty())
            .collect()
    }

    fn matches(&self, pattern: &str, candidate: &str) -> bool {
        // We don't want to consider it a match when matching input against
        // an empty pattern.
        if !self.has_non_empty_pattern(pattern) {
            return false;
        }
        self.get_regex(&full_match_pattern(pattern))
            .is_some_and(|regex| regex.is_match(candidate))
    }

    fn substitute<'a>(&self, pattern: &str, input: &'a str) -> Cow<'a, str> {
        match self.get_regex(pattern) {
            Some(regex) => match regex.replace_all(input, "") {
                Cow::Owned(replaced) => Cow::Owned(replaced),
                Cow::Borrowed(_) => Cow::Borrowed(input),
            },
            None => Cow::Borrowed(input),
        }
    }

    fn match_prefix(&self, pattern: &str, input: &str) -> Option<PrefixMatch> {
        let regex = self.get_regex(&prefix_pattern(pattern))?;
        let captures = regex.captures_start(input)?;
        let len = captures.get(0)?.end();
        let last_group_has_value = captures.len() > 1
            && captures
                .get(captures.len() - 1)
                .is_some_and(|group| !group.as_str().is_empty());
        Some(PrefixMatch { len, last_group_has_value })
    }

    fn replace_prefix(&self, pattern: &str, input: &str, template: &str) -> Option<String> {
        let regex = self.get_regex(&prefix_pattern(pattern))?;
        let captures = regex.captures_start(input)?;
        let whole_match = captures.get(0)?;
        let mut replaced = String::with_capacity(input.len() + template.len());
        captures.expand(template, &mut replaced);
        replaced.push_str(&input[whole_match.end()..]);
        Some(replaced)
    }
}

/// Anything but a number, letter or '#' at the end of a candidate.
fn is_valid_start_char(c: char) -> bool {
    PLUS_CHARS.contains(c) || c.is_numeric()
}

fn is_unwanted_end_char(c: char) -> bool {
    !(c.is_numeric() || c.is_alphabetic() || c == '#')
}
