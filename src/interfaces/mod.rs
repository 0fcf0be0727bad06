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

use std::borrow::Cow;

use crate::proto_gen::phonemetadata::PhoneMetadata;

/// Read-only source of dialing-plan metadata. Implementations are shared
/// between batch workers without locking, so lookups must not mutate.
pub trait MetadataRepository: Send + Sync {
    /// Returns metadata for an uppercase region code such as `"US"`.
    fn lookup_by_region(&self, region_code: &str) -> Option<&PhoneMetadata>;

    /// Returns metadata of the main region for a country calling code.
    fn lookup_by_country_code(&self, country_code: u32) -> Option<&PhoneMetadata>;
}

/// Result of a match anchored at the start of the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrefixMatch {
    /// Length in bytes of the matched prefix.
    pub len: usize,
    /// Whether the last capturing group of the pattern matched a non-empty
    /// substring.
    pub last_group_has_value: bool,
}

/// Internal phonenumber matching API used to isolate the underlying
/// implementation of the matcher and allow different implementations to be
/// swapped in easily.
pub trait PatternMatcher: Send + Sync {
    /// Returns every phone-number-like substring of `text`, in order of
    /// appearance. Empty if nothing looks like a number.
    fn find_phone_like_substrings<'a>(&self, text: &'a str) -> Vec<&'a str>;

    /// Returns whether `candidate` matches `pattern` entirely.
    fn matches(&self, pattern: &str, candidate: &str) -> bool;

    /// Removes all non-overlapping matches of `pattern` from `input`.
    /// Returns `Cow::Borrowed` when nothing was replaced.
    fn substitute<'a>(&self, pattern: &str, input: &'a str) -> Cow<'a, str>;

    /// Returns whether `pattern` carries anything to match against.
    fn has_non_empty_pattern(&self, pattern: &str) -> bool {
        !pattern.trim().is_empty()
    }

    /// Matches `pattern` at the very start of `input`.
    fn match_prefix(&self, pattern: &str, input: &str) -> Option<PrefixMatch>;

    /// Replaces the match of `pattern` at the start of `input` with
    /// `template`, where `$1`-style references expand capture groups.
    /// Returns `None` if the pattern does not match at the start.
    fn replace_prefix(&self, pattern: &str, input: &str, template: &str) -> Option<String>;
}
