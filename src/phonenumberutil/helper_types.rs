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

use crate::proto_gen::{
    phonemetadata::PhoneMetadata, phonenumber::phone_number::CountryCodeSource,
};

/// Outcome of reading a country calling code off a number.
#[derive(Debug)]
pub(crate) struct CountryCodeExtraction<'a> {
    /// `0` when the number carries no country code of its own.
    pub country_code: u32,
    /// What is left of the number once the country code is removed.
    pub national_number: Cow<'a, str>,
    pub country_code_source: CountryCodeSource,
}

impl<'a> CountryCodeExtraction<'a> {
    pub fn new(
        country_code: u32,
        national_number: Cow<'a, str>,
        country_code_source: CountryCodeSource,
    ) -> Self {
        Self { country_code, national_number, country_code_source }
    }
}

/// State threaded through the parsing stages of a single number.
pub(super) struct ParseContext<'m> {
    /// Owned by this parse only, rewritten stage by stage.
    pub working_number: String,
    /// Starts as the hinted region's metadata and is replaced once the
    /// number turns out to belong to another country calling code.
    pub metadata: &'m PhoneMetadata,
}

impl<'m> ParseContext<'m> {
    pub fn new(working_number: &str, metadata: &'m PhoneMetadata) -> Self {
        Self { working_number: working_number.to_owned(), metadata }
    }
}
