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

use std::{borrow::Cow, num::NonZeroUsize};

use log::{trace, warn};
use strum::IntoEnumIterator;

use super::{
    enums::CountryCodeStrategy,
    errors::{ExtractCountryCodeError, NotANumberError, ParseError},
    helper_constants::{
        LEADING_PLUS_CHARS_PATTERN, MAX_LENGTH_COUNTRY_CODE, MAX_LENGTH_FOR_NSN,
        MIN_LENGTH_FOR_NSN,
    },
    helper_functions::normalize_digits_only,
    helper_types::{CountryCodeExtraction, ParseContext},
    phone_number_regexps_and_mappings::PhoneNumberRegExps,
};
use crate::{
    interfaces::{MetadataRepository, PatternMatcher},
    macros::owned_from_cow_or,
    metadata_repository::InMemoryMetadataRepository,
    proto_gen::{
        phonemetadata::{PhoneMetadata, PhoneMetadataCollection},
        phonenumber::{phone_number::CountryCodeSource, PhoneNumber},
    },
    regex_based_matcher::RegexBasedMatcher,
    string_util::strip_cow_prefix,
};

// Helper type for Result
pub type Result<T> = std::result::Result<T, ParseError>;

pub struct PhoneNumberUtil {
    /// Source of per-region and per-calling-code dialing plans. Read-only,
    /// shared by every parse running at the same time.
    metadata_repository: Box<dyn MetadataRepository>,

    /// An API for validation checking.
    matcher_api: Box<dyn PatternMatcher>,

    /// Helper class holding useful regular expressions.
    reg_exps: PhoneNumberRegExps,

    /// How many workers a batch parse may run at once.
    batch_parallelism: NonZeroUsize,
}

impl PhoneNumberUtil {
    /// Creates a util backed by an in-memory index of `metadata` and the
    /// regex based matcher.
    pub fn new_for_metadata(metadata: PhoneMetadataCollection) -> Self {
        Self::with_collaborators(
            Box::new(InMemoryMetadataRepository::from_collection(metadata)),
            Box::new(RegexBasedMatcher::new()),
        )
    }

    pub fn with_collaborators(
        metadata_repository: Box<dyn MetadataRepository>,
        matcher_api: Box<dyn PatternMatcher>,
    ) -> Self {
        Self {
            metadata_repository,
            matcher_api,
            reg_exps: PhoneNumberRegExps::new(),
            batch_parallelism: std::thread::available_parallelism()
                .unwrap_or(NonZeroUsize::MIN),
        }
    }

    /// Caps the number of worker threads used by
    /// [`parse_many`](Self::parse_many).
    pub fn with_batch_parallelism(mut self, batch_parallelism: NonZeroUsize) -> Self {
        self.batch_parallelism = batch_parallelism;
        self
    }

    pub fn batch_parallelism(&self) -> NonZeroUsize {
        self.batch_parallelism
    }

    pub fn metadata_repository(&self) -> &dyn MetadataRepository {
        self.metadata_repository.as_ref()
    }

    /// Parses a string and returns it as a phone number.
    ///
    /// `raw_number` may be free text: the first phone-number-like substring
    /// is parsed, or the whole input if nothing looks like a number.
    /// `region` is the region the number is expected to be dialed from. It
    /// is only a hint: a number written with a country calling code is
    /// validated against the dialing plan of that code instead.
    ///
    /// Fails with [`ParseError::InvalidCountryCode`] if the region is
    /// unknown or no country calling code can be read, and with
    /// [`ParseError::NotANumber`] if the national number does not match the
    /// region's general number pattern.
    pub fn parse(&self, raw_number: &str, region: &str) -> Result<PhoneNumber> {
        let region_code = region.to_ascii_uppercase();
        let region_metadata = self
            .metadata_repository
            .lookup_by_region(&region_code)
            .ok_or_else(|| {
                warn!("Invalid or unknown region code provided: {}", region_code);
                ParseError::InvalidCountryCode
            })?;

        let candidate = self
            .matcher_api
            .find_phone_like_substrings(raw_number)
            .into_iter()
            .next()
            .unwrap_or(raw_number);
        trace!("Extracted candidate '{}' from '{}'", candidate, raw_number);
        let mut context = ParseContext::new(candidate, region_metadata);

        let extension = self.maybe_strip_extension(&mut context.working_number);
        if let Some(extension) = &extension {
            trace!("Stripped extension '{}'", extension);
        }

        let CountryCodeExtraction {
            mut country_code,
            national_number,
            country_code_source,
        } = self.extract_country_code_with_fallback(&context.working_number, region_metadata)?;
        if let Cow::Owned(national_number) = national_number {
            context.working_number = national_number;
        }
        if country_code == 0 {
            country_code = region_metadata.country_code();
        }
        trace!(
            "Resolved country code {} ({:?}) for '{}'",
            country_code, country_code_source, raw_number
        );

        let normalized_number = normalize_digits_only(&context.working_number);

        if country_code != region_metadata.country_code() {
            if let Some(country_metadata) =
                self.metadata_repository.lookup_by_country_code(country_code)
            {
                trace!(
                    "Switching metadata from {} to {}",
                    region_metadata.id(),
                    country_metadata.id()
                );
                context.metadata = country_metadata;
            }
        }

        let stripped = self.maybe_strip_national_prefix(&normalized_number, context.metadata);
        context.working_number = owned_from_cow_or!(stripped, normalized_number);

        self.validate_national_number(&context.working_number, context.metadata)?;

        let leading_zero = context.working_number.starts_with('0');
        let national_number: u64 = context.working_number.parse()?;

        let mut phone_number = PhoneNumber::new();
        phone_number.set_country_code(country_code);
        phone_number.set_national_number(national_number);
        phone_number.set_italian_leading_zero(leading_zero);
        if let Some(extension) = extension {
            phone_number.set_extension(extension);
        }
        phone_number.set_raw_input(raw_number.to_owned());
        phone_number.set_country_code_source(country_code_source);
        Ok(phone_number)
    }

    /// Keeps only the decimal digits of the given number, converting
    /// non-ASCII digits to ASCII.
    pub fn normalize_digits_only(&self, phone_number: &str) -> String {
        normalize_digits_only(phone_number)
    }

    /// Strips any extension (as in, the part of the number dialled after the
    /// call is connected, usually indicated with extn, ext, x or similar) from
    /// the end of the number, and returns it.
    pub(crate) fn maybe_strip_extension(&self, phone_number: &mut String) -> Option<String> {
        let (extension_start, extension) = {
            let captures = self.reg_exps.extn_pattern.captures(phone_number)?;
            let extension_start = captures.get(0)?.start();
            // The extension digits are in whichever capturing group matched.
            let extension = captures
                .iter()
                .skip(1)
                .flatten()
                .find(|group| !group.as_str().is_empty())?
                .as_str()
                .to_owned();
            (extension_start, extension)
        };
        // A lone extension is not a number with an extension.
        if extension_start == 0 {
            return None;
        }
        phone_number.truncate(extension_start);
        Some(extension)
    }

    /// Runs every [`CountryCodeStrategy`] in order and returns the first
    /// successful extraction.
    fn extract_country_code_with_fallback<'a>(
        &self,
        phone_number: &'a str,
        metadata: &PhoneMetadata,
    ) -> Result<CountryCodeExtraction<'a>> {
        let mut last_error = ExtractCountryCodeError::UnknownCountryCode;
        for strategy in CountryCodeStrategy::iter() {
            let attempt = match strategy {
                CountryCodeStrategy::Direct => {
                    self.extract_country_code(Cow::Borrowed(phone_number), metadata)
                }
                CountryCodeStrategy::PlusStripped => {
                    match self.matcher_api.substitute(LEADING_PLUS_CHARS_PATTERN, phone_number) {
                        // Nothing was stripped, so this would only repeat the
                        // direct attempt.
                        Cow::Borrowed(_) => continue,
                        stripped => self.extract_country_code(stripped, metadata),
                    }
                }
            };
            match attempt {
                Ok(extraction) => return Ok(extraction),
                Err(err) => {
                    let strategy_name: &'static str = strategy.into();
                    trace!("{} country code extraction failed: {}", strategy_name, err);
                    last_error = err;
                }
            }
        }
        Err(last_error.into())
    }

    /// Tries to extract a country calling code from a number.
    ///
    /// A number starting with plus characters or with the region's
    /// international prefix must continue with a known country calling code,
    /// otherwise extraction fails. A number without either may still start
    /// with the region's own country calling code, which is only taken when
    /// the rest of the number makes more sense as a national number.
    /// Returns a country code of `0` (and the untouched number) otherwise.
    pub(crate) fn extract_country_code<'a>(
        &self,
        phone_number: Cow<'a, str>,
        metadata: &PhoneMetadata,
    ) -> std::result::Result<CountryCodeExtraction<'a>, ExtractCountryCodeError> {
        let (full_number, country_code_source) =
            self.maybe_strip_international_prefix_and_normalize(&phone_number, metadata);

        if country_code_source != CountryCodeSource::FROM_DEFAULT_COUNTRY {
            if full_number.len() <= MIN_LENGTH_FOR_NSN {
                return Err(ExtractCountryCodeError::TooShortAfterIdd);
            }
            let (country_code, national_number) = self
                .extract_potential_country_code(&full_number)
                .ok_or(ExtractCountryCodeError::UnknownCountryCode)?;
            return Ok(CountryCodeExtraction::new(
                country_code,
                Cow::Owned(national_number.to_owned()),
                country_code_source,
            ));
        }

        // Check to see if the number starts with the country calling code for
        // the default region. If so, we remove the country calling code, and do
        // some checks on the validity of the number before and after.
        let default_country_code = metadata.country_code();
        let mut buf = itoa::Buffer::new();
        let default_country_code_str = buf.format(default_country_code);
        if let Some(potential_national_number) =
            strip_cow_prefix(Cow::Borrowed(full_number.as_str()), default_country_code_str)
        {
            let potential_national_number =
                self.maybe_strip_national_prefix(&potential_national_number, metadata);
            let general_pattern = general_number_pattern(metadata);
            // If the number was not valid before but is valid now, or if it
            // was too long before, we consider the number with the country
            // calling code stripped to be a better result and keep that
            // instead.
            if (!self.matcher_api.matches(general_pattern, &full_number)
                && self.matcher_api.matches(general_pattern, &potential_national_number))
                || full_number.len() > MAX_LENGTH_FOR_NSN
            {
                return Ok(CountryCodeExtraction::new(
                    default_country_code,
                    Cow::Owned(potential_national_number.into_owned()),
                    CountryCodeSource::FROM_NUMBER_WITHOUT_PLUS_SIGN,
                ));
            }
        }

        Ok(CountryCodeExtraction::new(
            0,
            phone_number,
            CountryCodeSource::FROM_DEFAULT_COUNTRY,
        ))
    }

    /// Strips any international prefix (such as +, 00, 011) present in the
    /// number provided, normalizes the resulting number, and indicates if an
    /// international prefix was present.
    fn maybe_strip_international_prefix_and_normalize(
        &self,
        phone_number: &str,
        metadata: &PhoneMetadata,
    ) -> (String, CountryCodeSource) {
        if let Cow::Owned(without_plus) =
            self.matcher_api.substitute(LEADING_PLUS_CHARS_PATTERN, phone_number)
        {
            return (
                normalize_digits_only(&without_plus),
                CountryCodeSource::FROM_NUMBER_WITH_PLUS_SIGN,
            );
        }

        let normalized_number = normalize_digits_only(phone_number);
        let idd_pattern = metadata.international_prefix();
        if self.matcher_api.has_non_empty_pattern(idd_pattern) {
            if let Some(idd) = self.matcher_api.match_prefix(idd_pattern, &normalized_number) {
                let after_idd = &normalized_number[idd.len..];
                // Only strip this if the first digit after the match is not a
                // 0, since country calling codes cannot begin with 0.
                if !after_idd.starts_with('0') {
                    return (after_idd.to_owned(), CountryCodeSource::FROM_NUMBER_WITH_IDD);
                }
            }
        }
        (normalized_number, CountryCodeSource::FROM_DEFAULT_COUNTRY)
    }

    /// Extracts country calling code from `full_number` and returns it
    /// together with the rest of the number. Calling codes are at most three
    /// digits long and never start with a zero.
    fn extract_potential_country_code<'a>(&self, full_number: &'a str) -> Option<(u32, &'a str)> {
        if full_number.is_empty() || full_number.starts_with('0') {
            return None;
        }
        let max_length = MAX_LENGTH_COUNTRY_CODE.min(full_number.len());
        for length in 1..=max_length {
            let country_code: u32 = full_number[..length].parse().ok()?;
            if self
                .metadata_repository
                .lookup_by_country_code(country_code)
                .is_some()
            {
                return Some((country_code, &full_number[length..]));
            }
        }
        None
    }

    /// Strips any national prefix (such as 0, 1) present in the number
    /// provided. The prefix is rewritten with the transform rule when the
    /// metadata has one and the prefix pattern captured something.
    ///
    /// Returns `Cow::Borrowed` if nothing was stripped.
    pub(crate) fn maybe_strip_national_prefix<'a>(
        &self,
        phone_number: &'a str,
        metadata: &PhoneMetadata,
    ) -> Cow<'a, str> {
        let possible_national_prefix = if metadata.has_national_prefix_for_parsing() {
            metadata.national_prefix_for_parsing()
        } else {
            metadata.national_prefix()
        };
        if phone_number.is_empty() || !self.matcher_api.has_non_empty_pattern(possible_national_prefix) {
            return Cow::Borrowed(phone_number);
        }
        let Some(prefix_match) = self
            .matcher_api
            .match_prefix(possible_national_prefix, phone_number)
        else {
            return Cow::Borrowed(phone_number);
        };

        let transform_rule = metadata.national_prefix_transform_rule();
        let transformed_number = if prefix_match.last_group_has_value
            && self.matcher_api.has_non_empty_pattern(transform_rule)
        {
            match self
                .matcher_api
                .replace_prefix(possible_national_prefix, phone_number, transform_rule)
            {
                Some(transformed) => Cow::Owned(transformed),
                None => return Cow::Borrowed(phone_number),
            }
        } else {
            Cow::Owned(phone_number[prefix_match.len..].to_owned())
        };

        // If the original number was viable, and the resultant number is not,
        // we return.
        let general_pattern = general_number_pattern(metadata);
        if self.matcher_api.matches(general_pattern, phone_number)
            && !self.matcher_api.matches(general_pattern, &transformed_number)
        {
            trace!(
                "Kept national prefix of '{}': stripped number is not valid",
                phone_number
            );
            return Cow::Borrowed(phone_number);
        }
        transformed_number
    }

    fn validate_national_number(&self, national_number: &str, metadata: &PhoneMetadata) -> Result<()> {
        let general_pattern = general_number_pattern(metadata);
        if !self.matcher_api.has_non_empty_pattern(general_pattern) {
            return Err(NotANumberError::NoGeneralDesc.into());
        }
        if !self.matcher_api.matches(general_pattern, national_number) {
            trace!(
                "'{}' does not match general pattern of {}",
                national_number,
                metadata.id()
            );
            return Err(NotANumberError::NotMatchedValidNumberPattern.into());
        }
        Ok(())
    }
}

/// The national number pattern of the general description, or an empty
/// pattern when the metadata has none.
fn general_number_pattern(metadata: &PhoneMetadata) -> &str {
    metadata
        .general_desc
        .as_ref()
        .map(|desc| desc.national_number_pattern())
        .unwrap_or_default()
}
