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

use std::num::ParseIntError;

use thiserror::Error;

/// Reason a single number could not be parsed.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    /// The region is unknown, or no country calling code could be extracted
    /// from the number.
    #[error("Invalid country code")]
    InvalidCountryCode, // INVALID_COUNTRY_CODE in the java version.
    #[error("Not a number: {0}")]
    NotANumber(#[from] NotANumberError),
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum NotANumberError {
    #[error("Metadata has no general number pattern to validate against")]
    NoGeneralDesc,
    #[error("Number not matched a valid number pattern")]
    NotMatchedValidNumberPattern,
    #[error("{0}")]
    FailedToParseNumberAsInt(#[from] ParseIntError),
}

/// Why a [`ParseTaskHandle`](crate::ParseTaskHandle) produced no number.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseTaskError {
    #[error("{0}")]
    Failed(#[from] ParseError),
    #[error("Parse task was dropped before it was started")]
    Cancelled,
    #[error("Parse task outcome was already taken from its handle")]
    AlreadyTaken,
}

/// Failure of a single country-code extraction attempt. Surfaces as
/// [`ParseError::InvalidCountryCode`] once every attempt has failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub(crate) enum ExtractCountryCodeError {
    #[error("Too short after idd")]
    TooShortAfterIdd,
    #[error("No known country calling code follows the international prefix")]
    UnknownCountryCode,
}

impl From<ExtractCountryCodeError> for ParseError {
    fn from(_: ExtractCountryCodeError) -> Self {
        ParseError::InvalidCountryCode
    }
}

impl From<ParseIntError> for ParseError {
    fn from(value: ParseIntError) -> Self {
        NotANumberError::FailedToParseNumberAsInt(value).into()
    }
}
