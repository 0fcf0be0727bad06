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

use strum::{EnumIter, IntoStaticStr};

/// Ways of reading the country calling code off a number, tried in
/// declaration order until one succeeds.
#[derive(Debug, EnumIter, IntoStaticStr, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CountryCodeStrategy {
    /// Read the number as given: a leading plus sign or international
    /// prefix introduces the country code, otherwise the region's own code
    /// may be spelled out in front of the national number.
    Direct,
    /// Remove any leading plus characters first and read the rest as a
    /// national number. Recovers inputs like `+0123` whose plus sign is not
    /// followed by a known country code.
    PlusStripped,
}
