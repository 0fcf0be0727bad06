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

use std::collections::{HashMap, VecDeque};

use log::{trace, warn};

use crate::{
    i18n,
    interfaces::MetadataRepository,
    proto_gen::phonemetadata::{PhoneMetadata, PhoneMetadataCollection},
};

/// Metadata indexed in memory by region code and by country calling code.
pub struct InMemoryMetadataRepository {
    /// A mapping from a region code to a PhoneMetadata for that region.
    region_to_metadata_map: HashMap<String, PhoneMetadata>,

    /// A mapping from a country calling code to the region codes using it.
    /// Regions under NANPA share the country calling code 1 and Russia and
    /// Kazakhstan share the country calling code 7; the region flagged
    /// `main_country_for_code` ("US", "RU") comes first.
    country_calling_code_to_region_code_map: HashMap<u32, Vec<String>>,
}

impl InMemoryMetadataRepository {
    pub fn from_collection(metadata_collection: PhoneMetadataCollection) -> Self {
        let mut region_to_metadata_map = HashMap::new();
        // Storing data in a temporary map to make it easier to find other regions
        // that share a country calling code when inserting data.
        let mut country_calling_code_to_region_map = HashMap::<u32, VecDeque<String>>::new();
        for metadata in metadata_collection.metadata {
            let region_code = metadata.id().to_ascii_uppercase();
            if i18n::RegionCode::get_unknown() == region_code || region_code.is_empty() {
                continue;
            }
            let country_calling_code = metadata.country_code();
            if country_calling_code == 0 {
                warn!("Skipping metadata for {} without a country calling code", region_code);
                continue;
            }

            let regions = country_calling_code_to_region_map
                .entry(country_calling_code)
                .or_default();
            if metadata.main_country_for_code() {
                regions.push_front(region_code.clone());
            } else {
                regions.push_back(region_code.clone());
            }
            region_to_metadata_map.insert(region_code, metadata);
        }
        trace!(
            "Indexed metadata for {} regions and {} country calling codes",
            region_to_metadata_map.len(),
            country_calling_code_to_region_map.len()
        );

        Self {
            region_to_metadata_map,
            country_calling_code_to_region_code_map: country_calling_code_to_region_map
                .into_iter()
                .map(|(code, regions)| (code, Vec::from(regions)))
                .collect(),
        }
    }

    pub fn get_supported_regions(&self) -> impl Iterator<Item = &str> {
        self.region_to_metadata_map.keys().map(String::as_str)
    }

    /// Returns every region using `country_code`, main region first.
    pub fn get_region_codes_for_country_calling_code(&self, country_code: u32) -> &[String] {
        self.country_calling_code_to_region_code_map
            .get(&country_code)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }
}

impl MetadataRepository for InMemoryMetadataRepository {
    fn lookup_by_region(&self, region_code: &str) -> Option<&PhoneMetadata> {
        self.region_to_metadata_map.get(region_code)
    }

    fn lookup_by_country_code(&self, country_code: u32) -> Option<&PhoneMetadata> {
        let main_region = self
            .get_region_codes_for_country_calling_code(country_code)
            .first()?;
        self.region_to_metadata_map.get(main_region)
    }
}
