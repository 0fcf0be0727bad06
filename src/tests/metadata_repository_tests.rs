use crate::{
    phonemetadata::PhoneMetadataCollection, InMemoryMetadataRepository, MetadataRepository,
};

use super::{
    region_code::RegionCode,
    test_metadata::{region, test_metadata_collection},
};

fn test_repository() -> InMemoryMetadataRepository {
    InMemoryMetadataRepository::from_collection(test_metadata_collection())
}

#[test]
fn main_region_owns_shared_country_code() {
    let repository = test_repository();
    // CA is listed first, but US is flagged as the main region for 1.
    let metadata = repository.lookup_by_country_code(1).unwrap();
    assert_eq!(RegionCode::us(), metadata.id());
    assert_eq!(
        [RegionCode::us(), RegionCode::ca()].as_slice(),
        repository.get_region_codes_for_country_calling_code(1)
    );
}

#[test]
fn lookup_by_region() {
    let repository = test_repository();
    let metadata = repository.lookup_by_region(RegionCode::ca()).unwrap();
    assert_eq!(1, metadata.country_code());
    assert_eq!("011", metadata.international_prefix());

    let metadata = repository.lookup_by_region(RegionCode::ar()).unwrap();
    assert_eq!(54, metadata.country_code());
    assert_eq!("9$1", metadata.national_prefix_transform_rule());

    assert!(repository.lookup_by_region("XY").is_none());
}

#[test]
fn unknown_region_is_not_indexed() {
    let repository = test_repository();
    assert!(repository.lookup_by_region(RegionCode::zz()).is_none());
    assert!(repository.lookup_by_country_code(999).is_none());
    assert!(repository.get_region_codes_for_country_calling_code(999).is_empty());
}

#[test]
fn supported_regions() {
    let repository = test_repository();
    let mut regions: Vec<_> = repository.get_supported_regions().collect();
    regions.sort_unstable();
    assert_eq!(RegionCode::all().as_slice(), regions.as_slice());
}

#[test]
fn region_ids_are_uppercased() {
    let mut collection = PhoneMetadataCollection::new();
    collection.metadata.push(region("fr", 33, "00", "[1-9]\\d{8}"));
    // No country calling code, skipped.
    collection.metadata.push(region("BE", 0, "00", "[1-9]\\d{7,8}"));
    let repository = InMemoryMetadataRepository::from_collection(collection);

    assert!(repository.lookup_by_region("FR").is_some());
    assert!(repository.lookup_by_region("fr").is_none());
    assert_eq!(Some("fr"), repository.lookup_by_country_code(33).map(|m| m.id()));
    assert!(repository.lookup_by_region("BE").is_none());
    assert_eq!(1, repository.get_supported_regions().count());
}

#[test]
fn unknown_country_code() {
    let repository = test_repository();
    assert!(repository.lookup_by_country_code(0).is_none());
    assert!(repository.lookup_by_country_code(7).is_none());
}
