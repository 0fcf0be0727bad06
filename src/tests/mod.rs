mod region_code;
mod metadata_repository_tests;

use std::sync::Once;

use crate::PhoneNumberUtil;

static ONCE: Once = Once::new();

// This setup function builds a PhoneNumberUtil over the test metadata
// for each test.
fn get_phone_util() -> PhoneNumberUtil {
    ONCE.call_once(|| colog::default_builder()
        .filter_level(log::LevelFilter::Trace)
        .init()
    );
    PhoneNumberUtil::new_for_metadata(test_metadata::test_metadata_collection())
}
