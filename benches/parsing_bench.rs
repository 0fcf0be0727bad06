use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use protobuf::MessageField;

use phonenumber_extract::{
    phonemetadata::{PhoneMetadata, PhoneMetadataCollection, PhoneNumberDesc},
    PhoneNumberUtil,
};

fn region(id: &str, country_code: u32, national_prefix: &str, pattern: &str) -> PhoneMetadata {
    let mut metadata = PhoneMetadata::new();
    metadata.set_id(id.to_owned());
    metadata.set_country_code(country_code);
    metadata.set_international_prefix(if country_code == 1 { "011" } else { "00" }.to_owned());
    if !national_prefix.is_empty() {
        metadata.set_national_prefix(national_prefix.to_owned());
    }
    let mut general_desc = PhoneNumberDesc::new();
    general_desc.set_national_number_pattern(pattern.to_owned());
    metadata.general_desc = MessageField::some(general_desc);
    metadata
}

fn setup_util() -> PhoneNumberUtil {
    let mut collection = PhoneMetadataCollection::new();
    let mut us = region("US", 1, "1", "[2-9]\\d{9}");
    us.set_main_country_for_code(true);
    collection.metadata.push(us);
    collection.metadata.push(region("GB", 44, "0", "[1-9]\\d{9}"));
    collection.metadata.push(region("IT", 39, "", "[0389]\\d{5,10}"));
    collection.metadata.push(region("NZ", 64, "0", "[289]\\d{7,9}|[3-7]\\d{7}"));
    let mut ar = region("AR", 54, "0", "[1-3689]\\d{9,10}");
    ar.set_national_prefix_for_parsing("0(?:(11|343|3715)15)?".to_owned());
    ar.set_national_prefix_transform_rule("9$1".to_owned());
    collection.metadata.push(ar);
    PhoneNumberUtil::new_for_metadata(collection)
}

/// A mix of national, international, free text and invalid inputs.
fn setup_parsing_data() -> Vec<(&'static str, &'static str)> {
    vec![
        ("(650) 253-0000", "US"),
        ("+44 20 8765 4321", "US"),
        ("020 8765 4321", "GB"),
        ("011 15-1234-5678", "AR"),
        ("02 12345678", "IT"),
        ("0064 3 331 6005 ext. 1234", "NZ"),
        ("Call the office on +1 650-253-0000 before noon", "GB"),
        ("not a number", "US"),
    ]
}

fn parsing_benchmark(c: &mut Criterion) {
    let phone_util = setup_util();
    let numbers_to_parse = setup_parsing_data();

    c.bench_function("parse()", |b| {
        b.iter(|| {
            for (raw_number, region) in &numbers_to_parse {
                let _ = phone_util.parse(black_box(raw_number), black_box(region));
            }
        })
    });
}

fn batch_benchmark(c: &mut Criterion) {
    let phone_util = setup_util();
    let mut group = c.benchmark_group("parse_many()");
    for size in [16, 256, 4096] {
        let raw_numbers: Vec<String> = (0..size)
            .map(|i| format!("+1 650 253 {:04}", i % 10_000))
            .collect();
        group.bench_with_input(BenchmarkId::from_parameter(size), &raw_numbers, |b, raw_numbers| {
            b.iter(|| phone_util.parse_many(black_box(raw_numbers), "GB"))
        });
    }
    group.finish();
}

criterion_group!(benches, parsing_benchmark, batch_benchmark);
criterion_main!(benches);
