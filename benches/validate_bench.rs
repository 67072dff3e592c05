use criterion::{Criterion, black_box, criterion_group, criterion_main};

use vatid::vat::{Scope, Validator, ValidatorConfigBuilder, validate};
use vatid::{mod_large, mod_large_chunked};

/// One identifier per family, plus a late-table match and a miss.
const MIXED: &[&str] = &[
    "ATU13585627",
    "DE136695976",
    "ESX5253868R",
    "FR40303265045",
    "GB980780684",
    "BG1012345670",
    "CZ7103192745",
    "SE556188840401",
    "NOTAVATNUMBER",
];

fn bench_validate_single(c: &mut Criterion) {
    c.bench_function("validate_lu", |b| {
        b.iter(|| black_box(validate(black_box("LU12345613"))));
    });
}

fn bench_validate_last_rule(c: &mut Criterion) {
    c.bench_function("validate_se_last_rule", |b| {
        b.iter(|| black_box(validate(black_box("SE556188840401"))));
    });
}

fn bench_validate_no_match(c: &mut Criterion) {
    c.bench_function("validate_no_match", |b| {
        b.iter(|| black_box(validate(black_box("XX0000000000"))));
    });
}

fn bench_validate_mixed(c: &mut Criterion) {
    let validator = Validator::default();
    c.bench_function("validate_mixed_batch", |b| {
        b.iter(|| {
            for input in MIXED {
                black_box(validator.validate(black_box(input)));
            }
        });
    });
}

fn bench_validate_eu_scope(c: &mut Criterion) {
    let validator = Validator::new(ValidatorConfigBuilder::new().scope(Scope::EuOnly).build());
    c.bench_function("validate_mixed_batch_eu_only", |b| {
        b.iter(|| {
            for input in MIXED {
                black_box(validator.validate(black_box(input)));
            }
        });
    });
}

fn bench_mod_large(c: &mut Criterion) {
    let digits = "123456789012345678901234567890";
    c.bench_function("mod_large_30_digits", |b| {
        b.iter(|| black_box(mod_large(black_box(digits), black_box(97))));
    });
    c.bench_function("mod_large_30_digits_chunk_18", |b| {
        b.iter(|| black_box(mod_large_chunked(black_box(digits), black_box(97), 18)));
    });
}

criterion_group!(
    benches,
    bench_validate_single,
    bench_validate_last_rule,
    bench_validate_no_match,
    bench_validate_mixed,
    bench_validate_eu_scope,
    bench_mod_large,
);
criterion_main!(benches);
