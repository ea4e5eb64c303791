use criterion::{Criterion, black_box, criterion_group, criterion_main};
use rand::SeedableRng;
use rand::rngs::StdRng;

use enmascara::bank::{Bban, Iban, checksum};
use enmascara::national_id::NationalId;

fn bench_bban_check_digits(c: &mut Criterion) {
    c.bench_function("bban_check_digits", |b| {
        b.iter(|| {
            black_box((
                checksum::bank_branch_check_digit(black_box("2100"), black_box("0418")),
                checksum::account_check_digit(black_box("0200051332")),
            ))
        });
    });
}

fn bench_mod97(c: &mut Criterion) {
    c.bench_function("mod97_rearranged_iban", |b| {
        b.iter(|| black_box(checksum::mod97(black_box("21000418450200051332ES91"))));
    });
}

fn bench_iban_generate(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0);
    c.bench_function("iban_generate", |b| {
        b.iter(|| black_box(Iban::generate_with_rng(&mut rng, "1465", "0000", None)));
    });
}

fn bench_iban_validate(c: &mut Criterion) {
    c.bench_function("iban_validate", |b| {
        b.iter(|| black_box(Iban::validate(black_box("ES9121000418450200051332"))));
    });
}

fn bench_bban_validate(c: &mut Criterion) {
    c.bench_function("bban_validate", |b| {
        b.iter(|| black_box(Bban::validate(black_box("21000418450200051332"))));
    });
}

fn bench_national_id(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0);
    c.bench_function("national_id_generate", |b| {
        b.iter(|| black_box(NationalId::generate_with_rng(&mut rng, None)));
    });
    c.bench_function("national_id_validate", |b| {
        b.iter(|| black_box(NationalId::validate(black_box("X1234567L"))));
    });
}

criterion_group!(
    benches,
    bench_bban_check_digits,
    bench_mod97,
    bench_iban_generate,
    bench_iban_validate,
    bench_bban_validate,
    bench_national_id,
);
criterion_main!(benches);
