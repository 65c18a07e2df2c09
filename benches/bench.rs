use criterion::{criterion_group, criterion_main};

mod national_id_benchmark {
    use criterion::{black_box, Criterion};
    use dealer_checks::{validate_national_id, SpanishCifChecksum, SpanishDniChecksum, Validator};

    pub fn criterion_benchmark(c: &mut Criterion) {
        let identifiers = vec![
            "12345678Z",
            "12.345.678-Z",
            "X0000000T",
            "Y0000000Z",
            "B12345674",
            "P1234567D",
            "not an identifier",
        ];
        c.bench_function("national-id-classify", |b| {
            b.iter(|| {
                for id in identifiers.iter() {
                    black_box(validate_national_id(id));
                }
            })
        });
        c.bench_function("dni-checksum", |b| {
            b.iter(|| SpanishDniChecksum.is_valid_match(black_box("12345678Z")))
        });
        c.bench_function("cif-checksum", |b| {
            b.iter(|| SpanishCifChecksum.is_valid_match(black_box("A58818501")))
        });
    }
}

mod vehicle_benchmark {
    use criterion::{black_box, Criterion};
    use dealer_checks::{decode_vin_basic, validate_plate, validate_vin};

    pub fn criterion_benchmark(c: &mut Criterion) {
        let vins = vec![
            "WVWZZZ3CZWE123456",
            "VSSZZZ5FZR1234567",
            "1HGCM82633A004352",
            "XXX1234567890ABCD",
        ];
        c.bench_function("vin-validate-and-decode", |b| {
            b.iter(|| {
                for vin in vins.iter() {
                    if validate_vin(vin) {
                        black_box(decode_vin_basic(vin));
                    }
                }
            })
        });

        let plates = vec!["1234BCD", "1234 BCD", "M-1234-AB", "1234ABC"];
        c.bench_function("plate-validate", |b| {
            b.iter(|| {
                for plate in plates.iter() {
                    black_box(validate_plate(plate));
                }
            })
        });
    }
}

mod format_benchmark {
    use criterion::{black_box, Criterion};
    use dealer_checks::{format_currency, slugify};

    pub fn criterion_benchmark(c: &mut Criterion) {
        c.bench_function("format-currency", |b| {
            b.iter(|| format_currency(black_box(1_234_567.89)))
        });
        c.bench_function("slugify", |b| {
            b.iter(|| slugify(black_box("Oferta de Año Nuevo: Citroën C4 Picasso")))
        });
    }
}

criterion_group!(
    benches,
    national_id_benchmark::criterion_benchmark,
    vehicle_benchmark::criterion_benchmark,
    format_benchmark::criterion_benchmark
);
criterion_main!(benches);
