use criterion::{Criterion, black_box, criterion_group, criterion_main};
use tally::record::{fingerprint, parse_fixed, parse_line};

const LINES: &[&[u8]] = &[
    b"Hamburg;12.0",
    b"Bulawayo;8.9",
    b"Palembang;38.8",
    b"St. John's;15.2",
    b"Cracow;-12.6",
    b"Ouagadougou;25.2",
];

fn bench_parse_line(c: &mut Criterion) {
    c.bench_function("record_parse_line", |b| {
        b.iter(|| {
            for line in LINES {
                parse_line(black_box(line)).unwrap();
            }
        })
    });
}

fn bench_parse_fixed(c: &mut Criterion) {
    c.bench_function("record_parse_fixed", |b| {
        b.iter(|| {
            parse_fixed(black_box(b"-99.9")).unwrap();
            parse_fixed(black_box(b"0.0")).unwrap();
            parse_fixed(black_box(b"38.8")).unwrap();
        })
    });
}

fn bench_fingerprint(c: &mut Criterion) {
    c.bench_function("record_fingerprint", |b| {
        b.iter(|| {
            for line in LINES {
                fingerprint(black_box(line));
            }
        })
    });
}

criterion_group!(benches, bench_parse_line, bench_parse_fixed, bench_fingerprint);
criterion_main!(benches);
