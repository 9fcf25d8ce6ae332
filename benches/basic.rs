use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

use sheetgrid::{ensure_rectangular, A1Range, CellRef, Value};

fn bench_parse(c: &mut Criterion) {
    c.bench_function("parse_cell", |b| {
        b.iter(|| black_box("ADG666").parse::<CellRef>().unwrap())
    });
    c.bench_function("parse_range", |b| {
        b.iter(|| black_box("testing!A1:ZZ1000").parse::<A1Range>().unwrap())
    });
}

fn bench_normalize(c: &mut Criterion) {
    let range: A1Range = "A1:Z100".parse().unwrap();
    c.bench_function("ensure_rectangular", |b| {
        b.iter(|| {
            let values = vec![vec![Value::from(1)]; 10];
            ensure_rectangular(black_box(&range), values)
        })
    });
}

criterion_group!(benches, bench_parse, bench_normalize);
criterion_main!(benches);
