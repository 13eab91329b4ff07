use corec_util::Symbol;
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn bench_intern_repeated(c: &mut Criterion) {
    c.bench_function("intern repeated keyword", |b| {
        b.iter(|| black_box(Symbol::intern("fn")))
    });
}

fn bench_intern_fresh(c: &mut Criterion) {
    let mut counter = 0usize;
    c.bench_function("intern fresh identifier", |b| {
        b.iter(|| {
            counter += 1;
            let name = format!("ident_{counter}");
            black_box(Symbol::intern(&name))
        })
    });
}

criterion_group!(benches, bench_intern_repeated, bench_intern_fresh);
criterion_main!(benches);
