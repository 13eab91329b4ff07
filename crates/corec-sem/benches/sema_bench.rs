use corec_sem::build_global_scope;
use criterion::{black_box, criterion_group, criterion_main, Criterion};

const SAMPLE: &str = r#"
fn add(a: i32, b: i32) -> i32 {
    return a + b;
}

callback: fn(i32*[10], (fn(i32) -> bool)[5]) -> i32*;
matrix: i32[4][4] = {};
total: i32 = 0;

fn main() -> i32 {
    return add(1, 2);
}
"#;

fn bench_build_global_scope(c: &mut Criterion) {
    let program = corec_par::parse_source(SAMPLE, "bench.cx").unwrap();
    c.bench_function("build global scope", |b| {
        b.iter(|| black_box(build_global_scope(black_box(&program)).unwrap()))
    });
}

criterion_group!(benches, bench_build_global_scope);
criterion_main!(benches);
