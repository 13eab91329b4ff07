use corec_lex::tokenize;
use criterion::{black_box, criterion_group, criterion_main, Criterion};

const SAMPLE: &str = r#"
fn add(a: i32, b: i32) -> i32 {
    return a + b;
}

fn main() {
    x: i32 = 10;
    arr: i32[5] = { 1, 2, 3, 4, 5 };
    y: i32* = &x;
    while (x > 0) {
        x = x - 1;
    }
}
"#;

fn bench_tokenize_sample(c: &mut Criterion) {
    c.bench_function("tokenize sample program", |b| {
        b.iter(|| black_box(tokenize(black_box(SAMPLE)).unwrap()))
    });
}

criterion_group!(benches, bench_tokenize_sample);
criterion_main!(benches);
