use criterion::{criterion_group, criterion_main, Criterion};
use parser::{parse_source, Parser};
use scanner::Scanner;

pub fn criterion_benchmark(c: &mut Criterion) {
    let source = r#"
        (1 + 2) * 3 - 4 / (5 - -6) == 7 ? "seven" : 8 >= 9 ? nil : !true,
        /* block comment */ 10 * (11 + (12 - (13 * (14 / 15)))) // trailing
    "#;

    c.bench_function("scan", |b| b.iter(|| Scanner::new(source).scan_tokens()));

    let scanned = Scanner::new(source).scan_tokens();
    c.bench_function("parse", |b| b.iter(|| Parser::new(&scanned.tokens).unwrap().parse().unwrap()));

    c.bench_function("scan and parse", |b| b.iter(|| parse_source(source).unwrap()));
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
