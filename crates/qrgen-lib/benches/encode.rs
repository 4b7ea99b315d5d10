use criterion::{criterion_group, criterion_main, Criterion};
use once_cell::sync::Lazy;
use qrgen_lib::{MatrixEncoder, QrConfig, QrHandler, QrMatrixEncoder};
use std::hint::black_box;

static HANDLER: Lazy<QrHandler> = Lazy::new(|| QrHandler::new(QrConfig::default()));
static SHORT_BODY: Lazy<String> =
    Lazy::new(|| r#"{"url":"https%3A%2F%2Fexample.com%2F","size":200}"#.to_string());
static LONG_BODY: Lazy<String> = Lazy::new(|| {
    let path = "segment%2F".repeat(60);
    format!(r#"{{"url":"https%3A%2F%2Fexample.com%2F{path}","size":1000}}"#)
});

fn benchmark_encoding(c: &mut Criterion) {
    let handler = &*HANDLER;

    c.bench_function("handle_short_url_200", |b| {
        let body = SHORT_BODY.as_str();
        b.iter(|| {
            let response = handler.handle(Some(body));
            black_box(response.body.len())
        });
    });

    c.bench_function("handle_long_url_1000", |b| {
        let body = LONG_BODY.as_str();
        b.iter(|| {
            let response = handler.handle(Some(body));
            black_box(response.body.len())
        });
    });

    c.bench_function("matrix_only_short_url_200", |b| {
        b.iter(|| {
            let matrix = QrMatrixEncoder
                .encode("https://example.com/", 200, 200)
                .expect("short url encodes");
            black_box(matrix.dark_count())
        });
    });
}

criterion_group!(benches, benchmark_encoding);
criterion_main!(benches);
