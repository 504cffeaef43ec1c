//! Criterion benchmarks for rust_structured_logger

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use rust_structured_logger::prelude::*;
use std::io;

/// Sink that discards everything, so only the logger itself is measured
struct NullSink;

impl Sink for NullSink {
    fn write_all(&self, _buf: &[u8]) -> io::Result<()> {
        Ok(())
    }
}

fn null_logger(formatter: impl Formatter + 'static) -> Logger {
    Logger::builder()
        .level(Level::Info)
        .output(NullSink)
        .formatter(formatter)
        .build()
}

fn sample_fields() -> Fields {
    fields! {
        "foo" => "bar",
        "baz" => "qux",
        "one" => "two",
        "three" => "four",
    }
}

// ============================================================================
// Gate Benchmarks
// ============================================================================

fn bench_disabled_levels(c: &mut Criterion) {
    let mut group = c.benchmark_group("disabled");
    group.throughput(Throughput::Elements(1));

    let logger = null_logger(TextFormatter::new());

    group.bench_function("debug_direct", |b| {
        b.iter(|| logger.debug(black_box("Debug message")));
    });

    group.bench_function("debugf", |b| {
        b.iter(|| logger.debugf(format_args!("value {}", black_box(42))));
    });

    group.bench_function("debug_with_fields", |b| {
        let fields = sample_fields();
        b.iter(|| {
            logger
                .as_debug()
                .with_fields(fields.clone())
                .write(black_box("Debug message"))
        });
    });

    group.finish();
}

// ============================================================================
// Formatter Benchmarks
// ============================================================================

fn bench_formatters(c: &mut Criterion) {
    let mut group = c.benchmark_group("formatters");
    group.throughput(Throughput::Elements(1));

    let logger = null_logger(TextFormatter::new());
    let entry = logger.with_fields(sample_fields());

    group.bench_function("text", |b| {
        let formatter = TextFormatter::new().with_timestamp(false);
        b.iter(|| black_box(formatter.format(&entry)))
    });

    group.bench_function("text_colored", |b| {
        let formatter = TextFormatter::new().with_colors(true);
        b.iter(|| black_box(formatter.format(&entry)))
    });

    group.bench_function("json", |b| {
        let formatter = JsonFormatter::new();
        b.iter(|| black_box(formatter.format(&entry)))
    });

    group.finish();
}

// ============================================================================
// End-to-end Benchmarks
// ============================================================================

fn bench_logging(c: &mut Criterion) {
    let mut group = c.benchmark_group("logging");
    group.throughput(Throughput::Elements(1));

    let text = null_logger(TextFormatter::new().with_sorting(false));
    let json = null_logger(JsonFormatter::new());

    group.bench_function("info_text", |b| {
        b.iter(|| text.info(black_box("Info message")));
    });

    group.bench_function("info_json", |b| {
        b.iter(|| json.info(black_box("Info message")));
    });

    group.bench_function("with_fields_json", |b| {
        let base = json.with_fields(sample_fields());
        b.iter(|| base.with_field("request", black_box(7)).write("handled"));
    });

    group.finish();
}

fn bench_concurrent_logging(c: &mut Criterion) {
    let mut group = c.benchmark_group("concurrent");

    for threads in [2, 4, 8] {
        group.throughput(Throughput::Elements(threads as u64 * 100));
        group.bench_function(format!("{}_threads", threads), |b| {
            let logger = null_logger(JsonFormatter::new());
            b.iter(|| {
                let handles: Vec<_> = (0..threads)
                    .map(|t| {
                        let logger = logger.clone();
                        std::thread::spawn(move || {
                            for i in 0..100 {
                                logger.with_field("thread", t).with_field("i", i).write("entry");
                            }
                        })
                    })
                    .collect();
                for handle in handles {
                    let _ = handle.join();
                }
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_disabled_levels,
    bench_formatters,
    bench_logging,
    bench_concurrent_logging
);
criterion_main!(benches);
