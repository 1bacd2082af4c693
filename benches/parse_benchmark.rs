//! Benchmarks for fieldtab parsing and rendering performance.
//!
//! Run with: cargo bench
//!
//! These benchmarks test the pipeline at various record sizes.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use fieldtab::render::{to_html, RenderOptions};
use fieldtab::{parse_str, Record};

/// Creates a synthetic export document with the given number of fields.
fn create_test_export(field_count: usize) -> String {
    let mut content = String::from(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<export>
  <row>"#,
    );

    for i in 0..field_count {
        if i == field_count / 2 {
            content.push_str("\n    <field name=\"reference\">Reference text for the record, long enough to resemble real exports.</field>");
        } else {
            content.push_str(&format!(
                "\n    <field name=\"field_{}\">Value {} with some realistic content</field>",
                i, i
            ));
        }
    }

    content.push_str("\n  </row>\n</export>");
    content
}

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");

    for field_count in [8usize, 64, 512, 4096] {
        let xml = create_test_export(field_count);
        group.throughput(Throughput::Bytes(xml.len() as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(field_count),
            &xml,
            |b, xml| {
                b.iter(|| parse_str(black_box(xml)).unwrap());
            },
        );
    }

    group.finish();
}

fn bench_render_html(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_html");
    let options = RenderOptions::default();

    for field_count in [8usize, 64, 512, 4096] {
        let record: Record = parse_str(&create_test_export(field_count)).unwrap();
        group.throughput(Throughput::Elements(field_count as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(field_count),
            &record,
            |b, record| {
                b.iter(|| to_html(black_box(record), &options).unwrap());
            },
        );
    }

    group.finish();
}

fn bench_pipeline(c: &mut Criterion) {
    let xml = create_test_export(64);
    let options = RenderOptions::default();

    c.bench_function("parse_and_render_64_fields", |b| {
        b.iter(|| {
            let record = parse_str(black_box(&xml)).unwrap();
            to_html(&record, &options).unwrap()
        });
    });
}

criterion_group!(benches, bench_parse, bench_render_html, bench_pipeline);
criterion_main!(benches);
