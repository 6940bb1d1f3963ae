// benches/extract.rs
use criterion::{criterion_group, criterion_main, Criterion, black_box};

use lexi_scrape::{
    config::BodyFormat,
    core::records::decode_records,
    extract_from_body, extract_from_markup,
};

const PAGE: &str = include_str!("../tests/fixtures/run.html");

fn record_stream(page: &str) -> String {
    let mut raw = String::from("1:{\"stream\":\"definition\"}\n");
    for rec in [page, "[\"$\",\"hydrate\",null]", "self.__next_f.push([1]);"] {
        raw.push_str(&format!("{:x};{rec}", rec.chars().count()));
    }
    raw
}

fn bench_extract(c: &mut Criterion) {
    let stream = record_stream(PAGE);

    c.bench_function("decode_records", |b| {
        b.iter(|| {
            let html = decode_records(black_box(&stream)).unwrap_or_default();
            black_box(html.len())
        })
    });

    c.bench_function("extract_markup", |b| {
        b.iter(|| {
            let entries = extract_from_markup(black_box(PAGE)).unwrap_or_default();
            black_box(entries.len())
        })
    });

    c.bench_function("extract_record_stream", |b| {
        b.iter(|| {
            let entries = extract_from_body(black_box(&stream), BodyFormat::RecordStream).unwrap_or_default();
            black_box(entries.len())
        })
    });
}

criterion_group!(benches, bench_extract);
criterion_main!(benches);
