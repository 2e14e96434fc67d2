use std::hint::black_box;

use canonical::{SegmentTokenizer, Tokenizer, WhitespaceTokenizer};
use criterion::{criterion_group, criterion_main, Criterion, Throughput};

fn bench_tokenize(c: &mut Criterion) {
    let segment = SegmentTokenizer::default();
    let whitespace = WhitespaceTokenizer;
    let mut group = c.benchmark_group("tokenize");

    for size in [64, 512, 4096, 32768] {
        let latin = "word ".repeat(size / 5);
        group.throughput(Throughput::Bytes(latin.len() as u64));
        group.bench_function(format!("segment_latin_{size}"), |b| {
            b.iter(|| segment.tokenize(black_box(&latin)))
        });
        group.bench_function(format!("whitespace_latin_{size}"), |b| {
            b.iter(|| whitespace.tokenize(black_box(&latin)))
        });

        let cjk = "人工智能改变世界".repeat(size / 24 + 1);
        group.throughput(Throughput::Bytes(cjk.len() as u64));
        group.bench_function(format!("segment_cjk_{size}"), |b| {
            b.iter(|| segment.tokenize(black_box(&cjk)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_tokenize);
criterion_main!(benches);
