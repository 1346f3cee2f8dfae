//! CSV codec benchmarks.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use tally_bench::synthetic_ledger;
use tally_codec::{from_csv, to_csv, CsvTranscoder, Transcoder};

/// Benchmark encoding ledgers of increasing size.
fn bench_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode");

    for movements in [1, 10, 100, 1000].iter() {
        let ledger = synthetic_ledger(*movements);
        group.throughput(Throughput::Elements(ledger.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(movements), &ledger, |b, ledger| {
            b.iter(|| {
                let result = to_csv(black_box(ledger));
                black_box(result);
            });
        });
    }
    group.finish();
}

/// Benchmark decoding ledgers of increasing size.
fn bench_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode");

    for movements in [1, 10, 100, 1000].iter() {
        let csv = to_csv(&synthetic_ledger(*movements));
        group.throughput(Throughput::Bytes(csv.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(movements), &csv, |b, csv| {
            b.iter(|| {
                let result = from_csv(black_box(csv)).unwrap();
                black_box(result);
            });
        });
    }
    group.finish();
}

/// Benchmark the transcoder round trip used by the store.
fn bench_transcoder(c: &mut Criterion) {
    let mut group = c.benchmark_group("transcoder");
    let ledger = synthetic_ledger(100);

    group.bench_function("encode_100", |b| {
        b.iter(|| {
            let result = CsvTranscoder::encode(black_box(&ledger)).unwrap();
            black_box(result);
        });
    });

    let encoded = CsvTranscoder::encode(&ledger).unwrap();
    group.bench_function("decode_100", |b| {
        b.iter(|| {
            let result = CsvTranscoder::decode(black_box(&encoded)).unwrap();
            black_box(result);
        });
    });

    group.finish();
}

criterion_group!(benches, bench_encode, bench_decode, bench_transcoder);
criterion_main!(benches);
