use criterion::{black_box, criterion_group, criterion_main, Criterion};
use impostor_odds::odds::{decode, enumerate_round, smart_chain, EnumerationOptions};

fn bench_decode(c: &mut Criterion) {
    c.bench_function("decode_eight_players", |b| {
        b.iter(|| decode(black_box(123_456), black_box(8)))
    });
}

fn bench_round_seven(c: &mut Criterion) {
    let options = EnumerationOptions::default();
    c.bench_function("enumerate_round_seven", |b| {
        b.iter(|| enumerate_round(black_box(7), &options).unwrap())
    });
}

fn bench_round_seven_parallel(c: &mut Criterion) {
    let options = EnumerationOptions {
        parallel: true,
        ..Default::default()
    };
    c.bench_function("enumerate_round_seven_parallel", |b| {
        b.iter(|| enumerate_round(black_box(7), &options).unwrap())
    });
}

fn bench_chain_seven(c: &mut Criterion) {
    let options = EnumerationOptions::default();
    c.bench_function("smart_chain_seven", |b| {
        b.iter(|| smart_chain(black_box(7), &options).unwrap())
    });
}

criterion_group!(
    benches,
    bench_decode,
    bench_round_seven,
    bench_round_seven_parallel,
    bench_chain_seven
);
criterion_main!(benches);
