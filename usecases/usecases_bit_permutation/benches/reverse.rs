//! Benchmarks for swap-network bit reversal.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use usecases_bit_permutation::BitPermutation;

fn bench_reverse(c: &mut Criterion) {
    c.bench_function("reverse_bits16", |b| {
        b.iter(|| BitPermutation::reverse_bits16(black_box(0x1234)))
    });
    c.bench_function("reverse_bits64", |b| {
        b.iter(|| BitPermutation::reverse_bits64(black_box(0x0123_4567_89AB_CDEF)))
    });
}

criterion_group!(benches, bench_reverse);
criterion_main!(benches);
